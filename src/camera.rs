use serde::{Deserialize, Serialize};

use crate::grid::Position;
use crate::scene::Entity;

/// Width and height in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Size { width, height }
    }
}

/// Axis-aligned rectangle in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl ScreenRect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        ScreenRect { x, y, w, h }
    }

    pub fn translated(self, offset: CameraOffset) -> Self {
        ScreenRect::new(self.x + offset.dx, self.y + offset.dy, self.w, self.h)
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// Screen-space translation applied to every drawable
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraOffset {
    pub dx: f32,
    pub dy: f32,
}

/// Keeps a target centred on the screen.
///
/// The offset is recomputed from scratch on every `update`; nothing
/// accumulates between frames.
#[derive(Clone, Debug)]
pub struct Camera {
    tile: Size,
    offset: CameraOffset,
}

impl Camera {
    pub fn new(tile: Size) -> Self {
        Camera {
            tile,
            offset: CameraOffset::default(),
        }
    }

    pub fn offset(&self) -> CameraOffset {
        self.offset
    }

    /// Recompute the offset so the target's visual midpoint lands on the
    /// screen midpoint.
    pub fn update(&mut self, target: Position, target_size: Size, screen: Size) -> CameraOffset {
        self.offset = CameraOffset {
            dx: -(target.col as f32 * self.tile.width + target_size.width / 2.0)
                + screen.width / 2.0,
            dy: -(target.row as f32 * self.tile.height + target_size.height / 2.0)
                + screen.height / 2.0,
        };
        self.offset
    }

    /// World rectangle translated by the current offset
    pub fn screen_rect(&self, world: ScreenRect) -> ScreenRect {
        world.translated(self.offset)
    }

    /// Place an entity on screen. Its world rectangle is left untouched.
    pub fn apply(&self, entity: &mut Entity) {
        entity.screen = self.screen_rect(entity.world);
    }
}
