//! The per-level world: level state, camera and the drawable entity set.
//!
//! One `Scene` exists per loaded level. Movement mutates only the level's
//! focus; `refresh` then derives every entity's screen rectangle according to
//! the scene's [`Mode`]:
//!
//! - `Wrapping`: one persistent entity per cell at its fixed world rectangle.
//! - `Sliding`: the tile set is rebuilt every refresh from the window around
//!   the focus, built into a fresh vector and swapped in whole.
//! - `Scrolling`: one persistent entity per cell, translated by the camera.

use serde::{Deserialize, Serialize};

use crate::camera::{Camera, CameraOffset, ScreenRect, Size};
use crate::grid::{Addressing, Position, Symbol, Terrain};
use crate::input::{InputEvent, TickOutcome};
use crate::level::Level;
use crate::movement::{step_focus, Direction, MoveOutcome};
use crate::viewport::{derive_window, Window};

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Whole grid on screen, coordinates wrap around the edges
    Wrapping,
    /// Window of fixed radius around the player, rebuilt every frame
    Sliding,
    /// Whole level with a camera that follows the player
    #[default]
    Scrolling,
}

impl Mode {
    pub fn addressing(self) -> Addressing {
        match self {
            Mode::Wrapping | Mode::Sliding => Addressing::Wrapped,
            Mode::Scrolling => Addressing::Bounded,
        }
    }
}

/// Player sprite placement relative to its tile
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerVisual {
    pub inset_x: f32,
    pub inset_y: f32,
    pub size: Size,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneSettings {
    pub mode: Mode,
    pub radius: i32,
    pub tile: Size,
    pub screen: Size,
    pub player: PlayerVisual,
}

/// Which visual an entity is drawn with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Sprite {
    Wall,
    Empty,
    Player,
}

impl From<Terrain> for Sprite {
    fn from(terrain: Terrain) -> Self {
        match terrain {
            Terrain::Wall => Sprite::Wall,
            Terrain::Empty => Sprite::Empty,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub sprite: Sprite,
    /// Normalised grid cell the entity stands for
    pub cell: Position,
    /// Rectangle in level pixels, never moved by the camera
    pub world: ScreenRect,
    /// Where the renderer draws it this frame
    pub screen: ScreenRect,
}

/// Serialisable view of a scene for debugging
#[derive(Clone, Debug, Serialize)]
pub struct Snapshot {
    pub mode: Mode,
    pub frame: u64,
    pub focus: Position,
    pub camera: CameraOffset,
    pub entities: usize,
    pub view: Vec<String>,
}

pub struct Scene {
    level: Level,
    settings: SceneSettings,
    camera: Camera,
    tiles: Vec<Entity>,
    player: Entity,
    window: Option<Window>,
    frame: u64,
}

impl Scene {
    pub fn new(level: Level, settings: SceneSettings) -> Self {
        let tiles: Vec<Entity> = match settings.mode {
            Mode::Wrapping | Mode::Scrolling => level
                .grid()
                .iter()
                .map(|(cell, terrain)| {
                    let world = tile_rect(cell, settings.tile);
                    Entity {
                        sprite: terrain.into(),
                        cell,
                        world,
                        screen: world,
                    }
                })
                .collect(),
            Mode::Sliding => Vec::new(),
        };

        let focus = level.focus();
        let world = player_rect(focus, &settings);
        let player = Entity {
            sprite: Sprite::Player,
            cell: focus,
            world,
            screen: world,
        };

        let mut scene = Scene {
            level,
            camera: Camera::new(settings.tile),
            settings,
            tiles,
            player,
            window: None,
            frame: 0,
        };
        scene.refresh();
        scene
    }

    pub fn focus(&self) -> Position {
        self.level.focus()
    }

    pub fn camera_offset(&self) -> CameraOffset {
        self.camera.offset()
    }

    /// Window derived on the last refresh (sliding mode only)
    pub fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Tiles first, then the player, in draw order
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.tiles.iter().chain(std::iter::once(&self.player))
    }

    pub fn entity_count(&self) -> usize {
        self.tiles.len() + 1
    }

    pub fn player(&self) -> &Entity {
        &self.player
    }

    /// Apply one directional step to the focus
    pub fn handle(&mut self, direction: Direction) -> MoveOutcome {
        step_focus(&mut self.level, direction, self.settings.mode.addressing())
    }

    /// Drain one frame of input, then refresh the entity set once.
    pub fn tick(&mut self, events: &[InputEvent]) -> TickOutcome {
        for event in events {
            match *event {
                InputEvent::Move(direction) => {
                    self.handle(direction);
                }
                InputEvent::Quit => return TickOutcome::Quit,
                InputEvent::Press => {}
            }
        }
        self.refresh();
        TickOutcome::Continue
    }

    /// Recompute every entity's screen rectangle for the current focus.
    pub fn refresh(&mut self) {
        let focus = self.level.focus();
        let tile = self.settings.tile;
        self.player.cell = focus;

        match self.settings.mode {
            Mode::Wrapping => {
                self.player.world = player_rect(focus, &self.settings);
                self.player.screen = self.player.world;
            }
            Mode::Sliding => {
                let window = derive_window(&self.level, focus, self.settings.radius);
                let (origin_x, origin_y) = self.window_origin(window.radius);

                let fresh: Vec<Entity> = window
                    .iter()
                    .map(|(r, c, symbol)| {
                        let cell = self
                            .level
                            .grid()
                            .wrap(window.world_position(r as i32, c as i32));
                        Entity {
                            sprite: symbol_sprite(symbol),
                            cell,
                            world: tile_rect(cell, tile),
                            screen: ScreenRect::new(
                                origin_x + c as f32 * tile.width,
                                origin_y + r as f32 * tile.height,
                                tile.width,
                                tile.height,
                            ),
                        }
                    })
                    .collect();
                self.tiles = fresh;

                let center = window.radius as f32;
                self.player.world = player_rect(focus, &self.settings);
                self.player.screen = ScreenRect::new(
                    origin_x + center * tile.width + self.settings.player.inset_x,
                    origin_y + center * tile.height + self.settings.player.inset_y,
                    self.settings.player.size.width,
                    self.settings.player.size.height,
                );
                self.window = Some(window);
            }
            Mode::Scrolling => {
                // The camera centres the player's tile, not the inset sprite
                self.camera.update(focus, tile, self.settings.screen);
                for entity in &mut self.tiles {
                    self.camera.apply(entity);
                }
                self.player.world = player_rect(focus, &self.settings);
                self.camera.apply(&mut self.player);
            }
        }

        self.frame += 1;
    }

    /// Text form of what is on screen: the window in sliding mode,
    /// the whole level otherwise
    pub fn text_view(&self) -> String {
        match &self.window {
            Some(window) => window.to_text(),
            None => self.level.to_text(),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            mode: self.settings.mode,
            frame: self.frame,
            focus: self.level.focus(),
            camera: self.camera.offset(),
            entities: self.entity_count(),
            view: self.text_view().lines().map(str::to_string).collect(),
        }
    }

    pub fn snapshot_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.snapshot())
    }

    /// Top-left pixel of the window so that it is centred on screen
    fn window_origin(&self, radius: i32) -> (f32, f32) {
        let tile = self.settings.tile;
        let screen = self.settings.screen;
        (
            screen.width / 2.0 - (radius as f32 * tile.width + tile.width / 2.0),
            screen.height / 2.0 - (radius as f32 * tile.height + tile.height / 2.0),
        )
    }
}

fn symbol_sprite(symbol: Symbol) -> Sprite {
    symbol.terrain().into()
}

fn tile_rect(cell: Position, tile: Size) -> ScreenRect {
    ScreenRect::new(
        cell.col as f32 * tile.width,
        cell.row as f32 * tile.height,
        tile.width,
        tile.height,
    )
}

fn player_rect(focus: Position, settings: &SceneSettings) -> ScreenRect {
    let tile = tile_rect(focus, settings.tile);
    ScreenRect::new(
        tile.x + settings.player.inset_x,
        tile.y + settings.player.inset_y,
        settings.player.size.width,
        settings.player.size.height,
    )
}
