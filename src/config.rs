use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::camera::Size;
use crate::error::ConfigError;
use crate::scene::{Mode, PlayerVisual, SceneSettings};
use crate::viewport::MAX_RADIUS;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub level: LevelConfig,
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
}

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_window_title")]
    pub title: String,
    #[serde(default = "default_screen_width")]
    pub width: u32,
    #[serde(default = "default_screen_height")]
    pub height: u32,
    #[serde(default = "default_fps")]
    pub fps: u32,
}

#[derive(Debug, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_tile_width")]
    pub tile_width: f32,
    #[serde(default = "default_tile_height")]
    pub tile_height: f32,
}

#[derive(Debug, Deserialize)]
pub struct LevelConfig {
    #[serde(default = "default_level_path")]
    pub path: PathBuf,
    #[serde(default)]
    pub mode: Mode,
    /// Window radius for the sliding mode
    #[serde(default = "default_radius")]
    pub radius: i32,
}

/// Player sprite placement inside its tile
#[derive(Debug, Deserialize)]
pub struct PlayerConfig {
    #[serde(default = "default_player_inset_x")]
    pub inset_x: f32,
    #[serde(default = "default_player_inset_y")]
    pub inset_y: f32,
    #[serde(default = "default_player_width")]
    pub width: f32,
    #[serde(default = "default_player_height")]
    pub height: f32,
}

#[derive(Debug, Deserialize)]
pub struct AssetsConfig {
    #[serde(default = "default_wall_image")]
    pub wall: PathBuf,
    #[serde(default = "default_empty_image")]
    pub empty: PathBuf,
    #[serde(default = "default_player_image")]
    pub player: PathBuf,
    #[serde(default = "default_intro_image")]
    pub intro: PathBuf,
}

// Default values
fn default_window_title() -> String { "Tilewalk".to_string() }
fn default_screen_width() -> u32 { 550 }
fn default_screen_height() -> u32 { 550 }
fn default_fps() -> u32 { 30 }
fn default_tile_width() -> f32 { 50.0 }
fn default_tile_height() -> f32 { 50.0 }
fn default_level_path() -> PathBuf { PathBuf::from("data/map.txt") }
fn default_radius() -> i32 { 3 }
fn default_player_inset_x() -> f32 { 15.0 }
fn default_player_inset_y() -> f32 { 5.0 }
fn default_player_width() -> f32 { 20.0 }
fn default_player_height() -> f32 { 40.0 }
fn default_wall_image() -> PathBuf { PathBuf::from("data/box.png") }
fn default_empty_image() -> PathBuf { PathBuf::from("data/grass.png") }
fn default_player_image() -> PathBuf { PathBuf::from("data/mar.png") }
fn default_intro_image() -> PathBuf { PathBuf::from("data/fon.jpg") }

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_window_title(),
            width: default_screen_width(),
            height: default_screen_height(),
            fps: default_fps(),
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            tile_width: default_tile_width(),
            tile_height: default_tile_height(),
        }
    }
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            path: default_level_path(),
            mode: Mode::default(),
            radius: default_radius(),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            inset_x: default_player_inset_x(),
            inset_y: default_player_inset_y(),
            width: default_player_width(),
            height: default_player_height(),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            wall: default_wall_image(),
            empty: default_empty_image(),
            player: default_player_image(),
            intro: default_intro_image(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            grid: GridConfig::default(),
            level: LevelConfig::default(),
            player: PlayerConfig::default(),
            assets: AssetsConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, or use defaults if it is missing or invalid
    pub fn load(path: &Path) -> Self {
        match Self::from_file(path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded configuration");
                config
            }
            Err(ConfigError::Io { .. }) => {
                tracing::info!(path = %path.display(), "no config file found, using defaults");
                Config::default()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "using default configuration");
                Config::default()
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn screen_size(&self) -> Size {
        Size::new(self.window.width as f32, self.window.height as f32)
    }

    pub fn tile_size(&self) -> Size {
        Size::new(self.grid.tile_width, self.grid.tile_height)
    }

    /// Sliding window radius limited to `0..=MAX_RADIUS`
    pub fn radius(&self) -> i32 {
        let radius = self.level.radius.clamp(0, MAX_RADIUS);
        if radius != self.level.radius {
            tracing::warn!(
                requested = self.level.radius,
                using = radius,
                "window radius out of range"
            );
        }
        radius
    }

    pub fn scene_settings(&self) -> SceneSettings {
        SceneSettings {
            mode: self.level.mode,
            radius: self.radius(),
            tile: self.tile_size(),
            screen: self.screen_size(),
            player: PlayerVisual {
                inset_x: self.player.inset_x,
                inset_y: self.player.inset_y,
                size: Size::new(self.player.width, self.player.height),
            },
        }
    }
}
