pub mod camera;
pub mod config;
pub mod error;
pub mod grid;
pub mod input;
pub mod level;
pub mod movement;
pub mod pacer;
pub mod scene;
pub mod session;
pub mod viewport;

pub use camera::{Camera, CameraOffset, ScreenRect, Size};
pub use config::Config;
pub use error::{ConfigError, GridError, LevelError};
pub use grid::{Addressing, Grid, Position, Symbol, Terrain};
pub use input::{InputEvent, TickOutcome};
pub use level::Level;
pub use movement::{resolve_move, try_move, Direction, MoveOutcome};
pub use scene::{Entity, Mode, Scene, SceneSettings, Sprite};
pub use session::{Phase, Session};
pub use viewport::{derive_window, Window};
