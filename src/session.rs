//! Lifecycle of a play session: `Uninitialized -> Loaded -> Running`.
//!
//! `Loaded` is the intro screen. Any key press or click moves on to
//! `Running` without being treated as a move. A quit event ends the session
//! from any phase.

use crate::error::LevelError;
use crate::input::{InputEvent, TickOutcome};
use crate::level::Level;
use crate::scene::{Scene, SceneSettings};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Loaded,
    Running,
}

#[derive(Default)]
pub enum Session {
    #[default]
    Uninitialized,
    Loaded(Scene),
    Running(Scene),
}

impl Session {
    pub fn new() -> Self {
        Session::Uninitialized
    }

    pub fn phase(&self) -> Phase {
        match self {
            Session::Uninitialized => Phase::Uninitialized,
            Session::Loaded(_) => Phase::Loaded,
            Session::Running(_) => Phase::Running,
        }
    }

    /// Validate the level and enter `Loaded`. On error the session is unchanged.
    pub fn load<S: AsRef<str>>(&mut self, rows: &[S], settings: SceneSettings) -> Result<(), LevelError> {
        let level = Level::parse(rows)?;
        self.load_level(level, settings);
        Ok(())
    }

    /// Enter `Loaded` with an already validated level
    pub fn load_level(&mut self, level: Level, settings: SceneSettings) {
        tracing::info!(mode = ?settings.mode, focus = %level.focus(), "level loaded");
        *self = Session::Loaded(Scene::new(level, settings));
    }

    /// `Loaded -> Running`. Returns false from any other phase.
    pub fn start(&mut self) -> bool {
        match std::mem::take(self) {
            Session::Loaded(scene) => {
                tracing::info!("session running");
                *self = Session::Running(scene);
                true
            }
            other => {
                *self = other;
                false
            }
        }
    }

    /// One frame of input for whichever phase the session is in.
    pub fn tick(&mut self, events: &[InputEvent]) -> TickOutcome {
        if let Session::Running(scene) = self {
            return scene.tick(events);
        }

        if events.contains(&InputEvent::Quit) {
            return TickOutcome::Quit;
        }

        // Any key dismisses the intro; the key itself is not a move
        if self.phase() == Phase::Loaded && !events.is_empty() {
            self.start();
        }
        TickOutcome::Continue
    }

    pub fn scene(&self) -> Option<&Scene> {
        match self {
            Session::Uninitialized => None,
            Session::Loaded(scene) | Session::Running(scene) => Some(scene),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Size;
    use crate::grid::Position;
    use crate::movement::Direction;
    use crate::scene::{Mode, PlayerVisual};

    fn settings() -> SceneSettings {
        SceneSettings {
            mode: Mode::Scrolling,
            radius: 2,
            tile: Size::new(50.0, 50.0),
            screen: Size::new(550.0, 550.0),
            player: PlayerVisual {
                inset_x: 0.0,
                inset_y: 0.0,
                size: Size::new(50.0, 50.0),
            },
        }
    }

    #[test]
    fn test_phases_in_order() {
        let mut session = Session::new();
        assert_eq!(session.phase(), Phase::Uninitialized);
        assert!(!session.start());

        session.load(&["@.."], settings()).unwrap();
        assert_eq!(session.phase(), Phase::Loaded);

        assert_eq!(session.tick(&[InputEvent::Press]), TickOutcome::Continue);
        assert_eq!(session.phase(), Phase::Running);
        assert!(!session.start());
    }

    #[test]
    fn test_intro_key_is_not_a_move() {
        let mut session = Session::new();
        session.load(&["@.."], settings()).unwrap();
        session.tick(&[InputEvent::Move(Direction::Right)]);
        assert_eq!(session.phase(), Phase::Running);
        assert_eq!(session.scene().unwrap().focus(), Position::new(0, 0));

        session.tick(&[InputEvent::Move(Direction::Right)]);
        assert_eq!(session.scene().unwrap().focus(), Position::new(0, 1));
    }

    #[test]
    fn test_malformed_level_never_loads() {
        let mut session = Session::new();
        assert!(session.load(&["..."], settings()).is_err());
        assert_eq!(session.phase(), Phase::Uninitialized);
        assert!(session.scene().is_none());
    }

    #[test]
    fn test_quit_after_intro_key_still_quits() {
        let mut session = Session::new();
        session.load(&["@.."], settings()).unwrap();
        let outcome = session.tick(&[InputEvent::Move(Direction::Right), InputEvent::Quit]);
        assert_eq!(outcome, TickOutcome::Quit);
        assert_eq!(session.phase(), Phase::Loaded);
    }

    #[test]
    fn test_quit_from_every_phase() {
        let mut session = Session::new();
        assert_eq!(session.tick(&[InputEvent::Quit]), TickOutcome::Quit);

        session.load(&["@"], settings()).unwrap();
        assert_eq!(session.tick(&[InputEvent::Quit]), TickOutcome::Quit);
        assert_eq!(session.phase(), Phase::Loaded);

        session.start();
        assert_eq!(session.tick(&[InputEvent::Quit]), TickOutcome::Quit);
    }
}
