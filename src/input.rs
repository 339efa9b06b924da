use crate::movement::Direction;

/// Discrete input delivered to the simulation once per frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// Directional key press
    Move(Direction),
    /// Any other key press or mouse click
    Press,
    /// Window close / escape
    Quit,
}

/// Whether the outer loop keeps going after a tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Quit,
}
