use serde::{Deserialize, Serialize};

use crate::grid::{Addressing, Position};
use crate::level::Level;

/// One orthogonal step
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// (d_row, d_col); rows grow downwards
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Result of resolving a single step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The step was accepted; carries the new normalised position
    Moved(Position),
    /// The candidate cell is a wall
    Blocked(Position),
    /// The candidate lies outside a bounded grid
    OutOfBounds(Position),
    /// The candidate wrapped back onto the current cell (1-wide grids)
    Stationary,
}

impl MoveOutcome {
    pub fn is_accepted(self) -> bool {
        matches!(self, MoveOutcome::Moved(_))
    }
}

/// Decide where a step from `current` lands without changing anything.
pub fn resolve_move(
    level: &Level,
    current: Position,
    direction: Direction,
    addressing: Addressing,
) -> MoveOutcome {
    let (d_row, d_col) = direction.delta();
    let candidate = current.offset(d_row, d_col);
    let grid = level.grid();

    let resolved = match grid.resolve(candidate, addressing) {
        Ok(pos) => pos,
        Err(_) => return MoveOutcome::OutOfBounds(candidate),
    };

    if resolved == current {
        return MoveOutcome::Stationary;
    }

    match grid.cell_at(resolved.row, resolved.col, addressing) {
        Ok(terrain) if terrain.is_wall() => MoveOutcome::Blocked(resolved),
        Ok(_) => MoveOutcome::Moved(resolved),
        Err(_) => MoveOutcome::OutOfBounds(candidate),
    }
}

/// Position after attempting a step; rejected steps return `current`.
pub fn try_move(
    level: &Level,
    current: Position,
    direction: Direction,
    addressing: Addressing,
) -> Position {
    match resolve_move(level, current, direction, addressing) {
        MoveOutcome::Moved(pos) => pos,
        _ => current,
    }
}

/// Apply one step to the level's focus. All-or-nothing.
pub fn step_focus(level: &mut Level, direction: Direction, addressing: Addressing) -> MoveOutcome {
    let outcome = resolve_move(level, level.focus(), direction, addressing);
    if let MoveOutcome::Moved(pos) = outcome {
        tracing::debug!(?direction, from = %level.focus(), to = %pos, "player moved");
        level.set_focus(pos);
    }
    outcome
}
