//! Square window of symbols around a focus position.
//!
//! The window is derived from scratch on every call. Lookups always use
//! wrapped addressing, so the window is `2 * radius + 1` cells on a side
//! regardless of where the focus sits or how small the grid is.

use crate::grid::{Addressing, Position, Symbol};
use crate::level::Level;

/// Largest radius a window is derived with; larger requests are clamped
pub const MAX_RADIUS: i32 = 64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Window {
    /// World position of the top-left window cell (not normalised)
    pub origin: Position,
    pub radius: i32,
    pub cells: Vec<Vec<Symbol>>,
}

impl Window {
    /// Cells per side
    pub fn side(&self) -> i32 {
        2 * self.radius + 1
    }

    /// Window-local indices back to an unwrapped world position
    pub fn world_position(&self, local_row: i32, local_col: i32) -> Position {
        self.origin.offset(local_row, local_col)
    }

    /// Iterate (local_row, local_col, symbol)
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Symbol)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().map(move |(c, &symbol)| (r, c, symbol))
        })
    }

    pub fn to_text(&self) -> String {
        let mut result = String::new();
        for row in &self.cells {
            result.extend(row.iter().map(|s| s.to_char()));
            result.push('\n');
        }
        result
    }
}

/// Derive the window of `radius` around `focus`, both ends inclusive.
///
/// The radius is clamped to `0..=MAX_RADIUS`.
pub fn derive_window(level: &Level, focus: Position, radius: i32) -> Window {
    let radius = radius.clamp(0, MAX_RADIUS);
    let origin = focus.offset(-radius, -radius);

    let cells: Vec<Vec<Symbol>> = (focus.row - radius..=focus.row + radius)
        .map(|row| {
            (focus.col - radius..=focus.col + radius)
                .map(|col| wrapped_symbol(level, row, col))
                .collect()
        })
        .collect();

    Window {
        origin,
        radius,
        cells,
    }
}

fn wrapped_symbol(level: &Level, row: i32, col: i32) -> Symbol {
    // Wrapped lookups never fail
    level
        .symbol_at(row, col, Addressing::Wrapped)
        .unwrap_or(Symbol::Empty)
}
