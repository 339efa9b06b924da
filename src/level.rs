//! Level text loading and validation.
//!
//! A level is a block of `#` (wall), `.` (empty) and exactly one `@` (player
//! start). Short lines are right-padded with `.` so the grid is rectangular.

use std::fs;
use std::path::Path;

use crate::error::{GridError, LevelError};
use crate::grid::{Addressing, Grid, Position, Symbol, Terrain};

/// A validated grid together with the player's focus position.
///
/// The focus is the only record of where the player stands; the grid itself
/// stores terrain only.
#[derive(Clone, Debug, PartialEq)]
pub struct Level {
    grid: Grid,
    focus: Position,
}

/// Read a level file, strip each line and pad to the longest line with `.`
pub fn load_level(path: &Path) -> Result<Vec<String>, LevelError> {
    let contents = fs::read_to_string(path).map_err(|source| LevelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    // Leading whitespace is stripped too, shifting indented rows left
    Ok(pad_rows(contents.lines().map(str::trim)))
}

/// Right-pad every row with the empty symbol to the longest row's length
pub fn pad_rows<I, S>(rows: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let rows: Vec<String> = rows.into_iter().map(|r| r.as_ref().to_string()).collect();
    let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);

    rows.into_iter()
        .map(|mut row| {
            let missing = width - row.chars().count();
            row.extend(std::iter::repeat(Symbol::EMPTY_CHAR).take(missing));
            row
        })
        .collect()
}

impl Level {
    /// Build a level from text rows. Rows are padded before validation.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, LevelError> {
        if rows.is_empty() {
            return Err(LevelError::NoRows);
        }

        let rows = pad_rows(rows);
        let cols = rows[0].chars().count();
        if cols == 0 {
            return Err(LevelError::NoColumns);
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        let mut focus: Option<Position> = None;

        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                let position = Position::new(r as i32, c as i32);
                let symbol = Symbol::from_char(ch)
                    .ok_or(LevelError::UnknownSymbol { symbol: ch, position })?;

                if symbol == Symbol::PlayerStart {
                    if let Some(first) = focus {
                        return Err(LevelError::MultiplePlayerStarts {
                            first,
                            second: position,
                        });
                    }
                    focus = Some(position);
                }
                cells.push(symbol.terrain());
            }
        }

        let focus = focus.ok_or(LevelError::MissingPlayerStart)?;
        let grid = Grid::from_cells(rows.len() as i32, cols as i32, cells);

        tracing::info!(
            rows = grid.rows,
            cols = grid.cols,
            %focus,
            "level parsed"
        );

        Ok(Level { grid, focus })
    }

    /// Load and parse a level file
    pub fn load(path: &Path) -> Result<Self, LevelError> {
        let rows = load_level(path)?;
        Self::parse(rows.as_slice())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn focus(&self) -> Position {
        self.focus
    }

    pub(crate) fn set_focus(&mut self, focus: Position) {
        self.focus = focus;
    }

    /// Symbol at (row, col) with the player marker derived from the focus
    pub fn symbol_at(&self, row: i32, col: i32, addressing: Addressing) -> Result<Symbol, GridError> {
        let pos = self.grid.resolve(Position::new(row, col), addressing)?;
        if pos == self.focus {
            return Ok(Symbol::PlayerStart);
        }
        Ok(self.grid.cell_at(pos.row, pos.col, Addressing::Bounded)?.into())
    }

    /// Whole level as `#.@` text, one line per row
    pub fn to_text(&self) -> String {
        let mut result = String::new();
        for (pos, terrain) in self.grid.iter() {
            let symbol = if pos == self.focus {
                Symbol::PlayerStart
            } else {
                Symbol::from(terrain)
            };
            result.push(symbol.to_char());
            if pos.col == self.grid.cols - 1 {
                result.push('\n');
            }
        }
        result
    }

    /// Focus is on a floor cell inside the grid
    pub fn is_consistent(&self) -> bool {
        matches!(
            self.grid.cell_at(self.focus.row, self.focus.col, Addressing::Bounded),
            Ok(Terrain::Empty)
        )
    }
}
