use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Cell coordinates as (row, col)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Position { row, col }
    }

    /// Position shifted by (d_row, d_col)
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Position::new(self.row + d_row, self.col + d_col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// What a grid cell stores. The player is never stored in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    Wall,
    Empty,
}

impl Terrain {
    pub fn is_wall(self) -> bool {
        self == Terrain::Wall
    }
}

/// What lookups and windows emit: terrain plus the player overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Wall,
    Empty,
    PlayerStart,
}

impl Symbol {
    pub const WALL_CHAR: char = '#';
    pub const EMPTY_CHAR: char = '.';
    pub const PLAYER_CHAR: char = '@';

    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            Self::WALL_CHAR => Some(Symbol::Wall),
            Self::EMPTY_CHAR => Some(Symbol::Empty),
            Self::PLAYER_CHAR => Some(Symbol::PlayerStart),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Symbol::Wall => Self::WALL_CHAR,
            Symbol::Empty => Self::EMPTY_CHAR,
            Symbol::PlayerStart => Self::PLAYER_CHAR,
        }
    }

    /// Terrain underneath the symbol; the player always stands on empty ground.
    pub fn terrain(self) -> Terrain {
        match self {
            Symbol::Wall => Terrain::Wall,
            Symbol::Empty | Symbol::PlayerStart => Terrain::Empty,
        }
    }
}

impl From<Terrain> for Symbol {
    fn from(terrain: Terrain) -> Self {
        match terrain {
            Terrain::Wall => Symbol::Wall,
            Terrain::Empty => Symbol::Empty,
        }
    }
}

/// How coordinates outside the grid are resolved
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Addressing {
    /// Toroidal: coordinates are taken modulo the grid dimensions
    Wrapped,
    /// Coordinates outside the grid are rejected
    Bounded,
}

/// Rectangular tile grid stored row-major
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    pub rows: i32,
    pub cols: i32,
    cells: Vec<Terrain>,
}

impl Grid {
    /// Create a grid with every cell set to `fill`.
    ///
    /// Callers guarantee `rows >= 1` and `cols >= 1`; the level parser is the
    /// only place that builds grids from untrusted input.
    pub fn filled(rows: i32, cols: i32, fill: Terrain) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        Grid {
            rows,
            cols,
            cells: vec![fill; (rows * cols) as usize],
        }
    }

    pub(crate) fn from_cells(rows: i32, cols: i32, cells: Vec<Terrain>) -> Self {
        debug_assert_eq!(cells.len(), (rows * cols) as usize);
        Grid {
            rows,
            cols,
            cells,
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row >= 0 && pos.row < self.rows && pos.col >= 0 && pos.col < self.cols
    }

    /// Normalise a position according to the addressing mode.
    pub fn resolve(&self, pos: Position, addressing: Addressing) -> Result<Position, GridError> {
        match addressing {
            Addressing::Wrapped => Ok(self.wrap(pos)),
            Addressing::Bounded if self.contains(pos) => Ok(pos),
            Addressing::Bounded => Err(GridError::OutOfBounds {
                position: pos,
                rows: self.rows,
                cols: self.cols,
            }),
        }
    }

    /// Wrap a position onto the torus
    pub fn wrap(&self, pos: Position) -> Position {
        Position::new(pos.row.rem_euclid(self.rows), pos.col.rem_euclid(self.cols))
    }

    /// Terrain at (row, col). Wrapped lookups always succeed.
    pub fn cell_at(&self, row: i32, col: i32, addressing: Addressing) -> Result<Terrain, GridError> {
        let pos = self.resolve(Position::new(row, col), addressing)?;
        Ok(self.cells[self.index(pos)])
    }

    /// Set terrain at a bounded position
    pub fn set_cell(&mut self, pos: Position, terrain: Terrain) -> Result<(), GridError> {
        let pos = self.resolve(pos, Addressing::Bounded)?;
        let id = self.index(pos);
        self.cells[id] = terrain;
        Ok(())
    }

    /// Iterate every cell in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Position, Terrain)> + '_ {
        self.cells.iter().enumerate().map(|(id, &terrain)| {
            let id = id as i32;
            (Position::new(id / self.cols, id % self.cols), terrain)
        })
    }

    fn index(&self, pos: Position) -> usize {
        (pos.row * self.cols + pos.col) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn striped() -> Grid {
        // # . #
        // . . .
        let mut grid = Grid::filled(2, 3, Terrain::Empty);
        grid.set_cell(Position::new(0, 0), Terrain::Wall).unwrap();
        grid.set_cell(Position::new(0, 2), Terrain::Wall).unwrap();
        grid
    }

    #[test]
    fn test_wrapped_lookup_is_periodic() {
        let grid = striped();
        for row in 0..grid.rows {
            for col in 0..grid.cols {
                let base = grid.cell_at(row, col, Addressing::Wrapped).unwrap();
                for k in -3..=3 {
                    let shifted = grid
                        .cell_at(row + k * grid.rows, col + k * grid.cols, Addressing::Wrapped)
                        .unwrap();
                    assert_eq!(base, shifted, "k={} at ({}, {})", k, row, col);
                }
            }
        }
    }

    #[test]
    fn test_bounded_lookup_rejects_outside() {
        let grid = striped();
        assert_eq!(grid.cell_at(0, 1, Addressing::Bounded), Ok(Terrain::Empty));
        assert_eq!(
            grid.cell_at(-1, 0, Addressing::Bounded),
            Err(GridError::OutOfBounds {
                position: Position::new(-1, 0),
                rows: 2,
                cols: 3
            })
        );
        assert!(grid.cell_at(0, 3, Addressing::Bounded).is_err());
        assert!(grid.cell_at(2, 0, Addressing::Bounded).is_err());
    }

    #[test]
    fn test_negative_coordinates_wrap() {
        let grid = striped();
        assert_eq!(grid.wrap(Position::new(-1, -1)), Position::new(1, 2));
        assert_eq!(grid.cell_at(-2, -1, Addressing::Wrapped), Ok(Terrain::Wall));
    }

    #[test]
    fn test_set_cell_bounded() {
        let mut grid = Grid::filled(2, 2, Terrain::Empty);
        grid.set_cell(Position::new(1, 1), Terrain::Wall).unwrap();
        assert_eq!(grid.cell_at(1, 1, Addressing::Bounded), Ok(Terrain::Wall));

        // Out of bounds is an error and leaves the grid untouched
        let before = grid.clone();
        assert!(grid.set_cell(Position::new(5, 0), Terrain::Wall).is_err());
        assert!(grid.set_cell(Position::new(-1, 0), Terrain::Wall).is_err());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_iter_is_row_major() {
        let grid = striped();
        let walls: Vec<Position> = grid
            .iter()
            .filter(|(_, terrain)| terrain.is_wall())
            .map(|(pos, _)| pos)
            .collect();
        assert_eq!(walls, vec![Position::new(0, 0), Position::new(0, 2)]);
    }

    #[test]
    fn test_symbol_chars() {
        for ch in ['#', '.', '@'] {
            assert_eq!(Symbol::from_char(ch).map(Symbol::to_char), Some(ch));
        }
        assert_eq!(Symbol::from_char('x'), None);
        assert_eq!(Symbol::PlayerStart.terrain(), Terrain::Empty);
    }
}
