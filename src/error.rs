use std::path::PathBuf;

use crate::grid::Position;

/// Reasons a level cannot be turned into a playable grid.
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("failed to read level file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("level has no rows")]
    NoRows,

    #[error("level rows are all empty")]
    NoColumns,

    #[error("level has no player start marker '@'")]
    MissingPlayerStart,

    #[error("level has more than one player start marker ({first} and {second})")]
    MultiplePlayerStarts { first: Position, second: Position },

    #[error("unknown level symbol {symbol:?} at {position}")]
    UnknownSymbol { symbol: char, position: Position },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("{position} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        position: Position,
        rows: i32,
        cols: i32,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
