//! Errors raised while building grids and boards.

use thiserror::Error;

use crate::geom::{Bounds, Cell};

/// What a cell was supposed to be when it failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Start,
    Goal,
    Obstacle,
    Painted,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Role::Start => "start",
            Role::Goal => "goal",
            Role::Obstacle => "obstacle",
            Role::Painted => "painted",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    EmptyDimensions { rows: i32, cols: i32 },

    #[error("{role} cell {cell} lies outside {bounds}")]
    OutOfBounds {
        role: Role,
        cell: Cell,
        bounds: Bounds,
    },

    #[error("board has no start cell")]
    MissingStart,

    #[error("board has no goal cell")]
    MissingGoal,

    #[error("unknown map glyph {glyph:?} at row {row}, column {col}")]
    UnknownGlyph { glyph: char, row: usize, col: usize },

    #[error("map row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("map marks more than one {role} (second at {cell})")]
    DuplicateMarker { role: Role, cell: Cell },

    #[error("map contains no rows")]
    EmptyMap,
}
