use std::fmt;

use gridseek_core::{Bounds, Cell, GridError, Role};
use thiserror::Error;

/// How a predecessor chain failed to lead back to the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainFault {
    /// The walk reached a cell that was never closed.
    Unvisited,
    /// The walk reached a root entry that is not the start.
    ForeignRoot,
    /// The walk took more steps than there are cells.
    Cycle,
}

impl fmt::Display for ChainFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ChainFault::Unvisited => "cell was never closed",
            ChainFault::ForeignRoot => "chain ends at a root other than start",
            ChainFault::Cycle => "chain is longer than the grid",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Start or goal lies outside the searchable area.
    #[error("{role} cell {cell} lies outside {bounds}")]
    OutOfBounds {
        role: Role,
        cell: Cell,
        bounds: Bounds,
    },

    /// Path reconstruction could not walk back to the start. This is an
    /// engine defect, never a statement about the board.
    #[error("broken predecessor chain at {at}: {fault}")]
    BrokenChain { at: Cell, fault: ChainFault },

    #[error(transparent)]
    Grid(#[from] GridError),
}
