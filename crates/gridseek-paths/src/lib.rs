//! Shortest paths on 4-connected grids.
//!
//! The engine is a classic A*: unit step cost, Manhattan heuristic, a
//! closed set that never reopens a cell, and an open set whose tie-breaking
//! is fully specified so that the same board always yields the same route.
//!
//! - [`find_path`] / [`Searcher::find_path`] run one search and return a
//!   [`Route`]: either a [`Path`] or [`Route::Unreachable`].
//! - [`reconstruct`] turns a [`VisitedTable`] into a [`Path`].
//! - [`bfs_distances`] computes plain breadth-first distances, useful as an
//!   independent check of optimality.
//! - [`replan`] runs a search for an editable
//!   [`Board`](gridseek_core::Board) and updates its highlight.
//!
//! Any type implementing [`Pather`] can be searched; [`Grid`](gridseek_core::Grid)
//! implements it out of the box.

mod astar;
mod bfs;
mod config;
mod distance;
mod error;
mod frontier;
mod reconstruct;
mod replan;
mod route;
mod traits;
mod visited;

pub use astar::{Searcher, find_path};
pub use bfs::{DistanceMap, bfs_distances};
pub use config::{FrontierKind, SearchConfig};
pub use distance::manhattan;
pub use error::{ChainFault, SearchError};
pub use reconstruct::reconstruct;
pub use replan::{Replan, replan};
pub use route::{Path, Route};
pub use traits::Pather;
pub use visited::{Link, VisitedTable};
