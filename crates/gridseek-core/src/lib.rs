//! **gridseek-core** — grid model types for the gridseek pathfinder.
//!
//! This crate provides the data side of the workspace: cell coordinates and
//! board dimensions, the immutable [`Grid`] snapshot a search runs over, and
//! the editable [`Board`] a front end keeps between searches (paint modes,
//! start/goal markers, path highlight, plain-text map format).

pub mod board;
pub mod error;
pub mod geom;
pub mod grid;
pub mod text;

pub use board::{Board, Mark, PaintMode};
pub use error::{GridError, Role};
pub use geom::{Bounds, Cell};
pub use grid::Grid;
