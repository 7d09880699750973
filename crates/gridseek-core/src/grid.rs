//! The [`Grid`] type: an immutable snapshot handed to a search.
//!
//! A `Grid` owns its dimensions, a flat obstacle table and exactly one start
//! and one goal cell. It is rebuilt from scratch whenever the board changes,
//! so nothing here is ever mutated after construction.

use crate::error::{GridError, Role};
use crate::geom::{Bounds, Cell};

/// Snapshot of a board: dimensions, obstacles, start and goal.
///
/// Start and goal are always traversable. If the obstacle set also contains
/// one of them, [`is_blocked`](Grid::is_blocked) still reports `false` for it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GridSpec", into = "GridSpec")
)]
pub struct Grid {
    bounds: Bounds,
    blocked: Vec<bool>,
    start: Cell,
    goal: Cell,
}

impl Grid {
    /// Build a snapshot, validating dimensions and every coordinate.
    pub fn new(
        rows: i32,
        cols: i32,
        obstacles: impl IntoIterator<Item = Cell>,
        start: Cell,
        goal: Cell,
    ) -> Result<Self, GridError> {
        if rows <= 0 || cols <= 0 {
            return Err(GridError::EmptyDimensions { rows, cols });
        }
        let bounds = Bounds::new(rows, cols);
        let check = |role: Role, cell: Cell| {
            bounds
                .index(cell)
                .ok_or(GridError::OutOfBounds { role, cell, bounds })
        };
        check(Role::Start, start)?;
        check(Role::Goal, goal)?;

        let mut blocked = vec![false; bounds.len()];
        for cell in obstacles {
            blocked[check(Role::Obstacle, cell)?] = true;
        }

        Ok(Self {
            bounds,
            blocked,
            start,
            goal,
        })
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    #[inline]
    pub fn columns(&self) -> i32 {
        self.bounds.cols
    }

    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Whether `c` is inside the grid.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        self.bounds.contains(c)
    }

    /// Whether a search must refuse to step onto `c`.
    ///
    /// Start and goal are never blocked. Cells outside the grid are not in
    /// the obstacle set and report `false`; use [`neighbors`](Self::neighbors)
    /// to stay in bounds.
    #[inline]
    pub fn is_blocked(&self, c: Cell) -> bool {
        if c == self.start || c == self.goal {
            return false;
        }
        self.is_marked(c)
    }

    /// Raw obstacle-set membership, ignoring the start/goal override.
    #[inline]
    pub fn is_marked(&self, c: Cell) -> bool {
        self.bounds.index(c).is_some_and(|i| self.blocked[i])
    }

    /// In-bounds orthogonal neighbours of `c`, in the fixed order up, left,
    /// right, down. Blocked cells are *not* filtered out.
    pub fn neighbors(&self, c: Cell) -> impl Iterator<Item = Cell> + '_ {
        c.neighbors_4()
            .into_iter()
            .filter(move |n| self.contains(*n))
    }

    /// Every marked obstacle, in row-major order.
    pub fn obstacles(&self) -> impl Iterator<Item = Cell> + '_ {
        self.blocked
            .iter()
            .enumerate()
            .filter(|(_, b)| **b)
            .map(|(i, _)| self.bounds.cell(i))
    }

    /// Number of marked obstacles.
    pub fn obstacle_count(&self) -> usize {
        self.blocked.iter().filter(|b| **b).count()
    }
}

/// Wire shape of a [`Grid`]; deserializing re-runs validation.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridSpec {
    rows: i32,
    cols: i32,
    obstacles: Vec<Cell>,
    start: Cell,
    goal: Cell,
}

#[cfg(feature = "serde")]
impl TryFrom<GridSpec> for Grid {
    type Error = GridError;

    fn try_from(s: GridSpec) -> Result<Self, GridError> {
        Grid::new(s.rows, s.cols, s.obstacles, s.start, s.goal)
    }
}

#[cfg(feature = "serde")]
impl From<Grid> for GridSpec {
    fn from(g: Grid) -> Self {
        GridSpec {
            rows: g.rows(),
            cols: g.columns(),
            obstacles: g.obstacles().collect(),
            start: g.start,
            goal: g.goal,
        }
    }
}
