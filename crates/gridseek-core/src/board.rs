//! An editable board: the state a front end holds between searches.
//!
//! A [`Board`] records what the user has painted (obstacles, one start, one
//! goal) together with the cells currently highlighted as a path. Each edit
//! goes through [`Board::paint`] under the active [`PaintMode`]. A search
//! never looks at a `Board` directly; it takes a [`Grid`] produced by
//! [`Board::snapshot`].

use crate::error::{GridError, Role};
use crate::geom::{Bounds, Cell};
use crate::grid::Grid;

/// What a board cell currently holds. The variants are mutually exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    #[default]
    Empty,
    Obstacle,
    Start,
    Goal,
}

/// The active editing tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaintMode {
    /// Toggle obstacles.
    #[default]
    Obstacle,
    /// Move the start marker.
    Start,
    /// Move the goal marker.
    Goal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    bounds: Bounds,
    marks: Vec<Mark>,
    start: Option<Cell>,
    goal: Option<Cell>,
    mode: PaintMode,
    highlight: Vec<Cell>,
    // Per-cell membership of `highlight`, indexed like `marks`.
    lit: Vec<bool>,
}

impl Board {
    /// Create a blank board.
    pub fn new(rows: i32, cols: i32) -> Result<Self, GridError> {
        if rows <= 0 || cols <= 0 {
            return Err(GridError::EmptyDimensions { rows, cols });
        }
        let bounds = Bounds::new(rows, cols);
        Ok(Self {
            bounds,
            marks: vec![Mark::Empty; bounds.len()],
            start: None,
            goal: None,
            mode: PaintMode::default(),
            highlight: Vec::new(),
            lit: vec![false; bounds.len()],
        })
    }

    /// Change dimensions. Every mark and the highlight are discarded; the
    /// paint mode is kept.
    pub fn resize(&mut self, rows: i32, cols: i32) -> Result<(), GridError> {
        let mode = self.mode;
        *self = Self::new(rows, cols)?;
        self.mode = mode;
        Ok(())
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn start(&self) -> Option<Cell> {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Option<Cell> {
        self.goal
    }

    #[inline]
    pub fn mode(&self) -> PaintMode {
        self.mode
    }

    #[inline]
    pub fn set_mode(&mut self, mode: PaintMode) {
        self.mode = mode;
    }

    /// The mark at `c`, or `None` outside the board.
    pub fn mark(&self, c: Cell) -> Option<Mark> {
        self.bounds.index(c).map(|i| self.marks[i])
    }

    /// Apply the active paint mode to `c`. Returns whether anything changed.
    ///
    /// - [`PaintMode::Obstacle`] toggles: an obstacle is cleared, anything
    ///   else (including a start or goal marker) becomes an obstacle.
    /// - [`PaintMode::Start`] / [`PaintMode::Goal`] clear whatever `c` held
    ///   and the previous marker of the same kind, then place the marker.
    pub fn paint(&mut self, c: Cell) -> Result<bool, GridError> {
        let idx = self.bounds.index(c).ok_or(GridError::OutOfBounds {
            role: Role::Painted,
            cell: c,
            bounds: self.bounds,
        })?;
        let before = self.marks[idx];
        match self.mode {
            PaintMode::Obstacle => {
                let was_obstacle = before == Mark::Obstacle;
                self.neutralize(c);
                if !was_obstacle {
                    self.marks[idx] = Mark::Obstacle;
                }
            }
            PaintMode::Start => {
                self.neutralize(c);
                if let Some(prev) = self.start {
                    self.neutralize(prev);
                }
                self.marks[idx] = Mark::Start;
                self.start = Some(c);
            }
            PaintMode::Goal => {
                self.neutralize(c);
                if let Some(prev) = self.goal {
                    self.neutralize(prev);
                }
                self.marks[idx] = Mark::Goal;
                self.goal = Some(c);
            }
        }
        let changed = self.marks[idx] != before;
        if changed {
            log::trace!("painted {c} as {:?} (was {before:?})", self.marks[idx]);
        }
        Ok(changed)
    }

    /// A pointer event over `c`. Painting only happens while `pressed`.
    pub fn pointer(&mut self, c: Cell, pressed: bool) -> Result<bool, GridError> {
        if !pressed {
            return Ok(false);
        }
        self.paint(c)
    }

    /// Freeze the board into a [`Grid`] for one search.
    ///
    /// Fails with [`GridError::MissingStart`] / [`GridError::MissingGoal`]
    /// when a marker has not been placed yet.
    pub fn snapshot(&self) -> Result<Grid, GridError> {
        let start = self.start.ok_or(GridError::MissingStart)?;
        let goal = self.goal.ok_or(GridError::MissingGoal)?;
        Grid::new(
            self.bounds.rows,
            self.bounds.cols,
            self.obstacles(),
            start,
            goal,
        )
    }

    /// Every obstacle, in row-major order.
    pub fn obstacles(&self) -> impl Iterator<Item = Cell> + '_ {
        self.marks
            .iter()
            .enumerate()
            .filter(|(_, m)| **m == Mark::Obstacle)
            .map(|(i, _)| self.bounds.cell(i))
    }

    /// Cells currently shown as the path.
    #[inline]
    pub fn highlight(&self) -> &[Cell] {
        &self.highlight
    }

    /// Replace the highlighted path. Any previous highlight is dropped first.
    pub fn set_highlight(&mut self, cells: &[Cell]) {
        self.clear_highlight();
        for &c in cells {
            if let Some(idx) = self.bounds.index(c) {
                self.lit[idx] = true;
                self.highlight.push(c);
            }
        }
    }

    pub fn clear_highlight(&mut self) {
        for c in self.highlight.drain(..) {
            if let Some(idx) = self.bounds.index(c) {
                self.lit[idx] = false;
            }
        }
    }

    /// Whether `c` is part of the highlighted path. O(1).
    pub fn is_highlighted(&self, c: Cell) -> bool {
        self.bounds.index(c).is_some_and(|i| self.lit[i])
    }

    fn neutralize(&mut self, c: Cell) {
        let Some(idx) = self.bounds.index(c) else {
            return;
        };
        match self.marks[idx] {
            Mark::Start => self.start = None,
            Mark::Goal => self.goal = None,
            Mark::Obstacle | Mark::Empty => {}
        }
        self.marks[idx] = Mark::Empty;
    }
}
