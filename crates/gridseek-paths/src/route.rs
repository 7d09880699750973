use gridseek_core::Cell;

/// The cells walked from start to goal, start excluded, goal included.
///
/// Empty when start and goal coincide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of steps, which is also the number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    pub fn contains(&self, c: Cell) -> bool {
        self.cells.contains(&c)
    }

    /// Whether every step, starting with `start` to the first cell, moves
    /// exactly one unit along one axis.
    pub fn is_contiguous_from(&self, start: Cell) -> bool {
        let mut prev = start;
        for &c in &self.cells {
            if !prev.is_adjacent(c) {
                return false;
            }
            prev = c;
        }
        true
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Outcome of one search.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "outcome", content = "path", rename_all = "snake_case")
)]
pub enum Route {
    Found(Path),
    /// No 4-connected chain of free cells links start to goal.
    Unreachable,
}

impl Route {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Route::Found(_))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Route::Found(p) => Some(p),
            Route::Unreachable => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            Route::Found(p) => Some(p),
            Route::Unreachable => None,
        }
    }
}
