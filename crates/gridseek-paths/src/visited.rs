use gridseek_core::{Bounds, Cell};

/// How a cell was reached when it was closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Link {
    /// Not closed (yet).
    #[default]
    Open,
    /// Closed without a predecessor: the start of the search.
    Root,
    /// Closed after being reached from the given neighbour.
    Via(Cell),
}

/// Closed set plus backpointers, one slot per grid cell.
///
/// A cell is closed at most once; later attempts to close it are ignored.
#[derive(Debug, Clone)]
pub struct VisitedTable {
    bounds: Bounds,
    links: Vec<Link>,
    closed: usize,
}

impl VisitedTable {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            links: vec![Link::Open; bounds.len()],
            closed: 0,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Close `cell` with its predecessor. Returns `false` if `cell` was
    /// already closed or lies outside the table.
    pub fn close(&mut self, cell: Cell, from: Option<Cell>) -> bool {
        let Some(i) = self.bounds.index(cell) else {
            return false;
        };
        if self.links[i] != Link::Open {
            return false;
        }
        self.links[i] = match from {
            Some(prev) => Link::Via(prev),
            None => Link::Root,
        };
        self.closed += 1;
        true
    }

    #[inline]
    pub fn is_closed(&self, cell: Cell) -> bool {
        self.link(cell) != Link::Open
    }

    /// The link recorded for `cell`. Out-of-bounds cells are [`Link::Open`].
    #[inline]
    pub fn link(&self, cell: Cell) -> Link {
        self.bounds
            .index(cell)
            .map_or(Link::Open, |i| self.links[i])
    }

    /// Number of closed cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.closed
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.closed == 0
    }
}
