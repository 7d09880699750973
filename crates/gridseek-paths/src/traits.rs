use gridseek_core::{Bounds, Cell, Grid};

use crate::distance::manhattan;

/// The query surface a search runs against.
///
/// [`Grid`] implements it directly; other implementations can wrap their own
/// board representation as long as they keep the same neighbour order.
pub trait Pather {
    /// Dimensions of the searchable area.
    fn bounds(&self) -> Bounds;

    /// Append the in-bounds orthogonal neighbours of `c` into `buf` in the
    /// order up, left, right, down. The caller clears `buf` before calling.
    ///
    /// Searches trust this: a cell outside [`bounds`](Self::bounds) must
    /// never be appended.
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>);

    /// Whether a search may not step onto `c`.
    fn is_blocked(&self, c: Cell) -> bool;

    /// Heuristic estimate of the remaining step count. Must never
    /// overestimate (admissible).
    fn estimate(&self, from: Cell, to: Cell) -> i32 {
        manhattan(from, to)
    }
}

impl Pather for Grid {
    #[inline]
    fn bounds(&self) -> Bounds {
        Grid::bounds(self)
    }

    #[inline]
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        buf.extend(Grid::neighbors(self, c));
    }

    #[inline]
    fn is_blocked(&self, c: Cell) -> bool {
        Grid::is_blocked(self, c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astar::Searcher;
    use crate::route::Route;

    #[test]
    fn grid_neighbors_stay_in_bounds() {
        let g = Grid::new(3, 4, [Cell::new(1, 1)], Cell::new(0, 0), Cell::new(2, 3)).unwrap();
        let mut buf = Vec::new();
        for c in g.bounds().iter() {
            buf.clear();
            Pather::neighbors(&g, c, &mut buf);
            assert!(buf.iter().all(|n| g.contains(*n)), "{c}: {buf:?}");
            let expected: Vec<Cell> = c
                .neighbors_4()
                .into_iter()
                .filter(|n| g.contains(*n))
                .collect();
            assert_eq!(buf, expected);
        }
    }

    #[test]
    fn corner_neighbors_skip_off_grid_cells() {
        let g = Grid::new(2, 2, [], Cell::new(0, 0), Cell::new(1, 1)).unwrap();
        let mut buf = Vec::new();
        Pather::neighbors(&g, Cell::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Cell::new(0, 1), Cell::new(1, 0)]);
        buf.clear();
        Pather::neighbors(&g, Cell::new(1, 1), &mut buf);
        assert_eq!(buf, vec![Cell::new(0, 1), Cell::new(1, 0)]);
    }

    /// A one-row corridor that is not a `Grid`.
    struct Corridor {
        len: i32,
        wall: Option<i32>,
    }

    impl Pather for Corridor {
        fn bounds(&self) -> Bounds {
            Bounds::new(1, self.len)
        }

        fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
            if c.col > 0 {
                buf.push(Cell::new(0, c.col - 1));
            }
            if c.col + 1 < self.len {
                buf.push(Cell::new(0, c.col + 1));
            }
        }

        fn is_blocked(&self, c: Cell) -> bool {
            self.wall == Some(c.col)
        }
    }

    #[test]
    fn custom_pather_searches_along_corridor() {
        let s = Searcher::default();
        let open = Corridor { len: 5, wall: None };
        let route = s.find_path(&open, Cell::new(0, 4), Cell::new(0, 1)).unwrap();
        let path = route.into_path().unwrap();
        assert_eq!(path.cells(), &[Cell::new(0, 3), Cell::new(0, 2), Cell::new(0, 1)]);

        let walled = Corridor {
            len: 5,
            wall: Some(2),
        };
        assert_eq!(
            s.find_path(&walled, Cell::new(0, 0), Cell::new(0, 4)).unwrap(),
            Route::Unreachable
        );
    }
}
