use std::collections::VecDeque;

use gridseek_core::{Bounds, Cell};

use crate::traits::Pather;

/// Unit-cost distances from one source cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap {
    bounds: Bounds,
    source: Cell,
    dist: Vec<Option<u32>>,
}

impl DistanceMap {
    #[inline]
    pub fn source(&self) -> Cell {
        self.source
    }

    /// Steps from the source to `c`, or `None` if `c` is unreachable or out
    /// of bounds.
    pub fn at(&self, c: Cell) -> Option<u32> {
        self.bounds.index(c).and_then(|i| self.dist[i])
    }

    /// Number of cells reached, the source included.
    pub fn reached(&self) -> usize {
        self.dist.iter().filter(|d| d.is_some()).count()
    }
}

/// Breadth-first distances from `source` under the same passability rules a
/// search uses. The source is always reached, even if it is blocked.
pub fn bfs_distances<P: Pather>(pather: &P, source: Cell) -> DistanceMap {
    let bounds = pather.bounds();
    let mut dist = vec![None; bounds.len()];
    let mut queue: VecDeque<Cell> = VecDeque::new();

    if let Some(si) = bounds.index(source) {
        dist[si] = Some(0);
        queue.push_back(source);
    }

    let mut nbuf = Vec::with_capacity(4);
    while let Some(cur) = queue.pop_front() {
        let Some(d) = bounds.index(cur).and_then(|i| dist[i]) else {
            continue;
        };
        nbuf.clear();
        pather.neighbors(cur, &mut nbuf);
        for &n in &nbuf {
            let Some(ni) = bounds.index(n) else {
                continue;
            };
            if dist[ni].is_some() || pather.is_blocked(n) {
                continue;
            }
            dist[ni] = Some(d + 1);
            queue.push_back(n);
        }
    }

    DistanceMap {
        bounds,
        source,
        dist,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridseek_core::Grid;

    #[test]
    fn distances_around_wall() {
        // .#.
        // .#.
        // ...
        let g = Grid::new(
            3,
            3,
            [Cell::new(0, 1), Cell::new(1, 1)],
            Cell::new(0, 0),
            Cell::new(0, 2),
        )
        .unwrap();
        let d = bfs_distances(&g, Cell::new(0, 0));
        assert_eq!(d.source(), Cell::new(0, 0));
        assert_eq!(d.at(Cell::new(0, 0)), Some(0));
        assert_eq!(d.at(Cell::new(2, 1)), Some(3));
        assert_eq!(d.at(Cell::new(0, 2)), Some(6));
        assert_eq!(d.at(Cell::new(1, 1)), None);
        assert_eq!(d.at(Cell::new(7, 7)), None);
        assert_eq!(d.reached(), 7);
    }

    #[test]
    fn sealed_source_reaches_only_itself() {
        let g = Grid::new(
            2,
            2,
            [Cell::new(0, 1), Cell::new(1, 0)],
            Cell::new(0, 0),
            Cell::new(1, 1),
        )
        .unwrap();
        let d = bfs_distances(&g, Cell::new(0, 0));
        assert_eq!(d.reached(), 1);
        assert_eq!(d.at(Cell::new(1, 1)), None);
    }
}
