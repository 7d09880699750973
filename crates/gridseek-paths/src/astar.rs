use gridseek_core::{Cell, Grid, Role};

use crate::config::{FrontierKind, SearchConfig};
use crate::error::SearchError;
use crate::frontier::{Entry, HeapFrontier, Offer, OpenSet, ScanFrontier};
use crate::reconstruct::reconstruct;
use crate::route::Route;
use crate::traits::Pather;
use crate::visited::VisitedTable;

/// A* over 4-connected unit-cost grids.
///
/// A `Searcher` carries configuration only. Every call allocates its own
/// open set and visited table and drops them on return.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Searcher {
    config: SearchConfig,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Shortest path from `start` to `goal`.
    ///
    /// Returns [`Route::Unreachable`] when the goal cannot be reached and
    /// fails fast with [`SearchError::OutOfBounds`] if either endpoint is
    /// outside the pather's bounds. The goal is always treated as
    /// traversable, whatever [`Pather::is_blocked`] says about it.
    ///
    /// Among several shortest paths the result is fixed by two rules: the
    /// neighbour order up, left, right, down, and first-inserted-wins among
    /// open entries of equal `f`.
    pub fn find_path<P: Pather>(
        &self,
        pather: &P,
        start: Cell,
        goal: Cell,
    ) -> Result<Route, SearchError> {
        let bounds = pather.bounds();
        for (role, cell) in [(Role::Start, start), (Role::Goal, goal)] {
            if !bounds.contains(cell) {
                return Err(SearchError::OutOfBounds { role, cell, bounds });
            }
        }

        match self.config.frontier {
            FrontierKind::Heap => run(pather, HeapFrontier::new(bounds), start, goal),
            FrontierKind::Scan => run(pather, ScanFrontier::new(), start, goal),
        }
    }

    /// Search the grid's own start and goal.
    pub fn solve(&self, grid: &Grid) -> Result<Route, SearchError> {
        self.find_path(grid, grid.start(), grid.goal())
    }
}

/// Shortest path on `grid` with the default configuration.
pub fn find_path(grid: &Grid, start: Cell, goal: Cell) -> Result<Route, SearchError> {
    Searcher::default().find_path(grid, start, goal)
}

fn run<P: Pather, O: OpenSet>(
    pather: &P,
    mut open: O,
    start: Cell,
    goal: Cell,
) -> Result<Route, SearchError> {
    let mut visited = VisitedTable::new(pather.bounds());

    open.offer(Entry {
        cell: start,
        g: 0,
        h: pather.estimate(start, goal),
        from: None,
    });

    let mut nbuf = Vec::with_capacity(4);
    let mut peak = open.len();

    loop {
        let Some(current) = open.pop_best() else {
            log::debug!(
                "no route {start} -> {goal}: {} cells closed, frontier peaked at {peak}",
                visited.len()
            );
            return Ok(Route::Unreachable);
        };

        visited.close(current.cell, current.from);

        if current.cell == goal {
            break;
        }

        nbuf.clear();
        pather.neighbors(current.cell, &mut nbuf);

        for &n in &nbuf {
            if visited.is_closed(n) {
                log::trace!("{n} already closed");
                continue;
            }
            if n != goal && pather.is_blocked(n) {
                log::trace!("{n} blocked");
                continue;
            }
            let offer = open.offer(Entry {
                cell: n,
                g: current.g + 1,
                h: pather.estimate(n, goal),
                from: Some(current.cell),
            });
            if offer != Offer::Kept {
                log::trace!("{n} {offer:?} via {}", current.cell);
            }
        }
        peak = peak.max(open.len());
    }

    let path = reconstruct(&visited, start, goal)?;
    log::debug!(
        "route {start} -> {goal}: {} steps, {} cells closed, frontier peaked at {peak}",
        path.len(),
        visited.len()
    );
    Ok(Route::Found(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::bfs_distances;
    use crate::route::Path;
    use gridseek_core::{Board, Bounds};
    use rand::{Rng, RngExt, SeedableRng};

    fn grid(map: &str) -> Grid {
        map.parse::<Board>().unwrap().snapshot().unwrap()
    }

    fn path_of(route: Route) -> Path {
        route.into_path().expect("expected a route")
    }

    fn scan() -> Searcher {
        Searcher::new(SearchConfig {
            frontier: FrontierKind::Scan,
        })
    }

    fn random_grid(rng: &mut impl Rng) -> Grid {
        let rows = rng.random_range(1..9);
        let cols = rng.random_range(1..9);
        let density = rng.random_range(0..45);
        let bounds = Bounds::new(rows, cols);
        let obstacles: Vec<Cell> = bounds
            .iter()
            .filter(|_| rng.random_range(0..100) < density)
            .collect();
        let start = Cell::new(rng.random_range(0..rows), rng.random_range(0..cols));
        let goal = Cell::new(rng.random_range(0..rows), rng.random_range(0..cols));
        Grid::new(rows, cols, obstacles, start, goal).unwrap()
    }

    #[test]
    fn searcher_reports_its_frontier() {
        assert_eq!(Searcher::default().config().frontier, FrontierKind::Heap);
        assert_eq!(scan().config().frontier, FrontierKind::Scan);
    }

    #[test]
    fn open_grid_route_follows_tie_break() {
        let g = grid(
            "
            S..
            ...
            ..G
        ",
        );
        let p = path_of(find_path(&g, g.start(), g.goal()).unwrap());
        assert_eq!(
            p.cells(),
            &[
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(1, 2),
                Cell::new(2, 2),
            ]
        );
    }

    #[test]
    fn full_wall_is_unreachable() {
        let g = grid(
            "
            .S.
            ###
            .G.
        ",
        );
        assert_eq!(Searcher::default().solve(&g).unwrap(), Route::Unreachable);
        assert_eq!(scan().solve(&g).unwrap(), Route::Unreachable);
    }

    #[test]
    fn single_row_walks_right() {
        let g = grid("S...G");
        let p = path_of(Searcher::default().solve(&g).unwrap());
        assert_eq!(p.len(), 4);
        let cols: Vec<i32> = p.iter().map(|c| c.col).collect();
        assert_eq!(cols, vec![1, 2, 3, 4]);
        assert!(p.iter().all(|c| c.row == 0));
    }

    #[test]
    fn start_equals_goal_is_empty_path() {
        let g = Grid::new(3, 3, [], Cell::new(1, 1), Cell::new(1, 1)).unwrap();
        let route = find_path(&g, Cell::new(1, 1), Cell::new(1, 1)).unwrap();
        assert_eq!(route, Route::Found(Path::default()));
    }

    #[test]
    fn routes_through_single_gap() {
        let g = grid(
            "
            S....
            .....
            ###.#
            .....
            G....
        ",
        );
        let p = path_of(Searcher::default().solve(&g).unwrap());
        assert!(p.contains(Cell::new(2, 3)));
        assert_eq!(p.len(), 10);
        assert!(p.is_contiguous_from(g.start()));
    }

    #[test]
    fn blocked_goal_is_still_reachable() {
        let start = Cell::new(0, 0);
        let goal = Cell::new(0, 2);
        let g = Grid::new(1, 3, [goal], start, goal).unwrap();
        let p = path_of(find_path(&g, start, goal).unwrap());
        assert_eq!(p.cells(), &[Cell::new(0, 1), goal]);
    }

    #[test]
    fn goal_override_applies_to_caller_endpoints() {
        // The grid's own goal is elsewhere; the requested goal is marked.
        let g = Grid::new(1, 3, [Cell::new(0, 2)], Cell::new(0, 0), Cell::new(0, 1)).unwrap();
        let p = path_of(find_path(&g, Cell::new(0, 0), Cell::new(0, 2)).unwrap());
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn walled_in_start_is_unreachable() {
        let g = grid(
            "
            S#.
            #..
            ..G
        ",
        );
        assert_eq!(Searcher::default().solve(&g).unwrap(), Route::Unreachable);
    }

    #[test]
    fn out_of_bounds_endpoints_fail_fast() {
        let g = Grid::new(2, 2, [], Cell::new(0, 0), Cell::new(1, 1)).unwrap();
        let err = find_path(&g, Cell::new(2, 0), Cell::new(1, 1)).unwrap_err();
        assert!(matches!(
            err,
            SearchError::OutOfBounds {
                role: Role::Start,
                ..
            }
        ));
        let err = find_path(&g, Cell::new(0, 0), Cell::new(0, -1)).unwrap_err();
        assert!(matches!(
            err,
            SearchError::OutOfBounds {
                role: Role::Goal,
                ..
            }
        ));
    }

    #[test]
    fn repeated_searches_are_identical() {
        let g = grid(
            "
            S.#..
            ..#..
            .....
            .#.#.
            ....G
        ",
        );
        let s = Searcher::default();
        let first = s.solve(&g).unwrap();
        for _ in 0..5 {
            assert_eq!(s.solve(&g).unwrap(), first);
        }
    }

    #[test]
    fn random_grids_match_bfs() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0x5eed);
        for _ in 0..400 {
            let g = random_grid(&mut rng);
            let route = Searcher::default().solve(&g).unwrap();
            let oracle = bfs_distances(&g, g.start()).at(g.goal());

            match (&route, oracle) {
                (Route::Found(p), Some(d)) => {
                    assert_eq!(p.len(), d as usize, "non-optimal route on {g:?}");
                    assert!(p.is_contiguous_from(g.start()));
                    assert!(p.iter().all(|c| !g.is_blocked(*c)));
                    assert!(p.iter().all(|c| *c != g.start()));
                    if let Some(last) = p.cells().last() {
                        assert_eq!(*last, g.goal());
                    }
                }
                (Route::Unreachable, None) => {}
                _ => panic!("route {route:?} disagrees with bfs {oracle:?} on {g:?}"),
            }
        }
    }

    #[test]
    fn heap_and_scan_agree_exactly() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let heap = Searcher::default();
        let scan = scan();
        for _ in 0..400 {
            let g = random_grid(&mut rng);
            assert_eq!(heap.solve(&g).unwrap(), scan.solve(&g).unwrap(), "{g:?}");
        }
    }
}
