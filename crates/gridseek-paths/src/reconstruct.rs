use gridseek_core::Cell;

use crate::error::{ChainFault, SearchError};
use crate::route::Path;
use crate::visited::{Link, VisitedTable};

/// Walk backpointers from `goal` to `start` and return the path in
/// start-to-goal order, start excluded and goal included.
///
/// The walk is capped at the number of cells in the table. Any chain that
/// fails to reach `start` is reported as [`SearchError::BrokenChain`].
pub fn reconstruct(visited: &VisitedTable, start: Cell, goal: Cell) -> Result<Path, SearchError> {
    let limit = visited.bounds().len();
    let mut cells = Vec::new();
    let mut cur = goal;

    while cur != start {
        if cells.len() >= limit {
            return Err(SearchError::BrokenChain {
                at: cur,
                fault: ChainFault::Cycle,
            });
        }
        cells.push(cur);
        cur = match visited.link(cur) {
            Link::Via(prev) => prev,
            Link::Root => {
                return Err(SearchError::BrokenChain {
                    at: cur,
                    fault: ChainFault::ForeignRoot,
                });
            }
            Link::Open => {
                return Err(SearchError::BrokenChain {
                    at: cur,
                    fault: ChainFault::Unvisited,
                });
            }
        };
    }

    cells.reverse();
    Ok(Path::new(cells))
}
