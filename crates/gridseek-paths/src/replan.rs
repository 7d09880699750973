//! Re-run a search after a board edit and show the outcome on the board.

use gridseek_core::{Board, GridError};

use crate::astar::Searcher;
use crate::error::SearchError;
use crate::route::Route;

/// What [`replan`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replan {
    /// Start or goal is missing; no search was run.
    Idle,
    /// A search ran and produced this route.
    Routed(Route),
}

/// Search the board's current state once.
///
/// The previous highlight is always cleared first, so a stale path never
/// survives an edit. A found path is highlighted; an unreachable goal leaves
/// the board without highlight.
pub fn replan(board: &mut Board, searcher: &Searcher) -> Result<Replan, SearchError> {
    board.clear_highlight();

    let grid = match board.snapshot() {
        Ok(g) => g,
        Err(e @ (GridError::MissingStart | GridError::MissingGoal)) => {
            log::debug!("not searching: {e}");
            return Ok(Replan::Idle);
        }
        Err(e) => return Err(e.into()),
    };

    let route = searcher.solve(&grid)?;
    if let Route::Found(path) = &route {
        board.set_highlight(path.cells());
    }
    Ok(Replan::Routed(route))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridseek_core::{Cell, PaintMode};

    #[test]
    fn idle_without_markers() {
        let mut b = Board::new(3, 3).unwrap();
        b.set_highlight(&[Cell::new(1, 1)]);
        assert_eq!(replan(&mut b, &Searcher::default()).unwrap(), Replan::Idle);
        assert!(b.highlight().is_empty());
    }

    #[test]
    fn highlights_found_path() {
        let mut b: Board = "S.G".parse().unwrap();
        let out = replan(&mut b, &Searcher::default()).unwrap();
        assert!(matches!(out, Replan::Routed(Route::Found(_))));
        assert_eq!(b.highlight(), &[Cell::new(0, 1), Cell::new(0, 2)]);
        assert_eq!(b.to_string(), "S*G\n");
    }

    #[test]
    fn edit_that_cuts_route_clears_highlight() {
        let mut b: Board = "S.G".parse().unwrap();
        let s = Searcher::default();
        replan(&mut b, &s).unwrap();
        assert!(!b.highlight().is_empty());

        b.set_mode(PaintMode::Obstacle);
        assert!(b.pointer(Cell::new(0, 1), true).unwrap());
        let out = replan(&mut b, &s).unwrap();
        assert_eq!(out, Replan::Routed(Route::Unreachable));
        assert!(b.highlight().is_empty());
        assert_eq!(b.to_string(), "S#G\n");
    }

    #[test]
    fn moving_goal_replans() {
        let mut b: Board = "
            S..
            .#.
            G..
        "
        .parse()
        .unwrap();
        let s = Searcher::default();
        replan(&mut b, &s).unwrap();
        assert_eq!(b.highlight(), &[Cell::new(1, 0), Cell::new(2, 0)]);

        b.set_mode(PaintMode::Goal);
        b.paint(Cell::new(0, 2)).unwrap();
        replan(&mut b, &s).unwrap();
        assert_eq!(b.highlight(), &[Cell::new(0, 1), Cell::new(0, 2)]);
    }
}
