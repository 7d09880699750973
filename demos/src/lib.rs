//! Shared pieces of the `seek` demo: random board generation, terminal
//! rendering and the JSON report.
//!
//! Demonstrates: building a board through paint modes, replanning after
//! edits, and showing the highlighted route with crossterm colours.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use gridseek_core::{Board, Bounds, Cell, GridError, Mark, PaintMode, text};
use gridseek_paths::Route;
use rand::{Rng, RngExt};

// Colours
const COL_OBSTACLE: Color = Color::Rgb {
    r: 100,
    g: 100,
    b: 130,
};
const COL_FREE: Color = Color::Rgb {
    r: 60,
    g: 55,
    b: 50,
};
const COL_PATH: Color = Color::Rgb {
    r: 50,
    g: 180,
    b: 255,
};
const COL_START: Color = Color::Rgb {
    r: 80,
    g: 200,
    b: 80,
};
const COL_GOAL: Color = Color::Rgb {
    r: 255,
    g: 220,
    b: 80,
};

/// Parameters for a randomly generated board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSpec {
    pub rows: i32,
    pub cols: i32,
    /// Percentage of cells painted as obstacles, 0 to 100.
    pub density: u8,
}

impl Default for BoardSpec {
    fn default() -> Self {
        Self {
            rows: 12,
            cols: 24,
            density: 25,
        }
    }
}

/// Generate a board the way a user would draw one: paint obstacles, then
/// drop the start and goal markers (which overwrite anything beneath them).
pub fn random_board(spec: BoardSpec, rng: &mut impl Rng) -> Result<Board, GridError> {
    let mut board = Board::new(spec.rows, spec.cols)?;
    let bounds = board.bounds();

    board.set_mode(PaintMode::Obstacle);
    for c in bounds.iter() {
        if rng.random_range(0..100u8) < spec.density {
            board.paint(c)?;
        }
    }

    let start = random_cell(bounds, rng);
    let mut goal = random_cell(bounds, rng);
    if bounds.len() > 1 {
        while goal == start {
            goal = random_cell(bounds, rng);
        }
    }

    board.set_mode(PaintMode::Start);
    board.paint(start)?;
    board.set_mode(PaintMode::Goal);
    board.paint(goal)?;
    board.set_mode(PaintMode::Obstacle);
    log::debug!(
        "generated {bounds} board, {} obstacles, {start} -> {goal}",
        board.obstacles().count()
    );
    Ok(board)
}

fn random_cell(bounds: Bounds, rng: &mut impl Rng) -> Cell {
    Cell::new(
        rng.random_range(0..bounds.rows),
        rng.random_range(0..bounds.cols),
    )
}

/// Write the board to `out`, one text row per board row. With `color` the
/// glyphs are tinted with crossterm; without it the output is exactly the
/// plain-text map format.
pub fn render(board: &Board, out: &mut impl Write, color: bool) -> io::Result<()> {
    if !color {
        return write!(out, "{board}");
    }
    let b = board.bounds();
    for row in 0..b.rows {
        for col in 0..b.cols {
            let c = Cell::new(row, col);
            let (glyph, fg) = match board.mark(c).unwrap_or_default() {
                Mark::Obstacle => (text::OBSTACLE, COL_OBSTACLE),
                Mark::Start => (text::START, COL_START),
                Mark::Goal => (text::GOAL, COL_GOAL),
                Mark::Empty if board.is_highlighted(c) => (text::PATH, COL_PATH),
                Mark::Empty => (text::FREE, COL_FREE),
            };
            queue!(out, SetForegroundColor(fg), Print(glyph))?;
        }
        queue!(out, ResetColor, Print('\n'))?;
    }
    out.flush()
}

/// One-line human summary of a search outcome.
pub fn summary(route: &Route) -> String {
    match route {
        Route::Found(p) if p.is_empty() => "start is the goal: empty path".to_string(),
        Route::Found(p) => format!("path found: {} steps", p.len()),
        Route::Unreachable => "no path: goal is unreachable".to_string(),
    }
}

/// Machine-readable result printed by `seek --json`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Report {
    pub bounds: Bounds,
    pub start: Option<Cell>,
    pub goal: Option<Cell>,
    pub obstacles: usize,
    /// `None` when no search ran.
    pub route: Option<Route>,
}

impl Report {
    pub fn new(board: &Board, route: Option<Route>) -> Self {
        Self {
            bounds: board.bounds(),
            start: board.start(),
            goal: board.goal(),
            obstacles: board.obstacles().count(),
            route,
        }
    }
}
