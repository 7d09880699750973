//! Plain-text board format.
//!
//! One line per row, every row the same width:
//!
//! | Glyph | Meaning |
//! |---|---|
//! | `.` | free cell |
//! | `#` | obstacle |
//! | `S` | start |
//! | `G` | goal |
//! | `*` | free cell that is part of the highlighted path |
//!
//! Blank lines and surrounding whitespace are ignored, so maps can be
//! written as indented string literals.

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, Mark, PaintMode};
use crate::error::{GridError, Role};
use crate::geom::Cell;

pub const FREE: char = '.';
pub const OBSTACLE: char = '#';
pub const START: char = 'S';
pub const GOAL: char = 'G';
pub const PATH: char = '*';

impl FromStr for Board {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let Some(first) = rows.first() else {
            return Err(GridError::EmptyMap);
        };
        let width = first.chars().count();

        let mut board = Board::new(rows.len() as i32, width as i32)?;
        let mut highlight = Vec::new();
        for (r, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridError::RaggedRow {
                    row: r,
                    expected: width,
                    found,
                });
            }
            for (c, glyph) in line.chars().enumerate() {
                let cell = Cell::new(r as i32, c as i32);
                let mode = match glyph {
                    FREE => continue,
                    PATH => {
                        highlight.push(cell);
                        continue;
                    }
                    OBSTACLE => PaintMode::Obstacle,
                    START => {
                        if board.start().is_some() {
                            return Err(GridError::DuplicateMarker {
                                role: Role::Start,
                                cell,
                            });
                        }
                        PaintMode::Start
                    }
                    GOAL => {
                        if board.goal().is_some() {
                            return Err(GridError::DuplicateMarker {
                                role: Role::Goal,
                                cell,
                            });
                        }
                        PaintMode::Goal
                    }
                    _ => {
                        return Err(GridError::UnknownGlyph {
                            glyph,
                            row: r,
                            col: c,
                        });
                    }
                };
                board.set_mode(mode);
                board.paint(cell)?;
            }
        }
        board.set_mode(PaintMode::default());
        board.set_highlight(&highlight);
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.bounds();
        for row in 0..b.rows {
            for col in 0..b.cols {
                let c = Cell::new(row, col);
                let glyph = match self.mark(c).unwrap_or_default() {
                    Mark::Obstacle => OBSTACLE,
                    Mark::Start => START,
                    Mark::Goal => GOAL,
                    Mark::Empty if self.is_highlighted(c) => PATH,
                    Mark::Empty => FREE,
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Bounds;

    #[test]
    fn parse_basic_map() {
        let b: Board = "
            S..
            .#.
            ..G
        "
        .parse()
        .unwrap();
        assert_eq!(b.bounds(), Bounds::new(3, 3));
        assert_eq!(b.start(), Some(Cell::new(0, 0)));
        assert_eq!(b.goal(), Some(Cell::new(2, 2)));
        assert_eq!(b.obstacles().collect::<Vec<_>>(), vec![Cell::new(1, 1)]);
        assert_eq!(b.mode(), PaintMode::Obstacle);
    }

    #[test]
    fn display_round_trips() {
        let src = "S*#\n.*.\n.*G\n";
        let b: Board = src.parse().unwrap();
        assert_eq!(b.highlight().len(), 3);
        assert_eq!(b.to_string(), src);
    }

    #[test]
    fn missing_markers_still_parse() {
        let b: Board = "..\n#.".parse().unwrap();
        assert_eq!(b.start(), None);
        assert!(b.snapshot().is_err());
    }

    #[test]
    fn empty_map_rejected() {
        assert_eq!("".parse::<Board>().unwrap_err(), GridError::EmptyMap);
        assert_eq!("  \n\n".parse::<Board>().unwrap_err(), GridError::EmptyMap);
    }

    #[test]
    fn ragged_row_rejected() {
        let err = "...\n..\n".parse::<Board>().unwrap_err();
        assert_eq!(
            err,
            GridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn unknown_glyph_rejected() {
        let err = "..\n.x".parse::<Board>().unwrap_err();
        assert_eq!(
            err,
            GridError::UnknownGlyph {
                glyph: 'x',
                row: 1,
                col: 1
            }
        );
    }

    #[test]
    fn duplicate_start_rejected() {
        let err = "S.S".parse::<Board>().unwrap_err();
        assert_eq!(
            err,
            GridError::DuplicateMarker {
                role: Role::Start,
                cell: Cell::new(0, 2)
            }
        );
        assert!("G.G".parse::<Board>().is_err());
    }
}
