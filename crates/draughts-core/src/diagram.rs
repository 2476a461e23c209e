//! Board diagram parsing and serialization.
//!
//! A diagram lists the eight rows separated by `/`, row 0 first. Within a
//! row, `b`/`r` mark black/red men, `B`/`R` black/red kings, and a digit
//! `1`-`8` a run of empty cells.

use crate::{Color, Coord, PieceKind};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing board diagrams.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagramError {
    #[error("invalid diagram: expected 8 rows, got {0}")]
    InvalidRowCount(usize),

    #[error("invalid character '{found}' in row {row}")]
    InvalidCharacter { row: usize, found: char },

    #[error("row {row} has {cells} cells, expected 8")]
    InvalidRowLength { row: usize, cells: u32 },
}

/// Contents of one diagram cell.
pub type Cell = Option<(PieceKind, Color)>;

/// Parsed diagram data.
///
/// This holds the raw cell contents. The engine is responsible for turning
/// it into a board with live pieces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramParser {
    cells: [[Cell; 8]; 8],
}

impl DiagramParser {
    /// The standard opening layout: 12 men per side on the dark cells.
    pub const STARTPOS: &'static str =
        "1b1b1b1b/b1b1b1b1/1b1b1b1b/8/8/r1r1r1r1/1r1r1r1r/r1r1r1r1";

    /// The diagram of a board with no pieces.
    pub const EMPTY: &'static str = "8/8/8/8/8/8/8/8";

    /// Parses a diagram string.
    pub fn parse(diagram: &str) -> Result<Self, DiagramError> {
        let rows: Vec<&str> = diagram.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(DiagramError::InvalidRowCount(rows.len()));
        }

        let mut cells = [[None; 8]; 8];
        for (row, text) in rows.iter().enumerate() {
            let mut col = 0u32;
            for c in text.chars() {
                if let Some(run @ 1..=8) = c.to_digit(10) {
                    col += run;
                } else if let Some(content) = PieceKind::from_diagram_char(c) {
                    if col < 8 {
                        cells[row][col as usize] = Some(content);
                    }
                    col += 1;
                } else {
                    return Err(DiagramError::InvalidCharacter { row, found: c });
                }
            }
            if col != 8 {
                return Err(DiagramError::InvalidRowLength { row, cells: col });
            }
        }

        Ok(DiagramParser { cells })
    }

    /// Builds a diagram from explicit cell contents.
    pub fn from_cells(cells: [[Cell; 8]; 8]) -> Self {
        DiagramParser { cells }
    }

    /// Returns the contents of a cell, or `None` when empty or off the board.
    pub fn cell(&self, coord: Coord) -> Cell {
        let (row, col) = coord.indices()?;
        self.cells[row][col]
    }

    /// Iterates over the occupied cells.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, PieceKind, Color)> + '_ {
        Coord::all().filter_map(|c| self.cell(c).map(|(kind, color)| (c, kind, color)))
    }

    /// Converts the parsed diagram back to its string form.
    pub fn to_diagram(&self) -> String {
        let mut out = String::new();
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                out.push('/');
            }
            let mut empty = 0;
            for cell in cells {
                match cell {
                    Some((kind, color)) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(kind.to_diagram_char(*color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
        }
        out
    }
}

impl Default for DiagramParser {
    fn default() -> Self {
        DiagramParser {
            cells: [[None; 8]; 8],
        }
    }
}

impl fmt::Display for DiagramParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_diagram())
    }
}
