//! Text rendering of the board.

use colored::{ColoredString, Colorize};
use draughts_core::{Color, Coord, BOARD_SIZE};
use draughts_engine::{Board, Piece};

/// Draws a board as text, one line per row.
///
/// Columns are labelled `A`-`H` and rows `1`-`8`, matching the algebraic
/// coordinates players type in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Renderer { color }
    }

    /// Renders the board, highlighting the piece at `selected` if any.
    pub fn render(&self, board: &Board, selected: Option<Coord>) -> String {
        let mut out = String::new();
        out.push_str(&self.header());
        out.push('\n');
        for row in 0..BOARD_SIZE {
            out.push_str(&self.row_label(row));
            out.push(' ');
            for col in 0..BOARD_SIZE {
                let coord = Coord::new(row, col);
                let cell = self.cell(board.get(coord), coord, selected == Some(coord));
                out.push_str(&cell);
            }
            out.push('\n');
        }
        out
    }

    fn header(&self) -> String {
        let text = "+ ABCDEFGH";
        if self.color {
            text.bright_white().on_black().to_string()
        } else {
            text.to_string()
        }
    }

    fn row_label(&self, row: i8) -> String {
        let text = (row + 1).to_string();
        if self.color {
            text.bright_white().on_black().to_string()
        } else {
            text
        }
    }

    fn cell(&self, piece: Option<&Piece>, coord: Coord, selected: bool) -> String {
        if !self.color {
            return match piece {
                Some(_) if selected => '*'.to_string(),
                Some(p) => p.kind().to_diagram_char(p.color()).to_string(),
                None if coord.is_playable() => '.'.to_string(),
                None => ' '.to_string(),
            };
        }

        let mut text: ColoredString = match piece {
            Some(p) => {
                let glyph = p.symbol().to_string();
                match p.color() {
                    Color::Black => glyph.bright_black(),
                    Color::Red => glyph.bright_red(),
                }
            }
            None => " ".normal(),
        };
        if selected {
            text = text.blink();
        }
        if coord.is_playable() {
            text.on_black().to_string()
        } else {
            text.on_red().to_string()
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer::new(true)
    }
}
