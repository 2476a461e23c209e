//! Piece kind representation.

use crate::Color;

/// The two kinds of draughtsmen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Man = 0,
    King = 1,
}

impl PieceKind {
    /// Returns the diagram character for this kind with the given color.
    pub const fn to_diagram_char(self, color: Color) -> char {
        match (self, color) {
            (PieceKind::Man, Color::Black) => 'b',
            (PieceKind::King, Color::Black) => 'B',
            (PieceKind::Man, Color::Red) => 'r',
            (PieceKind::King, Color::Red) => 'R',
        }
    }

    /// Parses a diagram character into a kind and color.
    pub const fn from_diagram_char(c: char) -> Option<(PieceKind, Color)> {
        match c {
            'b' => Some((PieceKind::Man, Color::Black)),
            'B' => Some((PieceKind::King, Color::Black)),
            'r' => Some((PieceKind::Man, Color::Red)),
            'R' => Some((PieceKind::King, Color::Red)),
            _ => None,
        }
    }

    /// Returns the glyph used when drawing the board.
    pub const fn glyph(self) -> char {
        match self {
            PieceKind::Man => '◉',
            PieceKind::King => '✪',
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PieceKind::Man => write!(f, "Man"),
            PieceKind::King => write!(f, "King"),
        }
    }
}
