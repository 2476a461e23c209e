//! Draughtsman representation.
//!
//! Men and kings share one type. What separates them is the set of row
//! directions the piece may travel in: a man has its single forward
//! direction, a king has both.

use draughts_core::{Color, Coord, PieceKind};

/// Allowed row deltas for a piece, with a fixed capacity of two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Directions {
    dirs: [i8; 2],
    len: u8,
}

impl Directions {
    /// Creates a direction set holding only `forward`.
    #[inline]
    pub const fn single(forward: i8) -> Self {
        Directions {
            dirs: [forward, -forward],
            len: 1,
        }
    }

    /// Returns the allowed row deltas.
    #[inline]
    pub fn as_slice(&self) -> &[i8] {
        &self.dirs[..self.len as usize]
    }

    /// Returns the number of allowed row deltas (1 or 2).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Returns true if no direction is allowed.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds the reverse of the original direction. Returns false when
    /// already present.
    #[inline]
    fn add_reverse(&mut self) -> bool {
        if self.len >= 2 {
            return false;
        }
        self.len = 2;
        true
    }
}

/// A single draughtsman or king.
///
/// The piece records its own coordinate; a board keeps that coordinate in
/// sync with the cell the piece sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    color: Color,
    position: Coord,
    directions: Directions,
}

impl Piece {
    /// Creates a man moving in its color's forward direction.
    pub const fn new(color: Color, position: Coord) -> Self {
        Piece {
            color,
            position,
            directions: Directions::single(color.forward()),
        }
    }

    /// Creates an already-crowned king.
    pub fn king(color: Color, position: Coord) -> Self {
        let mut piece = Piece::new(color, position);
        piece.promote();
        piece
    }

    /// Creates a piece of the given kind.
    pub fn with_kind(kind: PieceKind, color: Color, position: Coord) -> Self {
        match kind {
            PieceKind::Man => Piece::new(color, position),
            PieceKind::King => Piece::king(color, position),
        }
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub const fn position(&self) -> Coord {
        self.position
    }

    #[inline]
    pub(crate) fn set_position(&mut self, position: Coord) {
        self.position = position;
    }

    #[inline]
    pub const fn directions(&self) -> &Directions {
        &self.directions
    }

    /// Returns true once the piece has been crowned.
    #[inline]
    pub const fn is_king(&self) -> bool {
        self.directions.len() == 2
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        if self.is_king() {
            PieceKind::King
        } else {
            PieceKind::Man
        }
    }

    /// Single-step deltas this piece may move by: `(d, +1)` and `(d, -1)`
    /// for each allowed row direction `d`.
    pub fn move_diffs(&self) -> impl Iterator<Item = Coord> + '_ {
        self.directions
            .as_slice()
            .iter()
            .flat_map(|&d| [Coord::new(d, 1), Coord::new(d, -1)])
    }

    /// Returns true if the normalized `delta` is one of [`move_diffs`](Self::move_diffs).
    pub fn allows(&self, delta: Coord) -> bool {
        self.move_diffs().any(|d| d == delta)
    }

    /// Crowns the piece. Returns true only on the man-to-king transition.
    pub fn promote(&mut self) -> bool {
        self.directions.add_reverse()
    }

    /// Returns true if a piece standing on `row` is due for promotion.
    #[inline]
    pub const fn is_promotion_row(row: i8) -> bool {
        row == 0 || row == 7
    }

    /// Glyph used when drawing the piece.
    pub const fn symbol(&self) -> char {
        self.kind().glyph()
    }
}
