//! Board coordinate representation.

use std::fmt;
use std::ops::{Add, Sub};

/// Width and height of the draughts board.
pub const BOARD_SIZE: i8 = 8;

/// A (row, column) pair on the board.
///
/// Coordinates are signed so that arithmetic stepping off the edge of the
/// board stays representable; such coordinates are simply not
/// [on the board](Coord::is_on_board).
///
/// In algebraic form the column is a letter `a`-`h` and the row a digit
/// `1`-`8`, so `b3` is row 2, column 1.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    row: i8,
    col: i8,
}

impl Coord {
    /// Creates a coordinate from row and column.
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Coord { row, col }
    }

    /// Returns the row.
    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    /// Returns the column.
    #[inline]
    pub const fn col(self) -> i8 {
        self.col
    }

    /// Returns true if both components are in `0..8`.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Returns `(row, col)` as array indices, or `None` when off the board.
    #[inline]
    pub const fn indices(self) -> Option<(usize, usize)> {
        if self.is_on_board() {
            Some((self.row as usize, self.col as usize))
        } else {
            None
        }
    }

    /// Returns the cell halfway to `other`, using integer division on each axis.
    #[inline]
    pub const fn midpoint(self, other: Coord) -> Coord {
        Coord::new((self.row + other.row) / 2, (self.col + other.col) / 2)
    }

    /// Returns the delta toward `other` with each axis reduced to its sign.
    #[inline]
    pub const fn direction_to(self, other: Coord) -> Coord {
        Coord::new(
            (other.row - self.row).signum(),
            (other.col - self.col).signum(),
        )
    }

    /// Chebyshev distance to `other`.
    #[inline]
    pub fn distance(self, other: Coord) -> i8 {
        let d = other - self;
        d.row.abs().max(d.col.abs())
    }

    /// Returns true if `other` lies on one of the diagonals through this cell.
    #[inline]
    pub fn is_diagonal_to(self, other: Coord) -> bool {
        let d = other - self;
        d.row != 0 && d.row.abs() == d.col.abs()
    }

    /// Returns true for the dark cells pieces are played on (`row + col` odd).
    #[inline]
    pub const fn is_playable(self) -> bool {
        (self.row + self.col) % 2 != 0
    }

    /// Parses a coordinate from algebraic notation (e.g., "b3").
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let col = match bytes[0].to_ascii_lowercase() {
            c @ b'a'..=b'h' => (c - b'a') as i8,
            _ => return None,
        };
        let row = match bytes[1] {
            r @ b'1'..=b'8' => (r - b'1') as i8,
            _ => return None,
        };
        Some(Coord::new(row, col))
    }

    /// Returns the algebraic notation for this coordinate.
    ///
    /// Off-board coordinates fall back to the `(row,col)` form.
    pub fn to_algebraic(self) -> String {
        if self.is_on_board() {
            format!("{}{}", (b'a' + self.col as u8) as char, self.row + 1)
        } else {
            format!("({},{})", self.row, self.col)
        }
    }

    /// Iterates over every on-board coordinate, row by row.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord::new(row, col)))
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({},{})", self.row, self.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
