//! Player color representation.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Represents the two sides in draughts.
///
/// Black sets up on rows 0-2 and advances toward row 7; Red sets up on
/// rows 5-7 and advances toward row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Red = 1,
}

/// Error returned when a color name cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid color '{0}': expected 'black' or 'red'")]
pub struct ParseColorError(pub String);

impl Color {
    /// Both colors in order.
    pub const ALL: [Color; 2] = [Color::Black, Color::Red];

    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Black => Color::Red,
            Color::Red => Color::Black,
        }
    }

    /// Returns the row delta a man of this color advances by (+1 for Black, -1 for Red).
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Black => 1,
            Color::Red => -1,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::Red => write!(f, "Red"),
        }
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "black" | "b" => Ok(Color::Black),
            "red" | "r" => Ok(Color::Red),
            _ => Err(ParseColorError(s.to_string())),
        }
    }
}
