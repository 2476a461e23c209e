//! Core types for English draughts.
//!
//! This crate provides the fundamental types used across the engine:
//! - [`Color`] for the two sides
//! - [`Coord`] for board coordinates
//! - [`PieceKind`] for men and kings
//! - Board diagram parsing and serialization

mod color;
mod coord;
mod diagram;
mod piece;

pub use color::{Color, ParseColorError};
pub use coord::{Coord, BOARD_SIZE};
pub use diagram::{Cell, DiagramError, DiagramParser};
pub use piece::PieceKind;
