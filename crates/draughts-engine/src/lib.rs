//! Rules engine for English draughts.
//!
//! This crate provides:
//! - [`Board`] - the 8x8 grid owning every piece in play
//! - [`Piece`] - a man or king; kings move and capture in both directions
//! - [`PieceMut`] - a handle for moving one piece, with slide, jump and
//!   jump-chain rules
//! - [`Game`] - turn alternation, history and termination, driven by
//!   [`Player`] collaborators
//!
//! # Example
//!
//! ```
//! use draughts_core::Coord;
//! use draughts_engine::{Board, Game};
//!
//! let mut game = Game::new();
//! // Red opens by sliding a man forward.
//! game.take_turn(Coord::new(5, 0), &[Coord::new(4, 1)]).unwrap();
//!
//! // A rejected move leaves the board exactly as it was.
//! let mut board = Board::new();
//! let before = board.clone();
//! assert!(board.perform_moves(Coord::new(2, 1), &[Coord::new(4, 3)]).is_err());
//! assert_eq!(board, before);
//! ```

mod board;
mod game;
pub mod movement;
mod piece;

pub use board::Board;
pub use game::{Game, GameError, GameMove, GameStatus, Player, PlayerError};
pub use movement::{InvalidMove, MoveKind, MoveReport, PieceMut};
pub use piece::{Directions, Piece};
