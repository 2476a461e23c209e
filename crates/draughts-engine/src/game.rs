//! Game management with turn alternation and history tracking.
//!
//! The [`Game`] struct owns one [`Board`] for its whole lifetime and
//! alternates turns between the two colors. Input comes from [`Player`]
//! collaborators; the game itself does no I/O.

use draughts_core::{Color, Coord};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::movement::{InvalidMove, MoveReport};
use crate::Board;

/// Error raised by a [`Player`] that cannot provide input.
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("input error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed")]
    InputClosed,
}

/// Error type for game operations.
#[derive(Debug, Error)]
pub enum GameError {
    /// The selection or move sequence was rejected; the board is unchanged.
    #[error(transparent)]
    InvalidMove(#[from] InvalidMove),

    /// The game has already ended.
    #[error("game has already ended")]
    GameAlreadyOver,

    /// A player could not provide input.
    #[error(transparent)]
    Player(#[from] PlayerError),
}

/// A source of moves for one side.
///
/// Nothing a player returns is trusted: selections and sequences are
/// validated by the game.
pub trait Player {
    /// Returns the coordinate of the piece the player wants to move.
    fn get_selection(&mut self, board: &Board, color: Color) -> Result<Coord, PlayerError>;

    /// Returns the destinations for the selected piece: one for a slide, one
    /// or more for a jump chain.
    fn get_moves(
        &mut self,
        board: &Board,
        color: Color,
        selected: Coord,
    ) -> Result<Vec<Coord>, PlayerError>;

    /// Called when the player's turn was rejected. The same player is asked
    /// again right after.
    fn rejected(&mut self, _error: &InvalidMove) {}
}

/// Whether play continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// The game ended. `winner` is `None` only for a game set up on a board
    /// without any pieces.
    Over { winner: Option<Color> },
}

/// A recorded turn in game history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameMove {
    /// The side that moved.
    pub color: Color,
    /// What the move did.
    pub report: MoveReport,
}

/// A draughts game between two colors.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Color,
    moves: Vec<GameMove>,
    status: GameStatus,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// The side that opens a standard game.
    pub const FIRST_TO_MOVE: Color = Color::Red;

    /// Creates a new game from the opening layout with Red to move.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Self::FIRST_TO_MOVE)
    }

    /// Creates a game from a custom board.
    ///
    /// If the board already has at most one color on it the game starts out
    /// over, won by the remaining color.
    pub fn from_board(board: Board, first_to_move: Color) -> Self {
        let status = if board.is_over() {
            GameStatus::Over {
                winner: board.winner(),
            }
        } else {
            GameStatus::InProgress
        };
        Game {
            board,
            turn: first_to_move,
            moves: Vec::new(),
            status,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true if the game has ended.
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Over { .. })
    }

    /// Returns the winner once the game has ended.
    pub fn winner(&self) -> Option<Color> {
        match self.status {
            GameStatus::Over { winner } => winner,
            GameStatus::InProgress => None,
        }
    }

    /// Returns the move history.
    pub fn move_history(&self) -> &[GameMove] {
        &self.moves
    }

    /// Checks that `from` holds a piece of the side to move.
    pub fn check_selection(&self, from: Coord) -> Result<(), InvalidMove> {
        match self.board.get(from) {
            None => Err(InvalidMove::NoPiece(from)),
            Some(piece) if piece.color() != self.turn => Err(InvalidMove::WrongColor(from)),
            Some(_) => Ok(()),
        }
    }

    /// Plays one turn for the side to move.
    ///
    /// On success the move is recorded, the game is checked for its end, and
    /// the turn passes to the other color. On error nothing changes and the
    /// same color is still to move.
    pub fn take_turn(&mut self, from: Coord, moves: &[Coord]) -> Result<MoveReport, GameError> {
        if self.is_over() {
            return Err(GameError::GameAlreadyOver);
        }
        self.check_selection(from)?;

        let report = self.board.perform_moves(from, moves)?;
        if report.promoted {
            info!(color = %self.turn, at = %report.to(), "piece crowned");
        }
        self.moves.push(GameMove {
            color: self.turn,
            report: report.clone(),
        });

        if self.board.is_over() {
            info!(winner = %self.turn, turns = self.moves.len(), "game over");
            self.status = GameStatus::Over {
                winner: Some(self.turn),
            };
        } else {
            self.turn = self.turn.opposite();
        }
        Ok(report)
    }

    /// Runs the game to completion, asking each side's player for input.
    ///
    /// Rejected turns are reported to the player through
    /// [`Player::rejected`] and retried. Returns the winner.
    pub fn play(
        &mut self,
        black: &mut dyn Player,
        red: &mut dyn Player,
    ) -> Result<Option<Color>, GameError> {
        while !self.is_over() {
            let color = self.turn;
            let player: &mut dyn Player = match color {
                Color::Black => &mut *black,
                Color::Red => &mut *red,
            };

            let outcome = self.prompt_turn(player, color);
            match outcome {
                Ok(report) => debug!(%color, %report, "turn completed"),
                Err(GameError::InvalidMove(err)) => {
                    debug!(%color, %err, "turn rejected");
                    player.rejected(&err);
                }
                Err(err) => {
                    warn!(%color, %err, "player failed");
                    return Err(err);
                }
            }
        }
        Ok(self.winner())
    }

    fn prompt_turn(&mut self, player: &mut dyn Player, color: Color) -> Result<MoveReport, GameError> {
        let from = player.get_selection(&self.board, color)?;
        self.check_selection(from)?;
        let moves = player.get_moves(&self.board, color, from)?;
        self.take_turn(from, &moves)
    }
}
