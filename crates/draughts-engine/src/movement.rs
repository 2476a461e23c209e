//! Move validation and execution.
//!
//! A [`PieceMut`] is a handle on one piece of a board: the board is borrowed
//! mutably and the piece is located by its coordinate. All rule predicates
//! read neighbouring cells through that handle.
//!
//! Move sequences are validated copy-on-validate: the board is cloned, the
//! sequence replayed on the clone, and only a fully successful replay is
//! repeated on the real board. A jump chain can only be checked step by step
//! after the earlier steps have happened, and the clone absorbs those
//! partial effects.

use draughts_core::Coord;
use std::fmt;
use thiserror::Error;
use tracing::debug;

use crate::{Board, Piece};

/// Error returned when a selection or move sequence is rejected.
///
/// Every variant is the same recoverable condition to callers; the variant
/// only says why. The board is unchanged whenever this is returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidMove {
    #[error("no piece selected at {0}")]
    NoPiece(Coord),

    #[error("cannot select opponent's piece at {0}")]
    WrongColor(Coord),

    #[error("no moves given")]
    EmptySequence,

    #[error("invalid move to {to} (step {step})")]
    IllegalStep { step: usize, to: Coord },
}

/// Whether a completed move was a slide or a chain of captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Slide,
    Jump,
}

/// Summary of a successfully performed move sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    /// Where the piece started.
    pub from: Coord,
    /// Cells visited, in order; the last one is where the piece ended.
    pub path: Vec<Coord>,
    /// Cells whose pieces were captured, in order.
    pub captured: Vec<Coord>,
    pub kind: MoveKind,
    /// True if the piece was crowned during the sequence.
    pub promoted: bool,
}

impl MoveReport {
    /// Where the piece ended up.
    pub fn to(&self) -> Coord {
        self.path.last().copied().unwrap_or(self.from)
    }
}

impl fmt::Display for MoveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = match self.kind {
            MoveKind::Slide => '-',
            MoveKind::Jump => 'x',
        };
        write!(f, "{}", self.from)?;
        for coord in &self.path {
            write!(f, "{}{}", sep, coord)?;
        }
        Ok(())
    }
}

/// Mutable handle on a piece that sits on a board.
///
/// Obtained from [`Board::piece_mut`]. The handle keeps its copy of the
/// piece in sync with the board cell it occupies.
#[derive(Debug)]
pub struct PieceMut<'a> {
    board: &'a mut Board,
    piece: Piece,
}

impl<'a> PieceMut<'a> {
    pub(crate) fn new(board: &'a mut Board, piece: Piece) -> Self {
        PieceMut { board, piece }
    }

    /// The piece as it currently stands.
    #[inline]
    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    #[inline]
    pub fn position(&self) -> Coord {
        self.piece.position()
    }

    /// Moves one cell diagonally into an empty cell, if allowed.
    ///
    /// Returns false without touching the board when the slide is illegal.
    pub fn perform_slide(&mut self, dest: Coord) -> bool {
        let from = self.position();
        if !self.board.is_vacant(dest) || from.distance(dest) != 1 {
            return false;
        }
        if !self.piece.allows(from.direction_to(dest)) {
            return false;
        }
        self.move_to(dest)
    }

    /// Returns true if the piece may jump to `dest`, capturing the opposing
    /// piece at the midpoint.
    ///
    /// Kings may also jump from afar ("flying" capture) as long as every
    /// other cell they pass over is empty. The captured piece must sit
    /// exactly halfway, so the distance is always even; men only ever jump
    /// two cells.
    pub fn can_jump(&self, dest: Coord) -> bool {
        let from = self.position();
        if !self.board.is_vacant(dest) || !from.is_diagonal_to(dest) {
            return false;
        }

        let distance = from.distance(dest);
        if distance % 2 != 0 || (distance > 2 && !self.piece.is_king()) {
            return false;
        }

        let mid = from.midpoint(dest);
        match self.board.get(mid) {
            Some(target) if target.color() != self.piece.color() => {}
            _ => return false,
        }

        let delta = from.direction_to(dest);
        if !self.piece.allows(delta) {
            return false;
        }

        let mut step = from + delta;
        while step != dest {
            if step != mid && self.board.get(step).is_some() {
                return false;
            }
            step = step + delta;
        }
        true
    }

    /// Jumps to `dest`, removing the captured piece.
    ///
    /// Returns false without touching the board when the jump is illegal.
    pub fn perform_jump(&mut self, dest: Coord) -> bool {
        self.jump(dest).is_some()
    }

    fn jump(&mut self, dest: Coord) -> Option<Coord> {
        if !self.can_jump(dest) {
            return None;
        }
        let mid = self.position().midpoint(dest);
        self.board.remove(mid);
        self.move_to(dest);
        Some(mid)
    }

    /// Relocates the piece to `dest` unconditionally and crowns it on the
    /// first or last row. Always returns true.
    pub fn move_to(&mut self, dest: Coord) -> bool {
        let from = self.position();
        self.board.remove(from);
        self.piece.set_position(dest);
        if Piece::is_promotion_row(dest.row()) {
            self.piece.promote();
        }
        self.board.set(dest, Some(self.piece));
        true
    }

    /// Performs a move sequence without validating it first.
    ///
    /// A failure part-way through leaves the earlier steps applied, so this
    /// is only safe on a scratch board. Use [`perform_moves`](Self::perform_moves)
    /// on a board you care about.
    pub fn perform_moves_unchecked(&mut self, moves: &[Coord]) -> Result<MoveReport, InvalidMove> {
        let first = *moves.first().ok_or(InvalidMove::EmptySequence)?;
        let from = self.position();
        let was_king = self.piece.is_king();

        let mut report = MoveReport {
            from,
            path: moves.to_vec(),
            captured: Vec::new(),
            kind: MoveKind::Slide,
            promoted: false,
        };

        if moves.len() > 1 || !self.perform_slide(first) {
            report.kind = MoveKind::Jump;
            for (step, &dest) in moves.iter().enumerate() {
                let captured = self
                    .jump(dest)
                    .ok_or(InvalidMove::IllegalStep { step, to: dest })?;
                report.captured.push(captured);
            }
        }

        report.promoted = !was_king && self.piece.is_king();
        Ok(report)
    }

    /// Returns true if the whole sequence would succeed.
    ///
    /// The sequence is replayed on a throwaway copy of the board; this board
    /// is never touched.
    pub fn valid_moves(&self, moves: &[Coord]) -> bool {
        self.try_on_copy(moves).is_ok()
    }

    fn try_on_copy(&self, moves: &[Coord]) -> Result<MoveReport, InvalidMove> {
        let mut scratch = self.board.clone();
        let from = self.position();
        let mut handle = scratch.piece_mut(from).ok_or(InvalidMove::NoPiece(from))?;
        handle.perform_moves_unchecked(moves)
    }

    /// Validates the whole sequence, then performs it.
    ///
    /// The sequence must be either a single legal slide, or a chain where
    /// every destination is a legal jump from where the piece stands at that
    /// step. With more than one destination only jumps are considered; with
    /// one, a slide is tried before a jump.
    ///
    /// On error the board is exactly as it was.
    pub fn perform_moves(&mut self, moves: &[Coord]) -> Result<MoveReport, InvalidMove> {
        if let Err(err) = self.try_on_copy(moves) {
            debug!(from = %self.position(), ?moves, %err, "rejected move sequence");
            return Err(err);
        }
        let report = self.perform_moves_unchecked(moves)?;
        debug!(%report, "performed move sequence");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use draughts_core::Color;

    fn c(row: i8, col: i8) -> Coord {
        Coord::new(row, col)
    }

    fn board_with(pieces: &[Piece]) -> Board {
        let mut board = Board::empty();
        for piece in pieces {
            board.set(piece.position(), Some(*piece));
        }
        board
    }

    #[test]
    fn slide_forward() {
        let mut board = Board::new();
        let mut handle = board.piece_mut(c(2, 1)).unwrap();
        assert!(handle.perform_slide(c(3, 0)));
        assert_eq!(handle.position(), c(3, 0));
        assert!(board.get(c(2, 1)).is_none());
        assert_eq!(board.get(c(3, 0)).map(|p| p.position()), Some(c(3, 0)));
    }

    #[test]
    fn slide_rejections() {
        let mut board = board_with(&[
            Piece::new(Color::Black, c(3, 2)),
            Piece::new(Color::Red, c(4, 3)),
        ]);
        let before = board.clone();
        let mut handle = board.piece_mut(c(3, 2)).unwrap();
        // backwards
        assert!(!handle.perform_slide(c(2, 1)));
        // occupied
        assert!(!handle.perform_slide(c(4, 3)));
        // too far
        assert!(!handle.perform_slide(c(5, 0)));
        // sideways
        assert!(!handle.perform_slide(c(3, 3)));
        // onto itself
        assert!(!handle.perform_slide(c(3, 2)));
        assert_eq!(board, before);
    }

    #[test]
    fn slide_off_board_rejected() {
        let mut board = board_with(&[Piece::new(Color::Black, c(3, 0))]);
        let mut handle = board.piece_mut(c(3, 0)).unwrap();
        assert!(!handle.perform_slide(c(4, -1)));
        assert!(board.get(c(3, 0)).is_some());
    }

    #[test]
    fn king_slides_backwards() {
        let mut board = board_with(&[Piece::king(Color::Black, c(4, 3))]);
        let mut handle = board.piece_mut(c(4, 3)).unwrap();
        assert!(handle.perform_slide(c(3, 2)));
    }

    #[test]
    fn single_jump() {
        let mut board = board_with(&[
            Piece::new(Color::Black, c(2, 1)),
            Piece::new(Color::Red, c(3, 2)),
        ]);
        let mut handle = board.piece_mut(c(2, 1)).unwrap();
        assert!(handle.can_jump(c(4, 3)));
        assert!(handle.perform_jump(c(4, 3)));
        assert!(board.get(c(3, 2)).is_none());
        assert!(board.get(c(2, 1)).is_none());
        assert_eq!(board.get(c(4, 3)).map(|p| p.color()), Some(Color::Black));
    }

    #[test]
    fn jump_over_own_or_empty_rejected() {
        let mut board = board_with(&[
            Piece::new(Color::Black, c(2, 1)),
            Piece::new(Color::Black, c(3, 2)),
        ]);
        let handle = board.piece_mut(c(2, 1)).unwrap();
        assert!(!handle.can_jump(c(4, 3)));

        let mut board = board_with(&[Piece::new(Color::Black, c(2, 1))]);
        let handle = board.piece_mut(c(2, 1)).unwrap();
        assert!(!handle.can_jump(c(4, 3)));
    }

    #[test]
    fn jump_to_occupied_rejected() {
        let mut board = board_with(&[
            Piece::new(Color::Black, c(2, 1)),
            Piece::new(Color::Red, c(3, 2)),
            Piece::new(Color::Red, c(4, 3)),
        ]);
        let handle = board.piece_mut(c(2, 1)).unwrap();
        assert!(!handle.can_jump(c(4, 3)));
    }

    #[test]
    fn man_cannot_jump_backwards() {
        let mut board = board_with(&[
            Piece::new(Color::Black, c(4, 3)),
            Piece::new(Color::Red, c(3, 2)),
        ]);
        let handle = board.piece_mut(c(4, 3)).unwrap();
        assert!(!handle.can_jump(c(2, 1)));
    }

    #[test]
    fn man_cannot_fly() {
        let mut board = board_with(&[
            Piece::new(Color::Red, c(6, 6)),
            Piece::new(Color::Black, c(4, 4)),
        ]);
        let handle = board.piece_mut(c(6, 6)).unwrap();
        assert!(!handle.can_jump(c(2, 2)));
    }

    #[test]
    fn king_flying_jump() {
        let mut board = board_with(&[
            Piece::king(Color::Red, c(5, 5)),
            Piece::new(Color::Black, c(3, 3)),
            Piece::new(Color::Black, c(0, 7)),
        ]);
        let mut handle = board.piece_mut(c(5, 5)).unwrap();
        assert!(handle.perform_jump(c(1, 1)));
        assert!(board.get(c(3, 3)).is_none());
        assert!(board.get(c(0, 7)).is_some());
        assert_eq!(board.get(c(1, 1)).map(|p| p.is_king()), Some(true));
    }

    #[test]
    fn king_flying_jump_blocked() {
        let mut board = board_with(&[
            Piece::king(Color::Red, c(5, 5)),
            Piece::new(Color::Black, c(3, 3)),
            Piece::new(Color::Black, c(4, 4)),
        ]);
        let handle = board.piece_mut(c(5, 5)).unwrap();
        assert!(!handle.can_jump(c(1, 1)));

        let mut board = board_with(&[
            Piece::king(Color::Red, c(5, 5)),
            Piece::new(Color::Black, c(3, 3)),
            Piece::new(Color::Red, c(2, 2)),
        ]);
        let handle = board.piece_mut(c(5, 5)).unwrap();
        assert!(!handle.can_jump(c(1, 1)));
    }

    #[test]
    fn odd_length_jump_rejected() {
        // (2,2)-(5,5) rounds its midpoint down to (3,3), next to the piece.
        let mut board = board_with(&[
            Piece::new(Color::Black, c(2, 2)),
            Piece::new(Color::Red, c(3, 3)),
        ]);
        let handle = board.piece_mut(c(2, 2)).unwrap();
        assert!(!handle.can_jump(c(5, 5)));
        assert!(board.perform_moves(c(2, 2), &[c(5, 5)]).is_err());
        assert!(board.get(c(3, 3)).is_some());
        assert_eq!(board.get(c(2, 2)).map(|p| p.color()), Some(Color::Black));

        let mut board = board_with(&[
            Piece::king(Color::Black, c(2, 2)),
            Piece::new(Color::Red, c(3, 3)),
        ]);
        let handle = board.piece_mut(c(2, 2)).unwrap();
        assert!(!handle.can_jump(c(5, 5)));
        assert!(handle.can_jump(c(4, 4)));
    }

    #[test]
    fn odd_length_flying_jump_rejected_toward_lower_rows() {
        let mut board = board_with(&[
            Piece::king(Color::Red, c(5, 5)),
            Piece::new(Color::Black, c(3, 3)),
        ]);
        let handle = board.piece_mut(c(5, 5)).unwrap();
        assert!(!handle.can_jump(c(2, 2)));
        assert!(handle.can_jump(c(1, 1)));
    }

    #[test]
    fn man_never_long_jumps() {
        let mut board = board_with(&[
            Piece::new(Color::Black, c(1, 1)),
            Piece::new(Color::Red, c(3, 3)),
        ]);
        let handle = board.piece_mut(c(1, 1)).unwrap();
        assert!(!handle.can_jump(c(5, 5)));
    }

    #[test]
    fn non_diagonal_jump_rejected() {
        let mut board = board_with(&[
            Piece::king(Color::Black, c(2, 1)),
            Piece::new(Color::Red, c(3, 1)),
        ]);
        let handle = board.piece_mut(c(2, 1)).unwrap();
        assert!(!handle.can_jump(c(4, 2)));
        assert!(!handle.can_jump(c(6, 3)));
    }

    #[test]
    fn move_to_promotes_on_back_row() {
        let mut board = board_with(&[Piece::new(Color::Black, c(6, 1))]);
        let mut handle = board.piece_mut(c(6, 1)).unwrap();
        assert!(handle.perform_slide(c(7, 2)));
        assert!(handle.piece().is_king());
        assert_eq!(board.get(c(7, 2)).map(|p| p.directions().len()), Some(2));
    }

    #[test]
    fn perform_moves_slide_then_jump_precedence() {
        // A single destination that is a jump, not a slide.
        let mut board = board_with(&[
            Piece::new(Color::Black, c(2, 1)),
            Piece::new(Color::Red, c(3, 2)),
        ]);
        let report = board.perform_moves(c(2, 1), &[c(4, 3)]).unwrap();
        assert_eq!(report.kind, MoveKind::Jump);
        assert_eq!(report.captured, vec![c(3, 2)]);

        let mut board = Board::new();
        let report = board.perform_moves(c(2, 1), &[c(3, 2)]).unwrap();
        assert_eq!(report.kind, MoveKind::Slide);
        assert!(report.captured.is_empty());
        assert_eq!(report.to_string(), "b3-c4");
    }

    #[test]
    fn multi_step_sequence_never_slides() {
        let mut board = board_with(&[Piece::new(Color::Black, c(2, 1))]);
        let before = board.clone();
        let err = board
            .perform_moves(c(2, 1), &[c(3, 2), c(4, 3)])
            .unwrap_err();
        assert_eq!(err, InvalidMove::IllegalStep { step: 0, to: c(3, 2) });
        assert_eq!(board, before);
    }

    #[test]
    fn double_jump() {
        let mut board = board_with(&[
            Piece::new(Color::Black, c(2, 1)),
            Piece::new(Color::Red, c(3, 2)),
            Piece::new(Color::Red, c(5, 2)),
        ]);
        let report = board.perform_moves(c(2, 1), &[c(4, 3), c(6, 1)]).unwrap();
        assert_eq!(report.captured, vec![c(3, 2), c(5, 2)]);
        assert_eq!(report.to(), c(6, 1));
        assert_eq!(report.to_string(), "b3xd5xb7");
        assert_eq!(board.count(Color::Red), 0);
        assert!(board.is_over());
    }

    #[test]
    fn rejected_double_jump_leaves_board_untouched() {
        let mut board = board_with(&[
            Piece::new(Color::Black, c(2, 1)),
            Piece::new(Color::Red, c(3, 2)),
        ]);
        let before = board.clone();
        let err = board
            .perform_moves(c(2, 1), &[c(4, 3), c(6, 1)])
            .unwrap_err();
        assert_eq!(err, InvalidMove::IllegalStep { step: 1, to: c(6, 1) });
        assert_eq!(board, before);
        assert!(board.get(c(3, 2)).is_some());
        assert!(board.get(c(2, 1)).is_some());
    }

    #[test]
    fn promotion_mid_chain_allows_backward_jump() {
        // Black man crowns on row 7 and continues capturing backwards.
        let mut board = board_with(&[
            Piece::new(Color::Black, c(5, 2)),
            Piece::new(Color::Red, c(6, 3)),
            Piece::new(Color::Red, c(6, 5)),
        ]);
        let report = board.perform_moves(c(5, 2), &[c(7, 4), c(5, 6)]).unwrap();
        assert!(report.promoted);
        assert_eq!(board.get(c(5, 6)).map(|p| p.is_king()), Some(true));
    }

    #[test]
    fn empty_sequence() {
        let mut board = Board::new();
        let before = board.clone();
        assert_eq!(
            board.perform_moves(c(2, 1), &[]),
            Err(InvalidMove::EmptySequence)
        );
        assert_eq!(board, before);
    }

    #[test]
    fn valid_moves_does_not_mutate() {
        let mut board = board_with(&[
            Piece::new(Color::Black, c(2, 1)),
            Piece::new(Color::Red, c(3, 2)),
        ]);
        let before = board.clone();
        let handle = board.piece_mut(c(2, 1)).unwrap();
        assert!(handle.valid_moves(&[c(4, 3)]));
        assert!(!handle.valid_moves(&[c(4, 3), c(6, 5)]));
        assert_eq!(board, before);
    }

    #[test]
    fn error_display() {
        assert_eq!(
            InvalidMove::NoPiece(c(0, 0)).to_string(),
            "no piece selected at a1"
        );
        assert!(InvalidMove::IllegalStep { step: 1, to: c(6, 1) }
            .to_string()
            .contains("b7"));
    }
}
