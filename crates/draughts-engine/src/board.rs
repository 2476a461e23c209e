//! Draughts board representation.

use draughts_core::{Color, Coord, DiagramError, DiagramParser};

use crate::movement::{InvalidMove, MoveReport, PieceMut};
use crate::Piece;

/// An 8x8 grid holding at most one piece per cell.
///
/// The board owns its pieces. Every occupied cell holds a piece whose
/// [`position`](Piece::position) is that cell's coordinate. Reads outside
/// the grid see no piece and writes outside the grid are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Creates a board with the standard opening layout: twelve men per side
    /// on the dark cells of rows 0-2 (Black) and 5-7 (Red).
    pub fn new() -> Self {
        let mut board = Board::empty();
        for coord in Coord::all().filter(|c| c.is_playable()) {
            let color = match coord.row() {
                0..=2 => Color::Black,
                5..=7 => Color::Red,
                _ => continue,
            };
            board.set(coord, Some(Piece::new(color, coord)));
        }
        board
    }

    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
        }
    }

    /// Creates a board from a diagram string.
    pub fn from_diagram(diagram: &str) -> Result<Self, DiagramError> {
        let parsed = DiagramParser::parse(diagram)?;
        let mut board = Board::empty();
        for (coord, kind, color) in parsed.pieces() {
            board.set(coord, Some(Piece::with_kind(kind, color, coord)));
        }
        Ok(board)
    }

    /// Converts the board to a diagram string.
    pub fn to_diagram(&self) -> String {
        let mut cells = [[None; 8]; 8];
        for piece in self.pieces() {
            if let Some((row, col)) = piece.position().indices() {
                cells[row][col] = Some((piece.kind(), piece.color()));
            }
        }
        DiagramParser::from_cells(cells).to_diagram()
    }

    /// Returns the piece at `coord`, or `None` when empty or off the board.
    #[inline]
    pub fn get(&self, coord: Coord) -> Option<&Piece> {
        let (row, col) = coord.indices()?;
        self.grid[row][col].as_ref()
    }

    /// Writes a cell. A placed piece is rebound to `coord`.
    ///
    /// Off-board writes are silently ignored.
    pub fn set(&mut self, coord: Coord, piece: Option<Piece>) {
        if let Some((row, col)) = coord.indices() {
            self.grid[row][col] = piece.map(|mut p| {
                p.set_position(coord);
                p
            });
        }
    }

    /// Clears `coord`, returning the piece that was there.
    pub fn remove(&mut self, coord: Coord) -> Option<Piece> {
        let (row, col) = coord.indices()?;
        self.grid[row][col].take()
    }

    /// Returns true if `coord` is on the board and unoccupied.
    #[inline]
    pub fn is_vacant(&self, coord: Coord) -> bool {
        coord.is_on_board() && self.get(coord).is_none()
    }

    /// Iterates over all pieces, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.grid.iter().flatten().flatten()
    }

    /// Counts the pieces of one color.
    pub fn count(&self, color: Color) -> usize {
        self.pieces().filter(|p| p.color() == color).count()
    }

    /// Returns true if at most one color has pieces left.
    ///
    /// A board with no pieces at all counts as over.
    pub fn is_over(&self) -> bool {
        Color::ALL
            .iter()
            .any(|&color| self.pieces().all(|p| p.color() == color))
    }

    /// Returns the only color with pieces left, if exactly one has any.
    pub fn winner(&self) -> Option<Color> {
        match (self.count(Color::Black), self.count(Color::Red)) {
            (0, 0) => None,
            (_, 0) => Some(Color::Black),
            (0, _) => Some(Color::Red),
            _ => None,
        }
    }

    /// Returns a handle for moving the piece at `coord`.
    pub fn piece_mut(&mut self, coord: Coord) -> Option<PieceMut<'_>> {
        let piece = *self.get(coord)?;
        Some(PieceMut::new(self, piece))
    }

    /// Validates and performs a move sequence for the piece at `from`.
    ///
    /// See [`PieceMut::perform_moves`].
    pub fn perform_moves(
        &mut self,
        from: Coord,
        moves: &[Coord],
    ) -> Result<MoveReport, InvalidMove> {
        self.piece_mut(from)
            .ok_or(InvalidMove::NoPiece(from))?
            .perform_moves(moves)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
