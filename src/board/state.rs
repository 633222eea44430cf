//! The board: a fixed 8x8 grid of squares plus the piece arena.

use super::error::CoordError;
use super::types::{Color, Coord, Piece, PieceId, PieceKind, PlayerId, BOARD_SIZE};

/// One of the 64 cells of a board.
///
/// A square's coordinate and display color are fixed at board creation; the
/// occupant slot is freely readable and replaceable. Ownership discipline for
/// occupant changes belongs to `Move`, not to this layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Square {
    coord: Coord,
    color: Color,
    piece: Option<PieceId>,
}

impl Square {
    fn new(coord: Coord) -> Self {
        // Checkerboard rule: equal rank/file index parity is a dark square,
        // so A1 (0, 0) comes out Black.
        let color = if coord.rank() % 2 == coord.file() % 2 {
            Color::Black
        } else {
            Color::White
        };
        Square {
            coord,
            color,
            piece: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn coord(&self) -> Coord {
        self.coord
    }

    /// The square's fixed display color.
    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Handle of the occupying piece, if any.
    #[inline]
    #[must_use]
    pub const fn piece(&self) -> Option<PieceId> {
        self.piece
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.piece.is_none()
    }
}

/// An 8x8 board owning its 64 squares and every piece ever spawned on it.
///
/// Pieces live in a dense arena and are addressed by [`PieceId`]; squares
/// reference their occupant by handle. A piece's position is derived from
/// whichever square currently lists it, so a captured piece is simply no
/// longer listed anywhere.
#[derive(Clone, Debug)]
pub struct Board {
    squares: Vec<Square>,
    pieces: Vec<Piece>,
}

impl Board {
    /// Create an empty board: 64 squares, no pieces.
    #[must_use]
    pub fn new() -> Self {
        let squares = (0..BOARD_SIZE * BOARD_SIZE)
            .map(|idx| Square::new(Coord::from_index(idx)))
            .collect();
        Board {
            squares,
            pieces: Vec::new(),
        }
    }

    /// The unique square at a valid coordinate. O(1).
    #[inline]
    #[must_use]
    pub fn square(&self, coord: Coord) -> &Square {
        &self.squares[coord.as_index()]
    }

    /// The square at 0-based (rank, file), or an out-of-bounds error.
    pub fn get_square(&self, rank: usize, file: usize) -> Result<&Square, CoordError> {
        let coord = Coord::try_from((rank, file))?;
        Ok(self.square(coord))
    }

    /// The 8 squares of a rank in ascending file order.
    pub fn rank_squares(&self, rank: usize) -> Result<&[Square], CoordError> {
        if rank >= BOARD_SIZE {
            return Err(CoordError::RankOutOfBounds { rank });
        }
        Ok(&self.squares[rank * BOARD_SIZE..(rank + 1) * BOARD_SIZE])
    }

    /// The 8 squares of a file in ascending rank order.
    pub fn file_squares(
        &self,
        file: usize,
    ) -> Result<impl Iterator<Item = &Square> + '_, CoordError> {
        if file >= BOARD_SIZE {
            return Err(CoordError::FileOutOfBounds { file });
        }
        Ok((0..BOARD_SIZE).map(move |rank| &self.squares[rank * BOARD_SIZE + file]))
    }

    /// The rank line through a known-valid coordinate.
    pub(crate) fn rank_line(&self, coord: Coord) -> &[Square] {
        let start = coord.rank() * BOARD_SIZE;
        &self.squares[start..start + BOARD_SIZE]
    }

    /// The file line through a known-valid coordinate.
    pub(crate) fn file_line(&self, coord: Coord) -> impl Iterator<Item = &Square> + '_ {
        let file = coord.file();
        (0..BOARD_SIZE).map(move |rank| &self.squares[rank * BOARD_SIZE + file])
    }

    /// All 64 squares in index order (A1, B1, ..., H8).
    pub fn squares(&self) -> impl Iterator<Item = &Square> + '_ {
        self.squares.iter()
    }

    /// Spawn a piece with no owning player. Its legality can never be
    /// queried until a bound replacement exists; useful for display setups.
    pub fn add_piece(&mut self, kind: PieceKind, color: Color) -> PieceId {
        self.spawn(Piece::new(kind, color, None))
    }

    /// Spawn a piece bound to a player.
    pub fn add_player_piece(&mut self, kind: PieceKind, color: Color, player: PlayerId) -> PieceId {
        self.spawn(Piece::new(kind, color, Some(player)))
    }

    fn spawn(&mut self, piece: Piece) -> PieceId {
        let id = PieceId(self.pieces.len() as u32);
        self.pieces.push(piece);
        id
    }

    /// Look up a piece by handle.
    ///
    /// # Panics
    /// Panics if the handle belongs to a different board.
    #[inline]
    #[must_use]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.as_usize()]
    }

    #[inline]
    pub(crate) fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id.as_usize()]
    }

    /// The piece occupying a square, if any.
    #[must_use]
    pub fn piece_at(&self, coord: Coord) -> Option<&Piece> {
        self.square(coord).piece.map(|id| self.piece(id))
    }

    /// Handle of the piece occupying a square, if any.
    #[inline]
    #[must_use]
    pub fn occupant(&self, coord: Coord) -> Option<PieceId> {
        self.square(coord).piece
    }

    /// Place a piece handle on a square, returning the previous occupant.
    pub fn put_piece(&mut self, coord: Coord, id: PieceId) -> Option<PieceId> {
        self.squares[coord.as_index()].piece.replace(id)
    }

    /// Remove and return the occupant of a square.
    pub fn take_piece(&mut self, coord: Coord) -> Option<PieceId> {
        self.squares[coord.as_index()].piece.take()
    }

    /// Where a piece currently sits, scanning square occupancy.
    #[must_use]
    pub fn locate(&self, id: PieceId) -> Option<Coord> {
        self.squares
            .iter()
            .find(|sq| sq.piece == Some(id))
            .map(|sq| sq.coord)
    }

    /// Number of pieces ever spawned, detached captures included.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
