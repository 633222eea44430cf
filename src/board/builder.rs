//! Fluent builder for constructing board positions.
//!
//! Lets tests and embedders place individual pieces instead of running the
//! full two-player setup.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, Coord, PieceKind};
//!
//! let d5 = Coord::new(4, 3).unwrap();
//! let (board, ids) = BoardBuilder::new()
//!     .piece(d5, Color::White, PieceKind::Knight)
//!     .build();
//! assert_eq!(ids.len(), 1);
//! assert!(board.piece_at(d5).is_some());
//! ```

use super::state::Board;
use super::types::{Color, Coord, PieceId, PieceKind, PlayerId};

/// A fluent builder for `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Coord, Color, PieceKind, bool)>,
}

impl BoardBuilder {
    /// Create a builder for an empty board.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Place a piece bound to its color's player handle. Replaces any piece
    /// previously placed on the same square.
    #[must_use]
    pub fn piece(mut self, coord: Coord, color: Color, kind: PieceKind) -> Self {
        self.pieces.retain(|(c, _, _, _)| *c != coord);
        self.pieces.push((coord, color, kind, true));
        self
    }

    /// Place a piece with no owning player. Legality queries on it will fail
    /// with an unbound error.
    #[must_use]
    pub fn unbound_piece(mut self, coord: Coord, color: Color, kind: PieceKind) -> Self {
        self.pieces.retain(|(c, _, _, _)| *c != coord);
        self.pieces.push((coord, color, kind, false));
        self
    }

    /// Remove a previously placed piece.
    #[must_use]
    pub fn clear(mut self, coord: Coord) -> Self {
        self.pieces.retain(|(c, _, _, _)| *c != coord);
        self
    }

    /// Build the board, returning the spawned piece handles in placement
    /// order.
    #[must_use]
    pub fn build(self) -> (Board, Vec<PieceId>) {
        let mut board = Board::new();
        let mut ids = Vec::with_capacity(self.pieces.len());

        for (coord, color, kind, bound) in self.pieces {
            let id = if bound {
                board.add_player_piece(kind, color, PlayerId::for_color(color))
            } else {
                board.add_piece(kind, color)
            };
            board.put_piece(coord, id);
            ids.push(id);
        }

        (board, ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(rank: usize, file: usize) -> Coord {
        Coord::new(rank, file).unwrap()
    }

    #[test]
    fn test_piece_placement() {
        let (board, ids) = BoardBuilder::new()
            .piece(at(0, 4), Color::White, PieceKind::King)
            .piece(at(7, 4), Color::Black, PieceKind::King)
            .build();

        assert_eq!(ids.len(), 2);
        assert_eq!(board.piece_at(at(0, 4)).unwrap().kind(), PieceKind::King);
        assert_eq!(board.piece_at(at(7, 4)).unwrap().color(), Color::Black);
        assert!(board.piece_at(at(0, 0)).is_none());
    }

    #[test]
    fn test_replaces_same_square() {
        let (board, ids) = BoardBuilder::new()
            .piece(at(3, 3), Color::White, PieceKind::Rook)
            .piece(at(3, 3), Color::Black, PieceKind::Knight)
            .build();

        assert_eq!(ids.len(), 1);
        assert_eq!(board.piece_at(at(3, 3)).unwrap().kind(), PieceKind::Knight);
    }

    #[test]
    fn test_clear_square() {
        let (board, ids) = BoardBuilder::new()
            .piece(at(2, 2), Color::White, PieceKind::Pawn)
            .clear(at(2, 2))
            .build();

        assert!(ids.is_empty());
        assert!(board.piece_at(at(2, 2)).is_none());
    }

    #[test]
    fn test_unbound_piece_has_no_player() {
        let (board, ids) = BoardBuilder::new()
            .unbound_piece(at(4, 4), Color::White, PieceKind::Queen)
            .build();

        assert!(board.piece(ids[0]).player().is_none());
    }
}
