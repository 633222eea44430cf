//! Per-kind movement legality.
//!
//! Each check is a pure predicate over (piece, start, end, board state). The
//! caller guarantees the piece actually sits on the start square. Out-of-range
//! targets are never an error, they are simply not legal destinations.
//!
//! Known gaps in this rule set: rooks ignore intervening and target
//! occupancy entirely, and bishops/queens have no movement rule at all.
//! Castling and en passant do not exist.

use super::error::MoveError;
use super::state::Board;
use super::types::{Color, Coord, PieceId, PieceKind};

const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

impl Board {
    /// Whether the piece may relocate from `from` to `to`.
    ///
    /// Fails with [`MoveError::Unbound`] when the piece has no owning player;
    /// every other outcome is a plain boolean verdict.
    pub fn can_move(&self, id: PieceId, from: Coord, to: Coord) -> Result<bool, MoveError> {
        let piece = self.piece(id);
        if piece.player().is_none() {
            return Err(MoveError::Unbound { kind: piece.kind() });
        }

        Ok(match piece.kind() {
            PieceKind::Pawn => self.pawn_can_move(piece.color(), piece.moves(), from, to),
            PieceKind::Knight => knight_can_move(from, to),
            PieceKind::Rook => self.rook_can_move(from, to),
            PieceKind::King => self.king_can_move(piece.color(), from, to),
            // No diagonal sliding rule exists yet.
            PieceKind::Bishop | PieceKind::Queen => false,
        })
    }

    /// Pawns step forward onto empty squares (two steps while unmoved) and
    /// capture one square diagonally forward.
    fn pawn_can_move(&self, color: Color, moves_made: u32, from: Coord, to: Coord) -> bool {
        let dir = color.forward();
        let one_forward = from.offset(dir, 0);
        let two_forward = from.offset(2 * dir, 0);

        match self.piece_at(to) {
            None => {
                if moves_made == 0 {
                    // The double step only checks its own destination.
                    one_forward == Some(to) || two_forward == Some(to)
                } else {
                    one_forward == Some(to)
                }
            }
            Some(target) => {
                let diagonal =
                    from.offset(dir, -1) == Some(to) || from.offset(dir, 1) == Some(to);
                diagonal && target.color() != color
            }
        }
    }

    /// Kings step to any of the edge-clamped 8 neighbors that is empty or
    /// enemy-occupied. Castling destinations are never legal.
    fn king_can_move(&self, color: Color, from: Coord, to: Coord) -> bool {
        let adjacent = KING_OFFSETS
            .iter()
            .any(|&(dr, df)| from.offset(dr, df) == Some(to));
        adjacent && self.piece_at(to).map_or(true, |p| p.color() != color)
    }

    /// Rooks move along their rank or file. Neither intervening squares nor
    /// the target occupant are examined.
    fn rook_can_move(&self, from: Coord, to: Coord) -> bool {
        if from == to {
            return false;
        }
        self.rank_line(from).iter().any(|sq| sq.coord() == to)
            || self.file_line(from).any(|sq| sq.coord() == to)
    }
}

/// Knights jump by an L-offset and are never blocked.
fn knight_can_move(from: Coord, to: Coord) -> bool {
    KNIGHT_OFFSETS
        .iter()
        .any(|&(dr, df)| from.offset(dr, df) == Some(to))
}
