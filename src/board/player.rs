//! Players and initial piece placement.

use super::state::Board;
use super::types::{Color, Coord, PieceKind, PlayerId};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// One side of a game: a color, a display name and a stable handle.
///
/// A player does no move logic of its own; it only performs one-time initial
/// placement and answers the (deliberately inert) no-legal-move predicate.
#[derive(Clone, Debug)]
pub struct Player {
    id: PlayerId,
    color: Color,
    name: String,
}

impl Player {
    /// Create a player named after its color ("White" / "Black").
    #[must_use]
    pub fn new(color: Color) -> Self {
        Player {
            id: PlayerId::for_color(color),
            color,
            name: color.to_string(),
        }
    }

    /// Create a player with an explicit display name.
    #[must_use]
    pub fn named(color: Color, name: impl Into<String>) -> Self {
        Player {
            id: PlayerId::for_color(color),
            color,
            name: name.into(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Place this side's pieces: R,N,B,Q,K,B,N,R on the back rank (files
    /// A through H) and eight pawns on the rank in front of it. Every piece
    /// is spawned bound to this player. Calling setup again overwrites the
    /// occupants of those two ranks with fresh pieces.
    pub fn setup(&self, board: &mut Board) {
        let back = self.color.back_rank();
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            let id = board.add_player_piece(kind, self.color, self.id);
            if let Some(coord) = Coord::new(back, file) {
                board.put_piece(coord, id);
            }
        }

        let pawns = self.color.pawn_rank();
        for file in 0..BACK_RANK.len() {
            let id = board.add_player_piece(PieceKind::Pawn, self.color, self.id);
            if let Some(coord) = Coord::new(pawns, file) {
                board.put_piece(coord, id);
            }
        }
    }

    /// Whether this player has no legal move left. Stalemate detection is
    /// not implemented; this always reports `false`.
    #[must_use]
    pub fn has_no_legal_move(&self, _board: &Board) -> bool {
        false
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.color)
    }
}
