//! Validated moves: constructed only if legal, executed without re-checking.

use super::error::MoveError;
use super::player::Player;
use super::state::Board;
use super::types::{Coord, PieceId, PieceKind, PlayerId};

/// A square reference as supplied by a caller: either an already-resolved
/// coordinate or two-character notation like `"D2"` / `"d2"`.
#[derive(Clone, Copy, Debug)]
pub enum SquareSpec<'a> {
    At(Coord),
    Notation(&'a str),
}

impl SquareSpec<'_> {
    /// Resolve to a concrete coordinate, failing on malformed notation.
    pub fn resolve(self) -> Result<Coord, MoveError> {
        match self {
            SquareSpec::At(coord) => Ok(coord),
            SquareSpec::Notation(s) => Ok(s.parse()?),
        }
    }
}

impl From<Coord> for SquareSpec<'_> {
    fn from(coord: Coord) -> Self {
        SquareSpec::At(coord)
    }
}

impl<'a> From<&'a str> for SquareSpec<'a> {
    fn from(s: &'a str) -> Self {
        SquareSpec::Notation(s)
    }
}

/// A single validated piece relocation.
///
/// Construction performs the full legality check; a `Move` that exists was
/// legal on the board it was built against. [`Move::make`] then applies it
/// trusting that invariant, recording any capture as it goes.
#[derive(Clone, Debug)]
pub struct Move {
    player: PlayerId,
    piece: PieceId,
    kind: PieceKind,
    from: Coord,
    to: Coord,
    captured: Option<PieceId>,
}

impl Move {
    /// Validate a relocation, in order: resolve both square references,
    /// check the piece belongs to the acting player, then ask the piece's
    /// movement rule. Any failure leaves the board untouched.
    pub fn new<'a>(
        board: &Board,
        player: &Player,
        piece: PieceId,
        from: impl Into<SquareSpec<'a>>,
        to: impl Into<SquareSpec<'a>>,
    ) -> Result<Move, MoveError> {
        let from = from.into().resolve()?;
        let to = to.into().resolve()?;

        let record = board.piece(piece);
        if player.color() != record.color() {
            return Err(MoveError::WrongOwner {
                player: player.color(),
                piece: record.color(),
            });
        }

        if !board.can_move(piece, from, to)? {
            return Err(MoveError::RuleViolation {
                kind: record.kind(),
                from,
                to,
            });
        }

        Ok(Move {
            player: player.id(),
            piece,
            kind: record.kind(),
            from,
            to,
            captured: None,
        })
    }

    /// Apply the move as one atomic sequence: detach and record the captured
    /// occupant of the target square, bump the mover's move count, clear the
    /// start square and occupy the target. A pawn reaching its terminal rank
    /// is replaced on the spot by a newly spawned queen of the same owner.
    pub fn make(&mut self, board: &mut Board) {
        self.captured = board.take_piece(self.to);
        if let Some(victim) = self.captured {
            board.piece_mut(self.piece).record_capture(victim);
        }
        board.piece_mut(self.piece).record_move();
        board.take_piece(self.from);
        board.put_piece(self.to, self.piece);

        if self.kind == PieceKind::Pawn {
            let color = board.piece(self.piece).color();
            if self.to.rank() == color.promotion_rank() {
                let queen = board.add_player_piece(PieceKind::Queen, color, self.player);
                board.put_piece(self.to, queen);
            }
        }
    }

    #[inline]
    #[must_use]
    pub const fn player(&self) -> PlayerId {
        self.player
    }

    #[inline]
    #[must_use]
    pub const fn piece(&self) -> PieceId {
        self.piece
    }

    /// Kind of the moving piece at validation time.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn from(&self) -> Coord {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(&self) -> Coord {
        self.to
    }

    /// The piece captured by this move, filled in by [`Move::make`].
    #[inline]
    #[must_use]
    pub const fn captured(&self) -> Option<PieceId> {
        self.captured
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}->{}", self.kind.to_char(), self.from, self.to)
    }
}
