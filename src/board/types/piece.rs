//! Piece, color and handle types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds in index order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Convert to the conventional uppercase letter (P, N, B, R, Q, K).
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    #[must_use]
    pub(crate) const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Piece and square colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1).
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Back rank for this color (0 for White, 7 for Black).
    #[inline]
    #[must_use]
    pub const fn back_rank(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Pawn starting rank (1 for White, 6 for Black).
    #[inline]
    #[must_use]
    pub const fn pawn_rank(self) -> usize {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Pawn forward direction (+1 for White, -1 for Black).
    #[inline]
    #[must_use]
    pub const fn forward(self) -> isize {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank on which a pawn of this color promotes (7 for White, 0 for Black).
    #[inline]
    #[must_use]
    pub const fn promotion_rank(self) -> usize {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Handle to a piece in a board's arena.
///
/// Stable for the lifetime of the board; captured pieces keep their id and
/// stay addressable after they are detached from the grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceId(pub(crate) u32);

impl PieceId {
    #[inline]
    #[must_use]
    pub(crate) const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// Handle to one of a game's two players, one per color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlayerId(pub(crate) u8);

impl PlayerId {
    /// The fixed handle for a color's player (White=0, Black=1).
    #[inline]
    #[must_use]
    pub const fn for_color(color: Color) -> PlayerId {
        PlayerId(color.index() as u8)
    }

    #[inline]
    #[must_use]
    pub(crate) const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// One chess piece, stored in a board's arena.
///
/// A piece records its kind, color, owning player handle, completed move
/// count and the pieces it has captured. Its current location is not stored
/// here: a piece sits wherever a square lists it as occupant.
#[derive(Clone, Debug)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    player: Option<PlayerId>,
    moves: u32,
    alive: bool,
    captured: Vec<PieceId>,
}

impl Piece {
    pub(crate) fn new(kind: PieceKind, color: Color, player: Option<PlayerId>) -> Self {
        Piece {
            kind,
            color,
            player,
            moves: 0,
            alive: true,
            captured: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// The owning player's handle, or `None` for an unbound piece.
    #[inline]
    #[must_use]
    pub const fn player(&self) -> Option<PlayerId> {
        self.player
    }

    /// Number of completed moves.
    #[inline]
    #[must_use]
    pub const fn moves(&self) -> u32 {
        self.moves
    }

    /// Always true: capture detaches a piece from the grid without killing it.
    #[inline]
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    /// Handles of the pieces this piece has captured, in capture order.
    #[must_use]
    pub fn captures(&self) -> &[PieceId] {
        &self.captured
    }

    pub(crate) fn record_move(&mut self) {
        self.moves += 1;
    }

    pub(crate) fn record_capture(&mut self, victim: PieceId) {
        self.captured.push(victim);
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self.color {
            Color::White => 'w',
            Color::Black => 'b',
        };
        write!(f, "{}{}", self.kind.to_char(), c)
    }
}
