//! Error types for board and game operations.
//!
//! All errors are raised at the point of detection and propagate to the
//! caller unchanged; the engine never retries or recovers internally.

use std::fmt;

use super::types::{Color, Coord, PieceKind};

/// Error type for coordinate construction and board lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordError {
    /// Rank index out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File index out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// A move-notation string could not be parsed into a square
    InvalidNotation { notation: String },
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            CoordError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            CoordError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for CoordError {}

/// Error type for move validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// A start/end reference was out of bounds or malformed
    BadSquare(CoordError),
    /// Legality was queried on a piece with no owning player
    Unbound { kind: PieceKind },
    /// A player tried to move a piece of the other color
    WrongOwner { player: Color, piece: Color },
    /// The relocation violates the piece's movement rule
    RuleViolation {
        kind: PieceKind,
        from: Coord,
        to: Coord,
    },
    /// The start square holds no piece to move
    EmptySquare { coord: Coord },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::BadSquare(err) => write!(f, "Illegal move: {err}"),
            MoveError::Unbound { kind } => {
                write!(f, "Illegal move: {kind} does not belong to any player")
            }
            MoveError::WrongOwner { player, piece } => {
                write!(
                    f,
                    "Illegal move: {player} can only move their own pieces, not a {piece} one"
                )
            }
            MoveError::RuleViolation { kind, from, to } => {
                write!(f, "Illegal move: {kind} cannot be moved from {from} to {to}")
            }
            MoveError::EmptySquare { coord } => {
                write!(f, "Illegal move: no piece on {coord}")
            }
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::BadSquare(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CoordError> for MoveError {
    fn from(err: CoordError) -> Self {
        MoveError::BadSquare(err)
    }
}

/// Error type for game-level failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A move was attempted after the game reached a terminal status
    Over,
    /// The underlying move was rejected
    Move(MoveError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Over => write!(f, "Game is already over"),
            GameError::Move(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Over => None,
            GameError::Move(err) => Some(err),
        }
    }
}

impl From<MoveError> for GameError {
    fn from(err: MoveError) -> Self {
        GameError::Move(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_error_rank_bounds() {
        let err = CoordError::RankOutOfBounds { rank: 9 };
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn test_coord_error_file_bounds() {
        let err = CoordError::FileOutOfBounds { file: 12 };
        assert!(err.to_string().contains("12"));
    }

    #[test]
    fn test_coord_error_invalid_notation() {
        let err = CoordError::InvalidNotation {
            notation: "Z9".to_string(),
        };
        assert!(err.to_string().contains("Z9"));
    }

    #[test]
    fn test_move_error_wraps_coord_error() {
        let err = MoveError::from(CoordError::InvalidNotation {
            notation: "D99".to_string(),
        });
        assert!(err.to_string().contains("D99"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_move_error_wrong_owner() {
        let err = MoveError::WrongOwner {
            player: Color::White,
            piece: Color::Black,
        };
        assert!(err.to_string().contains("White"));
        assert!(err.to_string().contains("Black"));
    }

    #[test]
    fn test_move_error_rule_violation() {
        let from = "A1".parse().unwrap();
        let to = "B3".parse().unwrap();
        let err = MoveError::RuleViolation {
            kind: PieceKind::Rook,
            from,
            to,
        };
        assert!(err.to_string().contains("rook"));
        assert!(err.to_string().contains("A1"));
        assert!(err.to_string().contains("B3"));
    }

    #[test]
    fn test_game_error_over() {
        assert!(GameError::Over.to_string().contains("over"));
    }

    #[test]
    fn test_error_equality() {
        let err1 = CoordError::RankOutOfBounds { rank: 8 };
        let err2 = CoordError::RankOutOfBounds { rank: 8 };
        assert_eq!(err1, err2);
        assert_eq!(err1.clone(), err2);
    }
}
