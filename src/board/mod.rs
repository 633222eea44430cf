//! Rules engine for a capture-the-king chess variant.
//!
//! Models the board, pieces, per-piece move legality, move execution and a
//! minimal game state machine. The game ends when a king is captured; there
//! is no attack-set check detection, castling or en passant. Presentation
//! (parsing full move strings, rendering) belongs to the embedding
//! application, which reads positions through the accessors here.
//!
//! # Example
//! ```
//! use chess_rules::board::{Game, GameStatus};
//!
//! let mut game = Game::new();
//! game.play_round("D2", "D4", "D7", "D5").unwrap();
//! assert_eq!(game.round(), 2);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

mod builder;
mod error;
mod game;
mod moves;
mod player;
pub mod prelude;
mod rules;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{CoordError, GameError, MoveError};
pub use game::{Game, GameStatus};
pub use moves::{Move, SquareSpec};
pub use player::Player;
pub use state::{Board, Square};
pub use types::{Color, Coord, Piece, PieceId, PieceKind, PlayerId, BOARD_SIZE};
