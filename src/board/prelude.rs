//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//! ```

pub use super::{
    Board, BoardBuilder, Color, Coord, CoordError, Game, GameError, GameStatus, Move, MoveError,
    Piece, PieceId, PieceKind, Player, PlayerId, Square, SquareSpec, BOARD_SIZE,
};
