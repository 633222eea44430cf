//! Core value types: coordinates, pieces, colors and handles.

mod coord;
mod piece;

pub use coord::{Coord, BOARD_SIZE};
pub use piece::{Color, Piece, PieceId, PieceKind, PlayerId};
