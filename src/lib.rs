pub mod board;

pub use board::{Board, Color, Coord, Game, GameStatus, Move, PieceKind, Player};
