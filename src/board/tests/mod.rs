//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `board.rs` - Grid construction, square colors, line queries, bounds
//! - `rules.rs` - Per-kind movement legality
//! - `moves.rs` - Move validation, execution and promotion
//! - `game.rs` - Setup census, terminal states, round play
//! - `proptest.rs` - Property-based tests

mod board;

use crate::board::Coord;

/// Shorthand used across the test files.
pub(crate) fn at(rank: usize, file: usize) -> Coord {
    Coord::new(rank, file).unwrap()
}
