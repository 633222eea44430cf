//! Board coordinates and notation parsing.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::CoordError;

/// Number of files and ranks on the board.
pub const BOARD_SIZE: usize = 8;

/// A board coordinate, stored as 0-based (rank, file).
///
/// Rank 0 is rank 1 (White's back rank), file 0 is file A. Construction is
/// bounds-checked; a `Coord` that exists always names one of the 64 squares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord {
    rank: u8,
    file: u8,
}

impl Coord {
    /// Create a coordinate with bounds checking.
    #[must_use]
    pub fn new(rank: usize, file: usize) -> Option<Self> {
        if rank < BOARD_SIZE && file < BOARD_SIZE {
            Some(Coord {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            None
        }
    }

    /// Get the rank index (0-7, where 0 = rank 1).
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.rank as usize
    }

    /// Get the file index (0-7, where 0 = file A).
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.file as usize
    }

    /// Get the square's index (0-63, A1=0, B1=1, ..., H8=63).
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.rank as usize * BOARD_SIZE + self.file as usize
    }

    /// Create a coordinate from a square index (0-63).
    #[inline]
    #[must_use]
    pub(crate) const fn from_index(idx: usize) -> Self {
        Coord {
            rank: (idx / BOARD_SIZE) as u8,
            file: (idx % BOARD_SIZE) as u8,
        }
    }

    /// The coordinate `dr` ranks and `df` files away, or `None` when that
    /// would leave the board. Edge probing is a range check, not an error.
    #[must_use]
    pub fn offset(self, dr: isize, df: isize) -> Option<Coord> {
        let rank = self.rank as isize + dr;
        let file = self.file as isize + df;
        if (0..BOARD_SIZE as isize).contains(&rank) && (0..BOARD_SIZE as isize).contains(&file) {
            Some(Coord {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            None
        }
    }

    /// The file letter (`'A'`..=`'H'`).
    #[inline]
    #[must_use]
    pub const fn file_char(self) -> char {
        (b'A' + self.file) as char
    }

    /// The rank digit (`'1'`..=`'8'`).
    #[inline]
    #[must_use]
    pub const fn rank_char(self) -> char {
        (b'1' + self.rank) as char
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl TryFrom<(usize, usize)> for Coord {
    type Error = CoordError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        if rank >= BOARD_SIZE {
            return Err(CoordError::RankOutOfBounds { rank });
        }
        if file >= BOARD_SIZE {
            return Err(CoordError::FileOutOfBounds { file });
        }
        Ok(Coord {
            rank: rank as u8,
            file: file as u8,
        })
    }
}

impl FromStr for Coord {
    type Err = CoordError;

    /// Parse two-character notation: file letter then rank digit, e.g. `"D2"`.
    /// Lowercase files are accepted and upper-cased.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CoordError::InvalidNotation {
            notation: s.to_string(),
        };

        let mut chars = s.chars();
        let (file_char, rank_char) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file, rank),
            _ => return Err(malformed()),
        };

        let file = match file_char.to_ascii_uppercase() {
            c @ 'A'..='H' => c as usize - 'A' as usize,
            _ => return Err(malformed()),
        };
        let rank = match rank_char {
            c @ '1'..='8' => c as usize - '1' as usize,
            _ => return Err(malformed()),
        };

        Ok(Coord {
            rank: rank as u8,
            file: file as u8,
        })
    }
}
