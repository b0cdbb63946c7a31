//! Board and knight-move model for the 8x8 chessboard.
//!
//! Squares are validated on construction, so any [`Square`] value is known
//! to lie on the board. Knight moves are generated lazily from the eight
//! canonical offsets in [`KnightOffset`] declaration order.

use crate::error::{InvalidSquareError, ParseSquareError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Number of files (and ranks) on the board.
pub const BOARD_SIZE: i32 = 8;

/// Number of squares on the board.
pub const SQUARE_COUNT: usize = 64;

/// Returns true iff both coordinates lie in `[0, 7]`.
pub fn is_on_board(file: i32, rank: i32) -> bool {
    (0..BOARD_SIZE).contains(&file) && (0..BOARD_SIZE).contains(&rank)
}

/// A square on the board, identified by file and rank (each 0-7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(i32, i32)", into = "(i32, i32)")]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Creates a square, rejecting coordinates off the board.
    pub fn new(file: i32, rank: i32) -> Result<Self, InvalidSquareError> {
        if !is_on_board(file, rank) {
            return Err(InvalidSquareError::new(file, rank));
        }
        Ok(Self {
            file: file as u8,
            rank: rank as u8,
        })
    }

    /// File coordinate (0-7).
    pub fn file(self) -> u8 {
        self.file
    }

    /// Rank coordinate (0-7).
    pub fn rank(self) -> u8 {
        self.rank
    }

    /// Canonical index `rank * 8 + file` (0-63).
    pub fn index(self) -> usize {
        self.rank as usize * BOARD_SIZE as usize + self.file as usize
    }

    /// Creates a square from its canonical index.
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= SQUARE_COUNT {
            return None;
        }
        Some(Self {
            file: (index % BOARD_SIZE as usize) as u8,
            rank: (index / BOARD_SIZE as usize) as u8,
        })
    }

    /// All 64 squares in canonical index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..SQUARE_COUNT).filter_map(Square::from_index)
    }

    /// Coordinates as a signed pair.
    pub fn coords(self) -> (i32, i32) {
        (self.file as i32, self.rank as i32)
    }

    /// Squares one knight move away, in canonical offset order.
    #[instrument]
    pub fn knight_moves(self) -> Vec<Square> {
        KnightOffset::iter()
            .filter_map(|offset| offset.apply(self))
            .collect()
    }

    /// Whether `other` is exactly one knight move away from this square.
    pub fn is_knight_move_from(self, other: Square) -> bool {
        let (df, dr) = (
            (self.file as i32 - other.file as i32).abs(),
            (self.rank as i32 - other.rank as i32).abs(),
        );
        (df == 1 && dr == 2) || (df == 2 && dr == 1)
    }

    /// Algebraic name of the square (`a1` for `[0,0]`, `h8` for `[7,7]`).
    pub fn algebraic(self) -> String {
        format!("{}{}", (b'a' + self.file) as char, self.rank + 1)
    }
}

impl TryFrom<(i32, i32)> for Square {
    type Error = InvalidSquareError;

    fn try_from((file, rank): (i32, i32)) -> Result<Self, Self::Error> {
        Self::new(file, rank)
    }
}

impl From<Square> for (i32, i32) {
    fn from(square: Square) -> Self {
        square.coords()
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{}]", self.file, self.rank)
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    /// Parses `"file,rank"`, optionally wrapped in brackets (`"[0,7]"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('[').trim_end_matches(']');
        let malformed = || ParseSquareError::Malformed(s.to_string());

        let (file, rank) = trimmed.split_once(',').ok_or_else(malformed)?;
        let file: i32 = file.trim().parse().map_err(|_| malformed())?;
        let rank: i32 = rank.trim().parse().map_err(|_| malformed())?;

        Ok(Square::new(file, rank)?)
    }
}

/// The eight knight offsets, declared in canonical enumeration order.
///
/// Declaration order decides neighbor order during search, and therefore
/// which of several equally short paths is reconstructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum KnightOffset {
    /// One file left, two ranks down.
    LeftDownDown,
    /// Two files left, one rank down.
    LeftLeftDown,
    /// Two files left, one rank up.
    LeftLeftUp,
    /// One file left, two ranks up.
    LeftUpUp,
    /// One file right, two ranks down.
    RightDownDown,
    /// Two files right, one rank down.
    RightRightDown,
    /// Two files right, one rank up.
    RightRightUp,
    /// One file right, two ranks up.
    RightUpUp,
}

impl KnightOffset {
    /// `(file, rank)` delta of this offset.
    pub fn delta(self) -> (i32, i32) {
        match self {
            KnightOffset::LeftDownDown => (-1, -2),
            KnightOffset::LeftLeftDown => (-2, -1),
            KnightOffset::LeftLeftUp => (-2, 1),
            KnightOffset::LeftUpUp => (-1, 2),
            KnightOffset::RightDownDown => (1, -2),
            KnightOffset::RightRightDown => (2, -1),
            KnightOffset::RightRightUp => (2, 1),
            KnightOffset::RightUpUp => (1, 2),
        }
    }

    /// Applies the offset, returning `None` if it leaves the board.
    pub fn apply(self, from: Square) -> Option<Square> {
        let (df, dr) = self.delta();
        let (file, rank) = from.coords();
        Square::new(file + df, rank + dr).ok()
    }
}

/// Legal knight destinations from raw coordinates.
///
/// Returns an empty list when the coordinates are themselves off the board.
#[instrument]
pub fn knight_moves(file: i32, rank: i32) -> Vec<Square> {
    match Square::new(file, rank) {
        Ok(square) => square.knight_moves(),
        Err(_) => Vec::new(),
    }
}
