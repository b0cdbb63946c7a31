//! Error types for board validation.

use derive_more::{Display, Error};

/// A coordinate pair that does not lie on the 8x8 board.
///
/// Raised before any search state is allocated; callers must supply
/// coordinates within `[0, 7]` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display(
    "Invalid square [{},{}]: positions must lie within [0, 0] and [7, 7]",
    file,
    rank
)]
pub struct InvalidSquareError {
    /// Offending file coordinate.
    pub file: i32,
    /// Offending rank coordinate.
    pub rank: i32,
}

impl InvalidSquareError {
    /// Creates an error for the given coordinates.
    pub fn new(file: i32, rank: i32) -> Self {
        Self { file, rank }
    }

    /// Returns the rejected coordinates as a pair.
    pub fn coords(&self) -> (i32, i32) {
        (self.file, self.rank)
    }
}

/// Failure to parse a square from `"file,rank"` text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, derive_more::From)]
pub enum ParseSquareError {
    /// Input was not two comma-separated integers.
    #[display("Malformed square {:?}: expected \"file,rank\" such as \"0,7\"", _0)]
    Malformed(#[error(not(source))] String),

    /// Input parsed but lies off the board.
    #[display("{}", _0)]
    OffBoard(InvalidSquareError),
}
