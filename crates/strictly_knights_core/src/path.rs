//! Search results: reconstructed paths and distance maps.

use crate::board::{BOARD_SIZE, SQUARE_COUNT, Square};
use serde::Serialize;

/// An ordered sequence of squares from start to end, inclusive.
///
/// Consecutive squares are one knight move apart. The path is empty only
/// when the target could not be reached.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct KnightPath {
    moves: Option<usize>,
    path: Vec<Square>,
}

impl KnightPath {
    /// Wraps a sequence of squares.
    pub(crate) fn new(path: Vec<Square>) -> Self {
        Self {
            moves: path.len().checked_sub(1),
            path,
        }
    }

    /// The unreachable-target result.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A zero-move path on a single square.
    pub fn single(square: Square) -> Self {
        Self::new(vec![square])
    }

    /// Squares in travel order.
    pub fn squares(&self) -> &[Square] {
        &self.path
    }

    /// Number of squares, including start and end.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// True for the unreachable-target result.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Number of knight moves (`len - 1`); `None` for an empty path.
    pub fn move_count(&self) -> Option<usize> {
        self.moves
    }

    /// First square of the path.
    pub fn start(&self) -> Option<Square> {
        self.path.first().copied()
    }

    /// Last square of the path.
    pub fn end(&self) -> Option<Square> {
        self.path.last().copied()
    }

    /// Each move as a `(from, to)` pair.
    pub fn moves(&self) -> impl Iterator<Item = (Square, Square)> + '_ {
        self.path.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

impl IntoIterator for KnightPath {
    type Item = Square;
    type IntoIter = std::vec::IntoIter<Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.path.into_iter()
    }
}

impl<'a> IntoIterator for &'a KnightPath {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.path.iter()
    }
}

/// Knight distances from one start square to every square on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap {
    start: Square,
    distances: [Option<u8>; SQUARE_COUNT],
}

impl DistanceMap {
    pub(crate) fn new(start: Square, distances: [Option<u8>; SQUARE_COUNT]) -> Self {
        Self { start, distances }
    }

    /// The square distances are measured from.
    pub fn start(&self) -> Square {
        self.start
    }

    /// Moves needed to reach `square`, or `None` if it is unreachable.
    pub fn get(&self, square: Square) -> Option<u8> {
        self.distances[square.index()]
    }

    /// Largest finite distance on the board.
    pub fn max(&self) -> Option<u8> {
        self.distances.iter().flatten().copied().max()
    }

    /// Ranks from 7 down to 0, each as eight file-ordered distances.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<u8>]> + '_ {
        self.distances.chunks(BOARD_SIZE as usize).rev()
    }
}
