//! Breadth-first shortest-path search over the knight-move graph.
//!
//! Edges are never precomputed: each dequeued square asks the board model
//! for its knight moves. Per-square state lives in a fixed array of 64
//! records indexed by [`Square::index`], allocated fresh for every query.

use std::collections::VecDeque;

use crate::board::{SQUARE_COUNT, Square};
use crate::error::InvalidSquareError;
use crate::invariants::{InvariantSet, KnightPathInvariants};
use crate::path::{DistanceMap, KnightPath};
use tracing::{debug, instrument};

/// Search state for a single square.
#[derive(Debug, Clone, Copy, Default)]
struct SearchRecord {
    /// Reached from some processed square (or is the start).
    discovered: bool,
    /// Dequeued and all knight moves explored.
    visited: bool,
    distance: u8,
    parent: Option<Square>,
}

/// Per-query BFS state: frontier queue plus one record per square.
#[derive(Debug)]
struct Search {
    records: [SearchRecord; SQUARE_COUNT],
    frontier: VecDeque<Square>,
}

impl Search {
    fn new(start: Square) -> Self {
        let mut records = [SearchRecord::default(); SQUARE_COUNT];
        records[start.index()].discovered = true;

        let mut frontier = VecDeque::with_capacity(SQUARE_COUNT);
        frontier.push_back(start);

        Self { records, frontier }
    }

    fn record(&self, square: Square) -> &SearchRecord {
        &self.records[square.index()]
    }

    /// Runs BFS until `target` is discovered or the frontier is exhausted.
    ///
    /// Returns true if `target` was discovered. With no target the whole
    /// reachable component is explored.
    fn run(&mut self, target: Option<Square>) -> bool {
        while let Some(current) = self.frontier.pop_front() {
            let distance = self.record(current).distance;

            for next in current.knight_moves() {
                let record = &mut self.records[next.index()];
                if record.discovered {
                    continue;
                }

                record.discovered = true;
                record.parent = Some(current);
                record.distance = distance + 1;

                if Some(next) == target {
                    debug!(%next, distance = distance + 1, "Target discovered");
                    return true;
                }
                self.frontier.push_back(next);
            }

            self.records[current.index()].visited = true;
        }
        false
    }

    /// Walks parent pointers from `end` back to the start.
    fn reconstruct(&self, end: Square) -> KnightPath {
        let mut path = vec![end];
        let mut current = end;

        while let Some(parent) = self.record(current).parent {
            path.push(parent);
            current = parent;
        }

        path.reverse();
        KnightPath::new(path)
    }

    fn into_distances(self, start: Square) -> DistanceMap {
        let mut distances = [None; SQUARE_COUNT];
        for (slot, record) in distances.iter_mut().zip(self.records.iter()) {
            if record.discovered {
                *slot = Some(record.distance);
            }
        }
        DistanceMap::new(start, distances)
    }
}

/// Finds a shortest knight path between two on-board squares.
///
/// Returns `[start]` when `start == end`, and an empty path if `end` cannot
/// be reached (which does not happen on the full 8x8 board).
#[instrument]
pub fn shortest_path(start: Square, end: Square) -> KnightPath {
    if start == end {
        return KnightPath::single(start);
    }

    let mut search = Search::new(start);
    if !search.run(Some(end)) {
        debug!("Frontier exhausted without reaching target");
        return KnightPath::empty();
    }

    let path = search.reconstruct(end);
    debug_assert!(
        KnightPathInvariants::check_all(&path).is_ok(),
        "reconstructed path violates invariants: {:?}",
        path
    );
    debug!(moves = ?path.move_count(), "Path reconstructed");
    path
}

/// Finds a shortest knight path between two coordinate pairs.
///
/// # Errors
///
/// Returns [`InvalidSquareError`] if either pair lies off the board. The
/// start is checked before the end, and nothing is searched on failure.
#[instrument]
pub fn find_shortest_knight_path(
    start: (i32, i32),
    end: (i32, i32),
) -> Result<KnightPath, InvalidSquareError> {
    let start = Square::try_from(start)?;
    let end = Square::try_from(end)?;
    Ok(shortest_path(start, end))
}

/// Computes the knight distance from `start` to every square.
///
/// # Errors
///
/// Returns [`InvalidSquareError`] if `start` lies off the board.
#[instrument]
pub fn distances_from(start: (i32, i32)) -> Result<DistanceMap, InvalidSquareError> {
    let start = Square::try_from(start)?;
    let mut search = Search::new(start);
    search.run(None);
    let map = search.into_distances(start);
    debug!(max = ?map.max(), "Distance map complete");
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(file: i32, rank: i32) -> Square {
        Square::new(file, rank).unwrap()
    }

    #[test]
    fn test_same_square_is_single_element_path() {
        let path = shortest_path(sq(4, 4), sq(4, 4));
        assert_eq!(path.squares(), &[sq(4, 4)]);
        assert_eq!(path.move_count(), Some(0));
    }

    #[test]
    fn test_one_move_path() {
        let path = shortest_path(sq(0, 0), sq(1, 2));
        assert_eq!(path.squares(), &[sq(0, 0), sq(1, 2)]);
    }

    #[test]
    fn test_ties_follow_canonical_offset_order() {
        // [0,0] reaches [2,1] before [1,2], so [2,1] is the parent of [3,3].
        let path = shortest_path(sq(0, 0), sq(3, 3));
        assert_eq!(path.squares(), &[sq(0, 0), sq(2, 1), sq(3, 3)]);
    }

    #[test]
    fn test_early_exit_leaves_target_and_its_parent_unvisited() {
        let mut search = Search::new(sq(0, 0));
        assert!(search.run(Some(sq(7, 7))));
        let path = search.reconstruct(sq(7, 7));
        assert_eq!(path.move_count(), Some(6));

        let (processed, tail) = path.squares().split_at(path.len() - 2);
        assert!(processed.iter().all(|s| search.record(*s).visited));
        assert!(tail.iter().all(|s| !search.record(*s).visited));
    }

    #[test]
    fn test_full_run_discovers_every_square() {
        let mut search = Search::new(sq(0, 0));
        assert!(!search.run(None));
        assert!(search.records.iter().all(|r| r.discovered && r.visited));
    }

    #[test]
    fn test_distances_from_corner() {
        let map = distances_from((0, 0)).unwrap();
        assert_eq!(map.get(sq(0, 0)), Some(0));
        assert_eq!(map.get(sq(1, 1)), Some(4));
        assert_eq!(map.get(sq(7, 7)), Some(6));
        assert_eq!(map.max(), Some(6));
    }

    #[test]
    fn test_invalid_start_rejected_before_end() {
        let err = find_shortest_knight_path((-1, 0), (9, 9)).unwrap_err();
        assert_eq!(err.coords(), (-1, 0));
    }
}
