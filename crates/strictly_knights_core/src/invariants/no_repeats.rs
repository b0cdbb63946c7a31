//! No repeated squares: a shortest path never revisits a square.

use std::collections::HashSet;

use super::Invariant;
use crate::path::KnightPath;

/// Invariant: Each square appears at most once in the path.
pub struct NoRepeatedSquaresInvariant;

impl Invariant<KnightPath> for NoRepeatedSquaresInvariant {
    fn holds(path: &KnightPath) -> bool {
        let mut seen = HashSet::with_capacity(path.len());
        path.squares().iter().all(|square| seen.insert(*square))
    }

    fn description() -> &'static str {
        "No square appears twice in the path"
    }
}
