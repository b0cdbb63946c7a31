//! Knight steps invariant: every move in the path is a legal knight move.

use super::Invariant;
use crate::path::KnightPath;

/// Invariant: Consecutive squares are one knight move apart.
pub struct KnightStepsInvariant;

impl Invariant<KnightPath> for KnightStepsInvariant {
    fn holds(path: &KnightPath) -> bool {
        path.moves().all(|(from, to)| to.is_knight_move_from(from))
    }

    fn description() -> &'static str {
        "Consecutive squares are a knight move apart"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    fn sq(file: i32, rank: i32) -> Square {
        Square::new(file, rank).unwrap()
    }

    #[test]
    fn test_empty_and_single_paths_hold() {
        assert!(KnightStepsInvariant::holds(&KnightPath::empty()));
        assert!(KnightStepsInvariant::holds(&KnightPath::single(sq(3, 3))));
    }

    #[test]
    fn test_knight_route_holds() {
        let path = KnightPath::new(vec![sq(0, 0), sq(1, 2), sq(3, 3)]);
        assert!(KnightStepsInvariant::holds(&path));
    }

    #[test]
    fn test_adjacent_step_fails() {
        let path = KnightPath::new(vec![sq(7, 7), sq(7, 6)]);
        assert!(!KnightStepsInvariant::holds(&path));
    }
}
