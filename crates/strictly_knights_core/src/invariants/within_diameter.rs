//! Diameter bound: the knight graph on 8x8 has diameter 6.

use super::Invariant;
use crate::path::KnightPath;

/// Longest shortest path on the board, in moves.
pub const KNIGHT_GRAPH_DIAMETER: usize = 6;

/// Invariant: A path has at most [`KNIGHT_GRAPH_DIAMETER`] moves.
pub struct WithinDiameterInvariant;

impl Invariant<KnightPath> for WithinDiameterInvariant {
    fn holds(path: &KnightPath) -> bool {
        path.len() <= KNIGHT_GRAPH_DIAMETER + 1
    }

    fn description() -> &'static str {
        "Path has at most 6 moves"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;
    use crate::search::shortest_path;

    #[test]
    fn test_corner_to_corner_is_exactly_diameter() {
        let a1 = Square::new(0, 0).unwrap();
        let h8 = Square::new(7, 7).unwrap();
        let path = shortest_path(a1, h8);
        assert_eq!(path.move_count(), Some(KNIGHT_GRAPH_DIAMETER));
        assert!(WithinDiameterInvariant::holds(&path));
    }

    #[test]
    fn test_overlong_path_fails() {
        let squares = (0..8).map(|f| Square::new(f, 0).unwrap()).collect();
        assert!(!WithinDiameterInvariant::holds(&KnightPath::new(squares)));
    }
}
