//! First-class invariants for reconstructed knight paths.
//!
//! Invariants are logical properties every path returned by the search must
//! satisfy. They are checked in debug builds and testable on their own.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants over the same state.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        collect(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        collect(violations)
    }
}

pub mod knight_steps;
pub mod no_repeats;
pub mod within_diameter;

pub use knight_steps::KnightStepsInvariant;
pub use no_repeats::NoRepeatedSquaresInvariant;
pub use within_diameter::WithinDiameterInvariant;

/// All knight path invariants as a composable set.
pub type KnightPathInvariants = (
    KnightStepsInvariant,
    NoRepeatedSquaresInvariant,
    WithinDiameterInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;
    use crate::path::KnightPath;
    use crate::search::shortest_path;

    fn sq(file: i32, rank: i32) -> Square {
        Square::new(file, rank).unwrap()
    }

    #[test]
    fn test_invariant_set_holds_for_every_path_from_corner() {
        for target in Square::all() {
            let path = shortest_path(sq(0, 0), target);
            assert!(KnightPathInvariants::check_all(&path).is_ok(), "{:?}", path);
        }
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        // Eight king steps along the bottom rank and back: every invariant fails.
        let mut squares: Vec<Square> = (0..8).map(|f| sq(f, 0)).collect();
        squares.push(sq(0, 0));
        let path = KnightPath::new(squares);

        let violations = KnightPathInvariants::check_all(&path).unwrap_err();
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (KnightStepsInvariant, NoRepeatedSquaresInvariant);
        let path = KnightPath::new(vec![sq(0, 0), sq(1, 2), sq(0, 0)]);

        let violations = TwoInvariants::check_all(&path).unwrap_err();
        assert_eq!(
            violations,
            vec![InvariantViolation::new(NoRepeatedSquaresInvariant::description())]
        );
    }
}
