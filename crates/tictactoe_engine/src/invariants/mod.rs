//! First-class invariants over the snapshot history.
//!
//! Invariants are logical properties that must hold after every transition.
//! The controller checks them in debug builds; tests check them directly.

use crate::history::HistoryLog;
use tracing::error;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
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
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
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

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if let Err(mut first) = <(I1, I2) as InvariantSet<S>>::check_all(state) {
            violations.append(&mut first);
        }

        if let Err(mut second) = <(I3, I4) as InvariantSet<S>>::check_all(state) {
            violations.append(&mut second);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_marks;
pub mod cursor_in_range;
pub mod empty_genesis;
pub mod single_step;

pub use alternating_marks::AlternatingMarksInvariant;
pub use cursor_in_range::CursorInRangeInvariant;
pub use empty_genesis::EmptyGenesisInvariant;
pub use single_step::SingleStepInvariant;

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    EmptyGenesisInvariant,
    SingleStepInvariant,
    AlternatingMarksInvariant,
    CursorInRangeInvariant,
);

/// Panics in debug builds if any history invariant is violated.
pub(crate) fn assert_invariants(log: &HistoryLog) {
    let result = HistoryInvariants::check_all(log);
    if let Err(violations) = &result {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        error!(%descriptions, "History invariant violated");
    }
    debug_assert!(result.is_ok(), "History invariant violated: {:?}", result);
}
