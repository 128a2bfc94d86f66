//! First-class invariants for the Monty Hall round.
//!
//! Each invariant is a logical property of the [`Round`] that must hold
//! after every engine operation. They are checked via debug assertions at
//! each mutation point and are testable independently.

use crate::types::Round;

mod held_concealed;
mod opened_well_formed;
mod prize_concealed;

pub use held_concealed::HeldDoorConcealed;
pub use opened_well_formed::OpenedDoorsWellFormed;
pub use prize_concealed::PrizeConcealed;

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

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks every invariant in the set, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
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

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All round invariants as a composable set.
pub type MontyInvariants = (OpenedDoorsWellFormed, HeldDoorConcealed, PrizeConcealed);

/// Asserts every round invariant in debug builds.
///
/// Release builds skip the check; the engine's own transition guards are
/// the production enforcement.
pub(crate) fn assert_round_invariants(round: &Round) {
    #[cfg(debug_assertions)]
    if let Err(violations) = MontyInvariants::check_all(round) {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        panic!("round invariant violated: {}", descriptions);
    }
    #[cfg(not(debug_assertions))]
    let _ = round;
}
