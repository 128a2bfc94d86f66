//! Held-door invariant: the player's live door stays closed until the end.

use super::Invariant;
use crate::phases::Phase;
use crate::types::Round;

/// Invariant: outside the Result phase, the held door (final choice if
/// decided, otherwise the selected door) is never in the opened set.
///
/// Result is exempt because the instant-loss record writes the opened
/// prize door as the final choice.
pub struct HeldDoorConcealed;

impl Invariant<Round> for HeldDoorConcealed {
    fn holds(round: &Round) -> bool {
        if round.phase() == Phase::Result {
            return true;
        }
        match round.held_door() {
            Some(held) => !round.is_open(held),
            None => true,
        }
    }

    fn description() -> &'static str {
        "The held door is never opened before the round is resolved"
    }
}
