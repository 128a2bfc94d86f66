//! Prize invariant: the car is never revealed before the round resolves.

use super::Invariant;
use crate::phases::Phase;
use crate::types::Round;

/// Invariant: the prize door appears in the opened set only once the round
/// has reached Result (the instant-loss record, or the last post-decision
/// opening).
pub struct PrizeConcealed;

impl Invariant<Round> for PrizeConcealed {
    fn holds(round: &Round) -> bool {
        if round.phase() == Phase::Result {
            return true;
        }
        match round.prize_door() {
            Some(prize) => !round.is_open(prize),
            None => true,
        }
    }

    fn description() -> &'static str {
        "The prize door is never opened before the round is resolved"
    }
}
