//! Outcome judgement.

use crate::phases::Outcome;
use crate::types::Door;
use tracing::instrument;

/// Judges a resolved round: the player wins exactly when the door they are
/// judged on hides the car.
#[instrument]
pub fn judge(final_choice: Door, prize: Door) -> Outcome {
    if final_choice == prize {
        Outcome::Won
    } else {
        Outcome::Lost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_doors_win() {
        assert_eq!(judge(Door::new(2), Door::new(2)), Outcome::Won);
        assert!(judge(Door::new(0), Door::new(0)).is_win());
    }

    #[test]
    fn test_mismatched_doors_lose() {
        assert_eq!(judge(Door::new(0), Door::new(2)), Outcome::Lost);
    }
}
