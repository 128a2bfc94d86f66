//! Protocol phases and terminal outcomes.

use serde::{Deserialize, Serialize};

/// Protocol state of a round.
///
/// `Revealing` covers both reveal policies: the host working through its
/// schedule under [`RevealPolicy::HostAuto`](crate::RevealPolicy), and the
/// player opening doors under `UserManual` (which visits `Revealing` twice,
/// before and after the decision).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Phase {
    /// Door count is being configured; no round is live.
    Setup,
    /// Waiting for the player's initial door selection.
    Choosing,
    /// Non-prize doors are being opened.
    Revealing,
    /// Two doors remain closed; awaiting stick-or-switch.
    Decision,
    /// Terminal. The outcome is decided.
    Result,
}

impl Phase {
    /// Returns true once the round can no longer change.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Result)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Setup => "Setup",
            Phase::Choosing => "Choosing",
            Phase::Revealing => "Revealing",
            Phase::Decision => "Decision",
            Phase::Result => "Result",
        };
        write!(f, "{}", name)
    }
}

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The final choice hid the car.
    Won,
    /// The final choice hid a goat.
    Lost,
}

impl Outcome {
    /// Returns true if the player won the car.
    pub fn is_win(self) -> bool {
        matches!(self, Outcome::Won)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won => write!(f, "won"),
            Outcome::Lost => write!(f, "lost"),
        }
    }
}
