//! First-class player actions and the engine's rejection taxonomy.

use crate::config::RevealPolicy;
use crate::phases::Phase;
use crate::types::Door;
use serde::{Deserialize, Serialize};

/// The pivotal stick-or-switch decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    /// Keep the originally held door.
    Stick,
    /// Take the one remaining closed alternative.
    Switch,
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Stick => write!(f, "stick"),
            Decision::Switch => write!(f, "switch"),
        }
    }
}

/// Error raised when an operation is rejected.
///
/// A rejected operation never mutates the round; the `Display` text is the
/// corrective message the presentation layer shows the player.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The operation is not legal in the current phase.
    #[display("Cannot {} during the {} phase", _0, _1)]
    Phase(&'static str, Phase),

    /// The door index is outside this round's range.
    #[display("{} does not exist - this round has {} doors", _0, _1)]
    DoorOutOfRange(Door, usize),

    /// The target is the player's own held door.
    #[display("{} is the door you are holding - pick a different one", _0)]
    HeldDoor(Door),

    /// The target door has already been revealed.
    #[display("{} is already open", _0)]
    AlreadyOpen(Door),

    /// The operation belongs to the other reveal policy.
    #[display("Cannot {} - this game uses the {} reveal policy", _0, _1)]
    Policy(&'static str, RevealPolicy),
}

impl std::error::Error for GameError {}
