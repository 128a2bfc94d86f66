//! Game configuration: reveal policy and door-count bounds.
//!
//! The original game shipped three near-identical rule sets; here they
//! collapse into one engine parameterized by a [`RevealPolicy`] and a
//! [`DoorRange`].

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Hard bounds on the playable door count. Keeping the minimum at 3
/// guarantees the host always has at least one door to open (N-2 >= 1).
const MIN_DOORS: usize = 3;
const MAX_DOORS: usize = 10;

/// Who opens the non-prize doors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevealPolicy {
    /// The host opens N-2 goat doors automatically after the selection.
    HostAuto,
    /// The player opens doors manually; opening the prize door is an
    /// instant loss before the decision.
    UserManual,
}

impl std::fmt::Display for RevealPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RevealPolicy::HostAuto => write!(f, "host-automatic"),
            RevealPolicy::UserManual => write!(f, "user-manual"),
        }
    }
}

/// Inclusive door-count bounds a game will accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorRange {
    min: usize,
    max: usize,
}

impl DoorRange {
    /// Creates a range after validating `3 <= min <= max <= 10`.
    #[instrument]
    pub fn new(min: usize, max: usize) -> Result<Self, ConfigError> {
        if min < MIN_DOORS || max > MAX_DOORS || min > max {
            return Err(ConfigError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Returns the smallest accepted door count.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Returns the largest accepted door count.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Returns true if the count is accepted.
    pub fn contains(&self, door_count: usize) -> bool {
        (self.min..=self.max).contains(&door_count)
    }
}

impl Default for DoorRange {
    fn default() -> Self {
        Self {
            min: MIN_DOORS,
            max: MAX_DOORS,
        }
    }
}

/// Static rule set for a game: who reveals, and how many doors are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    policy: RevealPolicy,
    doors: DoorRange,
}

impl GameConfig {
    /// Creates a config from a policy and door bounds.
    pub fn new(policy: RevealPolicy, doors: DoorRange) -> Self {
        Self { policy, doors }
    }

    /// Host-automatic reveal, 3 to 10 doors.
    pub fn host_auto() -> Self {
        Self::new(RevealPolicy::HostAuto, DoorRange::default())
    }

    /// User-manual reveal, 3 to 10 doors.
    pub fn user_manual() -> Self {
        Self::new(RevealPolicy::UserManual, DoorRange::default())
    }

    /// User-manual reveal on the wide stage, 7 to 10 doors.
    pub fn user_manual_wide() -> Self {
        Self::new(
            RevealPolicy::UserManual,
            DoorRange {
                min: 7,
                max: MAX_DOORS,
            },
        )
    }

    /// Returns the reveal policy.
    pub fn policy(&self) -> RevealPolicy {
        self.policy
    }

    /// Returns the accepted door-count bounds.
    pub fn doors(&self) -> DoorRange {
        self.doors
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::host_auto()
    }
}

/// Error raised when configuration is rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ConfigError {
    /// The requested door count falls outside the game's bounds.
    #[display(
        "Door count {} is not allowed - this game supports {} to {} doors",
        given,
        min,
        max
    )]
    DoorCountOutOfRange {
        /// The rejected count.
        given: usize,
        /// Smallest accepted count.
        min: usize,
        /// Largest accepted count.
        max: usize,
    },

    /// The bounds themselves are malformed.
    #[display(
        "Invalid door range {} to {} - bounds must satisfy 3 <= min <= max <= 10",
        min,
        max
    )]
    InvalidRange {
        /// Requested lower bound.
        min: usize,
        /// Requested upper bound.
        max: usize,
    },
}

impl std::error::Error for ConfigError {}
