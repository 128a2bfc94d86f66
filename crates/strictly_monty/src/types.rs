//! Core domain types for the Monty Hall engine.

use crate::phases::{Outcome, Phase};
use serde::{Deserialize, Serialize};

/// A door on the stage, identified by zero-based index.
///
/// Display is always one-based (`Door 1`..`Door N`), and "no door" is
/// `Option::None` rather than any sentinel index, so door 0 can never be
/// mistaken for "unset".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Door(usize);

impl Door {
    /// Creates a door from its zero-based index.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the zero-based index.
    pub const fn index(self) -> usize {
        self.0
    }

    /// Returns the one-based stage number, as shown to the player.
    pub const fn number(self) -> usize {
        self.0 + 1
    }
}

impl std::fmt::Display for Door {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Door {}", self.number())
    }
}

/// The canonical per-round record.
///
/// One live instance exists per play-through, owned exclusively by the
/// [`Game`](crate::Game) engine. External consumers read it through getters
/// or through an emitted [`Snapshot`](crate::Snapshot); there is no outside
/// mutation path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub(crate) door_count: usize,
    pub(crate) prize_door: Option<Door>,
    pub(crate) selected_door: Option<Door>,
    pub(crate) opened_doors: Vec<Door>,
    pub(crate) switch_target: Option<Door>,
    pub(crate) final_choice: Option<Door>,
    pub(crate) phase: Phase,
    pub(crate) outcome: Option<Outcome>,
}

impl Round {
    /// Creates an empty round in the Setup phase for the given door count.
    pub(crate) fn new(door_count: usize) -> Self {
        Self {
            door_count,
            prize_door: None,
            selected_door: None,
            opened_doors: Vec::new(),
            switch_target: None,
            final_choice: None,
            phase: Phase::Setup,
            outcome: None,
        }
    }

    /// Returns the number of doors this round.
    pub fn door_count(&self) -> usize {
        self.door_count
    }

    /// Returns the prize door, once drawn.
    ///
    /// The engine never surfaces this through a snapshot before the Result
    /// phase; direct access exists for rule evaluation and tests.
    pub fn prize_door(&self) -> Option<Door> {
        self.prize_door
    }

    /// Returns the player's originally selected door.
    pub fn selected_door(&self) -> Option<Door> {
        self.selected_door
    }

    /// Returns the doors opened so far, in reveal order.
    pub fn opened_doors(&self) -> &[Door] {
        &self.opened_doors
    }

    /// Returns the single alternative door offered at decision time.
    pub fn switch_target(&self) -> Option<Door> {
        self.switch_target
    }

    /// Returns the door the player is ultimately judged on.
    pub fn final_choice(&self) -> Option<Door> {
        self.final_choice
    }

    /// Returns the current protocol phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the round outcome, defined only in the Result phase.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the door currently attributed to the player: the final
    /// choice once a decision has been made, otherwise the selected door.
    pub fn held_door(&self) -> Option<Door> {
        self.final_choice.or(self.selected_door)
    }

    /// Returns true if the door has already been revealed.
    pub fn is_open(&self, door: Door) -> bool {
        self.opened_doors.contains(&door)
    }
}
