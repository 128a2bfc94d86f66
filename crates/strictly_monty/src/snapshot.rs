//! Read-only state view for the presentation layer.

use crate::phases::{Outcome, Phase};
use crate::types::Door;
use serde::Serialize;

/// Everything the presentation layer may render, and nothing it may change.
///
/// Emitted by [`Game::snapshot`](crate::Game::snapshot) after each
/// operation; the engine keeps the only authoritative copy of the round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Current protocol phase.
    pub phase: Phase,
    /// Number of doors this round.
    pub door_count: usize,
    /// The player's originally selected door.
    pub selected_door: Option<Door>,
    /// The prize door. Concealed (`None`) until the Result phase so the
    /// answer cannot leak early.
    pub prize_door: Option<Door>,
    /// Doors revealed so far, in reveal order.
    pub opened_doors: Vec<Door>,
    /// The single alternative door offered at decision time.
    pub switch_target: Option<Door>,
    /// The door the player is judged on.
    pub final_choice: Option<Door>,
    /// Win or loss, defined only in the Result phase.
    pub outcome: Option<Outcome>,
    /// User-facing narration for the latest transition.
    pub status_message: String,
}
