//! Reveal bookkeeping shared by both reveal policies.

use crate::types::Door;
use tracing::instrument;

/// Computes the host's full reveal schedule.
///
/// Candidates are every door except the selected door and the prize door,
/// in ascending index order; the host opens the first N-2 of them. For any
/// N >= 3 that is exactly the candidate count when selection and prize
/// differ, and one less when they coincide.
#[instrument]
pub fn host_schedule(door_count: usize, selected: Door, prize: Door) -> Vec<Door> {
    (0..door_count)
        .map(Door::new)
        .filter(|&door| door != selected && door != prize)
        .take(door_count - 2)
        .collect()
}

/// Returns the doors still closed, excluding the held door.
pub fn closed_non_held(door_count: usize, held: Door, opened: &[Door]) -> Vec<Door> {
    (0..door_count)
        .map(Door::new)
        .filter(|&door| door != held && !opened.contains(&door))
        .collect()
}

/// Returns the single alternative door, if the field has been thinned to one.
///
/// Defined exactly when one non-held door remains closed; `None` while more
/// than one remains (or none, in a resolved round).
#[instrument(skip(opened))]
pub fn switch_target(door_count: usize, held: Door, opened: &[Door]) -> Option<Door> {
    match closed_non_held(door_count, held, opened).as_slice() {
        &[door] => Some(door),
        _ => None,
    }
}
