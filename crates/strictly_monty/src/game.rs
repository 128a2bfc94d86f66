//! The Monty Hall game engine.
//!
//! One [`Game`] owns one [`Round`] and is the only writer to it. The
//! presentation layer calls the operations below in response to user
//! intents and re-renders from [`Game::snapshot`]; every rejected call
//! returns a [`GameError`] and leaves the round untouched.
//!
//! The host's reveal sequence is computed in full, synchronously, when the
//! player selects a door. [`Game::reveal_next`] then surfaces one opening
//! per call so an adapter can pace the disclosure for effect, while
//! [`Game::reveal_all`] drains it in one step for headless use.

use crate::action::{Decision, GameError};
use crate::config::{ConfigError, GameConfig, RevealPolicy};
use crate::invariants::assert_round_invariants;
use crate::phases::{Outcome, Phase};
use crate::rules;
use crate::snapshot::Snapshot;
use crate::types::{Door, Round};
use rand::Rng;
use std::collections::VecDeque;
use tracing::{debug, instrument, warn};

const WELCOME: &str = "Welcome to the N-Door Monty Hall Challenge!";

/// The game engine: configuration, the live round, and its narration.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    door_count: usize,
    round: Round,
    reveal_queue: VecDeque<Door>,
    status: String,
}

impl Game {
    /// Creates an engine in the Setup phase, defaulting to the smallest
    /// door count the config accepts.
    #[instrument]
    pub fn new(config: GameConfig) -> Self {
        let door_count = config.doors().min();
        Self {
            config,
            door_count,
            round: Round::new(door_count),
            reveal_queue: VecDeque::new(),
            status: WELCOME.to_string(),
        }
    }

    /// Returns the static rule set this engine runs.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the live round record.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Returns the narration for the latest transition.
    pub fn status_message(&self) -> &str {
        &self.status
    }

    /// Emits the read-only view the presentation layer renders from.
    ///
    /// The prize door is concealed until the round reaches Result.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.round.phase,
            door_count: self.round.door_count,
            selected_door: self.round.selected_door,
            prize_door: if self.round.phase == Phase::Result {
                self.round.prize_door
            } else {
                None
            },
            opened_doors: self.round.opened_doors.clone(),
            switch_target: self.round.switch_target,
            final_choice: self.round.final_choice,
            outcome: self.round.outcome,
            status_message: self.status.clone(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Setup
    // ─────────────────────────────────────────────────────────────

    /// Stores the door count for the next round.
    ///
    /// Out-of-range counts are rejected, not clamped; the live round is
    /// never affected.
    #[instrument(skip(self))]
    pub fn configure(&mut self, door_count: usize) -> Result<(), ConfigError> {
        let doors = self.config.doors();
        if !doors.contains(door_count) {
            warn!(door_count, "rejected door count");
            return Err(ConfigError::DoorCountOutOfRange {
                given: door_count,
                min: doors.min(),
                max: doors.max(),
            });
        }
        self.door_count = door_count;
        Ok(())
    }

    /// Starts a round, drawing the prize door from the thread-local
    /// generator.
    pub fn start_round(&mut self) {
        self.start_round_with(&mut rand::rng());
    }

    /// Starts a round with a caller-supplied generator.
    ///
    /// Draws the prize door uniformly over `[0, N)`, clears all per-round
    /// state, and moves to Choosing. Callable from any phase; an in-flight
    /// reveal schedule is discarded.
    #[instrument(skip(self, rng))]
    pub fn start_round_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let door_count = self.door_count;
        let prize = Door::new(rng.random_range(0..door_count));

        self.round = Round::new(door_count);
        self.round.prize_door = Some(prize);
        self.round.phase = Phase::Choosing;
        self.reveal_queue.clear();
        self.status = format!("Choose one of the {} doors!", door_count);

        debug!(door_count, "round started");
        assert_round_invariants(&self.round);
    }

    /// Discards the round and returns to Setup, from any phase.
    ///
    /// A partially-stepped reveal schedule is dropped atomically with the
    /// rest of the round state.
    #[instrument(skip(self))]
    pub fn reset_to_setup(&mut self) {
        self.round = Round::new(self.door_count);
        self.reveal_queue.clear();
        self.status = WELCOME.to_string();
        debug!("reset to setup");
    }

    // ─────────────────────────────────────────────────────────────
    //  Selection and reveal
    // ─────────────────────────────────────────────────────────────

    /// Records the player's initial selection and enters Revealing.
    ///
    /// Under the host-automatic policy this also computes the full reveal
    /// schedule: every door except the selection and the prize, ascending,
    /// first N-2.
    #[instrument(skip(self))]
    pub fn select_door(&mut self, door: Door) -> Result<(), GameError> {
        if self.round.phase != Phase::Choosing {
            return Err(GameError::Phase("select a door", self.round.phase));
        }
        self.ensure_in_range(door)?;

        self.round.selected_door = Some(door);
        self.round.phase = Phase::Revealing;

        match self.config.policy() {
            RevealPolicy::HostAuto => {
                let schedule =
                    rules::host_schedule(self.round.door_count, door, self.prize());
                debug!(?door, reveals = schedule.len(), "door selected, host schedule ready");
                self.reveal_queue = schedule.into();
                self.status =
                    format!("You chose {}. Now, let's see what Monty does...", door);
            }
            RevealPolicy::UserManual => {
                debug!(?door, "door selected, player reveals");
                self.status = format!(
                    "You chose {}. Open the other doors one at a time - just don't find the car!",
                    door
                );
            }
        }

        assert_round_invariants(&self.round);
        Ok(())
    }

    /// Opens the next host-scheduled door as one discrete step.
    ///
    /// After the last scheduled door, computes the switch target and moves
    /// to Decision. Host-automatic policy only.
    #[instrument(skip(self))]
    pub fn reveal_next(&mut self) -> Result<Door, GameError> {
        if self.config.policy() != RevealPolicy::HostAuto {
            return Err(GameError::Policy("reveal", self.config.policy()));
        }
        if self.round.phase != Phase::Revealing {
            return Err(GameError::Phase("reveal", self.round.phase));
        }

        let door = self
            .reveal_queue
            .pop_front()
            .expect("host schedule outlives the Revealing phase");
        self.round.opened_doors.push(door);
        self.status = format!("Monty opened {} - it's a goat!", door);
        debug!(?door, "host revealed a goat");

        if self.reveal_queue.is_empty() {
            self.enter_decision();
        }

        assert_round_invariants(&self.round);
        Ok(door)
    }

    /// Drains the host's entire reveal schedule in one call.
    ///
    /// Behaviorally identical to stepping [`Game::reveal_next`] to
    /// completion; the round lands in Decision.
    pub fn reveal_all(&mut self) -> Result<(), GameError> {
        self.reveal_next()?;
        while self.round.phase == Phase::Revealing {
            self.reveal_next()?;
        }
        Ok(())
    }

    /// Opens a door by the player's own hand. User-manual policy only.
    ///
    /// The held door, out-of-range doors, and already-open doors are
    /// rejected without touching the round. Before the decision, opening
    /// the prize door ends the round in an instant loss; once the field
    /// thins to one alternative the round moves to Decision. After the
    /// decision, openings are simply recorded until none remain.
    #[instrument(skip(self))]
    pub fn open_door(&mut self, door: Door) -> Result<(), GameError> {
        if self.config.policy() != RevealPolicy::UserManual {
            return Err(GameError::Policy("open a door", self.config.policy()));
        }
        if self.round.phase != Phase::Revealing {
            return Err(GameError::Phase("open a door", self.round.phase));
        }
        self.ensure_in_range(door)?;

        let held = self.held();
        if door == held {
            return Err(GameError::HeldDoor(door));
        }
        if self.round.is_open(door) {
            return Err(GameError::AlreadyOpen(door));
        }

        let pre_decision = self.round.final_choice.is_none();
        self.round.opened_doors.push(door);

        if pre_decision && door == self.prize() {
            // The player found the car themselves.
            self.round.final_choice = Some(door);
            self.round.outcome = Some(Outcome::Lost);
            self.round.phase = Phase::Result;
            self.status = format!("{} hides the car! Opening it ends the round - you lose.", door);
            debug!(?door, "instant loss");
        } else {
            let closed =
                rules::closed_non_held(self.round.door_count, held, &self.round.opened_doors);
            debug!(?door, remaining = closed.len(), "player opened a goat door");

            if pre_decision {
                if closed.len() == 1 {
                    self.enter_decision();
                } else {
                    self.status = format!(
                        "{} hides a goat! {} doors besides yours are still closed.",
                        door,
                        closed.len()
                    );
                }
            } else if closed.is_empty() {
                self.finish_round();
            } else {
                self.status = format!("{} hides a goat. Keep opening!", door);
            }
        }

        assert_round_invariants(&self.round);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────
    //  Decision and outcome
    // ─────────────────────────────────────────────────────────────

    /// Resolves the stick-or-switch decision.
    ///
    /// Under host-automatic reveal the round finishes immediately. Under
    /// user-manual reveal the held door is re-anchored to the final choice
    /// and play returns to Revealing while closed doors remain.
    #[instrument(skip(self))]
    pub fn decide(&mut self, decision: Decision) -> Result<(), GameError> {
        if self.round.phase != Phase::Decision {
            return Err(GameError::Phase("decide", self.round.phase));
        }

        let final_choice = match decision {
            Decision::Stick => self.held(),
            Decision::Switch => self
                .round
                .switch_target
                .expect("switch target is set on entering Decision"),
        };
        self.round.final_choice = Some(final_choice);
        debug!(?decision, ?final_choice, "decision made");

        match self.config.policy() {
            RevealPolicy::HostAuto => self.finish_round(),
            RevealPolicy::UserManual => {
                // The held door is now fixed for the rest of the round.
                self.round.selected_door = Some(final_choice);
                let closed = rules::closed_non_held(
                    self.round.door_count,
                    final_choice,
                    &self.round.opened_doors,
                );
                if closed.is_empty() {
                    self.finish_round();
                } else {
                    self.round.phase = Phase::Revealing;
                    let verb = match decision {
                        Decision::Stick => "stick with",
                        Decision::Switch => "switch to",
                    };
                    self.status = format!(
                        "You {} {}. Open the remaining doors to see where the car is.",
                        verb, final_choice
                    );
                }
            }
        }

        assert_round_invariants(&self.round);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────
    //  Internal transitions
    // ─────────────────────────────────────────────────────────────

    /// Moves to Decision once exactly one non-held door remains closed.
    fn enter_decision(&mut self) {
        let held = self.held();
        let target =
            rules::switch_target(self.round.door_count, held, &self.round.opened_doors)
                .expect("exactly one closed alternative remains at decision time");
        self.round.switch_target = Some(target);
        self.round.phase = Phase::Decision;
        self.status = format!(
            "You chose {}. Only {} remains unopened. Do you want to STICK with your original choice, or SWITCH?",
            held, target
        );
        debug!(?target, "entering decision");
    }

    /// Judges the final choice and lands in Result.
    fn finish_round(&mut self) {
        let final_choice = self
            .round
            .final_choice
            .expect("the round is judged only after a final choice exists");
        let outcome = rules::judge(final_choice, self.prize());
        self.round.outcome = Some(outcome);
        self.round.phase = Phase::Result;
        self.status = match outcome {
            Outcome::Won => format!("You won the car behind {}!", final_choice),
            Outcome::Lost => {
                format!("You got a goat behind {}. Better luck next time!", final_choice)
            }
        };
        debug!(?outcome, "round resolved");
    }

    fn ensure_in_range(&self, door: Door) -> Result<(), GameError> {
        if door.index() >= self.round.door_count {
            return Err(GameError::DoorOutOfRange(door, self.round.door_count));
        }
        Ok(())
    }

    /// The prize door. Drawn at round start; present in every phase past
    /// Setup.
    fn prize(&self) -> Door {
        self.round
            .prize_door
            .expect("prize door is drawn at round start")
    }

    /// The held door. A door is held in every phase past Choosing.
    fn held(&self) -> Door {
        self.round
            .held_door()
            .expect("a door is held past the Choosing phase")
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn started(config: GameConfig, door_count: usize, prize: usize) -> Game {
        let mut game = Game::new(config);
        game.configure(door_count).expect("count within bounds");
        game.start_round_with(&mut SmallRng::seed_from_u64(0));
        // Scenario tests pin the prize after the uniform draw.
        game.round.prize_door = Some(Door::new(prize));
        game
    }

    #[test]
    fn test_host_auto_switch_scenario_five_doors() {
        let mut game = started(GameConfig::host_auto(), 5, 2);

        game.select_door(Door::new(0)).expect("legal selection");
        assert_eq!(game.round().phase(), Phase::Revealing);

        game.reveal_all().expect("host drains its schedule");
        assert_eq!(
            game.round().opened_doors(),
            &[Door::new(1), Door::new(3), Door::new(4)]
        );
        assert_eq!(game.round().switch_target(), Some(Door::new(2)));

        game.decide(Decision::Switch).expect("legal decision");
        assert_eq!(game.round().final_choice(), Some(Door::new(2)));
        assert_eq!(game.round().outcome(), Some(Outcome::Won));
        assert_eq!(game.snapshot().prize_door, Some(Door::new(2)));
    }

    #[test]
    fn test_host_auto_stick_keeps_held_door() {
        let mut game = started(GameConfig::host_auto(), 3, 1);

        game.select_door(Door::new(0)).expect("legal selection");
        game.reveal_all().expect("one door to open at N=3");
        assert_eq!(game.round().opened_doors(), &[Door::new(2)]);

        game.decide(Decision::Stick).expect("legal decision");
        assert_eq!(game.round().final_choice(), Some(Door::new(0)));
        assert_eq!(game.round().outcome(), Some(Outcome::Lost));
    }

    #[test]
    fn test_host_auto_staged_reveal_steps_once_per_call() {
        let mut game = started(GameConfig::host_auto(), 5, 2);
        game.select_door(Door::new(0)).expect("legal selection");

        assert_eq!(game.reveal_next().expect("first step"), Door::new(1));
        assert_eq!(game.round().opened_doors().len(), 1);
        assert_eq!(game.round().phase(), Phase::Revealing);

        // A second selection is rejected while the reveal is in flight.
        let err = game.select_door(Door::new(3)).unwrap_err();
        assert_eq!(err, GameError::Phase("select a door", Phase::Revealing));

        assert_eq!(game.reveal_next().expect("second step"), Door::new(3));
        assert_eq!(game.reveal_next().expect("last step"), Door::new(4));
        assert_eq!(game.round().phase(), Phase::Decision);
    }

    #[test]
    fn test_manual_instant_loss_on_prize_door() {
        let mut game = started(GameConfig::user_manual(), 7, 5);

        game.select_door(Door::new(0)).expect("legal selection");
        game.open_door(Door::new(5)).expect("opening the car is legal, fatal");

        assert_eq!(game.round().phase(), Phase::Result);
        assert_eq!(game.round().outcome(), Some(Outcome::Lost));
        assert_eq!(game.round().final_choice(), Some(Door::new(5)));
        assert!(game.round().is_open(Door::new(5)));
    }

    #[test]
    fn test_manual_elimination_thins_field_then_resumes() {
        let mut game = started(GameConfig::user_manual(), 7, 5);
        game.select_door(Door::new(0)).expect("legal selection");

        // One goat down: five non-held doors still closed, no decision yet.
        game.open_door(Door::new(1)).expect("goat");
        assert_eq!(game.round().phase(), Phase::Revealing);
        assert_eq!(game.round().switch_target(), None);

        for goat in [2, 3, 4, 6] {
            game.open_door(Door::new(goat)).expect("goat");
        }
        assert_eq!(game.round().phase(), Phase::Decision);
        assert_eq!(game.round().switch_target(), Some(Door::new(5)));

        // Switching re-anchors the held door; the old selection remains.
        game.decide(Decision::Switch).expect("legal decision");
        assert_eq!(game.round().phase(), Phase::Revealing);
        assert_eq!(game.round().held_door(), Some(Door::new(5)));

        game.open_door(Door::new(0)).expect("the abandoned selection");
        assert_eq!(game.round().phase(), Phase::Result);
        assert_eq!(game.round().outcome(), Some(Outcome::Won));
    }

    #[test]
    fn test_manual_post_decision_open_of_car_just_records() {
        let mut game = started(GameConfig::user_manual(), 3, 2);
        game.select_door(Door::new(0)).expect("legal selection");

        game.open_door(Door::new(1)).expect("goat");
        assert_eq!(game.round().phase(), Phase::Decision);

        game.decide(Decision::Stick).expect("legal decision");
        assert_eq!(game.round().phase(), Phase::Revealing);

        // The rejected alternative hides the car; no instant-loss branch
        // applies after the decision, the round is simply judged.
        game.open_door(Door::new(2)).expect("recorded");
        assert_eq!(game.round().phase(), Phase::Result);
        assert_eq!(game.round().outcome(), Some(Outcome::Lost));
        assert_eq!(game.round().final_choice(), Some(Door::new(0)));
    }
}
