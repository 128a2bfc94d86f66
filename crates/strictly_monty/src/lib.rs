//! Strictly Monty - the generalized N-door Monty Hall game engine.
//!
//! One engine owns all rules: door selection, goat revelation, the
//! stick-or-switch decision, and win determination. A presentation layer
//! (not part of this crate) forwards user intents into the engine's
//! operations and re-renders from the emitted [`Snapshot`]; it holds no
//! authoritative state of its own.
//!
//! # Architecture
//!
//! - **Types**: the [`Round`] record and the [`Door`] index type
//! - **Config**: [`RevealPolicy`] and door-count bounds, collapsing the
//!   game's rule variants into one parameterized engine
//! - **Rules**: pure reveal and outcome functions, shared by both policies
//! - **Game**: the engine driving every state transition
//! - **Invariants**: first-class round properties checked in debug builds
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use strictly_monty::{Decision, Door, Game, GameConfig, Phase};
//!
//! let mut game = Game::new(GameConfig::host_auto());
//! game.configure(5).expect("5 doors is within bounds");
//! game.start_round_with(&mut SmallRng::seed_from_u64(42));
//!
//! game.select_door(Door::new(0)).expect("legal selection");
//! game.reveal_all().expect("Monty opens N-2 goat doors");
//! assert_eq!(game.round().opened_doors().len(), 3);
//! assert_eq!(game.round().phase(), Phase::Decision);
//!
//! game.decide(Decision::Switch).expect("legal decision");
//! assert!(game.round().phase().is_terminal());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod config;
mod game;
mod phases;
mod snapshot;
mod types;

// Rule functions and invariants are part of the public surface so hosts
// and tests can exercise them directly.
pub mod invariants;
pub mod rules;

// Crate-level exports - player actions and rejections
pub use action::{Decision, GameError};

// Crate-level exports - configuration
pub use config::{ConfigError, DoorRange, GameConfig, RevealPolicy};

// Crate-level exports - the engine
pub use game::Game;

// Crate-level exports - phases and outcomes
pub use phases::{Outcome, Phase};

// Crate-level exports - state types
pub use snapshot::Snapshot;
pub use types::{Door, Round};
