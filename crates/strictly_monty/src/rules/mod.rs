//! Game rules for Monty Hall.
//!
//! Pure functions for reveal bookkeeping and outcome judgement, separated
//! from round storage so both reveal policies share one rule set.

pub mod outcome;
pub mod reveal;

pub use outcome::judge;
pub use reveal::{closed_non_held, host_schedule, switch_target};
