//! Trial aggregation
//!
//! Repeats duels to estimate win probabilities. Trials are independent:
//! each one spawns fresh fighters and gets its own seeded stream, so they
//! run in parallel with no shared state.

pub mod aggregate;
pub mod output;

pub use aggregate::{derive_seed, run_matchup, run_round_robin};
pub use output::{MatchupStats, TournamentReport};
