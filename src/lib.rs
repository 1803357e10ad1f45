//! Valkyrie Arena - turn-based duel simulator
//!
//! Twelve hand-authored characters fight one-on-one duels; the trial
//! runner repeats duels to estimate win probabilities.

pub mod core;
pub mod duel;
pub mod roster;
pub mod trials;
