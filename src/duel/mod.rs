//! Combat resolution engine
//!
//! A duel is two `Fighter`s alternating half-turns. Each turn is played by
//! the fighter's `CharacterBehavior`, which deals damage only through the
//! opponent's intake (`receive_basic_attack` / `receive_special_attack`).

pub mod behavior;
pub mod combatant;
pub mod pipeline;
pub mod rng;
pub mod state;

pub use behavior::CharacterBehavior;
pub use combatant::{AttackResult, Combatant, MAX_HEALTH};
pub use pipeline::Strike;
pub use rng::{RandomSource, ScriptedSource, SeededSource};
pub use state::{first_mover, run_duel, Duel, DuelOutcome, DuelReport, DuelState, Side};
