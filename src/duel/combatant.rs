//! Shared mutable battle state of one fighter

use serde::{Deserialize, Serialize};

use crate::duel::rng::RandomSource;
use crate::roster::CharacterId;

/// Health ceiling for every heal
pub const MAX_HEALTH: i32 = 100;

/// Outcome of any damage-applying operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackResult {
    /// The acting fighter died (e.g. killed by a counter)
    AttackerDead,
    /// The receiving fighter died
    DefenderDead,
    /// The duel continues
    AllAlive,
}

impl AttackResult {
    pub fn is_terminal(self) -> bool {
        self != AttackResult::AllAlive
    }
}

/// Stats and status counters common to every character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub id: CharacterId,
    pub name: String,
    pub health: i32,
    pub defense: i32,
    /// May go negative after debuffs; damage is floored instead
    pub attack: i32,
    pub speed: i32,
    pub hit_rate: f32,
    pub is_group_unit: bool,
    /// Self-inflicted skip-turn counter
    pub stun_turns: u32,
    /// Opponent-inflicted skip-turn counter
    pub silence_turns: u32,
    /// Opponent-inflicted counter that disables the special branch
    pub charm_turns: u32,
}

impl Combatant {
    pub fn new(id: CharacterId, health: i32, defense: i32, attack: i32, speed: i32) -> Self {
        Self {
            id,
            name: id.to_string(),
            health,
            defense,
            attack,
            speed,
            hit_rate: 1.0,
            is_group_unit: false,
            stun_turns: 0,
            silence_turns: 0,
            charm_turns: 0,
        }
    }

    pub fn with_group_unit(mut self) -> Self {
        self.is_group_unit = true;
        self
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Restore health, never above `MAX_HEALTH`. Returns the amount gained.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.health;
        self.health = (self.health + amount.max(0)).min(MAX_HEALTH);
        self.health - before
    }

    /// Accuracy roll against this fighter's hit-rate
    pub fn is_hit(&self, rng: &mut dyn RandomSource) -> bool {
        rng.roll_at_most(self.hit_rate)
    }

    pub fn lower_hit_rate(&mut self, amount: f32) {
        self.hit_rate = (self.hit_rate - amount).max(0.0);
    }

    /// Read and decrement the charm counter. True while charmed this turn.
    pub fn consume_charm(&mut self) -> bool {
        consume(&mut self.charm_turns)
    }

    /// Read and decrement the silence counter. True if the turn is lost.
    pub fn consume_silence(&mut self) -> bool {
        consume(&mut self.silence_turns)
    }

    /// Read and decrement the stun counter. True if the turn is lost.
    pub fn consume_stun(&mut self) -> bool {
        consume(&mut self.stun_turns)
    }
}

fn consume(counter: &mut u32) -> bool {
    if *counter == 0 {
        return false;
    }
    *counter -= 1;
    true
}
