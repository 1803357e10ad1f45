//! Theresa - five-kick burst, shreds defense after basic attacks

use crate::duel::behavior::{is_cadence_round, strike_repeatedly, CharacterBehavior};
use crate::duel::combatant::{AttackResult, Combatant};
use crate::duel::pipeline::Strike;
use crate::duel::rng::RandomSource;
use crate::roster::constants::*;
use crate::roster::{CharacterId, Fighter};

#[derive(Debug, Clone, Copy, Default)]
pub struct Theresa;

impl Theresa {
    pub fn combatant() -> Combatant {
        Combatant::new(
            CharacterId::Theresa,
            BASE_HEALTH,
            THERESA_DEFENSE,
            THERESA_ATTACK,
            THERESA_SPEED,
        )
        .with_group_unit()
    }
}

impl CharacterBehavior for Theresa {
    fn take_turn(
        &mut self,
        round: u32,
        me: &mut Combatant,
        opponent: &mut Fighter,
        rng: &mut dyn RandomSource,
    ) -> AttackResult {
        let charmed = me.consume_charm();
        if me.consume_silence() {
            return AttackResult::AllAlive;
        }

        if !charmed && is_cadence_round(round, THERESA_CADENCE) {
            let per_hit = (THERESA_BURST_ATTACK - opponent.stats.defense).max(0);
            return strike_repeatedly(
                opponent,
                me,
                Strike::Special,
                per_hit,
                THERESA_BURST_HITS,
                rng,
            );
        }

        let amount = me.attack - opponent.stats.defense;
        let result = opponent.receive_basic_attack(me, amount, rng);
        if result.is_terminal() {
            return result;
        }
        if !charmed && rng.roll_at_most(THERESA_SHRED_CHANCE) {
            opponent.stats.defense = (opponent.stats.defense - THERESA_SHRED_DEFENSE).max(0);
            tracing::trace!(round, defense = opponent.stats.defense, "defense shredded");
        }
        AttackResult::AllAlive
    }
}
