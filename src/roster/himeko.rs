//! Himeko - trades accuracy for a permanently doubled attack

use crate::duel::behavior::{is_cadence_round, CharacterBehavior};
use crate::duel::combatant::{AttackResult, Combatant};
use crate::duel::rng::RandomSource;
use crate::roster::constants::*;
use crate::roster::{CharacterId, Fighter};

#[derive(Debug, Clone, Copy, Default)]
pub struct Himeko;

impl Himeko {
    pub fn combatant() -> Combatant {
        Combatant::new(
            CharacterId::Himeko,
            BASE_HEALTH,
            HIMEKO_DEFENSE,
            HIMEKO_ATTACK,
            HIMEKO_SPEED,
        )
    }
}

impl CharacterBehavior for Himeko {
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

        let multiplier = if !charmed && me.is_group_unit {
            HIMEKO_GROUP_MULTIPLIER
        } else {
            1
        };

        if !charmed && is_cadence_round(round, HIMEKO_CADENCE) {
            me.attack = me.attack.saturating_mul(HIMEKO_ATTACK_FACTOR);
            me.lower_hit_rate(HIMEKO_HIT_RATE_PENALTY);
            tracing::trace!(round, attack = me.attack, hit_rate = me.hit_rate, "Himeko toast");
        }

        let amount = (me.attack - opponent.stats.defense).saturating_mul(multiplier);
        opponent.receive_basic_attack(me, amount, rng)
    }
}
