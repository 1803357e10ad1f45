//! Sakura & Kallen - self-heal roll every turn, flat special

use crate::duel::behavior::{is_cadence_round, CharacterBehavior};
use crate::duel::combatant::{AttackResult, Combatant};
use crate::duel::rng::RandomSource;
use crate::roster::constants::*;
use crate::roster::{CharacterId, Fighter};

#[derive(Debug, Clone, Copy, Default)]
pub struct Sakura;

impl Sakura {
    pub fn combatant() -> Combatant {
        Combatant::new(
            CharacterId::Sakura,
            BASE_HEALTH,
            SAKURA_DEFENSE,
            SAKURA_ATTACK,
            SAKURA_SPEED,
        )
        .with_group_unit()
    }
}

impl CharacterBehavior for Sakura {
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

        if !charmed && rng.roll_at_most(SAKURA_HEAL_CHANCE) {
            let healed = me.heal(SAKURA_HEAL);
            tracing::trace!(round, healed, health = me.health, "rice ball");
        }

        if !charmed && is_cadence_round(round, SAKURA_CADENCE) {
            opponent.receive_special_attack(me, SAKURA_SPECIAL_DAMAGE, false, rng)
        } else {
            let amount = me.attack - opponent.stats.defense;
            opponent.receive_basic_attack(me, amount, rng)
        }
    }
}
