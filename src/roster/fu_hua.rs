//! Fu Hua - defense-piercing basics, special blinds the opponent

use crate::duel::behavior::{is_cadence_round, CharacterBehavior};
use crate::duel::combatant::{AttackResult, Combatant};
use crate::duel::rng::RandomSource;
use crate::roster::constants::*;
use crate::roster::{CharacterId, Fighter};

#[derive(Debug, Clone, Copy, Default)]
pub struct FuHua;

impl FuHua {
    pub fn combatant() -> Combatant {
        Combatant::new(
            CharacterId::FuHua,
            BASE_HEALTH,
            FU_HUA_DEFENSE,
            FU_HUA_ATTACK,
            FU_HUA_SPEED,
        )
    }
}

impl CharacterBehavior for FuHua {
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

        if !charmed && is_cadence_round(round, FU_HUA_CADENCE) {
            let result = opponent.receive_special_attack(me, FU_HUA_SPECIAL_DAMAGE, false, rng);
            if result.is_terminal() {
                return result;
            }
            opponent.stats.lower_hit_rate(FU_HUA_HIT_RATE_PENALTY);
            tracing::trace!(round, hit_rate = opponent.stats.hit_rate, "opponent blinded");
            return AttackResult::AllAlive;
        }

        let amount = me.attack;
        opponent.receive_basic_attack(me, amount, rng)
    }
}
