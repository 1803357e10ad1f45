//! Bronya - random-damage special, occasional four-shot volley

use crate::duel::behavior::{is_cadence_round, strike_repeatedly, CharacterBehavior};
use crate::duel::combatant::{AttackResult, Combatant};
use crate::duel::pipeline::Strike;
use crate::duel::rng::RandomSource;
use crate::roster::constants::*;
use crate::roster::{CharacterId, Fighter};

#[derive(Debug, Clone, Copy, Default)]
pub struct Bronya;

impl Bronya {
    pub fn combatant() -> Combatant {
        Combatant::new(
            CharacterId::Bronya,
            BASE_HEALTH,
            BRONYA_DEFENSE,
            BRONYA_ATTACK,
            BRONYA_SPEED,
        )
    }
}

impl CharacterBehavior for Bronya {
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

        if !charmed && is_cadence_round(round, BRONYA_CADENCE) {
            let amount = rng.uniform_int(BRONYA_SPECIAL_MIN, BRONYA_SPECIAL_MAX);
            return opponent.receive_special_attack(me, amount, false, rng);
        }

        let amount = me.attack - opponent.stats.defense;
        let result = opponent.receive_basic_attack(me, amount, rng);
        if result.is_terminal() {
            return result;
        }

        if !charmed && rng.roll_below(BRONYA_VOLLEY_CHANCE) {
            tracing::trace!(round, "Bronya volley");
            let volley = BRONYA_VOLLEY_ATTACK - opponent.stats.defense;
            return strike_repeatedly(opponent, me, Strike::Basic, volley, BRONYA_VOLLEY_HITS, rng);
        }
        AttackResult::AllAlive
    }
}
