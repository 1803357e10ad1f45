//! Durandal & Stan - growing attack, may counter incoming specials

use crate::duel::behavior::CharacterBehavior;
use crate::duel::combatant::{AttackResult, Combatant};
use crate::duel::pipeline;
use crate::duel::rng::RandomSource;
use crate::roster::constants::*;
use crate::roster::{CharacterId, Fighter};

#[derive(Debug, Clone, Copy, Default)]
pub struct Durandal;

impl Durandal {
    pub fn combatant() -> Combatant {
        Combatant::new(
            CharacterId::Durandal,
            BASE_HEALTH,
            DURANDAL_DEFENSE,
            DURANDAL_ATTACK,
            DURANDAL_SPEED,
        )
        .with_group_unit()
    }
}

impl CharacterBehavior for Durandal {
    fn take_turn(
        &mut self,
        _round: u32,
        me: &mut Combatant,
        opponent: &mut Fighter,
        rng: &mut dyn RandomSource,
    ) -> AttackResult {
        // Grows before the silence check; charm is never consulted
        me.attack += DURANDAL_ATTACK_GROWTH;
        if me.consume_silence() {
            return AttackResult::AllAlive;
        }

        let amount = me.attack - opponent.stats.defense;
        opponent.receive_basic_attack(me, amount, rng)
    }

    fn receive_special_attack(
        &mut self,
        me: &mut Combatant,
        attacker: &mut Combatant,
        amount: i32,
        _force_hit: bool,
        rng: &mut dyn RandomSource,
    ) -> AttackResult {
        if me.charm_turns == 0 && rng.roll_below(DURANDAL_COUNTER_CHANCE) {
            attacker.health -= DURANDAL_COUNTER_DAMAGE;
            tracing::trace!(
                target = %attacker.name,
                remaining = attacker.health,
                "Durandal counters"
            );
            return if attacker.is_dead() {
                AttackResult::AttackerDead
            } else {
                AttackResult::AllAlive
            };
        }
        // Uncountered specials always connect
        pipeline::apply(me, attacker, amount, "special")
    }
}
