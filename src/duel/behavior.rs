//! Character behavior framework

use crate::duel::combatant::{AttackResult, Combatant};
use crate::duel::pipeline::{self, Strike};
use crate::duel::rng::RandomSource;
use crate::roster::Fighter;

/// Trait for character-specific turn logic and damage intake
pub trait CharacterBehavior {
    /// Play one turn against `opponent`.
    ///
    /// Returns the result of the last damage-applying call, or `AllAlive`
    /// when the turn dealt no damage.
    fn take_turn(
        &mut self,
        round: u32,
        me: &mut Combatant,
        opponent: &mut Fighter,
        rng: &mut dyn RandomSource,
    ) -> AttackResult;

    /// Intake for basic attacks
    fn receive_basic_attack(
        &mut self,
        me: &mut Combatant,
        attacker: &mut Combatant,
        amount: i32,
        rng: &mut dyn RandomSource,
    ) -> AttackResult {
        pipeline::receive_basic_attack(me, attacker, amount, rng)
    }

    /// Intake for special abilities
    fn receive_special_attack(
        &mut self,
        me: &mut Combatant,
        attacker: &mut Combatant,
        amount: i32,
        force_hit: bool,
        rng: &mut dyn RandomSource,
    ) -> AttackResult {
        pipeline::receive_special_attack(me, attacker, amount, force_hit, rng)
    }
}

/// True on rounds where a cadence-`every` ability is eligible
pub fn is_cadence_round(round: u32, every: u32) -> bool {
    round % every == 0
}

/// Land `hits` identical strikes, stopping at the first terminal result
pub fn strike_repeatedly(
    opponent: &mut Fighter,
    me: &mut Combatant,
    strike: Strike,
    amount: i32,
    hits: u32,
    rng: &mut dyn RandomSource,
) -> AttackResult {
    for _ in 0..hits {
        let result = opponent.receive(me, strike, amount, rng);
        if result.is_terminal() {
            return result;
        }
    }
    AttackResult::AllAlive
}

/// `base * multiplier`, rounded half away from zero
pub fn scale(base: i32, multiplier: f32) -> i32 {
    (base as f32 * multiplier).round() as i32
}
