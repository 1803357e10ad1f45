//! Default damage intake
//!
//! These are the un-overridden halves of `CharacterBehavior`. Characters that
//! intercept damage (revival, damage reduction, counters) call back into
//! these after adjusting the amount, or replace them outright.

use crate::duel::combatant::{AttackResult, Combatant};
use crate::duel::rng::RandomSource;

/// How an incoming hit enters the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strike {
    /// Accuracy-gated, floored at zero
    Basic,
    /// Accuracy-gated, amount taken as computed by the caller
    Special,
    /// Special that always connects
    ForcedSpecial,
}

/// Accuracy-gate `amount`, floor it at zero and subtract it from `defender`
pub fn receive_basic_attack(
    defender: &mut Combatant,
    attacker: &Combatant,
    amount: i32,
    rng: &mut dyn RandomSource,
) -> AttackResult {
    let dealt = if attacker.is_hit(rng) { amount.max(0) } else { 0 };
    apply(defender, attacker, dealt, "basic")
}

/// Like `receive_basic_attack`, but `force_hit` skips the accuracy roll and
/// the amount is not floored
pub fn receive_special_attack(
    defender: &mut Combatant,
    attacker: &Combatant,
    amount: i32,
    force_hit: bool,
    rng: &mut dyn RandomSource,
) -> AttackResult {
    let dealt = if force_hit || attacker.is_hit(rng) {
        amount
    } else {
        0
    };
    apply(defender, attacker, dealt, "special")
}

/// Subtract already-resolved damage and classify the result
pub fn apply(
    defender: &mut Combatant,
    attacker: &Combatant,
    dealt: i32,
    kind: &'static str,
) -> AttackResult {
    defender.health -= dealt;
    tracing::trace!(
        attacker = %attacker.name,
        defender = %defender.name,
        kind,
        dealt,
        remaining = defender.health,
        "damage applied"
    );
    death_check(defender)
}

pub fn death_check(defender: &Combatant) -> AttackResult {
    if defender.is_dead() {
        AttackResult::DefenderDead
    } else {
        AttackResult::AllAlive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duel::rng::ScriptedSource;
    use crate::roster::CharacterId;

    fn pair() -> (Combatant, Combatant) {
        (
            Combatant::new(CharacterId::Kiana, 100, 11, 24, 23),
            Combatant::new(CharacterId::Mei, 100, 12, 22, 30),
        )
    }

    #[test]
    fn test_basic_attack_hits_and_floors() {
        let (attacker, mut defender) = pair();
        let mut rng = ScriptedSource::never_trigger();

        assert_eq!(
            receive_basic_attack(&mut defender, &attacker, 12, &mut rng),
            AttackResult::AllAlive
        );
        assert_eq!(defender.health, 88);

        receive_basic_attack(&mut defender, &attacker, -5, &mut rng);
        assert_eq!(defender.health, 88);
    }

    #[test]
    fn test_basic_attack_miss_deals_nothing() {
        let (mut attacker, mut defender) = pair();
        attacker.hit_rate = 0.5;
        let mut rng = ScriptedSource::constant(0.9);

        receive_basic_attack(&mut defender, &attacker, 50, &mut rng);
        assert_eq!(defender.health, 100);
    }

    #[test]
    fn test_forced_special_ignores_accuracy() {
        let (mut attacker, mut defender) = pair();
        attacker.hit_rate = 0.0;
        let mut rng = ScriptedSource::constant(0.9);

        receive_special_attack(&mut defender, &attacker, 30, false, &mut rng);
        assert_eq!(defender.health, 100);

        receive_special_attack(&mut defender, &attacker, 30, true, &mut rng);
        assert_eq!(defender.health, 70);
    }

    #[test]
    fn test_lethal_hit_reports_defender_dead() {
        let (attacker, mut defender) = pair();
        defender.health = 10;
        let mut rng = ScriptedSource::never_trigger();

        assert_eq!(
            receive_special_attack(&mut defender, &attacker, 10, false, &mut rng),
            AttackResult::DefenderDead
        );
    }
}
