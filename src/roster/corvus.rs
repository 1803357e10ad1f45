//! Corvus - seven-shot burst, always boosted against Kiana

use crate::duel::behavior::{is_cadence_round, scale, strike_repeatedly, CharacterBehavior};
use crate::duel::combatant::{AttackResult, Combatant};
use crate::duel::pipeline::Strike;
use crate::duel::rng::RandomSource;
use crate::roster::constants::*;
use crate::roster::{CharacterId, Fighter};

#[derive(Debug, Clone, Copy, Default)]
pub struct Corvus;

impl Corvus {
    pub fn combatant() -> Combatant {
        Combatant::new(
            CharacterId::Corvus,
            BASE_HEALTH,
            CORVUS_DEFENSE,
            CORVUS_ATTACK,
            CORVUS_SPEED,
        )
    }
}

impl CharacterBehavior for Corvus {
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

        // Against Kiana the boost is automatic and no roll is drawn
        let boosted = !charmed
            && (opponent.id() == CharacterId::Kiana || rng.roll_at_most(CORVUS_BOOST_CHANCE));
        let multiplier = if boosted { CORVUS_BOOST_MULTIPLIER } else { 1.0 };

        if !charmed && is_cadence_round(round, CORVUS_CADENCE) {
            let per_hit = scale((CORVUS_BURST_ATTACK - opponent.stats.defense).max(0), multiplier);
            strike_repeatedly(opponent, me, Strike::Special, per_hit, CORVUS_BURST_HITS, rng)
        } else {
            let amount = scale(me.attack - opponent.stats.defense, multiplier);
            opponent.receive_basic_attack(me, amount, rng)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::duel::rng::ScriptedSource;

    #[test]
    fn test_always_boosted_against_kiana() {
        let mut corvus = Fighter::spawn(CharacterId::Corvus);
        let mut kiana = Fighter::spawn(CharacterId::Kiana);
        let mut rng = ScriptedSource::never_trigger();
        corvus.take_turn(1, &mut kiana, &mut rng);
        // round((23 - 11) * 1.25) = 15
        assert_eq!(kiana.stats.health, 85);
    }

    #[test]
    fn test_unboosted_against_others_without_roll() {
        let mut corvus = Fighter::spawn(CharacterId::Corvus);
        let mut mei = Fighter::spawn(CharacterId::Mei);
        let mut rng = ScriptedSource::never_trigger();
        corvus.take_turn(1, &mut mei, &mut rng);
        assert_eq!(mei.stats.health, 89);
    }

    #[test]
    fn test_burst_against_kiana() {
        let mut corvus = Fighter::spawn(CharacterId::Corvus);
        let mut kiana = Fighter::spawn(CharacterId::Kiana);
        let mut rng = ScriptedSource::never_trigger();
        corvus.take_turn(3, &mut kiana, &mut rng);
        // Seven hits of round((16 - 11) * 1.25) = 6
        assert_eq!(kiana.stats.health, 100 - 7 * 6);
    }

    #[test]
    fn test_burst_never_heals_high_defense() {
        let mut corvus = Fighter::spawn(CharacterId::Corvus);
        let mut seele = Fighter::spawn(CharacterId::Seele);
        seele.stats.defense = 20;
        let mut rng = ScriptedSource::never_trigger();
        corvus.take_turn(3, &mut seele, &mut rng);
        assert_eq!(seele.stats.health, 100);
    }

    #[test]
    fn test_charm_suppresses_kiana_boost() {
        let mut corvus = Fighter::spawn(CharacterId::Corvus);
        corvus.stats.charm_turns = 1;
        let mut kiana = Fighter::spawn(CharacterId::Kiana);
        let mut rng = ScriptedSource::never_trigger();
        corvus.take_turn(3, &mut kiana, &mut rng);
        assert_eq!(kiana.stats.health, 88);
    }
}
