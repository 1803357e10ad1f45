//! Mei - lightning burst, may silence after a basic attack

use crate::duel::behavior::{is_cadence_round, strike_repeatedly, CharacterBehavior};
use crate::duel::combatant::{AttackResult, Combatant};
use crate::duel::pipeline::Strike;
use crate::duel::rng::RandomSource;
use crate::roster::constants::*;
use crate::roster::{CharacterId, Fighter};

#[derive(Debug, Clone, Copy, Default)]
pub struct Mei;

impl Mei {
    pub fn combatant() -> Combatant {
        Combatant::new(CharacterId::Mei, BASE_HEALTH, MEI_DEFENSE, MEI_ATTACK, MEI_SPEED)
    }
}

impl CharacterBehavior for Mei {
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

        if !charmed && is_cadence_round(round, MEI_CADENCE) {
            return strike_repeatedly(
                opponent,
                me,
                Strike::Special,
                MEI_BURST_DAMAGE,
                MEI_BURST_HITS,
                rng,
            );
        }

        let amount = me.attack - opponent.stats.defense;
        let result = opponent.receive_basic_attack(me, amount, rng);
        if result.is_terminal() {
            return result;
        }
        if !charmed && rng.roll_at_most(MEI_SILENCE_CHANCE) {
            tracing::trace!(round, target = %opponent.stats.name, "silenced");
            opponent.stats.silence_turns = MEI_SILENCE_TURNS;
        }
        AttackResult::AllAlive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::duel::rng::ScriptedSource;

    #[test]
    fn test_burst_lands_five_hits() {
        let mut mei = Fighter::spawn(CharacterId::Mei);
        let mut kiana = Fighter::spawn(CharacterId::Kiana);
        let mut rng = ScriptedSource::never_trigger();
        mei.take_turn(2, &mut kiana, &mut rng);
        assert_eq!(kiana.stats.health, 100 - 5 * 3);
    }

    #[test]
    fn test_silence_on_inclusive_roll() {
        let mut mei = Fighter::spawn(CharacterId::Mei);
        let mut kiana = Fighter::spawn(CharacterId::Kiana);
        // hit roll, then a silence roll sitting exactly on the boundary
        let mut rng = ScriptedSource::never_trigger().with_floats([0.0, MEI_SILENCE_CHANCE]);
        mei.take_turn(1, &mut kiana, &mut rng);
        assert_eq!(kiana.stats.health, 100 - (22 - 11));
        assert_eq!(kiana.stats.silence_turns, 1);

        // Kiana loses her next turn and the counter resets
        kiana.take_turn(1, &mut mei, &mut rng);
        assert_eq!(mei.stats.health, 100);
        assert_eq!(kiana.stats.silence_turns, 0);
    }

    #[test]
    fn test_no_silence_when_roll_misses() {
        let mut mei = Fighter::spawn(CharacterId::Mei);
        let mut kiana = Fighter::spawn(CharacterId::Kiana);
        let mut rng = ScriptedSource::never_trigger();
        mei.take_turn(3, &mut kiana, &mut rng);
        assert_eq!(kiana.stats.silence_turns, 0);
    }

    #[test]
    fn test_charmed_mei_neither_bursts_nor_silences() {
        let mut mei = Fighter::spawn(CharacterId::Mei);
        let mut kiana = Fighter::spawn(CharacterId::Kiana);
        mei.stats.charm_turns = 2;
        let mut rng = ScriptedSource::always_trigger();
        mei.take_turn(2, &mut kiana, &mut rng);
        assert_eq!(kiana.stats.health, 89);
        assert_eq!(kiana.stats.silence_turns, 0);
        assert_eq!(mei.stats.charm_turns, 1);
    }
}
