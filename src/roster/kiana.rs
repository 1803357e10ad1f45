//! Kiana - spear thrower who may stun herself

use crate::duel::behavior::{is_cadence_round, CharacterBehavior};
use crate::duel::combatant::{AttackResult, Combatant};
use crate::duel::rng::RandomSource;
use crate::roster::constants::*;
use crate::roster::{CharacterId, Fighter};

#[derive(Debug, Clone, Copy, Default)]
pub struct Kiana;

impl Kiana {
    pub fn combatant() -> Combatant {
        Combatant::new(
            CharacterId::Kiana,
            BASE_HEALTH,
            KIANA_DEFENSE,
            KIANA_ATTACK,
            KIANA_SPEED,
        )
    }
}

impl CharacterBehavior for Kiana {
    fn take_turn(
        &mut self,
        round: u32,
        me: &mut Combatant,
        opponent: &mut Fighter,
        rng: &mut dyn RandomSource,
    ) -> AttackResult {
        let charmed = me.consume_charm();

        // Stun and silence both cost the turn; each ticks down on its own
        let stunned = me.consume_stun();
        let silenced = me.consume_silence();
        if stunned || silenced {
            return AttackResult::AllAlive;
        }

        if !charmed && is_cadence_round(round, KIANA_CADENCE) {
            // Defense is added, so the throw lands for exactly `attack`
            let amount = me.attack + opponent.stats.defense;
            let result = opponent.receive_special_attack(me, amount, false, rng);
            if result.is_terminal() {
                return result;
            }
            if rng.roll_at_most(KIANA_STUN_CHANCE) {
                tracing::trace!(round, "Kiana stunned by her own throw");
                me.stun_turns = KIANA_STUN_TURNS;
            }
            AttackResult::AllAlive
        } else {
            let amount = me.attack - opponent.stats.defense;
            opponent.receive_basic_attack(me, amount, rng)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duel::rng::ScriptedSource;

    fn setup() -> (Fighter, Fighter) {
        (
            Fighter::spawn(CharacterId::Kiana),
            Fighter::spawn(CharacterId::Mei),
        )
    }

    #[test]
    fn test_odd_round_basic_attack() {
        let (mut kiana, mut mei) = setup();
        let mut rng = ScriptedSource::never_trigger();
        kiana.take_turn(1, &mut mei, &mut rng);
        assert_eq!(mei.stats.health, 100 - (24 - 12));
    }

    #[test]
    fn test_throw_ignores_defense_and_may_stun() {
        let (mut kiana, mut mei) = setup();
        let mut rng = ScriptedSource::always_trigger();
        kiana.take_turn(2, &mut mei, &mut rng);
        assert_eq!(mei.stats.health, 100 - (24 + 12));
        assert_eq!(kiana.stats.stun_turns, 1);

        // Stunned turn: counter consumed, no damage
        kiana.take_turn(3, &mut mei, &mut rng);
        assert_eq!(kiana.stats.stun_turns, 0);
        assert_eq!(mei.stats.health, 64);

        kiana.take_turn(5, &mut mei, &mut rng);
        assert_eq!(mei.stats.health, 64 - 12);
    }

    #[test]
    fn test_stun_and_silence_tick_together() {
        let (mut kiana, mut mei) = setup();
        kiana.stats.stun_turns = 1;
        kiana.stats.silence_turns = 2;
        let mut rng = ScriptedSource::never_trigger();

        assert_eq!(kiana.take_turn(1, &mut mei, &mut rng), AttackResult::AllAlive);
        assert_eq!((kiana.stats.stun_turns, kiana.stats.silence_turns), (0, 1));
        kiana.take_turn(2, &mut mei, &mut rng);
        assert_eq!(kiana.stats.silence_turns, 0);
        assert_eq!(mei.stats.health, 100);
    }

    #[test]
    fn test_charm_blocks_throw() {
        let (mut kiana, mut mei) = setup();
        kiana.stats.charm_turns = 1;
        let mut rng = ScriptedSource::always_trigger();
        kiana.take_turn(2, &mut mei, &mut rng);
        assert_eq!(mei.stats.health, 88);
        assert_eq!(kiana.stats.stun_turns, 0);
        assert_eq!(kiana.stats.charm_turns, 0);
    }
}
