//! Rita - charms the opponent and permanently dampens incoming damage

use crate::duel::behavior::{is_cadence_round, scale, CharacterBehavior};
use crate::duel::combatant::{AttackResult, Combatant};
use crate::duel::pipeline;
use crate::duel::rng::RandomSource;
use crate::roster::constants::*;
use crate::roster::{CharacterId, Fighter};

#[derive(Debug, Clone, Copy, Default)]
pub struct Rita {
    /// Set by the first charm; damage reduction applies from then on
    pub skill_active: bool,
}

impl Rita {
    pub fn combatant() -> Combatant {
        Combatant::new(CharacterId::Rita, BASE_HEALTH, RITA_DEFENSE, RITA_ATTACK, RITA_SPEED)
    }

    fn dampen(&self, amount: i32) -> i32 {
        if self.skill_active {
            scale(amount, RITA_DAMAGE_TAKEN)
        } else {
            amount
        }
    }
}

impl CharacterBehavior for Rita {
    fn take_turn(
        &mut self,
        round: u32,
        me: &mut Combatant,
        opponent: &mut Fighter,
        rng: &mut dyn RandomSource,
    ) -> AttackResult {
        // Rita is immune to charm: the counter is never consulted
        if me.consume_silence() {
            return AttackResult::AllAlive;
        }

        if is_cadence_round(round, RITA_CADENCE) {
            opponent.stats.heal(RITA_OPPONENT_HEAL);
            opponent.stats.charm_turns = RITA_CHARM_TURNS;
            self.skill_active = true;
            tracing::trace!(round, target = %opponent.stats.name, "charmed");
            return AttackResult::AllAlive;
        }

        let mut attack = me.attack;
        if rng.roll_below(RITA_WEAKEN_CHANCE) {
            attack = (attack - RITA_WEAKEN_SELF_PENALTY).max(0);
            opponent.stats.attack = (opponent.stats.attack - RITA_WEAKEN_OPPONENT_ATTACK).max(0);
            tracing::trace!(round, target = %opponent.stats.name, "attack weakened");
        }

        let amount = attack - opponent.stats.defense;
        opponent.receive_basic_attack(me, amount, rng)
    }

    fn receive_basic_attack(
        &mut self,
        me: &mut Combatant,
        attacker: &mut Combatant,
        amount: i32,
        rng: &mut dyn RandomSource,
    ) -> AttackResult {
        pipeline::receive_basic_attack(me, attacker, self.dampen(amount), rng)
    }

    fn receive_special_attack(
        &mut self,
        me: &mut Combatant,
        attacker: &mut Combatant,
        amount: i32,
        force_hit: bool,
        rng: &mut dyn RandomSource,
    ) -> AttackResult {
        pipeline::receive_special_attack(me, attacker, self.dampen(amount), force_hit, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::duel::rng::ScriptedSource;
    use crate::roster::Kit;

    fn skill_active(fighter: &Fighter) -> bool {
        match &fighter.kit {
            Kit::Rita(rita) => rita.skill_active,
            _ => panic!("not Rita"),
        }
    }

    #[test]
    fn test_charm_round_heals_and_charms() {
        let mut rita = Fighter::spawn(CharacterId::Rita);
        let mut kiana = Fighter::spawn(CharacterId::Kiana);
        kiana.stats.health = 98;
        let mut rng = ScriptedSource::never_trigger();

        assert_eq!(rita.take_turn(4, &mut kiana, &mut rng), AttackResult::AllAlive);
        assert_eq!(kiana.stats.health, 100);
        assert_eq!(kiana.stats.charm_turns, 2);
        assert!(skill_active(&rita));
    }

    #[test]
    fn test_damage_reduction_after_charm() {
        let mut rita = Fighter::spawn(CharacterId::Rita);
        let mut kiana = Fighter::spawn(CharacterId::Kiana);
        let mut rng = ScriptedSource::never_trigger();

        kiana.take_turn(1, &mut rita, &mut rng);
        assert_eq!(rita.stats.health, 100 - 13);

        rita.take_turn(4, &mut kiana, &mut rng);
        kiana.take_turn(5, &mut rita, &mut rng);
        // round(13 * 0.4) = 5
        assert_eq!(rita.stats.health, 87 - 5);
    }

    #[test]
    fn test_special_damage_also_reduced() {
        let mut rita = Fighter::spawn(CharacterId::Rita);
        let mut mei = Fighter::spawn(CharacterId::Mei);
        let mut rng = ScriptedSource::never_trigger();

        rita.take_turn(4, &mut mei, &mut rng);
        // Mei is charmed for two turns, the burst waits
        mei.take_turn(2, &mut rita, &mut rng);
        mei.take_turn(3, &mut rita, &mut rng);
        assert_eq!(rita.stats.health, 100 - 2 * 4);
        mei.take_turn(4, &mut rita, &mut rng);
        // Five hits of round(3 * 0.4) = 1
        assert_eq!(rita.stats.health, 92 - 5);
    }

    #[test]
    fn test_weaken_uses_strict_comparison() {
        let mut rita = Fighter::spawn(CharacterId::Rita);
        let mut kiana = Fighter::spawn(CharacterId::Kiana);

        let mut rng = ScriptedSource::never_trigger().with_floats([RITA_WEAKEN_CHANCE]);
        rita.take_turn(1, &mut kiana, &mut rng);
        assert_eq!(kiana.stats.attack, 24);
        assert_eq!(kiana.stats.health, 100 - 15);

        let mut rng = ScriptedSource::always_trigger();
        rita.take_turn(2, &mut kiana, &mut rng);
        assert_eq!(kiana.stats.attack, 20);
        assert_eq!(kiana.stats.health, 85 - 12);
    }

    #[test]
    fn test_rita_ignores_charm() {
        let mut rita = Fighter::spawn(CharacterId::Rita);
        rita.stats.charm_turns = 2;
        let mut kiana = Fighter::spawn(CharacterId::Kiana);
        let mut rng = ScriptedSource::never_trigger();
        rita.take_turn(4, &mut kiana, &mut rng);
        assert_eq!(kiana.stats.charm_turns, 2);
        assert_eq!(rita.stats.charm_turns, 2);
    }
}
