//! Rozaliya & Liliya - one revival, followed by a guaranteed aftershock

use crate::duel::behavior::CharacterBehavior;
use crate::duel::combatant::{AttackResult, Combatant};
use crate::duel::pipeline;
use crate::duel::rng::RandomSource;
use crate::roster::constants::*;
use crate::roster::{CharacterId, Fighter};

#[derive(Debug, Clone, Copy)]
pub struct Olenyeva {
    pub revivals_left: u32,
    /// Set on revival, spent on the next turn
    pub aftershock_pending: bool,
}

impl Default for Olenyeva {
    fn default() -> Self {
        Self {
            revivals_left: OLENYEVA_REVIVALS,
            aftershock_pending: false,
        }
    }
}

impl Olenyeva {
    pub fn combatant() -> Combatant {
        Combatant::new(
            CharacterId::Olenyeva,
            BASE_HEALTH,
            OLENYEVA_DEFENSE,
            OLENYEVA_ATTACK,
            OLENYEVA_SPEED,
        )
        .with_group_unit()
    }

    /// Turn a lethal hit into a revival while a charge remains and the
    /// twins are not charmed
    fn intercept_death(&mut self, me: &mut Combatant, result: AttackResult) -> AttackResult {
        if result != AttackResult::DefenderDead || me.charm_turns > 0 || self.revivals_left == 0 {
            return result;
        }
        me.health = OLENYEVA_REVIVE_HEALTH;
        self.revivals_left -= 1;
        self.aftershock_pending = true;
        tracing::trace!(health = me.health, "revived");
        AttackResult::AllAlive
    }
}

impl CharacterBehavior for Olenyeva {
    fn take_turn(
        &mut self,
        round: u32,
        me: &mut Combatant,
        opponent: &mut Fighter,
        rng: &mut dyn RandomSource,
    ) -> AttackResult {
        // No special branch to block; charm only matters for revival
        me.consume_charm();
        if me.consume_silence() {
            return AttackResult::AllAlive;
        }

        if self.aftershock_pending {
            self.aftershock_pending = false;
            let amount = if rng.roll_at_most(OLENYEVA_AFTERSHOCK_CHANCE) {
                OLENYEVA_AFTERSHOCK_BIG
            } else {
                OLENYEVA_AFTERSHOCK_SMALL
            };
            tracing::trace!(round, amount, "aftershock");
            let result = opponent.receive_special_attack(me, amount, true, rng);
            if result.is_terminal() {
                return result;
            }
        }

        let amount = me.attack - opponent.stats.defense;
        opponent.receive_basic_attack(me, amount, rng)
    }

    fn receive_basic_attack(
        &mut self,
        me: &mut Combatant,
        attacker: &mut Combatant,
        amount: i32,
        rng: &mut dyn RandomSource,
    ) -> AttackResult {
        let result = pipeline::receive_basic_attack(me, attacker, amount, rng);
        self.intercept_death(me, result)
    }

    fn receive_special_attack(
        &mut self,
        me: &mut Combatant,
        attacker: &mut Combatant,
        amount: i32,
        force_hit: bool,
        rng: &mut dyn RandomSource,
    ) -> AttackResult {
        let result = pipeline::receive_special_attack(me, attacker, amount, force_hit, rng);
        self.intercept_death(me, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::duel::rng::ScriptedSource;
    use crate::roster::Kit;

    fn state(fighter: &Fighter) -> Olenyeva {
        match &fighter.kit {
            Kit::Olenyeva(o) => *o,
            _ => panic!("not Olenyeva"),
        }
    }

    #[test]
    fn test_revives_once() {
        let mut twins = Fighter::spawn(CharacterId::Olenyeva);
        let mut kiana = Fighter::spawn(CharacterId::Kiana);
        twins.stats.health = 5;
        let mut rng = ScriptedSource::never_trigger();

        assert_eq!(kiana.take_turn(1, &mut twins, &mut rng), AttackResult::AllAlive);
        assert_eq!(twins.stats.health, OLENYEVA_REVIVE_HEALTH);
        assert_eq!(state(&twins).revivals_left, 0);
        assert!(state(&twins).aftershock_pending);

        twins.stats.health = 5;
        assert_eq!(kiana.take_turn(3, &mut twins, &mut rng), AttackResult::DefenderDead);
    }

    #[test]
    fn test_charm_prevents_revival() {
        let mut twins = Fighter::spawn(CharacterId::Olenyeva);
        twins.stats.health = 5;
        twins.stats.charm_turns = 1;
        let mut kiana = Fighter::spawn(CharacterId::Kiana);
        let mut rng = ScriptedSource::never_trigger();
        assert_eq!(kiana.take_turn(1, &mut twins, &mut rng), AttackResult::DefenderDead);
        assert_eq!(state(&twins).revivals_left, 1);
    }

    #[test]
    fn test_special_kill_also_revives() {
        let mut twins = Fighter::spawn(CharacterId::Olenyeva);
        twins.stats.health = 10;
        let mut kiana = Fighter::spawn(CharacterId::Kiana);
        let mut rng = ScriptedSource::never_trigger();
        assert_eq!(kiana.take_turn(2, &mut twins, &mut rng), AttackResult::AllAlive);
        assert_eq!(twins.stats.health, 20);
    }

    #[test]
    fn test_aftershock_always_connects() {
        let mut twins = Fighter::spawn(CharacterId::Olenyeva);
        if let Kit::Olenyeva(o) = &mut twins.kit {
            o.aftershock_pending = true;
        }
        twins.stats.hit_rate = 0.0;
        let mut mei = Fighter::spawn(CharacterId::Mei);
        mei.stats.health = 1_000;
        let mut rng = ScriptedSource::never_trigger();

        twins.take_turn(1, &mut mei, &mut rng);
        // Small aftershock lands despite zero accuracy; the basic misses
        assert_eq!(mei.stats.health, 1_000 - OLENYEVA_AFTERSHOCK_SMALL);
        assert!(!state(&twins).aftershock_pending);
    }

    #[test]
    fn test_lethal_aftershock_ends_turn() {
        let mut twins = Fighter::spawn(CharacterId::Olenyeva);
        if let Kit::Olenyeva(o) = &mut twins.kit {
            o.aftershock_pending = true;
        }
        let mut mei = Fighter::spawn(CharacterId::Mei);
        let mut rng = ScriptedSource::always_trigger();
        assert_eq!(twins.take_turn(1, &mut mei, &mut rng), AttackResult::DefenderDead);
        assert_eq!(mei.stats.health, 100 - OLENYEVA_AFTERSHOCK_BIG);
    }
}
