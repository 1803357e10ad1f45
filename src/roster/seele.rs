//! Seele - alternates between two stances every turn

use crate::duel::behavior::CharacterBehavior;
use crate::duel::combatant::{AttackResult, Combatant};
use crate::duel::rng::RandomSource;
use crate::roster::constants::*;
use crate::roster::{CharacterId, Fighter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeeleStance {
    /// Defensive stance, heals on entry
    #[default]
    Light,
    /// Offensive stance
    Dark,
}

impl SeeleStance {
    pub fn toggled(self) -> Self {
        match self {
            SeeleStance::Light => SeeleStance::Dark,
            SeeleStance::Dark => SeeleStance::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Seele {
    pub stance: SeeleStance,
}

impl Seele {
    pub fn combatant() -> Combatant {
        Combatant::new(
            CharacterId::Seele,
            BASE_HEALTH,
            SEELE_DEFENSE,
            SEELE_ATTACK,
            SEELE_SPEED,
        )
        .with_group_unit()
    }

    fn switch_stance(&mut self, round: u32, me: &mut Combatant, rng: &mut dyn RandomSource) {
        self.stance = self.stance.toggled();
        match self.stance {
            SeeleStance::Dark => {
                me.defense -= SEELE_STANCE_DEFENSE;
                me.attack += SEELE_STANCE_ATTACK;
                tracing::trace!(round, "Seele enters dark stance");
            }
            SeeleStance::Light => {
                let healed = me.heal(rng.uniform_int(SEELE_HEAL_MIN, SEELE_HEAL_MAX));
                me.defense += SEELE_STANCE_DEFENSE;
                me.attack -= SEELE_STANCE_ATTACK;
                tracing::trace!(round, healed, "Seele enters light stance");
            }
        }
    }
}

impl CharacterBehavior for Seele {
    fn take_turn(
        &mut self,
        round: u32,
        me: &mut Combatant,
        opponent: &mut Fighter,
        rng: &mut dyn RandomSource,
    ) -> AttackResult {
        me.consume_charm();

        // The stance flips even on a silenced turn
        self.switch_stance(round, me, rng);

        if me.consume_silence() {
            return AttackResult::AllAlive;
        }

        let amount = me.attack - opponent.stats.defense;
        opponent.receive_basic_attack(me, amount, rng)
    }
}
