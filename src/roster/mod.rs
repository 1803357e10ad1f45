//! The fixed twelve-character roster
//!
//! Each character is a closed rule set. `Kit` carries the character's
//! private state (revival charges, stance, one-shot flags) next to the
//! shared `Combatant` record, and dispatches to its `CharacterBehavior`.

pub mod constants;

mod bronya;
mod corvus;
mod durandal;
mod fu_hua;
mod himeko;
mod kiana;
mod mei;
mod olenyeva;
mod rita;
mod sakura;
mod seele;
mod theresa;

pub use bronya::Bronya;
pub use corvus::Corvus;
pub use durandal::Durandal;
pub use fu_hua::FuHua;
pub use himeko::Himeko;
pub use kiana::Kiana;
pub use mei::Mei;
pub use olenyeva::Olenyeva;
pub use rita::Rita;
pub use sakura::Sakura;
pub use seele::{Seele, SeeleStance};
pub use theresa::Theresa;

use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::core::error::{ArenaError, Result};
use crate::duel::behavior::CharacterBehavior;
use crate::duel::combatant::{AttackResult, Combatant};
use crate::duel::pipeline::Strike;
use crate::duel::rng::RandomSource;

/// Roster identity tag
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterId {
    Kiana,
    Mei,
    Bronya,
    Himeko,
    Rita,
    #[display(fmt = "Sakura & Kallen")]
    Sakura,
    Corvus,
    Theresa,
    #[display(fmt = "Rozaliya & Liliya")]
    Olenyeva,
    Seele,
    #[display(fmt = "Durandal & Stan")]
    Durandal,
    #[display(fmt = "Fu Hua")]
    FuHua,
}

impl CharacterId {
    /// Roster order, used for round-robin pairings
    pub const ALL: [CharacterId; 12] = [
        CharacterId::Kiana,
        CharacterId::Mei,
        CharacterId::Bronya,
        CharacterId::Himeko,
        CharacterId::Rita,
        CharacterId::Sakura,
        CharacterId::Corvus,
        CharacterId::Theresa,
        CharacterId::Olenyeva,
        CharacterId::Seele,
        CharacterId::Durandal,
        CharacterId::FuHua,
    ];
}

impl FromStr for CharacterId {
    type Err = ArenaError;

    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let id = match key.as_str() {
            "kiana" => CharacterId::Kiana,
            "mei" => CharacterId::Mei,
            "bronya" => CharacterId::Bronya,
            "himeko" => CharacterId::Himeko,
            "rita" => CharacterId::Rita,
            "sakura" | "sakurakallen" => CharacterId::Sakura,
            "corvus" => CharacterId::Corvus,
            "theresa" => CharacterId::Theresa,
            "olenyeva" | "rozaliyaliliya" => CharacterId::Olenyeva,
            "seele" => CharacterId::Seele,
            "durandal" | "durandalstan" => CharacterId::Durandal,
            "fuhua" => CharacterId::FuHua,
            _ => return Err(ArenaError::UnknownCharacter(s.to_string())),
        };
        Ok(id)
    }
}

/// Character-private state, one case per roster entry
#[derive(Debug, Clone)]
pub enum Kit {
    Kiana(Kiana),
    Mei(Mei),
    Bronya(Bronya),
    Himeko(Himeko),
    Rita(Rita),
    Sakura(Sakura),
    Corvus(Corvus),
    Theresa(Theresa),
    Olenyeva(Olenyeva),
    Seele(Seele),
    Durandal(Durandal),
    FuHua(FuHua),
}

impl Kit {
    fn behavior_mut(&mut self) -> &mut dyn CharacterBehavior {
        match self {
            Kit::Kiana(k) => k,
            Kit::Mei(k) => k,
            Kit::Bronya(k) => k,
            Kit::Himeko(k) => k,
            Kit::Rita(k) => k,
            Kit::Sakura(k) => k,
            Kit::Corvus(k) => k,
            Kit::Theresa(k) => k,
            Kit::Olenyeva(k) => k,
            Kit::Seele(k) => k,
            Kit::Durandal(k) => k,
            Kit::FuHua(k) => k,
        }
    }
}

/// A combatant together with the behavior that drives it
#[derive(Debug, Clone)]
pub struct Fighter {
    pub stats: Combatant,
    pub kit: Kit,
}

impl Fighter {
    /// Fresh fighter with the character's base stats
    pub fn spawn(id: CharacterId) -> Self {
        let (stats, kit) = match id {
            CharacterId::Kiana => (Kiana::combatant(), Kit::Kiana(Kiana)),
            CharacterId::Mei => (Mei::combatant(), Kit::Mei(Mei)),
            CharacterId::Bronya => (Bronya::combatant(), Kit::Bronya(Bronya)),
            CharacterId::Himeko => (Himeko::combatant(), Kit::Himeko(Himeko)),
            CharacterId::Rita => (Rita::combatant(), Kit::Rita(Rita::default())),
            CharacterId::Sakura => (Sakura::combatant(), Kit::Sakura(Sakura)),
            CharacterId::Corvus => (Corvus::combatant(), Kit::Corvus(Corvus)),
            CharacterId::Theresa => (Theresa::combatant(), Kit::Theresa(Theresa)),
            CharacterId::Olenyeva => (Olenyeva::combatant(), Kit::Olenyeva(Olenyeva::default())),
            CharacterId::Seele => (Seele::combatant(), Kit::Seele(Seele::default())),
            CharacterId::Durandal => (Durandal::combatant(), Kit::Durandal(Durandal)),
            CharacterId::FuHua => (FuHua::combatant(), Kit::FuHua(FuHua)),
        };
        Self { stats, kit }
    }

    /// Spawn by name, rejecting anything outside the roster
    pub fn spawn_named(name: &str) -> Result<Self> {
        Ok(Self::spawn(name.parse()?))
    }

    pub fn id(&self) -> CharacterId {
        self.stats.id
    }

    pub fn take_turn(
        &mut self,
        round: u32,
        opponent: &mut Fighter,
        rng: &mut dyn RandomSource,
    ) -> AttackResult {
        if self.stats.is_dead() {
            return AttackResult::AllAlive;
        }
        self.kit
            .behavior_mut()
            .take_turn(round, &mut self.stats, opponent, rng)
    }

    /// Route an incoming hit through this fighter's intake
    pub fn receive(
        &mut self,
        attacker: &mut Combatant,
        strike: Strike,
        amount: i32,
        rng: &mut dyn RandomSource,
    ) -> AttackResult {
        let behavior = self.kit.behavior_mut();
        match strike {
            Strike::Basic => behavior.receive_basic_attack(&mut self.stats, attacker, amount, rng),
            Strike::Special => {
                behavior.receive_special_attack(&mut self.stats, attacker, amount, false, rng)
            }
            Strike::ForcedSpecial => {
                behavior.receive_special_attack(&mut self.stats, attacker, amount, true, rng)
            }
        }
    }

    pub fn receive_basic_attack(
        &mut self,
        attacker: &mut Combatant,
        amount: i32,
        rng: &mut dyn RandomSource,
    ) -> AttackResult {
        self.receive(attacker, Strike::Basic, amount, rng)
    }

    pub fn receive_special_attack(
        &mut self,
        attacker: &mut Combatant,
        amount: i32,
        force_hit: bool,
        rng: &mut dyn RandomSource,
    ) -> AttackResult {
        let strike = if force_hit {
            Strike::ForcedSpecial
        } else {
            Strike::Special
        };
        self.receive(attacker, strike, amount, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_id_spawns_matching_fighter() {
        for id in CharacterId::ALL {
            let fighter = Fighter::spawn(id);
            assert_eq!(fighter.id(), id);
            assert_eq!(fighter.stats.health, constants::BASE_HEALTH);
            assert_eq!(fighter.stats.hit_rate, 1.0);
        }
    }

    #[test]
    fn test_spawn_is_pure() {
        for id in CharacterId::ALL {
            assert_eq!(Fighter::spawn(id).stats, Fighter::spawn(id).stats);
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("kiana".parse::<CharacterId>().unwrap(), CharacterId::Kiana);
        assert_eq!("Fu Hua".parse::<CharacterId>().unwrap(), CharacterId::FuHua);
        assert_eq!("fu_hua".parse::<CharacterId>().unwrap(), CharacterId::FuHua);
        assert_eq!("DURANDAL".parse::<CharacterId>().unwrap(), CharacterId::Durandal);
        for id in CharacterId::ALL {
            assert_eq!(id.to_string().parse::<CharacterId>().unwrap(), id);
        }
    }

    #[test]
    fn test_unknown_name_rejected() {
        let err = Fighter::spawn_named("Elysia").unwrap_err();
        assert!(matches!(err, ArenaError::UnknownCharacter(name) if name == "Elysia"));
    }

    #[test]
    fn test_group_units() {
        let groups: Vec<_> = CharacterId::ALL
            .into_iter()
            .filter(|id| Fighter::spawn(*id).stats.is_group_unit)
            .collect();
        assert_eq!(
            groups,
            vec![
                CharacterId::Sakura,
                CharacterId::Theresa,
                CharacterId::Olenyeva,
                CharacterId::Seele,
                CharacterId::Durandal,
            ]
        );
    }
}
