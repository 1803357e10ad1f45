//! Duel state machine
//!
//! Two fighters alternate half-turns until one result is terminal. Turn
//! order is fixed when the duel is created and never re-evaluated, even
//! though several characters change their stats mid-fight.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::core::config::DEFAULT_MAX_ROUNDS;
use crate::duel::combatant::AttackResult;
use crate::duel::rng::RandomSource;
use crate::roster::Fighter;

/// Seat of a fighter in a duel
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    P0,
    P1,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::P0 => Side::P1,
            Side::P1 => Side::P0,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::P0 => 0,
            Side::P1 => 1,
        }
    }
}

/// Duel lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuelState {
    Ongoing,
    P0Wins,
    P1Wins,
    /// Round cap reached with both fighters alive
    Draw,
}

impl DuelState {
    pub fn is_finished(self) -> bool {
        self != DuelState::Ongoing
    }

    fn won_by(side: Side) -> Self {
        match side {
            Side::P0 => DuelState::P0Wins,
            Side::P1 => DuelState::P1Wins,
        }
    }
}

/// Final outcome handed to the trial aggregator
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DuelOutcome {
    P0Wins,
    P1Wins,
    Draw,
}

impl DuelOutcome {
    pub fn winner(self) -> Option<Side> {
        match self {
            DuelOutcome::P0Wins => Some(Side::P0),
            DuelOutcome::P1Wins => Some(Side::P1),
            DuelOutcome::Draw => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelReport {
    pub outcome: DuelOutcome,
    /// Round in which the duel ended, starting at 1
    pub rounds: u32,
}

/// Who opens every round: P0 only with strictly higher speed
pub fn first_mover(p0: &Fighter, p1: &Fighter) -> Side {
    if p0.stats.speed > p1.stats.speed {
        Side::P0
    } else {
        Side::P1
    }
}

/// One duel between two freshly spawned fighters
pub struct Duel {
    fighters: [Fighter; 2],
    first: Side,
    round: u32,
    second_half: bool,
    max_rounds: u32,
    state: DuelState,
}

impl Duel {
    pub fn new(p0: Fighter, p1: Fighter) -> Self {
        let first = first_mover(&p0, &p1);
        tracing::debug!(
            p0 = %p0.stats.name,
            p1 = %p1.stats.name,
            first = %first,
            "duel started"
        );
        Self {
            fighters: [p0, p1],
            first,
            round: 1,
            second_half: false,
            max_rounds: DEFAULT_MAX_ROUNDS,
            state: DuelState::Ongoing,
        }
    }

    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds.max(1);
        self
    }

    pub fn first_mover(&self) -> Side {
        self.first
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn state(&self) -> DuelState {
        self.state
    }

    pub fn fighter(&self, side: Side) -> &Fighter {
        &self.fighters[side.index()]
    }

    /// Side whose half-turn is next
    pub fn acting_side(&self) -> Side {
        if self.second_half {
            self.first.other()
        } else {
            self.first
        }
    }

    /// Play one half-turn. Does nothing once the duel is finished.
    pub fn step(&mut self, rng: &mut dyn RandomSource) -> DuelState {
        if self.state.is_finished() {
            return self.state;
        }

        let side = self.acting_side();
        let round = self.round;
        let [p0, p1] = &mut self.fighters;
        let (actor, opponent) = match side {
            Side::P0 => (p0, p1),
            Side::P1 => (p1, p0),
        };

        let _span = tracing::trace_span!("turn", round, actor = %actor.stats.name).entered();
        let result = actor.take_turn(round, opponent, rng);

        self.state = match result {
            AttackResult::DefenderDead => DuelState::won_by(side),
            AttackResult::AttackerDead => DuelState::won_by(side.other()),
            AttackResult::AllAlive => DuelState::Ongoing,
        };

        if !self.state.is_finished() {
            if self.second_half {
                if self.round >= self.max_rounds {
                    self.state = DuelState::Draw;
                } else {
                    self.round += 1;
                }
            }
            self.second_half = !self.second_half;
        }

        self.state
    }

    /// Play to a terminal state
    pub fn run(mut self, rng: &mut dyn RandomSource) -> DuelReport {
        while !self.step(rng).is_finished() {}
        let outcome = match self.state {
            DuelState::P0Wins => DuelOutcome::P0Wins,
            DuelState::P1Wins => DuelOutcome::P1Wins,
            DuelState::Draw | DuelState::Ongoing => DuelOutcome::Draw,
        };
        tracing::debug!(%outcome, rounds = self.round, "duel finished");
        DuelReport {
            outcome,
            rounds: self.round,
        }
    }
}

/// Run one duel to completion with the given round cap
pub fn run_duel(
    p0: Fighter,
    p1: Fighter,
    max_rounds: u32,
    rng: &mut dyn RandomSource,
) -> DuelReport {
    Duel::new(p0, p1).with_max_rounds(max_rounds).run(rng)
}
