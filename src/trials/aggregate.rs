//! Matchup and round-robin runners

use rayon::prelude::*;

use crate::core::config::ArenaConfig;
use crate::duel::rng::SeededSource;
use crate::duel::state::{run_duel, DuelOutcome, DuelReport};
use crate::roster::{CharacterId, Fighter};
use crate::trials::output::{MatchupStats, TournamentReport};

/// Per-trial seed from a base seed and a stream index (SplitMix64 finalizer)
pub fn derive_seed(base: u64, stream: u64) -> u64 {
    let mut z = base ^ stream.wrapping_add(1).wrapping_mul(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    p0_wins: u32,
    p1_wins: u32,
    draws: u32,
    rounds: u64,
}

impl Tally {
    fn record(mut self, report: DuelReport) -> Self {
        match report.outcome {
            DuelOutcome::P0Wins => self.p0_wins += 1,
            DuelOutcome::P1Wins => self.p1_wins += 1,
            DuelOutcome::Draw => self.draws += 1,
        }
        self.rounds += u64::from(report.rounds);
        self
    }

    fn merge(self, other: Self) -> Self {
        Self {
            p0_wins: self.p0_wins + other.p0_wins,
            p1_wins: self.p1_wins + other.p1_wins,
            draws: self.draws + other.draws,
            rounds: self.rounds + other.rounds,
        }
    }
}

/// Run `trials` duels of `p0` against `p1`
///
/// Trial `k` is seeded with `derive_seed(seed, k)`, so equal arguments give
/// equal stats regardless of how rayon schedules the work.
pub fn run_matchup(
    p0: CharacterId,
    p1: CharacterId,
    trials: u32,
    max_rounds: u32,
    seed: u64,
) -> MatchupStats {
    let tally = (0..trials)
        .into_par_iter()
        .map(|k| {
            let mut rng = SeededSource::from_seed(derive_seed(seed, u64::from(k)));
            run_duel(Fighter::spawn(p0), Fighter::spawn(p1), max_rounds, &mut rng)
        })
        .fold(Tally::default, Tally::record)
        .reduce(Tally::default, Tally::merge);

    let stats = MatchupStats::new(
        p0,
        p1,
        trials,
        tally.p0_wins,
        tally.p1_wins,
        tally.draws,
        tally.rounds,
    );
    tracing::debug!(
        p0 = %p0,
        p1 = %p1,
        p0_win_rate = stats.p0_win_rate,
        mean_rounds = stats.mean_rounds,
        "matchup complete"
    );
    stats
}

/// Every unordered roster pair, in roster order
pub fn run_round_robin(config: &ArenaConfig, seed: u64) -> TournamentReport {
    let roster = CharacterId::ALL;
    let mut matchups = Vec::new();
    let mut pair_index = 0u64;

    for (i, &p0) in roster.iter().enumerate() {
        for &p1 in &roster[i + 1..] {
            let matchup_seed = derive_seed(seed, pair_index);
            matchups.push(run_matchup(p0, p1, config.trials, config.max_rounds, matchup_seed));
            pair_index += 1;
        }
    }

    TournamentReport {
        trials_per_matchup: config.trials,
        seed,
        matchups,
    }
}
