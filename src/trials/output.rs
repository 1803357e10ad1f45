//! Aggregated results and serialization

use serde::{Deserialize, Serialize};

use crate::roster::CharacterId;

/// Tally of one matchup
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchupStats {
    pub p0: CharacterId,
    pub p1: CharacterId,
    pub trials: u32,
    pub p0_wins: u32,
    pub p1_wins: u32,
    pub draws: u32,
    /// Percentage of trials won by P0
    pub p0_win_rate: f64,
    /// Percentage of trials won by P1
    pub p1_win_rate: f64,
    pub mean_rounds: f64,
}

impl MatchupStats {
    pub fn new(
        p0: CharacterId,
        p1: CharacterId,
        trials: u32,
        p0_wins: u32,
        p1_wins: u32,
        draws: u32,
        total_rounds: u64,
    ) -> Self {
        let percent = |n: u32| {
            if trials == 0 {
                0.0
            } else {
                f64::from(n) * 100.0 / f64::from(trials)
            }
        };
        let mean_rounds = if trials == 0 {
            0.0
        } else {
            total_rounds as f64 / f64::from(trials)
        };

        Self {
            p0,
            p1,
            trials,
            p0_wins,
            p1_wins,
            draws,
            p0_win_rate: percent(p0_wins),
            p1_win_rate: percent(p1_wins),
            mean_rounds,
        }
    }

    pub fn summary(&self) -> String {
        let mut line = format!(
            "{} vs {}:\n    win rate: {:8.4}% / {:8.4}%  (mean {:.2} rounds)",
            self.p0, self.p1, self.p0_win_rate, self.p1_win_rate, self.mean_rounds,
        );
        if self.draws > 0 {
            line.push_str(&format!("  [{} draws]", self.draws));
        }
        line
    }
}

/// Output of a full round robin
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TournamentReport {
    pub trials_per_matchup: u32,
    pub seed: u64,
    pub matchups: Vec<MatchupStats>,
}

impl TournamentReport {
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn summary(&self) -> String {
        self.matchups
            .iter()
            .map(MatchupStats::summary)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
