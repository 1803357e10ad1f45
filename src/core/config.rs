//! Arena configuration loaded from TOML
//!
//! Only the driver-facing knobs live here. Per-character probabilities and
//! cadences are fixed rules, see `roster::constants`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{ArenaError, Result};

/// Default number of duels per matchup
pub const DEFAULT_TRIALS: u32 = 10_000;

/// Default round cap before a duel is called a draw
///
/// No roster pairing comes close to this under normal play; the cap only
/// exists so a degenerate stat line cannot loop forever.
pub const DEFAULT_MAX_ROUNDS: u32 = 1_000;

/// Configuration for a simulation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Duels run per matchup
    pub trials: u32,
    /// Rounds after which an undecided duel is reported as a draw
    pub max_rounds: u32,
    /// Base seed; `None` draws one from entropy at startup
    pub seed: Option<u64>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            max_rounds: DEFAULT_MAX_ROUNDS,
            seed: None,
        }
    }
}

impl ArenaConfig {
    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: ArenaConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(ArenaError::InvalidConfig(
                "trials must be at least 1".to_string(),
            ));
        }
        if self.max_rounds == 0 {
            return Err(ArenaError::InvalidConfig(
                "max_rounds must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load config from a TOML file
pub fn load_config(path: impl AsRef<Path>) -> Result<ArenaConfig> {
    let contents = fs::read_to_string(path.as_ref())?;
    ArenaConfig::from_toml_str(&contents)
}
