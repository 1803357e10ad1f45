pub mod config;
pub mod error;

pub use config::{load_config, ArenaConfig};
pub use error::{ArenaError, Result};
