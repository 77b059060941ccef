//! Tracing setup for the sweep binaries.
//!
//! Diagnostics are separate from the run log: `tracing` output goes to the
//! subscriber configured here (stderr for the CLI, so stdout stays reserved
//! for the report), while `testaccumulate.log` belongs to the Reporter.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Environment variable consulted for the diagnostic filter.
pub const LOG_ENV_VAR: &str = "MPISWEEP_LOG";

/// Subscriber settings, resolved before installation.
#[derive(Debug, Clone)]
pub struct LogConfig {
    filter: String,
    stderr: bool,
}

impl LogConfig {
    /// Read the filter from `MPISWEEP_LOG`, falling back to
    /// `default_level`.
    pub fn from_env(default_level: &str) -> Self {
        let filter =
            std::env::var(LOG_ENV_VAR).unwrap_or_else(|_| default_level.to_string());
        Self {
            filter,
            stderr: false,
        }
    }

    /// Route diagnostics to stderr.
    pub fn with_stderr(mut self) -> Self {
        self.stderr = true;
        self
    }

    /// Replace the filter.
    pub fn with_level(mut self, level: &str) -> Self {
        self.filter = level.to_string();
        self
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }
}

/// Install the global subscriber. Call once, early in main.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.filter)
        .with_context(|| format!("invalid log filter {:?}", config.filter))?;

    if config.stderr {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init();
    }

    Ok(())
}
