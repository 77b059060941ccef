//! Run configuration for the sweep driver.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domains::RunMode;

/// Fixed program set exercised by the sweep, in run order.
pub const PROGRAMS: [&str; 3] = ["accumulate", "accumulateyz", "accumulatexy"];

/// Name of the run log, written in the working directory.
pub const LOG_FILE_NAME: &str = "testaccumulate.log";

/// Default MPI launcher binary.
pub const DEFAULT_LAUNCHER: &str = "mpiexec";

/// The fixed program set as owned strings.
pub fn default_programs() -> Vec<String> {
    PROGRAMS.iter().map(|name| name.to_string()).collect()
}

/// Resolved settings for one sweep run, assembled by the binary from CLI
/// flags and environment overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Coverage mode.
    pub mode: RunMode,
    /// Fixed RNG seed for reproducible domains; OS entropy when absent.
    pub seed: Option<u64>,
    /// Per-invocation timeout; zero means unbounded.
    pub timeout: Duration,
    /// Directory probed for the test executables.
    pub bindir: PathBuf,
    /// MPI launcher binary (name or path).
    pub launcher: String,
    /// Programs to sweep, in order.
    pub programs: Vec<String>,
    /// Run log path.
    pub log_path: PathBuf,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            mode: RunMode::Full,
            seed: None,
            timeout: Duration::ZERO,
            bindir: PathBuf::from("."),
            launcher: DEFAULT_LAUNCHER.to_string(),
            programs: default_programs(),
            log_path: PathBuf::from(LOG_FILE_NAME),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_accumulate_suite() {
        let config = SweepConfig::default();
        assert_eq!(config.mode, RunMode::Full);
        assert_eq!(config.seed, None);
        assert!(config.timeout.is_zero());
        assert_eq!(config.bindir, PathBuf::from("."));
        assert_eq!(config.launcher, "mpiexec");
        assert_eq!(config.log_path, PathBuf::from("testaccumulate.log"));
    }

    #[test]
    fn test_program_order_is_fixed() {
        assert_eq!(
            default_programs(),
            vec!["accumulate", "accumulateyz", "accumulatexy"]
        );
    }
}
