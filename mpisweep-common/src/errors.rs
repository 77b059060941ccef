//! Error types for sweep operations.

use std::path::PathBuf;

/// Error type for sweep harness operations.
///
/// Invocation failures are not errors: the runner contract is total and
/// failing runs become ledger entries. What is left is the harness's own
/// I/O, which is fatal because a partial run must never go unreported.
#[derive(Debug, thiserror::Error)]
pub enum SweepError {
    #[error("failed to write run log {path}: {source}")]
    LogWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for sweep harness operations.
pub type SweepResult<T> = Result<T, SweepError>;
