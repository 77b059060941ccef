//! Aggregated results for one sweep session.

use serde::{Deserialize, Serialize};

use crate::invocation::TestResult;

/// One recorded invocation failure.
///
/// Kept structured so presentation stays a report-time concern; the
/// rendered form carries everything needed to reproduce the run by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureRecord {
    /// The literal command line of the failing run.
    pub command_line: Vec<String>,
    /// Its non-zero exit code.
    pub exit_code: i32,
}

impl FailureRecord {
    /// Render the ledger line: command line, a tab, then the exit code.
    pub fn render(&self) -> String {
        format!("{}\t(code {})", self.command_line.join(" "), self.exit_code)
    }
}

/// Monotonic bookkeeping for a sweep.
///
/// Counters and records only ever grow while the sweep runs; the summary is
/// finalized once, after the last invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Count of (program, X, Y, Z, P) tuples actually attempted.
    pub tests_run: u64,
    /// Failing invocations, in completion order.
    pub failures: Vec<FailureRecord>,
    /// Programs whose executables were not found; their sweeps were
    /// skipped without charging any tests.
    pub missing_programs: Vec<String>,
}

impl SessionSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Charge one finished invocation: every result counts toward
    /// `tests_run`, non-zero exits additionally append a failure record.
    pub fn record(&mut self, result: &TestResult) {
        self.tests_run += 1;
        if !result.outcome.success() {
            self.failures.push(FailureRecord {
                command_line: result.outcome.command_line.clone(),
                exit_code: result.outcome.exit_code,
            });
        }
    }

    /// Record a program whose executable was absent.
    pub fn record_missing(&mut self, name: impl Into<String>) {
        self.missing_programs.push(name.into());
    }

    pub fn failure_count(&self) -> u64 {
        self.failures.len() as u64
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Final process status: one per missing program, plus one more when
    /// any invocation failed. The flat scheme signals anomaly categories,
    /// not magnitudes.
    pub fn exit_status(&self) -> i32 {
        let mut status = self.missing_programs.len() as i32;
        if self.has_failures() {
            status += 1;
        }
        status
    }
}
