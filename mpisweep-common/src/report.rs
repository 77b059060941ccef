//! Report output: console lines, the run log, and summary rendering.
//!
//! The run log is a single-writer append sink. Every write opens, appends,
//! and closes the file so an interrupted run never leaves a half-written
//! handle behind; the file is truncated exactly once, when the sweep begins.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::errors::{SweepError, SweepResult};
use crate::invocation::TestResult;
use crate::summary::SessionSummary;

/// Append-only sink for the run log.
#[derive(Debug, Clone)]
pub struct LogSink {
    path: PathBuf,
}

impl LogSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Truncate the log, starting a fresh run.
    pub fn reset(&self) -> SweepResult<()> {
        File::create(&self.path).map_err(|source| self.write_error(source))?;
        Ok(())
    }

    /// Append one entry, opening and closing the file around the write.
    pub fn append(&self, entry: &str) -> SweepResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.write_error(source))?;
        writeln!(file, "{entry}").map_err(|source| self.write_error(source))?;
        Ok(())
    }

    fn write_error(&self, source: std::io::Error) -> SweepError {
        SweepError::LogWrite {
            path: self.path.clone(),
            source,
        }
    }
}

/// Writes progress to stdout and the run log, and renders the final
/// summary.
#[derive(Debug)]
pub struct Reporter {
    sink: LogSink,
}

impl Reporter {
    pub fn new(log_path: impl Into<PathBuf>) -> Self {
        Self {
            sink: LogSink::new(log_path),
        }
    }

    pub fn log_path(&self) -> &Path {
        self.sink.path()
    }

    /// Announce the run on stdout and truncate the log.
    pub fn begin(&self) -> SweepResult<()> {
        println!("MPI transpose unit test");
        println!("Log in {}\n", self.sink.path().display());
        self.sink.reset()?;
        self.sink
            .append(&format!("Sweep started {}", Utc::now().to_rfc3339()))
    }

    /// Status line for a program whose sweep is starting.
    pub fn program_running(&self, name: &str) -> SweepResult<()> {
        let line = format!("Running {name}");
        println!("{line}");
        self.sink.append(&line)
    }

    /// Status line for a program whose executable was not found.
    pub fn program_missing(&self, name: &str) -> SweepResult<()> {
        let line = format!("Error: executable {name} not present!");
        println!("{line}");
        self.sink.append(&line)
    }

    /// Log reproduction detail for a failing invocation: the command line,
    /// its exit code, and whatever the run said on stderr.
    pub fn invocation_failed(&self, result: &TestResult) -> SweepResult<()> {
        let mut entry = format!(
            "FAILED (code {}): {}",
            result.outcome.exit_code,
            result.outcome.rendered_command()
        );
        let stderr = result.outcome.stderr.trim_end();
        if !stderr.is_empty() {
            entry.push('\n');
            entry.push_str(stderr);
        }
        self.sink.append(&entry)
    }

    /// Print the ledger (when non-empty) and the final summary line.
    pub fn finish(&self, summary: &SessionSummary) {
        print!("{}", render_summary(summary));
    }
}

/// Render the end-of-run console block.
///
/// Pure function of the finalized summary: rendering twice yields identical
/// text. The last line is always
/// `"<failures> failures out of <testsRun> tests."`.
pub fn render_summary(summary: &SessionSummary) -> String {
    let mut text = String::new();
    if summary.has_failures() {
        text.push_str("Failure cases:\n");
        for failure in &summary.failures {
            text.push_str(&failure.render());
            text.push('\n');
        }
    }
    text.push('\n');
    text.push_str(&format!(
        "{} failures out of {} tests.\n",
        summary.failure_count(),
        summary.tests_run
    ));
    text
}
