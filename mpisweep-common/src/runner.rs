//! Process execution for single test invocations.
//!
//! The sweep never forks directly: everything below [`ProgramRunner`] is the
//! launcher's business. The production [`MpiRunner`] shells out to an MPI
//! front-end (`mpiexec -np <P> <program> <args>`), captures both output
//! pipes, and enforces a nonzero invocation timeout by polling and killing.

use std::io::Read;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::invocation::{RunOutcome, TestInvocation};

/// Exit code reported when the launcher cannot be spawned at all.
pub const EXIT_SPAWN_FAILED: i32 = 127;
/// Exit code reported when an invocation exceeds its timeout and is killed.
pub const EXIT_TIMED_OUT: i32 = 124;
/// Exit code reported when the process died without a status (signal).
pub const EXIT_NO_STATUS: i32 = -1;

/// Launches one test invocation and reports how it went.
///
/// The contract is total: implementations always produce a [`RunOutcome`],
/// folding launcher-level problems into synthetic exit codes, so the sweep
/// judges every invocation by status alone and never aborts mid-run.
pub trait ProgramRunner {
    fn run(&self, invocation: &TestInvocation) -> RunOutcome;
}

/// Production runner shelling out to an MPI launcher binary.
#[derive(Debug, Clone)]
pub struct MpiRunner {
    launcher: String,
}

impl MpiRunner {
    pub fn new(launcher: impl Into<String>) -> Self {
        Self {
            launcher: launcher.into(),
        }
    }

    pub fn launcher(&self) -> &str {
        &self.launcher
    }

    /// The full command line for `invocation`, one token per element.
    fn command_line(&self, invocation: &TestInvocation) -> Vec<String> {
        let mut line = vec![
            self.launcher.clone(),
            "-np".to_string(),
            invocation.parallelism.to_string(),
            invocation.program.display().to_string(),
        ];
        line.extend(invocation.arguments.iter().cloned());
        line
    }
}

impl Default for MpiRunner {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_LAUNCHER)
    }
}

impl ProgramRunner for MpiRunner {
    fn run(&self, invocation: &TestInvocation) -> RunOutcome {
        let command_line = self.command_line(invocation);
        debug!(command = %command_line.join(" "), "launching invocation");

        let start = Instant::now();
        let mut cmd = Command::new(&self.launcher);
        cmd.arg("-np")
            .arg(invocation.parallelism.to_string())
            .arg(&invocation.program)
            .args(&invocation.arguments)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = match cmd.spawn() {
            Ok(child) => child,
            Err(err) => {
                warn!(launcher = %self.launcher, error = %err, "failed to spawn launcher");
                return RunOutcome {
                    exit_code: EXIT_SPAWN_FAILED,
                    command_line,
                    stdout: String::new(),
                    stderr: format!("failed to spawn {}: {}", self.launcher, err),
                    duration: start.elapsed(),
                };
            }
        };

        let stdout_handle = child
            .stdout
            .take()
            .map(|mut stdout| thread::spawn(move || read_to_string(&mut stdout)));
        let stderr_handle = child
            .stderr
            .take()
            .map(|mut stderr| thread::spawn(move || read_to_string(&mut stderr)));

        let mut timed_out = false;
        let exit_status = if invocation.timeout.is_zero() {
            child.wait().ok()
        } else {
            loop {
                match child.try_wait() {
                    Ok(Some(status)) => break Some(status),
                    Ok(None) => {}
                    Err(err) => {
                        warn!(error = %err, "lost track of child process");
                        let _ = child.kill();
                        break child.wait().ok();
                    }
                }

                if start.elapsed() >= invocation.timeout {
                    timed_out = true;
                    let _ = child.kill();
                    break child.wait().ok();
                }

                thread::sleep(Duration::from_millis(10));
            }
        };

        let duration = start.elapsed();
        let stdout = join_output(stdout_handle);
        let mut stderr = join_output(stderr_handle);
        if timed_out {
            if !stderr.is_empty() {
                stderr.push('\n');
            }
            stderr.push_str(&format!(
                "Process timed out after {:?}.",
                invocation.timeout
            ));
        }

        let exit_code = exit_status
            .and_then(|status| status.code())
            .unwrap_or(if timed_out { EXIT_TIMED_OUT } else { EXIT_NO_STATUS });

        debug!(exit_code, elapsed_ms = duration.as_millis() as u64, "invocation finished");

        RunOutcome {
            exit_code,
            command_line,
            stdout,
            stderr,
            duration,
        }
    }
}

fn read_to_string<R: Read>(reader: &mut R) -> String {
    let mut buffer = Vec::new();
    if reader.read_to_end(&mut buffer).is_ok() {
        String::from_utf8_lossy(&buffer).to_string()
    } else {
        String::new()
    }
}

fn join_output(handle: Option<thread::JoinHandle<String>>) -> String {
    match handle {
        Some(handle) => handle.join().unwrap_or_default(),
        None => String::new(),
    }
}
