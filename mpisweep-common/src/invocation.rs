//! Invocation records for single test runs.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// One planned execution of a program under test.
///
/// Built fresh for every (program, X, Y, Z, P) tuple and never reused. The
/// parallelism degree travels outside the argument list because it
/// configures the launcher, not the program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestInvocation {
    /// Resolved path of the program to launch.
    pub program: PathBuf,
    /// Worker count handed to the MPI launcher (`-np`).
    pub parallelism: u32,
    /// Program arguments, in order.
    pub arguments: Vec<String>,
    /// Per-invocation timeout; zero means unbounded.
    pub timeout: Duration,
}

impl TestInvocation {
    /// Build the invocation for one (X, Y, Z) size tuple at parallelism
    /// `procs`.
    ///
    /// Sizes are single-token flags (`-x8`) and `-q` keeps the programs
    /// quiet, the argument spelling the accumulate family expects.
    pub fn for_sizes(
        program: impl Into<PathBuf>,
        procs: u32,
        x: u32,
        y: u32,
        z: u32,
        timeout: Duration,
    ) -> Self {
        Self {
            program: program.into(),
            parallelism: procs,
            arguments: vec![
                format!("-x{x}"),
                format!("-y{y}"),
                format!("-z{z}"),
                "-q".to_string(),
            ],
            timeout,
        }
    }
}

/// What came back from launching one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOutcome {
    /// Exit code of the launched process. Timeouts surface as 124, signal
    /// deaths as -1, launch failures as 127.
    pub exit_code: i32,
    /// The literal command line the launcher executed, one token per
    /// element.
    pub command_line: Vec<String>,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
    /// Wall-clock duration of the run.
    pub duration: Duration,
}

impl RunOutcome {
    /// Whether the run passed (exit code 0).
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// The command line as one shell-pasteable string.
    pub fn rendered_command(&self) -> String {
        self.command_line.join(" ")
    }
}

/// A finished invocation paired with its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub invocation: TestInvocation,
    pub outcome: RunOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_spelling() {
        let invocation = TestInvocation::for_sizes("./accumulate", 3, 1, 24, 5, Duration::ZERO);
        assert_eq!(invocation.arguments, vec!["-x1", "-y24", "-z5", "-q"]);
    }

    #[test]
    fn test_parallelism_is_not_an_argument() {
        let invocation = TestInvocation::for_sizes("./accumulate", 4, 1, 2, 3, Duration::ZERO);
        assert_eq!(invocation.parallelism, 4);
        assert!(!invocation.arguments.iter().any(|arg| arg.contains('4')));
    }

    #[test]
    fn test_zero_timeout_means_unbounded() {
        let invocation = TestInvocation::for_sizes("./accumulate", 1, 1, 1, 1, Duration::ZERO);
        assert!(invocation.timeout.is_zero());
    }

    #[test]
    fn test_outcome_success() {
        let outcome = RunOutcome {
            exit_code: 0,
            command_line: vec!["mpiexec".into(), "-np".into(), "1".into()],
            stdout: String::new(),
            stderr: String::new(),
            duration: Duration::from_millis(12),
        };
        assert!(outcome.success());
        assert_eq!(outcome.rendered_command(), "mpiexec -np 1");
    }

    #[test]
    fn test_outcome_failure() {
        let outcome = RunOutcome {
            exit_code: 17,
            command_line: vec!["mpiexec".into()],
            stdout: String::new(),
            stderr: String::new(),
            duration: Duration::ZERO,
        };
        assert!(!outcome.success());
    }
}
