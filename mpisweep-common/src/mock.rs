//! Mock collaborators for tests.
//!
//! These stand in for the MPI launcher and the filesystem probe so sweep
//! behavior can be exercised without real executables. They live in a
//! regular module (not behind `cfg(test)`) so integration tests and CI
//! can use them too.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use crate::invocation::{RunOutcome, TestInvocation};
use crate::locator::{ProgramLocator, ProgramUnderTest};
use crate::runner::ProgramRunner;

/// Scripted runner: hands out exit codes per invocation and records what
/// it was asked to launch.
#[derive(Debug, Default)]
pub struct MockRunner {
    script: Mutex<Vec<i32>>,
    default_exit: i32,
    invocations: Mutex<Vec<TestInvocation>>,
}

impl MockRunner {
    /// Every invocation succeeds.
    pub fn success() -> Self {
        Self::default()
    }

    /// Every invocation fails with `exit_code`.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            default_exit: exit_code,
            ..Self::default()
        }
    }

    /// The first invocations get these exit codes in order; later ones
    /// succeed.
    pub fn script(codes: impl IntoIterator<Item = i32>) -> Self {
        Self {
            script: Mutex::new(codes.into_iter().collect()),
            ..Self::default()
        }
    }

    /// Invocations seen so far, in order.
    pub fn invocations(&self) -> Vec<TestInvocation> {
        self.invocations.lock().unwrap().clone()
    }

    fn next_exit(&self) -> i32 {
        let mut script = self.script.lock().unwrap();
        if script.is_empty() {
            self.default_exit
        } else {
            script.remove(0)
        }
    }
}

impl ProgramRunner for MockRunner {
    fn run(&self, invocation: &TestInvocation) -> RunOutcome {
        self.invocations.lock().unwrap().push(invocation.clone());

        let mut command_line = vec![
            "mpiexec".to_string(),
            "-np".to_string(),
            invocation.parallelism.to_string(),
            invocation.program.display().to_string(),
        ];
        command_line.extend(invocation.arguments.iter().cloned());

        RunOutcome {
            exit_code: self.next_exit(),
            command_line,
            stdout: String::new(),
            stderr: String::new(),
            duration: Duration::ZERO,
        }
    }
}

/// Locator with a fixed set of present programs.
#[derive(Debug, Clone, Default)]
pub struct MockLocator {
    present: HashSet<String>,
}

impl MockLocator {
    /// All of `names` probe as present, under a virtual `./` prefix.
    pub fn with_programs<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            present: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Nothing probes as present.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl ProgramLocator for MockLocator {
    fn locate(&self, name: &str) -> ProgramUnderTest {
        ProgramUnderTest {
            name: name.to_string(),
            path: self
                .present
                .contains(name)
                .then(|| PathBuf::from(".").join(name)),
        }
    }
}
