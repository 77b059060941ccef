//! The sequential sweep driver.

use std::time::Duration;

use tracing::debug;

use crate::domains::SweepDomains;
use crate::errors::SweepResult;
use crate::invocation::{TestInvocation, TestResult};
use crate::locator::ProgramLocator;
use crate::report::Reporter;
use crate::runner::ProgramRunner;
use crate::summary::SessionSummary;

/// Drives one full sweep: every program, every (X, Y, Z, P) tuple exactly
/// once, one invocation at a time.
///
/// The session borrows its collaborators so callers pick the production
/// pieces or mocks without the driver caring which.
pub struct SweepSession<'a> {
    locator: &'a dyn ProgramLocator,
    runner: &'a dyn ProgramRunner,
}

impl<'a> SweepSession<'a> {
    pub fn new(locator: &'a dyn ProgramLocator, runner: &'a dyn ProgramRunner) -> Self {
        Self { locator, runner }
    }

    /// Run the sweep over `programs` in order, reporting as it goes.
    ///
    /// A missing program is reported, charged to the summary, and skipped
    /// without constructing a single invocation. For a present program
    /// every tuple is attempted exactly once, X outermost and the
    /// parallelism degree innermost, with no retries.
    pub fn run(
        &self,
        programs: &[String],
        domains: &SweepDomains,
        timeout: Duration,
        reporter: &Reporter,
    ) -> SweepResult<SessionSummary> {
        let mut summary = SessionSummary::new();

        for name in programs {
            let program = self.locator.locate(name);
            let Some(path) = program.path else {
                reporter.program_missing(&program.name)?;
                summary.record_missing(&program.name);
                continue;
            };

            reporter.program_running(&program.name)?;
            debug!(
                program = %path.display(),
                combinations = domains.combinations(),
                "sweeping"
            );

            for &x in &domains.x {
                for &y in &domains.y {
                    for &z in &domains.z {
                        for &procs in &domains.procs {
                            let invocation =
                                TestInvocation::for_sizes(&path, procs, x, y, z, timeout);
                            let outcome = self.runner.run(&invocation);
                            let result = TestResult { invocation, outcome };
                            if !result.outcome.success() {
                                reporter.invocation_failed(&result)?;
                            }
                            summary.record(&result);
                        }
                    }
                }
            }
        }

        Ok(summary)
    }
}
