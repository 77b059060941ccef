//! Shared library for the mpisweep test driver.
//!
//! The binary wires these pieces together: generate [`SweepDomains`] for a
//! [`RunMode`], probe executables through a [`ProgramLocator`], launch each
//! invocation through a [`ProgramRunner`], aggregate a [`SessionSummary`],
//! and let the [`Reporter`] produce the run log and console output.

pub mod config;
pub mod domains;
pub mod errors;
pub mod invocation;
pub mod locator;
pub mod logging;
pub mod mock;
pub mod report;
pub mod runner;
pub mod summary;
pub mod sweep;

pub use config::{DEFAULT_LAUNCHER, LOG_FILE_NAME, PROGRAMS, SweepConfig, default_programs};
pub use domains::{RunMode, SweepDomains, domain_rng};
pub use errors::{SweepError, SweepResult};
pub use invocation::{RunOutcome, TestInvocation, TestResult};
pub use locator::{DirLocator, ProgramLocator, ProgramUnderTest};
pub use logging::{LogConfig, init_logging};
pub use report::{LogSink, Reporter, render_summary};
pub use runner::{MpiRunner, ProgramRunner};
pub use summary::{FailureRecord, SessionSummary};
pub use sweep::SweepSession;
