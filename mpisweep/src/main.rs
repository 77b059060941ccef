//! mpisweep - parameter-sweep driver for the MPI transpose/accumulate
//! test programs.
//!
//! Walks every (X, Y, Z, P) combination of the run's parameter domains for
//! each accumulate executable, judges runs by exit status alone, and exits
//! with the anomaly count derived from the summary.

#![forbid(unsafe_code)]

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use mpisweep_common::{
    DirLocator, LogConfig, MpiRunner, Reporter, RunMode, SweepConfig, SweepDomains, SweepSession,
    domain_rng, init_logging,
};
use tracing::debug;

#[derive(Parser)]
#[command(name = "mpisweep")]
#[command(version, about = "Parameter-sweep driver for the MPI transpose/accumulate test programs")]
struct Cli {
    /// Run the abbreviated sweep
    #[arg(short, long)]
    short: bool,

    /// Fix the domain RNG seed for a reproducible sweep
    #[arg(long)]
    seed: Option<u64>,

    /// Per-invocation timeout in seconds (0 = unbounded)
    #[arg(long, default_value = "0")]
    timeout: u64,

    /// Directory containing the test executables
    #[arg(long, default_value = ".")]
    bindir: String,

    /// MPI launcher used to start each run
    #[arg(long, env = "MPISWEEP_MPIEXEC", default_value = "mpiexec")]
    mpiexec: String,

    /// Print the final summary as JSON instead of the ledger block
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let mut log_config = LogConfig::from_env("info").with_stderr();
    if cli.verbose {
        log_config = log_config.with_level("debug");
    }
    init_logging(&log_config)?;

    let config = SweepConfig {
        mode: if cli.short { RunMode::Short } else { RunMode::Full },
        seed: cli.seed,
        timeout: Duration::from_secs(cli.timeout),
        bindir: cli.bindir.into(),
        launcher: cli.mpiexec,
        ..SweepConfig::default()
    };

    let mut rng = domain_rng(config.seed);
    let domains = SweepDomains::generate(config.mode, &mut rng);
    debug!(
        mode = %config.mode,
        combinations = domains.combinations(),
        "generated sweep domains"
    );

    let reporter = Reporter::new(&config.log_path);
    reporter.begin()?;

    let locator = DirLocator::new(&config.bindir);
    let runner = MpiRunner::new(&config.launcher);
    let session = SweepSession::new(&locator, &runner);
    let summary = session.run(&config.programs, &domains, config.timeout, &reporter)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        reporter.finish(&summary);
    }

    std::process::exit(summary.exit_status());
}
