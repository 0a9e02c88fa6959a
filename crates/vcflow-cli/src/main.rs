//! # vcflow CLI entry point
//!
//! Parses arguments, installs tracing, and runs the pipeline once.
//! Exit status is 0 when all three steps succeed and 1 otherwise.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vcflow_cli::pipeline::{report_failure, run_pipeline};
use vcflow_cli::{build_client, fixtures_path, FIXTURES_ENV};

/// Onboard an issuer, issue a credential, and request its verification
/// against a verifiable-credentials service.
///
/// Service URLs and timeout come from `VCFLOW_ISSUER_API_URL`,
/// `VCFLOW_VERIFIER_API_URL`, and `VCFLOW_TIMEOUT_SECS`.
#[derive(Parser, Debug)]
#[command(name = "vcflow", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// JSON file overriding the built-in request fixtures
    /// (falls back to `VCFLOW_FIXTURES`).
    #[arg(long, value_name = "PATH")]
    fixtures: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG takes precedence over -v.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("info"),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let fixtures_file = fixtures_path(cli.fixtures, std::env::var(FIXTURES_ENV).ok());

    let client = match build_client(fixtures_file.as_deref()) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout();
    match run_pipeline(&client, &mut stdout).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(step = ?e.step(), "flow aborted");
            // Nothing left to report to if stderr itself is gone.
            let _ = report_failure(&e, &mut std::io::stderr());
            ExitCode::FAILURE
        }
    }
}
