//! CLI entry point - the composition root.
//!
//! Wires the host probe to stdout. Logging goes to stderr so stdout only
//! ever carries the record.

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use platconst_cli::{Cli, CliError, handlers};
use platconst_core::HostProbe;

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if !cli.ignored.is_empty() {
        debug!(args = ?cli.ignored, "ignoring command-line arguments");
    }

    handlers::report::execute(&HostProbe::new(), io::stdout().lock())
        .context("failed to write platform constants to stdout")
}

fn main() -> ExitCode {
    // Initialize logging
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .compact()
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err
                .downcast_ref::<CliError>()
                .map_or(1, CliError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
