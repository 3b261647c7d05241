//! Cadence: observance-aware weekly topic planner for a social media content library.
//!
//! This is the main entry point for the `cadence` CLI. It parses arguments,
//! sets up diagnostics, dispatches to the appropriate command handler, and
//! handles errors with proper exit codes.

mod calendar;
mod cli;
mod commands;
mod config;
mod context;
mod coverage;
mod error;
mod events;
mod exit_codes;
mod fs;
mod library;
mod planner;
mod schedule;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    match commands::dispatch(&cli.library, cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the `-v` level.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "cadence=warn",
        1 => "cadence=info",
        _ => "cadence=debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
