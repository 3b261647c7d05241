//! Command implementations for cadence.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command works against one resolved
//! [`LibraryContext`]; handlers take the context explicitly so they can be
//! exercised against temporary libraries.

mod coverage;
mod init;
mod next_slot;
mod observances;
mod optimize;
mod schedule;
mod suggest;

use crate::calendar::ObservanceCatalog;
use crate::cli::Command;
use crate::config::Config;
use crate::context::LibraryContext;
use crate::error::Result;
use chrono::{Days, NaiveDate};
use std::path::{Path, PathBuf};

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. The library path is
/// resolved once and handed to each command's handler.
pub fn dispatch(library: &Path, command: Command) -> Result<()> {
    let ctx = LibraryContext::resolve(library)?;

    match command {
        Command::Init => init::cmd_init(&ctx),
        Command::Schedule(args) => schedule::cmd_schedule(&ctx, args),
        Command::Observances(args) => observances::cmd_observances(&ctx, args),
        Command::Coverage => coverage::cmd_coverage(&ctx),
        Command::Suggest(args) => suggest::cmd_suggest(&ctx, args),
        Command::NextSlot(args) => next_slot::cmd_next_slot(&ctx, args),
        Command::Optimize(args) => optimize::cmd_optimize(&ctx, args),
    }
}

/// Last day of the seven-day week starting at `week_start`.
pub(crate) fn week_end(week_start: NaiveDate) -> NaiveDate {
    week_start
        .checked_add_days(Days::new(6))
        .unwrap_or(NaiveDate::MAX)
}

/// Load the observance catalog, preferring a command-line override.
pub(crate) fn load_catalog(
    ctx: &LibraryContext,
    config: &Config,
    override_path: Option<&PathBuf>,
) -> Result<ObservanceCatalog> {
    let path = override_path
        .cloned()
        .unwrap_or_else(|| ctx.observances_path(config));
    ObservanceCatalog::load(path)
}
