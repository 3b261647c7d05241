//! CLI argument parsing for cadence.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::config::MAX_LEAD_TIME_DAYS;
use crate::context::DEFAULT_LIBRARY_DIR;
use chrono::{NaiveDate, Weekday};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Cadence: observance-aware weekly topic planner for a content library.
///
/// Plans a week of social media posts:
/// - lays out posting slots from a weekly pattern and optimal times
/// - reads which topics the library already covers
/// - matches awareness days, weeks and months against the week
/// - assigns a fresh topic to every empty slot
#[derive(Parser, Debug)]
#[command(name = "cadence")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Content library directory.
    #[arg(long, global = true, default_value = DEFAULT_LIBRARY_DIR)]
    pub library: PathBuf,

    /// Increase diagnostic output (-v for info, -vv for debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for cadence.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a content library.
    ///
    /// Creates the platform folders, weekly-batches/, the state directory
    /// and a default cadence.yaml (if missing).
    Init,

    /// Generate the posting schedule for a week.
    ///
    /// Writes weekly_schedule.json and weekly_plan.md into the week's
    /// folder under weekly-batches/.
    Schedule(ScheduleArgs),

    /// List observances relevant to a date range.
    Observances(ObservancesArgs),

    /// Show how well existing content covers each service area.
    Coverage,

    /// Suggest topics for the empty slots of a scheduled week.
    ///
    /// Saves topic_suggestions.json next to the schedule. With --apply,
    /// the topics are also written into the schedule.
    Suggest(SuggestArgs),

    /// Find the next preferred posting time for a platform.
    NextSlot(NextSlotArgs),

    /// Move a week's posts onto their platforms' preferred times.
    Optimize(OptimizeArgs),
}

/// Arguments for the `schedule` command.
#[derive(Parser, Debug)]
pub struct ScheduleArgs {
    /// First day of the week (YYYY-MM-DD).
    #[arg(long, value_parser = parse_date)]
    pub week: NaiveDate,

    /// Theme for a day, as Day:Theme (repeatable).
    #[arg(long = "theme", value_parser = parse_theme)]
    pub themes: Vec<(Weekday, String)>,

    /// Replace an existing schedule for the week.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `observances` command.
#[derive(Parser, Debug)]
pub struct ObservancesArgs {
    /// Start of the window (YYYY-MM-DD).
    #[arg(long, value_parser = parse_date)]
    pub from: NaiveDate,

    /// End of the window (YYYY-MM-DD); defaults to six days after --from.
    #[arg(long, value_parser = parse_date)]
    pub to: Option<NaiveDate>,

    /// Days after the window to look ahead; defaults to the configured lead time.
    #[arg(
        long,
        value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_LEAD_TIME_DAYS))
    )]
    pub lead_days: Option<u32>,

    /// Observance catalog file, overriding the configured one.
    #[arg(long)]
    pub observances: Option<PathBuf>,
}

/// Arguments for the `suggest` command.
#[derive(Parser, Debug)]
pub struct SuggestArgs {
    /// First day of the scheduled week (YYYY-MM-DD).
    #[arg(long, value_parser = parse_date)]
    pub week: NaiveDate,

    /// Seed for reproducible observance idea choice.
    #[arg(long, conflicts_with = "first")]
    pub seed: Option<u64>,

    /// Always take the first eligible observance idea.
    #[arg(long)]
    pub first: bool,

    /// Write the suggested topics into the week's schedule.
    #[arg(long)]
    pub apply: bool,

    /// Observance catalog file, overriding the configured one.
    #[arg(long)]
    pub observances: Option<PathBuf>,
}

/// Arguments for the `next-slot` command.
#[derive(Parser, Debug)]
pub struct NextSlotArgs {
    /// Platform name (e.g., Instagram).
    #[arg(long)]
    pub platform: String,

    /// First date to consider (YYYY-MM-DD); defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub after: Option<NaiveDate>,
}

/// Arguments for the `optimize` command.
#[derive(Parser, Debug)]
pub struct OptimizeArgs {
    /// First day of the scheduled week (YYYY-MM-DD).
    #[arg(long, value_parser = parse_date)]
    pub week: NaiveDate,
}

/// Parse a `YYYY-MM-DD` date argument.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{}': expected YYYY-MM-DD", s))
}

/// Parse a `Day:Theme` argument.
pub fn parse_theme(s: &str) -> Result<(Weekday, String), String> {
    let (day, theme) = s
        .split_once(':')
        .ok_or_else(|| format!("invalid theme '{}': expected Day:Theme", s))?;

    let day = day
        .trim()
        .parse::<Weekday>()
        .map_err(|_| format!("invalid theme '{}': '{}' is not a weekday", s, day.trim()))?;

    let theme = theme.trim();
    if theme.is_empty() {
        return Err(format!("invalid theme '{}': theme is empty", s));
    }

    Ok((day, theme.to_string()))
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
