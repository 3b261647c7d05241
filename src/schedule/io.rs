//! Reading and writing stored schedules.

use super::WeeklySchedule;
use crate::context::LibraryContext;
use crate::error::{CadenceError, Result};
use crate::fs::{atomic_write_file, atomic_write_json};
use chrono::NaiveDate;
use std::fmt::Write as _;
use std::path::PathBuf;

/// Save a schedule into its week folder.
///
/// Writes `weekly_schedule.json` and `weekly_plan.md` atomically and returns
/// the path of the JSON file.
pub fn save_weekly_schedule(ctx: &LibraryContext, schedule: &WeeklySchedule) -> Result<PathBuf> {
    let schedule_path = ctx.schedule_path(schedule.week_of);
    atomic_write_json(&schedule_path, schedule)?;
    atomic_write_file(ctx.plan_path(schedule.week_of), &render_plan(schedule))?;

    tracing::info!(path = %schedule_path.display(), "saved weekly schedule");
    Ok(schedule_path)
}

/// Load the stored schedule for the week starting at `week_start`.
///
/// A schedule stored for a different start date in the same ISO week is
/// rejected rather than silently reused.
pub fn load_weekly_schedule(ctx: &LibraryContext, week_start: NaiveDate) -> Result<WeeklySchedule> {
    let path = ctx.schedule_path(week_start);

    if !path.exists() {
        return Err(CadenceError::UserError(format!(
            "no schedule found for the week of {}.\n\
             Expected: {}\n\n\
             Run `cadence schedule --week {}` first.",
            week_start,
            path.display(),
            week_start
        )));
    }

    let content = std::fs::read_to_string(&path).map_err(|e| {
        CadenceError::LibraryError(format!(
            "failed to read schedule '{}': {}",
            path.display(),
            e
        ))
    })?;

    let schedule: WeeklySchedule = serde_json::from_str(&content).map_err(|e| {
        CadenceError::LibraryError(format!(
            "failed to parse schedule '{}': {}",
            path.display(),
            e
        ))
    })?;

    // Week folders are keyed by ISO week, so another start date in the same
    // week finds this file too.
    if schedule.week_of != week_start {
        return Err(CadenceError::UserError(format!(
            "the schedule stored at {} is for the week of {}, not {}.\n\n\
             Use `--week {}`, or run `cadence schedule --week {} --force` to replace it.",
            path.display(),
            schedule.week_of,
            week_start,
            schedule.week_of,
            week_start
        )));
    }

    Ok(schedule)
}

/// Render the human-readable weekly plan (Markdown).
pub fn render_plan(schedule: &WeeklySchedule) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "# Content Schedule for Week of {}\n", schedule.week_of);
    let _ = writeln!(
        out,
        "**Created**: {}\n",
        schedule.created_date.format("%Y-%m-%d %H:%M")
    );
    out.push_str("---\n\n");

    for (date, day) in &schedule.days {
        let _ = writeln!(out, "## {} - {}\n", day.day_name, date);

        if let Some(theme) = &day.theme {
            let _ = writeln!(out, "**Theme**: {}\n", theme);
        }

        if day.posts.is_empty() {
            out.push_str("*No posts scheduled*\n\n");
        } else {
            out.push_str("**Scheduled Posts:**\n\n");
            for post in &day.posts {
                let _ = writeln!(out, "- {} - {}", post.time, post.platform);
                if let Some(topic) = &post.topic {
                    let _ = writeln!(out, "  - Topic: {}", topic);
                }
                match &post.content_file {
                    Some(file) => {
                        let _ = writeln!(out, "  - File: `{}`", file);
                    }
                    None => out.push_str("  - Status: Content needed\n"),
                }
            }
            out.push('\n');
        }

        out.push_str("---\n\n");
    }

    out
}
