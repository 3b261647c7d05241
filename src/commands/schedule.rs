//! Implementation of the `cadence schedule` command.
//!
//! Lays out the week's posts, prints them and stores the schedule in the
//! week's batch folder.

use crate::cli::ScheduleArgs;
use crate::context::{LibraryContext, week_folder_name};
use crate::error::{CadenceError, Result};
use crate::events::{Event, EventAction, log_event};
use crate::schedule::{WeeklySchedule, create_weekly_schedule, save_weekly_schedule};
use serde_json::json;
use std::collections::HashMap;

/// Execute the `cadence schedule` command.
pub fn cmd_schedule(ctx: &LibraryContext, args: ScheduleArgs) -> Result<()> {
    ctx.ensure_initialized()?;
    let config = ctx.load_config()?;

    let schedule_path = ctx.schedule_path(args.week);
    if schedule_path.exists() && !args.force {
        return Err(CadenceError::UserError(format!(
            "a schedule for ISO week {} already exists.\n\
             Existing: {}\n\n\
             Use --force to replace it (assigned topics will be lost).",
            week_folder_name(args.week),
            schedule_path.display()
        )));
    }

    let themes: HashMap<_, _> = args.themes.into_iter().collect();
    let schedule = create_weekly_schedule(args.week, &config, &themes);

    print_schedule(&schedule);

    let path = save_weekly_schedule(ctx, &schedule)?;
    log_event(
        ctx,
        &Event::new(EventAction::Schedule)
            .with_week(args.week)
            .with_details(json!({
                "posts": schedule.post_count(),
                "replaced": args.force,
            })),
    );

    println!("Saved schedule to {}", path.display());
    println!(
        "Next: `cadence suggest --week {}` to pick topics.",
        args.week
    );
    Ok(())
}

/// Print a schedule as a day-by-day table.
pub(crate) fn print_schedule(schedule: &WeeklySchedule) {
    println!("================================================================================");
    println!("CONTENT SCHEDULE - Week of {}", schedule.week_of);
    println!("================================================================================");

    for (date, day) in &schedule.days {
        println!();
        println!("{:10} {}", day.day_name, date);
        if let Some(theme) = &day.theme {
            println!("Theme: {}", theme);
        }
        println!("--------------------------------------------------------------------------------");

        if day.posts.is_empty() {
            println!("  (No posts scheduled)");
            continue;
        }
        for post in &day.posts {
            let marker = if post.content_file.is_some() { "x" } else { "o" };
            let detail = match (&post.content_file, &post.topic) {
                (Some(file), _) => file.clone(),
                (None, Some(topic)) => format!("Topic: {}", topic),
                (None, None) => "Content needed".to_string(),
            };
            println!(
                "  {} {} | {:10} | {}",
                marker, post.time, post.platform, detail
            );
        }
    }

    println!();
    println!("================================================================================");
    println!("Total posts scheduled: {}", schedule.post_count());
    println!("================================================================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::read_events;
    use crate::schedule::load_weekly_schedule;
    use crate::test_support::create_test_library;
    use chrono::{NaiveDate, Weekday};

    fn args(week: NaiveDate, force: bool) -> ScheduleArgs {
        ScheduleArgs {
            week,
            themes: vec![(Weekday::Mon, "ADHD".to_string())],
            force,
        }
    }

    fn week() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 13).unwrap()
    }

    #[test]
    fn test_schedule_writes_files_and_event() {
        let (_temp, ctx) = create_test_library();

        cmd_schedule(&ctx, args(week(), false)).unwrap();

        let schedule = load_weekly_schedule(&ctx, week()).unwrap();
        assert_eq!(schedule.post_count(), 9);
        assert_eq!(schedule.days[&week()].theme.as_deref(), Some("ADHD"));
        assert!(ctx.plan_path(week()).exists());

        let events = read_events(&ctx).unwrap();
        assert_eq!(events.last().unwrap().action, EventAction::Schedule);
        assert_eq!(events.last().unwrap().week, Some(week()));
        assert_eq!(events.last().unwrap().details["posts"], 9);
    }

    #[test]
    fn test_schedule_refuses_to_overwrite_without_force() {
        let (_temp, ctx) = create_test_library();
        cmd_schedule(&ctx, args(week(), false)).unwrap();

        let err = cmd_schedule(&ctx, args(week(), false)).unwrap_err();
        assert!(err.to_string().contains("--force"));

        cmd_schedule(&ctx, args(week(), true)).unwrap();
    }

    #[test]
    fn test_schedule_force_replaces_other_start_in_same_iso_week() {
        let (_temp, ctx) = create_test_library();
        cmd_schedule(&ctx, args(week(), false)).unwrap();

        let sunday = NaiveDate::from_ymd_opt(2025, 10, 19).unwrap();
        let err = cmd_schedule(&ctx, args(sunday, false)).unwrap_err();
        assert!(err.to_string().contains("ISO week 2025-week-42"));

        cmd_schedule(&ctx, args(sunday, true)).unwrap();
        assert_eq!(load_weekly_schedule(&ctx, sunday).unwrap().week_of, sunday);
        assert!(load_weekly_schedule(&ctx, week()).is_err());
    }

    #[test]
    fn test_schedule_requires_library() {
        let temp = tempfile::TempDir::new().unwrap();
        let ctx = LibraryContext::resolve_from(temp.path().join("missing"));

        let err = cmd_schedule(&ctx, args(week(), false)).unwrap_err();
        assert!(err.to_string().contains("cadence init"));
    }
}
