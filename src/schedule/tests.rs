//! Tests for weekly schedules.

use super::generate::optimal_times;
use super::io::render_plan;
use super::*;
use crate::config::Config;
use crate::config::types::{PlatformPosts, PostingTimes};
use crate::context::LibraryContext;
use crate::planner::{SlotPriority, SourceType, TopicAssignment};
use chrono::Weekday;
use std::collections::HashMap;
use tempfile::TempDir;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Week of Monday 2025-10-13.
fn week() -> NaiveDate {
    ymd(2025, 10, 13)
}

fn default_week() -> WeeklySchedule {
    create_weekly_schedule(week(), &Config::default(), &HashMap::new())
}

fn assignment_for(
    date: NaiveDate,
    post_index: usize,
    platform: &str,
    topic: &str,
) -> TopicAssignment {
    TopicAssignment {
        date,
        day_name: date.format("%A").to_string(),
        platform: platform.to_string(),
        time: "09:00".to_string(),
        post_index,
        topic: topic.to_string(),
        service_area_or_observance: "anxiety".to_string(),
        priority: SlotPriority::High,
        source_type: SourceType::ServiceArea,
        focus_area: None,
    }
}

#[test]
fn test_default_week_layout() {
    let schedule = default_week();

    assert_eq!(schedule.week_of, week());
    assert_eq!(schedule.days.len(), 7);
    assert_eq!(schedule.post_count(), 9);

    let monday = &schedule.days[&week()];
    assert_eq!(monday.day_name, "Monday");
    let posts: Vec<_> = monday
        .posts
        .iter()
        .map(|p| (p.platform.as_str(), p.time.as_str()))
        .collect();
    assert_eq!(posts, vec![("Instagram", "09:00"), ("LinkedIn", "08:00")]);

    let saturday = &schedule.days[&ymd(2025, 10, 18)];
    assert_eq!(saturday.posts[0].time, "10:00");

    let sunday = &schedule.days[&ymd(2025, 10, 19)];
    assert_eq!(sunday.day_name, "Sunday");
    assert!(sunday.posts.is_empty());

    for post in schedule.days.values().flat_map(|d| &d.posts) {
        assert_eq!(post.status, PostStatus::Planning);
        assert!(post.content_needed);
        assert!(post.is_open());
    }
}

#[test]
fn test_week_starting_midweek_uses_actual_weekdays() {
    // Wednesday start: the first day gets Wednesday's pattern.
    let schedule = create_weekly_schedule(ymd(2025, 10, 15), &Config::default(), &HashMap::new());

    let first = schedule.days.values().next().unwrap();
    assert_eq!(first.day_name, "Wednesday");
    assert_eq!(first.posts.len(), 1);
    assert_eq!(first.posts[0].platform, "Instagram");

    let last = schedule.days.values().last().unwrap();
    assert_eq!(last.date, ymd(2025, 10, 21));
    assert_eq!(last.day_name, "Tuesday");
    assert_eq!(schedule.date_span(), (ymd(2025, 10, 15), ymd(2025, 10, 21)));
}

#[test]
fn test_empty_schedule_spans_seven_days() {
    let mut schedule = default_week();
    schedule.days.clear();
    assert_eq!(schedule.date_span(), (week(), ymd(2025, 10, 19)));
}

#[test]
fn test_multiple_posts_cycle_through_times() {
    let mut config = Config::default();
    let posts = vec![PlatformPosts::new("Instagram", 4)];
    config.posting_pattern.insert("monday".to_string(), posts);

    let schedule = create_weekly_schedule(week(), &config, &HashMap::new());
    let times: Vec<_> = schedule.days[&week()]
        .posts
        .iter()
        .map(|p| p.time.as_str())
        .collect();
    assert_eq!(times, vec!["09:00", "12:00", "17:00", "09:00"]);
}

#[test]
fn test_unknown_platform_and_empty_times_fall_back() {
    let mut config = Config::default();
    let posts = vec![
        PlatformPosts::new("TikTok", 1),
        PlatformPosts::new("LinkedIn", 2),
    ];
    config.posting_pattern.insert("saturday".to_string(), posts);

    let schedule = create_weekly_schedule(week(), &config, &HashMap::new());
    let times: Vec<_> = schedule.days[&ymd(2025, 10, 18)]
        .posts
        .iter()
        .map(|p| (p.platform.as_str(), p.time.as_str()))
        .collect();
    assert_eq!(
        times,
        vec![
            ("TikTok", "09:00"),
            ("LinkedIn", "09:00"),
            ("LinkedIn", "09:00"),
        ]
    );
}

#[test]
fn test_platform_lookup_ignores_case() {
    let mut config = Config::default();
    let posts = vec![PlatformPosts::new("linkedIN", 1)];
    config.posting_pattern.insert("monday".to_string(), posts);

    let schedule = create_weekly_schedule(week(), &config, &HashMap::new());
    assert_eq!(schedule.days[&week()].posts[0].time, "08:00");
}

#[test]
fn test_themes_are_attached_by_weekday() {
    let themes = HashMap::from([(Weekday::Tue, "Anxiety".to_string())]);
    let schedule = create_weekly_schedule(week(), &Config::default(), &themes);

    let tuesday = &schedule.days[&ymd(2025, 10, 14)];
    assert_eq!(tuesday.theme.as_deref(), Some("Anxiety"));
    assert!(schedule.days[&week()].theme.is_none());
}

#[test]
fn test_optimal_times_lookup() {
    let config = Config::default();
    assert_eq!(
        optimal_times(&config, "Facebook", week()),
        vec!["09:00", "13:00", "15:00"]
    );
    let sunday = ymd(2025, 10, 19);
    assert!(optimal_times(&config, "LinkedIn", sunday).is_empty());
    assert_eq!(optimal_times(&config, "Mastodon", week()), vec!["09:00"]);
}

#[test]
fn test_week_slots_skip_filled_posts() {
    let mut schedule = default_week();
    let monday = schedule.days.get_mut(&week()).unwrap();
    monday.posts[0].content_file = Some("blog/anxiety.md".to_string());
    let tuesday = schedule.days.get_mut(&ymd(2025, 10, 14)).unwrap();
    tuesday.posts[1].topic = Some("Already Chosen".to_string());

    let slots = get_week_slots(&schedule);

    assert_eq!(slots.len(), 7);
    assert_eq!(slots[0].date, week());
    assert_eq!(slots[0].platform, "LinkedIn");
    assert_eq!(slots[0].post_index, 1);
    assert_eq!(slots[1].date, ymd(2025, 10, 14));
    assert_eq!(slots[1].post_index, 0);
    assert_eq!(slots[2].date, ymd(2025, 10, 15));
}

#[test]
fn test_apply_assignments_records_topics() {
    let mut schedule = default_week();
    let assignments = vec![
        assignment_for(week(), 1, "LinkedIn", "Understanding ADHD in Adults"),
        assignment_for(ymd(2025, 10, 15), 0, "instagram", "ADHD Myths"),
    ];

    let applied = apply_assignments(&mut schedule, &assignments);

    assert_eq!(applied, 2);
    let post = &schedule.days[&week()].posts[1];
    assert_eq!(post.topic.as_deref(), Some("Understanding ADHD in Adults"));
    assert_eq!(post.status, PostStatus::TopicAssigned);
    assert!(post.content_needed);
    assert!(schedule.days[&week()].posts[0].topic.is_none());

    // Assigned posts are no longer offered as slots.
    assert_eq!(get_week_slots(&schedule).len(), 7);
}

#[test]
fn test_apply_assignments_skips_stale_entries() {
    let mut schedule = default_week();
    schedule.days.get_mut(&week()).unwrap().posts[0].topic = Some("Taken".to_string());

    let assignments = vec![
        assignment_for(week(), 0, "Instagram", "Overwrite Attempt"),
        assignment_for(week(), 1, "Facebook", "Wrong Platform"),
        assignment_for(week(), 7, "Instagram", "No Such Post"),
        assignment_for(ymd(2030, 1, 1), 0, "Instagram", "No Such Day"),
    ];

    assert_eq!(apply_assignments(&mut schedule, &assignments), 0);
    let first = &schedule.days[&week()].posts[0];
    assert_eq!(first.topic.as_deref(), Some("Taken"));
}

#[test]
fn test_next_available_slot() {
    let config = Config::default();

    // Saturday: LinkedIn has no weekend times, so Monday is next.
    let slot = next_available_slot(&config, "LinkedIn", ymd(2025, 10, 18)).unwrap();
    assert_eq!(slot.date, ymd(2025, 10, 20));
    assert_eq!(slot.day_name, "Monday");
    assert_eq!(slot.time, "08:00");

    // The start date itself is eligible.
    let slot = next_available_slot(&config, "instagram", ymd(2025, 10, 18)).unwrap();
    assert_eq!(slot.date, ymd(2025, 10, 18));
    assert_eq!(slot.time, "10:00");

    let slot = next_available_slot(&config, "Unlisted", week()).unwrap();
    assert_eq!(slot.time, "09:00");
}

#[test]
fn test_next_available_slot_none_within_window() {
    let mut config = Config::default();
    config
        .optimal_posting_times
        .insert("pinterest".to_string(), PostingTimes::default());

    assert!(next_available_slot(&config, "Pinterest", week()).is_none());
}

#[test]
fn test_optimize_moves_off_schedule_posts() {
    let mut schedule = default_week();
    let monday = schedule.days.get_mut(&week()).unwrap();
    monday.posts[0].time = "06:30".to_string();
    monday.posts[1].time = "12:00".to_string(); // LinkedIn: already optimal

    let moved = optimize_schedule(&mut schedule, &Config::default());

    assert_eq!(moved, 1);
    let post = &schedule.days[&week()].posts[0];
    assert_eq!(post.time, "09:00");
    assert_eq!(post.original_time.as_deref(), Some("06:30"));
    assert!(post.optimized);
    assert!(!schedule.days[&week()].posts[1].optimized);

    // A second pass finds nothing to move.
    assert_eq!(optimize_schedule(&mut schedule, &Config::default()), 0);
}

#[test]
fn test_optimize_leaves_days_without_times_alone() {
    let mut schedule = default_week();
    let sunday = schedule.days.get_mut(&ymd(2025, 10, 19)).unwrap();
    sunday.posts.push(ScheduledPost::planned("LinkedIn", "07:00"));

    assert_eq!(optimize_schedule(&mut schedule, &Config::default()), 0);
    assert_eq!(schedule.days[&ymd(2025, 10, 19)].posts[0].time, "07:00");
}

#[test]
fn test_save_and_load_roundtrip() {
    let temp = TempDir::new().unwrap();
    let ctx = LibraryContext::resolve_from(temp.path());
    let schedule = default_week();

    let path = save_weekly_schedule(&ctx, &schedule).unwrap();

    assert_eq!(path, ctx.schedule_path(week()));
    assert!(path.ends_with("2025-week-42/weekly_schedule.json"));
    assert!(ctx.plan_path(week()).exists());

    let loaded = load_weekly_schedule(&ctx, week()).unwrap();
    assert_eq!(loaded, schedule);
}

#[test]
fn test_stored_json_shape() {
    let temp = TempDir::new().unwrap();
    let ctx = LibraryContext::resolve_from(temp.path());
    save_weekly_schedule(&ctx, &default_week()).unwrap();

    let content = std::fs::read_to_string(ctx.schedule_path(week())).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();

    assert_eq!(json["week_of"], "2025-10-13");
    let post = &json["days"]["2025-10-13"]["posts"][0];
    assert_eq!(post["status"], "planning");
    assert_eq!(post["content_needed"], true);
    assert!(post["content_file"].is_null());
    assert!(post.get("topic").is_none());
    assert!(post.get("optimized").is_none());
}

#[test]
fn test_load_missing_schedule_is_user_error() {
    let temp = TempDir::new().unwrap();
    let ctx = LibraryContext::resolve_from(temp.path());

    let err = load_weekly_schedule(&ctx, week()).unwrap_err();
    assert_eq!(err.exit_code(), crate::exit_codes::USER_ERROR);
    let message = err.to_string();
    assert!(message.contains("cadence schedule --week 2025-10-13"));
}

#[test]
fn test_load_corrupt_schedule_is_library_error() {
    let temp = TempDir::new().unwrap();
    let ctx = LibraryContext::resolve_from(temp.path());
    let path = ctx.schedule_path(week());
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "{ broken").unwrap();

    let err = load_weekly_schedule(&ctx, week()).unwrap_err();
    assert_eq!(err.exit_code(), crate::exit_codes::LIBRARY_FAILURE);
}

#[test]
fn test_load_rejects_other_start_in_same_iso_week() {
    let temp = TempDir::new().unwrap();
    let ctx = LibraryContext::resolve_from(temp.path());
    save_weekly_schedule(&ctx, &default_week()).unwrap();

    // 2025-10-19 is the Sunday of the same ISO week, so it shares the folder.
    let sunday = ymd(2025, 10, 19);
    assert_eq!(ctx.schedule_path(sunday), ctx.schedule_path(week()));

    let err = load_weekly_schedule(&ctx, sunday).unwrap_err();
    assert_eq!(err.exit_code(), crate::exit_codes::USER_ERROR);
    assert!(err.to_string().contains("is for the week of 2025-10-13"));
}

#[test]
fn test_render_plan() {
    let themes = HashMap::from([(Weekday::Mon, "ADHD".to_string())]);
    let mut schedule = create_weekly_schedule(week(), &Config::default(), &themes);
    let monday = schedule.days.get_mut(&week()).unwrap();
    monday.posts[0].topic = Some("ADHD Myths".to_string());
    monday.posts[1].content_file = Some("linkedin/adhd.md".to_string());

    let plan = render_plan(&schedule);

    assert!(
        plan.starts_with("# Content Schedule for Week of 2025-10-13\n")
    );
    assert!(plan.contains("## Monday - 2025-10-13\n\n**Theme**: ADHD\n"));
    assert!(
        plan.contains("- 09:00 - Instagram\n  - Topic: ADHD Myths\n  - Status: Content needed\n")
    );
    assert!(
        plan.contains("- 08:00 - LinkedIn\n  - File: `linkedin/adhd.md`\n")
    );
    assert!(
        plan.contains("## Sunday - 2025-10-19\n\n*No posts scheduled*\n")
    );
}
