//! Schedule generation from the posting pattern.

use super::{DaySchedule, ScheduledPost, WeeklySchedule};
use crate::config::{Config, FALLBACK_POST_TIME};
use chrono::{Datelike, Local, NaiveDate, Weekday};
use std::collections::{BTreeMap, HashMap};

/// Preferred times for a platform on a date.
///
/// Platforms missing from the configuration get the fallback time. A
/// configured platform may have no times for the date (LinkedIn on weekends
/// by default), in which case the list is empty.
pub fn optimal_times(config: &Config, platform: &str, date: NaiveDate) -> Vec<String> {
    match config.posting_times(platform) {
        Some(times) => times.for_date(date).to_vec(),
        None => vec![FALLBACK_POST_TIME.to_string()],
    }
}

/// Lay out the week starting at `week_start`.
///
/// Each day uses the posting pattern of its own weekday. The `i`-th post of a
/// platform on a day takes the platform's `i % n`-th preferred time; days
/// without preferred times fall back to 09:00.
pub fn create_weekly_schedule(
    week_start: NaiveDate,
    config: &Config,
    themes: &HashMap<Weekday, String>,
) -> WeeklySchedule {
    let mut days = BTreeMap::new();

    for date in week_start.iter_days().take(7) {
        let weekday = date.weekday();
        let mut posts = Vec::new();

        for entry in config.posts_for(weekday) {
            let times = optimal_times(config, &entry.platform, date);
            for i in 0..entry.count as usize {
                let time = if times.is_empty() {
                    FALLBACK_POST_TIME
                } else {
                    times[i % times.len()].as_str()
                };
                posts.push(ScheduledPost::planned(&entry.platform, time));
            }
        }

        days.insert(
            date,
            DaySchedule {
                date,
                day_name: date.format("%A").to_string(),
                theme: themes.get(&weekday).cloned(),
                posts,
            },
        );
    }

    tracing::debug!(week = %week_start, days = days.len(), "generated weekly schedule");

    WeeklySchedule {
        week_of: week_start,
        created_date: Local::now().naive_local(),
        days,
    }
}
