//! Posting-time lookups and optimisation.

use super::WeeklySchedule;
use super::generate::optimal_times;
use crate::config::Config;
use chrono::NaiveDate;
use serde::Serialize;

/// How many days `next_available_slot` looks ahead.
pub const NEXT_SLOT_SEARCH_DAYS: usize = 14;

/// The next preferred posting opportunity for a platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextSlot {
    pub date: NaiveDate,
    pub day_name: String,
    pub time: String,
}

/// First day from `after` (inclusive) on which the platform has a preferred
/// time, searching [`NEXT_SLOT_SEARCH_DAYS`] days.
pub fn next_available_slot(config: &Config, platform: &str, after: NaiveDate) -> Option<NextSlot> {
    after
        .iter_days()
        .take(NEXT_SLOT_SEARCH_DAYS)
        .find_map(|date| {
            optimal_times(config, platform, date)
                .into_iter()
                .next()
                .map(|time| NextSlot {
                    date,
                    day_name: date.format("%A").to_string(),
                    time,
                })
        })
}

/// Move posts that sit outside their platform's preferred times.
///
/// A post whose time is not among the preferred times for its date moves to
/// the first preferred time; its previous time is kept in `original_time`
/// (the first one, if moved repeatedly). Posts on days without preferred
/// times are left alone. Returns the number of posts moved.
pub fn optimize_schedule(schedule: &mut WeeklySchedule, config: &Config) -> usize {
    let mut moved = 0;

    for (date, day) in schedule.days.iter_mut() {
        for post in day.posts.iter_mut() {
            let times = optimal_times(config, &post.platform, *date);
            let Some(first) = times.first() else {
                continue;
            };
            if times.contains(&post.time) {
                continue;
            }

            tracing::debug!(
                date = %date,
                platform = %post.platform,
                from = %post.time,
                to = %first,
                "moving post"
            );
            if post.original_time.is_none() {
                post.original_time = Some(post.time.clone());
            }
            post.time = first.clone();
            post.optimized = true;
            moved += 1;
        }
    }

    moved
}
