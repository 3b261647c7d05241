//! Weekly posting schedules.
//!
//! A schedule lays out seven consecutive days of posts (platform and time)
//! from the configured posting pattern. It is stored per ISO week as
//! `weekly_schedule.json` plus a readable `weekly_plan.md`, and is the source
//! of the empty posting slots the planner fills.

mod generate;
mod io;
mod slots;
mod timing;
#[cfg(test)]
mod tests;

pub use generate::create_weekly_schedule;
pub use io::{load_weekly_schedule, save_weekly_schedule};
pub use slots::{apply_assignments, get_week_slots};
pub use timing::{NEXT_SLOT_SEARCH_DAYS, next_available_slot, optimize_schedule};

use chrono::{Days, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Lifecycle of a scheduled post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    /// Slot exists, nothing decided yet.
    #[default]
    Planning,
    /// A topic has been chosen for the slot.
    TopicAssigned,
    /// Content has been written.
    Drafted,
    /// Queued on the platform.
    Scheduled,
    /// Live.
    Published,
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostStatus::Planning => write!(f, "planning"),
            PostStatus::TopicAssigned => write!(f, "topic_assigned"),
            PostStatus::Drafted => write!(f, "drafted"),
            PostStatus::Scheduled => write!(f, "scheduled"),
            PostStatus::Published => write!(f, "published"),
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// One post on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledPost {
    pub platform: String,

    /// Posting time (HH:MM).
    pub time: String,

    #[serde(default)]
    pub status: PostStatus,

    #[serde(default = "default_content_needed")]
    pub content_needed: bool,

    /// Library file holding the post's content, once written.
    #[serde(default)]
    pub content_file: Option<String>,

    /// Topic chosen for the post.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,

    /// Time before optimisation moved the post.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_time: Option<String>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub optimized: bool,
}

fn default_content_needed() -> bool {
    true
}

impl ScheduledPost {
    /// A new post awaiting a topic.
    pub fn planned(platform: &str, time: &str) -> Self {
        Self {
            platform: platform.to_string(),
            time: time.to_string(),
            status: PostStatus::Planning,
            content_needed: true,
            content_file: None,
            topic: None,
            original_time: None,
            optimized: false,
        }
    }

    /// Whether the post still needs a topic.
    pub fn is_open(&self) -> bool {
        self.content_file.is_none() && self.topic.is_none()
    }
}

/// All posts planned for one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub day_name: String,

    #[serde(default)]
    pub theme: Option<String>,

    #[serde(default)]
    pub posts: Vec<ScheduledPost>,
}

/// Seven days of posts starting at `week_of`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    pub week_of: NaiveDate,
    pub created_date: NaiveDateTime,

    /// Days keyed by date, in date order.
    pub days: BTreeMap<NaiveDate, DaySchedule>,
}

impl WeeklySchedule {
    /// Total number of posts across the week.
    pub fn post_count(&self) -> usize {
        self.days.values().map(|d| d.posts.len()).sum()
    }

    /// First and last planned dates.
    ///
    /// An empty schedule spans the seven days from `week_of`.
    pub fn date_span(&self) -> (NaiveDate, NaiveDate) {
        match (self.days.keys().next(), self.days.keys().next_back()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => (
                self.week_of,
                self.week_of
                    .checked_add_days(Days::new(6))
                    .unwrap_or(NaiveDate::MAX),
            ),
        }
    }
}
