//! Configuration types and defaults for cadence.
//!
//! This module defines the posting pattern and posting time types, plus the
//! default value functions used by the Config struct.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How the planner chooses among eligible observance ideas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ObservancePick {
    /// Uniform random choice (default).
    #[default]
    Random,
    /// First eligible idea in catalog order.
    First,
}

/// How many posts a platform gets on one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformPosts {
    /// Display name of the platform (e.g., "Instagram").
    pub platform: String,

    #[serde(default = "default_post_count")]
    pub count: u32,
}

impl PlatformPosts {
    pub fn new(platform: &str, count: u32) -> Self {
        Self {
            platform: platform.to_string(),
            count,
        }
    }
}

/// Preferred posting times (HH:MM) for one platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostingTimes {
    pub weekday: Vec<String>,
    pub weekend: Vec<String>,
}

impl PostingTimes {
    /// Times that apply to the given date (weekend on Saturday and Sunday).
    pub fn for_date(&self, date: NaiveDate) -> &[String] {
        if is_weekend(date.weekday()) {
            &self.weekend
        } else {
            &self.weekday
        }
    }

    /// Iterate over all configured times, weekday times first.
    pub fn all(&self) -> impl Iterator<Item = &String> {
        self.weekday.iter().chain(self.weekend.iter())
    }
}

pub fn is_weekend(day: Weekday) -> bool {
    matches!(day, Weekday::Sat | Weekday::Sun)
}

/// Time used when a platform has no preferred time for a day.
pub const FALLBACK_POST_TIME: &str = "09:00";

fn times(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Default posting pattern, keyed by lowercase weekday name.
pub fn default_posting_pattern() -> BTreeMap<String, Vec<PlatformPosts>> {
    let days: [(&str, &[&str]); 7] = [
        ("monday", &["Instagram", "LinkedIn"]),
        ("tuesday", &["Facebook", "Instagram"]),
        ("wednesday", &["Instagram"]),
        ("thursday", &["LinkedIn", "Facebook"]),
        ("friday", &["Instagram"]),
        ("saturday", &["Instagram"]),
        ("sunday", &[]),
    ];

    let mut pattern = BTreeMap::new();
    for (day, platforms) in days {
        let posts = platforms.iter().map(|p| PlatformPosts::new(p, 1));
        pattern.insert(day.to_string(), posts.collect());
    }
    pattern
}

/// Default optimal posting times, keyed by lowercase platform name.
pub fn default_optimal_posting_times() -> BTreeMap<String, PostingTimes> {
    let mut times_by_platform = BTreeMap::new();
    times_by_platform.insert(
        "instagram".to_string(),
        PostingTimes {
            weekday: times(&["09:00", "12:00", "17:00"]),
            weekend: times(&["10:00", "14:00"]),
        },
    );
    times_by_platform.insert(
        "facebook".to_string(),
        PostingTimes {
            weekday: times(&["09:00", "13:00", "15:00"]),
            weekend: times(&["11:00", "14:00"]),
        },
    );
    // LinkedIn audiences are not reached on weekends.
    times_by_platform.insert(
        "linkedin".to_string(),
        PostingTimes {
            weekday: times(&["08:00", "12:00", "17:00"]),
            weekend: vec![],
        },
    );
    times_by_platform
}

// Default value functions for serde
pub(crate) fn default_lead_time_days() -> u32 {
    14
}
pub(crate) fn default_observances_file() -> String {
    "mental_health_observances.json".to_string()
}
pub(crate) fn default_meta_glob() -> String {
    "*_meta.json".to_string()
}
pub(crate) fn default_post_count() -> u32 {
    1
}
