//! Mental-health observance calendar.
//!
//! Observances are recurring awareness days, weeks and months described by
//! human-written date strings ("March 10-16", "October 13"). This module
//! resolves those strings against a concrete year and selects the
//! observances that fall inside a content-planning window.
//!
//! Nothing here fails: entries that cannot be loaded or parsed are skipped
//! and reported through `tracing` at debug level.

pub mod catalog;
mod matcher;
mod parse;

pub use catalog::ObservanceCatalog;
pub use matcher::find_relevant_observances;
pub use parse::parse_date_range;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Days before an observance starts that a post about it should go out.
pub const LEAD_IN_DAYS: u64 = 3;

/// Length class of an observance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObservanceKind {
    Day,
    Week,
    Month,
}

impl ObservanceKind {
    /// Best day to publish content about an observance starting on `start`.
    ///
    /// Week-long observances are posted on their first day; days and months
    /// get a short lead-in.
    pub fn optimal_post_date(self, start: NaiveDate) -> NaiveDate {
        match self {
            ObservanceKind::Week => start,
            ObservanceKind::Day | ObservanceKind::Month => start
                .checked_sub_days(Days::new(LEAD_IN_DAYS))
                .unwrap_or(start),
        }
    }
}

impl fmt::Display for ObservanceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObservanceKind::Day => write!(f, "day"),
            ObservanceKind::Week => write!(f, "week"),
            ObservanceKind::Month => write!(f, "month"),
        }
    }
}

/// An observance as written in the catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservanceDef {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: ObservanceKind,

    /// Raw date-range string. Month observances use `dates`, specific
    /// dates use `date`; both are accepted.
    #[serde(alias = "date")]
    pub dates: String,

    #[serde(default)]
    pub focus_areas: Vec<String>,

    #[serde(default)]
    pub content_ideas: Vec<String>,
}

impl ObservanceDef {
    /// Resolve this observance's dates in `year`.
    ///
    /// Returns `None` when the date string is not in a recognised format.
    pub fn resolve(&self, year: i32) -> Option<ResolvedObservance> {
        let (start, end) = parse_date_range(&self.dates, year)?;

        Some(ResolvedObservance {
            name: self.name.clone(),
            kind: self.kind,
            start,
            end,
            optimal_post_date: self.kind.optimal_post_date(start),
            focus_areas: self.focus_areas.clone(),
            content_ideas: self.content_ideas.clone(),
        })
    }
}

/// An observance pinned to concrete dates in one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedObservance {
    pub name: String,
    pub kind: ObservanceKind,

    /// First day (inclusive).
    pub start: NaiveDate,

    /// Last day (inclusive). Never before `start`.
    pub end: NaiveDate,

    pub optimal_post_date: NaiveDate,
    pub focus_areas: Vec<String>,
    pub content_ideas: Vec<String>,
}

impl ResolvedObservance {
    /// Human-readable date span, e.g. "October 01 - October 31".
    pub fn date_label(&self) -> String {
        let start = self.start.format("%B %d").to_string();
        if self.start == self.end {
            start
        } else {
            format!("{} - {}", start, self.end.format("%B %d"))
        }
    }
}
