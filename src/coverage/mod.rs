//! Topic coverage analysis over the service-area catalog.
//!
//! Counts how many existing library topics touch each service area and turns
//! the count into a priority: under-served areas are planned first.

mod catalog;

pub use catalog::default_service_areas;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Areas with fewer matching topics than this are `high` priority.
pub const HIGH_PRIORITY_BELOW: usize = 3;

/// Areas with fewer matching topics than this (and not `high`) are `medium`.
pub const MEDIUM_PRIORITY_BELOW: usize = 6;

/// A clinical or topical category used to balance content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceArea {
    /// Area name (e.g., "anxiety").
    pub name: String,

    /// Substrings that mark an existing topic as belonging to this area.
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Candidate topics, in preference order.
    #[serde(default)]
    pub topics: Vec<String>,
}

impl ServiceArea {
    /// Whether a (lowercase) topic mentions any of this area's keywords.
    pub fn matches(&self, topic: &str) -> bool {
        self.keywords
            .iter()
            .any(|kw| topic.contains(kw.to_lowercase().as_str()))
    }
}

/// Coverage priority of a service area.
///
/// `Low` is the default so that coverage records deserialised without a
/// priority are planned last rather than first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    #[default]
    Low,
}

impl Priority {
    /// Priority for a given coverage count.
    pub fn from_count(count: usize) -> Self {
        if count < HIGH_PRIORITY_BELOW {
            Priority::High
        } else if count < MEDIUM_PRIORITY_BELOW {
            Priority::Medium
        } else {
            Priority::Low
        }
    }

    /// Sort rank: high first.
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

/// Coverage of a single service area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CoverageRecord {
    /// Number of existing topics matching the area's keywords.
    #[serde(default)]
    pub count: usize,

    #[serde(default)]
    pub priority: Priority,
}

impl CoverageRecord {
    pub fn from_count(count: usize) -> Self {
        Self {
            count,
            priority: Priority::from_count(count),
        }
    }
}

/// Coverage of one named area inside a [`CoverageReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaCoverage {
    pub area: String,

    #[serde(flatten)]
    pub record: CoverageRecord,
}

/// Coverage per service area, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoverageReport {
    areas: Vec<AreaCoverage>,
}

impl CoverageReport {
    /// Build a report from already-computed entries.
    #[cfg(test)]
    pub fn from_entries(areas: Vec<AreaCoverage>) -> Self {
        Self { areas }
    }

    /// Coverage of a named area, if the report contains it.
    pub fn get(&self, area: &str) -> Option<&CoverageRecord> {
        self.areas
            .iter()
            .find(|a| a.area == area)
            .map(|a| &a.record)
    }

    /// Iterate over entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &AreaCoverage> {
        self.areas.iter()
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }
}

/// Analyze how well the existing topics cover each service area.
///
/// Topics are expected to be lowercase already. A topic that mentions
/// keywords from several areas counts toward each of them.
pub fn analyze_coverage(
    areas: &[ServiceArea],
    existing_topics: &BTreeSet<String>,
) -> CoverageReport {
    let areas = areas
        .iter()
        .map(|area| {
            let count = existing_topics.iter().filter(|t| area.matches(t)).count();
            AreaCoverage {
                area: area.name.clone(),
                record: CoverageRecord::from_count(count),
            }
        })
        .collect();

    CoverageReport { areas }
}
