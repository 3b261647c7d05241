//! Weekly topic assignment.
//!
//! Given the week's empty posting slots, the library's existing topics, the
//! coverage analysis and the relevant observances, the planner gives every
//! slot a fresh topic: timely observance ideas first (up to half the week),
//! then the least-covered service areas.

mod assigner;
mod picker;

pub use assigner::suggest_topics;
pub use picker::{FirstEligible, IdeaPicker, RandomPicker};

use crate::coverage::Priority;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Focus area reported for observances that list none.
pub const DEFAULT_FOCUS_AREA: &str = "mental health";

/// One empty posting opportunity in the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingSlot {
    pub date: NaiveDate,
    pub day_name: String,
    pub platform: String,
    pub time: String,

    /// Position of the post within its day in the stored schedule.
    #[serde(default)]
    pub post_index: usize,
}

/// Where an assigned topic came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Observance,
    ServiceArea,
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceType::Observance => write!(f, "observance"),
            SourceType::ServiceArea => write!(f, "service_area"),
        }
    }
}

/// Priority label attached to an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotPriority {
    Observance,
    High,
    Medium,
    Low,
}

impl From<Priority> for SlotPriority {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::High => SlotPriority::High,
            Priority::Medium => SlotPriority::Medium,
            Priority::Low => SlotPriority::Low,
        }
    }
}

impl fmt::Display for SlotPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotPriority::Observance => write!(f, "observance"),
            SlotPriority::High => write!(f, "high"),
            SlotPriority::Medium => write!(f, "medium"),
            SlotPriority::Low => write!(f, "low"),
        }
    }
}

/// A topic chosen for one posting slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicAssignment {
    pub date: NaiveDate,
    pub day_name: String,
    pub platform: String,
    pub time: String,
    pub post_index: usize,
    pub topic: String,

    /// Service area name, or observance name for observance topics.
    pub service_area_or_observance: String,

    pub priority: SlotPriority,
    pub source_type: SourceType,

    /// First focus area of the observance (observance topics only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_area: Option<String>,
}

impl TopicAssignment {
    fn for_slot(
        slot: &PostingSlot,
        topic: String,
        source: String,
        priority: SlotPriority,
        source_type: SourceType,
    ) -> Self {
        Self {
            date: slot.date,
            day_name: slot.day_name.clone(),
            platform: slot.platform.clone(),
            time: slot.time.clone(),
            post_index: slot.post_index,
            topic,
            service_area_or_observance: source,
            priority,
            source_type,
            focus_area: None,
        }
    }
}
