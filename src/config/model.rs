//! Config struct definition and default implementation.

use super::types::*;
use crate::coverage::ServiceArea;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration for a content library.
///
/// This struct represents the contents of `<library>/cadence.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Observance settings
    // =========================================================================
    /// Days after the planned week during which upcoming observances are
    /// still considered relevant.
    #[serde(default = "default_lead_time_days")]
    pub lead_time_days: u32,

    /// Observance catalog file, relative to the library root unless absolute.
    #[serde(default = "default_observances_file")]
    pub observances_file: String,

    /// How to choose among eligible observance ideas.
    #[serde(default)]
    pub observance_pick: ObservancePick,

    // =========================================================================
    // Library settings
    // =========================================================================
    /// File-name glob for content metadata files.
    #[serde(default = "default_meta_glob")]
    pub meta_glob: String,

    /// Replacement service-area catalog (order is the tie-break order).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_areas: Option<Vec<ServiceArea>>,

    // =========================================================================
    // Schedule settings
    // =========================================================================
    /// Platforms and post counts per weekday (keys are weekday names).
    #[serde(default = "default_posting_pattern")]
    pub posting_pattern: BTreeMap<String, Vec<PlatformPosts>>,

    /// Preferred posting times per platform (keys are platform names).
    #[serde(default = "default_optimal_posting_times")]
    pub optimal_posting_times: BTreeMap<String, PostingTimes>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lead_time_days: default_lead_time_days(),
            observances_file: default_observances_file(),
            observance_pick: ObservancePick::default(),
            meta_glob: default_meta_glob(),
            service_areas: None,
            posting_pattern: default_posting_pattern(),
            optimal_posting_times: default_optimal_posting_times(),
        }
    }
}
