//! Config loading, validation, and lookup operations.

use super::model::Config;
use super::types::{PlatformPosts, PostingTimes};
use crate::coverage::{ServiceArea, default_service_areas};
use crate::error::{CadenceError, Result};
use chrono::Weekday;
use globset::Glob;
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

/// Upper bound for `lead_time_days`.
pub const MAX_LEAD_TIME_DAYS: u32 = 366;

static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").expect("valid time regex"));

fn invalid(msg: String) -> CadenceError {
    CadenceError::ConfigError(format!("config validation failed: {}", msg))
}

impl Config {
    /// Load config from a YAML file.
    ///
    /// A missing file yields the default config. Unknown fields in the YAML
    /// are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(CadenceError::ConfigError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            CadenceError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserialises as null rather than an empty mapping.
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                CadenceError::ConfigError(format!("failed to parse config YAML: {}", e))
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            CadenceError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `lead_time_days` must not exceed a year
    /// - `meta_glob` must be a valid glob
    /// - `posting_pattern` keys must be weekday names and counts positive
    /// - every posting time must be `HH:MM`
    /// - a `service_areas` override must be non-empty with unique names
    pub fn validate(&self) -> Result<()> {
        if self.lead_time_days > MAX_LEAD_TIME_DAYS {
            return Err(invalid(format!(
                "lead_time_days must be at most {} (found {})",
                MAX_LEAD_TIME_DAYS, self.lead_time_days
            )));
        }

        if let Err(e) = Glob::new(&self.meta_glob) {
            return Err(invalid(format!(
                "invalid glob in meta_glob '{}': {}",
                self.meta_glob, e
            )));
        }

        for (day, posts) in &self.posting_pattern {
            if day.parse::<Weekday>().is_err() {
                return Err(invalid(format!(
                    "posting_pattern key '{}' is not a weekday name",
                    day
                )));
            }
            for post in posts {
                if post.platform.trim().is_empty() {
                    return Err(invalid(format!(
                        "posting_pattern for '{}' has an entry without a platform",
                        day
                    )));
                }
                if post.count == 0 {
                    return Err(invalid(format!(
                        "posting_pattern count for {} on '{}' must be greater than 0",
                        post.platform, day
                    )));
                }
            }
        }

        for (platform, times) in &self.optimal_posting_times {
            if let Some(bad) = times.all().find(|t| !TIME_RE.is_match(t)) {
                return Err(invalid(format!(
                    "optimal_posting_times for '{}' has invalid time '{}' (expected HH:MM)",
                    platform, bad
                )));
            }
        }

        if let Some(areas) = &self.service_areas {
            if areas.is_empty() {
                return Err(invalid(
                    "service_areas must list at least one area when set".to_string(),
                ));
            }
            let mut seen = HashSet::new();
            for area in areas {
                if !seen.insert(area.name.as_str()) {
                    return Err(invalid(format!(
                        "duplicate service area name '{}'",
                        area.name
                    )));
                }
            }
        }

        Ok(())
    }

    /// Platforms and counts for a weekday, in configured order.
    pub fn posts_for(&self, day: Weekday) -> &[PlatformPosts] {
        self.posting_pattern
            .iter()
            .find(|(key, _)| key.parse::<Weekday>().ok() == Some(day))
            .map(|(_, posts)| posts.as_slice())
            .unwrap_or(&[])
    }

    /// Posting times for a platform (case-insensitive), if configured.
    pub fn posting_times(&self, platform: &str) -> Option<&PostingTimes> {
        self.optimal_posting_times
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(platform))
            .map(|(_, times)| times)
    }

    /// The service-area catalog in effect.
    pub fn service_area_catalog(&self) -> Vec<ServiceArea> {
        self.service_areas
            .clone()
            .unwrap_or_else(default_service_areas)
    }
}
