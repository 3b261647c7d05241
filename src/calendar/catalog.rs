//! Observance catalog loading.
//!
//! The catalog file maps month names to their observances:
//!
//! ```text
//! {
//!   "observances": {
//!     "October": {
//!       "month_observances": [
//!         {"name": "ADHD Awareness Month", "type": "month", "dates": "October 1-31", ...}
//!       ],
//!       "specific_dates": [
//!         {"name": "World Mental Health Day", "type": "day", "date": "October 10", ...}
//!       ]
//!     }
//!   }
//! }
//! ```
//!
//! The file is read through the YAML parser so that both JSON and YAML are
//! accepted and month order is kept as written. Entries that do not fit the
//! expected shape are skipped.

use super::ObservanceDef;
use crate::error::{CadenceError, Result};
use serde_yaml::Value;
use std::path::Path;

/// Observances of one month block, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthBlock {
    pub month: String,
    pub month_observances: Vec<ObservanceDef>,
    pub specific_dates: Vec<ObservanceDef>,
}

/// All observance definitions known to the planner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservanceCatalog {
    months: Vec<MonthBlock>,
}

impl ObservanceCatalog {
    /// Build a catalog from month blocks.
    #[cfg(test)]
    pub fn from_months(months: Vec<MonthBlock>) -> Self {
        Self { months }
    }

    /// Load the catalog from a JSON or YAML file.
    ///
    /// A missing file yields an empty catalog; a file that is not valid JSON
    /// or YAML is a `CatalogError`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!(
                path = %path.display(),
                "observance catalog not found, planning without observances"
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            CadenceError::CatalogError(format!(
                "failed to read observance catalog '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::parse(&content)
    }

    /// Parse catalog content.
    pub fn parse(content: &str) -> Result<Self> {
        let root: Value = match serde_yaml::from_str(content) {
            Ok(value) => value,
            Err(yaml_err) => {
                // Some JSON (e.g. tab-indented) is not valid YAML. Month order
                // is lost on this path.
                let json: serde_json::Value = serde_json::from_str(content).map_err(|_| {
                    CadenceError::CatalogError(format!(
                        "failed to parse observance catalog: {}",
                        yaml_err
                    ))
                })?;
                serde_yaml::to_value(json).map_err(|e| {
                    CadenceError::CatalogError(format!(
                        "failed to convert observance catalog: {}",
                        e
                    ))
                })?
            }
        };

        let Some(months) = root.get("observances").and_then(Value::as_mapping) else {
            tracing::debug!("observance catalog has no 'observances' mapping");
            return Ok(Self::default());
        };

        let months = months
            .iter()
            .filter_map(|(month, body)| {
                let Some(month) = month.as_str() else {
                    tracing::debug!(?month, "skipping non-string month key");
                    return None;
                };
                Some(MonthBlock {
                    month: month.to_string(),
                    month_observances: read_entries(month, body.get("month_observances")),
                    specific_dates: read_entries(month, body.get("specific_dates")),
                })
            })
            .collect();

        Ok(Self { months })
    }

    /// All definitions in catalog order: months as written, and within a
    /// month the month-long observances before the specific dates.
    pub fn definitions(&self) -> impl Iterator<Item = &ObservanceDef> {
        self.months
            .iter()
            .flat_map(|m| m.month_observances.iter().chain(m.specific_dates.iter()))
    }

    #[cfg(test)]
    pub fn months(&self) -> &[MonthBlock] {
        &self.months
    }

    /// Number of definitions in the catalog.
    pub fn len(&self) -> usize {
        self.definitions().count()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Deserialize a list of entries, skipping the ones that do not fit.
fn read_entries(month: &str, list: Option<&Value>) -> Vec<ObservanceDef> {
    let Some(items) = list.and_then(Value::as_sequence) else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let parsed = serde_yaml::from_value::<ObservanceDef>(item.clone());
            match parsed {
                Ok(def) => Some(def),
                Err(e) => {
                    tracing::debug!(month, error = %e, "skipping malformed observance entry");
                    None
                }
            }
        })
        .collect()
}
