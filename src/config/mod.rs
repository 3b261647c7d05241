//! Configuration model for cadence.
//!
//! This module defines the Config struct that represents `<library>/cadence.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for optional fields, and validation of config values.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use operations::MAX_LEAD_TIME_DAYS;
pub use types::{FALLBACK_POST_TIME, ObservancePick};
