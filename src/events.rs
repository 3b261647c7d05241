//! Event logging subsystem for cadence.
//!
//! This module implements append-only event logging so a library keeps a
//! record of every planning run. Events are stored in NDJSON format (one JSON
//! object per line) in `<library>/.cadence/events/events.ndjson`.
//!
//! # Event Format
//!
//! Each event is a JSON object with the following fields:
//! - `ts`: RFC3339 timestamp
//! - `action`: The action performed (init, schedule, suggest, apply, optimize)
//! - `actor`: The owner string (e.g., `user@HOST`)
//! - `week`: Optional first day of the planned week
//! - `details`: Freeform object with action-specific details
//!
//! # Usage
//!
//! Events are recorded after the command's files have been written. A failure
//! to record an event is reported as a warning and never fails the command.
//!
//! ```no_run
//! use cadence::events::{Event, EventAction, log_event};
//! use cadence::context::LibraryContext;
//! use serde_json::json;
//!
//! let ctx = LibraryContext::resolve("social-media-content")?;
//! let event = Event::new(EventAction::Init)
//!     .with_details(json!({"config_written": true}));
//! log_event(&ctx, &event);
//! # Ok::<(), cadence::error::CadenceError>(())
//! ```

use crate::context::LibraryContext;
use crate::error::{CadenceError, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// Library initialization
    Init,
    /// Weekly schedule generated
    Schedule,
    /// Topic suggestions computed
    Suggest,
    /// Suggested topics written back into the schedule
    Apply,
    /// Schedule times optimised
    Optimize,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventAction::Init => write!(f, "init"),
            EventAction::Schedule => write!(f, "schedule"),
            EventAction::Suggest => write!(f, "suggest"),
            EventAction::Apply => write!(f, "apply"),
            EventAction::Optimize => write!(f, "optimize"),
        }
    }
}

/// An event record for the audit log.
///
/// Events are serialized as single-line JSON objects and appended to
/// the events.ndjson file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// RFC3339 timestamp when the event occurred.
    pub ts: DateTime<Utc>,

    /// The action that was performed.
    pub action: EventAction,

    /// The actor who performed the action (e.g., `user@HOST`).
    pub actor: String,

    /// First day of the week the action concerns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week: Option<NaiveDate>,

    /// Freeform details object with action-specific information.
    pub details: Value,
}

impl Event {
    /// Create a new event with the given action.
    ///
    /// The timestamp is set to the current time, and the actor is
    /// determined from the environment (USER@HOSTNAME).
    pub fn new(action: EventAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: get_actor_string(),
            week: None,
            details: Value::Object(serde_json::Map::new()),
        }
    }

    /// Set the week for this event.
    pub fn with_week(mut self, week_start: NaiveDate) -> Self {
        self.week = Some(week_start);
        self
    }

    /// Set the details object for this event.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    ///
    /// This is used for NDJSON format where each line is a complete JSON object.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            CadenceError::LibraryError(format!("failed to serialize event to JSON: {}", e))
        })
    }
}

/// Get the actor string for event metadata.
fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append an event to the events log.
///
/// This function appends the event as a single JSON line to the events.ndjson file.
/// The file and its directory are created if they don't exist. Each append
/// results in one line with a trailing newline.
///
/// # Returns
///
/// * `Ok(())` - Event was successfully appended
/// * `Err(CadenceError::LibraryError)` - Serialization or write failed
pub fn append_event(ctx: &LibraryContext, event: &Event) -> Result<()> {
    let events_file = ctx.events_file();
    let json_line = event.to_ndjson_line()?;

    let events_dir = ctx.events_dir();
    if !events_dir.exists() {
        fs::create_dir_all(&events_dir).map_err(|e| {
            CadenceError::LibraryError(format!(
                "failed to create events directory '{}': {}",
                events_dir.display(),
                e
            ))
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&events_file)
        .map_err(|e| {
            CadenceError::LibraryError(format!(
                "failed to open events file '{}': {}",
                events_file.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        CadenceError::LibraryError(format!(
            "failed to write event to '{}': {}",
            events_file.display(),
            e
        ))
    })?;

    Ok(())
}

/// Append an event, downgrading any failure to a warning.
pub fn log_event(ctx: &LibraryContext, event: &Event) {
    if let Err(e) = append_event(ctx, event) {
        tracing::warn!(action = %event.action, error = %e, "failed to record event");
    }
}

/// Read all events from the log, skipping lines that fail to parse.
#[cfg(test)]
pub fn read_events(ctx: &LibraryContext) -> Result<Vec<Event>> {
    let events_file = ctx.events_file();
    if !events_file.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(&events_file).map_err(|e| {
        CadenceError::LibraryError(format!(
            "failed to read events file '{}': {}",
            events_file.display(),
            e
        ))
    })?;

    Ok(content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| match serde_json::from_str(line) {
            Ok(event) => Some(event),
            Err(e) => {
                tracing::debug!(error = %e, "skipping malformed event line");
                None
            }
        })
        .collect())
}
