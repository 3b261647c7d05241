//! Library context resolution for cadence.
//!
//! This module provides the "environment resolution" layer that turns the
//! `--library` argument into absolute paths for everything cadence reads and
//! writes: the configuration file, the observance catalog, the weekly batch
//! folders and the event log.
//!
//! All cadence commands must use this module to locate library state, so that
//! every artefact of a week lands in the same place regardless of where the
//! command is invoked from.

use crate::config::Config;
use crate::error::{CadenceError, Result};
use chrono::{Datelike, NaiveDate};
use std::env;
use std::path::{Path, PathBuf};

/// Default library directory, relative to the working directory.
pub const DEFAULT_LIBRARY_DIR: &str = "social-media-content";

/// Configuration file name within the library.
pub const CONFIG_FILE: &str = "cadence.yaml";

/// Directory holding cadence's own state within the library.
pub const STATE_DIR: &str = ".cadence";

/// Directory holding one sub-folder per planned week.
pub const BATCHES_DIR: &str = "weekly-batches";

/// Schedule file name within a week folder.
pub const SCHEDULE_FILE: &str = "weekly_schedule.json";

/// Human-readable plan file name within a week folder.
pub const PLAN_FILE: &str = "weekly_plan.md";

/// Topic suggestions file name within a week folder.
pub const SUGGESTIONS_FILE: &str = "topic_suggestions.json";

/// Resolved paths for one content library.
///
/// All paths are absolute.
#[derive(Debug, Clone)]
pub struct LibraryContext {
    /// Absolute path to the library root.
    pub root: PathBuf,

    /// Absolute path to cadence's state directory (`{root}/.cadence/`).
    pub state_dir: PathBuf,

    /// Absolute path to the weekly batches directory (`{root}/weekly-batches/`).
    pub batches_dir: PathBuf,
}

impl LibraryContext {
    /// Resolve the library context for a directory given on the command line.
    ///
    /// Relative paths are resolved against the current working directory.
    pub fn resolve<P: AsRef<Path>>(library: P) -> Result<Self> {
        let library = library.as_ref();
        if library.is_absolute() {
            return Ok(Self::resolve_from(library));
        }

        let cwd = env::current_dir().map_err(|e| {
            CadenceError::UserError(format!("failed to get current working directory: {}", e))
        })?;
        Ok(Self::resolve_from(cwd.join(library)))
    }

    /// Build the context for an already-absolute library root.
    ///
    /// This is useful for testing or when the root is known.
    pub fn resolve_from<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        let state_dir = root.join(STATE_DIR);
        let batches_dir = root.join(BATCHES_DIR);

        Self {
            root,
            state_dir,
            batches_dir,
        }
    }

    /// Check if the library directory exists.
    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }

    /// Ensure the library exists, returning an error if not.
    ///
    /// This should be called by commands that write into the library to
    /// provide a helpful error message guiding users to run `cadence init`.
    pub fn ensure_initialized(&self) -> Result<()> {
        if !self.exists() {
            return Err(CadenceError::UserError(format!(
                "content library not found.\n\
                 Expected library at: {}\n\n\
                 Run `cadence init` to create it, or pass --library.",
                self.root.display()
            )));
        }
        Ok(())
    }

    /// Load the library configuration (defaults when the file is missing).
    pub fn load_config(&self) -> Result<Config> {
        Config::load(self.config_path())
    }

    /// Get the path to the config file.
    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    /// Get the path to the events directory.
    pub fn events_dir(&self) -> PathBuf {
        self.state_dir.join("events")
    }

    /// Get the path to the main events log file.
    pub fn events_file(&self) -> PathBuf {
        self.events_dir().join("events.ndjson")
    }

    /// Get the path to the observance catalog named by the config.
    ///
    /// Absolute paths are used as-is; relative ones are resolved against the
    /// library root.
    pub fn observances_path(&self, config: &Config) -> PathBuf {
        let file = Path::new(&config.observances_file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.root.join(file)
        }
    }

    /// Get the folder for the week containing `week_start`.
    ///
    /// Named after the ISO week: `{iso-year}-week-{ww}`.
    pub fn week_dir(&self, week_start: NaiveDate) -> PathBuf {
        self.batches_dir.join(week_folder_name(week_start))
    }

    /// Get the path to a week's schedule file.
    pub fn schedule_path(&self, week_start: NaiveDate) -> PathBuf {
        self.week_dir(week_start).join(SCHEDULE_FILE)
    }

    /// Get the path to a week's human-readable plan.
    pub fn plan_path(&self, week_start: NaiveDate) -> PathBuf {
        self.week_dir(week_start).join(PLAN_FILE)
    }

    /// Get the path to a week's topic suggestions.
    pub fn suggestions_path(&self, week_start: NaiveDate) -> PathBuf {
        self.week_dir(week_start).join(SUGGESTIONS_FILE)
    }
}

/// Folder name for the ISO week containing `date` (e.g. `2025-week-42`).
pub fn week_folder_name(date: NaiveDate) -> String {
    let iso = date.iso_week();
    format!("{}-week-{:02}", iso.year(), iso.week())
}
