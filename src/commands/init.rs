//! Implementation of the `cadence init` command.
//!
//! # What `cadence init` does
//!
//! 1. Creates the library root and the per-platform content folders
//! 2. Creates `weekly-batches/` and the `.cadence/` state directory
//! 3. Creates a `cadence.yaml` with the default configuration (if missing)
//! 4. Records an `init` event
//!
//! Running it again is harmless: existing folders and configuration are kept.

use crate::config::Config;
use crate::context::{BATCHES_DIR, CONFIG_FILE, LibraryContext};
use crate::error::{CadenceError, Result};
use crate::events::{Event, EventAction, log_event};
use crate::fs::atomic_write_file;
use serde_json::json;
use std::fs;
use std::path::Path;

/// Content folders created inside a new library.
const LIBRARY_FOLDERS: &[&str] = &[
    "blogs/drafts",
    "blogs/scheduled",
    "blogs/published",
    "instagram/drafts",
    "instagram/scheduled",
    "instagram/published",
    "facebook/drafts",
    "facebook/scheduled",
    "facebook/published",
    "linkedin/drafts",
    "linkedin/scheduled",
    "linkedin/published",
    "campaigns",
    "templates",
    BATCHES_DIR,
];

const CONFIG_HEADER: &str = "\
# cadence configuration
#
# Posting pattern keys are weekday names; optimal posting times are HH:MM.
# Remove a key to fall back to its default.
";

/// Execute the `cadence init` command.
pub fn cmd_init(ctx: &LibraryContext) -> Result<()> {
    let mut created = Vec::new();
    for folder in LIBRARY_FOLDERS {
        let path = ctx.root.join(folder);
        if !path.exists() {
            create_dir_with_gitkeep(&path)?;
            created.push(*folder);
        }
    }
    create_dir(&ctx.state_dir)?;

    let config_path = ctx.config_path();
    let config_written = if config_path.exists() {
        // Refuse to continue over a config the other commands would reject.
        Config::load(&config_path)?;
        false
    } else {
        let yaml = Config::default().to_yaml()?;
        atomic_write_file(&config_path, &format!("{}\n{}", CONFIG_HEADER, yaml))?;
        true
    };

    log_event(
        ctx,
        &Event::new(EventAction::Init).with_details(json!({
            "library": ctx.root.display().to_string(),
            "folders_created": created.len(),
            "config_written": config_written,
        })),
    );

    println!("Initialized content library.");
    println!();
    println!("Library: {}", ctx.root.display());
    if created.is_empty() {
        println!("All folders already present.");
    } else {
        println!("Created {} folders:", created.len());
        for folder in &created {
            println!("  {}/", folder);
        }
    }
    if config_written {
        println!("Wrote default configuration to {}.", CONFIG_FILE);
    } else {
        println!("Kept existing {}.", CONFIG_FILE);
    }
    println!();
    println!("Next: `cadence schedule --week YYYY-MM-DD` to plan a week.");

    Ok(())
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| {
        CadenceError::LibraryError(format!(
            "failed to create directory '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Create a directory with an empty `.gitkeep` so it survives version control.
fn create_dir_with_gitkeep(path: &Path) -> Result<()> {
    create_dir(path)?;
    let gitkeep = path.join(".gitkeep");
    if !gitkeep.exists() {
        fs::write(&gitkeep, "").map_err(|e| {
            CadenceError::LibraryError(format!(
                "failed to create '{}': {}",
                gitkeep.display(),
                e
            ))
        })?;
    }
    Ok(())
}
