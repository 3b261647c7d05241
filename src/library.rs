//! Content library scanning.
//!
//! Every published or drafted piece in the library has a metadata file
//! (`*_meta.json` by default) next to it. The titles and hashtags recorded
//! there are the library's existing topics.

use globset::{Glob, GlobMatcher};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use crate::context::{BATCHES_DIR, STATE_DIR};
use crate::error::{CadenceError, Result};

/// The fields of a metadata file that name its topics.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ContentMeta {
    title: Option<String>,
    social_media: SocialMedia,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SocialMedia {
    hashtags: Vec<String>,
}

/// Cadence's own state and batch folders hold no content metadata.
fn is_generated_dir(entry: &DirEntry) -> bool {
    entry.depth() == 1
        && entry.file_type().is_dir()
        && (entry.file_name() == STATE_DIR || entry.file_name() == BATCHES_DIR)
}

fn meta_matcher(meta_glob: &str) -> Result<GlobMatcher> {
    Glob::new(meta_glob)
        .map(|g| g.compile_matcher())
        .map_err(|e| CadenceError::ConfigError(format!("invalid glob '{}': {}", meta_glob, e)))
}

/// Collect the lowercase topics already covered by the library.
///
/// Walks `library_root` recursively and reads every file whose name matches
/// `meta_glob`. Each file contributes its `title` and its
/// `social_media.hashtags` (without the leading `#`). Files that cannot be
/// read or parsed are skipped. A missing library yields an empty set.
pub fn get_existing_topics(library_root: &Path, meta_glob: &str) -> Result<BTreeSet<String>> {
    let matcher = meta_matcher(meta_glob)?;
    let mut topics = BTreeSet::new();

    if !library_root.is_dir() {
        tracing::debug!(root = %library_root.display(), "library not found, no existing topics");
        return Ok(topics);
    }

    let walker = WalkDir::new(library_root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !is_generated_dir(e));
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!(error = %e, "skipping unreadable library entry");
                continue;
            }
        };
        if !entry.file_type().is_file() || !matcher.is_match(entry.file_name()) {
            continue;
        }

        let path = entry.path();
        let meta = match std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|content| {
                serde_json::from_str::<ContentMeta>(&content).map_err(|e| e.to_string())
            }) {
            Ok(meta) => meta,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "skipping metadata file");
                continue;
            }
        };

        if let Some(title) = meta.title.filter(|t| !t.trim().is_empty()) {
            topics.insert(title.to_lowercase());
        }
        for tag in meta.social_media.hashtags {
            let tag = tag.replace('#', "").to_lowercase();
            if !tag.trim().is_empty() {
                topics.insert(tag);
            }
        }
    }

    tracing::info!(count = topics.len(), "collected existing topics");
    Ok(topics)
}
