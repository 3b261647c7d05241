use crate::context::LibraryContext;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// An empty library rooted at a fresh temporary directory.
pub(crate) fn create_test_library() -> (TempDir, LibraryContext) {
    let temp_dir = TempDir::new().unwrap();
    let ctx = LibraryContext::resolve_from(temp_dir.path());
    std::fs::create_dir_all(&ctx.batches_dir).unwrap();
    (temp_dir, ctx)
}

/// Write a content metadata file with the given title and hashtags.
pub(crate) fn write_meta(ctx: &LibraryContext, rel_path: &str, title: &str, hashtags: &[&str]) {
    let path = ctx.root.join(rel_path);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    let meta = serde_json::json!({
        "title": title,
        "social_media": { "hashtags": hashtags },
    });
    std::fs::write(path, serde_json::to_string_pretty(&meta).unwrap()).unwrap();
}

/// Observance catalog with one October awareness month.
pub(crate) const OCTOBER_CATALOG: &str = r#"{
  "observances": {
    "October": {
      "month_observances": [
        {
          "name": "ADHD Awareness Month",
          "type": "month",
          "dates": "October 1-31",
          "focus_areas": ["adhd"],
          "content_ideas": ["ADHD in Adults", "ADHD Myths"]
        }
      ],
      "specific_dates": [
        {
          "name": "World Mental Health Day",
          "type": "day",
          "date": "October 10",
          "focus_areas": ["general"],
          "content_ideas": ["Mental Health at Work"]
        }
      ]
    }
  }
}"#;

/// Write [`OCTOBER_CATALOG`] to the library's default observance file.
pub(crate) fn write_october_catalog(ctx: &LibraryContext) -> PathBuf {
    let path = ctx.observances_path(&crate::config::Config::default());
    std::fs::write(&path, OCTOBER_CATALOG).unwrap();
    path
}
