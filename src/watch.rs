//! Debounced file watching
//!
//! Watches package directories and triggers regeneration when a debounced
//! event batch touches a Go source file. Regeneration and watch errors are
//! logged, never fatal; the loop keeps running.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use notify::RecursiveMode;
use notify_debouncer_mini::new_debouncer;
use tracing::{debug, warn};

use crate::error::Result;

/// Watches a set of package directories for Go source changes
pub struct DocWatcher {
    paths: Vec<PathBuf>,
    debounce: Duration,
}

impl DocWatcher {
    pub fn new(paths: Vec<PathBuf>, interval_seconds: u64) -> DocWatcher {
        DocWatcher {
            paths,
            debounce: Duration::from_secs(interval_seconds),
        }
    }

    /// Watch until the process ends, calling `regenerate` after each
    /// debounced batch that includes a `.go` file
    pub fn watch<F>(&self, mut regenerate: F) -> Result<()>
    where
        F: FnMut() -> Result<()>,
    {
        let (tx, rx) = mpsc::channel();
        let mut debouncer = new_debouncer(self.debounce, tx)?;

        for path in &self.paths {
            debouncer.watcher().watch(path, RecursiveMode::NonRecursive)?;
        }
        debug!(
            "watching {} directories (debounce {:?})",
            self.paths.len(),
            self.debounce
        );

        for result in rx {
            match result {
                Ok(events) => {
                    if events.iter().any(|event| is_go_file(&event.path)) {
                        debug!("source change detected, regenerating documentation");
                        if let Err(e) = regenerate() {
                            warn!("regeneration failed: {}", e);
                        }
                    }
                }
                Err(e) => warn!("watch error: {}", e),
            }
        }

        Ok(())
    }
}

fn is_go_file(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "go")
}
