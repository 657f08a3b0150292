//! Go package discovery
//!
//! Recursively collects directories containing documentable Go source,
//! honoring the configured exclusion list.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Find all directories under `root` containing at least one non-test Go
/// source file, in sorted order
pub fn find_go_packages(root: &Path, exclude_dirs: &[String]) -> Vec<PathBuf> {
    let mut packages = Vec::new();
    walk(root, exclude_dirs, &mut packages);
    packages.sort();
    packages
}

fn walk(dir: &Path, exclude_dirs: &[String], packages: &mut Vec<PathBuf>) {
    if has_go_source_files(dir) {
        packages.push(dir.to_path_buf());
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("skipping unreadable directory {}: {}", dir.display(), e);
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() && !should_skip_dir(&path, exclude_dirs) {
            walk(&path, exclude_dirs, packages);
        }
    }
}

/// Check whether a directory holds Go source files other than tests
pub fn has_go_source_files(dir: &Path) -> bool {
    let Ok(entries) = fs::read_dir(dir) else {
        return false;
    };

    entries.flatten().any(|entry| {
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            return false;
        };
        entry.path().is_file() && name.ends_with(".go") && !name.ends_with("_test.go")
    })
}

/// Skip excluded, hidden, and `_test`-suffixed directories
fn should_skip_dir(path: &Path, exclude_dirs: &[String]) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };

    exclude_dirs.iter().any(|d| d == name) || name.starts_with('.') || name.ends_with("_test")
}
