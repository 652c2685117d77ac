//! Source file discovery.
//!
//! Expands the paths given to `check` into the list of files to scan.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Directories never descended into.
const SKIPPED_DIRS: &[&str] = &[
    "target",
    "node_modules",
    ".git",
    "__pycache__",
    "dist",
    "build",
];

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| extensions.iter().any(|want| want.eq_ignore_ascii_case(e)))
}

/// Discover all source files under `root` with one of `extensions`.
///
/// Hidden entries and common build/vendor directories are skipped.
/// The result is sorted by path.
pub fn discover_sources(root: &Path, extensions: &[String]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    discover_recursive(root, extensions, &mut files);
    files.sort();
    files
}

fn discover_recursive(dir: &Path, extensions: &[String], files: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        tracing::debug!(dir = %dir.display(), "skipping unreadable directory");
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();

        // Skip hidden files and directories
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.starts_with('.') {
                continue;
            }
        }

        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if SKIPPED_DIRS.contains(&name) {
                    continue;
                }
            }
            discover_recursive(&path, extensions, files);
        } else if file_type.is_symlink() && path.is_dir() {
            // Linked directories can loop back to an ancestor.
            tracing::debug!(dir = %path.display(), "skipping symlinked directory");
        } else if has_extension(&path, extensions) {
            files.push(path);
        }
    }
}

/// Expand every argument path into files to scan.
///
/// Directories are searched with [`discover_sources`]. Anything else is
/// kept as given whatever its extension (an explicit file is always
/// scanned, and a missing one surfaces as a read error later). Paths that
/// resolve to the same file are scanned once, keeping the first spelling.
pub fn expand_paths(paths: &[PathBuf], extensions: &[String]) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = Vec::new();
    for path in paths {
        if path.is_dir() {
            let found = discover_sources(path, extensions);
            tracing::debug!(dir = %path.display(), count = found.len(), "discovered sources");
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }
    let mut seen = HashSet::new();
    files.retain(|f| seen.insert(f.canonicalize().unwrap_or_else(|_| f.clone())));
    files
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
