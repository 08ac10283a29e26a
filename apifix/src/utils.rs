//! File collection and path helpers.

use crate::constants::DEFAULT_EXCLUDE_FOLDERS;
use std::path::{Path, PathBuf};

/// Normalizes a path for CLI display.
///
/// - Converts backslashes to forward slashes (for cross-platform consistency)
/// - Strips a leading "./" prefix (for cleaner output)
#[must_use]
pub fn normalize_display_path(path: &Path) -> String {
    let raw = path.to_string_lossy();
    let normalized = raw.replace('\\', "/");
    normalized
        .strip_prefix("./")
        .unwrap_or(&normalized)
        .to_owned()
}

/// Checks if a folder name matches any exclusion pattern.
/// Supports exact matching and wildcard patterns starting with `*.`.
#[must_use]
pub fn is_excluded(name: &str, excludes: &[String]) -> bool {
    excludes.iter().any(|exclude| {
        if let Some(suffix) = exclude.strip_prefix('*') {
            name.ends_with(suffix)
        } else {
            name == exclude
        }
    })
}

/// Collects rewrite candidates from a directory tree.
///
/// Uses the `ignore` crate's walker, so `.gitignore` rules are respected in
/// addition to the hardcoded default exclusions (`node_modules`, `.next`,
/// `dist`, ...). Excluded directories are pruned at traversal time. Only
/// files whose extension is in `extensions` are returned; traversal order
/// is whatever the walker yields.
///
/// Walk errors (unreadable directories, dangling symlinks) are printed to
/// stderr only when `verbose` is set.
#[must_use]
pub fn collect_source_files(
    root: &Path,
    extensions: &[String],
    exclude: &[String],
    verbose: bool,
) -> Vec<PathBuf> {
    use ignore::WalkBuilder;

    let mut all_excludes: Vec<String> = exclude.to_vec();
    all_excludes.extend(DEFAULT_EXCLUDE_FOLDERS.iter().map(|&s| s.to_owned()));

    let root_for_filter = root.to_path_buf();
    let walker = WalkBuilder::new(root)
        .hidden(false) // Hidden entries are handled by the default excludes
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .filter_entry(move |entry| {
            if entry.path() == root_for_filter {
                return true;
            }
            // Only prune directories; files are filtered by extension below.
            if !entry.file_type().is_some_and(|ft| ft.is_dir()) {
                return true;
            }
            if let Some(name) = entry.file_name().to_str() {
                if is_excluded(name, &all_excludes) {
                    return false;
                }
            }
            true
        })
        .build();

    let mut files = Vec::new();
    for result in walker {
        match result {
            Ok(entry) => {
                if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                    continue;
                }
                let path = entry.path();
                let recognized = path
                    .extension()
                    .and_then(std::ffi::OsStr::to_str)
                    .is_some_and(|ext| extensions.iter().any(|want| want == ext));
                if recognized {
                    files.push(path.to_path_buf());
                }
            }
            Err(e) => {
                if verbose {
                    eprintln!("Walk error: {e}");
                }
            }
        }
    }

    files
}
