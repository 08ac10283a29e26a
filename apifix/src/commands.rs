//! The rewrite command: walk, substitute, overwrite.

use crate::constants;
use crate::rewriter::RewriteRule;
use crate::utils::{collect_source_files, normalize_display_path};

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Options for a rewrite run.
///
/// The defaults carry the baked-in values from [`crate::constants`]; tests
/// and the CLI substitute their own root and exclusions.
#[derive(Debug, Clone)]
pub struct RewriteOptions {
    /// Root directory whose tree is rewritten.
    pub root: PathBuf,
    /// The substitution and import insertion to apply.
    pub rule: RewriteRule,
    /// File extensions considered rewrite candidates.
    pub extensions: Vec<String>,
    /// Additional folder names to skip during the walk.
    pub exclude: Vec<String>,
    /// Print walk errors and run details to stderr.
    pub verbose: bool,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from(constants::DEFAULT_ROOT),
            rule: RewriteRule::api_base(),
            extensions: constants::SOURCE_EXTENSIONS
                .iter()
                .map(|&s| s.to_owned())
                .collect(),
            exclude: Vec::new(),
            verbose: false,
        }
    }
}

/// Result of a rewrite run.
#[derive(Debug, Serialize)]
pub struct RewriteReport {
    /// Number of candidate files that were scanned.
    pub files_scanned: usize,
    /// Number of files that contained the marker and were overwritten.
    pub files_modified: usize,
    /// Display paths of the modified files, in processing order.
    pub modified: Vec<String>,
}

/// Walks the tree under `options.root` and rewrites every candidate file
/// containing the marker, printing `Fixing <path>` per modified file.
///
/// Files are processed strictly one at a time: read fully, transformed,
/// written back, then the next is considered. There is no backup and no
/// rollback; a second run over the same tree is a no-op because the first
/// run leaves no marker occurrences behind.
///
/// # Errors
///
/// Any read or write failure (permission denied, file gone, content not
/// valid UTF-8) aborts the run at that file. Files already processed stay
/// rewritten; re-running after the cause is fixed completes the migration.
pub fn run_rewrite<W: Write>(options: &RewriteOptions, mut writer: W) -> Result<RewriteReport> {
    let files = collect_source_files(
        &options.root,
        &options.extensions,
        &options.exclude,
        options.verbose,
    );

    let mut modified = Vec::new();
    for path in &files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let Some(fixed) = options.rule.apply(&content) else {
            continue;
        };

        writeln!(writer, "Fixing {}", normalize_display_path(path))?;
        fs::write(path, fixed).with_context(|| format!("Failed to write {}", path.display()))?;
        modified.push(normalize_display_path(path));
    }

    Ok(RewriteReport {
        files_scanned: files.len(),
        files_modified: modified.len(),
        modified,
    })
}
