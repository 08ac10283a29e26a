//! Command-line interface definition.

use clap::Parser;
use std::path::PathBuf;

/// Command line interface configuration using `clap`.
///
/// All rewrite parameters (marker, replacement token, import line, file
/// extensions) are baked into the tool; the flags here only control where
/// the walk starts and how the run is reported.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "apifix - rewrites process.env.NEXT_PUBLIC_API_URL usages to the shared API_BASE constant",
    long_about = None
)]
pub struct Cli {
    /// Root directory to rewrite. Defaults to apps/web/src.
    pub root: Option<PathBuf>,

    /// Folders to exclude from the walk (in addition to node_modules, .git,
    /// .next, dist, build, coverage).
    #[arg(long, alias = "exclude-folder")]
    pub exclude: Vec<String>,

    /// Output the rewrite report as JSON after the run.
    #[arg(long)]
    pub json: bool,

    /// Show walk errors and run details on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}
