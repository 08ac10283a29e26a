//! Shared entry point for the `apifix` binary and its tests.

use crate::cli::Cli;
use crate::commands::{run_rewrite, RewriteOptions};

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

/// Run apifix with the given arguments, writing output to stdout.
///
/// # Errors
///
/// Returns an error if the rewrite aborts on an I/O failure.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Run apifix with the given arguments, writing output to the specified writer.
///
/// This is the testable version of `run_with_args` that allows output capture.
///
/// # Errors
///
/// Returns an error if the rewrite aborts on an I/O failure. Argument parse
/// errors are reported on stderr and surface as exit code 1, not as `Err`.
pub fn run_with_args_to<W: std::io::Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["apifix".to_owned()];
    program_args.extend(args);
    let cli = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                // Let clap print help/version as intended, captured by the writer
                write!(writer, "{e}")?;
                writer.flush()?;
                return Ok(0);
            }
            _ => {
                eprint!("{e}");
                return Ok(1);
            }
        },
    };

    let mut options = RewriteOptions {
        verbose: cli.verbose,
        ..RewriteOptions::default()
    };
    if let Some(root) = cli.root {
        options.root = root;
    }
    options.exclude.extend(cli.exclude);

    if cli.verbose && !cli.json {
        eprintln!("[VERBOSE] apifix v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("[VERBOSE] Root: {}", options.root.display());
        eprintln!("[VERBOSE] Marker: {}", options.rule.marker);
        eprintln!("[VERBOSE] Excludes: {:?}", options.exclude);
    }

    let report = run_rewrite(&options, &mut *writer)?;

    if cli.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&report)?)?;
    } else if report.files_modified == 0 {
        writeln!(
            writer,
            "{} no candidate file contained {}",
            "Done:".green(),
            options.rule.marker
        )?;
    } else {
        writeln!(
            writer,
            "{} {} of {} candidate files rewritten",
            "Done:".green(),
            report.files_modified,
            report.files_scanned
        )?;
    }

    Ok(0)
}
