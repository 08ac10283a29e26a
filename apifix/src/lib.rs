//! Core library for the `apifix` project-wide rewrite tool.
//!
//! apifix walks a TypeScript source tree, replaces every usage of the
//! `process.env.NEXT_PUBLIC_API_URL` expression with the shared `API_BASE`
//! constant, and inserts the matching import in files that do not already
//! have it. It is a one-shot migration tool: files are rewritten in place,
//! with no backups and no dry-run.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// Module defining the command-line interface arguments.
pub mod cli;

/// Module for the rewrite command and its execution logic.
pub mod commands;

/// Module containing the baked-in rewrite values (marker, replacement,
/// import line, recognized extensions).
pub mod constants;

/// Module defining the entry point logic shared by the binary and tests.
pub mod entry_point;

/// Module containing the textual rewrite rule.
/// This is responsible for the marker substitution and import insertion.
pub mod rewriter;

/// Module containing file collection and path helpers.
pub mod utils;
