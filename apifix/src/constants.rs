//! Baked-in values for the API URL rewrite.
//!
//! The tool takes no configuration file; everything it needs to know is
//! collected here and threaded through [`crate::commands::RewriteOptions`]
//! so tests can substitute their own values.

/// Directory scanned when no root is given on the command line.
pub const DEFAULT_ROOT: &str = "apps/web/src";

/// The environment variable expression being replaced. Matched as a literal
/// substring; the pattern has no wildcards.
pub const MARKER: &str = "process.env.NEXT_PUBLIC_API_URL";

/// The constant that replaces every marker occurrence.
pub const REPLACEMENT: &str = "API_BASE";

/// Module path the replacement constant is imported from.
pub const IMPORT_MODULE: &str = "@/lib/api";

/// Statement inserted into files that do not import the constant yet.
pub const IMPORT_LINE: &str = "import { API_BASE } from \"@/lib/api\";";

/// Prefix identifying import lines during the insertion scan.
pub const IMPORT_KEYWORD: &str = "import ";

/// File extensions recognized as rewrite candidates.
pub const SOURCE_EXTENSIONS: &[&str] = &["ts", "tsx"];

/// Folders the walker never descends into.
pub const DEFAULT_EXCLUDE_FOLDERS: &[&str] = &[
    "node_modules",
    ".git",
    ".next",
    "dist",
    "build",
    "coverage",
];
