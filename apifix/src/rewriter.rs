//! Textual marker-to-constant rewriter.
//!
//! This module holds the single transformation the tool applies to a file:
//! replace every occurrence of the marker expression with the replacement
//! token, then make sure the file imports that token.
//!
//! # Usage
//!
//! ```
//! use apifix::rewriter::RewriteRule;
//!
//! let rule = RewriteRule::api_base();
//! let fixed = rule.apply("const url = process.env.NEXT_PUBLIC_API_URL;").unwrap();
//! assert!(fixed.contains("API_BASE"));
//! assert!(fixed.starts_with("import { API_BASE }"));
//! ```

use crate::constants::{IMPORT_KEYWORD, IMPORT_LINE, IMPORT_MODULE, MARKER, REPLACEMENT};

/// A single project-wide rewrite: a marker expression, the token that
/// replaces it, and the import that brings the token into scope.
///
/// Detection of an existing import is purely textual (substring match on
/// both quote styles), not syntactic. Multi-line or reformatted import
/// statements can false-negative and the probe text inside a comment can
/// false-positive; both are accepted limitations of the tool.
#[derive(Debug, Clone)]
pub struct RewriteRule {
    /// Literal text being searched for and replaced.
    pub marker: String,
    /// Identifier that replaces every marker occurrence.
    pub replacement: String,
    /// Statement inserted when the replacement token is not imported.
    pub import_line: String,
    /// Module path checked when probing for an existing import.
    pub import_module: String,
}

impl RewriteRule {
    /// The rule this tool exists for: `process.env.NEXT_PUBLIC_API_URL`
    /// becomes `API_BASE`, imported from `@/lib/api`.
    #[must_use]
    pub fn api_base() -> Self {
        Self {
            marker: MARKER.to_owned(),
            replacement: REPLACEMENT.to_owned(),
            import_line: IMPORT_LINE.to_owned(),
            import_module: IMPORT_MODULE.to_owned(),
        }
    }

    /// Checks whether the source already imports from the rule's module,
    /// in either single- or double-quoted form.
    fn has_import(&self, source: &str) -> bool {
        let double_quoted = format!("from \"{}\"", self.import_module);
        let single_quoted = format!("from '{}'", self.import_module);
        source.contains(&double_quoted) || source.contains(&single_quoted)
    }

    /// Applies the rule to one file's content.
    ///
    /// Returns `None` when the marker does not occur, meaning the file must
    /// be left untouched. Otherwise every occurrence is replaced in a single
    /// pass and, when no import of the module is found, the import line is
    /// inserted immediately after the last line starting with `import `
    /// (or as the first line when the file has no import lines at all).
    ///
    /// The insertion branch reassembles lines joined by `\n`, which can drop
    /// a trailing newline from the original. Accepted lossy transformation.
    #[must_use]
    pub fn apply(&self, source: &str) -> Option<String> {
        if !source.contains(&self.marker) {
            return None;
        }

        let replaced = source.replace(&self.marker, &self.replacement);

        if self.has_import(&replaced) {
            return Some(replaced);
        }

        let mut lines: Vec<&str> = replaced.lines().collect();
        let insert_at = lines
            .iter()
            .rposition(|line| line.starts_with(IMPORT_KEYWORD))
            .map_or(0, |last_import| last_import + 1);
        lines.insert(insert_at, &self.import_line);

        Some(lines.join("\n"))
    }
}
