//! Rule records: per-line scan checks and whole-content rewrites.
//!
//! Rules are plain data so each one can be exercised on its own; the
//! tables live in `crate::rules`.

use super::Severity;
use regex::Regex;

/// How a scan check decides whether a line matches.
pub enum LineMatcher {
    /// Regular expression tested against the raw line.
    Pattern(Regex),
    /// Case-insensitive substring test.
    ContainsIgnoreCase(&'static str),
}

impl LineMatcher {
    pub fn is_match(&self, line: &str) -> bool {
        match self {
            LineMatcher::Pattern(re) => re.is_match(line),
            LineMatcher::ContainsIgnoreCase(needle) => {
                line.to_uppercase().contains(&needle.to_uppercase())
            }
        }
    }
}

/// A line-level check that produces an `Issue` when it matches.
pub struct ScanCheck {
    pub id: &'static str,
    pub matcher: LineMatcher,
    pub message: &'static str,
    pub severity: Severity,
}

/// A targeted substitution over the whole document.
///
/// `replacement` is inserted literally; `$` is never expanded.
pub struct RewriteRule {
    pub id: &'static str,
    pub pattern: Regex,
    pub replacement: &'static str,
    pub description: &'static str,
}

impl RewriteRule {
    /// Apply the rule to every match. Returns `None` when nothing matched.
    pub fn apply(&self, content: &str) -> Option<String> {
        if !self.pattern.is_match(content) {
            return None;
        }
        Some(
            self.pattern
                .replace_all(content, regex::NoExpand(self.replacement))
                .into_owned(),
        )
    }
}
