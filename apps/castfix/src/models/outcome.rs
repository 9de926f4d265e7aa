//! Results of the mutation step.

use serde::Serialize;
use std::fmt;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Which mutation strategy produced the written content.
pub enum Strategy {
    /// Wholesale replacement of the dynamic betting query.
    Fallback,
    /// The four narrow cast substitutions.
    Targeted,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Fallback => f.write_str("fallback"),
            Strategy::Targeted => f.write_str("targeted"),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// A strategy that read and rewrote the target.
///
/// `changed` is false when no pattern matched; the file is still written.
pub struct PatchOutcome {
    pub strategy: Strategy,
    pub path: String,
    pub changed: bool,
    pub applied: Vec<&'static str>,
}
