//! Shared data models for scan reports, diagnoses, and patch outcomes.

pub mod diagnosis;
pub mod outcome;
pub mod rule;

use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
/// How likely a flagged line is to trigger an operator-resolution failure.
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// A single suspicious line found by a scan check. Report-only.
pub struct Issue {
    pub line: usize,
    pub content: String,
    pub check: &'static str,
    pub message: &'static str,
    pub severity: Severity,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
/// Aggregated scan counts used by printers.
pub struct ScanSummary {
    pub issues: usize,
    pub lines: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}
