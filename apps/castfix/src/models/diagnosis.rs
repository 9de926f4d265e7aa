//! Classification record for a database error message.

use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    TypeCasting,
    Unknown,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// What an error message means and what to do about it.
pub struct Diagnosis {
    pub kind: IssueKind,
    pub problem: &'static str,
    pub solution: &'static str,
}
