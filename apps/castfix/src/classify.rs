//! Error message classification. Informational only; nothing downstream
//! branches on the result.

use crate::models::diagnosis::{Diagnosis, IssueKind};
use crate::rules::KNOWN_ERROR;

/// Classify a database error message.
///
/// Any message containing the known varchar/integer operator error maps to
/// a type-casting diagnosis; everything else is unknown.
pub fn classify(error: &str) -> Diagnosis {
    if error.contains(KNOWN_ERROR) {
        return Diagnosis {
            kind: IssueKind::TypeCasting,
            problem: "VARCHAR column being compared to INTEGER",
            solution: "Add explicit type casting or fix parameter types",
        };
    }
    Diagnosis {
        kind: IssueKind::Unknown,
        problem: "Unknown error",
        solution: "Investigate further",
    }
}
