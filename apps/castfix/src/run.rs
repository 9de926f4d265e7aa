//! Run orchestration: locate, report, mutate.
//!
//! The mutation step tries the fallback block first and only falls through
//! to the targeted fixes when the fallback fails to read or write the file.
//! The scan report is informational and never steers the mutation.

use crate::classify::classify;
use crate::config::Effective;
use crate::error::{PatchError, Result};
use crate::models::diagnosis::Diagnosis;
use crate::models::outcome::{PatchOutcome, Strategy};
use crate::models::{Issue, ScanSummary};
use crate::rules::{KNOWN_ERROR, TARGET_FILE};
use crate::{patch, scan, utils};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// A mutation strategy over the target path.
pub type StrategyFn = fn(&Path) -> Result<PatchOutcome>;

/// Strategies in the order they are attempted.
pub const STRATEGIES: [(Strategy, StrategyFn); 2] = [
    (Strategy::Fallback, patch::apply_fallback),
    (Strategy::Targeted, patch::apply_targeted_fixes),
];

/// A strategy that was tried and failed.
#[derive(Debug)]
pub struct FailedAttempt {
    pub strategy: Strategy,
    pub error: PatchError,
}

/// Everything a run produced once the target was located.
#[derive(Debug)]
pub struct RunReport {
    pub target: String,
    pub diagnosis: Diagnosis,
    pub issues: Vec<Issue>,
    pub summary: ScanSummary,
    pub failed: Vec<FailedAttempt>,
    pub patch: Result<PatchOutcome>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.patch.is_ok()
    }
}

/// Run the full pass against `controllers/historyController.js` under
/// `eff.root`.
///
/// Returns `TargetNotFound` before any read when the file is absent. Any
/// later failure is carried in `RunReport::patch`.
pub fn run(eff: &Effective) -> Result<RunReport> {
    let target = eff.root.join(TARGET_FILE);
    if !target.exists() {
        return Err(PatchError::TargetNotFound {
            path: PathBuf::from(TARGET_FILE),
        });
    }
    Ok(run_with(&target, &STRATEGIES))
}

/// Run against an existing `target` with an explicit strategy order.
pub fn run_with(target: &Path, strategies: &[(Strategy, StrategyFn)]) -> RunReport {
    let diagnosis = classify(KNOWN_ERROR);
    info!(kind = ?diagnosis.kind, "classified known error");

    let issues = scan::scan(target);
    let lines = utils::read_text(target)
        .map(|s| s.split('\n').count())
        .unwrap_or(0);
    let summary = scan::summarize(&issues, lines);

    let (patch, failed) = apply_in_order(target, strategies);
    RunReport {
        target: utils::rel_to_wd(target),
        diagnosis,
        issues,
        summary,
        failed,
        patch,
    }
}

/// Try each strategy until one succeeds. Failures are logged and kept.
pub fn apply_in_order(
    target: &Path,
    strategies: &[(Strategy, StrategyFn)],
) -> (Result<PatchOutcome>, Vec<FailedAttempt>) {
    let mut failed = Vec::new();
    for (strategy, apply) in strategies {
        match apply(target) {
            Ok(outcome) => return (Ok(outcome), failed),
            Err(error) => {
                warn!(%strategy, %error, "fix attempt failed");
                failed.push(FailedAttempt {
                    strategy: *strategy,
                    error,
                });
            }
        }
    }
    let cause = |s: Strategy| {
        failed
            .iter()
            .find(|a| a.strategy == s)
            .map(|a| a.error.to_string())
            .unwrap_or_else(|| "not attempted".to_string())
    };
    let err = PatchError::AllStrategiesFailed {
        fallback: cause(Strategy::Fallback),
        targeted: cause(Strategy::Targeted),
    };
    (Err(err), failed)
}
