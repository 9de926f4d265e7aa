//! Line scanner for suspicious SQL fragments.
//!
//! Every line is tested against each check in `rules::SCAN_CHECKS`, so a
//! line yields between zero and three issues. The report never feeds the
//! patch pass.

use crate::error::Result;
use crate::models::{Issue, ScanSummary, Severity};
use crate::rules::SCAN_CHECKS;
use crate::utils;
use std::path::Path;
use tracing::{debug, warn};

/// Scan in-memory text. Lines are split on `\n` and numbered from 1.
pub fn scan_text(content: &str) -> Vec<Issue> {
    let mut issues = Vec::new();
    for (idx, line) in content.split('\n').enumerate() {
        for check in SCAN_CHECKS.iter() {
            if check.matcher.is_match(line) {
                issues.push(Issue {
                    line: idx + 1,
                    content: line.trim().to_string(),
                    check: check.id,
                    message: check.message,
                    severity: check.severity,
                });
            }
        }
    }
    issues
}

/// Read and scan `path`, propagating read and decode failures.
pub fn try_scan(path: &Path) -> Result<Vec<Issue>> {
    let content = utils::read_text(path)?;
    let issues = scan_text(&content);
    debug!(path = %path.display(), issues = issues.len(), "scanned target");
    Ok(issues)
}

/// Read and scan `path`. A file that cannot be read or decoded is logged
/// and reported as clean.
pub fn scan(path: &Path) -> Vec<Issue> {
    match try_scan(path) {
        Ok(issues) => issues,
        Err(err) => {
            warn!(error = %err, "scan skipped");
            Vec::new()
        }
    }
}

/// Count issues per severity. `lines` is the number of scanned lines.
pub fn summarize(issues: &[Issue], lines: usize) -> ScanSummary {
    let mut summary = ScanSummary {
        issues: issues.len(),
        lines,
        ..ScanSummary::default()
    };
    for is in issues {
        match is.severity {
            Severity::High => summary.high += 1,
            Severity::Medium => summary.medium += 1,
            Severity::Low => summary.low += 1,
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const CONTROLLER: &str = r#"const getHistory = async (req, res) => {
  const userId = req.user.id;
    const bettingQuery = `
      SELECT 'bet' as activity_type FROM bets WHERE result = 'win'
      UNION ALL
      SELECT 'payout' FROM payouts WHERE user_id = $1
      LIMIT $2
    `;
};
"#;

    #[test]
    fn test_scan_text_flags_each_pattern() {
        let issues = scan_text(CONTROLLER);
        let at = |line: usize| -> Vec<&str> {
            issues.iter().filter(|i| i.line == line).map(|i| i.check).collect()
        };
        assert_eq!(at(4), vec!["string-literal-comparison"]);
        assert_eq!(at(5), vec!["union-query"]);
        assert_eq!(at(6), vec!["parameter-placeholder"]);
        assert_eq!(at(7), vec!["parameter-placeholder"]);
        assert_eq!(issues.len(), 4);
        assert_eq!(issues[0].content, "SELECT 'bet' as activity_type FROM bets WHERE result = 'win'");
    }

    #[test]
    fn test_one_line_can_match_all_checks() {
        let issues = scan_text("WHERE kind = 'x' AND id = $1 UNION SELECT 1");
        assert_eq!(issues.len(), 3);
        assert!(issues.iter().all(|i| i.line == 1));
        assert_eq!(issues[0].severity, Severity::Medium);
        assert_eq!(issues[1].severity, Severity::High);
        assert_eq!(issues[2].severity, Severity::High);
    }

    #[test]
    fn test_issue_count_bounded_by_three_per_line() {
        let samples = [
            "",
            "\n\n",
            CONTROLLER,
            "WHERE a = 'b' $1 union\nWHERE c = 'd' $2 UNION\n",
        ];
        for s in samples {
            let lines = s.split('\n').count();
            assert!(scan_text(s).len() <= 3 * lines);
        }
    }

    #[test]
    fn test_scan_missing_file_is_empty() {
        let tmp = tempdir().unwrap();
        let missing = tmp.path().join("nope.js");
        assert!(scan(&missing).is_empty());
        assert!(matches!(
            try_scan(&missing),
            Err(crate::error::PatchError::Read { .. })
        ));
    }

    #[test]
    fn test_scan_invalid_utf8_is_empty() {
        let tmp = tempdir().unwrap();
        let p = tmp.path().join("bad.js");
        std::fs::write(&p, [0x57, 0x48, 0xff, 0xfe, 0x0a]).unwrap();
        assert!(scan(&p).is_empty());
        assert!(try_scan(&p).is_err());
    }

    #[test]
    fn test_summarize_counts_severities() {
        let issues = scan_text(CONTROLLER);
        let s = summarize(&issues, CONTROLLER.split('\n').count());
        assert_eq!(s.issues, 4);
        assert_eq!(s.high, 3);
        assert_eq!(s.medium, 1);
        assert_eq!(s.low, 0);
        assert_eq!(s.lines, 10);
    }
}
