//! In-place patching of the target file.
//!
//! Both strategies follow the same shape: read the whole file, compute the
//! new content in memory, write it back once. A failed write therefore never
//! leaves a half-substituted file. A pattern that does not match is a no-op,
//! and the file is rewritten regardless.

use crate::error::Result;
use crate::models::outcome::{PatchOutcome, Strategy};
use crate::rules::{FALLBACK_BLOCK, FALLBACK_REPLACEMENT, REWRITE_RULES};
use crate::utils;
use std::path::Path;
use tracing::{debug, info};

/// Apply every rewrite rule in order. Returns the new content and the ids
/// of the rules that matched.
pub fn fix_text(content: &str) -> (String, Vec<&'static str>) {
    let mut out = content.to_string();
    let mut applied = Vec::new();
    for rule in REWRITE_RULES.iter() {
        if let Some(next) = rule.apply(&out) {
            debug!(rule = rule.id, "{}", rule.description);
            applied.push(rule.id);
            out = next;
        }
    }
    (out, applied)
}

/// Replace the first betting query block with the fallback query.
/// Returns the new content and whether a block was found.
pub fn fallback_text(content: &str) -> (String, bool) {
    if !FALLBACK_BLOCK.is_match(content) {
        return (content.to_string(), false);
    }
    let out = FALLBACK_BLOCK
        .replacen(content, 1, regex::NoExpand(FALLBACK_REPLACEMENT))
        .into_owned();
    (out, true)
}

/// Rewrite `path` with the targeted cast fixes.
pub fn apply_targeted_fixes(path: &Path) -> Result<PatchOutcome> {
    let content = utils::read_text(path)?;
    let (fixed, applied) = fix_text(&content);
    utils::write_text(path, &fixed)?;
    info!(path = %path.display(), rules = applied.len(), "targeted fixes written");
    Ok(PatchOutcome {
        strategy: Strategy::Targeted,
        path: utils::rel_to_wd(path),
        changed: fixed != content,
        applied,
    })
}

/// Rewrite `path` with the betting query swapped for the fallback block.
pub fn apply_fallback(path: &Path) -> Result<PatchOutcome> {
    let content = utils::read_text(path)?;
    let (patched, replaced) = fallback_text(&content);
    utils::write_text(path, &patched)?;
    info!(path = %path.display(), replaced, "fallback query written");
    Ok(PatchOutcome {
        strategy: Strategy::Fallback,
        path: utils::rel_to_wd(path),
        changed: replaced,
        applied: if replaced {
            vec!["fallback-block"]
        } else {
            Vec::new()
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PatchError;
    use tempfile::tempdir;

    const QUERY: &str = "    const bettingQuery = `\n      SELECT * FROM bets\n      WHERE result = 'win'\n      LIMIT $2\n    `;\n";

    #[test]
    fn test_fix_text_scenario_where_result() {
        let (out, applied) = fix_text("      WHERE result = 'win'\n");
        assert!(out.contains("WHERE result = 'win'::VARCHAR"));
        assert_eq!(applied, vec!["result-varchar-cast"]);
    }

    #[test]
    fn test_fix_text_scenario_limit() {
        let (out, _) = fix_text("      LIMIT $2\n");
        assert_eq!(out, "      LIMIT $2::INTEGER\n");
    }

    #[test]
    fn test_fix_text_applies_all_rules() {
        let src = "db.query(q, [userId.toString()]);\nWHERE result = 'win'\nAND winnings > 0\nLIMIT $2\n";
        let (out, applied) = fix_text(src);
        assert_eq!(
            out,
            "db.query(q, [userId]);\nWHERE result = 'win'::VARCHAR\nAND winnings::NUMERIC > 0\nLIMIT $2::INTEGER\n"
        );
        assert_eq!(applied.len(), 4);
    }

    #[test]
    fn test_fix_text_without_matches_is_identity() {
        let src = "const x = 1;\n";
        let (out, applied) = fix_text(src);
        assert_eq!(out, src);
        assert!(applied.is_empty());
    }

    #[test]
    fn test_targeted_fixes_are_idempotent() {
        let tmp = tempdir().unwrap();
        let p = tmp.path().join("historyController.js");
        std::fs::write(
            &p,
            "[userId.toString()]\nWHERE result = 'win'\nwinnings > 0\nLIMIT $2\n",
        )
        .unwrap();
        let first = apply_targeted_fixes(&p).unwrap();
        assert!(first.changed);
        let after_first = std::fs::read(&p).unwrap();
        let second = apply_targeted_fixes(&p).unwrap();
        assert!(!second.changed);
        assert_eq!(std::fs::read(&p).unwrap(), after_first);
    }

    #[test]
    fn test_fallback_scenario_replaces_whole_block() {
        let src = format!("const a = 1;\n{}const b = 2;\n", QUERY);
        let (out, replaced) = fallback_text(&src);
        assert!(replaced);
        let expected = format!(
            "const a = 1;\n    {}\nconst b = 2;\n",
            FALLBACK_REPLACEMENT
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_fallback_replaces_first_block_only() {
        let src = "const bettingQuery = `a`;\nconst bettingQuery = `b`;\n";
        let (out, _) = fallback_text(src);
        assert!(out.starts_with(FALLBACK_REPLACEMENT));
        assert!(out.ends_with("const bettingQuery = `b`;\n"));
    }

    #[test]
    fn test_fallback_without_block_writes_identical_bytes() {
        let tmp = tempdir().unwrap();
        let p = tmp.path().join("historyController.js");
        let src = "module.exports = {};\n";
        std::fs::write(&p, src).unwrap();
        let outcome = apply_fallback(&p).unwrap();
        assert_eq!(outcome.strategy, Strategy::Fallback);
        assert!(!outcome.changed);
        assert!(outcome.applied.is_empty());
        assert_eq!(std::fs::read_to_string(&p).unwrap(), src);
    }

    #[test]
    fn test_fallback_on_file() {
        let tmp = tempdir().unwrap();
        let p = tmp.path().join("historyController.js");
        std::fs::write(&p, QUERY).unwrap();
        let outcome = apply_fallback(&p).unwrap();
        assert!(outcome.changed);
        let written = std::fs::read_to_string(&p).unwrap();
        assert!(!written.contains("bettingQuery"));
        assert!(written.contains("const result = await db.query(simpleQuery, [userId, limit]);"));
    }

    #[test]
    fn test_missing_file_fails_both_strategies() {
        let tmp = tempdir().unwrap();
        let p = tmp.path().join("gone.js");
        assert!(matches!(apply_fallback(&p), Err(PatchError::Read { .. })));
        assert!(matches!(
            apply_targeted_fixes(&p),
            Err(PatchError::Read { .. })
        ));
        assert!(!p.exists());
    }
}
