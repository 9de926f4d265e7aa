//! Rule tables for the history controller patch.
//!
//! Scan checks flag lines for the report; rewrite rules and the fallback
//! block mutate the document. Both lists are ordered and compiled once.

use crate::models::rule::{LineMatcher, RewriteRule, ScanCheck};
use crate::models::Severity;
use regex::Regex;
use std::sync::LazyLock;

/// Path of the patched file, relative to the working directory.
pub const TARGET_FILE: &str = "controllers/historyController.js";

/// Database error the tool was written to chase.
pub const KNOWN_ERROR: &str = "operator does not exist: character varying = integer";

/// Per-line checks, evaluated independently in this order.
pub static SCAN_CHECKS: LazyLock<Vec<ScanCheck>> = LazyLock::new(|| {
    vec![
        ScanCheck {
            id: "string-literal-comparison",
            matcher: LineMatcher::Pattern(compile(r"WHERE.*=.*'[^']*'")),
            message: "String literal comparison - check if column is VARCHAR",
            severity: Severity::Medium,
        },
        ScanCheck {
            id: "parameter-placeholder",
            matcher: LineMatcher::Pattern(compile(r"\$[0-9]+")),
            message: "Parameter usage - verify type matches column type",
            severity: Severity::High,
        },
        ScanCheck {
            id: "union-query",
            matcher: LineMatcher::ContainsIgnoreCase("UNION"),
            message: "UNION query - ensure all SELECT statements have matching column types",
            severity: Severity::High,
        },
    ]
});

/// Targeted substitutions, applied in order over the whole document.
///
/// Cast rules absorb a cast that is already present so a second pass
/// rewrites to the same bytes.
pub static REWRITE_RULES: LazyLock<Vec<RewriteRule>> = LazyLock::new(|| {
    vec![
        RewriteRule {
            id: "user-id-to-string",
            pattern: compile(r"\[userId\.toString\(\)\]"),
            replacement: "[userId]",
            description: "Pass user_id parameters as integers",
        },
        RewriteRule {
            id: "result-varchar-cast",
            pattern: compile(r"WHERE.*result\s*=\s*'win'(?:::VARCHAR)?"),
            replacement: "WHERE result = 'win'::VARCHAR",
            description: "Cast the result string comparison to VARCHAR",
        },
        RewriteRule {
            id: "limit-integer-cast",
            pattern: compile(r"LIMIT \$2\b(?:::INTEGER)?"),
            replacement: "LIMIT $2::INTEGER",
            description: "Cast the LIMIT parameter to INTEGER",
        },
        RewriteRule {
            id: "winnings-numeric-cast",
            pattern: compile(r"winnings > 0"),
            replacement: "winnings::NUMERIC > 0",
            description: "Cast winnings to NUMERIC before comparing",
        },
    ]
});

/// The dynamic betting query, from its declaration to the first closing
/// backtick-semicolon.
pub static FALLBACK_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?s)const bettingQuery = `.*?`;"));

/// Known-good query substituted for `FALLBACK_BLOCK`.
pub const FALLBACK_REPLACEMENT: &str = concat!(
    "// Simple fallback query - just get basic bet information\n",
    "    const simpleQuery = `\n",
    "      SELECT \n",
    "        'bet_activity' as activity_type,\n",
    "        'Bet placed' as description,\n",
    "        -amount as amount_change,\n",
    "        timestamp,\n",
    "        'bet' as category\n",
    "      FROM bets\n",
    "      WHERE user_id = $1\n",
    "      ORDER BY timestamp DESC\n",
    "      LIMIT $2\n",
    "    `;\n",
    "    \n",
    "    const result = await db.query(simpleQuery, [userId, limit]);",
);

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in rule pattern must compile")
}
