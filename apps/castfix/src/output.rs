//! Output rendering for a patch run.
//!
//! Supports `human` (default) and `json` outputs. The JSON form is a single
//! object with the diagnosis, issues, scan summary, and patch result.

use crate::config::{Effective, OutputMode};
use crate::error::PatchError;
use crate::models::diagnosis::IssueKind;
use crate::models::outcome::{PatchOutcome, Strategy};
use crate::models::Severity;
use crate::run::RunReport;
use crate::utils;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

pub const AGENT_NAME: &str = "Database Debug Agent";
pub const SPECIALTY: &str = "SQL Type Casting and Database Query Issues";
pub const EXPERIENCE: &str = "15 years of PostgreSQL debugging";

fn use_colors(eff: &Effective) -> bool {
    eff.output != OutputMode::Json && eff.color
}

/// Print the opening banner. Nothing is printed in JSON mode.
pub fn print_banner(eff: &Effective) {
    if eff.output == OutputMode::Json {
        return;
    }
    let title = format!("🚀 {} starting diagnosis...", AGENT_NAME);
    if use_colors(eff) {
        println!("{}", title.bold());
    } else {
        println!("{}", title);
    }
    println!("Specialty: {}", SPECIALTY);
    println!("Experience: {}", EXPERIENCE);
}

/// Print the missing-target diagnostic.
pub fn print_not_found(err: &PatchError, eff: &Effective) {
    match eff.output {
        OutputMode::Json => print_json(&compose_error_json(err)),
        OutputMode::Human => {
            match err {
                PatchError::TargetNotFound { path } => {
                    println!("❌ Target file {} not found!", path.display())
                }
                other => println!("❌ {}", other),
            }
            print_verdict(false, eff);
        }
    }
}

/// Print a full run report in the requested format.
pub fn print_report(report: &RunReport, eff: &Effective) {
    match eff.output {
        OutputMode::Json => print_json(&compose_report_json(report)),
        OutputMode::Human => print_human(report, eff),
    }
}

fn print_json(value: &JsonVal) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("{} cannot render JSON: {}", utils::error_prefix(), e),
    }
}

fn print_human(report: &RunReport, eff: &Effective) {
    let color = use_colors(eff);
    println!("🔍 Scanning {} for SQL issues...", report.target);

    let d = &report.diagnosis;
    let kind = match d.kind {
        IssueKind::TypeCasting => "type_casting",
        IssueKind::Unknown => "unknown",
    };
    println!(
        "📊 Analysis: {} ❲{}❳ → {}",
        kind, d.problem, d.solution
    );

    let s = &report.summary;
    let found = format!(
        "🔍 Found {} potential issues (high={} medium={} low={})",
        s.issues, s.high, s.medium, s.low
    );
    if color {
        println!("{}", found.bold());
    } else {
        println!("{}", found);
    }
    for is in &report.issues {
        let sev = match is.severity {
            Severity::High => {
                if color {
                    "⟦high⟧".red().bold().to_string()
                } else {
                    "⟦high⟧".to_string()
                }
            }
            Severity::Medium => {
                if color {
                    "⟦medium⟧".yellow().bold().to_string()
                } else {
                    "⟦medium⟧".to_string()
                }
            }
            Severity::Low => {
                if color {
                    "⟦low⟧".blue().bold().to_string()
                } else {
                    "⟦low⟧".to_string()
                }
            }
        };
        println!("   L{} {} {} — {}", is.line, sev, is.message, is.content);
    }

    println!("🔧 Applying fixes...");
    for attempt in &report.failed {
        println!("❌ {} attempt failed: {}", attempt.strategy, attempt.error);
    }
    match &report.patch {
        Ok(outcome) => println!("{}", describe_outcome(outcome)),
        Err(_) => println!("❌ All fix attempts failed"),
    }
    print_verdict(report.is_success(), eff);
}

fn describe_outcome(outcome: &PatchOutcome) -> String {
    match (outcome.strategy, outcome.changed) {
        (Strategy::Fallback, true) => "✅ Simple fallback query applied!".to_string(),
        (Strategy::Fallback, false) => format!(
            "✅ Simple fallback query applied! (no betting query block in {}; content unchanged)",
            outcome.path
        ),
        (Strategy::Targeted, _) if outcome.applied.is_empty() => {
            "✅ SQL query fixes applied! (no targeted patterns matched)".to_string()
        }
        (Strategy::Targeted, _) => format!(
            "✅ SQL query fixes applied! ({})",
            outcome.applied.join(", ")
        ),
    }
}

fn print_verdict(success: bool, eff: &Effective) {
    let color = use_colors(eff);
    if success {
        let line = format!("🎉 {} completed successfully!", AGENT_NAME);
        if color {
            println!("{}", line.green().bold());
        } else {
            println!("{}", line);
        }
        println!("🔄 Please restart the backend to apply fixes");
    } else {
        let line = format!("❌ {} failed to fix the issue", AGENT_NAME);
        if color {
            println!("{}", line.red().bold());
        } else {
            println!("{}", line);
        }
        println!("🔍 Manual intervention may be required");
    }
}

/// Compose the report JSON object (pure) for testing/snapshot purposes.
pub fn compose_report_json(report: &RunReport) -> JsonVal {
    let failed: Vec<_> = report
        .failed
        .iter()
        .map(|a| json!({"strategy": a.strategy, "error": a.error.to_string()}))
        .collect();
    let (outcome, error) = match &report.patch {
        Ok(o) => (serde_json::to_value(o).unwrap_or(JsonVal::Null), JsonVal::Null),
        Err(e) => (JsonVal::Null, JsonVal::String(e.to_string())),
    };
    json!({
        "target": report.target,
        "diagnosis": report.diagnosis,
        "issues": report.issues,
        "summary": report.summary,
        "failed": failed,
        "outcome": outcome,
        "success": report.is_success(),
        "error": error,
    })
}

/// Compose the JSON object for a run that stopped before scanning.
pub fn compose_error_json(err: &PatchError) -> JsonVal {
    json!({
        "success": false,
        "error": err.to_string(),
    })
}
