//! Markdown report for checked titles

use std::fs;
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};

use super::decision_reason;
use titlecheck_core::engine::{CheckOutcome, DecisionPolicy};
use titlecheck_core::error::{Result, TitlecheckError};

/// Render and write the report, creating parent directories
pub fn write_report(path: &Path, outcomes: &[CheckOutcome], policy: DecisionPolicy) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let content = render_report(outcomes, policy, Utc::now());
    fs::write(path, content).map_err(|e| {
        TitlecheckError::failed_operation(&format!("write report {}", path.display()), e)
    })
}

pub fn render_report(
    outcomes: &[CheckOutcome],
    policy: DecisionPolicy,
    generated: DateTime<Utc>,
) -> String {
    let mut out = String::from("# Title Plagiarism Report\n\n");
    out.push_str(&format!(
        "Generated: {}\n",
        generated.to_rfc3339_opts(SecondsFormat::Secs, true)
    ));
    out.push_str(&format!(
        "Policy: top {} matches, similarity threshold {:.2}%\n",
        policy.top_k(),
        policy.threshold()
    ));

    for outcome in outcomes {
        let decision = &outcome.decision;
        out.push_str(&format!("\n## {}\n\n", outcome.title));
        if decision.plagiarized {
            out.push_str(&format!(
                "**Verdict:** Plagiarized (flagged by {})\n",
                decision_reason(decision)
            ));
        } else {
            out.push_str("**Verdict:** Original\n");
        }
        if outcome.degenerate {
            out.push_str("\n_No word of this title appears in the corpus vocabulary._\n");
        }

        out.push_str("\n| # | Similarity | Title |\n");
        out.push_str("|---|-----------:|-------|\n");
        for m in &outcome.matches {
            out.push_str(&format!(
                "| {} | {:.2}% | {} |\n",
                m.rank,
                m.percent,
                escape_cell(&m.title)
            ));
        }
    }

    out
}

fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|")
}
