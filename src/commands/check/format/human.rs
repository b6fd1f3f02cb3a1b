//! Human-readable output formatting for check command

use crate::cli::Cli;
use crate::commands::check::decision_reason;
use titlecheck_core::engine::{CheckOutcome, DecisionPolicy};

/// Output in human-readable format
pub fn output_human(cli: &Cli, outcomes: &[CheckOutcome], policy: DecisionPolicy) {
    for (i, outcome) in outcomes.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_outcome(cli, outcome, policy);
    }
}

fn print_outcome(cli: &Cli, outcome: &CheckOutcome, policy: DecisionPolicy) {
    let decision = &outcome.decision;
    let verdict = if decision.plagiarized {
        "PLAGIARIZED"
    } else {
        "ORIGINAL"
    };

    println!("{} {}", verdict, outcome.title);
    if decision.plagiarized {
        println!("  Flagged by: {}", decision_reason(decision));
    }

    if let Some(top) = outcome.top() {
        let label = if decision.plagiarized {
            "Similar to"
        } else {
            "Highest similarity"
        };
        println!("  {}: {} ({:.2}%)", label, top.title, top.percent);
    }

    if outcome.degenerate && !cli.quiet {
        println!("  Note: no word of this title appears in the corpus vocabulary");
    }

    if cli.quiet {
        return;
    }

    println!(
        "  Top {} (threshold {:.2}%):",
        outcome.matches.len(),
        policy.threshold()
    );
    for m in &outcome.matches {
        println!("  {:>3}. {:>6.2}%  {}", m.rank, m.percent, m.title);
    }
}
