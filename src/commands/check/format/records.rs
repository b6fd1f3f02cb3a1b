//! Records output formatting for check command

use titlecheck_core::classifier::Verdict;
use titlecheck_core::engine::{CheckOutcome, DecisionPolicy};
use titlecheck_core::records::{header, quoted};

/// Output in records format
pub fn output_records(outcomes: &[CheckOutcome], policy: DecisionPolicy) {
    for outcome in outcomes {
        for line in outcome_records(outcome, policy) {
            println!("{}", line);
        }
    }
}

/// `H` line for the title followed by one `M` line per match
pub fn outcome_records(outcome: &CheckOutcome, policy: DecisionPolicy) -> Vec<String> {
    let decision = &outcome.decision;
    let mut lines = Vec::with_capacity(outcome.matches.len() + 1);

    lines.push(format!(
        "{} title={} verdict={} classifier={} over_threshold={} top_k={} threshold={:.2} matches={}{}",
        header("check"),
        quoted(&outcome.title),
        Verdict::from(decision.plagiarized),
        Verdict::from(decision.classifier_verdict),
        decision.threshold_verdict,
        policy.top_k(),
        policy.threshold(),
        outcome.matches.len(),
        if outcome.degenerate { " degenerate=true" } else { "" }
    ));

    for m in &outcome.matches {
        lines.push(format!(
            "M {} {:.2} index={} {}",
            m.rank,
            m.percent,
            m.index,
            quoted(&m.title)
        ));
    }

    lines
}
