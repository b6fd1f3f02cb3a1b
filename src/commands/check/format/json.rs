//! JSON output formatting for check command

use serde_json::{json, Value};

use titlecheck_core::classifier::Verdict;
use titlecheck_core::engine::{CheckOutcome, DecisionPolicy};
use titlecheck_core::error::Result;

/// Output in JSON format
///
/// A single title prints one object; `--file` batches print an array.
pub fn output_json(outcomes: &[CheckOutcome], policy: DecisionPolicy, batch: bool) -> Result<()> {
    let output = match (batch, outcomes) {
        (false, [outcome]) => outcome_json(outcome, policy),
        _ => Value::Array(outcomes.iter().map(|o| outcome_json(o, policy)).collect()),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// JSON object for one checked title
pub fn outcome_json(outcome: &CheckOutcome, policy: DecisionPolicy) -> Value {
    json!({
        "title": outcome.title,
        "plagiarized": outcome.decision.plagiarized,
        "verdict": Verdict::from(outcome.decision.plagiarized),
        "signals": {
            "classifier": Verdict::from(outcome.decision.classifier_verdict),
            "threshold": outcome.decision.threshold_verdict,
        },
        "degenerate": outcome.degenerate,
        "policy": policy,
        "matches": outcome.matches,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use titlecheck_core::engine::{Decision, TitleMatch};

    #[test]
    fn test_outcome_json_shape() {
        let outcome = CheckOutcome {
            title: "Sistem Informasi".to_string(),
            decision: Decision {
                plagiarized: true,
                classifier_verdict: false,
                threshold_verdict: true,
            },
            matches: vec![TitleMatch {
                rank: 1,
                index: 4,
                title: "Sistem Informasi Akademik".to_string(),
                score: 0.8123,
                percent: 81.23,
            }],
            degenerate: false,
        };

        let value = outcome_json(&outcome, DecisionPolicy::default());
        assert_eq!(value["verdict"], "plagiarized");
        assert_eq!(value["signals"]["classifier"], "original");
        assert_eq!(value["signals"]["threshold"], true);
        assert_eq!(value["policy"]["top_k"], 3);
        assert_eq!(value["matches"][0]["index"], 4);
        assert_eq!(value["matches"][0]["percent"], 81.23);
    }
}
