//! `titlecheck check`: rank a title against the corpus and decide

pub mod format;
pub mod report;

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::cli::{CheckArgs, Cli};
use crate::commands::dispatch::CommandContext;
use crate::output_by_format_result;
use titlecheck_core::config::DecisionConfig;
use titlecheck_core::engine::{self, Decision, DecisionEngine, DecisionPolicy};
use titlecheck_core::error::{Result, TitlecheckError};
use titlecheck_core::{bail_usage, trace_time};

pub fn execute(ctx: &CommandContext, args: &CheckArgs) -> Result<()> {
    let titles = collect_titles(ctx, args)?;

    let config = ctx.load_config()?;
    let policy = resolve_policy(&config.decision, args)?;
    let check_context = ctx.load_check_context(&config)?;
    let decision_engine = DecisionEngine::new(&check_context, policy);

    let outcomes = titles
        .iter()
        .map(|title| decision_engine.check(title))
        .collect::<Result<Vec<_>>>()?;
    trace_time!(ctx.start, "check_all", titles = outcomes.len());

    if let Some(path) = &args.report {
        let path = ctx.resolve(path);
        report::write_report(&path, &outcomes, policy)?;
        debug!(path = %path.display(), "report_written");
    }

    let batch = args.file.is_some();
    output_by_format_result!(ctx.cli.format,
        json => format::output_json(&outcomes, policy, batch),
        human => { format::output_human(ctx.cli, &outcomes, policy) },
        records => { format::output_records(&outcomes, policy) }
    )
}

/// Titles to check, validated before any artifact is loaded
fn collect_titles(ctx: &CommandContext, args: &CheckArgs) -> Result<Vec<String>> {
    match (&args.title, &args.file) {
        (Some(title), _) => Ok(vec![engine::validate(title)?]),
        (None, Some(path)) => read_title_file(ctx.cli, &ctx.resolve(path)),
        (None, None) => bail_usage!("provide a TITLE or --file <path>"),
    }
}

fn read_title_file(cli: &Cli, path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| {
        TitlecheckError::failed_operation(&format!("read titles {}", path.display()), e)
    })?;

    let mut titles = Vec::new();
    for (line_no, line) in content.lines().enumerate() {
        match engine::validate(line) {
            Ok(title) => titles.push(title),
            Err(TitlecheckError::EmptyInput) => {
                debug!(line = line_no + 1, "skipping blank title");
                if !cli.quiet {
                    eprintln!(
                        "warning: line {}: {}",
                        line_no + 1,
                        TitlecheckError::EmptyInput
                    );
                }
            }
            Err(e) => return Err(e),
        }
    }

    if titles.is_empty() {
        bail_usage!(format!("no titles to check in {}", path.display()));
    }
    Ok(titles)
}

/// Config values overridden by `--top-k` and `--threshold`
fn resolve_policy(config: &DecisionConfig, args: &CheckArgs) -> Result<DecisionPolicy> {
    DecisionPolicy::new(
        args.top_k.unwrap_or(config.top_k),
        args.threshold.unwrap_or(config.threshold),
    )
}

/// Which signal produced the verdict
pub fn decision_reason(decision: &Decision) -> &'static str {
    match (decision.classifier_verdict, decision.threshold_verdict) {
        (true, true) => "classifier and similarity threshold",
        (true, false) => "classifier",
        (false, true) => "similarity threshold",
        (false, false) => "no signal",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(top_k: Option<usize>, threshold: Option<f64>) -> CheckArgs {
        CheckArgs {
            title: Some("Judul".to_string()),
            file: None,
            top_k,
            threshold,
            report: None,
        }
    }

    #[test]
    fn test_resolve_policy_prefers_flags() {
        let config = DecisionConfig {
            top_k: 3,
            threshold: 40.0,
        };

        let policy = resolve_policy(&config, &args(None, None)).unwrap();
        assert_eq!((policy.top_k(), policy.threshold()), (3, 40.0));

        let policy = resolve_policy(&config, &args(Some(7), Some(65.0))).unwrap();
        assert_eq!((policy.top_k(), policy.threshold()), (7, 65.0));
    }

    #[test]
    fn test_decision_reason() {
        let decision = Decision {
            plagiarized: true,
            classifier_verdict: false,
            threshold_verdict: true,
        };
        assert_eq!(decision_reason(&decision), "similarity threshold");

        let decision = Decision {
            plagiarized: false,
            classifier_verdict: false,
            threshold_verdict: false,
        };
        assert_eq!(decision_reason(&decision), "no signal");
    }
}
