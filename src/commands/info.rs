//! `titlecheck info`: describe the loaded artifacts and decision policy

use serde_json::json;

use crate::commands::dispatch::CommandContext;
use crate::output_by_format_result;
use titlecheck_core::engine::DecisionPolicy;
use titlecheck_core::error::Result;
use titlecheck_core::records::{header, quoted};

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let config = ctx.load_config()?;
    let policy = DecisionPolicy::try_from(&config.decision)?;
    let check_context = ctx.load_check_context(&config)?;

    let index = check_context.index();
    let vectorizer = index.vectorizer();
    let classifier = check_context.classifier().kind();
    let corpus = config.artifacts.corpus.display().to_string();
    let vectorizer_source = match &config.artifacts.vectorizer {
        Some(path) => path.display().to_string(),
        None => "fitted at load".to_string(),
    };

    output_by_format_result!(ctx.cli.format,
        json => {
            let value = json!({
                "corpus": {"path": corpus, "titles": index.len()},
                "vectorizer": {
                    "source": vectorizer_source,
                    "vocabulary": vectorizer.vocabulary_len(),
                    "fingerprint": vectorizer.fingerprint(),
                    "options": vectorizer.options(),
                },
                "classifier": {
                    "path": config.artifacts.classifier.display().to_string(),
                    "kind": classifier,
                },
                "policy": policy,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        },
        human => {
            println!("Corpus:      {} ({} titles)", corpus, index.len());
            println!(
                "Vectorizer:  {} ({} terms)",
                vectorizer_source,
                vectorizer.vocabulary_len()
            );
            println!("Fingerprint: {}", vectorizer.fingerprint());
            println!(
                "Classifier:  {} ({})",
                config.artifacts.classifier.display(),
                classifier
            );
            println!(
                "Policy:      top {} matches, threshold {:.2}%",
                policy.top_k(),
                policy.threshold()
            );
        },
        records => {
            println!(
                "{} corpus={} titles={} vocabulary={} fingerprint={} classifier={} top_k={} threshold={:.2}",
                header("info"),
                quoted(&corpus),
                index.len(),
                vectorizer.vocabulary_len(),
                vectorizer.fingerprint(),
                classifier,
                policy.top_k(),
                policy.threshold()
            );
        }
    )
}
