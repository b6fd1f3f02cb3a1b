//! `titlecheck build`: fit a vectorizer on the corpus and save it

use std::path::PathBuf;

use serde_json::json;
use tracing::info;

use crate::cli::BuildArgs;
use crate::commands::dispatch::CommandContext;
use crate::output_by_format_result;
use titlecheck_core::artifacts::{load_corpus, save_vectorizer};
use titlecheck_core::error::Result;
use titlecheck_core::index::TitleIndex;
use titlecheck_core::records::{header, quoted};

/// Output file used when neither `--output` nor `[artifacts] vectorizer` is set
pub const DEFAULT_VECTORIZER_FILE: &str = "vectorizer.json";

pub fn execute(ctx: &CommandContext, args: &BuildArgs) -> Result<()> {
    let config = ctx.load_config()?;

    let corpus = match &args.corpus {
        Some(path) => ctx.resolve(path),
        None => config.artifacts.corpus.clone(),
    };
    let output: PathBuf = match (&args.output, &config.artifacts.vectorizer) {
        (Some(path), _) => ctx.resolve(path),
        (None, Some(configured)) => configured.clone(),
        (None, None) => ctx.cwd.join(DEFAULT_VECTORIZER_FILE),
    };

    let titles = load_corpus(&corpus)?;
    let index = TitleIndex::build(titles, config.vectorizer.clone())?;
    let vectorizer = index.vectorizer();
    save_vectorizer(vectorizer, &output)?;

    let fingerprint = vectorizer.fingerprint();
    info!(
        titles = index.len(),
        vocabulary = vectorizer.vocabulary_len(),
        output = %output.display(),
        "vectorizer_built"
    );

    output_by_format_result!(ctx.cli.format,
        json => {
            let value = json!({
                "corpus": corpus.display().to_string(),
                "output": output.display().to_string(),
                "titles": index.len(),
                "vocabulary": vectorizer.vocabulary_len(),
                "fingerprint": fingerprint,
                "options": vectorizer.options(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        },
        human => {
            if !ctx.cli.quiet {
                println!(
                    "Fitted {} terms from {} titles",
                    vectorizer.vocabulary_len(),
                    index.len()
                );
                println!("Fingerprint: {}", fingerprint);
            }
            println!("Wrote {}", output.display());
        },
        records => {
            println!(
                "{} titles={} vocabulary={} fingerprint={} output={}",
                header("build"),
                index.len(),
                vectorizer.vocabulary_len(),
                fingerprint,
                quoted(&output.display().to_string())
            );
        }
    )
}
