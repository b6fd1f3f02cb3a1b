//! Startup loading of the corpus, vectorizer and classifier
//!
//! Any failure here is fatal: a [`CheckContext`] is only produced when all
//! three artifacts are available.

use std::fs;
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

use crate::classifier::ClassifierModel;
use crate::config::ArtifactsConfig;
use crate::engine::CheckContext;
use crate::error::{Result, TitlecheckError};
use crate::index::TitleIndex;
use crate::map_load_err;
use crate::trace_time;
use crate::vectorize::{TfidfVectorizer, VectorizerOptions};

/// Read the historical title corpus
///
/// `.json` files hold an array of strings; anything else is read as one title
/// per line. Titles are trimmed and blank entries skipped.
pub fn load_corpus(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(map_load_err!("corpus", path))?;

    let raw: Vec<String> = if has_json_extension(path) {
        serde_json::from_str(&content).map_err(map_load_err!("corpus", path))?
    } else {
        content.lines().map(str::to_string).collect()
    };

    let titles: Vec<String> = raw
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    if titles.is_empty() {
        return Err(TitlecheckError::artifact_load(
            "corpus",
            path,
            "no titles found",
        ));
    }

    debug!(path = %path.display(), titles = titles.len(), "corpus_loaded");
    Ok(titles)
}

/// Read a fitted vectorizer artifact
pub fn load_vectorizer(path: &Path) -> Result<TfidfVectorizer> {
    let content = fs::read_to_string(path).map_err(map_load_err!("vectorizer", path))?;
    let vectorizer =
        TfidfVectorizer::from_json(&content).map_err(map_load_err!("vectorizer", path))?;

    debug!(
        path = %path.display(),
        vocabulary = vectorizer.vocabulary_len(),
        "vectorizer_loaded"
    );
    Ok(vectorizer)
}

/// Write a fitted vectorizer artifact
pub fn save_vectorizer(vectorizer: &TfidfVectorizer, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, vectorizer.to_json()?)?;
    Ok(())
}

/// Read a classifier artifact
pub fn load_classifier(path: &Path) -> Result<ClassifierModel> {
    let content = fs::read_to_string(path).map_err(map_load_err!("classifier", path))?;
    let model = ClassifierModel::from_json(&content).map_err(map_load_err!("classifier", path))?;

    debug!(
        path = %path.display(),
        n_features = ?model.n_features(),
        "classifier_loaded"
    );
    Ok(model)
}

/// Load the corpus and vectorize it
///
/// Without a configured vectorizer artifact the vectorizer is fitted on the
/// corpus here, once, with `options`.
pub fn load_index(artifacts: &ArtifactsConfig, options: &VectorizerOptions) -> Result<TitleIndex> {
    let titles = load_corpus(&artifacts.corpus)?;
    match &artifacts.vectorizer {
        Some(path) => Ok(TitleIndex::from_parts(titles, load_vectorizer(path)?)),
        None => {
            info!("no vectorizer artifact configured, fitting on corpus");
            TitleIndex::build(titles, options.clone())
                .map_err(map_load_err!("vectorizer", &artifacts.corpus))
        }
    }
}

/// Load every artifact and assemble the shared check context
pub fn load_context(
    artifacts: &ArtifactsConfig,
    options: &VectorizerOptions,
) -> Result<CheckContext> {
    let start = Instant::now();

    let index = load_index(artifacts, options)?;
    let model = load_classifier(&artifacts.classifier)?;
    debug!(
        vocabulary = index.vectorizer().vocabulary_len(),
        classifier_features = ?model.n_features(),
        "artifacts_loaded"
    );

    trace_time!(start, "load_context", titles = index.len());
    Ok(CheckContext::new(index, model.into_classifier()))
}

fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}
