//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::vectorize::VectorizerOptions;

/// Default number of neighbours reported per check
pub const DEFAULT_TOP_K: usize = 3;

/// Default similarity percentage at which a title is flagged regardless of the classifier
pub const DEFAULT_THRESHOLD: f64 = 40.0;

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TitlecheckConfig {
    /// Paths to the artifacts loaded at startup
    #[serde(default)]
    pub artifacts: ArtifactsConfig,

    /// Decision policy
    #[serde(default)]
    pub decision: DecisionConfig,

    /// Options used when fitting a vectorizer
    #[serde(default)]
    pub vectorizer: VectorizerOptions,
}

/// Artifact locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactsConfig {
    /// Historical title corpus (`.json` array or one title per line)
    #[serde(default = "default_corpus_path")]
    pub corpus: PathBuf,

    /// Fitted vectorizer; fitted from the corpus at load time when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vectorizer: Option<PathBuf>,

    /// Pre-trained classifier
    #[serde(default = "default_classifier_path")]
    pub classifier: PathBuf,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            corpus: default_corpus_path(),
            vectorizer: None,
            classifier: default_classifier_path(),
        }
    }
}

/// Decision policy configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecisionConfig {
    /// Number of most similar titles to report
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Similarity percentage (0-100) that flags a title on its own
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            threshold: default_threshold(),
        }
    }
}

fn default_corpus_path() -> PathBuf {
    PathBuf::from("corpus.txt")
}

fn default_classifier_path() -> PathBuf {
    PathBuf::from("classifier.json")
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}
