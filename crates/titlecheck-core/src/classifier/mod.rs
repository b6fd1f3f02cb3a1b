//! Pre-trained plagiarism classifiers
//!
//! The decision engine only sees the [`Classifier`] trait. Concrete model
//! families are loaded from a JSON artifact tagged by `kind`.

mod forest;
mod linear;

pub use forest::{DecisionTree, RandomForest, TreeNode};
pub use linear::LogisticRegression;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::vectorize::SparseVector;

/// Binary classifier output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Plagiarized,
    Original,
}

impl Verdict {
    pub fn is_plagiarized(self) -> bool {
        self == Verdict::Plagiarized
    }
}

impl From<bool> for Verdict {
    fn from(plagiarized: bool) -> Self {
        if plagiarized {
            Verdict::Plagiarized
        } else {
            Verdict::Original
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Plagiarized => write!(f, "plagiarized"),
            Verdict::Original => write!(f, "original"),
        }
    }
}

/// A fitted binary predictor over title vectors
pub trait Classifier: Send + Sync {
    /// Predict whether the vectorized title is plagiarized
    fn predict(&self, vector: &SparseVector) -> Verdict;

    /// Short name of the model family
    fn kind(&self) -> &'static str;
}

/// Serialized classifier artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifierModel {
    RandomForest(RandomForest),
    LogisticRegression(LogisticRegression),
}

impl ClassifierModel {
    /// Parse and validate a classifier artifact
    pub fn from_json(json: &str) -> Result<Self> {
        let model: ClassifierModel = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }

    /// Check structural invariants of the model
    pub fn validate(&self) -> Result<()> {
        match self {
            ClassifierModel::RandomForest(forest) => forest.validate(),
            ClassifierModel::LogisticRegression(linear) => linear.validate(),
        }
    }

    /// Number of features the model expects, when known
    pub fn n_features(&self) -> Option<usize> {
        match self {
            ClassifierModel::RandomForest(forest) => forest.n_features,
            ClassifierModel::LogisticRegression(linear) => Some(linear.weights.len()),
        }
    }

    /// Turn the artifact into a shareable predictor
    pub fn into_classifier(self) -> Box<dyn Classifier> {
        match self {
            ClassifierModel::RandomForest(forest) => Box::new(forest),
            ClassifierModel::LogisticRegression(linear) => Box::new(linear),
        }
    }
}
