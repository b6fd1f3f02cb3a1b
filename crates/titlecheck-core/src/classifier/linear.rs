use serde::{Deserialize, Serialize};

use crate::classifier::{Classifier, Verdict};
use crate::error::Result;
use crate::vectorize::SparseVector;

/// Binary logistic regression over TF-IDF features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    /// Dense weights by feature index; missing trailing weights count as zero
    pub weights: Vec<f64>,
    #[serde(default)]
    pub intercept: f64,
}

impl LogisticRegression {
    pub fn validate(&self) -> Result<()> {
        if !self.intercept.is_finite() {
            crate::bail_invalid!("logistic regression intercept", self.intercept);
        }
        if let Some(bad) = self.weights.iter().find(|w| !w.is_finite()) {
            crate::bail_invalid!("logistic regression weight", bad);
        }
        Ok(())
    }

    /// Raw decision value `w . x + b`
    pub fn decision_function(&self, vector: &SparseVector) -> f64 {
        vector.dot_dense(&self.weights) + self.intercept
    }
}

impl Classifier for LogisticRegression {
    fn predict(&self, vector: &SparseVector) -> Verdict {
        Verdict::from(self.decision_function(vector) > 0.0)
    }

    fn kind(&self) -> &'static str {
        "logistic_regression"
    }
}
