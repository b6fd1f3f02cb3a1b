//! Plagiarism decision engine
//!
//! A check runs `validate -> encode -> rank -> decide`. The final verdict is
//! the classifier verdict OR the threshold override: either signal alone
//! flags the title.

mod context;

pub use context::CheckContext;

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, warn};

use crate::classifier::Classifier;
use crate::config::{DecisionConfig, DEFAULT_THRESHOLD, DEFAULT_TOP_K};
use crate::error::{Result, TitlecheckError};
use crate::similarity::{rank, RankedMatch};
use crate::trace_time;
use crate::vectorize::SparseVector;

/// Tunable parameters of the decision rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DecisionPolicy {
    top_k: usize,
    threshold: f64,
}

impl DecisionPolicy {
    /// Create a policy; `top_k` must be positive and `threshold` a finite,
    /// non-negative percentage
    pub fn new(top_k: usize, threshold: f64) -> Result<Self> {
        if top_k == 0 {
            crate::bail_invalid!("top_k", top_k);
        }
        if !threshold.is_finite() || threshold < 0.0 {
            crate::bail_invalid!("threshold", threshold);
        }
        Ok(Self { top_k, threshold })
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for DecisionPolicy {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl TryFrom<&DecisionConfig> for DecisionPolicy {
    type Error = TitlecheckError;

    fn try_from(config: &DecisionConfig) -> Result<Self> {
        DecisionPolicy::new(config.top_k, config.threshold)
    }
}

/// Trim a raw title, rejecting blank input
pub fn validate(raw_title: &str) -> Result<String> {
    let title = raw_title.trim();
    if title.is_empty() {
        return Err(TitlecheckError::EmptyInput);
    }
    Ok(title.to_string())
}

/// True when `score` (0.0 to 1.0) reaches `threshold` percent
pub fn threshold_verdict(score: f64, threshold: f64) -> bool {
    score * 100.0 >= threshold
}

/// Outcome of the decision rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decision {
    /// Final verdict
    pub plagiarized: bool,
    /// What the classifier said on its own
    pub classifier_verdict: bool,
    /// Whether the best match reached the similarity threshold
    pub threshold_verdict: bool,
}

/// Combine the classifier verdict with the similarity threshold override
///
/// An empty ranking never triggers the override.
pub fn decide(
    query: &SparseVector,
    classifier: &dyn Classifier,
    ranked: &[RankedMatch],
    threshold: f64,
) -> Decision {
    let classifier_verdict = classifier.predict(query).is_plagiarized();
    let threshold_verdict = ranked
        .first()
        .is_some_and(|top| threshold_verdict(top.score, threshold));

    Decision {
        plagiarized: classifier_verdict || threshold_verdict,
        classifier_verdict,
        threshold_verdict,
    }
}

/// A ranked corpus title
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleMatch {
    /// 1-based position in the ranking
    pub rank: usize,
    /// Corpus position
    pub index: usize,
    pub title: String,
    /// Cosine similarity (0.0 to 1.0)
    pub score: f64,
    /// Similarity percentage rounded to two decimals
    pub percent: f64,
}

/// Result of checking one title
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckOutcome {
    /// The trimmed title that was checked
    pub title: String,
    pub decision: Decision,
    /// Most similar corpus titles, best first
    pub matches: Vec<TitleMatch>,
    /// The title shares no term with the vocabulary
    pub degenerate: bool,
}

impl CheckOutcome {
    /// Most similar corpus title
    pub fn top(&self) -> Option<&TitleMatch> {
        self.matches.first()
    }
}

/// Runs checks against a loaded context
#[derive(Debug, Clone, Copy)]
pub struct DecisionEngine<'a> {
    context: &'a CheckContext,
    policy: DecisionPolicy,
}

impl<'a> DecisionEngine<'a> {
    pub fn new(context: &'a CheckContext, policy: DecisionPolicy) -> Self {
        Self { context, policy }
    }

    pub fn policy(&self) -> DecisionPolicy {
        self.policy
    }

    /// Check one raw title
    ///
    /// Fails only with [`TitlecheckError::EmptyInput`]; everything after
    /// validation is infallible.
    pub fn check(&self, raw_title: &str) -> Result<CheckOutcome> {
        let start = Instant::now();
        let title = validate(raw_title)?;

        let index = self.context.index();
        let query = index.encode(&title);
        let degenerate = query.is_zero();
        if degenerate {
            warn!(title = %title, "degenerate query vector: no known terms");
        }

        let ranked = rank(&query, index.vectors(), self.policy.top_k);
        let decision = decide(
            &query,
            self.context.classifier(),
            &ranked,
            self.policy.threshold,
        );

        let matches = ranked
            .iter()
            .enumerate()
            .map(|(i, m)| TitleMatch {
                rank: i + 1,
                index: m.index,
                title: index.title(m.index).unwrap_or_default().to_string(),
                score: m.score,
                percent: m.percent(),
            })
            .collect();

        debug!(
            title = %title,
            terms = query.nnz(),
            plagiarized = decision.plagiarized,
            classifier = decision.classifier_verdict,
            threshold = decision.threshold_verdict,
            "check"
        );
        trace_time!(start, "check");

        Ok(CheckOutcome {
            title,
            decision,
            matches,
            degenerate,
        })
    }
}
