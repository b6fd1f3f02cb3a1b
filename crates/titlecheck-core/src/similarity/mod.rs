//! Similarity ranking over the indexed corpus

mod duplicates;

pub use duplicates::{find_all_duplicates, DuplicatePair};

use serde::Serialize;
use tracing::trace;

use crate::vectorize::SparseVector;

/// One corpus entry and its similarity to a query
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedMatch {
    /// Corpus position
    pub index: usize,
    /// Cosine similarity (0.0 to 1.0)
    pub score: f64,
}

impl RankedMatch {
    /// Score as a percentage rounded to two decimals
    pub fn percent(&self) -> f64 {
        to_percent(self.score)
    }
}

/// Ranked neighbours for one query, best first
pub type RankedResult = Vec<RankedMatch>;

/// Convert a similarity score to a percentage rounded to two decimals
pub fn to_percent(score: f64) -> f64 {
    (score * 100.0 * 100.0).round() / 100.0
}

/// Cosine similarity between two sparse vectors
///
/// Returns 0.0 when either vector is zero. The result is clamped to
/// `[0.0, 1.0]`, which also absorbs rounding noise on identical vectors.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let norm_a = a.norm();
    let norm_b = b.norm();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (a.dot(b) / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Rank every corpus vector against `query` and keep the best `k`
///
/// Sorting is stable, so equal scores keep corpus order. Returns
/// `min(k, corpus.len())` matches.
pub fn rank(query: &SparseVector, corpus: &[SparseVector], k: usize) -> RankedResult {
    let mut results: RankedResult = corpus
        .iter()
        .enumerate()
        .map(|(index, vector)| RankedMatch {
            index,
            score: cosine_similarity(query, vector),
        })
        .collect();

    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results.truncate(k);

    trace!(
        corpus = corpus.len(),
        k,
        top = results.first().map(|m| m.score),
        "rank"
    );
    results
}

#[cfg(test)]
mod tests;
