use serde::Serialize;

use crate::index::TitleIndex;
use crate::similarity::cosine_similarity;

/// Two corpus titles that look like duplicates of each other
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DuplicatePair {
    /// Earlier corpus position
    pub first: usize,
    /// Later corpus position
    pub second: usize,
    /// Cosine similarity (0.0 to 1.0)
    pub score: f64,
}

/// Find all near-duplicate pairs inside the corpus
///
/// Returns every pair `first < second` with similarity >= threshold, sorted by
/// score in descending order and then by corpus position. Titles with no
/// vocabulary term never pair, even at a zero threshold.
pub fn find_all_duplicates(index: &TitleIndex, threshold: f64) -> Vec<DuplicatePair> {
    let vectors = index.vectors();
    let mut duplicates = Vec::new();

    for i in 0..vectors.len() {
        if vectors[i].is_zero() {
            continue;
        }
        for j in i + 1..vectors.len() {
            if vectors[j].is_zero() {
                continue;
            }
            let score = cosine_similarity(&vectors[i], &vectors[j]);
            if score >= threshold {
                duplicates.push(DuplicatePair {
                    first: i,
                    second: j,
                    score,
                });
            }
        }
    }

    // Pairs are generated in (first, second) order, so a stable sort keeps it for ties
    duplicates.sort_by(|a, b| b.score.total_cmp(&a.score));
    duplicates
}
