use serde::{Deserialize, Serialize};

/// Sparse feature vector
///
/// Entries are kept sorted by strictly increasing feature index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Build a vector from arbitrary `(index, weight)` pairs
    ///
    /// Duplicate indices are summed and zero weights dropped.
    pub fn from_pairs(mut pairs: Vec<(usize, f64)>) -> Self {
        pairs.sort_by_key(|(index, _)| *index);

        let mut entries: Vec<(usize, f64)> = Vec::with_capacity(pairs.len());
        for (index, weight) in pairs {
            match entries.last_mut() {
                Some((last, acc)) if *last == index => *acc += weight,
                _ => entries.push((index, weight)),
            }
        }
        entries.retain(|(_, weight)| *weight != 0.0);

        SparseVector { entries }
    }

    /// Non-zero entries in index order
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// Number of non-zero entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// True when no feature has a weight
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Weight of a single feature, zero when absent
    pub fn get(&self, index: usize) -> f64 {
        self.entries
            .binary_search_by_key(&index, |(i, _)| *i)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }

    /// Euclidean norm
    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Dot product with another sparse vector (merge walk over both)
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (a, b) = (&self.entries, &other.entries);
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;

        while i < a.len() && j < b.len() {
            match a[i].0.cmp(&b[j].0) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a[i].1 * b[j].1;
                    i += 1;
                    j += 1;
                }
            }
        }

        sum
    }

    /// Dot product with a dense weight vector; indices past its end count as zero
    pub fn dot_dense(&self, dense: &[f64]) -> f64 {
        self.entries
            .iter()
            .filter_map(|(i, w)| dense.get(*i).map(|d| d * w))
            .sum()
    }

    /// Rewrite every weight in place from `(index, weight)`
    pub(crate) fn map_weights(&mut self, f: impl Fn(usize, f64) -> f64) {
        for (index, weight) in &mut self.entries {
            *weight = f(*index, *weight);
        }
    }

    /// Scale to unit length; zero vectors are left untouched
    pub fn l2_normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, w) in &mut self.entries {
                *w /= norm;
            }
        }
    }
}
