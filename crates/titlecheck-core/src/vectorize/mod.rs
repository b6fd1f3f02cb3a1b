//! TF-IDF vectorization of titles
//!
//! A [`TfidfVectorizer`] is fitted once on the historical corpus and then only
//! used to transform text. Its vocabulary is sorted so that fitting the same
//! corpus with the same options always yields the same feature indices.

mod sparse;

pub use sparse::SparseVector;

use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::{Result, TitlecheckError};
use crate::text::{ngrams, tokenize, TokenizerOptions};

/// Current vectorizer artifact format version
pub const VECTORIZER_FORMAT_VERSION: u32 = 1;

/// Normalization applied to each transformed vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    /// Scale to unit Euclidean length
    #[default]
    L2,
    /// Leave raw TF-IDF weights
    None,
}

/// Options used when fitting a vectorizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorizerOptions {
    /// Lowercase text before tokenizing
    #[serde(default = "default_true")]
    pub lowercase: bool,

    /// Inclusive range of word n-gram sizes
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),

    /// Replace raw term counts with `1 + ln(count)`
    #[serde(default)]
    pub sublinear_tf: bool,

    /// Add one to document frequencies as if an extra document held every term
    #[serde(default = "default_true")]
    pub smooth_idf: bool,

    /// Vector normalization
    #[serde(default)]
    pub norm: Norm,

    /// Apply English Porter stemming to tokens
    #[serde(default)]
    pub stemming: bool,

    /// Terms excluded from the vocabulary
    #[serde(default)]
    pub stop_words: Vec<String>,
}

impl Default for VectorizerOptions {
    fn default() -> Self {
        Self {
            lowercase: true,
            ngram_range: default_ngram_range(),
            sublinear_tf: false,
            smooth_idf: true,
            norm: Norm::L2,
            stemming: false,
            stop_words: Vec::new(),
        }
    }
}

impl VectorizerOptions {
    /// Reject option combinations that cannot produce terms
    pub fn validate(&self) -> Result<()> {
        let (min_n, max_n) = self.ngram_range;
        if min_n == 0 || min_n > max_n {
            crate::bail_invalid!("ngram_range", format!("[{}, {}]", min_n, max_n));
        }
        Ok(())
    }
}

fn default_true() -> bool {
    true
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

/// Serialized form of a fitted vectorizer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerArtifact {
    pub version: u32,
    pub options: VectorizerOptions,
    pub vocabulary: BTreeMap<String, usize>,
    pub idf: Vec<f64>,
}

/// Fitted TF-IDF vectorizer
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    options: VectorizerOptions,
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
    stop_words: HashSet<String>,
}

impl TfidfVectorizer {
    /// Fit a vectorizer on `corpus` and return it with the corpus vectors
    ///
    /// The returned vectors are parallel to `corpus`.
    pub fn fit<S: AsRef<str>>(
        corpus: &[S],
        options: VectorizerOptions,
    ) -> Result<(Self, Vec<SparseVector>)> {
        options.validate()?;
        let stop_words = stop_word_set(&options);

        let analyzed: Vec<Vec<String>> = corpus
            .iter()
            .map(|doc| analyze_with(doc.as_ref(), &options, &stop_words))
            .collect();

        let mut doc_freq: BTreeMap<&str, usize> = BTreeMap::new();
        for terms in &analyzed {
            let unique: BTreeSet<&str> = terms.iter().map(String::as_str).collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let total_docs = corpus.len() as f64;
        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(doc_freq.len());
        for (index, (term, df)) in doc_freq.into_iter().enumerate() {
            vocabulary.insert(term.to_string(), index);
            idf.push(inverse_document_frequency(
                total_docs,
                df as f64,
                options.smooth_idf,
            ));
        }

        let vectorizer = TfidfVectorizer {
            options,
            vocabulary,
            idf,
            stop_words,
        };

        let vectors = analyzed
            .iter()
            .map(|terms| vectorizer.weigh(terms))
            .collect();

        debug!(
            documents = corpus.len(),
            vocabulary = vectorizer.vocabulary.len(),
            "vectorizer_fitted"
        );

        Ok((vectorizer, vectors))
    }

    /// Encode text with the fitted vocabulary
    ///
    /// Terms outside the vocabulary contribute nothing; text without any known
    /// term yields the zero vector.
    pub fn transform(&self, text: &str) -> SparseVector {
        let terms = self.analyze(text);
        self.weigh(&terms)
    }

    /// Split text into the terms this vectorizer counts
    pub fn analyze(&self, text: &str) -> Vec<String> {
        analyze_with(text, &self.options, &self.stop_words)
    }

    fn weigh(&self, terms: &[String]) -> SparseVector {
        let counts = terms
            .iter()
            .filter_map(|term| self.vocabulary.get(term))
            .map(|&index| (index, 1.0))
            .collect();

        let mut vector = SparseVector::from_pairs(counts);
        let sublinear = self.options.sublinear_tf;
        vector.map_weights(|index, tf| {
            let tf = if sublinear { 1.0 + tf.ln() } else { tf };
            tf * self.idf[index]
        });

        if self.options.norm == Norm::L2 {
            vector.l2_normalize();
        }
        vector
    }

    /// Options the vectorizer was fitted with
    pub fn options(&self) -> &VectorizerOptions {
        &self.options
    }

    /// Number of distinct terms
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Feature index of a term
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// Inverse document frequency of a term
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.term_index(term).map(|index| self.idf[index])
    }

    /// Hex SHA-256 over options, vocabulary and idf weights
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.options).as_bytes());
        for (term, &index) in &self.vocabulary {
            hasher.update(term.as_bytes());
            hasher.update([0u8]);
            hasher.update((index as u64).to_le_bytes());
            hasher.update(self.idf[index].to_bits().to_le_bytes());
        }
        hex::encode(hasher.finalize())
    }

    /// Convert to the serialized artifact form
    pub fn to_artifact(&self) -> VectorizerArtifact {
        VectorizerArtifact {
            version: VECTORIZER_FORMAT_VERSION,
            options: self.options.clone(),
            vocabulary: self.vocabulary.clone(),
            idf: self.idf.clone(),
        }
    }

    /// Rebuild a vectorizer from its artifact, checking internal consistency
    pub fn from_artifact(artifact: VectorizerArtifact) -> Result<Self> {
        if artifact.version != VECTORIZER_FORMAT_VERSION {
            crate::bail_invalid!("vectorizer version", artifact.version);
        }
        artifact.options.validate()?;

        if artifact.idf.len() != artifact.vocabulary.len() {
            return Err(TitlecheckError::invalid_value(
                "vectorizer",
                format!(
                    "{} idf weights for {} terms",
                    artifact.idf.len(),
                    artifact.vocabulary.len()
                ),
            ));
        }

        let mut seen = vec![false; artifact.idf.len()];
        for (term, &index) in &artifact.vocabulary {
            match seen.get_mut(index) {
                Some(slot) if !*slot => *slot = true,
                _ => crate::bail_invalid!("vectorizer term index", format!("{term}={index}")),
            }
        }

        if let Some(bad) = artifact.idf.iter().find(|w| !w.is_finite() || **w < 0.0) {
            crate::bail_invalid!("vectorizer idf weight", bad);
        }

        let stop_words = stop_word_set(&artifact.options);
        Ok(TfidfVectorizer {
            options: artifact.options,
            vocabulary: artifact.vocabulary,
            idf: artifact.idf,
            stop_words,
        })
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_artifact())?)
    }

    /// Parse from JSON produced by [`TfidfVectorizer::to_json`]
    pub fn from_json(json: &str) -> Result<Self> {
        let artifact: VectorizerArtifact = serde_json::from_str(json)?;
        Self::from_artifact(artifact)
    }
}

fn stop_word_set(options: &VectorizerOptions) -> HashSet<String> {
    options
        .stop_words
        .iter()
        .map(|w| {
            if options.lowercase {
                w.to_lowercase()
            } else {
                w.clone()
            }
        })
        .collect()
}

fn analyze_with(
    text: &str,
    options: &VectorizerOptions,
    stop_words: &HashSet<String>,
) -> Vec<String> {
    let tokenizer = TokenizerOptions {
        lowercase: options.lowercase,
        stem: options.stemming,
        stop_words: (!stop_words.is_empty()).then_some(stop_words),
    };
    ngrams(&tokenize(text, &tokenizer), options.ngram_range)
}

fn inverse_document_frequency(total_docs: f64, df: f64, smooth: bool) -> f64 {
    if smooth {
        ((1.0 + total_docs) / (1.0 + df)).ln() + 1.0
    } else {
        (total_docs / df).ln() + 1.0
    }
}

#[cfg(test)]
mod tests;
