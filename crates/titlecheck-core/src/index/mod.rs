//! Vectorized title corpus
//!
//! [`TitleIndex`] keeps the historical titles and their vectors side by side:
//! entry `i` of [`TitleIndex::vectors`] always encodes [`TitleIndex::title`]`(i)`.

use std::time::Instant;

use tracing::debug;

use crate::error::Result;
use crate::trace_time;
use crate::vectorize::{SparseVector, TfidfVectorizer, VectorizerOptions};

/// Historical titles with their pre-computed vectors
#[derive(Debug, Clone)]
pub struct TitleIndex {
    titles: Vec<String>,
    vectors: Vec<SparseVector>,
    vectorizer: TfidfVectorizer,
}

impl TitleIndex {
    /// Fit a vectorizer on `titles` and index them
    pub fn build(titles: Vec<String>, options: VectorizerOptions) -> Result<Self> {
        let start = Instant::now();
        let (vectorizer, vectors) = TfidfVectorizer::fit(&titles, options)?;
        trace_time!(start, "index_build", titles = titles.len());

        Ok(TitleIndex {
            titles,
            vectors,
            vectorizer,
        })
    }

    /// Index `titles` with an already fitted vectorizer
    ///
    /// The vectorizer is used as is; its vocabulary is not extended.
    pub fn from_parts(titles: Vec<String>, vectorizer: TfidfVectorizer) -> Self {
        let start = Instant::now();
        let vectors = titles.iter().map(|t| vectorizer.transform(t)).collect();
        trace_time!(start, "index_encode_corpus", titles = titles.len());

        let index = TitleIndex {
            titles,
            vectors,
            vectorizer,
        };

        let empty = index.vectors.iter().filter(|v| v.is_zero()).count();
        if empty > 0 {
            debug!(empty, "corpus titles without known terms");
        }
        index
    }

    /// Encode arbitrary text with the index vectorizer
    pub fn encode(&self, text: &str) -> SparseVector {
        self.vectorizer.transform(text)
    }

    /// Title at corpus position `index`
    pub fn title(&self, index: usize) -> Option<&str> {
        self.titles.get(index).map(String::as_str)
    }

    /// All titles in corpus order
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Corpus vectors, parallel to [`TitleIndex::titles`]
    pub fn vectors(&self) -> &[SparseVector] {
        &self.vectors
    }

    /// The fitted vectorizer
    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}
