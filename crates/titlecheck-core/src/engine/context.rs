use crate::classifier::Classifier;
use crate::index::TitleIndex;

/// Everything loaded at startup, shared read-only by every check
pub struct CheckContext {
    index: TitleIndex,
    classifier: Box<dyn Classifier>,
}

impl CheckContext {
    pub fn new(index: TitleIndex, classifier: Box<dyn Classifier>) -> Self {
        Self { index, classifier }
    }

    /// Vectorized corpus
    pub fn index(&self) -> &TitleIndex {
        &self.index
    }

    /// Pre-trained classifier
    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }
}

impl std::fmt::Debug for CheckContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckContext")
            .field("titles", &self.index.len())
            .field("vocabulary", &self.index.vectorizer().vocabulary_len())
            .field("classifier", &self.classifier.kind())
            .finish()
    }
}
