//! The static corpus index.

use tracing::{debug, info};

use crate::error::VectorizeError;
use crate::vectorizer::TextVectorizer;

/// One indexed phrase with its pooled vector.
///
/// Entries keep their insertion order from the source list. The order
/// carries no semantics; it exists only so that tied scores break
/// deterministically at query time.
#[derive(Debug, Clone)]
pub struct CorpusEntry {
    /// The original phrase text.
    pub phrase: String,
    /// The mean-pooled phrase vector. Always the index dimension, always
    /// non-zero norm.
    pub vector: Vec<f32>,
}

/// Immutable set of (phrase, vector) pairs built once from a phrase list.
///
/// Building is a best-effort batch operation: phrases that cannot produce
/// a scorable vector (empty after tokenization, or pooled to zero norm
/// because no token was in vocabulary) are skipped, never indexed, and
/// never abort the build. There is no post-build insert, update, or
/// remove; queries share the index freely across threads.
#[derive(Debug, Clone)]
pub struct CorpusIndex {
    entries: Vec<CorpusEntry>,
    dimension: usize,
}

impl CorpusIndex {
    /// Builds an index by vectorizing every phrase in order.
    pub fn build<I>(vectorizer: &TextVectorizer, phrases: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let dimension = vectorizer.dimension();
        let mut entries = Vec::new();
        let mut skipped = 0usize;

        for phrase in phrases {
            let phrase = phrase.into();
            let vector = match vectorizer.vectorize(&phrase) {
                Ok(vector) => vector,
                Err(VectorizeError::EmptyInput) => {
                    debug!("skipping phrase with no tokens");
                    skipped += 1;
                    continue;
                }
            };

            let norm2: f64 = vector.iter().map(|&v| f64::from(v) * f64::from(v)).sum();
            if norm2 <= 0.0 {
                debug!(phrase = %phrase, "skipping phrase with degenerate vector");
                skipped += 1;
                continue;
            }

            entries.push(CorpusEntry { phrase, vector });
        }

        info!(indexed = entries.len(), skipped, "corpus index built");
        Self { entries, dimension }
    }

    /// The indexed entries, in corpus insertion order.
    #[must_use]
    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    /// Number of indexed entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dimension of every indexed vector.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }
}
