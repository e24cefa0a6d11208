//! The user-facing search facade.

use std::sync::Arc;

use crate::embedding::EmbeddingLookup;
use crate::error::QueryError;
use crate::index::CorpusIndex;
use crate::query::{top_n, ScoredPhrase};
use crate::vectorizer::TextVectorizer;

/// Owns a vectorizer and a built corpus index, and answers queries.
///
/// This is the single user-facing surface of the crate; a CLI, HTTP
/// endpoint, or any other wrapper sits on top of [`search`](Self::search)
/// without touching the core contract. The engine never mutates after
/// [`build`](Self::build), so one instance serves any number of
/// concurrent callers by shared reference.
pub struct SearchEngine {
    vectorizer: TextVectorizer,
    index: CorpusIndex,
}

impl SearchEngine {
    /// Vectorizes `phrases` against `lookup` and builds the index.
    ///
    /// Unscorable phrases are dropped during the build; see
    /// [`CorpusIndex::build`].
    pub fn build<I>(lookup: Arc<dyn EmbeddingLookup>, phrases: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let vectorizer = TextVectorizer::new(lookup);
        let index = CorpusIndex::build(&vectorizer, phrases);
        Self { vectorizer, index }
    }

    /// Returns the `n` phrases most similar to `text`, best first.
    ///
    /// # Errors
    /// Propagates every error of [`top_n`]: empty query text, a query with
    /// no in-vocabulary token, or `n == 0`.
    pub fn search(&self, text: &str, n: usize) -> Result<Vec<ScoredPhrase>, QueryError> {
        top_n(&self.vectorizer, &self.index, text, n)
    }

    /// The underlying index.
    #[must_use]
    pub fn index(&self) -> &CorpusIndex {
        &self.index
    }

    /// The underlying vectorizer.
    #[must_use]
    pub fn vectorizer(&self) -> &TextVectorizer {
        &self.vectorizer
    }
}
