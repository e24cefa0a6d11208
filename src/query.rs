//! Top-N retrieval over a built index.

use serde::Serialize;

use crate::error::{QueryError, SimilarityError};
use crate::index::CorpusIndex;
use crate::similarity::cosine_similarity;
use crate::vectorizer::TextVectorizer;

/// One ranked result: a corpus phrase and its similarity to the query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredPhrase {
    /// The matched corpus phrase.
    pub phrase: String,
    /// Cosine similarity to the query, in `[-1, 1]`.
    pub score: f32,
}

/// Returns the `n` corpus phrases most similar to `text`, best first.
///
/// Every indexed entry is scored with cosine similarity against the
/// mean-pooled query vector; the scan is exact and linear, which is the
/// design point at the target scale of tens of thousands of phrases.
/// Results are ordered by descending score, with ties broken by corpus
/// insertion order, so identical inputs always produce the identical
/// sequence. When `n` exceeds the index size the whole corpus comes back;
/// that is the documented contract, not a truncation error. An empty index
/// yields an empty result.
///
/// # Errors
/// - [`QueryError::InvalidResultCount`] if `n == 0` (caller misuse).
/// - [`QueryError::Vectorize`] if `text` has no tokens.
/// - [`QueryError::Similarity`] if the query vector is degenerate (every
///   token out of vocabulary) or, fatally, if a dimension mismatch is
///   detected against the index.
///
/// Individual corpus entries reported degenerate by the scorer are
/// excluded from ranking and never abort the query; such entries cannot
/// normally exist, since the index refuses them at build time.
pub fn top_n(
    vectorizer: &TextVectorizer,
    index: &CorpusIndex,
    text: &str,
    n: usize,
) -> Result<Vec<ScoredPhrase>, QueryError> {
    if n == 0 {
        return Err(QueryError::InvalidResultCount);
    }

    let query = vectorizer.vectorize(text)?;
    let norm2: f64 = query.iter().map(|&v| f64::from(v) * f64::from(v)).sum();
    if norm2 <= 0.0 {
        return Err(QueryError::Similarity(SimilarityError::DegenerateVector));
    }

    let mut scored = score_entries(index, &query)?;

    // Vec::sort_by is stable, so equal scores keep corpus insertion order.
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(n);
    Ok(scored)
}

#[cfg(not(feature = "parallel"))]
fn score_entries(index: &CorpusIndex, query: &[f32]) -> Result<Vec<ScoredPhrase>, QueryError> {
    let mut scored = Vec::with_capacity(index.len());
    for entry in index.entries() {
        match cosine_similarity(query, &entry.vector) {
            Ok(score) => scored.push(ScoredPhrase {
                phrase: entry.phrase.clone(),
                score,
            }),
            Err(SimilarityError::DegenerateVector) => {}
            Err(err @ SimilarityError::DimensionMismatch { .. }) => {
                return Err(QueryError::Similarity(err));
            }
        }
    }
    Ok(scored)
}

#[cfg(feature = "parallel")]
fn score_entries(index: &CorpusIndex, query: &[f32]) -> Result<Vec<ScoredPhrase>, QueryError> {
    use rayon::prelude::*;

    // Indexed collection preserves entry order, so the stable tie-break
    // downstream sees the same sequence as the sequential path.
    let scored: Result<Vec<Option<ScoredPhrase>>, SimilarityError> = index
        .entries()
        .par_iter()
        .map(|entry| match cosine_similarity(query, &entry.vector) {
            Ok(score) => Ok(Some(ScoredPhrase {
                phrase: entry.phrase.clone(),
                score,
            })),
            Err(SimilarityError::DegenerateVector) => Ok(None),
            Err(err) => Err(err),
        })
        .collect();

    Ok(scored
        .map_err(QueryError::Similarity)?
        .into_iter()
        .flatten()
        .collect())
}
