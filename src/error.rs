//! Error types for phraserank.
//!
//! All errors are strongly typed using thiserror. Expected, recoverable
//! conditions (an unknown token, a single degenerate corpus entry) never
//! surface here at all: they are absorbed where they occur. What does
//! surface is either a bad input on the live query path or a caller bug.

use thiserror::Error;

use crate::embedding::TableError;

/// Errors raised while turning text into a phrase vector.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VectorizeError {
    /// The input tokenized to zero words (empty or whitespace-only text).
    #[error("input text contains no tokens")]
    EmptyInput,
}

/// Errors raised while scoring two vectors against each other.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimilarityError {
    /// One of the operands has zero norm; cosine similarity is undefined
    /// for it and the comparison is refused rather than producing NaN.
    #[error("cannot compare a zero-norm vector")]
    DegenerateVector,

    /// The operands have different dimensionality. This indicates a
    /// corrupted embedding table or a programming error; it is never
    /// recovered from.
    #[error("vector dimension mismatch: left={left} right={right}")]
    DimensionMismatch {
        /// Dimension of the left operand.
        left: usize,
        /// Dimension of the right operand.
        right: usize,
    },
}

/// Errors raised by a top-N query.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// The caller asked for zero results. Caller misuse, surfaced
    /// immediately.
    #[error("result count must be at least 1")]
    InvalidResultCount,

    /// The query text could not be vectorized.
    #[error("query vectorization failed: {0}")]
    Vectorize(#[from] VectorizeError),

    /// Scoring failed in a way that cannot be absorbed: either the query
    /// vector itself is degenerate, or a dimension mismatch was detected.
    #[error("query scoring failed: {0}")]
    Similarity(#[from] SimilarityError),
}

impl QueryError {
    /// Returns true if this error indicates caller misuse or an internal
    /// contract violation rather than a bad query string.
    #[must_use]
    pub const fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::InvalidResultCount
                | Self::Similarity(SimilarityError::DimensionMismatch { .. })
        )
    }
}

/// Top-level error type for phraserank.
///
/// Library entry points return their own narrow error types; this enum
/// exists so binaries and embedders can funnel everything through one
/// `Result` without losing the variant.
#[derive(Debug, Error)]
pub enum RankError {
    /// Vectorization failure.
    #[error("vectorize error: {0}")]
    Vectorize(#[from] VectorizeError),

    /// Similarity scoring failure.
    #[error("similarity error: {0}")]
    Similarity(#[from] SimilarityError),

    /// Query failure.
    #[error("query error: {0}")]
    Query(#[from] QueryError),

    /// Embedding table construction or loading failure.
    #[error("embedding table error: {0}")]
    Table(#[from] TableError),

    /// Result serialization failure.
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Filesystem failure outside the embedding table (e.g. corpus file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for phraserank operations.
pub type RankResult<T> = Result<T, RankError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_display() {
        let err = VectorizeError::EmptyInput;
        let msg = format!("{err}");
        assert!(msg.contains("no tokens"));
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = SimilarityError::DimensionMismatch { left: 300, right: 64 };
        let msg = format!("{err}");
        assert!(msg.contains("300"));
        assert!(msg.contains("64"));
    }

    #[test]
    fn test_query_error_from_vectorize() {
        let err: QueryError = VectorizeError::EmptyInput.into();
        assert!(matches!(err, QueryError::Vectorize(_)));
        assert!(!err.is_contract_violation());
    }

    #[test]
    fn test_contract_violations() {
        assert!(QueryError::InvalidResultCount.is_contract_violation());

        let mismatch: QueryError =
            SimilarityError::DimensionMismatch { left: 2, right: 3 }.into();
        assert!(mismatch.is_contract_violation());

        let degenerate: QueryError = SimilarityError::DegenerateVector.into();
        assert!(!degenerate.is_contract_violation());
    }

    #[test]
    fn test_rank_error_from_query() {
        let err: RankError = QueryError::InvalidResultCount.into();
        let msg = format!("{err}");
        assert!(msg.contains("at least 1"));
    }
}
