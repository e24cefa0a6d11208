//! Text-to-vector conversion.

use std::sync::Arc;

use crate::embedding::EmbeddingLookup;
use crate::error::VectorizeError;

/// Converts text into a single fixed-dimension vector by mean-pooling the
/// per-token vectors of an injected [`EmbeddingLookup`].
///
/// Tokenization is whitespace splitting plus lowercasing, nothing more: no
/// stemming, and stopwords are deliberately retained so that every token
/// contributes to the mean.
#[derive(Clone)]
pub struct TextVectorizer {
    lookup: Arc<dyn EmbeddingLookup>,
}

impl TextVectorizer {
    /// Creates a vectorizer over the given lookup handle.
    #[must_use]
    pub fn new(lookup: Arc<dyn EmbeddingLookup>) -> Self {
        Self { lookup }
    }

    /// Dimension of every vector this vectorizer produces.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.lookup.dimension()
    }

    /// Mean-pools the token vectors of `text` into one phrase vector.
    ///
    /// Out-of-vocabulary tokens contribute the zero vector: they dilute
    /// the mean toward zero instead of aborting the computation. A phrase
    /// of only unknown tokens therefore comes back as the zero vector;
    /// downstream code treats that as degenerate.
    ///
    /// # Errors
    /// Returns [`VectorizeError::EmptyInput`] if `text` tokenizes to zero
    /// words, rather than dividing by zero.
    pub fn vectorize(&self, text: &str) -> Result<Vec<f32>, VectorizeError> {
        let dimension = self.lookup.dimension();
        let mut sum = vec![0.0f64; dimension];
        let mut count = 0usize;

        for token in text.split_whitespace() {
            let token = token.to_lowercase();
            count += 1;

            if let Some(vector) = self.lookup.lookup(&token) {
                debug_assert_eq!(vector.len(), dimension, "lookup broke its dimension contract");
                for (acc, &v) in sum.iter_mut().zip(vector.iter()) {
                    *acc += f64::from(v);
                }
            }
        }

        if count == 0 {
            return Err(VectorizeError::EmptyInput);
        }

        #[allow(clippy::cast_precision_loss)]
        let inv = 1.0 / count as f64;
        let mean = sum
            .iter()
            .map(|&v| {
                #[allow(clippy::cast_possible_truncation)]
                let component = (v * inv) as f32;
                component
            })
            .collect();
        Ok(mean)
    }
}

impl std::fmt::Debug for TextVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextVectorizer")
            .field("dimension", &self.dimension())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::EmbeddingTable;

    fn vectorizer() -> TextVectorizer {
        let table = EmbeddingTable::from_pairs(
            2,
            vec![
                ("hot", vec![1.0, 0.0]),
                ("cold", vec![0.0, 1.0]),
            ],
        )
        .unwrap();
        TextVectorizer::new(Arc::new(table))
    }

    #[test]
    fn test_single_token_is_its_own_vector() {
        let v = vectorizer().vectorize("hot").unwrap();
        assert_eq!(v, vec![1.0, 0.0]);
    }

    #[test]
    fn test_mean_pooling_averages_known_tokens() {
        let v = vectorizer().vectorize("hot cold").unwrap();
        assert_eq!(v, vec![0.5, 0.5]);
    }

    #[test]
    fn test_unknown_token_dilutes_the_mean() {
        let v = vectorizer().vectorize("hot glacier").unwrap();
        assert_eq!(v, vec![0.5, 0.0]);
    }

    #[test]
    fn test_only_unknown_tokens_yield_zero_vector() {
        let v = vectorizer().vectorize("glacier volcano").unwrap();
        assert_eq!(v, vec![0.0, 0.0]);
    }

    #[test]
    fn test_tokens_are_lowercased() {
        let upper = vectorizer().vectorize("HOT").unwrap();
        let lower = vectorizer().vectorize("hot").unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert_eq!(
            vectorizer().vectorize("").unwrap_err(),
            VectorizeError::EmptyInput
        );
        assert_eq!(
            vectorizer().vectorize("   ").unwrap_err(),
            VectorizeError::EmptyInput
        );
    }
}
