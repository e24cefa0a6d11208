//! Cosine similarity between embedding vectors.

use crate::error::SimilarityError;

/// Computes the cosine similarity of two vectors, bounded in `[-1, 1]`.
///
/// A score near 1 means high semantic alignment; a score near or below 0
/// means little or none. A score near -1 does *not* reliably mean opposite
/// meaning: embedding geometry gives no antonym guarantee, and callers
/// should not read one into it.
///
/// Accumulation runs in f64 over f32 components, so self-similarity of any
/// non-zero vector is 1.0 to within floating-point tolerance.
///
/// # Errors
/// - [`SimilarityError::DimensionMismatch`] if the operands have different
///   lengths. This is a contract violation, not a scoring outcome.
/// - [`SimilarityError::DegenerateVector`] if either operand has zero
///   norm. Cosine is undefined there; refusing the comparison keeps NaN
///   out of every downstream sort.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32, SimilarityError> {
    if a.len() != b.len() {
        return Err(SimilarityError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;

    for (&x, &y) in a.iter().zip(b.iter()) {
        let xf = f64::from(x);
        let yf = f64::from(y);
        dot += xf * yf;
        norm_a += xf * xf;
        norm_b += yf * yf;
    }

    if norm_a <= 0.0 || norm_b <= 0.0 {
        return Err(SimilarityError::DegenerateVector);
    }

    let sim = dot / (norm_a.sqrt() * norm_b.sqrt());
    if !sim.is_finite() {
        // Component overflow collapsed the ratio; the pair is unscorable.
        return Err(SimilarityError::DegenerateVector);
    }

    #[allow(clippy::cast_possible_truncation)]
    let bounded = sim.clamp(-1.0, 1.0) as f32;
    Ok(bounded)
}
