//! Deterministic lexical fallback lookup.
//!
//! Not a neural embedding model: each token's vector is derived by feature
//! hashing over `blake3`, so the mapping is stable, offline, and needs no
//! model file. Semantically it only captures token identity, which is
//! enough to exercise the retrieval path and to run the CLI and benches
//! without downloading a table.

use blake3::Hasher;

use super::EmbeddingLookup;

/// Default dimensionality for lexical vectors.
///
/// Keep this modest; lexical vectors carry no semantics worth paying a
/// large dimension for.
pub const DEFAULT_LEXICAL_DIM: usize = 64;

/// Hashed features derived per token from one 32-byte digest.
const FEATURES_PER_TOKEN: usize = 3;

/// Deterministic per-token lookup over feature hashing.
///
/// Every token is in vocabulary by construction, and the same token always
/// maps to the same unit-norm vector of the configured dimension.
#[derive(Debug, Clone, Copy)]
pub struct LexicalLookup {
    dimension: usize,
}

impl LexicalLookup {
    /// Creates a lookup producing vectors of `dimension` components.
    /// The dimension must be non-zero for meaningful retrieval.
    #[must_use]
    pub fn new(dimension: usize) -> Self {
        debug_assert!(dimension > 0, "lexical dimension must be non-zero");
        Self { dimension }
    }

    fn token_vector(&self, token: &str) -> Vec<f32> {
        let mut hasher = Hasher::new();
        hasher.update(token.as_bytes());
        let digest = hasher.finalize();
        let bytes = digest.as_bytes();

        let mut vec = vec![0.0f32; self.dimension];
        for feature in 0..FEATURES_PER_TOKEN {
            let start = feature * 8;
            let mut raw = [0u8; 8];
            raw.copy_from_slice(&bytes[start..start + 8]);
            let bucket = u64::from_le_bytes(raw);

            #[allow(clippy::cast_possible_truncation)]
            let idx = (bucket as usize) % self.dimension;
            let sign = if bytes[24 + feature] & 1 == 0 { 1.0f32 } else { -1.0f32 };
            vec[idx] += sign;
        }

        // L2-normalize. Opposite-sign bucket collisions can cancel to a
        // zero vector; leave it unscaled in that case.
        let mut norm2 = 0.0f64;
        for &x in &vec {
            norm2 += f64::from(x) * f64::from(x);
        }
        if norm2 > 0.0 {
            let inv = norm2.sqrt().recip();
            for x in &mut vec {
                #[allow(clippy::cast_possible_truncation)]
                let scaled = (f64::from(*x) * inv) as f32;
                *x = scaled;
            }
        }

        vec
    }
}

impl Default for LexicalLookup {
    fn default() -> Self {
        Self::new(DEFAULT_LEXICAL_DIM)
    }
}

impl EmbeddingLookup for LexicalLookup {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn lookup(&self, token: &str) -> Option<Vec<f32>> {
        Some(self.token_vector(token))
    }
}
