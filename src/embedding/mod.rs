//! Word-embedding lookups.
//!
//! The pretrained embedding table is an external collaborator: the engine
//! only ever sees it through the [`EmbeddingLookup`] trait. Two
//! implementations ship with the crate: [`EmbeddingTable`], an in-memory
//! map filled by hand or from a word2vec-format text file
//! ([`text_format`]), and [`LexicalLookup`], a deterministic hashed
//! fallback that needs no model file.

mod lexical;
pub mod text_format;

pub use lexical::{LexicalLookup, DEFAULT_LEXICAL_DIM};

use std::collections::HashMap;

use thiserror::Error;

/// Read-only access to per-token embedding vectors.
///
/// Implementations must be cheap to share across threads: a built corpus
/// index holds one handle and any number of concurrent queries read
/// through it.
///
/// # Contract
/// Every vector returned by [`lookup`](Self::lookup) has exactly
/// [`dimension`](Self::dimension) components, all finite. Dimension is
/// fixed for the lifetime of the lookup.
pub trait EmbeddingLookup: Send + Sync {
    /// Dimension of every vector produced by this lookup.
    fn dimension(&self) -> usize;

    /// Vector for `token`, or `None` when the token is out of vocabulary.
    fn lookup(&self, token: &str) -> Option<Vec<f32>>;
}

/// Errors raised while building or loading an embedding table.
#[derive(Debug, Error)]
pub enum TableError {
    /// Reading the table file failed.
    #[error("failed to read embedding table: {0}")]
    Io(#[from] std::io::Error),

    /// A line of the table file could not be parsed.
    #[error("malformed embedding table at line {line}: {reason}")]
    Parse {
        /// 1-based line number within the file.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// A vector's length disagrees with the table dimension.
    #[error("embedding dimension mismatch: expected={expected} actual={actual}")]
    DimensionMismatch {
        /// Dimension the table was created with.
        expected: usize,
        /// Length of the offending vector.
        actual: usize,
    },

    /// A vector contains a NaN or infinite component.
    #[error("embedding for token '{token}' contains a non-finite component")]
    NonFiniteComponent {
        /// The offending token.
        token: String,
    },

    /// The table file contained no vectors at all.
    #[error("embedding table is empty")]
    EmptyTable,
}

/// In-memory embedding table with a fixed dimension.
///
/// The dimension is set at construction and enforced on every insert, so
/// a populated table can never hand out mismatched vectors.
#[derive(Debug, Clone, Default)]
pub struct EmbeddingTable {
    vectors: HashMap<String, Vec<f32>>,
    dimension: usize,
}

impl EmbeddingTable {
    /// Creates an empty table whose vectors will all have `dimension`
    /// components. A meaningful table has a non-zero dimension.
    #[must_use]
    pub fn new(dimension: usize) -> Self {
        Self {
            vectors: HashMap::new(),
            dimension,
        }
    }

    /// Creates a table from `(token, vector)` pairs.
    ///
    /// # Errors
    /// Returns [`TableError::DimensionMismatch`] or
    /// [`TableError::NonFiniteComponent`] on the first offending pair.
    pub fn from_pairs<I, S>(dimension: usize, pairs: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (S, Vec<f32>)>,
        S: Into<String>,
    {
        let mut table = Self::new(dimension);
        for (token, vector) in pairs {
            table.insert(token, vector)?;
        }
        Ok(table)
    }

    /// Inserts a vector for `token`, replacing any previous one.
    ///
    /// # Errors
    /// Returns [`TableError::DimensionMismatch`] if the vector length does
    /// not match the table dimension, or
    /// [`TableError::NonFiniteComponent`] if any component is NaN or
    /// infinite.
    pub fn insert(
        &mut self,
        token: impl Into<String>,
        vector: Vec<f32>,
    ) -> Result<(), TableError> {
        let token = token.into();
        if vector.len() != self.dimension {
            return Err(TableError::DimensionMismatch {
                expected: self.dimension,
                actual: vector.len(),
            });
        }
        if !vector.iter().all(|v| v.is_finite()) {
            return Err(TableError::NonFiniteComponent { token });
        }
        self.vectors.insert(token, vector);
        Ok(())
    }

    /// Number of tokens in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Returns true if the table holds no vectors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Returns true if `token` is in vocabulary.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.vectors.contains_key(token)
    }
}

impl EmbeddingLookup for EmbeddingTable {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn lookup(&self, token: &str) -> Option<Vec<f32>> {
        self.vectors.get(token).cloned()
    }
}
