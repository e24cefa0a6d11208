//! # phraserank - Semantic Phrase Retrieval
//!
//! phraserank ranks a static corpus of short natural-language phrases by
//! semantic similarity to a free-text query, using fixed pretrained word
//! embeddings rather than lexical matching.
//!
//! ## Core Concepts
//!
//! - **EmbeddingLookup**: the seam to the pretrained word-vector table
//! - **TextVectorizer**: mean-pools per-token vectors into one phrase vector
//! - **CorpusIndex**: the immutable set of (phrase, vector) pairs, built once
//! - **Top-N query**: exact linear scan, cosine-scored, deterministically ordered
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use phraserank::{EmbeddingTable, SearchEngine};
//!
//! let table = EmbeddingTable::new(300);
//! // ... fill the table, or load one with embedding::text_format::load_text ...
//!
//! let engine = SearchEngine::build(Arc::new(table), phrases);
//! for hit in engine.search("happy", 5)? {
//!     println!("{:.4}  {}", hit.score, hit.phrase);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod embedding;
pub mod engine;
pub mod error;
pub mod index;
pub mod query;
pub mod similarity;
pub mod vectorizer;

// Re-export primary types at crate root for convenience
pub use embedding::{EmbeddingLookup, EmbeddingTable, LexicalLookup, TableError};
pub use engine::SearchEngine;
pub use error::{QueryError, RankError, RankResult, SimilarityError, VectorizeError};
pub use index::{CorpusEntry, CorpusIndex};
pub use query::{top_n, ScoredPhrase};
pub use similarity::cosine_similarity;
pub use vectorizer::TextVectorizer;
