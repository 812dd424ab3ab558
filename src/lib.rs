//! # rapid_keywords
//!
//! Keyword extraction with four interchangeable strategies and a benchmark
//! that compares them:
//!
//! - **TF-IDF**: term frequency weighted by corpus inverse document frequency
//! - **RAKE**: word degree over frequency inside stopword-delimited phrases
//! - **VanillaTextRank**: PageRank-style iteration over a word co-occurrence graph
//! - **PositionBiasedTextRank**: TextRank whose random jump favours words that
//!   appear early and often
//!
//! ## Pipeline
//!
//! ```text
//! raw text ─► TextPreprocessor ─► TextEncoder ─► TokenGraph ─► TextRank ─► decode
//!          └► RAKE phrases                    └► TF-IDF
//! ```
//!
//! ## Example
//!
//! ```
//! use rapid_keywords::graph::{edge_list::EdgeListGraph, TokenGraph};
//! use rapid_keywords::nlp::{StopwordFilter, TextEncoder, TextPreprocessor};
//! use rapid_keywords::pagerank::VanillaTextRank;
//!
//! let preprocessor = TextPreprocessor::new(StopwordFilter::from_list(&["with", "the"]));
//! let tokens = preprocessor.preprocess_text(
//!     "Graph algorithms rank words. Ranking words with graph algorithms works.",
//! );
//!
//! let mut encoder = TextEncoder::new();
//! let encoded = encoder.encode(&tokens).unwrap();
//!
//! let mut graph = EdgeListGraph::new();
//! graph.fill_from_tokens(&encoded, 3).unwrap();
//!
//! let mut rank = VanillaTextRank::new(&graph);
//! rank.train().unwrap();
//! let keywords = encoder.decode(&rank.top_keywords(3)).unwrap();
//! assert_eq!(keywords.len(), 3);
//! ```

pub mod benchmark;
pub mod errors;
pub mod frequency;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod rake;
pub mod types;
pub mod variants;

pub use benchmark::{calculate_recall, BenchmarkReport, KeywordExtractionBenchmark};
pub use errors::{KeywordError, Result};
pub use graph::{edge_list::EdgeListGraph, matrix::AdjacencyMatrixGraph, TokenGraph};
pub use pagerank::{PositionBiasedTextRank, RankState, TextRank, VanillaTextRank};
pub use types::{BenchmarkConfig, KeyPhrase, RankConfig, ScoreTable, TokenId};
pub use variants::{KeywordExtractor, RakeAdapter, TfIdfAdapter, Variant};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
