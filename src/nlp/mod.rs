//! Natural Language Processing components
//!
//! This module provides text cleaning, stopword filtering and the
//! string-to-integer token encoding the graph engines work on.

pub mod encoder;
pub mod stopwords;
pub mod tokenizer;

pub use encoder::TextEncoder;
pub use stopwords::StopwordFilter;
pub use tokenizer::TextPreprocessor;
