//! Keyword extraction strategies behind one interface
//!
//! Four strategies are compared by the benchmark:
//! - TF-IDF: term frequency weighted by inverse document frequency
//! - RAKE: word degree over frequency in stopword-delimited phrases
//! - VanillaTextRank: classic TextRank on the co-occurrence graph
//! - PositionBiasedTextRank: TextRank biased towards early, frequent words
//!
//! The first two are string-keyed adapters defined here; the TextRank engines
//! live in [`crate::pagerank`] and are keyed by encoded token ids.

pub mod rake;
pub mod tfidf;

pub use self::rake::RakeAdapter;
pub use self::tfidf::TfIdfAdapter;

use crate::errors::{KeywordError, Result};
use crate::types::ScoreTable;
use std::fmt;
use std::hash::Hash;

/// Common contract of every keyword extraction strategy
pub trait KeywordExtractor {
    /// What the strategy ranks: words for the adapters, token ids for TextRank
    type Key: Clone + Eq + Hash;

    /// Compute the score table
    fn train(&mut self) -> Result<()>;

    /// Scores computed by the last successful `train()`
    fn scores(&self) -> &ScoreTable<Self::Key>;

    /// The `n` best keys in rank order
    fn top_keywords(&self, n: usize) -> Vec<Self::Key>;
}

/// The strategies the benchmark reports on, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variant {
    TfIdf,
    Rake,
    VanillaTextRank,
    PositionBiasedTextRank,
}

impl Variant {
    /// All strategies in report order
    pub const ALL: [Variant; 4] = [
        Variant::TfIdf,
        Variant::Rake,
        Variant::VanillaTextRank,
        Variant::PositionBiasedTextRank,
    ];

    /// Report row name
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::TfIdf => "TF-IDF",
            Variant::Rake => "RAKE",
            Variant::VanillaTextRank => "VanillaTextRank",
            Variant::PositionBiasedTextRank => "PositionBiasedTextRank",
        }
    }

    /// Whether the strategy ranks encoded ids that must be decoded
    pub fn is_text_rank(self) -> bool {
        matches!(
            self,
            Variant::VanillaTextRank | Variant::PositionBiasedTextRank
        )
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Variant {
    type Err = KeywordError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().replace(['-', '_'], "").as_str() {
            "tfidf" => Ok(Variant::TfIdf),
            "rake" => Ok(Variant::Rake),
            "vanillatextrank" | "textrank" | "vanilla" => Ok(Variant::VanillaTextRank),
            "positionbiasedtextrank" | "positionbiased" | "position" => {
                Ok(Variant::PositionBiasedTextRank)
            }
            _ => Err(KeywordError::invalid_input(format!(
                "unknown strategy '{value}'"
            ))),
        }
    }
}

/// Top `n` words by score; ties go to the lexicographically smaller word
pub(crate) fn top_words(scores: &ScoreTable<String>, n: usize) -> Vec<String> {
    let mut ranked: Vec<(&String, f64)> = scores.iter().map(|(w, &s)| (w, s)).collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.into_iter().take(n).map(|(w, _)| w.clone()).collect()
}
