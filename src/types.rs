//! Core types for rapid_keywords
//!
//! Token ids, score tables, and the configuration structs passed into the
//! rank engines and the benchmark harness.

use crate::errors::{KeywordError, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ============================================================================
// Tokens & scores
// ============================================================================

/// Integer id assigned to a distinct word by a [`TextEncoder`](crate::nlp::encoder::TextEncoder)
pub type TokenId = u32;

/// Mapping from a token (or phrase) to its significance score
pub type ScoreTable<K> = FxHashMap<K, f64>;

/// An ordered tuple of content words forming one RAKE candidate
pub type KeyPhrase = Vec<String>;

// ============================================================================
// Rank configuration
// ============================================================================

/// Hyperparameters of the iterative TextRank computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankConfig {
    /// Damping factor (0.85)
    pub damping: f64,
    /// Stop when the summed absolute score change drops to this value
    pub convergence_threshold: f64,
    /// Hard cap on iterations
    pub max_iterations: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            convergence_threshold: 0.0001,
            max_iterations: 50,
        }
    }
}

impl RankConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(KeywordError::invalid_input(format!(
                "damping must be between 0 and 1, got {}",
                self.damping
            )));
        }

        if self.max_iterations == 0 {
            return Err(KeywordError::invalid_input("max_iterations must be > 0"));
        }

        if self.convergence_threshold < 0.0 {
            return Err(KeywordError::invalid_input(
                "convergence_threshold must be >= 0",
            ));
        }

        Ok(())
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

// ============================================================================
// Benchmark configuration
// ============================================================================

/// Topics of the bundled benchmark corpus, in file-index order
pub const DEFAULT_TOPICS: [&str; 9] = [
    "culture", "business", "crime", "fashion", "health", "politics", "science", "sports", "tech",
];

/// Settings for [`KeywordExtractionBenchmark`](crate::benchmark::KeywordExtractionBenchmark)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Directory holding `<index>_text.txt` and `<index>_keywords.txt`
    pub materials_path: PathBuf,
    /// Topic names; a topic's position is its file index
    pub topics: Vec<String>,
    /// Co-occurrence window for the TextRank graph
    pub window_length: usize,
    /// Number of predicted keywords compared against the gold list
    pub top_n: usize,
    /// Hyperparameters shared by both TextRank engines
    pub rank: RankConfig,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            materials_path: PathBuf::from("assets/benchmark_materials"),
            topics: DEFAULT_TOPICS.iter().map(|t| t.to_string()).collect(),
            window_length: 3,
            top_n: 50,
            rank: RankConfig::default(),
        }
    }
}

impl BenchmarkConfig {
    /// Default config rooted at the given materials directory
    pub fn new(materials_path: impl Into<PathBuf>) -> Self {
        Self {
            materials_path: materials_path.into(),
            ..Self::default()
        }
    }

    /// Load a config from a JSON file; omitted fields take their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.topics.is_empty() {
            return Err(KeywordError::invalid_input("at least one topic is required"));
        }

        if self.window_length < 2 {
            return Err(KeywordError::invalid_input("window_length must be >= 2"));
        }

        if self.top_n == 0 {
            return Err(KeywordError::invalid_input("top_n must be > 0"));
        }

        self.rank.validate()
    }

    /// Builder method: replace the topic list
    pub fn with_topics<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topics = topics.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method: set window length
    pub fn with_window_length(mut self, window_length: usize) -> Self {
        self.window_length = window_length;
        self
    }

    /// Builder method: set number of predicted keywords
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Builder method: set rank hyperparameters
    pub fn with_rank(mut self, rank: RankConfig) -> Self {
        self.rank = rank;
        self
    }
}
