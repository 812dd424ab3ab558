//! Error types for rapid_keywords
//!
//! Graph queries about absent vertices are not errors; they return `None`.
//! Everything else that can fail goes through [`KeywordError`].

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, KeywordError>;

/// Errors produced by graph construction, ranking, adapters and the benchmark
#[derive(Debug, Error)]
pub enum KeywordError {
    /// Malformed argument: bad window length, self-loop edge, invalid config
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A pipeline step produced no data
    #[error("{stage} produced no result")]
    EmptyIntermediate {
        /// Name of the step that came back empty
        stage: &'static str,
    },

    /// Preprocessing and encoding left nothing to rank for a benchmark topic
    #[error("topic '{topic}' produced an empty token stream")]
    EmptyTokens {
        /// The offending topic
        topic: String,
    },

    /// Integer ids returned by a ranker could not be mapped back to words
    #[error("could not decode ranked tokens for '{0}'")]
    Decode(String),

    /// Filesystem failure while reading materials or writing a report
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON (IDF table or config file)
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed RAKE splitting pattern
    #[error("regex error: {0}")]
    Regex(#[from] regex::Error),
}

impl KeywordError {
    /// Shorthand for [`KeywordError::InvalidInput`]
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Shorthand for [`KeywordError::EmptyIntermediate`]
    pub fn empty(stage: &'static str) -> Self {
        Self::EmptyIntermediate { stage }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = KeywordError::invalid_input("window_length must be >= 2");
        assert_eq!(err.to_string(), "invalid input: window_length must be >= 2");

        let err = KeywordError::empty("calculate_tf");
        assert_eq!(err.to_string(), "calculate_tf produced no result");

        let err = KeywordError::EmptyTokens {
            topic: "culture".into(),
        };
        assert!(err.to_string().contains("culture"));
    }

    #[test]
    fn test_io_conversion() {
        fn open_missing() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here.txt")?)
        }

        assert!(matches!(open_missing(), Err(KeywordError::Io(_))));
    }
}
