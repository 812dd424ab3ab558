//! Stopword filtering
//!
//! Stopword lists come either from the `stop-words` crate or from a
//! newline-separated word file such as the benchmark's `eng_stop_words.txt`.

use crate::errors::Result;
use rustc_hash::FxHashSet;
use std::path::Path;
use stop_words::{get, LANGUAGE};
use tracing::debug;

/// A case-insensitive set of stopwords
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Create a stopword filter for the given language
    ///
    /// Supported languages: en, de, fr, es, it, pt, nl, ru. Unknown codes
    /// fall back to English.
    pub fn new(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            _ => LANGUAGE::English,
        };

        Self::from_words(get(lang).iter())
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self::from_words(words)
    }

    /// Create a stopword filter from any sequence of words
    ///
    /// Words are trimmed and lowercased; blank entries are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stopwords = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { stopwords }
    }

    /// Load a newline-separated stopword file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let filter = Self::from_words(content.lines());
        debug!(path = %path.display(), words = filter.len(), "loaded stopwords");
        Ok(filter)
    }

    /// Check if a word is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.stopwords.contains(&word.to_lowercase())
        } else {
            self.stopwords.contains(word)
        }
    }

    /// All stopwords in lexicographic order
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.stopwords.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::new("en");

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The")); // case insensitive
        assert!(filter.is_stopword("is"));
        assert!(!filter.is_stopword("machine"));
        assert!(!filter.is_stopword("learning"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let filter = StopwordFilter::new("klingon");
        assert!(filter.is_stopword("and"));
    }

    #[test]
    fn test_custom_stopwords() {
        let filter = StopwordFilter::from_list(&["Custom", " words ", ""]);

        assert!(filter.is_stopword("custom"));
        assert!(filter.is_stopword("words"));
        assert!(!filter.is_stopword("the"));
        assert!(!filter.is_stopword(""));
        assert_eq!(filter.len(), 2);
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();

        assert!(!filter.is_stopword("the"));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_words_sorted() {
        let filter = StopwordFilter::from_list(&["of", "and", "the"]);
        assert_eq!(filter.words(), vec!["and", "of", "the"]);
    }

    #[test]
    fn test_from_file_skips_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "a\nthe\n\nof\n").unwrap();

        let filter = StopwordFilter::from_file(file.path()).unwrap();
        assert_eq!(filter.words(), vec!["a", "of", "the"]);
    }

    #[test]
    fn test_from_missing_file() {
        let result = StopwordFilter::from_file(Path::new("/nonexistent/stop_words.txt"));
        assert!(result.is_err());
    }
}
