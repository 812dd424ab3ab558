//! Text cleaning and tokenization

use super::stopwords::StopwordFilter;
use rustc_hash::FxHashSet;

/// Turns raw text into clean lowercase tokens without stopwords
#[derive(Debug, Clone)]
pub struct TextPreprocessor {
    stop_words: StopwordFilter,
    punctuation: FxHashSet<char>,
}

impl TextPreprocessor {
    /// Create a preprocessor that strips ASCII punctuation
    pub fn new(stop_words: StopwordFilter) -> Self {
        Self::with_punctuation(stop_words, ascii_punctuation())
    }

    /// Create a preprocessor with a custom punctuation set
    pub fn with_punctuation<I>(stop_words: StopwordFilter, punctuation: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        Self {
            stop_words,
            punctuation: punctuation.into_iter().collect(),
        }
    }

    /// Stopwords this preprocessor removes
    pub fn stop_words(&self) -> &StopwordFilter {
        &self.stop_words
    }

    /// Remove punctuation, lowercase, and split on whitespace
    ///
    /// Punctuation is deleted rather than replaced, so `"don't"` becomes
    /// `"dont"` and `"state-of-the-art"` a single token.
    pub fn clean_and_tokenize(&self, text: &str) -> Vec<String> {
        let cleaned: String = text
            .chars()
            .filter(|c| !self.punctuation.contains(c))
            .collect();

        cleaned
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    /// Drop stopwords, keeping order
    pub fn remove_stop_words(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|token| !self.stop_words.is_stopword(token))
            .collect()
    }

    /// Clean, tokenize and filter raw text
    pub fn preprocess_text(&self, text: &str) -> Vec<String> {
        self.remove_stop_words(self.clean_and_tokenize(text))
    }
}

/// The 32 ASCII punctuation characters
fn ascii_punctuation() -> impl Iterator<Item = char> {
    (0u8..=127).map(char::from).filter(char::is_ascii_punctuation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preprocessor() -> TextPreprocessor {
        TextPreprocessor::new(StopwordFilter::from_list(&["the", "is", "a", "of"]))
    }

    #[test]
    fn test_ascii_punctuation_set() {
        let chars: Vec<char> = ascii_punctuation().collect();
        assert_eq!(chars.len(), 32);
        assert!(chars.contains(&'!'));
        assert!(chars.contains(&'~'));
        assert!(!chars.contains(&' '));
    }

    #[test]
    fn test_clean_and_tokenize() {
        let tokens = preprocessor().clean_and_tokenize("Hello, World!  It's  a\ttest.");
        assert_eq!(tokens, vec!["hello", "world", "its", "a", "test"]);
    }

    #[test]
    fn test_non_ascii_punctuation_kept() {
        let tokens = preprocessor().clean_and_tokenize("«Quote» — dash");
        assert_eq!(tokens, vec!["«quote»", "—", "dash"]);
    }

    #[test]
    fn test_remove_stop_words() {
        let tokens = vec!["the".to_string(), "cat".to_string(), "is".to_string()];
        assert_eq!(preprocessor().remove_stop_words(tokens), vec!["cat"]);
    }

    #[test]
    fn test_preprocess_text() {
        let tokens = preprocessor().preprocess_text("The cat is the king of a castle.");
        assert_eq!(tokens, vec!["cat", "king", "castle"]);
    }

    #[test]
    fn test_only_stopwords_and_punctuation() {
        assert!(preprocessor().preprocess_text("The... is, a!").is_empty());
        assert!(preprocessor().preprocess_text("").is_empty());
    }

    #[test]
    fn test_custom_punctuation() {
        let pre = TextPreprocessor::with_punctuation(StopwordFilter::empty(), ['-']);
        assert_eq!(pre.clean_and_tokenize("co-op, yes"), vec!["coop,", "yes"]);
    }
}
