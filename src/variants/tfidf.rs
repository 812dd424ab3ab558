//! TF-IDF adapter

use super::{top_words, KeywordExtractor};
use crate::errors::{KeywordError, Result};
use crate::frequency::{calculate_frequencies, calculate_tf, calculate_tfidf};
use crate::types::ScoreTable;

/// Ranks the words of a preprocessed document by TF-IDF
#[derive(Debug, Clone)]
pub struct TfIdfAdapter<'a> {
    tokens: Vec<String>,
    idf: &'a ScoreTable<String>,
    scores: ScoreTable<String>,
}

impl<'a> TfIdfAdapter<'a> {
    /// `tokens` are the document's preprocessed words; `idf` is the
    /// corpus-level inverse document frequency table.
    pub fn new(tokens: Vec<String>, idf: &'a ScoreTable<String>) -> Self {
        Self {
            tokens,
            idf,
            scores: ScoreTable::default(),
        }
    }
}

impl KeywordExtractor for TfIdfAdapter<'_> {
    type Key = String;

    fn train(&mut self) -> Result<()> {
        let frequencies =
            calculate_frequencies(&self.tokens).ok_or(KeywordError::empty("frequencies"))?;
        let tf = calculate_tf(&frequencies).ok_or(KeywordError::empty("term frequencies"))?;
        self.scores = calculate_tfidf(&tf, self.idf).ok_or(KeywordError::empty("tf-idf"))?;
        Ok(())
    }

    fn scores(&self) -> &ScoreTable<String> {
        &self.scores
    }

    fn top_keywords(&self, n: usize) -> Vec<String> {
        top_words(&self.scores, n)
    }
}
