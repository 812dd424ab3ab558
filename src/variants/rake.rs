//! RAKE adapter

use super::{top_words, KeywordExtractor};
use crate::errors::{KeywordError, Result};
use crate::rake::{
    calculate_frequencies_for_content_words, calculate_word_degrees, calculate_word_scores,
    extract_candidate_keyword_phrases, extract_phrases, StopWordSplitter,
};
use crate::types::ScoreTable;

/// Ranks the words of a raw document by RAKE word score
#[derive(Debug, Clone)]
pub struct RakeAdapter<'a> {
    text: String,
    splitter: &'a StopWordSplitter,
    scores: ScoreTable<String>,
}

impl<'a> RakeAdapter<'a> {
    /// `text` is the raw, unpreprocessed document; RAKE needs its punctuation.
    pub fn new(text: impl Into<String>, splitter: &'a StopWordSplitter) -> Self {
        Self {
            text: text.into(),
            splitter,
            scores: ScoreTable::default(),
        }
    }
}

impl KeywordExtractor for RakeAdapter<'_> {
    type Key = String;

    fn train(&mut self) -> Result<()> {
        let phrases = extract_phrases(&self.text)
            .filter(|p| !p.is_empty())
            .ok_or(KeywordError::empty("phrases"))?;
        let candidates = extract_candidate_keyword_phrases(&phrases, self.splitter)
            .filter(|c| !c.is_empty())
            .ok_or(KeywordError::empty("candidate keyword phrases"))?;
        let frequencies = calculate_frequencies_for_content_words(&candidates)
            .ok_or(KeywordError::empty("content word frequencies"))?;

        let content_words: Vec<String> = frequencies.keys().cloned().collect();
        let degrees = calculate_word_degrees(&candidates, &content_words)
            .ok_or(KeywordError::empty("word degrees"))?;
        self.scores = calculate_word_scores(&degrees, &frequencies)
            .ok_or(KeywordError::empty("word scores"))?;
        Ok(())
    }

    fn scores(&self) -> &ScoreTable<String> {
        &self.scores
    }

    fn top_keywords(&self, n: usize) -> Vec<String> {
        top_words(&self.scores, n)
    }
}
