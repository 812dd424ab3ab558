//! RAKE: Rapid Automatic Keyword Extraction
//!
//! Text is cut into phrases at punctuation, phrases are cut into candidate
//! keyword phrases at stopwords, and each content word is scored by
//! `degree / frequency`, where the degree of a word is the total length of
//! the candidate phrases it occurs in.

use crate::errors::Result;
use crate::nlp::StopwordFilter;
use crate::types::{KeyPhrase, ScoreTable};
use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::{FxHashMap, FxHashSet};

/// Phrase delimiters: punctuation, brackets, quotes, and free-standing dashes
static PHRASE_DELIMITERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[.,;:¡!¿?…⋯‹›«»|\\"“”\[\]()⟨⟩}{&–\-~—]|\s[-–~—]+\s"#)
        .expect("Invalid phrase delimiter regex")
});

/// Splits lowercase phrases at whole-word stopword matches
#[derive(Debug, Clone)]
pub struct StopWordSplitter {
    stop_words: StopwordFilter,
    pattern: Option<Regex>,
}

impl StopWordSplitter {
    /// Compile the splitting pattern for a stopword set
    pub fn new(stop_words: StopwordFilter) -> Result<Self> {
        let pattern = if stop_words.is_empty() {
            None
        } else {
            let alternatives: Vec<String> =
                stop_words.words().into_iter().map(regex::escape).collect();
            Some(Regex::new(&format!(r"\b(?:{})\b", alternatives.join("|")))?)
        };

        Ok(Self {
            stop_words,
            pattern,
        })
    }

    pub fn stop_words(&self) -> &StopwordFilter {
        &self.stop_words
    }

    /// Candidate keyword phrases of one phrase
    fn split(&self, phrase: &str) -> Vec<KeyPhrase> {
        let Some(pattern) = &self.pattern else {
            return Vec::new();
        };

        let lowered = phrase.trim().to_lowercase();
        pattern
            .split(&lowered)
            .filter_map(|segment| {
                let words: KeyPhrase = segment
                    .trim()
                    .split(' ')
                    .filter(|word| !word.is_empty() && !self.stop_words.is_stopword(word))
                    .map(str::to_string)
                    .collect();
                (!words.is_empty()).then_some(words)
            })
            .collect()
    }
}

/// Split text into trimmed, non-empty phrases at delimiters
pub fn extract_phrases(text: &str) -> Option<Vec<String>> {
    if text.is_empty() {
        return None;
    }

    Some(
        PHRASE_DELIMITERS
            .split(text)
            .map(str::trim)
            .filter(|phrase| !phrase.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

/// Split every phrase into candidate keyword phrases at stopwords
pub fn extract_candidate_keyword_phrases(
    phrases: &[String],
    splitter: &StopWordSplitter,
) -> Option<Vec<KeyPhrase>> {
    if phrases.is_empty() || splitter.stop_words().is_empty() {
        return None;
    }

    Some(phrases.iter().flat_map(|phrase| splitter.split(phrase)).collect())
}

/// Occurrence counts of every word across all candidate phrases
pub fn calculate_frequencies_for_content_words(
    candidates: &[KeyPhrase],
) -> Option<FxHashMap<String, usize>> {
    let words: Vec<&str> = candidates.iter().flatten().map(String::as_str).collect();
    crate::frequency::calculate_frequencies(&words)
}

/// Degree of each content word: summed length of the candidates containing it
///
/// A candidate counts once per word even if the word repeats inside it.
pub fn calculate_word_degrees(
    candidates: &[KeyPhrase],
    content_words: &[String],
) -> Option<FxHashMap<String, usize>> {
    if candidates.is_empty() || content_words.is_empty() {
        return None;
    }

    let mut degrees: FxHashMap<String, usize> =
        content_words.iter().map(|word| (word.clone(), 0)).collect();

    for candidate in candidates {
        let distinct: FxHashSet<&String> = candidate.iter().collect();
        for word in distinct {
            if let Some(degree) = degrees.get_mut(word) {
                *degree += candidate.len();
            }
        }
    }

    Some(degrees)
}

/// Word score: degree divided by frequency
///
/// Both tables must cover exactly the same words.
pub fn calculate_word_scores(
    degrees: &FxHashMap<String, usize>,
    frequencies: &FxHashMap<String, usize>,
) -> Option<ScoreTable<String>> {
    if degrees.is_empty() || frequencies.is_empty() || degrees.len() != frequencies.len() {
        return None;
    }

    frequencies
        .iter()
        .map(|(word, &frequency)| {
            let degree = *degrees.get(word)?;
            Some((word.clone(), degree as f64 / frequency as f64))
        })
        .collect()
}

/// Phrase score: sum of its word scores
///
/// Returns `None` if a candidate contains a word without a score.
pub fn calculate_cumulative_score_for_candidates(
    candidates: &[KeyPhrase],
    word_scores: &ScoreTable<String>,
) -> Option<FxHashMap<KeyPhrase, f64>> {
    if candidates.is_empty() || word_scores.is_empty() {
        return None;
    }

    let mut cumulative: FxHashMap<KeyPhrase, f64> = FxHashMap::default();
    for candidate in candidates {
        if cumulative.contains_key(candidate) {
            continue;
        }
        let mut score = 0.0;
        for word in candidate {
            score += word_scores.get(word)?;
        }
        cumulative.insert(candidate.clone(), score);
    }

    Some(cumulative)
}

/// The `top_n` best phrases of at most `max_length` words, space-joined
pub fn get_top_n_phrases(
    phrase_scores: &FxHashMap<KeyPhrase, f64>,
    top_n: usize,
    max_length: usize,
) -> Option<Vec<String>> {
    if phrase_scores.is_empty() || top_n == 0 || max_length == 0 {
        return None;
    }

    let mut ranked: Vec<(String, f64)> = phrase_scores
        .iter()
        .filter(|(phrase, _)| phrase.len() <= max_length)
        .map(|(phrase, &score)| (phrase.join(" "), score))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    Some(ranked.into_iter().take(top_n).map(|(p, _)| p).collect())
}
