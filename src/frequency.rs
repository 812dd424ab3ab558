//! Frequency metrics: raw counts, term frequency and TF-IDF
//!
//! Each function returns `None` when its input carries no data, so callers
//! can tell an empty intermediate result from a legitimately small one.

use crate::types::ScoreTable;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

/// IDF used for words missing from the reference table: `ln(47 / 1)`,
/// the IDF of a word seen in one document of a 47-document corpus.
pub fn default_idf() -> f64 {
    47f64.ln()
}

/// Count occurrences of every token
pub fn calculate_frequencies<S: AsRef<str>>(tokens: &[S]) -> Option<FxHashMap<String, usize>> {
    if tokens.is_empty() {
        return None;
    }

    let mut frequencies: FxHashMap<String, usize> = FxHashMap::default();
    for token in tokens {
        *frequencies.entry(token.as_ref().to_string()).or_insert(0) += 1;
    }
    Some(frequencies)
}

/// Term frequency: each count divided by the total number of tokens
pub fn calculate_tf(frequencies: &FxHashMap<String, usize>) -> Option<ScoreTable<String>> {
    let total: usize = frequencies.values().sum();
    if total == 0 {
        return None;
    }

    Some(
        frequencies
            .iter()
            .map(|(token, &count)| (token.clone(), count as f64 / total as f64))
            .collect(),
    )
}

/// TF-IDF: term frequency times the token's IDF ([`default_idf`] when absent)
pub fn calculate_tfidf(
    term_freq: &ScoreTable<String>,
    idf: &ScoreTable<String>,
) -> Option<ScoreTable<String>> {
    if term_freq.is_empty() {
        return None;
    }

    let fallback = default_idf();
    Some(
        term_freq
            .iter()
            .map(|(token, &tf)| {
                let weight = idf.get(token).copied().unwrap_or(fallback);
                (token.clone(), tf * weight)
            })
            .collect(),
    )
}

/// The `top` highest-valued tokens, ties broken alphabetically
pub fn get_top_n<V>(values: &FxHashMap<String, V>, top: usize) -> Option<Vec<String>>
where
    V: Copy + PartialOrd,
{
    if values.is_empty() || top == 0 {
        return None;
    }

    let mut ranked: Vec<(&String, V)> = values.iter().map(|(k, &v)| (k, v)).collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });
    Some(
        ranked
            .into_iter()
            .take(top)
            .map(|(token, _)| token.clone())
            .collect(),
    )
}
