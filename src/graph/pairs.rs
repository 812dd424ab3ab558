//! Sliding-window co-occurrence pairs

use crate::types::TokenId;
use rustc_hash::FxHashSet;

/// Extract the unique unordered token pairs that co-occur inside a window
///
/// Windows hold exactly `window_length` tokens and start at positions
/// `0..tokens.len() - window_length`; the final full window is not visited,
/// so a sequence no longer than `window_length` yields no pairs. Pairs of
/// identical tokens are dropped and `(a, b)` / `(b, a)` count as one pair.
/// Pairs come back in the order they are first seen.
///
/// Returns `None` for an empty sequence or a window shorter than 2.
pub fn extract_pairs(tokens: &[TokenId], window_length: usize) -> Option<Vec<(TokenId, TokenId)>> {
    if tokens.is_empty() || window_length < 2 {
        return None;
    }

    let mut seen: FxHashSet<(TokenId, TokenId)> = FxHashSet::default();
    let mut pairs = Vec::new();

    for start in 0..tokens.len().saturating_sub(window_length) {
        let window = &tokens[start..start + window_length];

        for (i, &a) in window.iter().enumerate() {
            for &b in &window[i + 1..] {
                if a == b {
                    continue;
                }
                let key = if a < b { (a, b) } else { (b, a) };
                if seen.insert(key) {
                    pairs.push((a, b));
                }
            }
        }
    }

    Some(pairs)
}
