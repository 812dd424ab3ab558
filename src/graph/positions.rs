//! Token positions and position weights
//!
//! Tokens that occur early and often get a larger share of the position
//! weight: each token scores the sum of `1 / position` over its 1-based
//! positions, and the scores are normalized to sum to 1.

use crate::types::{ScoreTable, TokenId};
use rustc_hash::FxHashMap;

/// Occurrence positions of every token in one document
#[derive(Debug, Clone, Default)]
pub struct PositionIndex {
    /// Token -> ordered 1-based positions
    positions: FxHashMap<TokenId, Vec<usize>>,
    /// Tokens in first-occurrence order
    order: Vec<TokenId>,
    /// Normalized weights, filled by `calculate_weights`
    weights: ScoreTable<TokenId>,
}

impl PositionIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index directly from a token sequence
    pub fn from_tokens(tokens: &[TokenId]) -> Self {
        let mut index = Self::new();
        index.fill(tokens);
        index
    }

    /// Replace the recorded positions with those of `tokens`
    ///
    /// Previously calculated weights are discarded.
    pub fn fill(&mut self, tokens: &[TokenId]) {
        self.positions.clear();
        self.order.clear();
        self.weights.clear();

        for (idx, &token) in tokens.iter().enumerate() {
            let entry = self.positions.entry(token).or_insert_with(|| {
                self.order.push(token);
                Vec::new()
            });
            entry.push(idx + 1);
        }
    }

    /// Compute normalized position weights from the recorded positions
    pub fn calculate_weights(&mut self) {
        let raw: Vec<(TokenId, f64)> = self
            .order
            .iter()
            .map(|token| {
                let weight = self.positions[token]
                    .iter()
                    .map(|&p| 1.0 / p as f64)
                    .sum::<f64>();
                (*token, weight)
            })
            .collect();

        let total: f64 = raw.iter().map(|(_, w)| w).sum();

        self.weights = if total > 0.0 {
            raw.into_iter().map(|(t, w)| (t, w / total)).collect()
        } else {
            ScoreTable::default()
        };
    }

    /// Positions of a token, if it occurs
    pub fn positions(&self, token: TokenId) -> Option<&[usize]> {
        self.positions.get(&token).map(Vec::as_slice)
    }

    /// Normalized weights (empty until `calculate_weights` runs)
    pub fn weights(&self) -> &ScoreTable<TokenId> {
        &self.weights
    }

    /// Number of distinct tokens recorded
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if no positions were recorded
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_are_one_based() {
        let index = PositionIndex::from_tokens(&[7, 8, 7, 9]);

        assert_eq!(index.positions(7), Some(&[1, 3][..]));
        assert_eq!(index.positions(8), Some(&[2][..]));
        assert_eq!(index.positions(9), Some(&[4][..]));
        assert_eq!(index.positions(10), None);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_weights_values() {
        let mut index = PositionIndex::from_tokens(&[7, 8, 7, 9]);
        index.calculate_weights();

        // raw: 7 -> 1 + 1/3, 8 -> 1/2, 9 -> 1/4
        let total = 1.0 + 1.0 / 3.0 + 0.5 + 0.25;
        let w = index.weights();
        assert!((w[&7] - (4.0 / 3.0) / total).abs() < 1e-12);
        assert!((w[&8] - 0.5 / total).abs() < 1e-12);
        assert!((w[&9] - 0.25 / total).abs() < 1e-12);
    }

    #[test]
    fn test_weights_sum_to_one() {
        let tokens: Vec<TokenId> = (0..200).map(|i| (i * 7 % 31) as TokenId).collect();
        let mut index = PositionIndex::from_tokens(&tokens);
        index.calculate_weights();

        let total: f64 = index.weights().values().sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!(index.weights().values().all(|&w| (0.0..=1.0).contains(&w)));
    }

    #[test]
    fn test_earlier_tokens_weigh_more() {
        let mut index = PositionIndex::from_tokens(&[1, 2, 3, 4]);
        index.calculate_weights();
        let w = index.weights();

        assert!(w[&1] > w[&2]);
        assert!(w[&2] > w[&3]);
        assert!(w[&3] > w[&4]);
    }

    #[test]
    fn test_empty_index() {
        let mut index = PositionIndex::new();
        index.calculate_weights();

        assert!(index.is_empty());
        assert!(index.weights().is_empty());
    }

    #[test]
    fn test_refill_discards_weights() {
        let mut index = PositionIndex::from_tokens(&[1, 2]);
        index.calculate_weights();
        assert!(!index.weights().is_empty());

        index.fill(&[3]);
        assert!(index.weights().is_empty());
        assert_eq!(index.positions(1), None);
    }
}
