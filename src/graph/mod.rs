//! Graph construction and representation
//!
//! This module provides the co-occurrence graph consumed by the TextRank
//! engines. Two storage layouts implement the same [`TokenGraph`] contract:
//! a dense adjacency matrix and a sparse edge list. The engines only see the
//! trait, so either layout can be ranked and both must produce the same scores.

pub mod edge_list;
pub mod matrix;
pub mod pairs;
pub mod positions;

use crate::errors::{KeywordError, Result};
use crate::types::{ScoreTable, TokenId};
use positions::PositionIndex;

/// Undirected, unweighted, loop-free co-occurrence graph over token ids
///
/// Vertices are kept in insertion order. Queries about vertices that are not
/// in the graph return `None`.
pub trait TokenGraph {
    /// All vertices in insertion order
    fn vertices(&self) -> &[TokenId];

    /// Mark two tokens as incident, registering either one if absent
    ///
    /// Re-adding an existing edge is a no-op. Self-loops are rejected.
    fn add_edge(&mut self, v1: TokenId, v2: TokenId) -> Result<()>;

    /// Whether an edge connects `v1` and `v2`; `None` if either is absent
    fn is_incidental(&self, v1: TokenId, v2: TokenId) -> Option<bool>;

    /// Number of distinct vertices incident to `v`; `None` if `v` is absent
    fn calculate_inout_score(&self, v: TokenId) -> Option<usize>;

    /// Vertices incident to `v`; `None` if `v` is absent
    fn neighbors(&self, v: TokenId) -> Option<Vec<TokenId>>;

    /// Positional metadata of the source sequence
    fn positions(&self) -> &PositionIndex;

    /// Mutable positional metadata, used while filling the graph
    fn positions_mut(&mut self) -> &mut PositionIndex;

    /// Number of vertices
    fn num_vertices(&self) -> usize {
        self.vertices().len()
    }

    /// Number of undirected edges (each counted once)
    fn num_edges(&self) -> usize {
        self.vertices()
            .iter()
            .filter_map(|&v| self.calculate_inout_score(v))
            .sum::<usize>()
            / 2
    }

    /// Check if the graph has no vertices
    fn is_empty(&self) -> bool {
        self.vertices().is_empty()
    }

    /// Build the edge set from a token sequence using a sliding window
    fn fill_from_tokens(&mut self, tokens: &[TokenId], window_length: usize) -> Result<()> {
        let pairs = pairs::extract_pairs(tokens, window_length).ok_or_else(|| {
            KeywordError::invalid_input(format!(
                "cannot extract pairs from {} tokens with window_length {}",
                tokens.len(),
                window_length
            ))
        })?;

        for (v1, v2) in pairs {
            self.add_edge(v1, v2)?;
        }

        Ok(())
    }

    /// Record the 1-based positions of every token in the sequence
    fn fill_positions(&mut self, tokens: &[TokenId]) {
        self.positions_mut().fill(tokens);
    }

    /// Derive normalized position weights from the recorded positions
    fn calculate_position_weights(&mut self) {
        self.positions_mut().calculate_weights();
    }

    /// Normalized position weights (empty until calculated)
    fn position_weights(&self) -> &ScoreTable<TokenId> {
        self.positions().weights()
    }
}

#[cfg(test)]
mod tests {
    use super::edge_list::EdgeListGraph;
    use super::matrix::AdjacencyMatrixGraph;
    use super::*;

    const TOKENS: [TokenId; 12] = [1, 2, 3, 4, 2, 5, 1, 6, 3, 7, 4, 8];

    fn filled<G: TokenGraph + Default>() -> G {
        let mut graph = G::default();
        graph.fill_from_tokens(&TOKENS, 3).unwrap();
        graph.fill_positions(&TOKENS);
        graph.calculate_position_weights();
        graph
    }

    fn assert_symmetric<G: TokenGraph>(graph: &G) {
        let mut probes = graph.vertices().to_vec();
        probes.push(999);
        for &a in &probes {
            for &b in &probes {
                assert_eq!(graph.is_incidental(a, b), graph.is_incidental(b, a));
            }
        }
    }

    #[test]
    fn test_incidence_is_symmetric() {
        assert_symmetric(&filled::<AdjacencyMatrixGraph>());
        assert_symmetric(&filled::<EdgeListGraph>());
    }

    #[test]
    fn test_self_loops_rejected() {
        let mut matrix = AdjacencyMatrixGraph::new();
        let mut list = EdgeListGraph::new();

        assert!(matrix.add_edge(1, 1).is_err());
        assert!(list.add_edge(1, 1).is_err());
        assert!(matrix.is_empty());
        assert!(list.is_empty());
    }

    #[test]
    fn test_representations_agree() {
        let matrix: AdjacencyMatrixGraph = filled();
        let list: EdgeListGraph = filled();

        assert_eq!(matrix.vertices(), list.vertices());
        assert_eq!(matrix.num_edges(), list.num_edges());
        for &a in matrix.vertices() {
            assert_eq!(
                matrix.calculate_inout_score(a),
                list.calculate_inout_score(a)
            );
            for &b in matrix.vertices() {
                assert_eq!(matrix.is_incidental(a, b), list.is_incidental(a, b));
            }
        }
        assert_eq!(matrix.position_weights(), list.position_weights());
    }

    #[test]
    fn test_fill_from_tokens_rejects_bad_window() {
        let mut graph = EdgeListGraph::new();
        assert!(graph.fill_from_tokens(&TOKENS, 1).is_err());
        assert!(graph.fill_from_tokens(&[], 3).is_err());
        assert!(graph.is_empty());
    }

    #[test]
    fn test_short_sequence_builds_empty_graph() {
        let mut graph = AdjacencyMatrixGraph::new();
        graph.fill_from_tokens(&[1, 2, 3], 3).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.num_edges(), 0);
    }

    #[test]
    fn test_position_weights_sum_to_one() {
        let graph: EdgeListGraph = filled();
        let total: f64 = graph.position_weights().values().sum();
        assert!((total - 1.0).abs() < 1e-9);
    }
}
