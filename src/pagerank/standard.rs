//! Vanilla TextRank
//!
//! `score(v) = (1 - d) + d * Σ score(n) / degree(n)`

use super::{TextRank, VertexUpdate};
use crate::graph::TokenGraph;
use crate::types::{RankConfig, TokenId};

/// Uniform random-jump update
#[derive(Debug, Clone, Copy, Default)]
pub struct Vanilla;

impl VertexUpdate for Vanilla {
    #[inline]
    fn update(&self, _vertex: TokenId, neighbor_sum: f64, damping: f64) -> f64 {
        (1.0 - damping) + damping * neighbor_sum
    }
}

/// Classic TextRank over any [`TokenGraph`]
pub type VanillaTextRank<'g, G> = TextRank<'g, G, Vanilla>;

impl<'g, G: TokenGraph> TextRank<'g, G, Vanilla> {
    /// Create a vanilla engine with the default hyperparameters
    pub fn new(graph: &'g G) -> Self {
        Self::with_config(graph, RankConfig::default())
    }

    /// Create a vanilla engine with custom hyperparameters
    pub fn with_config(graph: &'g G, config: RankConfig) -> Self {
        Self::with_update(graph, Vanilla, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::edge_list::EdgeListGraph;
    use crate::graph::matrix::AdjacencyMatrixGraph;
    use crate::pagerank::RankState;

    fn build_star<G: TokenGraph + Default>() -> G {
        // hub 1 connected to 2, 3, 4
        let mut graph = G::default();
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(1, 3).unwrap();
        graph.add_edge(1, 4).unwrap();
        graph
    }

    fn build_from_tokens<G: TokenGraph + Default>(tokens: &[TokenId]) -> G {
        let mut graph = G::default();
        graph.fill_from_tokens(tokens, 3).unwrap();
        graph
    }

    const TEXT: [TokenId; 20] = [
        1000, 1001, 1002, 1003, 1001, 1004, 1005, 1000, 1006, 1002, 1007, 1001, 1008, 1003, 1009,
        1000, 1004, 1010, 1002, 1005,
    ];

    #[test]
    fn test_two_vertex_graph_is_stationary() {
        let mut graph = EdgeListGraph::new();
        graph.add_edge(1, 2).unwrap();

        let mut rank = VanillaTextRank::new(&graph);
        rank.train().unwrap();

        assert!((rank.scores()[&1] - 1.0).abs() < 1e-12);
        assert!((rank.scores()[&2] - 1.0).abs() < 1e-12);
        assert_eq!(rank.state(), RankState::Converged);
        assert_eq!(rank.result().unwrap().iterations, 1);
    }

    #[test]
    fn test_star_hub_ranks_first() {
        let graph: AdjacencyMatrixGraph = build_star();
        let mut rank = VanillaTextRank::new(&graph);
        rank.train().unwrap();

        assert_eq!(rank.top_keywords(1), vec![1]);
        let hub = rank.scores()[&1];
        for spoke in [2, 3, 4] {
            assert!(hub > rank.scores()[&spoke]);
        }
        // spokes tie; the larger id wins
        assert_eq!(rank.top_keywords(4), vec![1, 4, 3, 2]);
    }

    #[test]
    fn test_star_fixed_point() {
        // Fixed point: hub = 0.15 + 0.85 * 3 * spoke, spoke = 0.15 + 0.85 * hub / 3.
        // The star is bipartite, so the iteration oscillates towards it slowly.
        let graph: EdgeListGraph = build_star();
        let mut rank = VanillaTextRank::new(&graph);
        rank.train().unwrap();

        let hub = rank.scores()[&1];
        let spoke = rank.scores()[&2];
        assert!((hub - (0.15 + 0.85 * 3.0 * spoke)).abs() < 1e-2);
        assert!((spoke - (0.15 + 0.85 * hub / 3.0)).abs() < 1e-2);
    }

    #[test]
    fn test_scores_non_negative_and_bounded_iterations() {
        let graph: EdgeListGraph = build_from_tokens(&TEXT);
        let mut rank = VanillaTextRank::new(&graph);
        rank.train().unwrap();

        assert!(rank.scores().values().all(|&s| s >= 0.0));
        assert!(rank.result().unwrap().iterations <= 50);
        assert_eq!(rank.scores().len(), graph.num_vertices());
    }

    #[test]
    fn test_representations_give_identical_scores() {
        let matrix: AdjacencyMatrixGraph = build_from_tokens(&TEXT);
        let list: EdgeListGraph = build_from_tokens(&TEXT);

        let mut rank_matrix = VanillaTextRank::new(&matrix);
        let mut rank_list = VanillaTextRank::new(&list);
        rank_matrix.train().unwrap();
        rank_list.train().unwrap();

        for (token, score) in rank_matrix.scores() {
            assert!((score - rank_list.scores()[token]).abs() < 1e-12);
        }
        assert_eq!(rank_matrix.top_keywords(5), rank_list.top_keywords(5));
    }
}
