//! Sparse edge-list graph
//!
//! Each vertex keeps the list of tokens it is incident to. Memory grows with
//! the number of edges rather than the square of the vocabulary, which is
//! what the benchmark uses on full articles.

use super::positions::PositionIndex;
use super::TokenGraph;
use crate::errors::{KeywordError, Result};
use crate::types::TokenId;
use rustc_hash::FxHashMap;

/// A vertex in the edge list
#[derive(Debug, Clone)]
pub struct EdgeListNode {
    /// The token this vertex stands for
    pub token: TokenId,
    /// Incident tokens in the order their edges were added
    pub edges: Vec<TokenId>,
}

impl EdgeListNode {
    /// Create a vertex with no edges
    pub fn new(token: TokenId) -> Self {
        Self {
            token,
            edges: Vec::new(),
        }
    }
}

/// A co-occurrence graph stored as per-vertex adjacency lists
#[derive(Debug, Clone, Default)]
pub struct EdgeListGraph {
    /// Maps token -> node index
    index: FxHashMap<TokenId, usize>,
    /// Tokens in insertion order
    vertices: Vec<TokenId>,
    /// Node storage, parallel to `vertices`
    nodes: Vec<EdgeListNode>,
    /// Positional metadata of the source sequence
    positions: PositionIndex,
}

impl EdgeListGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the node for a token, returning its index
    fn get_or_create_node(&mut self, vertex: TokenId) -> usize {
        if let Some(&idx) = self.index.get(&vertex) {
            return idx;
        }

        let idx = self.nodes.len();
        self.index.insert(vertex, idx);
        self.vertices.push(vertex);
        self.nodes.push(EdgeListNode::new(vertex));
        idx
    }

    /// Get a node by token
    pub fn get_node(&self, vertex: TokenId) -> Option<&EdgeListNode> {
        self.index.get(&vertex).map(|&idx| &self.nodes[idx])
    }
}

impl TokenGraph for EdgeListGraph {
    fn vertices(&self) -> &[TokenId] {
        &self.vertices
    }

    fn add_edge(&mut self, v1: TokenId, v2: TokenId) -> Result<()> {
        if v1 == v2 {
            return Err(KeywordError::invalid_input(format!(
                "self-loop on vertex {v1}"
            )));
        }

        let i = self.get_or_create_node(v1);
        let j = self.get_or_create_node(v2);

        if !self.nodes[i].edges.contains(&v2) {
            self.nodes[i].edges.push(v2);
            self.nodes[j].edges.push(v1);
        }

        Ok(())
    }

    fn is_incidental(&self, v1: TokenId, v2: TokenId) -> Option<bool> {
        let node = self.get_node(v1)?;
        self.get_node(v2)?;
        Some(node.edges.contains(&v2))
    }

    fn calculate_inout_score(&self, v: TokenId) -> Option<usize> {
        self.get_node(v).map(|node| node.edges.len())
    }

    fn neighbors(&self, v: TokenId) -> Option<Vec<TokenId>> {
        self.get_node(v).map(|node| node.edges.clone())
    }

    fn positions(&self) -> &PositionIndex {
        &self.positions
    }

    fn positions_mut(&mut self) -> &mut PositionIndex {
        &mut self.positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_path_graph() -> EdgeListGraph {
        // 1 -- 2 -- 3
        let mut graph = EdgeListGraph::new();
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(2, 3).unwrap();
        graph
    }

    #[test]
    fn test_inout_scores() {
        let graph = build_path_graph();

        assert_eq!(graph.calculate_inout_score(2), Some(2));
        assert_eq!(graph.calculate_inout_score(1), Some(1));
        assert_eq!(graph.calculate_inout_score(99), None);
    }

    #[test]
    fn test_edges_are_mirrored() {
        let graph = build_path_graph();

        assert_eq!(graph.get_node(1).unwrap().edges, vec![2]);
        assert_eq!(graph.get_node(2).unwrap().edges, vec![1, 3]);
        assert_eq!(graph.get_node(3).unwrap().edges, vec![2]);
    }

    #[test]
    fn test_incidence() {
        let graph = build_path_graph();

        assert_eq!(graph.is_incidental(3, 2), Some(true));
        assert_eq!(graph.is_incidental(1, 3), Some(false));
        assert_eq!(graph.is_incidental(1, 42), None);
        assert_eq!(graph.is_incidental(42, 1), None);
    }

    #[test]
    fn test_duplicate_edge_is_noop() {
        let mut graph = build_path_graph();
        graph.add_edge(3, 2).unwrap();

        assert_eq!(graph.calculate_inout_score(2), Some(2));
        assert_eq!(graph.num_edges(), 2);
    }

    #[test]
    fn test_self_loop_leaves_graph_untouched() {
        let mut graph = EdgeListGraph::new();

        assert!(graph.add_edge(5, 5).is_err());
        assert_eq!(graph.calculate_inout_score(5), None);
        assert!(graph.is_empty());
    }

    #[test]
    fn test_vertices_keep_insertion_order() {
        let mut graph = EdgeListGraph::new();
        graph.add_edge(30, 10).unwrap();
        graph.add_edge(20, 10).unwrap();

        assert_eq!(graph.vertices(), &[30, 10, 20]);
    }
}
