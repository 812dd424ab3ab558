//! Dense adjacency-matrix graph
//!
//! Every vertex owns a row of the matrix; an edge sets the two mirrored
//! cells. Incidence queries are O(1), degree queries are a row scan.

use super::positions::PositionIndex;
use super::TokenGraph;
use crate::errors::{KeywordError, Result};
use crate::types::TokenId;
use rustc_hash::FxHashMap;

/// A co-occurrence graph stored as a square boolean matrix
#[derive(Debug, Clone, Default)]
pub struct AdjacencyMatrixGraph {
    /// Maps token -> row/column index
    index: FxHashMap<TokenId, usize>,
    /// Tokens by row index (insertion order)
    vertices: Vec<TokenId>,
    /// `matrix[i][j]` is true iff vertices i and j are incident
    matrix: Vec<Vec<bool>>,
    /// Positional metadata of the source sequence
    positions: PositionIndex,
}

impl AdjacencyMatrixGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the row for a token, returning its index
    fn get_or_create_vertex(&mut self, vertex: TokenId) -> usize {
        if let Some(&idx) = self.index.get(&vertex) {
            return idx;
        }

        let idx = self.vertices.len();
        for row in &mut self.matrix {
            row.push(false);
        }
        self.matrix.push(vec![false; idx + 1]);
        self.index.insert(vertex, idx);
        self.vertices.push(vertex);
        idx
    }

    /// Row index of a token, if present
    fn vertex_index(&self, vertex: TokenId) -> Option<usize> {
        self.index.get(&vertex).copied()
    }
}

impl TokenGraph for AdjacencyMatrixGraph {
    fn vertices(&self) -> &[TokenId] {
        &self.vertices
    }

    fn add_edge(&mut self, v1: TokenId, v2: TokenId) -> Result<()> {
        if v1 == v2 {
            return Err(KeywordError::invalid_input(format!(
                "self-loop on vertex {v1}"
            )));
        }

        let i = self.get_or_create_vertex(v1);
        let j = self.get_or_create_vertex(v2);
        self.matrix[i][j] = true;
        self.matrix[j][i] = true;
        Ok(())
    }

    fn is_incidental(&self, v1: TokenId, v2: TokenId) -> Option<bool> {
        let i = self.vertex_index(v1)?;
        let j = self.vertex_index(v2)?;
        Some(self.matrix[i][j])
    }

    fn calculate_inout_score(&self, v: TokenId) -> Option<usize> {
        let i = self.vertex_index(v)?;
        Some(self.matrix[i].iter().filter(|&&cell| cell).count())
    }

    fn neighbors(&self, v: TokenId) -> Option<Vec<TokenId>> {
        let i = self.vertex_index(v)?;
        Some(
            self.matrix[i]
                .iter()
                .zip(&self.vertices)
                .filter(|&(&cell, _)| cell)
                .map(|(_, &token)| token)
                .collect(),
        )
    }

    fn positions(&self) -> &PositionIndex {
        &self.positions
    }

    fn positions_mut(&mut self) -> &mut PositionIndex {
        &mut self.positions
    }
}
