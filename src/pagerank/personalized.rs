//! Position-biased TextRank
//!
//! The random-jump term is scaled by each token's position weight, so words
//! that appear early and often in the document collect more score:
//!
//! `score(v) = (1 - d) * position_weight(v) + d * Σ score(n) / degree(n)`

use super::{TextRank, VertexUpdate};
use crate::errors::{KeywordError, Result};
use crate::graph::TokenGraph;
use crate::types::{RankConfig, ScoreTable, TokenId};

/// Update whose jump term follows the position weights
#[derive(Debug, Clone, Default)]
pub struct PositionBiased {
    /// Normalized position weight per token
    weights: ScoreTable<TokenId>,
}

impl PositionBiased {
    /// Use an explicit weight table
    pub fn new(weights: ScoreTable<TokenId>) -> Self {
        Self { weights }
    }

    /// Take the weights already calculated on a graph
    pub fn from_graph<G: TokenGraph>(graph: &G) -> Self {
        Self::new(graph.position_weights().clone())
    }

    /// Weight of a token; tokens without a recorded position weigh nothing
    pub fn weight(&self, vertex: TokenId) -> f64 {
        self.weights.get(&vertex).copied().unwrap_or(0.0)
    }
}

impl VertexUpdate for PositionBiased {
    #[inline]
    fn update(&self, vertex: TokenId, neighbor_sum: f64, damping: f64) -> f64 {
        (1.0 - damping) * self.weight(vertex) + damping * neighbor_sum
    }

    fn validate(&self) -> Result<()> {
        if self.weights.is_empty() {
            return Err(KeywordError::invalid_input(
                "position weights must be calculated on the graph before training",
            ));
        }
        Ok(())
    }
}

/// Position-biased TextRank over any [`TokenGraph`]
pub type PositionBiasedTextRank<'g, G> = TextRank<'g, G, PositionBiased>;

impl<'g, G: TokenGraph> TextRank<'g, G, PositionBiased> {
    /// Create a position-biased engine with the default hyperparameters
    ///
    /// The graph's position weights are captured here, so
    /// `calculate_position_weights` must run before construction.
    pub fn new(graph: &'g G) -> Self {
        Self::with_config(graph, RankConfig::default())
    }

    /// Create a position-biased engine with custom hyperparameters
    pub fn with_config(graph: &'g G, config: RankConfig) -> Self {
        Self::with_update(graph, PositionBiased::from_graph(graph), config)
    }
}
