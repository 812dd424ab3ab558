//! TextRank ranking engines
//!
//! [`TextRank`] is the shared iterate-to-convergence driver. The per-vertex
//! update formula is a [`VertexUpdate`] strategy: [`standard::Vanilla`] for
//! classic TextRank and [`personalized::PositionBiased`] for the
//! position-aware variant.

pub mod personalized;
pub mod standard;

use crate::errors::{KeywordError, Result};
use crate::graph::TokenGraph;
use crate::types::{RankConfig, ScoreTable, TokenId};
use crate::variants::KeywordExtractor;
use rustc_hash::FxHashMap;
use tracing::{debug, info_span};

pub use personalized::{PositionBiased, PositionBiasedTextRank};
pub use standard::{Vanilla, VanillaTextRank};

/// Lifecycle of a rank engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankState {
    /// Constructed, scores unset
    Initialized,
    /// Iterating
    Training,
    /// Summed score change fell to the threshold
    Converged,
    /// Stopped by the iteration cap
    MaxIterReached,
}

impl RankState {
    /// Whether scores are final and readable
    pub fn is_terminal(self) -> bool {
        matches!(self, RankState::Converged | RankState::MaxIterReached)
    }
}

/// Result of a TextRank computation
#[derive(Debug, Clone)]
pub struct RankResult {
    /// Scores for each vertex (indexed like `graph.vertices()`)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Final convergence delta
    pub delta: f64,
    /// Whether the algorithm converged
    pub converged: bool,
}

impl RankResult {
    /// Create a new rank result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }
}

/// The per-vertex recomputation step of a TextRank variant
pub trait VertexUpdate {
    /// New score of `vertex` given the damping factor and
    /// `neighbor_sum = Σ score(n) / degree(n)` over its neighbors
    fn update(&self, vertex: TokenId, neighbor_sum: f64, damping: f64) -> f64;

    /// Check that the strategy has what it needs before training starts
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Iterative TextRank over a borrowed [`TokenGraph`]
///
/// Single-use: one successful `train()` populates the score table.
#[derive(Debug)]
pub struct TextRank<'g, G, U> {
    graph: &'g G,
    update: U,
    config: RankConfig,
    state: RankState,
    scores: ScoreTable<TokenId>,
    result: Option<RankResult>,
}

impl<'g, G: TokenGraph, U: VertexUpdate> TextRank<'g, G, U> {
    /// Bind a graph to an update strategy
    pub fn with_update(graph: &'g G, update: U, config: RankConfig) -> Self {
        Self {
            graph,
            update,
            config,
            state: RankState::Initialized,
            scores: ScoreTable::default(),
            result: None,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> RankState {
        self.state
    }

    /// Hyperparameters in use
    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    /// Convergence details of the finished run
    pub fn result(&self) -> Option<&RankResult> {
        self.result.as_ref()
    }

    /// Run the fixed-point iteration until convergence or the iteration cap
    pub fn train(&mut self) -> Result<()> {
        if self.state != RankState::Initialized {
            return Err(KeywordError::invalid_input(
                "rank engine has already been trained",
            ));
        }
        self.config.validate()?;
        self.update.validate()?;

        self.state = RankState::Training;
        let graph = self.graph;
        let _span = info_span!("textrank", vertices = graph.num_vertices()).entered();

        let vertices = graph.vertices();
        let n = vertices.len();

        if n == 0 {
            self.result = Some(RankResult::new(Vec::new(), 0, 0.0, true));
            self.state = RankState::Converged;
            return Ok(());
        }

        let index: FxHashMap<TokenId, usize> =
            vertices.iter().enumerate().map(|(i, &v)| (v, i)).collect();

        // Neighbor lists in vertex order so every representation sums identically
        let adjacency: Vec<Vec<usize>> = vertices
            .iter()
            .map(|&v| {
                let mut neighbors: Vec<usize> = graph
                    .neighbors(v)
                    .unwrap_or_default()
                    .iter()
                    .filter_map(|n| index.get(n).copied())
                    .collect();
                neighbors.sort_unstable();
                neighbors
            })
            .collect();

        let inv_degree: Vec<f64> = vertices
            .iter()
            .map(|&v| match graph.calculate_inout_score(v) {
                Some(degree) if degree > 0 => 1.0 / degree as f64,
                _ => 0.0,
            })
            .collect();

        let damping = self.config.damping;
        let mut scores = vec![1.0; n];
        let mut new_scores = vec![0.0; n];
        let mut iterations = 0;
        let mut delta = f64::MAX;
        let mut converged = false;

        while iterations < self.config.max_iterations {
            iterations += 1;

            for (i, &vertex) in vertices.iter().enumerate() {
                let neighbor_sum: f64 = adjacency[i]
                    .iter()
                    .map(|&j| inv_degree[j] * scores[j])
                    .sum();
                new_scores[i] = self.update.update(vertex, neighbor_sum, damping);
            }

            // Convergence delta (L1 norm, not averaged)
            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut new_scores);

            if iterations % 10 == 1 {
                debug!(iteration = iterations, delta, "textrank iteration");
            }

            if delta <= self.config.convergence_threshold {
                converged = true;
                break;
            }
        }

        debug!(iterations, delta, converged, "textrank finished");

        self.scores = vertices.iter().copied().zip(scores.iter().copied()).collect();
        self.result = Some(RankResult::new(scores, iterations, delta, converged));
        self.state = if converged {
            RankState::Converged
        } else {
            RankState::MaxIterReached
        };

        Ok(())
    }

    /// Scores per token (empty before training)
    pub fn scores(&self) -> &ScoreTable<TokenId> {
        &self.scores
    }

    /// Top `n` tokens by score; ties go to the larger token id
    pub fn top_keywords(&self, n: usize) -> Vec<TokenId> {
        let mut ranked: Vec<(TokenId, f64)> =
            self.scores.iter().map(|(&t, &s)| (t, s)).collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| b.0.cmp(&a.0)));
        ranked.into_iter().take(n).map(|(t, _)| t).collect()
    }
}

impl<G: TokenGraph, U: VertexUpdate> KeywordExtractor for TextRank<'_, G, U> {
    type Key = TokenId;

    fn train(&mut self) -> Result<()> {
        TextRank::train(self)
    }

    fn scores(&self) -> &ScoreTable<TokenId> {
        TextRank::scores(self)
    }

    fn top_keywords(&self, n: usize) -> Vec<TokenId> {
        TextRank::top_keywords(self, n)
    }
}
