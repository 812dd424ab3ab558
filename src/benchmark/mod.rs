//! Keyword extraction benchmark
//!
//! Runs TF-IDF, RAKE, vanilla TextRank and position-biased TextRank over a
//! labeled corpus and reports the recall of each strategy's top keywords
//! against the gold keyword list of every topic.
//!
//! Every topic gets a fresh encoder, graph and set of engines. The run stops
//! at the first failure: a topic whose text preprocesses to nothing, a missing
//! file, or a strategy that cannot train.

pub mod corpus;
pub mod report;

pub use corpus::{load_idf, Materials};
pub use report::{calculate_recall, BenchmarkReport, ReportRow};

use crate::errors::{KeywordError, Result};
use crate::graph::edge_list::EdgeListGraph;
use crate::graph::TokenGraph;
use crate::nlp::{StopwordFilter, TextEncoder, TextPreprocessor};
use crate::pagerank::{PositionBiasedTextRank, VanillaTextRank};
use crate::rake::StopWordSplitter;
use crate::types::{BenchmarkConfig, ScoreTable};
use crate::variants::{KeywordExtractor, RakeAdapter, TfIdfAdapter, Variant};
use tracing::{debug, info, info_span};

/// Compares the four keyword extraction strategies on a corpus
#[derive(Debug, Clone)]
pub struct KeywordExtractionBenchmark {
    config: BenchmarkConfig,
    stop_words: StopwordFilter,
    idf: ScoreTable<String>,
    report: Option<BenchmarkReport>,
}

impl KeywordExtractionBenchmark {
    pub fn new(config: BenchmarkConfig, stop_words: StopwordFilter, idf: ScoreTable<String>) -> Self {
        Self {
            config,
            stop_words,
            idf,
            report: None,
        }
    }

    /// Load the IDF table and stopwords stored in the materials directory
    pub fn from_materials(config: BenchmarkConfig) -> Result<Self> {
        let materials = Materials::new(&config.materials_path);
        let idf = materials.idf()?;
        let stop_words = materials.stop_words()?;
        Ok(Self::new(config, stop_words, idf))
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Report of the last successful run
    pub fn report(&self) -> Option<&BenchmarkReport> {
        self.report.as_ref()
    }

    /// Evaluate every strategy on every topic
    pub fn run(&mut self) -> Result<BenchmarkReport> {
        self.config.validate()?;

        let materials = Materials::new(&self.config.materials_path);
        let preprocessor = TextPreprocessor::new(self.stop_words.clone());
        let splitter = StopWordSplitter::new(self.stop_words.clone())?;
        let top_n = self.config.top_n;

        let mut report = BenchmarkReport::new(self.config.topics.clone());

        for (index, topic) in self.config.topics.iter().enumerate() {
            let _span = info_span!("benchmark_topic", topic = %topic).entered();

            let text = materials.text(index)?;
            let target = materials.keywords(index)?;

            let tokens = preprocessor.preprocess_text(&text);
            let mut encoder = TextEncoder::new();
            let encoded = encoder
                .encode(&tokens)
                .ok_or_else(|| KeywordError::EmptyTokens {
                    topic: topic.clone(),
                })?;

            let mut graph = EdgeListGraph::new();
            graph.fill_from_tokens(&encoded, self.config.window_length)?;
            graph.fill_positions(&encoded);
            graph.calculate_position_weights();
            debug!(
                tokens = encoded.len(),
                vertices = graph.num_vertices(),
                edges = graph.num_edges(),
                "built co-occurrence graph"
            );

            let mut tfidf = TfIdfAdapter::new(tokens, &self.idf);
            let recall = evaluate(Variant::TfIdf, &mut tfidf, top_n, &target, |keys| {
                Some(keys.to_vec())
            })?;
            report.record(Variant::TfIdf, index, recall);

            let mut rake = RakeAdapter::new(text, &splitter);
            let recall = evaluate(Variant::Rake, &mut rake, top_n, &target, |keys| {
                Some(keys.to_vec())
            })?;
            report.record(Variant::Rake, index, recall);

            let mut vanilla = VanillaTextRank::with_config(&graph, self.config.rank.clone());
            let recall = evaluate(
                Variant::VanillaTextRank,
                &mut vanilla,
                top_n,
                &target,
                |ids| encoder.decode(ids),
            )?;
            report.record(Variant::VanillaTextRank, index, recall);

            let mut biased = PositionBiasedTextRank::with_config(&graph, self.config.rank.clone());
            let recall = evaluate(
                Variant::PositionBiasedTextRank,
                &mut biased,
                top_n,
                &target,
                |ids| encoder.decode(ids),
            )?;
            report.record(Variant::PositionBiasedTextRank, index, recall);
        }

        info!(topics = self.config.topics.len(), "benchmark finished");
        self.report = Some(report.clone());
        Ok(report)
    }

    /// Write the last report as CSV
    pub fn save_to_csv(&self, path: &std::path::Path) -> Result<()> {
        self.report
            .as_ref()
            .ok_or_else(|| KeywordError::invalid_input("benchmark has not been run"))?
            .save_to_csv(path)
    }
}

/// Train one strategy and score its top keywords against the gold list
fn evaluate<E, F>(
    variant: Variant,
    extractor: &mut E,
    top_n: usize,
    target: &[String],
    decode: F,
) -> Result<f64>
where
    E: KeywordExtractor,
    F: FnOnce(&[E::Key]) -> Option<Vec<String>>,
{
    extractor.train()?;
    let top = extractor.top_keywords(top_n);
    let predicted = decode(&top).ok_or_else(|| KeywordError::Decode(variant.to_string()))?;

    let recall = calculate_recall(&predicted, target);
    info!(strategy = %variant, recall, "recall");
    Ok(recall)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_topic(dir: &std::path::Path, index: usize, text: &str, keywords: &str) {
        fs::write(dir.join(format!("{index}_text.txt")), text).unwrap();
        fs::write(dir.join(format!("{index}_keywords.txt")), keywords).unwrap();
    }

    fn stop_words() -> StopwordFilter {
        StopwordFilter::from_list(&["the", "a", "of", "and", "is", "in", "on"])
    }

    #[test]
    fn test_run_single_topic() {
        let dir = tempfile::tempdir().unwrap();
        write_topic(
            dir.path(),
            0,
            "The graph ranking of keywords is a graph problem. Keywords rank in the graph.",
            "graph\nkeywords\n",
        );

        let config = BenchmarkConfig::new(dir.path()).with_topics(["science"]);
        let mut benchmark = KeywordExtractionBenchmark::new(config, stop_words(), ScoreTable::default());
        let report = benchmark.run().unwrap();

        assert!(report.is_complete());
        for variant in Variant::ALL {
            // five distinct words, top 50: every strategy recovers both
            assert_eq!(report.recall(variant, "science"), Some(1.0));
        }
        assert_eq!(benchmark.report(), Some(&report));
    }

    #[test]
    fn test_empty_topic_aborts() {
        let dir = tempfile::tempdir().unwrap();
        write_topic(dir.path(), 0, "Graph ranking works.", "graph\n");
        write_topic(dir.path(), 1, "The, a. Of!", "anything\n");

        let config = BenchmarkConfig::new(dir.path()).with_topics(["first", "second"]);
        let mut benchmark = KeywordExtractionBenchmark::new(config, stop_words(), ScoreTable::default());

        let err = benchmark.run().unwrap_err();
        assert!(matches!(err, KeywordError::EmptyTokens { ref topic } if topic == "second"));
        assert!(benchmark.report().is_none());
        assert!(benchmark.save_to_csv(&dir.path().join("r.csv")).is_err());
    }

    #[test]
    fn test_missing_materials() {
        let dir = tempfile::tempdir().unwrap();
        let config = BenchmarkConfig::new(dir.path()).with_topics(["culture"]);
        let mut benchmark = KeywordExtractionBenchmark::new(config, stop_words(), ScoreTable::default());

        assert!(matches!(benchmark.run(), Err(KeywordError::Io(_))));
        assert!(KeywordExtractionBenchmark::from_materials(BenchmarkConfig::new(dir.path())).is_err());
    }
}
