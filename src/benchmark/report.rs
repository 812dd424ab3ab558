//! Recall metric and the comparison report

use crate::errors::Result;
use crate::variants::Variant;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Fraction of `target` keywords recovered by `predicted`
///
/// `tp` counts predictions present in the target, `fn` counts target keywords
/// absent from the predictions; recall is `tp / (tp + fn)`, and 0.0 when both
/// are zero.
pub fn calculate_recall<S: AsRef<str>>(predicted: &[S], target: &[S]) -> f64 {
    let contains = |list: &[S], item: &str| list.iter().any(|x| x.as_ref() == item);

    let true_positive = predicted
        .iter()
        .filter(|p| contains(target, p.as_ref()))
        .count();
    let false_negative = target
        .iter()
        .filter(|t| !contains(predicted, t.as_ref()))
        .count();

    let total = true_positive + false_negative;
    if total == 0 {
        0.0
    } else {
        true_positive as f64 / total as f64
    }
}

/// Recall of one strategy across all topics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Strategy name as printed in the report
    pub name: String,
    /// Recall per topic, parallel to [`BenchmarkReport::topics`]
    pub recall: Vec<Option<f64>>,
}

/// Strategy × topic recall table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    topics: Vec<String>,
    rows: Vec<ReportRow>,
}

impl BenchmarkReport {
    /// An empty table with one row per strategy
    pub fn new(topics: Vec<String>) -> Self {
        let rows = Variant::ALL
            .iter()
            .map(|variant| ReportRow {
                name: variant.as_str().to_string(),
                recall: vec![None; topics.len()],
            })
            .collect();
        Self { topics, rows }
    }

    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Store the recall of `variant` on the topic at `topic_index`
    pub fn record(&mut self, variant: Variant, topic_index: usize, recall: f64) {
        if let Some(cell) = self.rows[variant as usize].recall.get_mut(topic_index) {
            *cell = Some(recall);
        }
    }

    /// Recall of `variant` on `topic`, if recorded
    pub fn recall(&self, variant: Variant, topic: &str) -> Option<f64> {
        let index = self.topics.iter().position(|t| t == topic)?;
        self.rows[variant as usize].recall[index]
    }

    /// Whether every strategy has a value for every topic
    pub fn is_complete(&self) -> bool {
        self.rows
            .iter()
            .all(|row| row.recall.iter().all(Option::is_some))
    }

    /// CSV text: `name,<topics...>` header, one row per strategy, no
    /// trailing newline. Unrecorded cells are left empty.
    pub fn to_csv(&self) -> String {
        let header = std::iter::once("name".to_string())
            .chain(self.topics.iter().cloned())
            .collect::<Vec<_>>()
            .join(",");

        let rows = self.rows.iter().map(|row| {
            std::iter::once(row.name.clone())
                .chain(row.recall.iter().map(|value| match value {
                    Some(recall) => format!("{recall:?}"),
                    None => String::new(),
                }))
                .collect::<Vec<_>>()
                .join(",")
        });

        std::iter::once(header)
            .chain(rows)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn save_to_csv(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_csv())?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save_to_json(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
