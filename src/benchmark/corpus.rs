//! Benchmark materials on disk
//!
//! ```text
//! materials/
//!   0_text.txt        article for topic 0
//!   0_keywords.txt    gold keywords for topic 0, one per line
//!   ...
//!   IDF.json          {"word": idf, ...}
//!   eng_stop_words.txt
//! ```

use crate::errors::Result;
use crate::nlp::StopwordFilter;
use crate::types::ScoreTable;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the IDF table inside a materials directory
pub const IDF_FILE: &str = "IDF.json";

/// File name of the stopword list inside a materials directory
pub const STOP_WORDS_FILE: &str = "eng_stop_words.txt";

/// Read access to a materials directory
#[derive(Debug, Clone)]
pub struct Materials {
    root: PathBuf,
}

impl Materials {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn text_path(&self, index: usize) -> PathBuf {
        self.root.join(format!("{index}_text.txt"))
    }

    pub fn keywords_path(&self, index: usize) -> PathBuf {
        self.root.join(format!("{index}_keywords.txt"))
    }

    /// Raw article of the topic at `index`
    pub fn text(&self, index: usize) -> Result<String> {
        Ok(fs::read_to_string(self.text_path(index))?)
    }

    /// Gold keywords of the topic at `index`: trimmed lines, blanks skipped
    pub fn keywords(&self, index: usize) -> Result<Vec<String>> {
        let content = fs::read_to_string(self.keywords_path(index))?;
        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// IDF table stored next to the articles
    pub fn idf(&self) -> Result<ScoreTable<String>> {
        load_idf(&self.root.join(IDF_FILE))
    }

    /// Stopword list stored next to the articles
    pub fn stop_words(&self) -> Result<StopwordFilter> {
        StopwordFilter::from_file(&self.root.join(STOP_WORDS_FILE))
    }
}

/// Load a JSON object of word → IDF
pub fn load_idf(path: &Path) -> Result<ScoreTable<String>> {
    let content = fs::read_to_string(path)?;
    let idf: ScoreTable<String> = serde_json::from_str(&content)?;
    debug!(path = %path.display(), words = idf.len(), "loaded idf table");
    Ok(idf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::KeywordError;

    #[test]
    fn test_read_topic_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("0_text.txt"), "Some article.").unwrap();
        fs::write(dir.path().join("0_keywords.txt"), " article \n\nsome\n").unwrap();

        let materials = Materials::new(dir.path());
        assert_eq!(materials.text(0).unwrap(), "Some article.");
        assert_eq!(materials.keywords(0).unwrap(), vec!["article", "some"]);
        assert!(matches!(materials.text(1), Err(KeywordError::Io(_))));
    }

    #[test]
    fn test_load_idf() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(IDF_FILE), r#"{"graph": 1.5, "the": 0.01}"#).unwrap();

        let idf = Materials::new(dir.path()).idf().unwrap();
        assert_eq!(idf.len(), 2);
        assert!((idf["graph"] - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_malformed_idf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(IDF_FILE);
        fs::write(&path, "[1, 2, 3]").unwrap();

        assert!(matches!(load_idf(&path), Err(KeywordError::Json(_))));
    }
}
