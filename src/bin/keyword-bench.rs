//! keyword-bench: compare keyword extraction strategies on a labeled corpus
//!
//! ```bash
//! # materials dir holds <i>_text.txt, <i>_keywords.txt, IDF.json, eng_stop_words.txt
//! keyword-bench assets/benchmark_materials --out report.csv
//!
//! # custom topics and hyperparameters from a JSON config
//! keyword-bench assets/benchmark_materials --config bench.json -v
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use rapid_keywords::benchmark::{load_idf, Materials};
use rapid_keywords::nlp::StopwordFilter;
use rapid_keywords::{BenchmarkConfig, KeywordExtractionBenchmark};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Recall of TF-IDF, RAKE and two TextRank variants against gold keywords
#[derive(Parser, Debug)]
#[command(name = "keyword-bench")]
#[command(version)]
#[command(about, long_about = None)]
struct Cli {
    /// Directory with the benchmark materials
    #[arg(value_name = "MATERIALS")]
    materials: PathBuf,

    /// IDF table (JSON object); defaults to MATERIALS/IDF.json
    #[arg(long)]
    idf: Option<PathBuf>,

    /// Newline-separated stopword file; defaults to MATERIALS/eng_stop_words.txt,
    /// or the built-in English list when that file is missing
    #[arg(long)]
    stop_words: Option<PathBuf>,

    /// JSON benchmark config; command-line options override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the CSV report
    #[arg(short, long, default_value = "report.csv")]
    out: PathBuf,

    /// Also write the report as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Number of predicted keywords per strategy
    #[arg(short = 'n', long)]
    top_n: Option<usize>,

    /// Co-occurrence window length
    #[arg(short, long)]
    window: Option<usize>,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => BenchmarkConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => BenchmarkConfig::default(),
    };
    config.materials_path = cli.materials.clone();
    if let Some(top_n) = cli.top_n {
        config.top_n = top_n;
    }
    if let Some(window) = cli.window {
        config.window_length = window;
    }

    let materials = Materials::new(&cli.materials);

    let idf = match &cli.idf {
        Some(path) => load_idf(path),
        None => materials.idf(),
    }
    .context("failed to load IDF table")?;

    let stop_words = match &cli.stop_words {
        Some(path) => StopwordFilter::from_file(path)
            .with_context(|| format!("failed to load stopwords {}", path.display()))?,
        None => materials.stop_words().unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to built-in English stopwords");
            StopwordFilter::new("en")
        }),
    };

    let mut benchmark = KeywordExtractionBenchmark::new(config, stop_words, idf);
    let report = benchmark.run().context("benchmark failed")?;

    println!("{}", report.to_csv());

    report
        .save_to_csv(&cli.out)
        .with_context(|| format!("failed to write {}", cli.out.display()))?;
    if let Some(path) = &cli.json {
        report
            .save_to_json(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    Ok(())
}
