//! `roadnet-convert`: Converts a road network edge list to RDF/OWL with a
//! SKOS degree taxonomy.
//!
//! **Outputs:**
//! - `<output-dir>/roadnet_complete.ttl`: Turtle 1.1
//! - `<output-dir>/roadnet_complete.nt`: N-Triples
//! - `<output-dir>/roadnet_stats.json`: degree statistics (`--stats-json`)
//!
//! **Usage:**
//! ```text
//! roadnet-convert <input_file> [--output-dir <path>] [--max-edges <n>]
//!     [--sample-rate <f>] [--seed <n>] [--batch-size <n>]
//!     [--config <path>] [--stats-json]
//! ```
//!
//! Settings come from built-in defaults, then `--config`, then flags.
//! Log verbosity follows `RUST_LOG` (default `info`).

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use roadnet_ontology::{ConversionSummary, ConvertConfig, Pipeline};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Convert a road network edge list to RDF/OWL.
#[derive(Parser)]
#[command(name = "roadnet-convert", about = "Convert road network to RDF/OWL")]
struct Args {
    /// Input road network file (one `from to` pair per line).
    input_file: PathBuf,

    /// Output directory.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Maximum edges to process (for testing).
    #[arg(long)]
    max_edges: Option<usize>,

    /// Sampling rate (0-1).
    #[arg(long)]
    sample_rate: Option<f64>,

    /// Seed for sampling; omit for a random seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Log emitter progress every N nodes and edges.
    #[arg(long)]
    batch_size: Option<usize>,

    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also write degree statistics as JSON.
    #[arg(long)]
    stats_json: bool,
}

impl Args {
    /// Layers the config file (if any) and then the flags over the defaults.
    fn resolve(&self) -> Result<ConvertConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let config = ConvertConfig::from_toml_file(path)?;
                info!(path = %path.display(), "loaded configuration");
                config
            }
            None => ConvertConfig::default(),
        };
        self.apply(&mut config);
        Ok(config)
    }

    fn apply(&self, config: &mut ConvertConfig) {
        if let Some(dir) = &self.output_dir {
            config.output_dir.clone_from(dir);
        }
        if self.max_edges.is_some() {
            config.max_edges = self.max_edges;
        }
        if let Some(rate) = self.sample_rate {
            config.sample_rate = rate;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(size) = self.batch_size {
            config.batch_size = size;
        }
        config.stats_json |= self.stats_json;
    }
}

fn main() -> Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&directives))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.resolve()?;
    let pipeline = Pipeline::new(config).context("Invalid configuration")?;

    let summary = pipeline
        .run(&args.input_file)
        .with_context(|| format!("Failed to convert {}", args.input_file.display()))?;

    print_report(&summary, pipeline.config());
    Ok(())
}

/// `RUST_LOG`-style directives, falling back to `info` when none are given.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}

fn print_report(summary: &ConversionSummary, config: &ConvertConfig) {
    let load = &summary.load;
    println!(
        "Loaded {} edges ({} comment lines, {} malformed lines, {} sampled out{})",
        load.edges_loaded,
        load.comment_lines,
        load.malformed_lines,
        load.sampled_out,
        if load.cap_reached { ", edge cap reached" } else { "" }
    );
    println!();
    print!("{}", summary.statistics);

    let artifacts = &summary.artifacts;
    println!();
    println!("Saved RDF data to {}/", config.output_dir.display());
    println!("  Written: {}", artifacts.turtle.display());
    println!("  Written: {}", artifacts.ntriples.display());
    if let Some(stats) = &artifacts.stats_json {
        println!("  Written: {}", stats.display());
    }
    println!("  Total triples: {}", summary.triple_count);
    if summary.emit.unclassified > 0 {
        println!("  Unclassified nodes: {}", summary.emit.unclassified);
    }

    println!();
    println!("Conversion complete.");
    println!();
    println!("Next steps:");
    println!(
        "1. Load {} into a SPARQL triple store (e.g., Apache Jena Fuseki)",
        artifacts.turtle.display()
    );
    println!("2. Test SPARQL queries against the endpoint");
    println!("3. Validate the artifacts with roadnet-conformance");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).expect("valid arguments")
    }

    #[test]
    fn defaults_without_flags() {
        let config = parse(&["roadnet-convert", "roadNet-PA.txt"])
            .resolve()
            .expect("resolves");
        assert_eq!(config, ConvertConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let config = parse(&[
            "roadnet-convert",
            "roadNet-PA.txt",
            "--output-dir",
            "out",
            "--max-edges",
            "1000",
            "--sample-rate",
            "0.5",
            "--seed",
            "42",
            "--stats-json",
        ])
        .resolve()
        .expect("resolves");
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.max_edges, Some(1000));
        assert_eq!(config.sample_rate, 0.5);
        assert_eq!(config.seed, Some(42));
        assert!(config.stats_json);
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("convert.toml");
        std::fs::write(&path, "max_edges = 10\nsample_rate = 0.1\nbatch_size = 5\n")
            .expect("write config");

        let config = parse(&[
            "roadnet-convert",
            "in.txt",
            "--config",
            path.to_str().expect("utf-8 path"),
            "--sample-rate",
            "0.9",
        ])
        .resolve()
        .expect("resolves");

        assert_eq!(config.max_edges, Some(10));
        assert_eq!(config.batch_size, 5);
        assert_eq!(config.sample_rate, 0.9);
    }

    #[test]
    fn log_level_defaults_to_info() {
        assert_eq!(log_filter("").to_string(), "info");
    }

    #[test]
    fn rust_log_level_is_honoured() {
        for level in ["debug", "warn"] {
            let filter = log_filter(level).to_string();
            assert!(filter.contains(level), "{level} kept: {filter}");
            assert!(!filter.contains("info"), "{level} not replaced by info: {filter}");
        }
    }

    #[test]
    fn input_file_is_required() {
        assert!(Args::try_parse_from(["roadnet-convert"]).is_err());
    }
}
