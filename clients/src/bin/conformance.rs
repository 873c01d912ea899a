//! `roadnet-conformance`: Validates the road network vocabulary and the
//! artifacts written by `roadnet-convert`.
//!
//! Runs the complete conformance suite across:
//! - Vocabulary (OWL domains and ranges, SKOS broader chain)
//! - Degree taxonomy (band partition, classifier agreement)
//! - Artifacts (Turtle 1.1 and N-Triples parse, identical statement sets)
//! - Node instances (degree sums, classifications, edge endpoints)
//!
//! **Usage:**
//! ```text
//! roadnet-conformance [--artifacts <path>]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use roadnet_conformance::{run_all, ArtifactPaths, Severity};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Run the road network conformance suite.
#[derive(Parser)]
#[command(
    name = "roadnet-conformance",
    about = "Validate road network RDF artifacts"
)]
struct Args {
    /// Directory holding the converter output (default: output/).
    #[arg(long, default_value = "output")]
    artifacts: PathBuf,
}

fn main() -> Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&directives))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    info!(artifacts = %args.artifacts.display(), "running conformance suite");

    let report = run_all(&ArtifactPaths {
        artifacts: args.artifacts,
    })?;

    println!("Road Network Conformance Report");
    println!("===============================");
    println!();

    for result in &report.results {
        println!("{result}");
    }

    let failed = report.failure_count();
    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        report.count(Severity::Pass),
        report.count(Severity::Warning),
        failed
    );

    if failed > 0 {
        eprintln!("Conformance FAILED: {failed} check(s) did not pass.");
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}

/// `RUST_LOG`-style directives, falling back to `info` when none are given.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}
