//! Road network conformance suite.
//!
//! Validates the converter's vocabulary and the artifacts it writes.
//!
//! # Conformance Scope
//!
//! | Component | Standard |
//! |-----------|----------|
//! | Schema | OWL 2: declared domains and ranges |
//! | Taxonomy | SKOS: linear broader chain, bands partition degrees 1.. |
//! | Artifacts (Turtle/N-Triples) | RDF 1.1, Turtle 1.1, identical statement sets |
//! | Node instances | degree sum, band classification, typed edge endpoints |
//!
//! # Entry Point
//!
//! ```no_run
//! use roadnet_conformance::{ArtifactPaths, run_all};
//! use std::path::PathBuf;
//!
//! let paths = ArtifactPaths {
//!     artifacts: PathBuf::from("output"),
//! };
//! let report = run_all(&paths).expect("Failed to run conformance");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod tests;
pub mod validators;

pub use report::{ConformanceReport, Severity, TestResult};

use validators::ontology;

/// Paths required by the conformance runner.
pub struct ArtifactPaths {
    /// Directory holding `roadnet_complete.ttl` and `roadnet_complete.nt`.
    pub artifacts: std::path::PathBuf,
}

/// Runs all conformance validators and returns the aggregated report.
///
/// Validators are run in this order:
/// 1. OWL vocabulary (live schema, no file I/O)
/// 2. Degree band taxonomy (live band table)
/// 3. RDF 1.1 / Turtle 1.1 artifacts
/// 4. Node instances in the parsed Turtle artifact
///
/// # Errors
///
/// Returns an error only if a file system operation fails.
pub fn run_all(paths: &ArtifactPaths) -> anyhow::Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    // 1. OWL vocabulary
    report.extend(ontology::owl::validate());

    // 2. Taxonomy
    report.extend(ontology::taxonomy::validate());

    // 3. RDF artifacts
    let (rdf, statements) = ontology::rdf::validate(&paths.artifacts)?;
    report.extend(rdf);

    // 4. Node instances
    match statements {
        Some(set) => report.extend(ontology::instances::validate(&set)),
        None => report.push(TestResult::warn(
            "ontology/instances",
            "Skipped: Turtle artifact unavailable",
        )),
    }

    Ok(report)
}
