//! The conversion pipeline.
//!
//! A run is a strict sequence of four phases:
//! 1. **Schema**: the OWL schema and SKOS taxonomy are added to a fresh set.
//! 2. **Load**: the edge list is read into a [`RoadGraph`].
//! 3. **Emit**: the finished graph is translated to statements.
//! 4. **Report/Persist**: statistics are computed and the set is written as
//!    Turtle and N-Triples.
//!
//! Emit only starts once Load has consumed the whole input, since every
//! degree literal depends on the final graph.

use std::fs::{self, File};
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::config::ConvertConfig;
use crate::emitter::{EmitSummary, TripleEmitter};
use crate::error::{ConvertError, Result};
use crate::graph::RoadGraph;
use crate::loader::{load_edges, load_file, LoadSummary};
use crate::model::TripleSet;
use crate::schema_statements;
use crate::serializer::{ntriples, turtle};
use crate::stats::{summarize, NetworkStatistics};

/// File name of the Turtle artifact.
pub const TURTLE_FILE: &str = "roadnet_complete.ttl";
/// File name of the N-Triples artifact.
pub const NTRIPLES_FILE: &str = "roadnet_complete.nt";
/// File name of the optional statistics report.
pub const STATS_FILE: &str = "roadnet_stats.json";

/// The in-memory result of the Schema, Load and Emit phases.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Schema, taxonomy and data statements.
    pub statements: TripleSet,
    /// The loaded graph.
    pub graph: RoadGraph,
    /// Loader counters.
    pub load: LoadSummary,
    /// Emitter counters.
    pub emit: EmitSummary,
}

/// Paths written by [`persist`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    /// The Turtle file.
    pub turtle: PathBuf,
    /// The N-Triples file.
    pub ntriples: PathBuf,
    /// The statistics report, if requested.
    pub stats_json: Option<PathBuf>,
}

/// Everything a completed run reports.
#[derive(Debug, Clone)]
pub struct ConversionSummary {
    /// Loader counters.
    pub load: LoadSummary,
    /// Emitter counters.
    pub emit: EmitSummary,
    /// Degree statistics.
    pub statistics: NetworkStatistics,
    /// Number of distinct statements written.
    pub triple_count: usize,
    /// Written files.
    pub artifacts: Artifacts,
}

/// Drives one conversion according to a [`ConvertConfig`].
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: ConvertConfig,
}

impl Pipeline {
    /// Creates a pipeline after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns the validation error from [`ConvertConfig::validate`].
    pub fn new(config: ConvertConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this pipeline runs with.
    #[must_use]
    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Runs all four phases on `input`, seeding sampling from the config.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::ReadInput`] if the input cannot be opened or
    /// read, and the persist errors of [`persist`].
    pub fn run(&self, input: &Path) -> Result<ConversionSummary> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.run_with_rng(input, &mut rng)
    }

    /// Runs all four phases on `input` with an explicit random source.
    ///
    /// The input is read before anything is written, so a missing file aborts
    /// the run without touching the output directory.
    ///
    /// # Errors
    ///
    /// Same as [`Pipeline::run`].
    pub fn run_with_rng<G: Rng + ?Sized>(
        &self,
        input: &Path,
        rng: &mut G,
    ) -> Result<ConversionSummary> {
        let statements = schema_phase();
        let mut graph = RoadGraph::new();
        let load = load_file(input, &mut graph, &self.config.load_options(), rng)?;
        let conversion = self.emit_phase(statements, graph, load);

        let statistics = summarize(&conversion.graph);
        let artifacts = persist(&conversion.statements, &self.config.output_dir)?;
        let stats_json = if self.config.stats_json {
            Some(write_statistics(&statistics, &self.config.output_dir)?)
        } else {
            None
        };

        Ok(ConversionSummary {
            load: conversion.load,
            emit: conversion.emit,
            statistics,
            triple_count: conversion.statements.len(),
            artifacts: Artifacts {
                stats_json,
                ..artifacts
            },
        })
    }

    /// Runs the Schema, Load and Emit phases over `reader`, in memory.
    ///
    /// # Errors
    ///
    /// Returns the I/O error raised while reading.
    pub fn convert<R, G>(&self, reader: R, rng: &mut G) -> io::Result<Conversion>
    where
        R: BufRead,
        G: Rng + ?Sized,
    {
        let statements = schema_phase();
        let mut graph = RoadGraph::new();
        let load = load_edges(reader, &mut graph, &self.config.load_options(), rng)?;
        Ok(self.emit_phase(statements, graph, load))
    }

    fn emit_phase(
        &self,
        mut statements: TripleSet,
        graph: RoadGraph,
        load: LoadSummary,
    ) -> Conversion {
        let emit = TripleEmitter::new(self.config.batch_size).emit_into(&graph, &mut statements);
        Conversion {
            statements,
            graph,
            load,
            emit,
        }
    }
}

fn schema_phase() -> TripleSet {
    info!("creating ontology and SKOS concepts");
    schema_statements()
}

/// Writes `set` to `dir` as [`TURTLE_FILE`] and [`NTRIPLES_FILE`], creating
/// `dir` if needed.
///
/// # Errors
///
/// Returns [`ConvertError::CreateOutputDir`] or [`ConvertError::WriteOutput`].
pub fn persist(set: &TripleSet, dir: &Path) -> Result<Artifacts> {
    fs::create_dir_all(dir).map_err(|source| ConvertError::CreateOutputDir {
        path: dir.to_path_buf(),
        source,
    })?;
    info!(dir = %dir.display(), "saving RDF data");

    let turtle_path = dir.join(TURTLE_FILE);
    write_file(&turtle_path, |out| turtle::write_turtle(set, out))?;
    info!(path = %turtle_path.display(), triples = set.len(), "saved complete graph");

    let nt_path = dir.join(NTRIPLES_FILE);
    write_file(&nt_path, |out| ntriples::write_ntriples(set, out))?;
    info!(path = %nt_path.display(), "saved N-Triples");

    Ok(Artifacts {
        turtle: turtle_path,
        ntriples: nt_path,
        stats_json: None,
    })
}

/// Writes `statistics` as pretty JSON to [`STATS_FILE`] in `dir`.
///
/// # Errors
///
/// Returns [`ConvertError::WriteOutput`] or [`ConvertError::WriteStats`].
pub fn write_statistics(statistics: &NetworkStatistics, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(STATS_FILE);
    let json = serde_json::to_string_pretty(statistics)?;
    fs::write(&path, json).map_err(|source| ConvertError::WriteOutput {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), "saved statistics");
    Ok(path)
}

fn write_file<F>(path: &Path, body: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let write_err = |source| ConvertError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(write_err)?;
    let mut out = BufWriter::new(file);
    body(&mut out).map_err(write_err)?;
    out.flush().map_err(write_err)
}
