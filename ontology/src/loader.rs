//! Edge list loader.
//!
//! Input is plain text with one `from to` pair per line. Lines starting with
//! `#` are comments. Lines that do not split into exactly two tokens, whose
//! tokens are not non-negative integers, or that are not valid UTF-8 are
//! skipped without error.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::DEFAULT_LOAD_PROGRESS_EVERY;
use crate::error::{ConvertError, Result};
use crate::graph::{Edge, RoadGraph};

/// Controls which input lines become edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadOptions {
    /// Stop after this many accepted edges (counted before de-duplication).
    pub max_edges: Option<usize>,
    /// Probability of keeping a well-formed line. `1.0` keeps every line and
    /// never touches the random source.
    pub sample_rate: f64,
    /// Log progress every this many accepted edges.
    pub progress_every: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            max_edges: None,
            sample_rate: 1.0,
            progress_every: DEFAULT_LOAD_PROGRESS_EVERY,
        }
    }
}

/// Counters describing one load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    /// Edges passed to the graph, including repeats of an existing edge.
    pub edges_loaded: usize,
    /// Lines starting with `#`.
    pub comment_lines: usize,
    /// Lines with the wrong token count, non-integer tokens or invalid UTF-8.
    pub malformed_lines: usize,
    /// Well-formed lines dropped by sampling.
    pub sampled_out: usize,
    /// True if loading stopped at `max_edges`.
    pub cap_reached: bool,
}

/// Classification of a single input line, before sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    Comment,
    Malformed,
    Pair(&'a str, &'a str),
}

fn split_line(line: &str) -> Line<'_> {
    if line.starts_with('#') {
        return Line::Comment;
    }
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(from), Some(to), None) => Line::Pair(from, to),
        _ => Line::Malformed,
    }
}

fn parse_pair(from: &str, to: &str) -> Option<Edge> {
    Some((from.parse().ok()?, to.parse().ok()?))
}

/// Parses one edge list line. Returns `None` for comments and malformed lines.
#[must_use]
pub fn parse_line(line: &str) -> Option<Edge> {
    match split_line(line) {
        Line::Pair(from, to) => parse_pair(from, to),
        Line::Comment | Line::Malformed => None,
    }
}

/// Reads edges from `reader` into `graph`.
///
/// Sampling happens after the token-count check and before integer parsing,
/// so only lines with two tokens consume randomness.
///
/// # Errors
///
/// Returns the underlying I/O error if reading fails. A line that is not
/// valid UTF-8 is counted as malformed, not returned as an error.
pub fn load_edges<R, G>(
    mut reader: R,
    graph: &mut RoadGraph,
    options: &LoadOptions,
    rng: &mut G,
) -> io::Result<LoadSummary>
where
    R: BufRead,
    G: Rng + ?Sized,
{
    let mut summary = LoadSummary::default();
    let mut buf = Vec::new();

    loop {
        if options.max_edges.is_some_and(|cap| summary.edges_loaded >= cap) {
            summary.cap_reached = true;
            break;
        }

        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let Ok(line) = std::str::from_utf8(&buf) else {
            summary.malformed_lines += 1;
            continue;
        };

        let (from, to) = match split_line(line) {
            Line::Comment => {
                summary.comment_lines += 1;
                continue;
            }
            Line::Malformed => {
                summary.malformed_lines += 1;
                continue;
            }
            Line::Pair(from, to) => (from, to),
        };

        if options.sample_rate < 1.0 && rng.gen::<f64>() > options.sample_rate {
            summary.sampled_out += 1;
            continue;
        }

        let Some((from, to)) = parse_pair(from, to) else {
            summary.malformed_lines += 1;
            continue;
        };

        graph.add_edge(from, to);
        summary.edges_loaded += 1;

        if summary.edges_loaded % options.progress_every.max(1) == 0 {
            info!(edges = summary.edges_loaded, "loaded edges");
        }
    }

    debug!(
        comments = summary.comment_lines,
        malformed = summary.malformed_lines,
        sampled_out = summary.sampled_out,
        "skipped input lines"
    );
    info!(
        edges = summary.edges_loaded,
        nodes = graph.node_count(),
        distinct_edges = graph.edge_count(),
        "load complete"
    );
    Ok(summary)
}

/// Opens `path` and loads it with [`load_edges`].
///
/// # Errors
///
/// Returns [`ConvertError::ReadInput`] if the file cannot be opened or read.
pub fn load_file<G: Rng + ?Sized>(
    path: &Path,
    graph: &mut RoadGraph,
    options: &LoadOptions,
    rng: &mut G,
) -> Result<LoadSummary> {
    let read_err = |source| ConvertError::ReadInput {
        path: path.to_path_buf(),
        source,
    };
    info!(path = %path.display(), "loading dataset");
    let file = File::open(path).map_err(read_err)?;
    load_edges(BufReader::new(file), graph, options, rng).map_err(read_err)
}
