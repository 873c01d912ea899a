//! Degree statistics for diagnostics.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::graph::RoadGraph;

/// How many distribution rows the text report shows.
const REPORT_ROWS: usize = 10;

/// Summary of a loaded graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkStatistics {
    /// Number of nodes.
    pub node_count: usize,
    /// Number of distinct edges.
    pub edge_count: usize,
    /// Mean total degree; `None` for an empty graph.
    pub avg_degree: Option<f64>,
    /// Largest total degree; `None` for an empty graph.
    pub max_degree: Option<u64>,
    /// Total degree -> number of nodes with that degree.
    pub distribution: BTreeMap<u64, usize>,
}

/// Computes [`NetworkStatistics`] for `graph`. Read-only.
#[must_use]
pub fn summarize(graph: &RoadGraph) -> NetworkStatistics {
    let mut distribution = BTreeMap::new();
    let mut sum: u64 = 0;
    for node in graph.nodes() {
        let degree = graph.degree(node);
        sum += degree;
        *distribution.entry(degree).or_insert(0) += 1;
    }

    let node_count = graph.node_count();
    #[allow(clippy::cast_precision_loss)]
    let avg_degree = (node_count > 0).then(|| sum as f64 / node_count as f64);

    NetworkStatistics {
        node_count,
        edge_count: graph.edge_count(),
        avg_degree,
        max_degree: distribution.keys().next_back().copied(),
        distribution,
    }
}

impl fmt::Display for NetworkStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Network Statistics ===")?;
        writeln!(f, "Nodes: {}", self.node_count)?;
        writeln!(f, "Edges: {}", self.edge_count)?;
        match (self.avg_degree, self.max_degree) {
            (Some(avg), Some(max)) => {
                writeln!(f, "Average degree: {avg:.2}")?;
                writeln!(f, "Max degree: {max}")?;
            }
            _ => writeln!(f, "Average degree: n/a (empty graph)")?,
        }
        writeln!(f)?;
        writeln!(f, "Degree Distribution:")?;
        for (degree, count) in self.distribution.iter().take(REPORT_ROWS) {
            writeln!(f, "  Degree {degree}: {count} nodes")?;
        }
        Ok(())
    }
}
