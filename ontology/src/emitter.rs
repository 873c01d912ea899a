//! Translation of the loaded graph into RDF statements.
//!
//! Every node becomes a `roadonto:RoadNode` resource `road:node_<id>` carrying
//! its id, in-degree, out-degree and total degree as `xsd:integer` literals,
//! plus a `roadonto:hasClassification` link when its degree falls in a band.
//! Every distinct edge becomes one `roadonto:connectsTo` statement.

use tracing::info;

use crate::classifier::classify;
use crate::config::DEFAULT_BATCH_SIZE;
use crate::graph::{Degrees, Edge, NodeId, RoadGraph};
use crate::model::iris::{RDF_TYPE, ROAD};
use crate::model::{Term, Triple, TripleSet};
use crate::namespaces::roadonto::{
    CONNECTS_TO, HAS_CLASSIFICATION, HAS_DEGREE, HAS_IN_DEGREE, HAS_NODE_ID, HAS_OUT_DEGREE,
    ROAD_NODE,
};

/// Full IRI of the resource for `node`.
#[must_use]
pub fn node_iri(node: NodeId) -> String {
    format!("{ROAD}node_{node}")
}

/// Statements describing one node.
#[must_use]
pub fn node_triples(node: NodeId, degrees: Degrees) -> Vec<Triple> {
    let iri = node_iri(node);
    let total = degrees.total();
    let mut out = Vec::with_capacity(6);
    out.push(Triple::new(&iri, RDF_TYPE, Term::iri(ROAD_NODE)));
    out.push(Triple::new(&iri, HAS_NODE_ID, Term::integer(node)));
    out.push(Triple::new(&iri, HAS_IN_DEGREE, Term::integer(degrees.in_degree)));
    out.push(Triple::new(&iri, HAS_OUT_DEGREE, Term::integer(degrees.out_degree)));
    out.push(Triple::new(&iri, HAS_DEGREE, Term::integer(total)));
    if let Some(band) = classify(total) {
        out.push(Triple::new(iri, HAS_CLASSIFICATION, Term::iri(band.iri())));
    }
    out
}

/// The statement for one directed edge.
#[must_use]
pub fn edge_triple((from, to): Edge) -> Triple {
    Triple::new(node_iri(from), CONNECTS_TO, Term::iri(node_iri(to)))
}

/// Counts reported by [`TripleEmitter::emit_into`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitSummary {
    /// Nodes translated.
    pub nodes: usize,
    /// Edges translated.
    pub edges: usize,
    /// Nodes without a band (degree 0).
    pub unclassified: usize,
}

/// Walks a [`RoadGraph`] and produces its data statements.
#[derive(Debug, Clone, Copy)]
pub struct TripleEmitter {
    batch_size: usize,
}

impl Default for TripleEmitter {
    fn default() -> Self {
        Self::new(DEFAULT_BATCH_SIZE)
    }
}

impl TripleEmitter {
    /// Creates an emitter that logs progress every `batch_size` nodes and edges.
    #[must_use]
    pub fn new(batch_size: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
        }
    }

    /// Lazily yields node statements followed by edge statements.
    ///
    /// Order follows the graph's internal iteration order and is not stable;
    /// collect into a [`TripleSet`] for a canonical order.
    pub fn emit<'a>(&self, graph: &'a RoadGraph) -> impl Iterator<Item = Triple> + 'a {
        graph
            .nodes_with_degrees()
            .flat_map(|(node, degrees)| node_triples(node, degrees))
            .chain(graph.edges().map(edge_triple))
    }

    /// Emits every statement into `set`, logging progress as it goes.
    pub fn emit_into(&self, graph: &RoadGraph, set: &mut TripleSet) -> EmitSummary {
        info!(nodes = graph.node_count(), edges = graph.edge_count(), "converting network to RDF");
        let mut summary = EmitSummary::default();

        for (node, degrees) in graph.nodes_with_degrees() {
            if classify(degrees.total()).is_none() {
                summary.unclassified += 1;
            }
            set.extend(node_triples(node, degrees));
            summary.nodes += 1;
            if summary.nodes % self.batch_size == 0 {
                info!(nodes = summary.nodes, "processed nodes");
            }
        }

        for edge in graph.edges() {
            set.insert(edge_triple(edge));
            summary.edges += 1;
            if summary.edges % self.batch_size == 0 {
                info!(edges = summary.edges, "processed edges");
            }
        }

        info!(
            nodes = summary.nodes,
            edges = summary.edges,
            "converted nodes and edges to RDF"
        );
        summary
    }
}
