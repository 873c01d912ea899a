//! Road network edge lists as RDF/OWL with a SKOS degree taxonomy.
//!
//! The `roadnet-ontology` crate turns a directed edge list (one `from to`
//! pair per line) into a set of RDF statements: a fixed OWL schema, a SKOS
//! concept scheme of five degree bands, and one typed resource per node with
//! its degrees and band. The set is written as Turtle and N-Triples.
//!
//! # Entry Point
//!
//! ```
//! use rand::SeedableRng;
//! use roadnet_ontology::{ConvertConfig, Pipeline};
//!
//! let pipeline = Pipeline::new(ConvertConfig::default()).unwrap();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(0);
//! let conversion = pipeline.convert("1 2\n2 3\n".as_bytes(), &mut rng).unwrap();
//! assert_eq!(conversion.graph.node_count(), 3);
//! ```
//!
//! # Serialization
//!
//! ```
//! let statements = roadnet_ontology::schema_statements();
//! let turtle = roadnet_ontology::serializer::turtle::to_turtle(&statements);
//! let ntriples = roadnet_ontology::serializer::ntriples::to_ntriples(&statements);
//! assert_eq!(ntriples.lines().count(), statements.len());
//! # let _ = turtle;
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod classifier;
pub mod config;
pub mod emitter;
pub mod error;
pub mod graph;
pub mod loader;
pub mod model;
pub mod namespaces;
pub mod pipeline;
pub mod serializer;
pub mod stats;

pub use classifier::classify;
pub use config::ConvertConfig;
pub use emitter::{node_iri, EmitSummary, TripleEmitter};
pub use error::{ConvertError, Result};
pub use graph::{Degrees, NodeId, RoadGraph};
pub use loader::{load_edges, load_file, parse_line, LoadOptions, LoadSummary};
pub use model::{Literal, LiteralKind, Prefix, Term, Triple, TripleSet};
pub use namespaces::road::{band, DegreeBand, BANDS};
pub use pipeline::{persist, Artifacts, Conversion, ConversionSummary, Pipeline};
pub use stats::{summarize, NetworkStatistics};

/// Returns a fresh statement set holding the OWL schema and the SKOS
/// taxonomy, with the default prefixes bound.
///
/// Assembly order: `roadonto:` schema, then `road:` concept scheme.
#[must_use]
pub fn schema_statements() -> TripleSet {
    let mut set = TripleSet::with_default_prefixes();
    set.extend(namespaces::roadonto::build());
    set.extend(namespaces::road::build());
    set
}
