//! Ontology validators: vocabulary (OWL, SKOS taxonomy) and artifacts (RDF,
//! node instances).

pub mod instances;
pub mod owl;
pub mod rdf;
pub mod taxonomy;
