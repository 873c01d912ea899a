//! Conformance validators.

pub mod ontology;
