//! OWL vocabulary validator.
//!
//! Validates the live schema and concept scheme, no file I/O:
//! - property domain/range targets are declared classes or XSD datatypes
//! - every `skos:broader` target is a concept of the scheme
//! - the broader chain is linear: one root, no branching, no cycles

use std::collections::{HashMap, HashSet};

use roadnet_ontology::model::iris::{
    RDF_TYPE, SKOS_BROADER, SKOS_CONCEPT, SKOS_IN_SCHEME, XSD,
};
use roadnet_ontology::namespaces::road::CONCEPT_SCHEME;
use roadnet_ontology::namespaces::roadonto;
use roadnet_ontology::{schema_statements, Term, TripleSet};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "ontology/owl";

/// Validates the schema and the concept scheme built by the converter.
pub fn validate() -> ConformanceReport {
    let mut report = ConformanceReport::new();
    report.push(check_property_targets(&roadonto::schema()));

    let statements = schema_statements();
    report.push(check_broader_targets(&statements));
    report.push(check_broader_chain(&statements));
    report
}

/// Domain and range of every property must be a declared class or an XSD
/// datatype.
#[must_use]
pub fn check_property_targets(schema: &roadonto::Schema) -> TestResult {
    let known = |iri: &str| schema.find_class(iri).is_some() || iri.starts_with(XSD);

    let mut violations = Vec::new();
    for prop in &schema.properties {
        if !known(prop.domain) {
            violations.push(format!("Property {} has unknown domain: {}", prop.id, prop.domain));
        }
        if !known(prop.range) {
            violations.push(format!("Property {} has unknown range: {}", prop.id, prop.range));
        }
    }

    TestResult::from_violations(
        VALIDATOR,
        format!(
            "All {} property domains and ranges are declared",
            schema.properties.len()
        ),
        "Properties reference undeclared classes",
        violations,
    )
}

/// Concepts of [`CONCEPT_SCHEME`] found in `set`.
fn scheme_concepts(set: &TripleSet) -> HashSet<&str> {
    set.iter()
        .filter(|t| {
            t.predicate == SKOS_IN_SCHEME && t.object.as_iri() == Some(CONCEPT_SCHEME)
        })
        .map(|t| t.subject.as_str())
        .filter(|s| {
            set.objects(s, RDF_TYPE)
                .any(|o| o.as_iri() == Some(SKOS_CONCEPT))
        })
        .collect()
}

/// `(narrower, broader)` pairs in `set`.
fn broader_links(set: &TripleSet) -> Vec<(&str, &str)> {
    set.iter()
        .filter(|t| t.predicate == SKOS_BROADER)
        .filter_map(|t| match &t.object {
            Term::Iri(target) => Some((t.subject.as_str(), target.as_str())),
            Term::Literal(_) => None,
        })
        .collect()
}

/// Every `skos:broader` statement must link two concepts of the scheme.
#[must_use]
pub fn check_broader_targets(set: &TripleSet) -> TestResult {
    let concepts = scheme_concepts(set);
    let mut violations = Vec::new();
    for t in set.iter().filter(|t| t.predicate == SKOS_BROADER) {
        if !concepts.contains(t.subject.as_str()) {
            violations.push(format!("{} is not a concept of the scheme", t.subject));
        }
        match t.object.as_iri() {
            Some(target) if concepts.contains(target) => {}
            _ => violations.push(format!(
                "{} has broader target {} outside the scheme",
                t.subject, t.object
            )),
        }
    }

    TestResult::from_violations(
        VALIDATOR,
        format!("All broader links stay within the {} scheme concepts", concepts.len()),
        "Broader links leave the concept scheme",
        violations,
    )
}

/// The broader links must form a single chain covering every concept.
#[must_use]
pub fn check_broader_chain(set: &TripleSet) -> TestResult {
    let concepts = scheme_concepts(set);
    let links = broader_links(set);
    let mut violations = Vec::new();

    let mut up: HashMap<&str, &str> = HashMap::new();
    let mut down: HashMap<&str, &str> = HashMap::new();
    for &(narrower, broader) in &links {
        if let Some(prev) = up.insert(narrower, broader) {
            violations.push(format!("{narrower} has two broader concepts: {prev}, {broader}"));
        }
        if let Some(prev) = down.insert(broader, narrower) {
            violations.push(format!("{broader} has two narrower concepts: {prev}, {narrower}"));
        }
    }

    let mut roots: Vec<&str> = concepts
        .iter()
        .copied()
        .filter(|c| !up.contains_key(c))
        .collect();
    roots.sort_unstable();
    if roots.len() != 1 {
        violations.push(format!("expected one top concept, found {}: {roots:?}", roots.len()));
    }

    // Walk down from the root; a linear chain visits every concept once.
    if let [root] = roots.as_slice() {
        let mut seen = HashSet::from([*root]);
        let mut current = *root;
        while let Some(&next) = down.get(current) {
            if !seen.insert(next) {
                violations.push(format!("broader chain has a cycle through {next}"));
                break;
            }
            current = next;
        }
        if seen.len() != concepts.len() {
            violations.push(format!(
                "chain from {root} reaches {} of {} concepts",
                seen.len(),
                concepts.len()
            ));
        }
    }

    TestResult::from_violations(
        VALIDATOR,
        format!("Broader chain is linear over {} concepts", concepts.len()),
        "Broader hierarchy is not a single chain",
        violations,
    )
}
