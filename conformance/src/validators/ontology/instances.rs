//! Instance data validator.
//!
//! Checks node resources in a parsed statement set:
//! - every `roadonto:RoadNode` has exactly one in-degree, out-degree and
//!   total degree, and the total equals in + out
//! - the node's classification is the band of its degree (none for 0)
//! - both ends of every `roadonto:connectsTo` are typed `RoadNode`

use std::collections::{HashMap, HashSet};

use roadnet_ontology::model::iris::RDF_TYPE;
use roadnet_ontology::namespaces::roadonto::{
    CONNECTS_TO, HAS_CLASSIFICATION, HAS_DEGREE, HAS_IN_DEGREE, HAS_OUT_DEGREE, ROAD_NODE,
};
use roadnet_ontology::{classify, Term, TripleSet};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "ontology/instances";

/// The degree-related objects of one node.
#[derive(Default)]
struct NodeFacts<'a> {
    in_degree: Vec<&'a Term>,
    out_degree: Vec<&'a Term>,
    degree: Vec<&'a Term>,
    classification: Vec<&'a Term>,
}

fn single_integer(values: &[&Term]) -> Option<u64> {
    match values {
        [value] => value.as_integer(),
        _ => None,
    }
}

/// Validates node and edge statements in `set`.
pub fn validate(set: &TripleSet) -> ConformanceReport {
    let nodes: HashSet<&str> = set
        .iter()
        .filter(|t| t.predicate == RDF_TYPE && t.object.as_iri() == Some(ROAD_NODE))
        .map(|t| t.subject.as_str())
        .collect();

    let mut facts: HashMap<&str, NodeFacts<'_>> = HashMap::new();
    let mut edges = Vec::new();
    for t in set.iter() {
        let subject = t.subject.as_str();
        let object = &t.object;
        match t.predicate.as_str() {
            CONNECTS_TO => edges.push((subject, object)),
            HAS_IN_DEGREE => facts.entry(subject).or_default().in_degree.push(object),
            HAS_OUT_DEGREE => facts.entry(subject).or_default().out_degree.push(object),
            HAS_DEGREE => facts.entry(subject).or_default().degree.push(object),
            HAS_CLASSIFICATION => facts.entry(subject).or_default().classification.push(object),
            _ => {}
        }
    }

    let mut report = ConformanceReport::new();
    report.push(check_degrees(&nodes, &facts));
    report.push(check_classifications(&nodes, &facts));
    report.push(check_edges(&nodes, &edges));
    report
}

fn sorted<'a>(nodes: &HashSet<&'a str>) -> Vec<&'a str> {
    let mut v: Vec<_> = nodes.iter().copied().collect();
    v.sort_unstable();
    v
}

fn check_degrees(nodes: &HashSet<&str>, facts: &HashMap<&str, NodeFacts<'_>>) -> TestResult {
    let empty = NodeFacts::default();
    let mut violations = Vec::new();
    for node in sorted(nodes) {
        let f = facts.get(node).unwrap_or(&empty);
        let values = (
            single_integer(&f.in_degree),
            single_integer(&f.out_degree),
            single_integer(&f.degree),
        );
        match values {
            (Some(i), Some(o), Some(d)) if i.checked_add(o) == Some(d) => {}
            (Some(i), Some(o), Some(d)) => {
                violations.push(format!("{node}: hasDegree {d} != {i} + {o}"));
            }
            _ => violations.push(format!(
                "{node}: expected one integer each for in-degree, out-degree and degree"
            )),
        }
    }
    TestResult::from_violations(
        VALIDATOR,
        format!("{} nodes satisfy hasDegree = hasInDegree + hasOutDegree", nodes.len()),
        "Node degrees are inconsistent",
        violations,
    )
}

fn check_classifications(
    nodes: &HashSet<&str>,
    facts: &HashMap<&str, NodeFacts<'_>>,
) -> TestResult {
    let empty = NodeFacts::default();
    let mut violations = Vec::new();
    for node in sorted(nodes) {
        let f = facts.get(node).unwrap_or(&empty);
        let Some(degree) = single_integer(&f.degree) else {
            continue;
        };
        let expected = classify(degree).map(|b| b.iri());
        let actual: Vec<_> = f.classification.iter().filter_map(|t| t.as_iri()).collect();
        let ok = match &expected {
            Some(iri) => actual == [iri.as_str()] && f.classification.len() == 1,
            None => f.classification.is_empty(),
        };
        if !ok {
            violations.push(format!(
                "{node}: degree {degree} expects {}, found {actual:?}",
                expected.as_deref().unwrap_or("no classification")
            ));
        }
    }
    TestResult::from_violations(
        VALIDATOR,
        "Every node is classified by its degree band",
        "Node classifications disagree with degrees",
        violations,
    )
}

fn check_edges(nodes: &HashSet<&str>, edges: &[(&str, &Term)]) -> TestResult {
    let mut violations = Vec::new();
    for &(from, to) in edges {
        if !nodes.contains(from) {
            violations.push(format!("connectsTo subject {from} is not a RoadNode"));
        }
        match to.as_iri() {
            Some(iri) if nodes.contains(iri) => {}
            _ => violations.push(format!("{from} connectsTo {to}, which is not a RoadNode")),
        }
    }
    TestResult::from_violations(
        VALIDATOR,
        format!("{} connectsTo statements link RoadNodes", edges.len()),
        "connectsTo statements reference unknown nodes",
        violations,
    )
}
