//! `roadonto:` namespace: the OWL schema for road network graphs.
//!
//! Declares the `RoadNode` and `RoadEdge` classes, the `connectsTo` object
//! property and the four integer-valued datatype properties that carry node
//! identity and degree counts. The schema is fixed and independent of the
//! input data.

use crate::model::iris::*;
use crate::model::{Class, Property, PropertyKind, Term, Triple};

/// IRI of the ontology resource itself.
pub const ONTOLOGY: &str = "http://example.org/roadnet/ontology#";
/// `roadonto:RoadNode`
pub const ROAD_NODE: &str = "http://example.org/roadnet/ontology#RoadNode";
/// `roadonto:RoadEdge`
pub const ROAD_EDGE: &str = "http://example.org/roadnet/ontology#RoadEdge";
/// `roadonto:connectsTo`
pub const CONNECTS_TO: &str = "http://example.org/roadnet/ontology#connectsTo";
/// `roadonto:hasNodeId`
pub const HAS_NODE_ID: &str = "http://example.org/roadnet/ontology#hasNodeId";
/// `roadonto:hasDegree`
pub const HAS_DEGREE: &str = "http://example.org/roadnet/ontology#hasDegree";
/// `roadonto:hasInDegree`
pub const HAS_IN_DEGREE: &str = "http://example.org/roadnet/ontology#hasInDegree";
/// `roadonto:hasOutDegree`
pub const HAS_OUT_DEGREE: &str = "http://example.org/roadnet/ontology#hasOutDegree";
/// `roadonto:hasClassification`, linking a node to its degree band concept.
pub const HAS_CLASSIFICATION: &str = "http://example.org/roadnet/ontology#hasClassification";
/// `roadonto:minDegree`, the inclusive lower bound of a degree band.
pub const MIN_DEGREE: &str = "http://example.org/roadnet/ontology#minDegree";
/// `roadonto:maxDegree`, the inclusive upper bound of a bounded degree band.
pub const MAX_DEGREE: &str = "http://example.org/roadnet/ontology#maxDegree";

/// The road network schema: ontology header, classes and properties.
#[derive(Debug, Clone)]
pub struct Schema {
    /// IRI of the `owl:Ontology` resource.
    pub iri: &'static str,
    /// Human-readable ontology label.
    pub label: &'static str,
    /// Declared OWL classes.
    pub classes: Vec<Class>,
    /// Declared OWL properties.
    pub properties: Vec<Property>,
}

impl Schema {
    /// Translates the schema into RDF statements.
    #[must_use]
    pub fn triples(&self) -> Vec<Triple> {
        let mut out = vec![
            Triple::new(self.iri, RDF_TYPE, Term::iri(OWL_ONTOLOGY)),
            Triple::new(self.iri, RDFS_LABEL, Term::plain(self.label)),
        ];

        for class in &self.classes {
            out.push(Triple::new(class.id, RDF_TYPE, Term::iri(OWL_CLASS)));
            out.push(Triple::new(class.id, RDFS_LABEL, Term::plain(class.label)));
            if let Some(comment) = class.comment {
                out.push(Triple::new(class.id, RDFS_COMMENT, Term::plain(comment)));
            }
        }

        for prop in &self.properties {
            let type_iri = match prop.kind {
                PropertyKind::Datatype => OWL_DATATYPE_PROPERTY,
                PropertyKind::Object => OWL_OBJECT_PROPERTY,
            };
            out.push(Triple::new(prop.id, RDF_TYPE, Term::iri(type_iri)));
            out.push(Triple::new(prop.id, RDFS_DOMAIN, Term::iri(prop.domain)));
            out.push(Triple::new(prop.id, RDFS_RANGE, Term::iri(prop.range)));
            if let Some(label) = prop.label {
                out.push(Triple::new(prop.id, RDFS_LABEL, Term::plain(label)));
            }
        }

        out
    }

    /// Looks up a class by its full IRI.
    #[must_use]
    pub fn find_class(&self, iri: &str) -> Option<&Class> {
        self.classes.iter().find(|c| c.id == iri)
    }

    /// Looks up a property by its full IRI.
    #[must_use]
    pub fn find_property(&self, iri: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == iri)
    }
}

/// Returns the road network schema.
#[must_use]
pub fn schema() -> Schema {
    Schema {
        iri: ONTOLOGY,
        label: "Pennsylvania Road Network Ontology",
        classes: classes(),
        properties: properties(),
    }
}

/// Emits the schema statements. Deterministic; safe to call repeatedly.
#[must_use]
pub fn build() -> Vec<Triple> {
    schema().triples()
}

fn classes() -> Vec<Class> {
    vec![
        Class {
            id: ROAD_NODE,
            label: "Road Network Node",
            comment: Some("Represents an intersection or endpoint in the road network"),
        },
        Class {
            id: ROAD_EDGE,
            label: "Road Connection",
            comment: None,
        },
    ]
}

fn properties() -> Vec<Property> {
    vec![
        Property {
            id: CONNECTS_TO,
            kind: PropertyKind::Object,
            label: Some("connects to"),
            domain: ROAD_NODE,
            range: ROAD_NODE,
        },
        Property {
            id: HAS_NODE_ID,
            kind: PropertyKind::Datatype,
            label: None,
            domain: ROAD_NODE,
            range: XSD_INTEGER,
        },
        Property {
            id: HAS_DEGREE,
            kind: PropertyKind::Datatype,
            label: Some("connectivity degree"),
            domain: ROAD_NODE,
            range: XSD_INTEGER,
        },
        Property {
            id: HAS_IN_DEGREE,
            kind: PropertyKind::Datatype,
            label: None,
            domain: ROAD_NODE,
            range: XSD_INTEGER,
        },
        Property {
            id: HAS_OUT_DEGREE,
            kind: PropertyKind::Datatype,
            label: None,
            domain: ROAD_NODE,
            range: XSD_INTEGER,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TripleSet;

    #[test]
    fn declares_both_classes() {
        let s = schema();
        assert!(s.find_class(ROAD_NODE).is_some());
        assert!(s.find_class(ROAD_EDGE).is_some());
    }

    #[test]
    fn connects_to_is_node_to_node() {
        let s = schema();
        let p = s.find_property(CONNECTS_TO).expect("connectsTo declared");
        assert_eq!(p.kind, PropertyKind::Object);
        assert_eq!(p.domain, ROAD_NODE);
        assert_eq!(p.range, ROAD_NODE);
    }

    #[test]
    fn degree_properties_are_integer_valued() {
        let s = schema();
        for iri in [HAS_NODE_ID, HAS_DEGREE, HAS_IN_DEGREE, HAS_OUT_DEGREE] {
            let p = s.find_property(iri).expect("degree property declared");
            assert_eq!(p.kind, PropertyKind::Datatype);
            assert_eq!(p.domain, ROAD_NODE);
            assert_eq!(p.range, XSD_INTEGER);
        }
    }

    #[test]
    fn only_has_degree_carries_a_label_among_datatype_properties() {
        let labelled: Vec<_> = schema()
            .properties
            .iter()
            .filter(|p| p.kind == PropertyKind::Datatype && p.label.is_some())
            .map(|p| p.id)
            .collect();
        assert_eq!(labelled, vec![HAS_DEGREE]);
    }

    #[test]
    fn building_twice_is_idempotent() {
        let mut set = TripleSet::new();
        set.extend(build());
        let once = set.len();
        set.extend(build());
        assert_eq!(set.len(), once);
        // header 2 + RoadNode 3 + RoadEdge 2 + connectsTo 4 + hasDegree 4 + 3 props * 3
        assert_eq!(once, 24);
    }
}
