//! Graphs that each violate one node rule.

/// Total degree 2 on a node with in 0 and out 1. The classification matches
/// the stated total, so only the degree sum is wrong.
pub const BROKEN_DEGREE: &str = r#"
@prefix road:     <http://example.org/roadnet/pa#> .
@prefix roadonto: <http://example.org/roadnet/ontology#> .

road:node_7 a roadonto:RoadNode ;
    roadonto:connectsTo road:node_8 ;
    roadonto:hasClassification road:SimpleJunction ;
    roadonto:hasDegree 2 ;
    roadonto:hasInDegree 0 ;
    roadonto:hasOutDegree 1 .

road:node_8 a roadonto:RoadNode ;
    roadonto:hasClassification road:DeadEnd ;
    roadonto:hasDegree 1 ;
    roadonto:hasInDegree 1 ;
    roadonto:hasOutDegree 0 .
"#;

/// A dead end labelled as an intersection.
pub const WRONG_BAND: &str = r#"
@prefix road:     <http://example.org/roadnet/pa#> .
@prefix roadonto: <http://example.org/roadnet/ontology#> .

road:node_7 a roadonto:RoadNode ;
    roadonto:hasClassification road:Intersection ;
    roadonto:hasDegree 1 ;
    roadonto:hasInDegree 1 ;
    roadonto:hasOutDegree 0 .
"#;

/// An edge to a node that was never declared.
pub const DANGLING_EDGE: &str = r#"
@prefix road:     <http://example.org/roadnet/pa#> .
@prefix roadonto: <http://example.org/roadnet/ontology#> .

road:node_7 a roadonto:RoadNode ;
    roadonto:connectsTo road:node_9 ;
    roadonto:hasClassification road:DeadEnd ;
    roadonto:hasDegree 1 ;
    roadonto:hasInDegree 0 ;
    roadonto:hasOutDegree 1 .
"#;
