//! A four-edge star around node 2.
//!
//! Edges `1 2`, `2 3`, `2 4`, `2 5`: node 2 has in-degree 1 and out-degree 3,
//! so total 4 (`road:Intersection`); every leaf has total 1 (`road:DeadEnd`).

/// Valid star graph.
pub const STAR_GRAPH: &str = r#"
@prefix road:     <http://example.org/roadnet/pa#> .
@prefix roadonto: <http://example.org/roadnet/ontology#> .

road:node_1 a roadonto:RoadNode ;
    roadonto:connectsTo road:node_2 ;
    roadonto:hasClassification road:DeadEnd ;
    roadonto:hasDegree 1 ;
    roadonto:hasInDegree 0 ;
    roadonto:hasNodeId 1 ;
    roadonto:hasOutDegree 1 .

road:node_2 a roadonto:RoadNode ;
    roadonto:connectsTo road:node_3, road:node_4, road:node_5 ;
    roadonto:hasClassification road:Intersection ;
    roadonto:hasDegree 4 ;
    roadonto:hasInDegree 1 ;
    roadonto:hasNodeId 2 ;
    roadonto:hasOutDegree 3 .

road:node_3 a roadonto:RoadNode ;
    roadonto:hasClassification road:DeadEnd ;
    roadonto:hasDegree 1 ;
    roadonto:hasInDegree 1 ;
    roadonto:hasNodeId 3 ;
    roadonto:hasOutDegree 0 .

road:node_4 a roadonto:RoadNode ;
    roadonto:hasClassification road:DeadEnd ;
    roadonto:hasDegree 1 ;
    roadonto:hasInDegree 1 ;
    roadonto:hasNodeId 4 ;
    roadonto:hasOutDegree 0 .

road:node_5 a roadonto:RoadNode ;
    roadonto:hasClassification road:DeadEnd ;
    roadonto:hasDegree 1 ;
    roadonto:hasInDegree 1 ;
    roadonto:hasNodeId 5 ;
    roadonto:hasOutDegree 0 .
"#;
