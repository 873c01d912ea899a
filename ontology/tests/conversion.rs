//! End-to-end conversion scenarios: loading, classification, determinism
//! and persisted artifacts.

use std::fs;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use roadnet_ontology::namespaces::roadonto::{HAS_CLASSIFICATION, HAS_DEGREE};
use roadnet_ontology::serializer::{ntriples, turtle};
use roadnet_ontology::{
    band, node_iri, ConvertConfig, Conversion, LoadOptions, Pipeline, Term, TripleSet,
};

fn convert(input: &str, config: ConvertConfig) -> Conversion {
    let mut rng = StdRng::seed_from_u64(7);
    Pipeline::new(config)
        .expect("valid config")
        .convert(input.as_bytes(), &mut rng)
        .expect("in-memory read")
}

fn classification(set: &TripleSet, node: u64) -> Option<String> {
    set.objects(&node_iri(node), HAS_CLASSIFICATION)
        .next()
        .and_then(Term::as_iri)
        .map(str::to_owned)
}

/// Node 2 is the hub of a four-edge star: in 1, out 3, total 4.
#[test]
fn star_scenario_classifications() {
    let conversion = convert("1 2\n2 3\n2 4\n2 5\n", ConvertConfig::default());
    let set = &conversion.statements;

    assert_eq!(conversion.graph.in_degree(2), 1);
    assert_eq!(conversion.graph.out_degree(2), 3);
    assert_eq!(
        classification(set, 2),
        band("Intersection").map(|b| b.iri())
    );
    for n in [1, 3, 4, 5] {
        assert_eq!(
            classification(set, n),
            band("DeadEnd").map(|b| b.iri()),
            "node {n} should be a dead end"
        );
    }

    let classified = set
        .iter()
        .filter(|t| t.predicate == HAS_CLASSIFICATION)
        .count();
    assert_eq!(classified, 5);
}

#[test]
fn comment_line_is_ignored() {
    let conversion = convert("# comment\n7 8\n", ConvertConfig::default());
    assert_eq!(conversion.load.edges_loaded, 1);
    assert_eq!(conversion.graph.edge_count(), 1);
}

#[test]
fn three_token_line_creates_nothing() {
    let conversion = convert("1 2 3\n", ConvertConfig::default());
    assert_eq!(conversion.load.edges_loaded, 0);
    assert!(conversion.graph.is_empty());
    assert!(classification(&conversion.statements, 1).is_none());
}

#[test]
fn repeated_edge_collapses() {
    let conversion = convert("1 2\n1 2\n", ConvertConfig::default());
    assert_eq!(conversion.load.edges_loaded, 2);
    assert_eq!(conversion.graph.edge_count(), 1);
    let degree = conversion
        .statements
        .objects(&node_iri(1), HAS_DEGREE)
        .next()
        .and_then(Term::as_integer);
    assert_eq!(degree, Some(1));
}

#[test]
fn identical_input_gives_identical_serializations() {
    let input = "1 2\n2 3\n3 1\n3 4\n4 5\n5 6\n6 3\n";
    let a = convert(input, ConvertConfig::default());
    let b = convert(input, ConvertConfig::default());
    assert_eq!(
        turtle::to_turtle(&a.statements),
        turtle::to_turtle(&b.statements)
    );
    assert_eq!(
        ntriples::to_ntriples(&a.statements),
        ntriples::to_ntriples(&b.statements)
    );
}

#[test]
fn edge_order_does_not_change_the_statement_set() {
    let forward = convert("1 2\n2 3\n3 4\n", ConvertConfig::default());
    let backward = convert("3 4\n2 3\n1 2\n", ConvertConfig::default());
    assert_eq!(forward.statements, backward.statements);
}

#[test]
fn full_sample_rate_keeps_every_line() {
    let input: String = (0..200).map(|i| format!("{i} {}\n", i * 7 % 13)).collect();
    let unsampled = convert(&input, ConvertConfig::default());
    let explicit = convert(
        &input,
        ConvertConfig {
            sample_rate: 1.0,
            seed: Some(99),
            ..ConvertConfig::default()
        },
    );
    assert_eq!(unsampled.load.edges_loaded, 200);
    assert_eq!(explicit.load.sampled_out, 0);
    assert_eq!(unsampled.statements, explicit.statements);
}

#[test]
fn run_writes_both_artifacts_and_optional_stats() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("roadNet-PA.txt");
    fs::write(
        &input,
        "# Directed graph (each unordered pair of nodes is saved once)\n\
         # FromNodeId\tToNodeId\n\
         0\t1\n0\t6309\n0\t6353\n1\t0\n6353\t0\n",
    )
    .expect("write input");

    let config = ConvertConfig {
        output_dir: dir.path().join("output"),
        stats_json: true,
        ..ConvertConfig::default()
    };
    let summary = Pipeline::new(config)
        .expect("valid config")
        .run(&input)
        .expect("conversion succeeds");

    assert_eq!(summary.load.edges_loaded, 5);
    assert_eq!(summary.load.comment_lines, 2);
    assert_eq!(summary.statistics.node_count, 4);
    assert_eq!(summary.statistics.max_degree, Some(5));

    let ttl = fs::read_to_string(&summary.artifacts.turtle).expect("read ttl");
    let nt = fs::read_to_string(&summary.artifacts.ntriples).expect("read nt");
    assert!(ttl.contains("road:node_0"));
    assert_eq!(nt.lines().count(), summary.triple_count);

    let stats_path = summary.artifacts.stats_json.expect("stats requested");
    let stats: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(stats_path).expect("read stats"))
            .expect("stats are JSON");
    assert_eq!(stats["node_count"], 4);
}

proptest! {
    #[test]
    fn max_edges_is_an_exact_cap(total in 1usize..80, cap in 0usize..80) {
        let input: String = (0..total).map(|i| format!("{i} {}\n", i + 1)).collect();
        let conversion = convert(&input, ConvertConfig {
            max_edges: Some(cap),
            ..ConvertConfig::default()
        });
        prop_assert_eq!(conversion.load.edges_loaded, cap.min(total));
    }

    #[test]
    fn sampled_loads_never_exceed_input(rate in 0.0f64..=1.0, seed in any::<u64>()) {
        let input: String = (0..100).map(|i| format!("{i} {}\n", i + 1)).collect();
        let mut graph = roadnet_ontology::RoadGraph::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let options = LoadOptions { sample_rate: rate, ..LoadOptions::default() };
        let summary = roadnet_ontology::load_edges(input.as_bytes(), &mut graph, &options, &mut rng)
            .expect("in-memory read");
        prop_assert_eq!(summary.edges_loaded + summary.sampled_out, 100);
    }
}
