//! Directed simple graph with per-node degree counters.
//!
//! Nodes come into existence the first time they appear as an edge endpoint.
//! Re-inserting an edge that already exists changes nothing, so degrees count
//! distinct neighbours in each direction. Degree queries are hash lookups.

use std::collections::{HashMap, HashSet};

/// Integer node identifier as it appears in the edge list.
pub type NodeId = u64;

/// A directed edge `(from, to)`.
pub type Edge = (NodeId, NodeId);

/// In- and out-degree of a single node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Degrees {
    /// Number of distinct edges ending at the node.
    pub in_degree: u64,
    /// Number of distinct edges starting at the node.
    pub out_degree: u64,
}

impl Degrees {
    /// Total degree (in + out).
    #[must_use]
    pub fn total(&self) -> u64 {
        self.in_degree + self.out_degree
    }
}

/// The road network graph.
#[derive(Debug, Clone, Default)]
pub struct RoadGraph {
    nodes: HashMap<NodeId, Degrees>,
    edges: HashSet<Edge>,
}

impl RoadGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the edge `from -> to`, creating either endpoint if absent.
    ///
    /// Returns `false` if the edge was already present; in that case no
    /// degree changes. A self loop counts once in each direction.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> bool {
        self.nodes.entry(from).or_default();
        self.nodes.entry(to).or_default();
        if !self.edges.insert((from, to)) {
            return false;
        }
        if let Some(d) = self.nodes.get_mut(&from) {
            d.out_degree += 1;
        }
        if let Some(d) = self.nodes.get_mut(&to) {
            d.in_degree += 1;
        }
        true
    }

    /// Returns true if `node` has appeared in any edge.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    /// Iterates known node ids in unspecified order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// Iterates nodes with their degrees in unspecified order.
    pub fn nodes_with_degrees(&self) -> impl Iterator<Item = (NodeId, Degrees)> + '_ {
        self.nodes.iter().map(|(&id, &d)| (id, d))
    }

    /// Iterates distinct edges in unspecified order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().copied()
    }

    /// Degrees of `node`; all zero for unknown nodes.
    #[must_use]
    pub fn degrees(&self, node: NodeId) -> Degrees {
        self.nodes.get(&node).copied().unwrap_or_default()
    }

    /// In-degree of `node`, 0 if unknown.
    #[must_use]
    pub fn in_degree(&self, node: NodeId) -> u64 {
        self.degrees(node).in_degree
    }

    /// Out-degree of `node`, 0 if unknown.
    #[must_use]
    pub fn out_degree(&self, node: NodeId) -> u64 {
        self.degrees(node).out_degree
    }

    /// Total degree of `node`, 0 if unknown.
    #[must_use]
    pub fn degree(&self, node: NodeId) -> u64 {
        self.degrees(node).total()
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if no edge has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn star_around_node_two() {
        let mut g = RoadGraph::new();
        for (a, b) in [(1, 2), (2, 3), (2, 4), (2, 5)] {
            g.add_edge(a, b);
        }
        assert_eq!(g.node_count(), 5);
        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.in_degree(2), 1);
        assert_eq!(g.out_degree(2), 3);
        assert_eq!(g.degree(2), 4);
        for n in [1, 3, 4, 5] {
            assert_eq!(g.degree(n), 1);
        }
    }

    #[test]
    fn repeated_edge_is_not_counted_twice() {
        let mut g = RoadGraph::new();
        assert!(g.add_edge(1, 2));
        assert!(!g.add_edge(1, 2));
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.out_degree(1), 1);
        assert_eq!(g.in_degree(2), 1);
    }

    #[test]
    fn reverse_edge_is_distinct() {
        let mut g = RoadGraph::new();
        g.add_edge(1, 2);
        g.add_edge(2, 1);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.degree(1), 2);
        assert_eq!(g.degree(2), 2);
    }

    #[test]
    fn self_loop_counts_in_both_directions() {
        let mut g = RoadGraph::new();
        g.add_edge(9, 9);
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.degrees(9), Degrees { in_degree: 1, out_degree: 1 });
    }

    #[test]
    fn unknown_node_has_zero_degree() {
        let g = RoadGraph::new();
        assert!(!g.contains_node(42));
        assert_eq!(g.degree(42), 0);
    }

    proptest! {
        #[test]
        fn degree_sums_match_edge_count(edges in prop::collection::vec((0u64..50, 0u64..50), 0..200)) {
            let mut g = RoadGraph::new();
            for (a, b) in &edges {
                g.add_edge(*a, *b);
            }
            let ins: u64 = g.nodes().map(|n| g.in_degree(n)).sum();
            let outs: u64 = g.nodes().map(|n| g.out_degree(n)).sum();
            prop_assert_eq!(ins, g.edge_count() as u64);
            prop_assert_eq!(outs, g.edge_count() as u64);
        }

        #[test]
        fn insertion_order_does_not_matter(edges in prop::collection::vec((0u64..20, 0u64..20), 0..60)) {
            let mut forward = RoadGraph::new();
            let mut backward = RoadGraph::new();
            for (a, b) in &edges {
                forward.add_edge(*a, *b);
            }
            for (a, b) in edges.iter().rev() {
                backward.add_edge(*a, *b);
            }
            prop_assert_eq!(forward.edge_count(), backward.edge_count());
            for n in forward.nodes() {
                prop_assert_eq!(forward.degrees(n), backward.degrees(n));
            }
        }
    }
}
