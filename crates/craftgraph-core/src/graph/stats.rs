//! Derived metrics over crafting graphs and prerequisite subgraphs.
//!
//! # Metrics Provided
//!
//! - **node_count / edge_count**: sizes of the graph.
//! - **acyclic**: whether the graph contains no directed cycle.
//! - **prerequisite_count**: distinct prerequisite items of a target
//!   (`node_count - 1` of its subgraph).
//! - **relationship_count**: distinct direct dependency edges among those
//!   items (`edge_count` of the subgraph).
//! - **longest_chain**: length in edges of the longest dependency chain.
//!   Only defined on acyclic subgraphs; reported as `None` on cyclic input
//!   rather than computed.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::algo::toposort;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use serde::Serialize;

use crate::graph::model::CraftGraph;

// ---------------------------------------------------------------------------
// GraphStats
// ---------------------------------------------------------------------------

/// Summary statistics for a whole crafting graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    /// Number of items (nodes).
    pub node_count: usize,
    /// Number of ingredient links (edges).
    pub edge_count: usize,
    /// `true` when the graph contains no directed cycle.
    pub acyclic: bool,
}

impl GraphStats {
    /// Compute statistics for `graph`.
    #[must_use]
    pub fn from_graph(graph: &CraftGraph) -> Self {
        Self {
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            acyclic: graph.is_acyclic(),
        }
    }
}

// ---------------------------------------------------------------------------
// PrereqStats
// ---------------------------------------------------------------------------

/// Metrics derived from a prerequisite subgraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrereqStats {
    /// Distinct prerequisite items (every subgraph node except the target).
    pub prerequisite_count: usize,
    /// Distinct direct dependency relationships in the subgraph.
    pub relationship_count: usize,
    /// Longest dependency chain, in edges.
    ///
    /// `None` when the subgraph is cyclic — the metric is undefined there
    /// and is reported as such, never computed.
    pub longest_chain: Option<usize>,
}

impl PrereqStats {
    /// Compute metrics from a prerequisite subgraph.
    #[must_use]
    pub fn from_subgraph(subgraph: &CraftGraph) -> Self {
        Self {
            prerequisite_count: subgraph.node_count().saturating_sub(1),
            relationship_count: subgraph.edge_count(),
            longest_chain: longest_chain(subgraph),
        }
    }
}

/// Longest path length in edges, or `None` when `graph` is cyclic.
///
/// Forward pass in topological order: each node's depth is one more than
/// the deepest of its predecessors.
#[must_use]
pub fn longest_chain(graph: &CraftGraph) -> Option<usize> {
    let inner = graph.inner();
    let topo: Vec<NodeIndex> = toposort(inner, None).ok()?;

    let mut depth: HashMap<NodeIndex, usize> = HashMap::with_capacity(topo.len());
    let mut longest = 0;

    for idx in topo {
        let max_pred = inner
            .edges_directed(idx, Direction::Incoming)
            .map(|edge| depth.get(&edge.source()).copied().unwrap_or(0) + 1)
            .max()
            .unwrap_or(0);
        longest = longest.max(max_pred);
        depth.insert(idx, max_pred);
    }

    Some(longest)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::model::EdgeAttrs;

    fn graph_from(edges: &[(&str, &str)]) -> CraftGraph {
        let mut g = CraftGraph::new();
        for (source, target) in edges {
            g.add_edge(source, target, EdgeAttrs::default());
        }
        g
    }

    #[test]
    fn empty_graph_stats() {
        let g = CraftGraph::new();
        let stats = GraphStats::from_graph(&g);

        assert_eq!(stats.node_count, 0);
        assert_eq!(stats.edge_count, 0);
        assert!(stats.acyclic);
    }

    #[test]
    fn cyclic_graph_reported() {
        let g = graph_from(&[("a", "b"), ("b", "a")]);
        let stats = GraphStats::from_graph(&g);

        assert_eq!(stats.node_count, 2);
        assert_eq!(stats.edge_count, 2);
        assert!(!stats.acyclic);
    }

    #[test]
    fn single_node_subgraph_has_no_prerequisites() {
        let mut g = CraftGraph::new();
        g.add_node("stone");
        let stats = PrereqStats::from_subgraph(&g);

        assert_eq!(stats.prerequisite_count, 0);
        assert_eq!(stats.relationship_count, 0);
        assert_eq!(stats.longest_chain, Some(0));
    }

    #[test]
    fn chain_metrics_match_hand_count() {
        // log → plank → stick: 2 prerequisites, 2 relationships, chain 2.
        let g = graph_from(&[("log", "plank"), ("plank", "stick")]);
        let stats = PrereqStats::from_subgraph(&g);

        assert_eq!(stats.prerequisite_count, 2);
        assert_eq!(stats.relationship_count, 2);
        assert_eq!(stats.longest_chain, Some(2));
    }

    #[test]
    fn longest_chain_picks_deepest_branch() {
        // a → b → c → d (3 edges) and a → d (1 edge).
        let g = graph_from(&[("a", "b"), ("b", "c"), ("c", "d"), ("a", "d")]);
        assert_eq!(longest_chain(&g), Some(3));
    }

    #[test]
    fn longest_chain_undefined_on_cycle() {
        let g = graph_from(&[("a", "b"), ("b", "a")]);
        assert_eq!(longest_chain(&g), None);

        let stats = PrereqStats::from_subgraph(&g);
        assert_eq!(stats.longest_chain, None, "reported undefined, not computed");
    }

    #[test]
    fn empty_subgraph_saturates_prerequisite_count() {
        let g = CraftGraph::new();
        let stats = PrereqStats::from_subgraph(&g);
        assert_eq!(stats.prerequisite_count, 0);
    }
}
