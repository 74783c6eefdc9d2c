//! Prerequisite subgraph extraction.
//!
//! # Overview
//!
//! Given a [`CraftGraph`] and a target item, compute the smallest induced
//! subgraph containing the target and every item transitively reachable by
//! following predecessor edges — every direct or indirect ingredient — with
//! all edge attributes copied unchanged.
//!
//! # Algorithm
//!
//! Explicit worklist (stack) of pending identifiers plus a visited set, so
//! stack usage stays bounded on deep or adversarial graphs:
//!
//! 1. Push the target; mark it visited.
//! 2. Pop a node, ensure it is present in the output.
//! 3. Copy **every** predecessor edge into the output, even when the
//!    predecessor was already visited — direct dependency edges on every
//!    path are captured, not just edges on the first-discovered path.
//! 4. Push predecessors seen for the first time.
//!
//! Each node is expanded at most once, so the walk terminates on cyclic
//! input. The source graph is never mutated.

use std::collections::HashSet;

use tracing::debug;

use crate::graph::model::{CraftGraph, ModelError};

/// Extract the prerequisite subgraph of `target`.
///
/// The result contains `target`, every transitive ingredient, and every
/// direct dependency edge among them with its attributes preserved. A node
/// with no ingredients yields a single-node subgraph.
///
/// # Errors
///
/// Returns [`ModelError::NodeNotFound`] when `target` is not in `graph`.
pub fn prerequisites(graph: &CraftGraph, target: &str) -> Result<CraftGraph, ModelError> {
    if !graph.contains(target) {
        return Err(ModelError::NodeNotFound(target.to_string()));
    }

    let mut subgraph = CraftGraph::new();
    let mut visited: HashSet<String> = HashSet::from([target.to_string()]);
    let mut pending: Vec<String> = vec![target.to_string()];

    while let Some(node) = pending.pop() {
        subgraph.add_node(&node);

        for pred in graph.predecessors_of(&node) {
            // Unconditional copy: edges into already-visited nodes still
            // count as direct dependencies of this node.
            let attrs = graph.edge_attrs(&pred, &node)?;
            subgraph.add_edge(&pred, &node, attrs.clone());

            if visited.insert(pred.clone()) {
                pending.push(pred);
            }
        }
    }

    debug!(
        target_item = target,
        nodes = subgraph.node_count(),
        edges = subgraph.edge_count(),
        "extracted prerequisite subgraph"
    );

    Ok(subgraph)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::model::EdgeAttrs;

    fn graph_from(edges: &[(&str, &str, f64, &str)]) -> CraftGraph {
        let mut g = CraftGraph::new();
        for (source, target, weight, label) in edges {
            g.add_edge(source, target, EdgeAttrs::new(*weight, *label));
        }
        g
    }

    #[test]
    fn missing_target_is_a_reference_error() {
        let g = CraftGraph::new();
        let err = prerequisites(&g, "stick").expect_err("target absent");
        assert_eq!(err, ModelError::NodeNotFound("stick".to_string()));
    }

    #[test]
    fn leaf_target_yields_single_node_subgraph() {
        let mut g = graph_from(&[("log", "plank", 1.0, "1x4")]);
        g.add_node("stone");

        let sub = prerequisites(&g, "stone").expect("target exists");
        assert_eq!(sub.node_count(), 1);
        assert_eq!(sub.edge_count(), 0);
        assert!(sub.contains("stone"));
    }

    #[test]
    fn acyclic_chain_is_fully_extracted() {
        // log → plank → stick, per the crafting convention.
        let g = graph_from(&[
            ("log", "plank", 1.0, "1x4"),
            ("plank", "stick", 2.0, "2x4"),
        ]);

        let sub = prerequisites(&g, "stick").expect("target exists");

        assert_eq!(sub.node_count(), 3);
        assert_eq!(sub.edge_count(), 2);
        for id in ["stick", "plank", "log"] {
            assert!(sub.contains(id), "{id} missing from subgraph");
        }

        let attrs = sub.edge_attrs("plank", "stick").expect("edge copied");
        assert!((attrs.weight - 2.0).abs() < f64::EPSILON);
        assert_eq!(attrs.label, "2x4");

        let attrs = sub.edge_attrs("log", "plank").expect("edge copied");
        assert!((attrs.weight - 1.0).abs() < f64::EPSILON);
        assert_eq!(attrs.label, "1x4");
    }

    #[test]
    fn unrelated_branches_are_excluded() {
        let g = graph_from(&[
            ("log", "plank", 1.0, "1x4"),
            ("plank", "stick", 2.0, "2x4"),
            ("iron", "anvil", 31.0, "31x1"),
        ]);

        let sub = prerequisites(&g, "stick").expect("target exists");
        assert!(!sub.contains("iron"));
        assert!(!sub.contains("anvil"));
        assert_eq!(sub.node_count(), 3);
    }

    #[test]
    fn cyclic_input_terminates_with_both_edges() {
        let g = graph_from(&[("a", "b", 1.0, ""), ("b", "a", 1.0, "")]);

        let sub = prerequisites(&g, "a").expect("target exists");

        assert_eq!(sub.node_count(), 2);
        assert_eq!(sub.edge_count(), 2);
        assert!(sub.edge_attrs("a", "b").is_ok());
        assert!(sub.edge_attrs("b", "a").is_ok());
        assert!(!sub.is_acyclic());
    }

    #[test]
    fn edges_into_visited_nodes_are_still_copied() {
        // Diamond: log → plank → stick, log → stick directly as well.
        // Whichever path discovers `log` first, both edges must survive.
        let g = graph_from(&[
            ("log", "plank", 1.0, "1x4"),
            ("plank", "stick", 2.0, "2x4"),
            ("log", "stick", 1.0, "1x4"),
        ]);

        let sub = prerequisites(&g, "stick").expect("target exists");
        assert_eq!(sub.edge_count(), 3, "all direct dependency edges kept");
        assert!(sub.edge_attrs("log", "stick").is_ok());
        assert!(sub.edge_attrs("log", "plank").is_ok());
    }

    #[test]
    fn source_graph_is_not_mutated() {
        let g = graph_from(&[
            ("log", "plank", 1.0, "1x4"),
            ("plank", "stick", 2.0, "2x4"),
        ]);
        let nodes_before = g.node_count();
        let edges_before = g.edge_count();

        let _ = prerequisites(&g, "plank").expect("target exists");

        assert_eq!(g.node_count(), nodes_before);
        assert_eq!(g.edge_count(), edges_before);
    }

    #[test]
    fn deep_chain_does_not_overflow() {
        // Worklist walk; recursion depth is irrelevant to chain length.
        let mut g = CraftGraph::new();
        for i in 0..10_000 {
            g.add_edge(&format!("item-{i}"), &format!("item-{}", i + 1), EdgeAttrs::default());
        }

        let sub = prerequisites(&g, "item-10000").expect("target exists");
        assert_eq!(sub.node_count(), 10_001);
        assert_eq!(sub.edge_count(), 10_000);
    }
}
