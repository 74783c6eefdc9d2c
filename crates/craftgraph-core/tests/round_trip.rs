//! Property tests for the interchange codecs.
//!
//! Two required properties, checked over generated graphs:
//!
//! - **Round-trip**: serializing any model as node-link JSON and reloading
//!   yields an equal model.
//! - **Shape-equivalence**: the same logical graph encoded as node-link
//!   JSON and as an edge-list CSV loads to equal models.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use proptest::prelude::*;

use craftgraph_core::graph::model::{CraftGraph, EdgeAttrs};
use craftgraph_core::interchange::{GraphFormat, load_graph, write_node_link};

/// A generated graph description: node ids plus edges between them.
#[derive(Debug, Clone)]
struct GraphSpec {
    nodes: Vec<String>,
    edges: Vec<(usize, usize, f64, String)>,
}

impl GraphSpec {
    fn build(&self) -> CraftGraph {
        let mut graph = CraftGraph::new();
        for id in &self.nodes {
            graph.add_node(id);
        }
        for &(source, target, weight, ref label) in &self.edges {
            graph.add_edge(
                &self.nodes[source],
                &self.nodes[target],
                EdgeAttrs::new(weight, label.clone()),
            );
        }
        graph
    }

    /// Render as edge-list CSV (header row included). Isolated nodes have
    /// no tabular representation, so specs used with this must connect
    /// every node.
    fn to_csv(&self) -> String {
        let mut out = String::from("source,target,weight,label\n");
        for &(source, target, weight, ref label) in &self.edges {
            let _ = writeln!(
                out,
                "{},{},{},{}",
                self.nodes[source], self.nodes[target], weight, label
            );
        }
        out
    }
}

fn arb_graph_spec(connected_only: bool) -> impl Strategy<Value = GraphSpec> {
    prop::collection::btree_set("[a-z]{1,6}", 2..10).prop_flat_map(move |ids| {
        let nodes: Vec<String> = ids.into_iter().collect();
        let n = nodes.len();
        let edge = (0..n, 0..n, 0.25f64..64.0, "[0-9a-z]{0,4}");
        prop::collection::vec(edge, 1..16).prop_map(move |mut edges| {
            if connected_only {
                // Tabular shape cannot carry isolated nodes; touch each one.
                let touched: BTreeSet<usize> =
                    edges.iter().flat_map(|e| [e.0, e.1]).collect();
                for idx in 0..n {
                    if !touched.contains(&idx) {
                        edges.push((idx, (idx + 1) % n, 1.0, String::new()));
                    }
                }
            }
            GraphSpec {
                nodes: nodes.clone(),
                edges,
            }
        })
    })
}

proptest! {
    #[test]
    fn prop_node_link_round_trip(spec in arb_graph_spec(false)) {
        let original = spec.build();

        let mut buf = Vec::new();
        write_node_link(&original, &mut buf).expect("serialize");
        let reloaded = load_graph(&buf, GraphFormat::NodeLink).expect("reload");

        prop_assert_eq!(&original, &reloaded);
    }

    #[test]
    fn prop_shapes_are_equivalent(spec in arb_graph_spec(true)) {
        let from_model = spec.build();

        let csv = spec.to_csv();
        let from_csv = load_graph(csv.as_bytes(), GraphFormat::EdgeList)
            .expect("edge list loads");

        let mut buf = Vec::new();
        write_node_link(&from_model, &mut buf).expect("serialize");
        let from_json = load_graph(&buf, GraphFormat::NodeLink).expect("node-link loads");

        prop_assert_eq!(&from_csv, &from_json);
    }

    #[test]
    fn prop_duplicate_edges_never_accumulate(spec in arb_graph_spec(false)) {
        let graph = spec.build();
        let pairs: BTreeSet<(usize, usize)> =
            spec.edges.iter().map(|e| (e.0, e.1)).collect();

        prop_assert_eq!(graph.edge_count(), pairs.len());
    }
}
