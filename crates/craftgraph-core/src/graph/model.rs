//! The in-memory crafting dependency graph.
//!
//! # Overview
//!
//! [`CraftGraph`] is a directed graph whose nodes are item identifiers
//! (strings) and whose edges carry crafting attributes. An edge `A → B`
//! means "A is an **ingredient** of B" — A must be obtained before B can
//! be crafted.
//!
//! ## Edge Attributes
//!
//! Every edge stores an [`EdgeAttrs`]:
//!
//! - `weight`: how many units of the ingredient one craft consumes.
//! - `label`: display string, conventionally `"{count}x{craftedCount}"`.
//!
//! ## Invariants
//!
//! - Node identifiers are unique; re-adding an existing id is a no-op.
//! - At most one edge per ordered `(source, target)` pair; inserting the
//!   same pair again overwrites the stored attributes (last write wins).
//! - Cycles are representable. Nothing here assumes a DAG; callers that
//!   walk the graph must carry their own visited set.

#![allow(clippy::module_name_repetitions)]

use std::collections::{BTreeSet, HashMap};

use petgraph::Direction;
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Reference errors raised when a lookup names a node or edge that is not
/// in the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The requested node identifier is not in the graph.
    NodeNotFound(String),

    /// No edge is stored for the requested `(source, target)` pair.
    EdgeNotFound {
        /// The ingredient end of the missing edge.
        source: String,
        /// The crafted end of the missing edge.
        target: String,
    },
}

// Manual impls instead of `#[derive(thiserror::Error)]`: the derive would
// treat the `EdgeNotFound::source` field as the error's source and require
// it to implement `Error`, which `String` does not.
impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NodeNotFound(id) => write!(f, "node not found: {id}"),
            Self::EdgeNotFound { source, target } => {
                write!(f, "edge not found: {source} -> {target}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

// ---------------------------------------------------------------------------
// EdgeAttrs
// ---------------------------------------------------------------------------

/// Attributes stored on a dependency edge.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeAttrs {
    /// Quantity of the ingredient consumed per craft. Defaults to 1.0.
    pub weight: f64,
    /// Display label, conventionally `"{ingredientCount}x{craftedCount}"`.
    pub label: String,
}

impl EdgeAttrs {
    /// Create attributes with an explicit weight and label.
    #[must_use]
    pub fn new(weight: f64, label: impl Into<String>) -> Self {
        Self {
            weight,
            label: label.into(),
        }
    }
}

impl Default for EdgeAttrs {
    /// The interchange defaults: weight 1.0, empty label.
    fn default() -> Self {
        Self {
            weight: 1.0,
            label: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// CraftGraph
// ---------------------------------------------------------------------------

/// A directed crafting dependency graph.
///
/// Nodes are item identifiers. An edge `A → B` means "A is an ingredient
/// of B" and carries an [`EdgeAttrs`].
#[derive(Debug, Default)]
pub struct CraftGraph {
    /// Directed graph: nodes = item identifiers, edges = ingredient links.
    graph: DiGraph<String, EdgeAttrs>,
    /// Mapping from item identifier to petgraph `NodeIndex`.
    node_map: HashMap<String, NodeIndex>,
}

impl CraftGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, returning its index.
    ///
    /// Idempotent: re-adding an existing identifier returns the existing
    /// index and leaves the graph unchanged.
    pub fn add_node(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(id.to_string());
        self.node_map.insert(id.to_string(), idx);
        idx
    }

    /// Insert or overwrite the edge `source → target`.
    ///
    /// Missing endpoints are created implicitly. At most one edge is kept
    /// per ordered pair: inserting a pair that already exists replaces the
    /// stored attributes (last write wins), it never creates a parallel
    /// edge.
    pub fn add_edge(&mut self, source: &str, target: &str, attrs: EdgeAttrs) {
        let source_idx = self.add_node(source);
        let target_idx = self.add_node(target);
        // update_edge overwrites the attrs of an existing a→b edge instead
        // of adding a parallel one.
        self.graph.update_edge(source_idx, target_idx, attrs);
    }

    /// Return `true` if `id` is a node in this graph.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.node_map.contains_key(id)
    }

    /// Look up the `NodeIndex` for an item identifier.
    #[must_use]
    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.node_map.get(id).copied()
    }

    /// The identifiers of all nodes with an edge targeting `id`.
    ///
    /// Empty when `id` has no predecessors or is not in the graph.
    #[must_use]
    pub fn predecessors_of(&self, id: &str) -> BTreeSet<String> {
        let Some(idx) = self.node_index(id) else {
            return BTreeSet::new();
        };
        self.graph
            .neighbors_directed(idx, Direction::Incoming)
            .filter_map(|pred| self.graph.node_weight(pred).cloned())
            .collect()
    }

    /// The stored attributes of the edge `source → target`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EdgeNotFound`] when no such edge exists
    /// (including when either endpoint is absent).
    pub fn edge_attrs(&self, source: &str, target: &str) -> Result<&EdgeAttrs, ModelError> {
        let missing = || ModelError::EdgeNotFound {
            source: source.to_string(),
            target: target.to_string(),
        };
        let source_idx = self.node_index(source).ok_or_else(missing)?;
        let target_idx = self.node_index(target).ok_or_else(missing)?;
        let edge = self
            .graph
            .find_edge(source_idx, target_idx)
            .ok_or_else(missing)?;
        self.graph.edge_weight(edge).ok_or_else(missing)
    }

    /// Number of nodes (items).
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges (ingredient links).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Return `true` if the graph contains no directed cycle.
    #[must_use]
    pub fn is_acyclic(&self) -> bool {
        !is_cyclic_directed(&self.graph)
    }

    /// Iterate over node identifiers, in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(String::as_str)
    }

    /// Iterate over edges as `(source, target, attrs)` triples.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &EdgeAttrs)> {
        self.graph.edge_references().map(|edge| {
            let source = self.graph[edge.source()].as_str();
            let target = self.graph[edge.target()].as_str();
            (source, target, edge.weight())
        })
    }

    /// Borrow the underlying petgraph structure.
    ///
    /// Exposed for derived computations (toposort, cycle checks); the
    /// id → index map stays private so all mutation goes through
    /// [`add_node`](Self::add_node) / [`add_edge`](Self::add_edge).
    #[must_use]
    pub const fn inner(&self) -> &DiGraph<String, EdgeAttrs> {
        &self.graph
    }

    /// Sorted edge list, used for logical comparison.
    fn sorted_edges(&self) -> Vec<(&str, &str, &EdgeAttrs)> {
        let mut edges: Vec<_> = self.edges().collect();
        edges.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
        edges
    }
}

/// Logical equality: same node set and same edge set with equal
/// weight/label, regardless of insertion order or internal indices.
impl PartialEq for CraftGraph {
    fn eq(&self, other: &Self) -> bool {
        if self.node_count() != other.node_count() || self.edge_count() != other.edge_count() {
            return false;
        }
        let nodes_a: BTreeSet<&str> = self.node_ids().collect();
        let nodes_b: BTreeSet<&str> = other.node_ids().collect();
        nodes_a == nodes_b && self.sorted_edges() == other.sorted_edges()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
