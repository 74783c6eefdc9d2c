//! Interchange formats: node-link JSON and edge-list CSV.
//!
//! # Overview
//!
//! Two on-disk shapes are supported, decoded once at this boundary into
//! the one canonical [`CraftGraph`] before any graph logic runs:
//!
//! - **Node-link JSON** — `{ "nodes": [{"id"}], "links": [{"source",
//!   "target", "weight"?, "label"?}] }`. This is also the shape the
//!   recipe converter writes.
//! - **Edge-list CSV** — rows of `source,target[,weight[,label]]`, header
//!   row optional. The node set is the union of all endpoints seen.
//!
//! Missing `weight` defaults to 1.0 and missing `label` to the empty
//! string in both shapes, so the same logical graph loads to an equal
//! model regardless of which shape carried it.
//!
//! Failures here are recoverable by design: a bad payload yields an error
//! and no graph, never a panic or a partial model handed to the caller.

use std::io::Write;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::graph::model::{CraftGraph, EdgeAttrs};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised while decoding or encoding an interchange payload.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The format designator names no supported shape.
    #[error("unsupported graph format: {format}")]
    UnsupportedFormat {
        /// The designator as given.
        format: String,
    },

    /// The payload is not valid JSON for the node-link shape.
    #[error("failed to parse node-link JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload is not readable as CSV.
    #[error("failed to parse edge-list CSV: {0}")]
    Csv(#[from] csv::Error),

    /// An edge-list row has fewer than the two required columns.
    #[error("edge-list row {row} needs at least source and target columns")]
    ShortRow {
        /// 1-based row number within the payload.
        row: usize,
    },

    /// An edge-list weight column is not numeric.
    #[error("edge-list row {row} has non-numeric weight {value:?}")]
    BadWeight {
        /// 1-based row number within the payload.
        row: usize,
        /// The offending column value.
        value: String,
    },

    /// Writing the serialized graph failed.
    #[error("failed to write graph: {0}")]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// GraphFormat
// ---------------------------------------------------------------------------

/// The closed set of supported interchange shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    /// Node-link JSON (`nodes` + `links`).
    NodeLink,
    /// Tabular edge list (`source,target[,weight[,label]]`).
    EdgeList,
}

impl FromStr for GraphFormat {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "node-link" | "nodelink" | "json" => Ok(Self::NodeLink),
            "edge-list" | "edgelist" | "csv" => Ok(Self::EdgeList),
            other => Err(LoadError::UnsupportedFormat {
                format: other.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Node-link serde shape
// ---------------------------------------------------------------------------

/// The node-link JSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeLinkGraph {
    /// All nodes, as `{ "id": ... }` objects.
    pub nodes: Vec<NodeRef>,
    /// All edges with their attributes.
    pub links: Vec<LinkRef>,
}

/// A node entry in the node-link shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRef {
    /// The item identifier.
    pub id: String,
}

/// An edge entry in the node-link shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkRef {
    /// The ingredient end of the edge.
    pub source: String,
    /// The crafted end of the edge.
    pub target: String,
    /// Quantity consumed per craft. Defaults to 1.0 when absent.
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// Display label. Defaults to the empty string when absent.
    #[serde(default)]
    pub label: String,
}

const fn default_weight() -> f64 {
    1.0
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Decode `bytes` as `format` into a [`CraftGraph`].
///
/// # Errors
///
/// Returns a [`LoadError`] on any malformed payload. No partial graph is
/// ever returned.
pub fn load_graph(bytes: &[u8], format: GraphFormat) -> Result<CraftGraph, LoadError> {
    let graph = match format {
        GraphFormat::NodeLink => load_node_link(bytes)?,
        GraphFormat::EdgeList => load_edge_list(bytes)?,
    };

    debug!(
        ?format,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded graph"
    );

    Ok(graph)
}

fn load_node_link(bytes: &[u8]) -> Result<CraftGraph, LoadError> {
    let doc: NodeLinkGraph = serde_json::from_slice(bytes)?;
    Ok(graph_from_node_link(&doc))
}

/// Build a model from an already-decoded node-link document.
#[must_use]
pub fn graph_from_node_link(doc: &NodeLinkGraph) -> CraftGraph {
    let mut graph = CraftGraph::new();
    for node in &doc.nodes {
        graph.add_node(&node.id);
    }
    for link in &doc.links {
        graph.add_edge(
            &link.source,
            &link.target,
            EdgeAttrs::new(link.weight, link.label.clone()),
        );
    }
    graph
}

fn load_edge_list(bytes: &[u8]) -> Result<CraftGraph, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let mut graph = CraftGraph::new();

    for (index, record) in reader.records().enumerate() {
        let row = index + 1;
        let record = record?;

        if row == 1 && is_header_row(&record) {
            continue;
        }

        let (Some(source), Some(target)) = (record.get(0), record.get(1)) else {
            return Err(LoadError::ShortRow { row });
        };
        if source.is_empty() || target.is_empty() {
            return Err(LoadError::ShortRow { row });
        }

        let weight = match record.get(2) {
            None | Some("") => 1.0,
            Some(value) => value.parse().map_err(|_| LoadError::BadWeight {
                row,
                value: value.to_string(),
            })?,
        };
        let label = record.get(3).unwrap_or("").to_string();

        graph.add_edge(source, target, EdgeAttrs::new(weight, label));
    }

    Ok(graph)
}

/// The header row is optional; recognize the literal column names.
fn is_header_row(record: &csv::StringRecord) -> bool {
    matches!(
        (record.get(0), record.get(1)),
        (Some(a), Some(b))
            if a.eq_ignore_ascii_case("source") && b.eq_ignore_ascii_case("target")
    )
}

// ---------------------------------------------------------------------------
// Saving
// ---------------------------------------------------------------------------

/// Serialize a graph into the node-link document shape.
#[must_use]
pub fn to_node_link(graph: &CraftGraph) -> NodeLinkGraph {
    let nodes = graph
        .node_ids()
        .map(|id| NodeRef { id: id.to_string() })
        .collect();
    let links = graph
        .edges()
        .map(|(source, target, attrs)| LinkRef {
            source: source.to_string(),
            target: target.to_string(),
            weight: attrs.weight,
            label: attrs.label.clone(),
        })
        .collect();
    NodeLinkGraph { nodes, links }
}

/// Write a graph as 2-space-indented node-link JSON.
///
/// # Errors
///
/// Returns [`LoadError::Io`] / [`LoadError::Json`] on write or
/// serialization failure.
pub fn write_node_link(graph: &CraftGraph, mut writer: impl Write) -> Result<(), LoadError> {
    let doc = to_node_link(graph);
    serde_json::to_writer_pretty(&mut writer, &doc)?;
    writeln!(writer)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
