#![forbid(unsafe_code)]
//! craftgraph-core: crafting-recipe dependency graphs.
//!
//! Ingests a recipe dataset, models it as a directed dependency graph
//! (ingredient → crafted item), moves it through two interchange shapes
//! (node-link JSON, edge-list CSV), and answers transitive prerequisite
//! queries with derived metrics.
//!
//! # Conventions
//!
//! - **Errors**: per-module `thiserror` enums; `anyhow::Result` belongs to
//!   binaries, not this crate.
//! - **Logging**: `tracing` macros (`debug!`, `trace!`).
//! - **Purity**: everything here is synchronous and in-memory; callers do
//!   the file I/O and hand in bytes.

pub mod graph;
pub mod interchange;
pub mod recipes;

pub use graph::{CraftGraph, EdgeAttrs, GraphStats, ModelError, PrereqStats, prerequisites};
pub use interchange::{GraphFormat, LoadError, load_graph, to_node_link, write_node_link};
pub use recipes::{RecipeError, graph_from_recipes, graph_from_slice};
