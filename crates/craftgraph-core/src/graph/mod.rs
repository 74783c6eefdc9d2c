//! Crafting dependency graph: model, prerequisite extraction, metrics.
//!
//! # Overview
//!
//! The model is a plain directed graph of item identifiers with attributed
//! edges (ingredient → crafted item). Everything downstream reads it:
//!
//! ```text
//! recipes.json ─ recipes::graph_from_recipes() ─┐
//! graph.json / edges.csv ─ interchange::load_graph() ─┤
//!                                                     ▼
//!                                        CraftGraph (may contain cycles)
//!                                                     │ prereq::prerequisites(target)
//!                                                     ▼
//!                                        CraftGraph (induced subgraph)
//!                                                     │ stats::PrereqStats::from_subgraph()
//!                                                     ▼
//!                                        metrics (counts, longest chain)
//! ```
//!
//! The extractor never mutates its input; each load or extraction produces
//! a fresh [`CraftGraph`].

pub mod model;
pub mod prereq;
pub mod stats;

// Re-export primary types at module level for convenience.
pub use model::{CraftGraph, EdgeAttrs, ModelError};
pub use prereq::prerequisites;
pub use stats::{GraphStats, PrereqStats, longest_chain};
