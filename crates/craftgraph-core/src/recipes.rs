//! Recipe-book to graph conversion.
//!
//! # Overview
//!
//! A recipe book is a JSON object mapping item name → recipe details:
//!
//! ```json
//! {
//!   "plank": { "ingredients": { "log": 1 }, "craftedCount": 4 },
//!   "stick": { "ingredients": { "plank": 2 }, "craftedCount": 4 },
//!   "log":   {}
//! }
//! ```
//!
//! Every top-level key becomes a node. For each `(item, ingredient, count)`
//! an edge `ingredient → item` is added with `weight = count` and
//! `label = "{count}x{craftedCount}"` — but **only** when the ingredient is
//! itself a top-level key. Ingredients with no recipe of their own (raw
//! materials) are dropped entirely: the graph models crafted-item
//! dependencies only. That filtering is deliberate, inherited policy; see
//! DESIGN.md before changing it.

use serde_json::Value;
use tracing::{debug, trace};

use crate::graph::model::{CraftGraph, EdgeAttrs};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Data errors raised when the recipe book is not shaped as expected.
#[derive(Debug, thiserror::Error)]
pub enum RecipeError {
    /// The top-level value is not a JSON object.
    #[error("recipe book must be a JSON object mapping item name to recipe")]
    NotAnObject,

    /// A recipe entry is not a JSON object.
    #[error("recipe for {item} must be an object")]
    BadRecipe {
        /// The item whose recipe is malformed.
        item: String,
    },

    /// An `ingredients` field is present but is not an object.
    #[error("ingredients of {item} must be an object mapping name to count")]
    BadIngredients {
        /// The item whose ingredient mapping is malformed.
        item: String,
    },

    /// An ingredient count is not a number.
    #[error("count of ingredient {ingredient} in {item} must be a number")]
    BadCount {
        /// The item whose recipe holds the bad count.
        item: String,
        /// The offending ingredient name.
        ingredient: String,
    },

    /// The recipe book is not valid JSON at all.
    #[error("failed to parse recipe book: {0}")]
    Json(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

/// Build a [`CraftGraph`] from raw recipe-book bytes.
///
/// # Errors
///
/// Returns [`RecipeError::Json`] on malformed JSON, otherwise the same
/// errors as [`graph_from_recipes`].
pub fn graph_from_slice(bytes: &[u8]) -> Result<CraftGraph, RecipeError> {
    let value: Value = serde_json::from_slice(bytes)?;
    graph_from_recipes(&value)
}

/// Build a [`CraftGraph`] from a parsed recipe book.
///
/// Node creation order follows the book's key order but has no effect on
/// the resulting model. `craftedCount` defaults to 1 when absent.
///
/// # Errors
///
/// Returns a [`RecipeError`] when the book, a recipe entry, an
/// `ingredients` mapping, or an ingredient count is not shaped as
/// expected.
pub fn graph_from_recipes(recipes: &Value) -> Result<CraftGraph, RecipeError> {
    let book = recipes.as_object().ok_or(RecipeError::NotAnObject)?;

    let mut graph = CraftGraph::new();
    for item in book.keys() {
        graph.add_node(item);
    }

    for (item, details) in book {
        let details = details
            .as_object()
            .ok_or_else(|| RecipeError::BadRecipe { item: item.clone() })?;

        let crafted_count = match details.get("craftedCount") {
            Some(value) => value.as_f64().ok_or_else(|| RecipeError::BadRecipe {
                item: item.clone(),
            })?,
            None => 1.0,
        };

        let Some(ingredients) = details.get("ingredients") else {
            continue;
        };
        let ingredients =
            ingredients
                .as_object()
                .ok_or_else(|| RecipeError::BadIngredients {
                    item: item.clone(),
                })?;

        for (ingredient, count) in ingredients {
            let count = count.as_f64().ok_or_else(|| RecipeError::BadCount {
                item: item.clone(),
                ingredient: ingredient.clone(),
            })?;

            // Raw materials (no recipe of their own) never become edge
            // endpoints.
            if !book.contains_key(ingredient) {
                trace!(item, ingredient, "dropping ingredient without a recipe");
                continue;
            }

            let label = format_label(count, crafted_count);
            graph.add_edge(ingredient, item, EdgeAttrs::new(count, label));
        }
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "converted recipe book"
    );

    Ok(graph)
}

/// Format the edge label `"{count}x{craftedCount}"`, rendering whole
/// numbers without a trailing `.0` to match the JSON source values.
fn format_label(count: f64, crafted_count: f64) -> String {
    format!("{}x{}", format_number(count), format_number(crafted_count))
}

#[allow(clippy::cast_possible_truncation)]
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
