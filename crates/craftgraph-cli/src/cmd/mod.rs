//! Command handlers for the `cg` binary.

pub mod convert;
pub mod prereq;
pub mod stats;

use std::fs;
use std::path::Path;

use craftgraph_core::{CraftGraph, GraphFormat, load_graph};

use crate::output::{CliError, OutputMode, render_error};

/// Load a graph from `path`, reporting failures at this boundary.
///
/// Loader failures are recoverable by design: they are rendered as a
/// structured error (with a machine-readable code) and surfaced as an
/// `Err`, and no partial graph escapes.
pub fn load_graph_file(
    path: &Path,
    format: &str,
    output: OutputMode,
) -> anyhow::Result<CraftGraph> {
    let format: GraphFormat = match format.parse() {
        Ok(format) => format,
        Err(err) => {
            render_error(
                output,
                &CliError::with_details(
                    err.to_string(),
                    "supported formats: node-link, edge-list",
                    "unsupported_format",
                ),
            )?;
            anyhow::bail!("unsupported format");
        }
    };

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            render_error(
                output,
                &CliError::with_details(
                    format!("failed to read {}: {err}", path.display()),
                    "check the path and permissions",
                    "io_error",
                ),
            )?;
            anyhow::bail!("read failed");
        }
    };

    match load_graph(&bytes, format) {
        Ok(graph) => Ok(graph),
        Err(err) => {
            render_error(
                output,
                &CliError::with_details(
                    err.to_string(),
                    "fix the interchange payload and retry",
                    "data_error",
                ),
            )?;
            anyhow::bail!("load failed");
        }
    }
}
