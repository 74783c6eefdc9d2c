//! `cg convert` — recipe book JSON to node-link interchange file.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use craftgraph_core::{graph_from_slice, write_node_link};
use serde::Serialize;

use crate::output::{CliError, OutputMode, render, render_error};

/// Arguments for `cg convert`.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Recipe book JSON file (item name → recipe details).
    #[arg(short, long)]
    pub input: PathBuf,

    /// Destination for the node-link graph JSON.
    #[arg(short, long)]
    pub output: PathBuf,
}

#[derive(Debug, Serialize)]
struct ConvertOutput {
    nodes: usize,
    links: usize,
    output: PathBuf,
}

/// Execute `cg convert`.
pub fn run_convert(args: &ConvertArgs, output: OutputMode) -> anyhow::Result<()> {
    let bytes = match fs::read(&args.input) {
        Ok(bytes) => bytes,
        Err(err) => {
            render_error(
                output,
                &CliError::with_details(
                    format!("failed to read {}: {err}", args.input.display()),
                    "check the path and permissions",
                    "io_error",
                ),
            )?;
            anyhow::bail!("read failed");
        }
    };

    let graph = match graph_from_slice(&bytes) {
        Ok(graph) => graph,
        Err(err) => {
            render_error(
                output,
                &CliError::with_details(
                    err.to_string(),
                    "expected a JSON object: item name → { ingredients, craftedCount }",
                    "data_error",
                ),
            )?;
            anyhow::bail!("conversion failed");
        }
    };

    let mut buf = Vec::new();
    write_node_link(&graph, &mut buf)?;
    fs::write(&args.output, buf)?;

    let payload = ConvertOutput {
        nodes: graph.node_count(),
        links: graph.edge_count(),
        output: args.output.clone(),
    };

    render(output, &payload, |report, w| {
        writeln!(
            w,
            "Wrote {} nodes and {} links to {}",
            report.nodes,
            report.links,
            report.output.display()
        )
    })
}
