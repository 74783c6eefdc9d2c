//! `cg prereq` — prerequisite subgraph of a target item, with metrics.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use craftgraph_core::{PrereqStats, prerequisites, write_node_link};
use serde::Serialize;

use crate::cmd::load_graph_file;
use crate::output::{CliError, OutputMode, render, render_error};

/// Arguments for `cg prereq`.
#[derive(Args, Debug)]
pub struct PrereqArgs {
    /// Graph interchange file.
    pub file: PathBuf,

    /// Interchange shape: node-link or edge-list.
    #[arg(short, long, default_value = "node-link")]
    pub format: String,

    /// The item whose transitive ingredients to extract.
    #[arg(short, long)]
    pub target: String,

    /// Write the induced subgraph as node-link JSON to this path
    /// (for an external layout/renderer).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct PrereqOutput {
    target: String,
    #[serde(flatten)]
    stats: PrereqStats,
}

/// Execute `cg prereq`.
pub fn run_prereq(args: &PrereqArgs, output: OutputMode) -> anyhow::Result<()> {
    let graph = load_graph_file(&args.file, &args.format, output)?;

    let subgraph = match prerequisites(&graph, &args.target) {
        Ok(subgraph) => subgraph,
        Err(err) => {
            render_error(
                output,
                &CliError::with_details(
                    err.to_string(),
                    "pick a target that exists in the graph (see `cg stats`)",
                    "node_not_found",
                ),
            )?;
            anyhow::bail!("extraction failed");
        }
    };

    if let Some(ref path) = args.output {
        let mut buf = Vec::new();
        write_node_link(&subgraph, &mut buf)?;
        fs::write(path, buf)?;
    }

    let payload = PrereqOutput {
        target: args.target.clone(),
        stats: PrereqStats::from_subgraph(&subgraph),
    };

    render(output, &payload, |report, w| {
        writeln!(w, "Prerequisites of {}", report.target)?;
        writeln!(w, "  items:         {}", report.stats.prerequisite_count)?;
        writeln!(w, "  relationships: {}", report.stats.relationship_count)?;
        match report.stats.longest_chain {
            Some(length) => writeln!(w, "  longest chain: {length}"),
            None => writeln!(w, "  longest chain: undefined (cyclic)"),
        }
    })
}
