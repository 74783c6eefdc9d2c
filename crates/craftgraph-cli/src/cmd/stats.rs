//! `cg stats` — whole-graph metrics for an interchange file.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use craftgraph_core::GraphStats;
use serde::Serialize;

use crate::cmd::load_graph_file;
use crate::output::{OutputMode, render};

/// Arguments for `cg stats`.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Graph interchange file.
    pub file: PathBuf,

    /// Interchange shape: node-link or edge-list.
    #[arg(short, long, default_value = "node-link")]
    pub format: String,
}

#[derive(Debug, Serialize)]
struct StatsOutput {
    file: PathBuf,
    #[serde(flatten)]
    stats: GraphStats,
}

/// Execute `cg stats`.
pub fn run_stats(args: &StatsArgs, output: OutputMode) -> anyhow::Result<()> {
    let graph = load_graph_file(&args.file, &args.format, output)?;

    let payload = StatsOutput {
        file: args.file.clone(),
        stats: GraphStats::from_graph(&graph),
    };

    render(output, &payload, |report, w| {
        writeln!(w, "Graph: {}", report.file.display())?;
        writeln!(w, "  nodes:   {}", report.stats.node_count)?;
        writeln!(w, "  edges:   {}", report.stats.edge_count)?;
        writeln!(
            w,
            "  acyclic: {}",
            if report.stats.acyclic { "yes" } else { "no" }
        )
    })
}
