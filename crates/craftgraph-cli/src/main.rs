#![forbid(unsafe_code)]

mod cmd;
mod output;

use clap::{Parser, Subcommand};
use output::OutputMode;
use std::env;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "craftgraph: crafting-recipe dependency graphs",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Derive the output mode from flags.
    fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Convert a recipe book to a node-link graph file",
        after_help = "EXAMPLES:\n    # Convert recipes to interchange JSON\n    cg convert --input recipes.json --output graph.json"
    )]
    Convert(cmd::convert::ConvertArgs),

    #[command(
        about = "Show whole-graph metrics for an interchange file",
        after_help = "EXAMPLES:\n    # Node-link JSON (default format)\n    cg stats graph.json\n\n    # Edge-list CSV\n    cg stats edges.csv --format edge-list"
    )]
    Stats(cmd::stats::StatsArgs),

    #[command(
        about = "Extract the prerequisite subgraph of an item",
        after_help = "EXAMPLES:\n    # Metrics only\n    cg prereq graph.json --target stick\n\n    # Also write the subgraph for a renderer\n    cg prereq graph.json --target stick --output stick-deps.json"
    )]
    Prereq(cmd::prereq::PrereqArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("CRAFTGRAPH_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "craftgraph=debug,info"
        } else {
            "craftgraph=info,warn"
        })
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    let output = cli.output_mode();

    match cli.command {
        Commands::Convert(ref args) => cmd::convert::run_convert(args, output),
        Commands::Stats(ref args) => cmd::stats::run_stats(args, output),
        Commands::Prereq(ref args) => cmd::prereq::run_prereq(args, output),
    }
}
