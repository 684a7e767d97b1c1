//! Thoughtgraph CLI: parse a note vault into renderer-ready JSON.
//!
//! Usage:
//!   thoughtgraph parse <DIR> [--pretty]
//!   thoughtgraph parse <DIR> --stats

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use thoughtgraph::{load_notes, parse};

#[derive(Parser)]
#[command(
    name = "thoughtgraph",
    version,
    about = "Note-to-graph resolution engine"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a vault directory and print the graph as JSON
    Parse {
        /// Directory containing `.md` notes
        dir: PathBuf,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
        /// Print node/edge counts instead of the graph
        #[arg(long)]
        stats: bool,
    },
}

fn cmd_parse(dir: &Path, pretty: bool, stats: bool) -> i32 {
    let notes = match load_notes(dir) {
        Ok(notes) => notes,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let graph = parse(&notes);

    if stats {
        println!("{:<10} {:>6}", "nodes", graph.node_count());
        println!("{:<10} {:>6}", "edges", graph.edge_count());
        println!("{:<10} {:>6}", "resolved", graph.resolved_edge_count());
        return 0;
    }

    let rendered = if pretty {
        serde_json::to_string_pretty(&graph)
    } else {
        serde_json::to_string(&graph)
    };
    match rendered {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: failed to serialize graph: {}", e);
            1
        }
    }
}

fn main() {
    // Diagnostics go to stderr so piped JSON stays clean.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let code = match cli.command {
        Commands::Parse { dir, pretty, stats } => cmd_parse(&dir, pretty, stats),
    };
    std::process::exit(code);
}
