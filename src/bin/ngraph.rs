//! CLI entry point for the `ngraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use nangraph::cli::commands;
use nangraph::types::{Direction, GraphError};

#[derive(Parser)]
#[command(
    name = "ngraph",
    about = "ngraph — inspect directed multigraphs loaded from edge lists"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summary statistics for an edge list
    Stats {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// Show the degrees of a node
    Node {
        /// Path to the edge-list file
        file: PathBuf,
        /// Node ID
        node_id: u64,
    },
    /// List the nodes linked to a node
    Neighbors {
        /// Path to the edge-list file
        file: PathBuf,
        /// Node ID
        node_id: u64,
        /// Follow incoming links instead of outgoing ones
        #[arg(long)]
        incoming: bool,
    },
    /// Check whether a link exists
    HasLink {
        /// Path to the edge-list file
        file: PathBuf,
        /// Source node ID
        from_id: u64,
        /// Target node ID
        to_id: u64,
    },
    /// Enumerate links
    Links {
        /// Path to the edge-list file
        file: PathBuf,
        /// Stop after this many links
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    }

    let result = match cli.command {
        Commands::Stats { file } => commands::cmd_stats(&file, json),
        Commands::Node { file, node_id } => commands::cmd_node(&file, node_id, json),
        Commands::Neighbors {
            file,
            node_id,
            incoming,
        } => commands::cmd_neighbors(&file, node_id, Direction::from_is_out(!incoming), json),
        Commands::HasLink {
            file,
            from_id,
            to_id,
        } => commands::cmd_has_link(&file, from_id, to_id, json),
        Commands::Links { file, limit } => commands::cmd_links(&file, limit, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Parse { .. } => 2,
            GraphError::NodeNotFound(_) => 4,
        };
        process::exit(code);
    }
}
