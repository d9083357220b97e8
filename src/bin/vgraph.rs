//! CLI entry point for the `vgraph` command-line tool.

use clap::{Parser, Subcommand};

use valgraph::cli::commands;

#[derive(Parser)]
#[command(
    name = "vgraph",
    about = "ValGraph CLI — immutable value-semantics graphs"
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
    /// Build the sample regions graph and dump it
    Demo,
    /// Generate random vertex identifiers (RFC 4122 v4)
    Id {
        /// How many identifiers to mint
        #[arg(long, default_value = "1")]
        count: usize,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        // env_logger is only available in dev/test builds
        eprintln!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Demo => commands::cmd_demo(json),
        Commands::Id { count } => commands::cmd_id(count, json),
    }
}
