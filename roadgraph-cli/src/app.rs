use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// roadgraph - shortest-route trip planning over directed road maps
#[derive(Debug, Parser)]
#[command(name = "roadgraph", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Plan every trip in the input and print a route report for each.
    Plan {
        /// Road map input file. Reads standard input when omitted.
        #[arg(value_name = "FILE")]
        path: Option<PathBuf>,
    },

    /// Display a road map overview: locations, roads, trips and connectivity.
    Info {
        /// Road map input file. Reads standard input when omitted.
        #[arg(value_name = "FILE")]
        path: Option<PathBuf>,
    },
}
