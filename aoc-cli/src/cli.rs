//! CLI argument parsing using clap

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Topologically sort a dependency edge list
#[derive(Parser, Debug)]
#[command(name = "aoc-topo", about = "Order the nodes of a dependency edge list", version)]
pub struct Args {
    /// Edge list file, one `FROM -> TO` per line
    pub input: PathBuf,

    /// Text separating the two nodes of an edge
    #[arg(short, long, default_value = "->")]
    pub separator: String,

    /// Quiet mode - only output the order
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
