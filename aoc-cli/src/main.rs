//! AOC Topo - order the nodes of a dependency edge list

mod cli;
mod config;
mod edges;
mod error;
mod output;

use chrono::Utc;
use clap::Parser;
use cli::Args;
use config::Config;
use output::OutputFormatter;
use tracing::{debug, warn};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args)?;
    config.init_logging()?;
    debug!(?config, "resolved configuration");

    let formatter = OutputFormatter::new(config.quiet);

    let parse_start = Utc::now();
    let mut graph = edges::load_graph(&config.input, &config.separator)?;
    let parse_time = Utc::now() - parse_start;

    if graph.is_empty() {
        warn!(path = %config.input.display(), "edge list contains no edges");
    }

    let sort_start = Utc::now();
    let order = graph.topo_sort()?;
    let sort_time = Utc::now() - sort_start;

    formatter.print_order(&order);
    formatter.print_summary(order.len(), parse_time, sort_time);

    Ok(())
}
