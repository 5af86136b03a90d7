//! Edge list parsing

use crate::error::CliError;
use aoc_utils::{DiGraph, read_input_untrimmed};
use std::path::Path;
use tracing::{debug, info};

/// Read an edge list file and build the graph it describes.
///
/// The file is parsed untrimmed so error line numbers match the file.
pub fn load_graph(path: &Path, separator: &str) -> Result<DiGraph<String>, CliError> {
    let input = read_input_untrimmed(path)?;
    info!(path = %path.display(), "loaded edge list");
    parse_edges(&input, separator)
}

/// Parse one `FROM <separator> TO` edge per line.
///
/// Blank lines and lines starting with `#` are skipped. Line numbers in
/// errors are 1-based.
pub fn parse_edges(input: &str, separator: &str) -> Result<DiGraph<String>, CliError> {
    let mut graph = DiGraph::new();

    for (line_idx, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (from, to) = parse_edge(line, separator).map_err(|message| CliError::Parse {
            line: line_idx + 1,
            message,
        })?;
        graph.add_edge(from.to_string(), to.to_string());
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "parsed edge list"
    );
    Ok(graph)
}

fn parse_edge<'a>(line: &'a str, separator: &str) -> Result<(&'a str, &'a str), String> {
    let (from, to) = line
        .split_once(separator)
        .ok_or_else(|| format!("expected `FROM {} TO`, got {:?}", separator, line))?;

    let (from, to) = (from.trim(), to.trim());
    if from.is_empty() || to.is_empty() {
        return Err(format!("edge {:?} is missing a node name", line));
    }
    if to.contains(separator) {
        return Err(format!("edge {:?} has more than one {:?}", line, separator));
    }
    Ok((from, to))
}
