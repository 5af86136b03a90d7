//! Error types for the utility library

use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;
use thiserror::Error;

/// Error returned when a graph cannot be put in topological order
///
/// Neither variant carries a partial order. Both mean the graph has at least
/// one cycle; they differ only in how far the sort got before noticing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopoSortError {
    /// The graph is non-empty but every node has a predecessor, so nothing can go first
    #[error("No nodes without incoming edges ({nodes} nodes, all have predecessors)")]
    NoRoots { nodes: usize },
    /// Some nodes were ordered, then the rest were left waiting on each other
    #[error("Cycle detected: {remaining_edges} edge(s) left after ordering {sorted} node(s)")]
    CycleDetected { sorted: usize, remaining_edges: usize },
}

/// Error type for reading and parsing puzzle input
#[derive(Debug, Error)]
pub enum InputError {
    /// The input file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Text is not a valid integer
    #[error("Invalid integer {input:?}: {source}")]
    Int {
        input: String,
        #[source]
        source: ParseIntError,
    },
    /// Text is not a valid float
    #[error("Invalid float {input:?}: {source}")]
    Float {
        input: String,
        #[source]
        source: ParseFloatError,
    },
    /// Text is not one of `1`, `0`, `true`, `false`
    #[error("Invalid boolean {0:?}: expected 1, 0, true or false")]
    Bool(String),
}

/// Error type for building a [`Wire`](crate::Wire) from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    /// Name is not exactly three characters long
    #[error("Wire name must be exactly 3 characters, got {0:?}")]
    Length(String),
    /// Name contains a non-ASCII character
    #[error("Wire name must be ASCII, got {0:?}")]
    NonAscii(String),
}
