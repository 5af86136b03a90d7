//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input file could not be read
    #[error("Input error: {0}")]
    Input(#[from] aoc_utils::InputError),

    /// A line of the edge list is malformed
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// The edges contain a cycle
    #[error("Invalid dependency graph: {0}")]
    Sort(#[from] aoc_utils::TopoSortError),

    /// Log subscriber could not be installed
    #[error("Logging setup failed: {0}")]
    Logging(String),
}
