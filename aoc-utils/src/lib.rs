//! Advent of Code Utilities
//!
//! Small pieces shared between daily solutions.
//!
//! # Overview
//!
//! This library provides:
//! - [`DiGraph`], a directed graph with a Kahn's algorithm topological sort
//! - [`Wire`], a three-letter node name for circuit puzzles
//! - [`input`] helpers for reading files and parsing numbers, booleans and regex groups
//!
//! # Quick Example
//!
//! ```
//! use aoc_utils::{DiGraph, Wire};
//!
//! let x: Wire = "x00".parse().unwrap();
//! let y: Wire = "y00".parse().unwrap();
//! let z: Wire = "z00".parse().unwrap();
//!
//! // z00 is computed from x00 and y00
//! let mut graph = DiGraph::new();
//! graph.add_edge(x, z);
//! graph.add_edge(y, z);
//!
//! let order = graph.topo_sort().unwrap();
//! assert_eq!(order.len(), 3);
//! assert_eq!(order[2], z);
//! ```

mod digraph;
mod error;
pub mod input;
mod wire;

// Re-export public API
pub use digraph::DiGraph;
pub use error::{InputError, TopoSortError, WireError};
pub use input::{
    capture_groups, parse_bool, parse_float, parse_int, read_input, read_input_untrimmed,
};
pub use wire::Wire;
