//! Directed Graph with Topological Sort
//!
//! [`DiGraph`] keeps every edge twice: once in a node → successors map and
//! once in a node → predecessors map. That makes both directions cheap to
//! walk, which is what Kahn's algorithm needs.
//!
//! # Warning: Sorting Consumes Edges
//!
//! [`DiGraph::topo_sort`] removes edges as it runs. Once a sort has been
//! attempted the graph should be treated as spent, whatever the outcome.
//! Use [`DiGraph::sorted`] (or clone first) if the graph must survive.
//!
//! # Example: Ordering Dependencies
//!
//! ```rust
//! use aoc_utils::DiGraph;
//!
//! // Each edge means "left must come before right"
//! let mut graph = DiGraph::new();
//! graph.add_edge("parse", "solve");
//! graph.add_edge("solve", "print");
//! graph.add_edge("parse", "print");
//!
//! let order = graph.topo_sort().unwrap();
//! assert_eq!(order, vec!["parse", "solve", "print"]);
//!
//! // Edges were consumed by the sort, nodes were not
//! assert!(!graph.has_edges());
//! assert_eq!(graph.node_count(), 3);
//! ```
//!
//! # Example: Detecting a Cycle
//!
//! ```rust
//! use aoc_utils::{DiGraph, TopoSortError};
//!
//! let mut graph: DiGraph<u32> = [(0, 1), (1, 2), (2, 3), (3, 1)].into_iter().collect();
//!
//! assert_eq!(
//!     graph.topo_sort(),
//!     Err(TopoSortError::CycleDetected { sorted: 1, remaining_edges: 3 })
//! );
//! ```
//!
//! # Parallel Edges
//!
//! Adding the same edge twice stores it twice. The destination keeps both
//! copies as predecessors, and [`DiGraph::remove_edge`] takes away one copy
//! at a time. [`DiGraph::remove_all_edges`] drops every copy at once.

use crate::error::TopoSortError;
use std::collections::HashMap;
use std::collections::hash_map::Keys;
use std::hash::Hash;
use tracing::{debug, trace};

/// A directed graph that stores its edges in both directions.
///
/// Nodes are any `Eq + Hash + Clone` key supplied by the caller. A node
/// exists in the graph once it has been an endpoint of some edge, and stays
/// (possibly with no edges left) until the graph is dropped.
#[derive(Debug, Clone)]
pub struct DiGraph<N> {
    /// node -> successors, one entry per edge
    forward: HashMap<N, Vec<N>>,
    /// node -> predecessors, mirrors `forward`
    backward: HashMap<N, Vec<N>>,
}

impl<N> Default for DiGraph<N> {
    fn default() -> Self {
        Self {
            forward: HashMap::new(),
            backward: HashMap::new(),
        }
    }
}

impl<N: Eq + Hash + Clone> DiGraph<N> {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with room for `nodes` nodes
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            forward: HashMap::with_capacity(nodes),
            backward: HashMap::with_capacity(nodes),
        }
    }

    /// Add the edge `from -> to`.
    ///
    /// Both endpoints become nodes of the graph. Adding an edge that already
    /// exists creates a parallel copy; self-loops are accepted and will make
    /// [`topo_sort`](Self::topo_sort) fail.
    pub fn add_edge(&mut self, from: N, to: N) {
        // Every endpoint gets an entry in both maps, even if it stays empty
        self.forward.entry(to.clone()).or_default();
        self.backward.entry(from.clone()).or_default();

        self.forward.entry(from.clone()).or_default().push(to.clone());
        self.backward.entry(to).or_default().push(from);
    }

    /// Remove one copy of the edge `from -> to`.
    ///
    /// Returns `false` (and changes nothing) if there is no such edge. When
    /// parallel copies exist only the first one is removed.
    pub fn remove_edge(&mut self, from: &N, to: &N) -> bool {
        let Some(successors) = self.forward.get_mut(from) else {
            return false;
        };
        let Some(pos) = successors.iter().position(|n| n == to) else {
            return false;
        };
        successors.remove(pos);

        if let Some(predecessors) = self.backward.get_mut(to)
            && let Some(pos) = predecessors.iter().position(|n| n == from)
        {
            predecessors.remove(pos);
        }
        true
    }

    /// Remove every copy of the edge `from -> to`, returning how many were removed
    pub fn remove_all_edges(&mut self, from: &N, to: &N) -> usize {
        let removed = match self.forward.get_mut(from) {
            Some(successors) => {
                let before = successors.len();
                successors.retain(|n| n != to);
                before - successors.len()
            }
            None => 0,
        };

        if removed > 0
            && let Some(predecessors) = self.backward.get_mut(to)
        {
            predecessors.retain(|n| n != from);
        }
        removed
    }

    /// Check whether any edge is left in the graph
    pub fn has_edges(&self) -> bool {
        self.forward.values().any(|s| !s.is_empty())
            || self.backward.values().any(|p| !p.is_empty())
    }

    /// Number of nodes, including nodes whose edges have all been removed
    pub fn node_count(&self) -> usize {
        self.forward.len()
    }

    /// Number of edges, counting parallel copies separately
    pub fn edge_count(&self) -> usize {
        self.forward.values().map(Vec::len).sum()
    }

    /// Check if the graph has no nodes at all
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Check if `node` has ever been an endpoint of an edge
    pub fn contains_node(&self, node: &N) -> bool {
        self.forward.contains_key(node)
    }

    /// Check if at least one copy of `from -> to` exists
    pub fn contains_edge(&self, from: &N, to: &N) -> bool {
        self.successors(from).contains(to)
    }

    /// Successors of `node`, one entry per outgoing edge
    pub fn successors(&self, node: &N) -> &[N] {
        self.forward.get(node).map(Vec::as_slice).unwrap_or_default()
    }

    /// Predecessors of `node`, one entry per incoming edge
    pub fn predecessors(&self, node: &N) -> &[N] {
        self.backward.get(node).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of incoming edges of `node`, counting parallel copies
    pub fn in_degree(&self, node: &N) -> usize {
        self.predecessors(node).len()
    }

    /// Number of outgoing edges of `node`, counting parallel copies
    pub fn out_degree(&self, node: &N) -> usize {
        self.successors(node).len()
    }

    /// Iterate over all nodes in arbitrary order
    pub fn nodes(&self) -> Keys<'_, N, Vec<N>> {
        self.forward.keys()
    }

    /// Iterate over nodes with no incoming edges, in arbitrary order
    pub fn roots(&self) -> impl Iterator<Item = &N> + '_ {
        self.backward
            .iter()
            .filter(|(_, predecessors)| predecessors.is_empty())
            .map(|(node, _)| node)
    }

    /// Sort the nodes so that every edge points forward, using
    /// [Kahn's algorithm](https://en.wikipedia.org/wiki/Topological_sorting#Kahn's_algorithm).
    ///
    /// Nodes that are not ordered relative to each other by any path come
    /// out in an unspecified order, which may differ between runs.
    ///
    /// This consumes the edges of the graph. A failed sort may leave some of
    /// the original edges behind (all of them on `NoRoots`). Treat the graph
    /// as spent either way, and rebuild it (or call [`sorted`](Self::sorted))
    /// to sort again.
    ///
    /// # Returns
    /// * `Ok(Vec<N>)` - Every node exactly once, each edge's source before its target
    /// * `Err(TopoSortError::NoRoots)` - Non-empty graph where every node has a predecessor
    /// * `Err(TopoSortError::CycleDetected)` - Edges remain after all reachable nodes were ordered
    pub fn topo_sort(&mut self) -> Result<Vec<N>, TopoSortError> {
        let nodes = self.node_count();
        if nodes == 0 {
            return Ok(Vec::new());
        }

        let mut ready: Vec<N> = self.roots().cloned().collect();
        if ready.is_empty() {
            debug!(nodes, "topological sort failed: no root nodes");
            return Err(TopoSortError::NoRoots { nodes });
        }
        trace!(nodes, roots = ready.len(), "starting topological sort");

        let mut order = Vec::with_capacity(nodes);
        while let Some(node) = ready.pop() {
            let successors = self
                .forward
                .get_mut(&node)
                .map(std::mem::take)
                .unwrap_or_default();

            for successor in successors {
                let Some(predecessors) = self.backward.get_mut(&successor) else {
                    continue;
                };
                if let Some(pos) = predecessors.iter().position(|p| *p == node) {
                    predecessors.swap_remove(pos);
                    // Parallel edges keep the successor waiting until the last copy goes
                    if predecessors.is_empty() {
                        ready.push(successor);
                    }
                }
            }
            order.push(node);
        }

        if self.has_edges() {
            let remaining_edges = self.edge_count();
            debug!(
                sorted = order.len(),
                remaining_edges, "topological sort failed: cycle detected"
            );
            return Err(TopoSortError::CycleDetected {
                sorted: order.len(),
                remaining_edges,
            });
        }

        debug!(nodes = order.len(), "topological sort complete");
        Ok(order)
    }

    /// Sort a copy of the graph, leaving `self` untouched
    pub fn sorted(&self) -> Result<Vec<N>, TopoSortError> {
        self.clone().topo_sort()
    }
}

impl<N: Eq + Hash + Clone> Extend<(N, N)> for DiGraph<N> {
    fn extend<I: IntoIterator<Item = (N, N)>>(&mut self, edges: I) {
        for (from, to) in edges {
            self.add_edge(from, to);
        }
    }
}

impl<N: Eq + Hash + Clone> FromIterator<(N, N)> for DiGraph<N> {
    fn from_iter<I: IntoIterator<Item = (N, N)>>(edges: I) -> Self {
        let mut graph = Self::new();
        graph.extend(edges);
        graph
    }
}
