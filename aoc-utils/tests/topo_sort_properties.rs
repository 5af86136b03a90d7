//! Property-based tests for topological sorting
//!
//! Random acyclic graphs are built by only allowing edges from a smaller
//! node id to a larger one; cycles are then forced in by reversing an edge.

use aoc_utils::{DiGraph, TopoSortError};
use proptest::prelude::*;
use proptest::sample::Index;
use std::collections::{HashMap, HashSet};

/// Edge lists over nodes 0..24 where every edge goes from a smaller id to a larger one
fn acyclic_edges() -> impl Strategy<Value = Vec<(u8, u8)>> {
    prop::collection::vec((0u8..24, 0u8..24), 0..80).prop_map(|pairs| {
        pairs
            .into_iter()
            .filter(|(from, to)| from != to)
            .map(|(from, to)| (from.min(to), from.max(to)))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every endpoint comes out exactly once
    #[test]
    fn prop_sort_is_permutation_of_nodes(edges in acyclic_edges()) {
        let mut graph: DiGraph<u8> = edges.iter().copied().collect();
        let order = graph.topo_sort().unwrap();

        let expected: HashSet<u8> = edges.iter().flat_map(|&(f, t)| [f, t]).collect();
        let seen: HashSet<u8> = order.iter().copied().collect();
        prop_assert_eq!(order.len(), expected.len());
        prop_assert_eq!(seen, expected);
    }

    /// Every edge points forward in the result
    #[test]
    fn prop_sort_respects_edges(edges in acyclic_edges()) {
        let mut graph: DiGraph<u8> = edges.iter().copied().collect();
        let order = graph.topo_sort().unwrap();

        let position: HashMap<u8, usize> =
            order.iter().enumerate().map(|(i, &n)| (n, i)).collect();
        for (from, to) in &edges {
            prop_assert!(
                position[from] < position[to],
                "{} should come before {} in {:?}", from, to, order
            );
        }
        prop_assert!(!graph.has_edges());
    }

    /// Reversing any edge of a DAG closes a cycle, and sorting must fail
    #[test]
    fn prop_back_edge_is_detected(edges in acyclic_edges(), pick in any::<Index>()) {
        prop_assume!(!edges.is_empty());
        let (from, to) = *pick.get(&edges);

        let mut graph: DiGraph<u8> = edges.iter().copied().collect();
        graph.add_edge(to, from);

        match graph.topo_sort() {
            Err(TopoSortError::NoRoots { .. }) | Err(TopoSortError::CycleDetected { .. }) => {}
            Ok(order) => prop_assert!(false, "Expected a cycle error, got order {:?}", order),
        }
    }

    /// A self-loop anywhere makes the graph unsortable
    #[test]
    fn prop_self_loop_is_detected(edges in acyclic_edges(), node in 0u8..24) {
        let mut graph: DiGraph<u8> = edges.iter().copied().collect();
        graph.add_edge(node, node);

        prop_assert!(graph.topo_sort().is_err());
    }

    /// Sorting a copy leaves the original graph as it was
    #[test]
    fn prop_sorted_does_not_consume(edges in acyclic_edges()) {
        let graph: DiGraph<u8> = edges.iter().copied().collect();

        let first = graph.sorted().unwrap();
        prop_assert_eq!(graph.edge_count(), edges.len());
        prop_assert_eq!(graph.sorted().unwrap().len(), first.len());
    }
}
