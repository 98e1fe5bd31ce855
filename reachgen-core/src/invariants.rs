//! Structural checks over produced edge sequences.
//!
//! The checkers back the crate's own tests and let harnesses verify a
//! graph before persisting it, without reimplementing the traversal.

use std::collections::{HashSet, VecDeque};

use thiserror::Error;

use crate::edge::Edge;

/// Reports why an edge sequence is not a simple digraph of the expected size.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum EdgeSetViolation {
    /// Both endpoints coincide.
    #[error("edge `{edge}` is a self-loop")]
    SelfLoop {
        /// Offending edge.
        edge: Edge,
    },
    /// The same ordered pair appears twice.
    #[error("edge `{edge}` appears more than once")]
    Duplicate {
        /// Offending edge.
        edge: Edge,
    },
    /// An endpoint lies outside `0..node_count`.
    #[error("edge `{edge}` references a vertex outside 0..{node_count}")]
    OutOfRange {
        /// Offending edge.
        edge: Edge,
        /// Vertex count of the graph.
        node_count: usize,
    },
    /// The sequence has the wrong length.
    #[error("expected {expected} edges but found {actual}")]
    CountMismatch {
        /// Edge count the construction promised.
        expected: usize,
        /// Edges actually present.
        actual: usize,
    },
}

/// Checks that `edges` has no self-loops, no duplicates, and stays inside
/// `0..node_count`.
///
/// # Errors
/// Returns the first [`EdgeSetViolation`] found in sequence order.
///
/// # Examples
/// ```
/// use reachgen_core::{Edge, invariants::{EdgeSetViolation, check_simple}};
///
/// assert!(check_simple(&[Edge::new(0, 1), Edge::new(1, 0)], 2).is_ok());
/// assert_eq!(
///     check_simple(&[Edge::new(0, 1), Edge::new(0, 1)], 2),
///     Err(EdgeSetViolation::Duplicate { edge: Edge::new(0, 1) }),
/// );
/// ```
pub fn check_simple(edges: &[Edge], node_count: usize) -> Result<(), EdgeSetViolation> {
    let mut seen = HashSet::with_capacity(edges.len());
    for &edge in edges {
        if edge.is_loop() {
            return Err(EdgeSetViolation::SelfLoop { edge });
        }
        if edge.max_endpoint() >= node_count {
            return Err(EdgeSetViolation::OutOfRange { edge, node_count });
        }
        if !seen.insert(edge) {
            return Err(EdgeSetViolation::Duplicate { edge });
        }
    }
    Ok(())
}

/// Checks [`check_simple`] and that exactly `expected` edges are present.
///
/// # Errors
/// Returns [`EdgeSetViolation::CountMismatch`] before inspecting edges when
/// the length is wrong.
pub fn check_graph(
    edges: &[Edge],
    node_count: usize,
    expected: usize,
) -> Result<(), EdgeSetViolation> {
    if edges.len() != expected {
        return Err(EdgeSetViolation::CountMismatch {
            expected,
            actual: edges.len(),
        });
    }
    check_simple(edges, node_count)
}

/// Returns a topological order of `0..node_count`, or `None` when the
/// edges contain a cycle. Out-of-range endpoints are ignored.
#[must_use]
pub fn topological_order(edges: &[Edge], node_count: usize) -> Option<Vec<usize>> {
    let mut successors = vec![Vec::new(); node_count];
    let mut in_degree = vec![0_usize; node_count];
    for edge in edges {
        let (Some(list), Some(degree)) = (
            successors.get_mut(edge.source()),
            in_degree.get_mut(edge.target()),
        ) else {
            continue;
        };
        list.push(edge.target());
        *degree += 1;
    }

    let mut ready: VecDeque<usize> = in_degree
        .iter()
        .enumerate()
        .filter_map(|(vertex, &degree)| (degree == 0).then_some(vertex))
        .collect();
    let mut order = Vec::with_capacity(node_count);
    while let Some(vertex) = ready.pop_front() {
        order.push(vertex);
        let Some(list) = successors.get(vertex) else {
            continue;
        };
        for &next in list {
            if let Some(degree) = in_degree.get_mut(next) {
                *degree -= 1;
                if *degree == 0 {
                    ready.push_back(next);
                }
            }
        }
    }

    (order.len() == node_count).then_some(order)
}

/// Returns `true` when the edges contain no directed cycle.
#[must_use]
pub fn is_acyclic(edges: &[Edge], node_count: usize) -> bool {
    topological_order(edges, node_count).is_some()
}
