//! Directed edge type plus the presentation helpers shared by every
//! construction: canonical shuffling and vertex relabeling.

use std::fmt;

use rand::{Rng, seq::SliceRandom};

use crate::error::GraphError;

/// A directed edge from `source` to `target`.
///
/// Ordering is lexicographic on `(source, target)`, which is the canonical
/// order used before shuffling.
///
/// # Examples
/// ```
/// use reachgen_core::Edge;
///
/// let edge = Edge::new(4, 1);
/// assert_eq!(edge.forward(), Edge::new(1, 4));
/// assert_eq!(edge.to_string(), "4 1");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Edge {
    source: usize,
    target: usize,
}

impl Edge {
    /// Creates an edge from `source` to `target`.
    #[must_use]
    pub const fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }

    /// Vertex the edge leaves.
    #[must_use]
    pub const fn source(self) -> usize {
        self.source
    }

    /// Vertex the edge enters.
    #[must_use]
    pub const fn target(self) -> usize {
        self.target
    }

    /// Returns the same pair pointing from the smaller to the larger index.
    #[must_use]
    pub const fn forward(self) -> Self {
        if self.source <= self.target {
            self
        } else {
            self.reversed()
        }
    }

    /// Returns the same pair pointing from the larger to the smaller index.
    #[must_use]
    pub const fn backward(self) -> Self {
        if self.source >= self.target {
            self
        } else {
            self.reversed()
        }
    }

    /// Swaps the endpoints.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(self.target, self.source)
    }

    /// Returns `true` when both endpoints coincide.
    #[must_use]
    pub const fn is_loop(self) -> bool {
        self.source == self.target
    }

    /// Largest endpoint index.
    #[must_use]
    pub const fn max_endpoint(self) -> usize {
        if self.source >= self.target {
            self.source
        } else {
            self.target
        }
    }
}

impl From<(usize, usize)> for Edge {
    fn from((source, target): (usize, usize)) -> Self {
        Self::new(source, target)
    }
}

impl From<Edge> for (usize, usize) {
    fn from(edge: Edge) -> Self {
        (edge.source, edge.target)
    }
}

/// Renders the edge in the edge-list text format: `"source target"`.
impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.source, self.target)
    }
}

/// Sorts `edges` canonically and then shuffles them uniformly.
///
/// The sort makes the result independent of the container the edges were
/// collected in, so a fixed seed always yields the same sequence.
pub(crate) fn shuffle_canonical<R, I>(edges: I, rng: &mut R) -> Vec<Edge>
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = Edge>,
{
    let mut ordered: Vec<Edge> = edges.into_iter().collect();
    ordered.sort_unstable();
    ordered.shuffle(rng);
    ordered
}

/// Draws a uniform permutation of `0..node_count` and applies it to both
/// endpoints of every edge.
///
/// # Errors
/// Returns [`GraphError::EdgeOutOfRange`] if an edge references a vertex
/// outside `0..node_count`; the edges are left partially relabeled.
pub(crate) fn relabel_edges<R>(
    edges: &mut [Edge],
    node_count: usize,
    rng: &mut R,
) -> Result<(), GraphError>
where
    R: Rng + ?Sized,
{
    let mut permutation: Vec<usize> = (0..node_count).collect();
    permutation.shuffle(rng);

    for edge in edges.iter_mut() {
        let (Some(&source), Some(&target)) =
            (permutation.get(edge.source), permutation.get(edge.target))
        else {
            return Err(GraphError::EdgeOutOfRange {
                edge: *edge,
                node_count,
            });
        };
        *edge = Edge::new(source, target);
    }
    Ok(())
}
