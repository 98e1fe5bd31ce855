//! Random digraphs whose endpoints favour a block of heavy vertices.

use std::collections::HashSet;

use rand::{
    Rng,
    distributions::{Distribution, WeightedIndex},
};

use crate::{
    edge::{Edge, shuffle_canonical},
    error::{GraphError, Result},
    graph::{Construction, GraphClass},
    sampling::{ensure_capacity, max_directed_edges},
};

/// Endpoint draws per requested edge. Loops and repeats are discarded, so
/// the draw budget is a multiple of the edge count.
pub const OVERSAMPLING_FACTOR: usize = 3;

/// Simple digraph whose endpoints are drawn by weight.
///
/// Vertices `0..heavy_nodes` weigh `heavy_proportion` and the rest weigh
/// one, so a heavy vertex expects `heavy_proportion` times the degree of a
/// light one. Building draws `3·m` sources and `3·m` targets and keeps the
/// first `m` distinct non-loop pairs. Heavy skew can leave the budget
/// short; that surfaces as [`GraphError::InsufficientOversampling`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DegreeSkewedGraph {
    node_count: usize,
    edge_count: usize,
    heavy_nodes: usize,
    heavy_proportion: usize,
}

impl DegreeSkewedGraph {
    /// Creates a degree-skewed graph description.
    ///
    /// # Errors
    /// Returns [`GraphError::TooManyEdges`] when `edge_count > n·(n−1)`,
    /// [`GraphError::TooManyHeavyNodes`] when `heavy_nodes > node_count`,
    /// [`GraphError::ZeroHeavyWeight`] when heavy vertices would weigh
    /// nothing, and [`GraphError::Overflow`] when the draw count or the
    /// total endpoint weight does not fit `usize`.
    pub fn new(
        node_count: usize,
        edge_count: usize,
        heavy_nodes: usize,
        heavy_proportion: usize,
    ) -> Result<Self> {
        ensure_capacity(
            Self::CLASS,
            node_count,
            edge_count,
            max_directed_edges(node_count),
        )?;
        if heavy_nodes > node_count {
            return Err(GraphError::TooManyHeavyNodes {
                heavy_nodes,
                node_count,
            });
        }
        if heavy_nodes > 0 && heavy_proportion == 0 {
            return Err(GraphError::ZeroHeavyWeight { heavy_nodes });
        }
        edge_count
            .checked_mul(OVERSAMPLING_FACTOR)
            .ok_or(GraphError::Overflow {
                quantity: "oversampled draw count",
            })?;
        heavy_nodes
            .checked_mul(heavy_proportion)
            .and_then(|heavy| heavy.checked_add(node_count - heavy_nodes))
            .ok_or(GraphError::Overflow {
                quantity: "endpoint weight total",
            })?;
        Ok(Self {
            node_count,
            edge_count,
            heavy_nodes,
            heavy_proportion,
        })
    }

    /// Number of heavy vertices at the low end of the index range.
    #[must_use]
    pub const fn heavy_nodes(&self) -> usize {
        self.heavy_nodes
    }

    /// Weight of each heavy vertex relative to a light one.
    #[must_use]
    pub const fn heavy_proportion(&self) -> usize {
        self.heavy_proportion
    }

    fn weights(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.node_count).map(|vertex| {
            if vertex < self.heavy_nodes {
                self.heavy_proportion
            } else {
                1
            }
        })
    }
}

impl Construction for DegreeSkewedGraph {
    const CLASS: GraphClass = GraphClass::DegreeSkewed;

    fn node_count(&self) -> usize {
        self.node_count
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn build_edges<R>(&self, rng: &mut R) -> Result<Vec<Edge>>
    where
        R: Rng + ?Sized,
    {
        if self.edge_count == 0 {
            return Ok(Vec::new());
        }
        let distribution = WeightedIndex::new(self.weights())
            .map_err(|error| GraphError::InvalidWeights { error })?;
        let draws = self.edge_count * OVERSAMPLING_FACTOR;
        let sources: Vec<usize> = (0..draws).map(|_| distribution.sample(rng)).collect();
        let targets: Vec<usize> = (0..draws).map(|_| distribution.sample(rng)).collect();

        let mut edges = HashSet::with_capacity(self.edge_count);
        for (source, target) in sources.into_iter().zip(targets) {
            if source != target {
                edges.insert(Edge::new(source, target));
                if edges.len() == self.edge_count {
                    break;
                }
            }
        }
        if edges.len() < self.edge_count {
            return Err(GraphError::InsufficientOversampling {
                requested: self.edge_count,
                produced: edges.len(),
            });
        }
        Ok(shuffle_canonical(edges, rng))
    }
}
