//! Random DAG with a controlled number of backward edges.

use rand::Rng;

use crate::{
    edge::{Edge, shuffle_canonical},
    error::{GraphError, Result},
    graph::{Construction, GraphClass},
    sampling::{ensure_capacity, fill_distinct, max_forward_edges, random_distinct_pair},
};

use super::RandomDag;

/// A [`RandomDag`] with `dag_edges` forward edges followed by
/// `additional_edges` edges pointing from a larger to a smaller index.
///
/// Backward edges never collide with forward ones, so the total is exactly
/// the sum of both phases. They may close cycles.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AlmostDag {
    dag: RandomDag,
    additional_edges: usize,
}

impl AlmostDag {
    /// Creates an almost-DAG description.
    ///
    /// # Errors
    /// Returns [`GraphError::TooManyEdges`] when either phase asks for more
    /// than `n·(n−1)/2` edges.
    pub fn new(node_count: usize, dag_edges: usize, additional_edges: usize) -> Result<Self> {
        let dag = RandomDag::new(node_count, dag_edges)?;
        ensure_capacity(
            Self::CLASS,
            node_count,
            additional_edges,
            max_forward_edges(node_count),
        )?;
        Ok(Self {
            dag,
            additional_edges,
        })
    }

    /// Number of forward edges in the DAG phase.
    #[must_use]
    pub fn dag_edges(&self) -> usize {
        self.dag.edge_count()
    }

    /// Number of backward edges added after the DAG phase.
    #[must_use]
    pub const fn additional_edges(&self) -> usize {
        self.additional_edges
    }
}

impl Construction for AlmostDag {
    const CLASS: GraphClass = GraphClass::AlmostDag;

    fn node_count(&self) -> usize {
        self.dag.node_count()
    }

    fn edge_count(&self) -> usize {
        self.dag.edge_count() + self.additional_edges
    }

    fn build_edges<R>(&self, rng: &mut R) -> Result<Vec<Edge>>
    where
        R: Rng + ?Sized,
    {
        let node_count = self.node_count();
        let mut edges = self.dag.sample_edge_set(rng)?;
        let target = edges
            .len()
            .checked_add(self.additional_edges)
            .ok_or(GraphError::Overflow {
                quantity: "almost-DAG edge count",
            })?;
        fill_distinct(rng, &mut edges, target, |rng| {
            random_distinct_pair(rng, node_count).map(|pair| Some(pair.backward()))
        })?;
        Ok(shuffle_canonical(edges, rng))
    }
}
