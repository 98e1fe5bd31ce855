//! Uniform random digraphs and random DAGs.

use std::collections::HashSet;

use rand::Rng;

use crate::{
    edge::{Edge, shuffle_canonical},
    error::Result,
    graph::{Construction, GraphClass},
    sampling::{
        ensure_capacity, fill_distinct, max_directed_edges, max_forward_edges,
        random_distinct_pair,
    },
};

/// Simple digraph with `edge_count` edges drawn uniformly at random.
///
/// # Examples
/// ```
/// use reachgen_core::shapes::UniformGraph;
///
/// assert!(UniformGraph::new(4, 12).is_ok());
/// assert!(UniformGraph::new(4, 13).is_err());
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UniformGraph {
    node_count: usize,
    edge_count: usize,
}

impl UniformGraph {
    /// Creates a uniform graph description.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::TooManyEdges`] when
    /// `edge_count > n·(n−1)`.
    pub fn new(node_count: usize, edge_count: usize) -> Result<Self> {
        ensure_capacity(
            Self::CLASS,
            node_count,
            edge_count,
            max_directed_edges(node_count),
        )?;
        Ok(Self {
            node_count,
            edge_count,
        })
    }
}

impl Construction for UniformGraph {
    const CLASS: GraphClass = GraphClass::Uniform;

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
        let mut edges = HashSet::with_capacity(self.edge_count);
        fill_distinct(rng, &mut edges, self.edge_count, |rng| {
            random_distinct_pair(rng, self.node_count).map(Some)
        })?;
        Ok(shuffle_canonical(edges, rng))
    }
}

/// Random DAG: every edge points from the smaller to the larger index, so
/// index order is a topological order before relabeling.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use reachgen_core::{Construction, shapes::RandomDag};
///
/// let dag = RandomDag::new(6, 15)?;
/// let edges = dag.build_edges(&mut SmallRng::seed_from_u64(4))?;
/// assert!(edges.iter().all(|edge| edge.source() < edge.target()));
/// # Ok::<(), reachgen_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RandomDag {
    node_count: usize,
    edge_count: usize,
}

impl RandomDag {
    /// Creates a random DAG description.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::TooManyEdges`] when
    /// `edge_count > n·(n−1)/2`.
    pub fn new(node_count: usize, edge_count: usize) -> Result<Self> {
        ensure_capacity(
            Self::CLASS,
            node_count,
            edge_count,
            max_forward_edges(node_count),
        )?;
        Ok(Self {
            node_count,
            edge_count,
        })
    }

    /// Samples the forward edge set without ordering it.
    pub(crate) fn sample_edge_set<R>(&self, rng: &mut R) -> Result<HashSet<Edge>>
    where
        R: Rng + ?Sized,
    {
        let mut edges = HashSet::with_capacity(self.edge_count);
        fill_distinct(rng, &mut edges, self.edge_count, |rng| {
            random_distinct_pair(rng, self.node_count).map(|pair| Some(pair.forward()))
        })?;
        Ok(edges)
    }
}

impl Construction for RandomDag {
    const CLASS: GraphClass = GraphClass::Dag;

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
        let edges = self.sample_edge_set(rng)?;
        Ok(shuffle_canonical(edges, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{SeedableRng, rngs::SmallRng};
    use rstest::rstest;

    use crate::{
        GraphError,
        invariants::is_acyclic,
        test_utils::assert_graph,
    };

    #[rstest]
    #[case(2, 2)]
    #[case(5, 0)]
    #[case(10, 45)]
    #[case(30, 870)]
    fn uniform_hits_the_edge_count(#[case] node_count: usize, #[case] edge_count: usize) {
        let graph = UniformGraph::new(node_count, edge_count).expect("feasible");
        let edges = graph
            .build_edges(&mut SmallRng::seed_from_u64(8))
            .expect("build");
        assert_graph(&edges, node_count, edge_count);
    }

    #[test]
    fn uniform_rejects_overfull_requests() {
        assert_eq!(
            UniformGraph::new(1, 1),
            Err(GraphError::TooManyEdges {
                class: GraphClass::Uniform,
                node_count: 1,
                requested: 1,
                max: 0,
            })
        );
    }

    #[rstest]
    #[case(2, 1)]
    #[case(12, 40)]
    #[case(12, 66)]
    fn dag_edges_point_forward(#[case] node_count: usize, #[case] edge_count: usize) {
        let dag = RandomDag::new(node_count, edge_count).expect("feasible");
        let edges = dag
            .build_edges(&mut SmallRng::seed_from_u64(21))
            .expect("build");
        assert_graph(&edges, node_count, edge_count);
        assert!(edges.iter().all(|edge| edge.source() < edge.target()));
        assert!(is_acyclic(&edges, node_count));
    }

    #[test]
    fn dag_rejects_more_than_half_the_pairs() {
        assert!(RandomDag::new(4, 6).is_ok());
        assert!(matches!(
            RandomDag::new(4, 7),
            Err(GraphError::TooManyEdges { max: 6, .. })
        ));
    }

    #[test]
    fn output_does_not_follow_canonical_order() {
        let graph = UniformGraph::new(20, 100).expect("feasible");
        let edges = graph
            .build_edges(&mut SmallRng::seed_from_u64(3))
            .expect("build");
        let mut sorted = edges.clone();
        sorted.sort_unstable();
        assert_ne!(edges, sorted);
    }
}
