//! Samplers for the randomly wired constructions.

use rand::RngCore;

use crate::{
    error::Result,
    graph::Shape,
    sampling::{max_directed_edges, max_forward_edges},
    shapes::{AlmostDag, DegreeSkewedGraph, RandomDag, UniformGraph},
};

use super::{
    ShapeSampler,
    bounds::{Bounds, RatioBounds, draw_clamped},
};

/// Uniform graphs with `n` from `nodes` and `m` from `edges`, capped at
/// `n·(n−1)`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UniformSampler {
    nodes: Bounds,
    edges: Bounds,
}

impl UniformSampler {
    /// Creates the sampler.
    #[must_use]
    pub const fn new(nodes: Bounds, edges: Bounds) -> Self {
        Self { nodes, edges }
    }
}

impl ShapeSampler for UniformSampler {
    fn sample_shape(&self, rng: &mut dyn RngCore) -> Result<Shape> {
        let node_count = self.nodes.sample(rng);
        let edge_count = self.edges.sample_capped(rng, max_directed_edges(node_count));
        UniformGraph::new(node_count, edge_count).map(Shape::from)
    }
}

/// Tiny uniform graphs: `m` ranges from `⌊n/2⌋` up to a complete digraph.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TinyUniformSampler {
    nodes: Bounds,
}

impl TinyUniformSampler {
    /// Creates the sampler.
    #[must_use]
    pub const fn new(nodes: Bounds) -> Self {
        Self { nodes }
    }
}

impl ShapeSampler for TinyUniformSampler {
    fn sample_shape(&self, rng: &mut dyn RngCore) -> Result<Shape> {
        let node_count = self.nodes.sample(rng);
        let edge_count = draw_clamped(rng, node_count / 2, max_directed_edges(node_count));
        UniformGraph::new(node_count, edge_count).map(Shape::from)
    }
}

/// Sparse uniform graphs: a multiplier `s` is drawn first, then `m` from
/// `[n, ⌊s·n⌋]`.
#[derive(Clone, Debug, PartialEq)]
pub struct SparseUniformSampler {
    nodes: Bounds,
    multiplier: RatioBounds,
}

impl SparseUniformSampler {
    /// Creates the sampler.
    #[must_use]
    pub const fn new(nodes: Bounds, multiplier: RatioBounds) -> Self {
        Self { nodes, multiplier }
    }
}

impl ShapeSampler for SparseUniformSampler {
    fn sample_shape(&self, rng: &mut dyn RngCore) -> Result<Shape> {
        let node_count = self.nodes.sample(rng);
        let multiplier = self.multiplier.sample(rng);
        // Saturating float-to-int cast; negative products become zero.
        let densest = (multiplier * node_count as f64).floor() as usize;
        let max = densest.min(max_directed_edges(node_count));
        let edge_count = draw_clamped(rng, node_count, max);
        UniformGraph::new(node_count, edge_count).map(Shape::from)
    }
}

/// Random DAGs with `m` capped at `n·(n−1)/2`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DagSampler {
    nodes: Bounds,
    edges: Bounds,
}

impl DagSampler {
    /// Creates the sampler.
    #[must_use]
    pub const fn new(nodes: Bounds, edges: Bounds) -> Self {
        Self { nodes, edges }
    }
}

impl ShapeSampler for DagSampler {
    fn sample_shape(&self, rng: &mut dyn RngCore) -> Result<Shape> {
        let node_count = self.nodes.sample(rng);
        let edge_count = self.edges.sample_capped(rng, max_forward_edges(node_count));
        RandomDag::new(node_count, edge_count).map(Shape::from)
    }
}

/// Almost-DAGs: the DAG phase as [`DagSampler`], then between one and
/// `⌊n/5⌋` backward edges.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AlmostDagSampler {
    nodes: Bounds,
    dag_edges: Bounds,
}

impl AlmostDagSampler {
    /// Creates the sampler.
    #[must_use]
    pub const fn new(nodes: Bounds, dag_edges: Bounds) -> Self {
        Self { nodes, dag_edges }
    }
}

impl ShapeSampler for AlmostDagSampler {
    fn sample_shape(&self, rng: &mut dyn RngCore) -> Result<Shape> {
        let node_count = self.nodes.sample(rng);
        let cap = max_forward_edges(node_count);
        let dag_edges = self.dag_edges.sample_capped(rng, cap);
        let additional = draw_clamped(rng, 1, (node_count / 5).max(1).min(cap));
        AlmostDag::new(node_count, dag_edges, additional).map(Shape::from)
    }
}

/// Degree-skewed graphs with every parameter drawn from its own range.
///
/// `m` is capped at `n·(n−1)` and the heavy count at `n`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DegreeSkewedSampler {
    nodes: Bounds,
    edges: Bounds,
    heavy_nodes: Bounds,
    heavy_proportion: Bounds,
}

impl DegreeSkewedSampler {
    /// Creates the sampler.
    #[must_use]
    pub const fn new(
        nodes: Bounds,
        edges: Bounds,
        heavy_nodes: Bounds,
        heavy_proportion: Bounds,
    ) -> Self {
        Self {
            nodes,
            edges,
            heavy_nodes,
            heavy_proportion,
        }
    }
}

impl ShapeSampler for DegreeSkewedSampler {
    fn sample_shape(&self, rng: &mut dyn RngCore) -> Result<Shape> {
        let node_count = self.nodes.sample(rng);
        let edge_count = self.edges.sample_capped(rng, max_directed_edges(node_count));
        let heavy_nodes = self.heavy_nodes.sample_capped(rng, node_count);
        let heavy_proportion = self.heavy_proportion.sample(rng);
        DegreeSkewedGraph::new(node_count, edge_count, heavy_nodes, heavy_proportion)
            .map(Shape::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{SeedableRng, rngs::SmallRng};
    use rstest::rstest;

    use crate::graph::{Construction, GraphClass};

    fn bounds(min: usize, max: usize) -> Bounds {
        Bounds::new("test bound", min, max).expect("ordered")
    }

    fn draw(sampler: &dyn ShapeSampler, seed: u64, rounds: usize) -> Vec<Shape> {
        let mut rng = SmallRng::seed_from_u64(seed);
        (0..rounds)
            .map(|_| sampler.sample_shape(&mut rng).expect("feasible"))
            .collect()
    }

    #[rstest]
    #[case(bounds(30, 200), bounds(20, 1_500))]
    #[case(bounds(2, 5), bounds(0, 100))]
    fn uniform_respects_bounds_and_cap(#[case] nodes: Bounds, #[case] edges: Bounds) {
        for shape in draw(&UniformSampler::new(nodes, edges), 1, 200) {
            let n = shape.node_count();
            assert!((nodes.min()..=nodes.max()).contains(&n));
            assert!(shape.edge_count() <= edges.max().min(n * (n - 1)));
            assert!(shape.edge_count() >= edges.min().min(n * (n - 1)));
        }
    }

    #[test]
    fn tiny_spans_half_the_vertices_to_complete() {
        for shape in draw(&TinyUniformSampler::new(bounds(4, 19)), 2, 300) {
            let n = shape.node_count();
            assert!((n / 2..=n * (n - 1)).contains(&shape.edge_count()));
        }
    }

    #[test]
    fn sparse_stays_between_n_and_the_multiplier() {
        let multiplier = RatioBounds::new("multiplier", 1.5, 3.0).expect("ordered");
        for shape in draw(&SparseUniformSampler::new(bounds(30, 200), multiplier), 3, 300) {
            let n = shape.node_count();
            assert!((n..=3 * n).contains(&shape.edge_count()));
        }
    }

    #[test]
    fn dag_caps_at_half_the_pairs() {
        for shape in draw(&DagSampler::new(bounds(2, 8), bounds(0, 1_500)), 4, 200) {
            assert_eq!(shape.class(), GraphClass::Dag);
            assert!(shape.edge_count() <= max_forward_edges(shape.node_count()));
        }
    }

    #[test]
    fn almost_dag_adds_at_most_a_fifth() {
        let sampler = AlmostDagSampler::new(bounds(30, 200), bounds(20, 1_500));
        for shape in draw(&sampler, 5, 200) {
            let graph = match shape {
                Shape::AlmostDag(graph) => graph,
                other => panic!("expected an almost-DAG, got {}", other.class()),
            };
            let additional = graph.additional_edges();
            assert!((1..=graph.node_count() / 5).contains(&additional));
        }
    }

    #[test]
    fn degree_skewed_caps_heavy_vertices() {
        let sampler = DegreeSkewedSampler::new(
            bounds(10, 20),
            bounds(10, 60),
            bounds(5, 50),
            bounds(2, 8),
        );
        for shape in draw(&sampler, 6, 100) {
            let graph = match shape {
                Shape::DegreeSkewed(graph) => graph,
                other => panic!("expected a degree-skewed graph, got {}", other.class()),
            };
            assert!(graph.heavy_nodes() <= graph.node_count());
            assert!((2..=8).contains(&graph.heavy_proportion()));
        }
    }
}
