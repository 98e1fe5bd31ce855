//! Samplers for the constructions with planted structure.

use rand::{Rng, RngCore};

use crate::{
    error::Result,
    graph::Shape,
    shapes::{CliqueChain, CliquesCollection, LayeredGraph, PathsCollection},
};

use super::{
    ShapeSampler,
    bounds::{Bounds, draw_clamped},
};

/// Clique chains with `clique_size` drawn from
/// `[max(2, min), min(⌊n/2⌋, max)]`, so there are always two or more groups.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CliqueChainSampler {
    nodes: Bounds,
    clique_size: Bounds,
}

impl CliqueChainSampler {
    /// Creates the sampler.
    #[must_use]
    pub const fn new(nodes: Bounds, clique_size: Bounds) -> Self {
        Self { nodes, clique_size }
    }
}

impl ShapeSampler for CliqueChainSampler {
    fn sample_shape(&self, rng: &mut dyn RngCore) -> Result<Shape> {
        let node_count = self.nodes.sample(rng);
        let clique_size = draw_clamped(
            rng,
            self.clique_size.min().max(2),
            self.clique_size.max().min(node_count / 2),
        );
        CliqueChain::new(node_count, clique_size).map(Shape::from)
    }
}

/// Layered graphs on a grid of roughly `n` vertices.
///
/// The shorter side is drawn from `[2, ⌊√n⌋]` and the longer one is
/// `⌊n / short⌋`; a fair coin decides which is the row count. Each
/// directional edge count is drawn from its range and then capped at the
/// grid's per-direction maximum.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LayeredSampler {
    nodes: Bounds,
    downward_edges: Bounds,
    upward_edges: Bounds,
}

impl LayeredSampler {
    /// Creates the sampler.
    #[must_use]
    pub const fn new(nodes: Bounds, downward_edges: Bounds, upward_edges: Bounds) -> Self {
        Self {
            nodes,
            downward_edges,
            upward_edges,
        }
    }
}

impl ShapeSampler for LayeredSampler {
    fn sample_shape(&self, rng: &mut dyn RngCore) -> Result<Shape> {
        let node_count = self.nodes.sample(rng);
        let longest_short_side = node_count.isqrt();
        let short_side = Bounds::new("grid short side", 2, longest_short_side)?.sample(rng);
        let long_side = node_count / short_side;
        let (rows, columns) = if rng.gen_bool(0.5) {
            (long_side, short_side)
        } else {
            (short_side, long_side)
        };

        let max = LayeredGraph::max_edges_per_direction(rows, columns);
        let downward = self.downward_edges.sample(rng).min(max);
        let upward = self.upward_edges.sample(rng).min(max);
        LayeredGraph::new(rows, columns, downward, upward).map(Shape::from)
    }
}

/// Adversarial path collections with both dimensions drawn from bounds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PathsCollectionSampler {
    paths: Bounds,
    path_length: Bounds,
}

impl PathsCollectionSampler {
    /// Creates the sampler.
    #[must_use]
    pub const fn new(paths: Bounds, path_length: Bounds) -> Self {
        Self { paths, path_length }
    }
}

impl ShapeSampler for PathsCollectionSampler {
    fn sample_shape(&self, rng: &mut dyn RngCore) -> Result<Shape> {
        let paths = self.paths.sample(rng);
        let path_length = self.path_length.sample(rng);
        PathsCollection::new(paths, path_length).map(Shape::from)
    }
}

/// Adversarial clique collections steered by sampled target sizes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CliquesCollectionSampler {
    nodes: Bounds,
    edges: Bounds,
}

impl CliquesCollectionSampler {
    /// Creates the sampler.
    #[must_use]
    pub const fn new(nodes: Bounds, edges: Bounds) -> Self {
        Self { nodes, edges }
    }
}

impl ShapeSampler for CliquesCollectionSampler {
    fn sample_shape(&self, rng: &mut dyn RngCore) -> Result<Shape> {
        let target_nodes = self.nodes.sample(rng);
        let target_edges = self.edges.sample(rng);
        CliquesCollection::new(target_nodes, target_edges).map(Shape::from)
    }
}
