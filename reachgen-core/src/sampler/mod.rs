//! Size samplers: draw shape parameters from bounds, then build.
//!
//! A [`ShapeSampler`] turns caller-supplied [`Bounds`] into one concrete
//! [`Shape`]. [`GraphGenerator`] pairs a sampler with
//! [`Graph::generate_edges`] so a batch of test cases is a loop over one
//! generator and one random stream.

mod bounds;
mod random;
mod structured;

use rand::{Rng, RngCore, SeedableRng};
use tracing::{debug, instrument};

use crate::{
    edge::Edge,
    error::Result,
    graph::{Graph, Shape},
};

pub use self::{
    bounds::{Bounds, RatioBounds},
    random::{
        AlmostDagSampler, DagSampler, DegreeSkewedSampler, SparseUniformSampler,
        TinyUniformSampler, UniformSampler,
    },
    structured::{
        CliqueChainSampler, CliquesCollectionSampler, LayeredSampler, PathsCollectionSampler,
    },
};

/// Draws the parameters of one construction.
///
/// The generator is taken as a trait object so heterogeneous samplers can
/// share a collection.
pub trait ShapeSampler {
    /// Draws parameters and validates them into a [`Shape`].
    ///
    /// # Errors
    /// Returns [`crate::GraphError`] when the drawn parameters are
    /// infeasible for the construction.
    fn sample_shape(&self, rng: &mut dyn RngCore) -> Result<Shape>;
}

impl<S> ShapeSampler for Box<S>
where
    S: ShapeSampler + ?Sized,
{
    fn sample_shape(&self, rng: &mut dyn RngCore) -> Result<Shape> {
        (**self).sample_shape(rng)
    }
}

impl<S> ShapeSampler for &S
where
    S: ShapeSampler + ?Sized,
{
    fn sample_shape(&self, rng: &mut dyn RngCore) -> Result<Shape> {
        (**self).sample_shape(rng)
    }
}

/// Samples a fresh shape per call and generates its relabeled edges.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use reachgen_core::{Bounds, DagSampler, GraphGenerator};
///
/// let generator = GraphGenerator::new(DagSampler::new(
///     Bounds::new("node count", 10, 20)?,
///     Bounds::new("edge count", 5, 30)?,
/// ));
/// let mut rng = SmallRng::seed_from_u64(123);
/// let edges = generator.generate_edges(&mut rng)?;
/// assert!((5..=30).contains(&edges.len()));
/// # Ok::<(), reachgen_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct GraphGenerator<S> {
    sampler: S,
}

impl<S> GraphGenerator<S>
where
    S: ShapeSampler,
{
    /// Wraps `sampler`.
    #[must_use]
    pub const fn new(sampler: S) -> Self {
        Self { sampler }
    }

    /// Returns the wrapped sampler.
    #[must_use]
    pub const fn sampler(&self) -> &S {
        &self.sampler
    }

    /// Draws an unseeded [`Graph`] from the sampler.
    ///
    /// # Errors
    /// Propagates the sampler's validation failures.
    pub fn sample_graph<R>(&self, rng: &mut R) -> Result<Graph>
    where
        R: Rng,
    {
        Ok(Graph::new(self.sampler.sample_shape(rng)?))
    }

    /// Draws a graph and returns its relabeled edges.
    ///
    /// Parameter draws and edge construction share `rng`.
    ///
    /// # Errors
    /// Propagates sampler and construction failures.
    #[instrument(name = "generator.generate_edges", skip_all)]
    pub fn generate_edges<R>(&self, rng: &mut R) -> Result<Vec<Edge>>
    where
        R: Rng + SeedableRng,
    {
        let graph = self.sample_graph(rng)?;
        debug!(
            class = %graph.class(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "shape sampled"
        );
        graph.generate_edges(rng, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::rngs::SmallRng;

    use crate::{graph::GraphClass, test_utils::assert_graph};

    fn bounds(min: usize, max: usize) -> Bounds {
        Bounds::new("test bound", min, max).expect("ordered")
    }

    #[test]
    fn generator_output_matches_the_sampled_shape() {
        let generator = GraphGenerator::new(UniformSampler::new(bounds(5, 12), bounds(0, 40)));
        let mut shapes_rng = SmallRng::seed_from_u64(4);
        let mut edges_rng = SmallRng::seed_from_u64(4);
        for _ in 0..50 {
            let graph = generator.sample_graph(&mut shapes_rng).expect("feasible");
            let node_count = graph.node_count();
            let expected = graph.edge_count();
            let edges = graph.generate_edges(&mut shapes_rng, true).expect("build");
            assert_eq!(edges, generator.generate_edges(&mut edges_rng).expect("build"));
            assert_graph(&edges, node_count, expected);
        }
    }

    #[test]
    fn boxed_samplers_share_a_collection() {
        let samplers: Vec<Box<dyn ShapeSampler>> = vec![
            Box::new(DagSampler::new(bounds(6, 9), bounds(3, 10))),
            Box::new(PathsCollectionSampler::new(bounds(2, 4), bounds(3, 5))),
        ];
        let mut rng = SmallRng::seed_from_u64(9);
        let classes: Vec<_> = samplers
            .into_iter()
            .map(GraphGenerator::new)
            .map(|generator| generator.sample_graph(&mut rng).expect("feasible").class())
            .collect();
        assert_eq!(classes, [GraphClass::Dag, GraphClass::PathsCollection]);
    }
}
