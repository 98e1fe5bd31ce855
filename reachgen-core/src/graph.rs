//! Graph descriptor and the closed set of constructions it dispatches to.

use std::fmt;

use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

use crate::{
    edge::{Edge, relabel_edges},
    error::Result,
    shapes::{
        AlmostDag, CliqueChain, CliquesCollection, DegreeSkewedGraph, LayeredGraph,
        PathsCollection, RandomDag, UniformGraph,
    },
};

/// Names the construction behind a [`Shape`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphClass {
    /// Uniformly random simple digraph.
    Uniform,
    /// Random DAG whose index order is topological.
    Dag,
    /// Random DAG plus a few backward edges.
    AlmostDag,
    /// Forward cliques joined by two opposing representative chains.
    CliqueChain,
    /// Grid with horizontal paths and sampled cross-row edges.
    Layered,
    /// Random digraph whose endpoints favour a set of heavy vertices.
    DegreeSkewed,
    /// Adversarial collection of paths linked backwards.
    PathsCollection,
    /// Adversarial main clique with a chain of anchor cliques.
    CliquesCollection,
}

impl GraphClass {
    /// Returns every class in declaration order.
    #[must_use]
    pub const fn all() -> [Self; 8] {
        [
            Self::Uniform,
            Self::Dag,
            Self::AlmostDag,
            Self::CliqueChain,
            Self::Layered,
            Self::DegreeSkewed,
            Self::PathsCollection,
            Self::CliquesCollection,
        ]
    }

    /// Stable snake-case name of the class.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::Dag => "dag",
            Self::AlmostDag => "almost_dag",
            Self::CliqueChain => "clique_chain",
            Self::Layered => "layered",
            Self::DegreeSkewed => "degree_skewed",
            Self::PathsCollection => "paths_collection",
            Self::CliquesCollection => "cliques_collection",
        }
    }
}

impl fmt::Display for GraphClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Edge-production contract implemented once per graph class.
///
/// Implementations validate their parameters on construction, report the
/// exact vertex and edge counts they will produce, and build the edges
/// in the index space `0..node_count()` without relabeling.
pub trait Construction {
    /// Class implemented by this construction.
    const CLASS: GraphClass;

    /// Number of vertices the produced graph spans.
    fn node_count(&self) -> usize;

    /// Exact number of edges [`Construction::build_edges`] returns.
    fn edge_count(&self) -> usize;

    /// Builds the edge sequence, drawing any randomness from `rng`.
    ///
    /// # Errors
    /// Returns [`crate::GraphError`] when a postcondition of the
    /// construction fails.
    fn build_edges<R>(&self, rng: &mut R) -> Result<Vec<Edge>>
    where
        R: Rng + ?Sized;
}

/// Closed set of graph constructions.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Shape {
    /// See [`UniformGraph`].
    Uniform(UniformGraph),
    /// See [`RandomDag`].
    Dag(RandomDag),
    /// See [`AlmostDag`].
    AlmostDag(AlmostDag),
    /// See [`CliqueChain`].
    CliqueChain(CliqueChain),
    /// See [`LayeredGraph`].
    Layered(LayeredGraph),
    /// See [`DegreeSkewedGraph`].
    DegreeSkewed(DegreeSkewedGraph),
    /// See [`PathsCollection`].
    PathsCollection(PathsCollection),
    /// See [`CliquesCollection`].
    CliquesCollection(CliquesCollection),
}

macro_rules! dispatch {
    ($shape:expr, $inner:ident => $body:expr) => {
        match $shape {
            Shape::Uniform($inner) => $body,
            Shape::Dag($inner) => $body,
            Shape::AlmostDag($inner) => $body,
            Shape::CliqueChain($inner) => $body,
            Shape::Layered($inner) => $body,
            Shape::DegreeSkewed($inner) => $body,
            Shape::PathsCollection($inner) => $body,
            Shape::CliquesCollection($inner) => $body,
        }
    };
}

macro_rules! impl_from_construction {
    ($($variant:ident => $ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Shape {
                fn from(construction: $ty) -> Self {
                    Self::$variant(construction)
                }
            }
        )+
    };
}

impl_from_construction! {
    Uniform => UniformGraph,
    Dag => RandomDag,
    AlmostDag => AlmostDag,
    CliqueChain => CliqueChain,
    Layered => LayeredGraph,
    DegreeSkewed => DegreeSkewedGraph,
    PathsCollection => PathsCollection,
    CliquesCollection => CliquesCollection,
}

impl Shape {
    /// Class of the wrapped construction.
    #[must_use]
    pub const fn class(&self) -> GraphClass {
        match self {
            Self::Uniform(_) => UniformGraph::CLASS,
            Self::Dag(_) => RandomDag::CLASS,
            Self::AlmostDag(_) => AlmostDag::CLASS,
            Self::CliqueChain(_) => CliqueChain::CLASS,
            Self::Layered(_) => LayeredGraph::CLASS,
            Self::DegreeSkewed(_) => DegreeSkewedGraph::CLASS,
            Self::PathsCollection(_) => PathsCollection::CLASS,
            Self::CliquesCollection(_) => CliquesCollection::CLASS,
        }
    }

    /// Vertex count of the graph the construction produces.
    #[must_use]
    pub fn node_count(&self) -> usize {
        dispatch!(self, inner => inner.node_count())
    }

    /// Edge count of the graph the construction produces.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        dispatch!(self, inner => inner.edge_count())
    }

    /// Builds the unrelabeled edge sequence.
    ///
    /// # Errors
    /// Propagates the construction's postcondition failures.
    pub fn build_edges<R>(&self, rng: &mut R) -> Result<Vec<Edge>>
    where
        R: Rng + ?Sized,
    {
        dispatch!(self, inner => inner.build_edges(rng))
    }
}

/// A graph to generate: one [`Shape`] plus an optional seed.
///
/// Construction only records parameters; edges are produced on each call
/// to [`Graph::generate_edges`]. The one exception is
/// [`CliquesCollection`], which must build its edges up front to learn its
/// own size.
///
/// # Seeding
///
/// With a seed set, [`Graph::generate_edges`] reseeds the generator it is
/// given before building, making repeated calls identical. The reseed
/// replaces the caller's stream state. Two seeded graphs sharing one
/// generator stay independent only because each reseeds; unseeded
/// generation that follows continues from the last seeded state.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use reachgen_core::{Graph, GraphClass, shapes::PathsCollection};
///
/// let graph = Graph::new(PathsCollection::new(3, 4)?);
/// assert_eq!(graph.class(), GraphClass::PathsCollection);
/// assert_eq!((graph.node_count(), graph.edge_count()), (12, 12));
///
/// let edges = graph.generate_edges(&mut SmallRng::seed_from_u64(1), false)?;
/// assert_eq!(edges.len(), 12);
/// # Ok::<(), reachgen_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Graph {
    shape: Shape,
    seed: Option<u64>,
}

impl Graph {
    /// Wraps `shape` without a seed.
    #[must_use]
    pub fn new(shape: impl Into<Shape>) -> Self {
        Self {
            shape: shape.into(),
            seed: None,
        }
    }

    /// Sets the seed applied before every generation.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the configured seed.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the wrapped construction.
    #[must_use]
    pub const fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Class of the wrapped construction.
    #[must_use]
    pub const fn class(&self) -> GraphClass {
        self.shape.class()
    }

    /// Vertex count of the produced graph. For the adversarial
    /// constructions this is derived, not the requested target.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.shape.node_count()
    }

    /// Edge count of the produced graph. For the adversarial
    /// constructions this is derived, not the requested target.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.shape.edge_count()
    }

    /// Produces the graph's edges, optionally relabeling the vertices.
    ///
    /// Relabeling draws a fresh uniform permutation of `0..node_count()`
    /// from `rng` and applies it to every endpoint. It keeps the
    /// isomorphism class and edge count but hides the index order the
    /// construction relied on, such as a DAG's topological order.
    ///
    /// # Errors
    /// Propagates the construction's postcondition failures.
    #[instrument(
        name = "graph.generate_edges",
        skip(self, rng),
        fields(
            class = %self.class(),
            nodes = self.node_count(),
            edges = self.edge_count(),
            seeded = self.seed.is_some(),
        ),
    )]
    pub fn generate_edges<R>(&self, rng: &mut R, relabel: bool) -> Result<Vec<Edge>>
    where
        R: Rng + SeedableRng,
    {
        if let Some(seed) = self.seed {
            *rng = R::seed_from_u64(seed);
        }

        let mut edges = self.shape.build_edges(rng)?;
        if relabel {
            relabel_edges(&mut edges, self.node_count(), rng)?;
        }
        debug!(produced = edges.len(), "edges generated");
        Ok(edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::{BTreeMap, BTreeSet};

    use rand::rngs::SmallRng;
    use rstest::rstest;

    use crate::{shapes::PathsCollection, test_utils::assert_simple};

    fn degree_multisets(edges: &[Edge]) -> (Vec<usize>, Vec<usize>) {
        let mut out_degrees = BTreeMap::<usize, usize>::new();
        let mut in_degrees = BTreeMap::<usize, usize>::new();
        for edge in edges {
            *out_degrees.entry(edge.source()).or_default() += 1;
            *in_degrees.entry(edge.target()).or_default() += 1;
        }
        let mut outs: Vec<_> = out_degrees.into_values().collect();
        let mut ins: Vec<_> = in_degrees.into_values().collect();
        outs.sort_unstable();
        ins.sort_unstable();
        (outs, ins)
    }

    #[test]
    fn class_names_are_unique() {
        let names: BTreeSet<_> = GraphClass::all().iter().map(|class| class.as_str()).collect();
        assert_eq!(names.len(), GraphClass::all().len());
    }

    #[rstest]
    #[case(0)]
    #[case(9)]
    #[case(1234)]
    fn relabeling_is_a_bijection(#[case] rng_seed: u64) {
        let graph = Graph::new(PathsCollection::new(3, 4).expect("valid shape"));
        let mut rng = SmallRng::seed_from_u64(rng_seed);
        let plain = graph.generate_edges(&mut rng, false).expect("build");
        let relabeled = graph.generate_edges(&mut rng, true).expect("build");

        assert_simple(&relabeled, graph.node_count());
        let vertices = |edges: &[Edge]| -> BTreeSet<usize> {
            edges
                .iter()
                .flat_map(|edge| [edge.source(), edge.target()])
                .collect()
        };
        assert_eq!(vertices(&plain), vertices(&relabeled));
        assert_eq!(vertices(&relabeled), (0..12).collect());
        assert_eq!(degree_multisets(&plain), degree_multisets(&relabeled));
    }

    #[test]
    fn seed_overrides_the_incoming_stream() {
        let graph = Graph::new(crate::shapes::UniformGraph::new(8, 20).expect("valid shape"))
            .with_seed(99);
        let first = graph
            .generate_edges(&mut SmallRng::seed_from_u64(1), true)
            .expect("build");
        let second = graph
            .generate_edges(&mut SmallRng::seed_from_u64(2), true)
            .expect("build");
        assert_eq!(first, second);
    }

    #[test]
    fn unseeded_generation_follows_the_incoming_stream() {
        let graph = Graph::new(crate::shapes::UniformGraph::new(8, 20).expect("valid shape"));
        let first = graph
            .generate_edges(&mut SmallRng::seed_from_u64(5), true)
            .expect("build");
        let again = graph
            .generate_edges(&mut SmallRng::seed_from_u64(5), true)
            .expect("build");
        assert_eq!(first, again);
        assert_eq!(graph.seed(), None);
    }
}
