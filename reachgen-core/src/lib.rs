//! Reachgen core library.
//!
//! Builds synthetic directed graphs with controlled structure for driving
//! correctness and performance tests of reachability algorithms.
//!
//! # Layers
//!
//! - [`Edge`] and the sampling primitives: distinct-pair draws, canonical
//!   sort-then-shuffle presentation, and vertex relabeling.
//! - [`Graph`]: a seeded descriptor around one [`Shape`], the closed set
//!   of constructions in [`shapes`].
//! - [`GraphGenerator`]: composes a [`ShapeSampler`] that draws shape
//!   parameters from [`Bounds`] with the exact construction.
//!
//! # Randomness
//!
//! Every operation takes the generator explicitly. A [`Graph`] carrying a
//! seed reseeds the generator it is handed before building, so the same
//! seed always yields the same edge sequence, relabeling included. The
//! reseed overwrites the caller's stream: generation that follows on the
//! same generator continues from the seeded state.
//!
//! ```
//! use rand::{SeedableRng, rngs::SmallRng};
//! use reachgen_core::{Graph, shapes::RandomDag};
//!
//! let graph = Graph::new(RandomDag::new(10, 20)?).with_seed(7);
//! let mut rng = SmallRng::seed_from_u64(0);
//! let first = graph.generate_edges(&mut rng, true)?;
//! let second = graph.generate_edges(&mut rng, true)?;
//! assert_eq!(first, second);
//! assert_eq!(first.len(), 20);
//! # Ok::<(), reachgen_core::GraphError>(())
//! ```

mod edge;
mod error;
mod graph;
pub mod invariants;
mod sampler;
mod sampling;
pub mod shapes;

#[cfg(test)]
mod property;
#[cfg(test)]
mod test_utils;

pub use crate::{
    edge::Edge,
    error::{GraphError, GraphErrorCode, Result},
    graph::{Construction, Graph, GraphClass, Shape},
    sampler::{
        AlmostDagSampler, Bounds, CliqueChainSampler, CliquesCollectionSampler, DagSampler,
        DegreeSkewedSampler, GraphGenerator, LayeredSampler, PathsCollectionSampler, RatioBounds,
        ShapeSampler, SparseUniformSampler, TinyUniformSampler, UniformSampler,
    },
    sampling::{max_directed_edges, max_forward_edges, random_distinct_pair},
};
