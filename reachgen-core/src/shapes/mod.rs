//! Concrete graph constructions.
//!
//! Each type validates its parameters in `new` and implements
//! [`Construction`](crate::Construction). The random constructions
//! (`UniformGraph` through `DegreeSkewedGraph`) shuffle their output so the
//! edge sequence carries no trace of discovery order. The two adversarial
//! constructions emit edges in construction order, because their worst-case
//! behaviour depends on that structure and not on presentation.

mod almost_dag;
mod clique_chain;
mod cliques_collection;
mod degree_skewed;
mod layered;
mod paths_collection;
mod random;

pub use self::{
    almost_dag::AlmostDag,
    clique_chain::CliqueChain,
    cliques_collection::CliquesCollection,
    degree_skewed::{DegreeSkewedGraph, OVERSAMPLING_FACTOR},
    layered::LayeredGraph,
    paths_collection::PathsCollection,
    random::{RandomDag, UniformGraph},
};
