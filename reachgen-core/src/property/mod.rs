//! Property-based tests over every graph construction.
//!
//! Strategies draw feasible shape parameters for each [`GraphClass`]
//! together with a seed; the runners check the edge-set contract,
//! seeded reproducibility, and that relabeling is a vertex permutation.
//!
//! [`GraphClass`]: crate::GraphClass

mod strategies;
