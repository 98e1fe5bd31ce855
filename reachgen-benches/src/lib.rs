//! Benchmark support crate for reachgen.
//!
//! Provides representative shapes and parameter types used by Criterion
//! benchmarks of edge generation for every graph construction.

pub mod error;
pub mod params;
pub mod workloads;
