//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of using
//! `.expect()`.

use reachgen_core::GraphError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// A shape rejected its parameters or failed to build.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// The workload is too small for the representative shapes.
    #[error("workloads need at least {min} nodes, got {node_count}")]
    TooSmall {
        /// Requested vertex count.
        node_count: usize,
        /// Smallest supported vertex count.
        min: usize,
    },
}
