//! Support library for the reachgen CLI binary.
//!
//! Hosts the test harness around the graph generators: the on-disk case
//! layout, suite catalogues, the executable runners and the timing cache.
//! The CLI module is re-exported so doctests and integration tests can
//! exercise the command pipeline without forking a subprocess.

pub mod algorithms;
pub mod cache;
pub mod cases;
pub mod cli;
pub mod error;
pub mod executable;
pub mod logging;
pub mod runner;
pub mod suites;

#[cfg(test)]
mod test_helpers;
