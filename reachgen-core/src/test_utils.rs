//! Shared test utilities for `reachgen-core`.

use proptest::test_runner::Config as ProptestConfig;
use reachgen_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::{
    edge::Edge,
    invariants::{check_graph, check_simple},
};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `REACHGEN_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Panics unless `edges` is a simple digraph on `node_count` vertices.
pub(crate) fn assert_simple(edges: &[Edge], node_count: usize) {
    if let Err(violation) = check_simple(edges, node_count) {
        panic!("edge set is not simple: {violation}");
    }
}

/// Panics unless `edges` is simple and holds exactly `expected` edges.
pub(crate) fn assert_graph(edges: &[Edge], node_count: usize, expected: usize) {
    if let Err(violation) = check_graph(edges, node_count, expected) {
        panic!("edge set violates its contract: {violation}");
    }
}
