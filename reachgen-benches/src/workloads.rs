//! Representative shapes for each construction, sized by vertex count.
//!
//! Random classes target an average out-degree of four; the structured
//! classes pick their natural parameters so that their vertex count
//! lands near the requested one.

use reachgen_core::{
    GraphClass, Shape,
    shapes::{
        AlmostDag, CliqueChain, CliquesCollection, DegreeSkewedGraph, LayeredGraph,
        PathsCollection, RandomDag, UniformGraph,
    },
};

use crate::error::BenchSetupError;

/// Smallest vertex count every workload supports.
pub const MIN_NODES: usize = 100;

const AVERAGE_DEGREE: usize = 4;
const CLIQUE_SIZE: usize = 8;
const LAYER_ROWS: usize = 10;
const HEAVY_PROPORTION: usize = 50;

/// Builds the benchmark shape of `class` over roughly `node_count`
/// vertices.
///
/// # Errors
/// Returns [`BenchSetupError::TooSmall`] below [`MIN_NODES`] and
/// [`BenchSetupError::Graph`] if a constructor rejects its parameters.
pub fn shape_for(class: GraphClass, node_count: usize) -> Result<Shape, BenchSetupError> {
    if node_count < MIN_NODES {
        return Err(BenchSetupError::TooSmall {
            node_count,
            min: MIN_NODES,
        });
    }
    let edge_count = node_count.saturating_mul(AVERAGE_DEGREE);
    let tenth = share(node_count, 10);
    let shape = match class {
        GraphClass::Uniform => UniformGraph::new(node_count, edge_count)?.into(),
        GraphClass::Dag => RandomDag::new(node_count, edge_count)?.into(),
        GraphClass::AlmostDag => AlmostDag::new(node_count, edge_count, tenth)?.into(),
        GraphClass::CliqueChain => CliqueChain::new(node_count, CLIQUE_SIZE)?.into(),
        GraphClass::Layered => LayeredGraph::new(
            LAYER_ROWS,
            share(node_count, LAYER_ROWS),
            node_count.saturating_mul(2),
            tenth,
        )?
        .into(),
        GraphClass::DegreeSkewed => DegreeSkewedGraph::new(
            node_count,
            edge_count,
            share(node_count, 100).max(1),
            HEAVY_PROPORTION,
        )?
        .into(),
        GraphClass::PathsCollection => {
            let paths = node_count.isqrt();
            PathsCollection::new(paths, share(node_count, paths))?.into()
        }
        GraphClass::CliquesCollection => CliquesCollection::new(node_count, edge_count)?.into(),
    };
    Ok(shape)
}

fn share(total: usize, parts: usize) -> usize {
    total.checked_div(parts).unwrap_or(0)
}
