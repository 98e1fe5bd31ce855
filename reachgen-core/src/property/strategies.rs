//! Strategies producing feasible shapes for every construction.

use proptest::prelude::*;
use test_strategy::Arbitrary;

use crate::{
    graph::Shape,
    sampling::{max_directed_edges, max_forward_edges},
    shapes::{
        AlmostDag, CliqueChain, CliquesCollection, DegreeSkewedGraph, LayeredGraph,
        PathsCollection, RandomDag, UniformGraph,
    },
};

const MAX_NODES: usize = 40;

/// Construction drawn for a fixture.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum ShapeKind {
    #[weight(2)]
    Uniform,
    #[weight(2)]
    Dag,
    AlmostDag,
    CliqueChain,
    Layered,
    DegreeSkewed,
    PathsCollection,
    CliquesCollection,
}

/// A feasible shape plus the seed it is generated under.
#[derive(Clone, Debug)]
pub(super) struct ShapeFixture {
    pub(super) kind: ShapeKind,
    pub(super) shape: Shape,
    pub(super) seed: u64,
}

pub(super) fn shape_fixture_strategy() -> impl Strategy<Value = ShapeFixture> {
    (any::<ShapeKind>(), any::<u64>()).prop_flat_map(|(kind, seed)| {
        shape_strategy(kind).prop_map(move |shape| ShapeFixture { kind, shape, seed })
    })
}

fn shape_strategy(kind: ShapeKind) -> BoxedStrategy<Shape> {
    match kind {
        ShapeKind::Uniform => (2..=MAX_NODES)
            .prop_flat_map(|n| (Just(n), 0..=max_directed_edges(n)))
            .prop_filter_map("uniform shape must be feasible", |(n, m)| {
                UniformGraph::new(n, m).ok().map(Shape::from)
            })
            .boxed(),
        ShapeKind::Dag => (2..=MAX_NODES)
            .prop_flat_map(|n| (Just(n), 0..=max_forward_edges(n)))
            .prop_filter_map("DAG shape must be feasible", |(n, m)| {
                RandomDag::new(n, m).ok().map(Shape::from)
            })
            .boxed(),
        ShapeKind::AlmostDag => (2..=MAX_NODES)
            .prop_flat_map(|n| {
                let cap = max_forward_edges(n);
                (Just(n), 0..=cap, 0..=cap)
            })
            .prop_filter_map("almost-DAG shape must be feasible", |(n, dag, extra)| {
                AlmostDag::new(n, dag, extra).ok().map(Shape::from)
            })
            .boxed(),
        ShapeKind::CliqueChain => (1..=MAX_NODES)
            .prop_flat_map(|n| (Just(n), 1..=n))
            .prop_filter_map("clique chain must be feasible", |(n, k)| {
                CliqueChain::new(n, k).ok().map(Shape::from)
            })
            .boxed(),
        ShapeKind::Layered => (1_usize..=6, 1_usize..=6)
            .prop_flat_map(|(rows, columns)| {
                let cap = LayeredGraph::max_edges_per_direction(rows, columns);
                (Just(rows), Just(columns), 0..=cap, 0..=cap)
            })
            .prop_filter_map("layered shape must be feasible", |(r, c, down, up)| {
                LayeredGraph::new(r, c, down, up).ok().map(Shape::from)
            })
            .boxed(),
        ShapeKind::DegreeSkewed => (2..=MAX_NODES)
            .prop_flat_map(|n| (Just(n), 0..=max_directed_edges(n) / 4, 0..=n / 4, 1_usize..=4))
            .prop_filter_map(
                "degree-skewed shape must be feasible",
                |(n, m, heavy, proportion)| {
                    DegreeSkewedGraph::new(n, m, heavy, proportion)
                        .ok()
                        .map(Shape::from)
                },
            )
            .boxed(),
        ShapeKind::PathsCollection => (1_usize..=8, 1_usize..=8)
            .prop_filter_map("path collection must be feasible", |(paths, length)| {
                PathsCollection::new(paths, length).ok().map(Shape::from)
            })
            .boxed(),
        ShapeKind::CliquesCollection => (2_usize..=60, 1_usize..=400)
            .prop_filter_map("clique collection must be non-empty", |(n, m)| {
                CliquesCollection::new(n, m).ok().map(Shape::from)
            })
            .boxed(),
    }
}
