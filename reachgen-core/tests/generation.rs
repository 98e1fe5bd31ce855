//! Tests for the public generation API.

use rand::{SeedableRng, rngs::SmallRng};
use reachgen_core::{
    Bounds, DagSampler, Graph, GraphClass, GraphError, GraphErrorCode, GraphGenerator, Shape,
    invariants::{check_graph, is_acyclic, topological_order},
    shapes::{
        AlmostDag, CliqueChain, CliquesCollection, DegreeSkewedGraph, LayeredGraph,
        PathsCollection, RandomDag, UniformGraph,
    },
};
use rstest::{fixture, rstest};
use tracing_subscriber::layer::SubscriberExt;

use reachgen_test_support::tracing::RecordingLayer;

#[fixture]
fn rng() -> SmallRng {
    SmallRng::seed_from_u64(2024)
}

fn shape_of(class: GraphClass) -> Shape {
    let shape = match class {
        GraphClass::Uniform => UniformGraph::new(30, 120).map(Shape::from),
        GraphClass::Dag => RandomDag::new(30, 120).map(Shape::from),
        GraphClass::AlmostDag => AlmostDag::new(30, 100, 20).map(Shape::from),
        GraphClass::CliqueChain => CliqueChain::new(31, 5).map(Shape::from),
        GraphClass::Layered => LayeredGraph::new(4, 6, 30, 10).map(Shape::from),
        GraphClass::DegreeSkewed => DegreeSkewedGraph::new(40, 150, 3, 8).map(Shape::from),
        GraphClass::PathsCollection => PathsCollection::new(5, 6).map(Shape::from),
        GraphClass::CliquesCollection => CliquesCollection::new(60, 400).map(Shape::from),
    };
    match shape {
        Ok(shape) => shape,
        Err(err) => panic!("{class} fixture must be feasible: {err}"),
    }
}

#[rstest]
fn every_class_honours_its_edge_count(mut rng: SmallRng) {
    for class in GraphClass::all() {
        let graph = Graph::new(shape_of(class));
        assert_eq!(graph.class(), class);
        for relabel in [false, true] {
            let edges = graph
                .generate_edges(&mut rng, relabel)
                .unwrap_or_else(|err| panic!("{class} must generate: {err}"));
            if let Err(violation) = check_graph(&edges, graph.node_count(), graph.edge_count()) {
                panic!("{class} (relabel {relabel}) violates the edge contract: {violation}");
            }
        }
    }
}

#[rstest]
#[case::dag(GraphClass::Dag)]
#[case::paths(GraphClass::PathsCollection)]
fn acyclic_classes_stay_acyclic_after_relabeling(mut rng: SmallRng, #[case] class: GraphClass) {
    let graph = Graph::new(shape_of(class));
    let edges = graph.generate_edges(&mut rng, true).expect("generation");
    assert!(is_acyclic(&edges, graph.node_count()));
    let order = topological_order(&edges, graph.node_count()).expect("acyclic");
    assert_eq!(order.len(), graph.node_count());
}

#[test]
fn seeded_graphs_reproduce_across_generators() {
    let graph = Graph::new(shape_of(GraphClass::DegreeSkewed)).with_seed(99);
    let first = graph
        .generate_edges(&mut SmallRng::seed_from_u64(1), true)
        .expect("generation");
    let second = graph
        .generate_edges(&mut SmallRng::seed_from_u64(2), true)
        .expect("generation");
    assert_eq!(first, second);
    assert_eq!(graph.seed(), Some(99));
}

#[rstest]
fn generator_draws_within_bounds(mut rng: SmallRng) {
    let generator = GraphGenerator::new(DagSampler::new(
        Bounds::new("node count", 10, 20).expect("bounds"),
        Bounds::new("edge count", 5, 30).expect("bounds"),
    ));
    for _ in 0..50 {
        let graph = generator.sample_graph(&mut rng).expect("sample");
        assert!((10..=20).contains(&graph.node_count()));
        assert!((5..=30).contains(&graph.edge_count()));
        assert_eq!(graph.seed(), None);
        let edges = graph.generate_edges(&mut rng, true).expect("generation");
        assert!(is_acyclic(&edges, graph.node_count()));
    }
}

#[rstest]
#[case(UniformGraph::new(3, 7).map(Shape::from), GraphErrorCode::TooManyEdges)]
#[case(RandomDag::new(4, 7).map(Shape::from), GraphErrorCode::TooManyEdges)]
#[case(CliqueChain::new(4, 5).map(Shape::from), GraphErrorCode::InvalidCliqueSize)]
#[case(LayeredGraph::new(0, 4, 0, 0).map(Shape::from), GraphErrorCode::EmptyGrid)]
#[case(
    DegreeSkewedGraph::new(5, 4, 6, 2).map(Shape::from),
    GraphErrorCode::TooManyHeavyNodes
)]
#[case(
    DegreeSkewedGraph::new(5, 4, 2, 0).map(Shape::from),
    GraphErrorCode::ZeroHeavyWeight
)]
#[case(PathsCollection::new(0, 3).map(Shape::from), GraphErrorCode::EmptyPathCollection)]
#[case(
    CliquesCollection::new(1, 1).map(Shape::from),
    GraphErrorCode::EmptyCliqueCollection
)]
fn infeasible_shapes_report_stable_codes(
    #[case] result: Result<Shape, GraphError>,
    #[case] expected: GraphErrorCode,
) {
    let err = result.expect_err("shape must be rejected");
    assert_eq!(err.code(), expected);
    assert!(err.code().as_str().starts_with("GRAPH_"));
}

#[test]
fn invalid_bounds_name_the_parameter() {
    let err = Bounds::new("edge count", 9, 3).expect_err("min exceeds max");
    assert_eq!(err.code(), GraphErrorCode::InvalidBounds);
    assert!(err.to_string().contains("edge count"), "{err}");
}

#[rstest]
fn generation_is_traced(mut rng: SmallRng) {
    let layer = RecordingLayer::default();
    let graph = Graph::new(shape_of(GraphClass::CliqueChain)).with_seed(3);
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let edges = tracing::subscriber::with_default(subscriber, || {
        graph.generate_edges(&mut rng, true)
    })
    .expect("generation");

    let span = layer
        .span("graph.generate_edges")
        .expect("generation span must close");
    assert_eq!(span.field("class"), Some("clique_chain"));
    assert_eq!(span.field("nodes"), Some("30"));
    assert_eq!(span.field("seeded"), Some("true"));

    let produced = edges.len().to_string();
    let events = layer.events_with_message("edges generated");
    assert_eq!(events.len(), 1);
    assert_eq!(
        events.first().and_then(|event| event.field("produced")),
        Some(produced.as_str())
    );
}
