//! Edge generation benchmarks for every graph construction.
//!
//! Each workload is seeded, so every iteration rebuilds the same edge
//! list. A second group compares relabeled and plain generation on the
//! uniform class to isolate the permutation cost.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::SmallRng};

use reachgen_benches::{error::BenchSetupError, params::GenerationBenchParams, workloads};
use reachgen_core::{Graph, GraphClass};

/// Seed used for every benchmark graph.
const SEED: u64 = 42;

/// Workload sizes to benchmark.
const NODE_COUNTS: &[usize] = &[1_000, 10_000, 50_000];

fn generate_edges_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("generate_edges");
    group.sample_size(20);

    for class in GraphClass::all() {
        for &node_count in NODE_COUNTS {
            let graph = Graph::new(workloads::shape_for(class, node_count)?).with_seed(SEED);
            let params = GenerationBenchParams {
                class,
                node_count,
                relabel: false,
            };
            group.throughput(Throughput::Elements(graph.edge_count() as u64));
            group.bench_with_input(BenchmarkId::from_parameter(params), &graph, |b, graph| {
                let mut rng = SmallRng::seed_from_u64(SEED);
                b.iter(|| graph.generate_edges(&mut rng, false));
            });
        }
    }

    group.finish();
    Ok(())
}

fn relabel_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("relabel");
    group.sample_size(20);

    let node_count = 50_000;
    let graph =
        Graph::new(workloads::shape_for(GraphClass::Uniform, node_count)?).with_seed(SEED);
    for relabel in [false, true] {
        let params = GenerationBenchParams {
            class: GraphClass::Uniform,
            node_count,
            relabel,
        };
        group.bench_with_input(BenchmarkId::from_parameter(params), &relabel, |b, &relabel| {
            let mut rng = SmallRng::seed_from_u64(SEED);
            b.iter(|| graph.generate_edges(&mut rng, relabel));
        });
    }

    group.finish();
    Ok(())
}

fn generate_edges(c: &mut Criterion) {
    if let Err(err) = generate_edges_impl(c) {
        panic!("generate_edges benchmark setup failed: {err}");
    }
}

fn relabel(c: &mut Criterion) {
    if let Err(err) = relabel_impl(c) {
        panic!("relabel benchmark setup failed: {err}");
    }
}

criterion_group!(benches, generate_edges, relabel);
criterion_main!(benches);
