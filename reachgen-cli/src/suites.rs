//! Correctness and performance suite catalogues and their generators.
//!
//! The correctness suite is a seeded batch of small sampled graphs, each
//! optionally paired with a ground-truth answer. The performance suite is
//! a fixed list of named large graphs, each timed with the algorithm
//! subset it is meant to stress.

use std::{
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use rand::{SeedableRng, rngs::SmallRng};
use reachgen_core::{
    AlmostDagSampler, Bounds, CliqueChainSampler, DagSampler, Graph, GraphError, GraphGenerator,
    LayeredSampler, RatioBounds, ShapeSampler, SparseUniformSampler, TinyUniformSampler,
    UniformSampler, invariants::check_graph, max_directed_edges, max_forward_edges,
    shapes::{
        AlmostDag, CliquesCollection, DegreeSkewedGraph, PathsCollection, RandomDag,
        UniformGraph,
    },
};
use tracing::{debug, info, instrument};

use crate::{
    algorithms::AlgorithmSubset,
    cases::{write_case_in, write_case_out},
    error::CliError,
    executable::Executable,
};

/// Default correctness suite location.
pub const CORRECTNESS_DIR: &str = "tests/correctness/test_cases";
/// Default performance suite location.
pub const PERFORMANCE_DIR: &str = "tests/performance/test_cases";
/// Seed of the correctness suite stream.
pub const CORRECTNESS_SEED: u64 = 123;

const MIN_NODES: usize = 30;
const MAX_NODES: usize = 200;
const MIN_EDGES: usize = 20;
const MAX_EDGES: usize = 1500;

/// A labelled group of correctness cases drawn from one sampler.
pub struct CorrectnessBatch {
    /// Short name used in logs.
    pub label: &'static str,
    /// Number of cases to draw.
    pub cases: usize,
    /// Sampler-backed generator for the group.
    pub generator: GraphGenerator<Box<dyn ShapeSampler>>,
}

impl CorrectnessBatch {
    fn new(label: &'static str, cases: usize, sampler: impl ShapeSampler + 'static) -> Self {
        Self {
            label,
            cases,
            generator: GraphGenerator::new(Box::new(sampler)),
        }
    }
}

/// The correctness batches in generation order.
///
/// # Errors
/// Returns [`GraphError::InvalidBounds`] if a built-in range is inverted.
pub fn correctness_batches() -> Result<Vec<CorrectnessBatch>, GraphError> {
    let nodes = Bounds::new("node count", MIN_NODES, MAX_NODES)?;
    let edges = Bounds::new("edge count", MIN_EDGES, MAX_EDGES)?;
    Ok(vec![
        CorrectnessBatch::new(
            "tiny",
            300,
            TinyUniformSampler::new(Bounds::new("node count", 4, 19)?),
        ),
        CorrectnessBatch::new("uniform", 400, UniformSampler::new(nodes, edges)),
        CorrectnessBatch::new(
            "sparse",
            800,
            SparseUniformSampler::new(nodes, RatioBounds::new("edge multiplier", 1.5, 3.0)?),
        ),
        CorrectnessBatch::new("dag", 400, DagSampler::new(nodes, edges)),
        CorrectnessBatch::new("almost_dag", 400, AlmostDagSampler::new(nodes, edges)),
        CorrectnessBatch::new(
            "clique_chain",
            500,
            CliqueChainSampler::new(nodes, Bounds::new("clique size", 2, MAX_NODES)?),
        ),
        CorrectnessBatch::new(
            "layered",
            500,
            LayeredSampler::new(
                nodes,
                Bounds::new("downward edges", MIN_NODES, MAX_EDGES)?,
                Bounds::new("upward edges", 0, MAX_EDGES)?,
            ),
        ),
    ])
}

/// Executable and algorithm producing expected answers.
#[derive(Clone, Copy, Debug)]
pub struct GroundTruth<'a> {
    /// Program to run.
    pub executable: &'a Executable,
    /// Algorithm trusted to answer correctly.
    pub algorithm: &'a str,
}

/// What a generation command wrote.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GenerationSummary {
    /// Suite directory.
    pub dir: PathBuf,
    /// Case inputs written.
    pub cases: usize,
    /// Expected outputs written alongside the inputs.
    pub outputs: usize,
}

/// Writes the correctness suite under `base`, numbering cases from zero.
///
/// All batches share one generator seeded with `seed`, so the suite is
/// reproducible as a whole. With `ground_truth` set, each input is
/// immediately answered and the answer stored as the expected output.
///
/// # Errors
/// Returns [`CliError`] when sampling fails, a produced graph is invalid,
/// or a file or ground-truth run fails.
#[instrument(name = "suites.generate_correctness", err, skip(ground_truth))]
pub fn generate_correctness(
    base: &Path,
    seed: u64,
    ground_truth: Option<GroundTruth<'_>>,
) -> Result<GenerationSummary, CliError> {
    let batches = correctness_batches()?;
    let total: usize = batches.iter().map(|batch| batch.cases).sum();
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut summary = GenerationSummary {
        dir: base.to_path_buf(),
        cases: 0,
        outputs: 0,
    };

    for batch in &batches {
        for _ in 0..batch.cases {
            let case_id = summary.cases.to_string();
            let graph = batch.generator.sample_graph(&mut rng)?;
            let edges = graph.generate_edges(&mut rng, true)?;
            check_graph(&edges, graph.node_count(), graph.edge_count())
                .map_err(|source| CliError::InvalidCase {
                    case: case_id.clone(),
                    source,
                })?;
            write_case_in(base, &case_id, &edges)?;
            summary.cases += 1;
            if let Some(truth) = ground_truth {
                write_case_out(base, &case_id, truth.executable, truth.algorithm)?;
                summary.outputs += 1;
            }
        }
        info!(
            batch = batch.label,
            done = summary.cases,
            total,
            "correctness batch generated"
        );
    }
    Ok(summary)
}

/// Parameters of a catalogue graph before scaling.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Recipe {
    /// Uniform random digraph.
    Uniform {
        /// Vertex count.
        nodes: usize,
        /// Edge count.
        edges: usize,
    },
    /// Random DAG.
    Dag {
        /// Vertex count.
        nodes: usize,
        /// Edge count.
        edges: usize,
    },
    /// Random DAG with backward edges.
    AlmostDag {
        /// Vertex count.
        nodes: usize,
        /// Forward edge count.
        dag_edges: usize,
        /// Backward edge count.
        additional_edges: usize,
    },
    /// Degree-skewed digraph.
    DegreeSkewed {
        /// Vertex count.
        nodes: usize,
        /// Edge count.
        edges: usize,
        /// Heavy vertex count.
        heavy_nodes: usize,
        /// Weight of each heavy vertex relative to a light one.
        heavy_proportion: usize,
    },
    /// Adversarial path collection.
    PathsCollection {
        /// Number of paths.
        paths: usize,
        /// Vertices per path.
        path_length: usize,
    },
    /// Adversarial clique collection.
    CliquesCollection {
        /// Target vertex count.
        nodes: usize,
        /// Target edge count.
        edges: usize,
    },
}

impl Recipe {
    /// Builds the graph with every size divided by `scale`.
    ///
    /// Scaled vertex counts keep a floor of two; scaled edge counts are
    /// capped at what the scaled graph can hold. Degree-skewed graphs keep
    /// the heavy vertices' share of the endpoint weight even once the heavy
    /// set bottoms out at one vertex. The almost-DAG backward edge count is
    /// kept as is, within capacity.
    ///
    /// # Errors
    /// Propagates construction validation failures.
    ///
    /// # Examples
    /// ```
    /// use std::num::NonZeroUsize;
    /// use reachgen_cli::suites::Recipe;
    ///
    /// let recipe = Recipe::Dag { nodes: 10_000, edges: 6_000_000 };
    /// let graph = recipe.graph(NonZeroUsize::new(100).expect("non-zero"))?;
    /// assert_eq!((graph.node_count(), graph.edge_count()), (100, 4_950));
    /// # Ok::<(), reachgen_core::GraphError>(())
    /// ```
    pub fn graph(self, scale: NonZeroUsize) -> Result<Graph, GraphError> {
        let divide = |value: usize| value / scale.get();
        let nodes = |value: usize| divide(value).max(2);
        Ok(match self {
            Self::Uniform { nodes: n, edges } => {
                let n = nodes(n);
                Graph::new(UniformGraph::new(n, divide(edges).min(max_directed_edges(n)))?)
            }
            Self::Dag { nodes: n, edges } => {
                let n = nodes(n);
                Graph::new(RandomDag::new(n, divide(edges).min(max_forward_edges(n)))?)
            }
            Self::AlmostDag {
                nodes: n,
                dag_edges,
                additional_edges,
            } => {
                let n = nodes(n);
                let cap = max_forward_edges(n);
                Graph::new(AlmostDag::new(
                    n,
                    divide(dag_edges).min(cap),
                    additional_edges.min(cap),
                )?)
            }
            Self::DegreeSkewed {
                nodes: n,
                edges,
                heavy_nodes,
                heavy_proportion,
            } => {
                let n = nodes(n);
                let heavy = divide(heavy_nodes).clamp(1, n);
                let heavy_weight = divide(heavy_nodes.saturating_mul(heavy_proportion)).max(1);
                Graph::new(DegreeSkewedGraph::new(
                    n,
                    divide(edges).min(max_directed_edges(n)),
                    heavy,
                    heavy_weight / heavy,
                )?)
            }
            Self::PathsCollection { paths, path_length } => Graph::new(PathsCollection::new(
                divide(paths).max(1),
                divide(path_length).max(1),
            )?),
            Self::CliquesCollection { nodes: n, edges } => Graph::new(CliquesCollection::new(
                divide(n).max(1),
                divide(edges).max(1),
            )?),
        })
    }
}

/// A named performance case and the algorithms it is timed with.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PerformanceCase {
    /// Case name; the input lives at `in/<name>.in`.
    pub name: String,
    /// How to build the graph, or `None` for inputs supplied externally.
    pub recipe: Option<Recipe>,
    /// Seed applied before building, if any.
    pub seed: Option<u64>,
    /// Algorithms the case is timed with.
    pub algorithms: Vec<&'static str>,
}

impl PerformanceCase {
    fn generated(
        name: String,
        recipe: Recipe,
        seed: Option<u64>,
        algorithms: Vec<&'static str>,
    ) -> Self {
        Self {
            name,
            recipe: Some(recipe),
            seed,
            algorithms,
        }
    }

    /// A case whose input is provided from outside, such as a real-world
    /// graph dump.
    #[must_use]
    pub fn external(name: impl Into<String>, algorithms: Vec<&'static str>) -> Self {
        Self {
            name: name.into(),
            recipe: None,
            seed: None,
            algorithms,
        }
    }

    /// Whether the suite generator produces this case's input.
    #[must_use]
    pub const fn is_generated(&self) -> bool {
        self.recipe.is_some()
    }

    /// The seeded graph for this case, or `None` for external inputs.
    ///
    /// # Errors
    /// Propagates [`Recipe::graph`] failures.
    pub fn graph(&self, scale: NonZeroUsize) -> Result<Option<Graph>, GraphError> {
        let Some(recipe) = self.recipe else {
            return Ok(None);
        };
        let graph = recipe.graph(scale)?;
        Ok(Some(match self.seed {
            Some(seed) => graph.with_seed(seed),
            None => graph,
        }))
    }
}

/// The performance catalogue: generated cases first, then external ones.
#[must_use]
pub fn performance_cases() -> Vec<PerformanceCase> {
    let mut cases = Vec::new();
    let mut push = |name: String, recipe: Recipe, seed: Option<u64>, algorithms| {
        cases.push(PerformanceCase::generated(name, recipe, seed, algorithms));
    };

    let small_sparse = [
        (20_000, 20, AlgorithmSubset::OptimalMemory.algorithms()),
        (30_000, 21, AlgorithmSubset::OptimalMemory.algorithms()),
        (50_000, 22, AlgorithmSubset::SemifastOptimalMemory.algorithms()),
        (
            70_000,
            23,
            AlgorithmSubset::Fastest.with(&["one_way_search", "naive_one_way_search"]),
        ),
    ];
    for (index, (nodes, seed, algorithms)) in small_sparse.into_iter().enumerate() {
        let recipe = Recipe::Uniform {
            nodes,
            edges: 2 * nodes,
        };
        push(
            format!("random_small_sparse_graph_{}", index + 1),
            recipe,
            Some(seed),
            algorithms,
        );
    }

    for (index, seed) in (30..=36).enumerate() {
        let nodes = 300_000 + 200_000 * index;
        let recipe = Recipe::Uniform {
            nodes,
            edges: 2 * nodes,
        };
        push(
            format!("random_sparse_graph_{}", index + 1),
            recipe,
            Some(seed),
            AlgorithmSubset::Fastest.algorithms(),
        );
    }

    for (index, seed) in (40..=45).enumerate() {
        let subset = if index < 3 {
            AlgorithmSubset::DenseDagEnhanced
        } else {
            AlgorithmSubset::DenseDag
        };
        let recipe = Recipe::Dag {
            nodes: 10_000,
            edges: 1_000_000 * (index + 1),
        };
        push(
            format!("random_dense_dag_{}", index + 1),
            recipe,
            Some(seed),
            subset.algorithms(),
        );
    }

    for (index, seed) in (50..=54).enumerate() {
        let subset = if index < 2 {
            AlgorithmSubset::SemifastOptimalMemory
        } else {
            AlgorithmSubset::SparseDag
        };
        let nodes = 400_000 + 200_000 * index;
        let recipe = Recipe::Dag {
            nodes,
            edges: 6 * nodes,
        };
        push(
            format!("random_sparse_dag_{}", index + 1),
            recipe,
            Some(seed),
            subset.algorithms(),
        );
    }

    for (index, seed) in (60..=64).enumerate() {
        let subset = match index {
            0 | 1 => AlgorithmSubset::SemifastOptimalMemory,
            2 => AlgorithmSubset::SparseDag,
            _ => AlgorithmSubset::SparseDagNarrowed,
        };
        let nodes = 400_000 + 200_000 * index;
        let recipe = Recipe::AlmostDag {
            nodes,
            dag_edges: 6 * nodes,
            additional_edges: 50,
        };
        push(
            format!("random_almost_dag_{}", index + 1),
            recipe,
            Some(seed),
            subset.algorithms(),
        );
    }

    for (index, seed) in (70..=75).enumerate() {
        let subset = if index < 2 {
            AlgorithmSubset::Fastest
        } else {
            AlgorithmSubset::MixedDegrees
        };
        let nodes = 400_000 + 200_000 * index;
        let recipe = Recipe::DegreeSkewed {
            nodes,
            edges: 3 * nodes,
            heavy_nodes: 1_000,
            heavy_proportion: 400,
        };
        push(
            format!("mixed_degrees_{}", index + 1),
            recipe,
            Some(seed),
            subset.algorithms(),
        );
    }

    for index in 0..5 {
        let subset = if index < 2 {
            AlgorithmSubset::PathsCollectionEnhanced
        } else {
            AlgorithmSubset::PathsCollection
        };
        let recipe = Recipe::PathsCollection {
            paths: 200 + 100 * index,
            path_length: 500,
        };
        push(
            format!("paths_collection_{}", index + 1),
            recipe,
            None,
            subset.algorithms(),
        );
    }

    for index in 0..5 {
        let nodes = 100_000 * (index + 1);
        let recipe = Recipe::CliquesCollection {
            nodes,
            edges: 4 * nodes,
        };
        push(
            format!("cliques_collection_{}", index + 1),
            recipe,
            None,
            AlgorithmSubset::CliquesCollection.algorithms(),
        );
    }

    let external = [
        ("google_web_graph", AlgorithmSubset::Fastest.algorithms()),
        (
            "road_network_california",
            AlgorithmSubset::SemifastOptimalMemory.algorithms(),
        ),
        (
            "road_network_pennsylvania",
            AlgorithmSubset::SemifastOptimalMemory.algorithms(),
        ),
        (
            "road_network_texas",
            AlgorithmSubset::SemifastOptimalMemory.algorithms(),
        ),
        ("wikipedia_talk", AlgorithmSubset::Fastest.algorithms()),
        (
            "twitter",
            AlgorithmSubset::Fastest.with(&["naive_one_way_search", "one_way_search"]),
        ),
        ("google_plus", AlgorithmSubset::Fastest.algorithms()),
        (
            "live_journal",
            AlgorithmSubset::FastestWithoutSample.algorithms(),
        ),
        (
            "mathoverflow",
            AlgorithmSubset::SemifastOptimalMemory.algorithms(),
        ),
        ("superuser", AlgorithmSubset::Fastest.algorithms()),
        (
            "stackoverflow",
            AlgorithmSubset::FastestWithoutSample.algorithms(),
        ),
    ];
    cases.extend(
        external
            .into_iter()
            .map(|(name, algorithms)| PerformanceCase::external(name, algorithms)),
    );
    cases
}

/// Writes every generated performance case under `base`.
///
/// Catalogue graphs are written without relabeling. Seeded cases reseed
/// the shared generator; the deterministic adversarial cases ignore it.
///
/// # Errors
/// Returns [`CliError`] when a graph cannot be built, fails validation,
/// or cannot be written.
#[instrument(name = "suites.generate_performance", err, skip(cases))]
pub fn generate_performance(
    base: &Path,
    cases: &[PerformanceCase],
    scale: NonZeroUsize,
) -> Result<GenerationSummary, CliError> {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut summary = GenerationSummary {
        dir: base.to_path_buf(),
        cases: 0,
        outputs: 0,
    };
    for case in cases {
        let Some(graph) = case.graph(scale)? else {
            debug!(case = %case.name, "external input, nothing to generate");
            continue;
        };
        let edges = graph.generate_edges(&mut rng, false)?;
        check_graph(&edges, graph.node_count(), graph.edge_count()).map_err(|source| {
            CliError::InvalidCase {
                case: case.name.clone(),
                source,
            }
        })?;
        write_case_in(base, &case.name, &edges)?;
        summary.cases += 1;
        info!(
            case = %case.name,
            class = %graph.class(),
            nodes = graph.node_count(),
            edges = edges.len(),
            "performance case generated"
        );
    }
    Ok(summary)
}
