//! Command implementations and argument parsing for the reachgen CLI.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    num::{NonZeroU32, NonZeroUsize},
    path::{Path, PathBuf},
};

use clap::{Args, Parser, Subcommand};
use rand::{SeedableRng, rngs::SmallRng};
use reachgen_core::{
    Edge, Graph, GraphError, Shape,
    shapes::{
        AlmostDag, CliqueChain, CliquesCollection, DegreeSkewedGraph, LayeredGraph,
        PathsCollection, RandomDag, UniformGraph,
    },
};
use tracing::{Span, field, info, instrument};

use crate::{
    algorithms::{self, GROUND_TRUTH},
    cases::write_edges,
    error::CliError,
    executable::{DEFAULT_EXECUTABLE, Executable},
    runner::{
        BenchCaseReport, BenchConfig, CheckReport, DEFAULT_RUNS, bench_cases, check_cases,
        render_bench_reports, render_check_report,
    },
    suites::{
        CORRECTNESS_DIR, CORRECTNESS_SEED, GenerationSummary, GroundTruth, PERFORMANCE_DIR,
        generate_correctness, generate_performance, performance_cases,
    },
};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "reachgen",
    about = "Generate graphs and run reachability test suites."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Write a test suite to disk.
    #[command(subcommand)]
    Generate(GenerateCommand),
    /// Emit the edges of a single graph.
    Edges(EdgesCommand),
    /// Compare algorithm answers with the stored expected outputs.
    Check(CheckCommand),
    /// Time algorithms on the performance suite.
    Bench(BenchCommand),
}

/// Suites the `generate` command can write.
#[derive(Debug, Subcommand, Clone)]
pub enum GenerateCommand {
    /// Seeded batch of small sampled graphs.
    Correctness(CorrectnessArgs),
    /// Catalogue of large named graphs.
    Performance(PerformanceArgs),
}

/// Options accepted by `generate correctness`.
#[derive(Debug, Args, Clone)]
pub struct CorrectnessArgs {
    /// Suite directory.
    #[arg(long, default_value = CORRECTNESS_DIR)]
    pub dir: PathBuf,

    /// Seed of the shared generator.
    #[arg(long, default_value_t = CORRECTNESS_SEED)]
    pub seed: u64,

    /// Executable producing the expected outputs; inputs only when absent.
    #[arg(long = "ground-truth-exe")]
    pub ground_truth_exe: Option<PathBuf>,

    /// Algorithm whose answers become the expected outputs.
    #[arg(long = "ground-truth", default_value = GROUND_TRUTH)]
    pub ground_truth: String,
}

/// Options accepted by `generate performance`.
#[derive(Debug, Args, Clone)]
pub struct PerformanceArgs {
    /// Suite directory.
    #[arg(long, default_value = PERFORMANCE_DIR)]
    pub dir: PathBuf,

    /// Divide every graph size by this factor, for smoke runs.
    #[arg(long, default_value_t = NonZeroUsize::MIN)]
    pub scale: NonZeroUsize,
}

/// Options accepted by `edges`.
#[derive(Debug, Args, Clone)]
pub struct EdgesCommand {
    /// Construction and its parameters.
    #[command(subcommand)]
    pub shape: ShapeArgs,

    /// Seed for reproducible output; drawn from the OS when absent.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Keep the construction's own vertex numbering.
    #[arg(long = "no-relabel", global = true)]
    pub no_relabel: bool,

    /// Write edges to this file instead of stdout.
    #[arg(long, global = true)]
    pub output: Option<PathBuf>,
}

/// Graph constructions and their exact parameters.
#[derive(Debug, Subcommand, Clone, Copy, PartialEq, Eq)]
pub enum ShapeArgs {
    /// Uniformly random simple digraph.
    Uniform {
        /// Vertex count.
        #[arg(long)]
        nodes: usize,
        /// Edge count.
        #[arg(long)]
        edges: usize,
    },
    /// Random DAG.
    Dag {
        /// Vertex count.
        #[arg(long)]
        nodes: usize,
        /// Edge count.
        #[arg(long)]
        edges: usize,
    },
    /// Random DAG plus backward edges.
    AlmostDag {
        /// Vertex count.
        #[arg(long)]
        nodes: usize,
        /// Forward edge count.
        #[arg(long)]
        dag_edges: usize,
        /// Backward edge count.
        #[arg(long)]
        additional_edges: usize,
    },
    /// Chain of forward cliques.
    CliqueChain {
        /// Vertex count.
        #[arg(long)]
        nodes: usize,
        /// Vertices per clique.
        #[arg(long)]
        clique_size: usize,
    },
    /// Grid of horizontal paths with cross-row edges.
    Layered {
        /// Row count.
        #[arg(long)]
        rows: usize,
        /// Column count.
        #[arg(long)]
        columns: usize,
        /// Edges pointing to a later row.
        #[arg(long)]
        downward_edges: usize,
        /// Edges pointing to an earlier row.
        #[arg(long)]
        upward_edges: usize,
    },
    /// Digraph whose endpoints favour a few heavy vertices.
    DegreeSkewed {
        /// Vertex count.
        #[arg(long)]
        nodes: usize,
        /// Edge count.
        #[arg(long)]
        edges: usize,
        /// Heavy vertex count.
        #[arg(long)]
        heavy_nodes: usize,
        /// Weight of a heavy vertex relative to a light one.
        #[arg(long)]
        heavy_proportion: usize,
    },
    /// Adversarial paths linked backwards.
    PathsCollection {
        /// Number of paths.
        #[arg(long)]
        paths: usize,
        /// Vertices per path.
        #[arg(long)]
        path_length: usize,
    },
    /// Adversarial main clique with a chain of anchor cliques.
    CliquesCollection {
        /// Target vertex count.
        #[arg(long)]
        nodes: usize,
        /// Target edge count.
        #[arg(long)]
        edges: usize,
    },
}

impl ShapeArgs {
    /// Validates the parameters into a [`Shape`].
    ///
    /// # Errors
    /// Returns [`GraphError`] when the parameters are infeasible.
    pub fn shape(self) -> Result<Shape, GraphError> {
        Ok(match self {
            Self::Uniform { nodes, edges } => UniformGraph::new(nodes, edges)?.into(),
            Self::Dag { nodes, edges } => RandomDag::new(nodes, edges)?.into(),
            Self::AlmostDag {
                nodes,
                dag_edges,
                additional_edges,
            } => AlmostDag::new(nodes, dag_edges, additional_edges)?.into(),
            Self::CliqueChain { nodes, clique_size } => {
                CliqueChain::new(nodes, clique_size)?.into()
            }
            Self::Layered {
                rows,
                columns,
                downward_edges,
                upward_edges,
            } => LayeredGraph::new(rows, columns, downward_edges, upward_edges)?.into(),
            Self::DegreeSkewed {
                nodes,
                edges,
                heavy_nodes,
                heavy_proportion,
            } => DegreeSkewedGraph::new(nodes, edges, heavy_nodes, heavy_proportion)?.into(),
            Self::PathsCollection { paths, path_length } => {
                PathsCollection::new(paths, path_length)?.into()
            }
            Self::CliquesCollection { nodes, edges } => {
                CliquesCollection::new(nodes, edges)?.into()
            }
        })
    }
}

/// Options accepted by `check`.
#[derive(Debug, Args, Clone)]
pub struct CheckCommand {
    /// Executable answering reachability queries.
    #[arg(long, default_value = DEFAULT_EXECUTABLE)]
    pub exe: PathBuf,

    /// Suite directory.
    #[arg(long, default_value = CORRECTNESS_DIR)]
    pub dir: PathBuf,

    /// Algorithms to check; all known algorithms when omitted.
    #[arg(long, num_args = 1..)]
    pub algorithms: Vec<String>,
}

/// Options accepted by `bench`.
#[derive(Debug, Args, Clone)]
pub struct BenchCommand {
    /// Executable answering reachability queries.
    #[arg(long, default_value = DEFAULT_EXECUTABLE)]
    pub exe: PathBuf,

    /// Suite directory.
    #[arg(long, default_value = PERFORMANCE_DIR)]
    pub dir: PathBuf,

    /// Algorithms to time; all known algorithms when omitted.
    #[arg(long, num_args = 1..)]
    pub algorithms: Vec<String>,

    /// Re-time every algorithm instead of reusing cached means.
    #[arg(long = "no-cache")]
    pub no_cache: bool,

    /// Timed runs averaged per algorithm.
    #[arg(long, default_value_t = DEFAULT_RUNS)]
    pub runs: NonZeroU32,

    /// Pin runs to this CPU with `taskset`.
    #[arg(long)]
    pub cpu: Option<usize>,
}

/// What a command produced, ready for rendering.
#[derive(Debug, Clone)]
pub enum CommandOutcome {
    /// A suite was written.
    Generated(GenerationSummary),
    /// A single graph was produced.
    Edges {
        /// Produced edges.
        edges: Vec<Edge>,
        /// File the edges were written to, or `None` to print them.
        written_to: Option<PathBuf>,
    },
    /// Answers were checked.
    Checked(CheckReport),
    /// Algorithms were timed.
    Benched(Vec<BenchCaseReport>),
}

impl CommandOutcome {
    /// Whether the command met its goal; only a failed check does not.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        match self {
            Self::Checked(report) => report.passed(),
            _ => true,
        }
    }
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when parsing or execution fails.
///
/// # Examples
/// ```
/// # use reachgen_cli::cli::{Cli, Command, CommandOutcome, EdgesCommand, ShapeArgs, run_cli};
/// let cli = Cli {
///     command: Command::Edges(EdgesCommand {
///         shape: ShapeArgs::PathsCollection { paths: 3, path_length: 4 },
///         seed: Some(1),
///         no_relabel: true,
///         output: None,
///     }),
/// };
/// match run_cli(cli)? {
///     CommandOutcome::Edges { edges, .. } => assert_eq!(edges.len(), 12),
///     other => panic!("unexpected outcome: {other:?}"),
/// }
/// # Ok::<(), reachgen_cli::error::CliError>(())
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<CommandOutcome, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Generate(generate) => {
            span.record("command", field::display("generate"));
            run_generate(generate).map(CommandOutcome::Generated)
        }
        Command::Edges(edges) => {
            span.record("command", field::display("edges"));
            run_edges(edges)
        }
        Command::Check(check) => {
            span.record("command", field::display("check"));
            run_check(&check).map(CommandOutcome::Checked)
        }
        Command::Bench(bench) => {
            span.record("command", field::display("bench"));
            run_bench(&bench).map(CommandOutcome::Benched)
        }
    }
}

#[instrument(name = "cli.generate", err, skip(command), fields(suite = field::Empty))]
pub(super) fn run_generate(command: GenerateCommand) -> Result<GenerationSummary, CliError> {
    let span = Span::current();
    let summary = match command {
        GenerateCommand::Correctness(args) => {
            span.record("suite", field::display("correctness"));
            let executable = args.ground_truth_exe.map(Executable::new);
            let ground_truth = match &executable {
                Some(executable) => Some(GroundTruth {
                    executable,
                    algorithm: resolve_one(&args.ground_truth)?,
                }),
                None => None,
            };
            generate_correctness(&args.dir, args.seed, ground_truth)?
        }
        GenerateCommand::Performance(args) => {
            span.record("suite", field::display("performance"));
            generate_performance(&args.dir, &performance_cases(), args.scale)?
        }
    };
    info!(
        dir = %summary.dir.display(),
        cases = summary.cases,
        outputs = summary.outputs,
        "suite generated"
    );
    Ok(summary)
}

#[instrument(
    name = "cli.edges",
    err,
    skip(command),
    fields(class = field::Empty, seed = field::Empty),
)]
pub(super) fn run_edges(command: EdgesCommand) -> Result<CommandOutcome, CliError> {
    let EdgesCommand {
        shape,
        seed,
        no_relabel,
        output,
    } = command;
    let graph = Graph::new(shape.shape()?);
    let span = Span::current();
    span.record("class", field::display(graph.class()));

    let (graph, mut rng) = match seed {
        Some(seed) => {
            span.record("seed", seed);
            (graph.with_seed(seed), SmallRng::seed_from_u64(seed))
        }
        None => (graph, SmallRng::from_entropy()),
    };
    let edges = graph.generate_edges(&mut rng, !no_relabel)?;

    if let Some(path) = &output {
        write_edges_file(path, &edges)?;
        info!(path = %path.display(), edges = edges.len(), "edges written");
    }
    Ok(CommandOutcome::Edges {
        edges,
        written_to: output,
    })
}

fn write_edges_file(path: &Path, edges: &[Edge]) -> Result<(), CliError> {
    let file = File::create(path).map_err(CliError::io("create", path))?;
    write_edges(BufWriter::new(file), edges).map_err(CliError::io("write", path))
}

#[instrument(name = "cli.check", err, skip(command), fields(dir = %command.dir.display()))]
pub(super) fn run_check(command: &CheckCommand) -> Result<CheckReport, CliError> {
    let algorithms = algorithms::resolve(&command.algorithms)?;
    let report = check_cases(&command.dir, &Executable::new(&command.exe), &algorithms)?;
    info!(
        cases = report.cases,
        failures = report.failures.len(),
        "check completed"
    );
    Ok(report)
}

#[instrument(name = "cli.bench", err, skip(command), fields(dir = %command.dir.display()))]
pub(super) fn run_bench(command: &BenchCommand) -> Result<Vec<BenchCaseReport>, CliError> {
    let algorithms = algorithms::resolve(&command.algorithms)?;
    let executable = match command.cpu {
        Some(cpu) => Executable::new(&command.exe).pinned_to(cpu),
        None => Executable::new(&command.exe),
    };
    let config = BenchConfig {
        runs: command.runs,
        use_cache: !command.no_cache,
    };
    bench_cases(
        &command.dir,
        &executable,
        &performance_cases(),
        &algorithms,
        config,
    )
}

fn resolve_one(name: &str) -> Result<&'static str, CliError> {
    let resolved = algorithms::resolve(&[name.to_owned()])?;
    Ok(resolved.first().copied().unwrap_or(GROUND_TRUTH))
}

/// Renders `outcome` to `writer`.
///
/// Printed edges use the `u v` line format; every other outcome renders
/// as a short human-readable report.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use reachgen_cli::cli::{CommandOutcome, render_outcome};
/// # use reachgen_core::Edge;
/// let outcome = CommandOutcome::Edges {
///     edges: vec![Edge::new(1, 0)],
///     written_to: None,
/// };
/// let mut buffer = Vec::new();
/// render_outcome(&outcome, &mut buffer)?;
/// assert_eq!(buffer, b"1 0\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn render_outcome(outcome: &CommandOutcome, mut writer: impl Write) -> io::Result<()> {
    match outcome {
        CommandOutcome::Generated(summary) => writeln!(
            writer,
            "wrote {} inputs and {} expected outputs to {}",
            summary.cases,
            summary.outputs,
            summary.dir.display()
        ),
        CommandOutcome::Edges {
            edges,
            written_to: None,
        } => write_edges(writer, edges),
        CommandOutcome::Edges {
            edges,
            written_to: Some(path),
        } => writeln!(writer, "wrote {} edges to {}", edges.len(), path.display()),
        CommandOutcome::Checked(report) => render_check_report(report, writer),
        CommandOutcome::Benched(reports) => render_bench_reports(reports, writer),
    }
}
