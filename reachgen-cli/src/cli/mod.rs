//! Command-line interface orchestration for reachgen.
//!
//! `generate` writes the correctness or performance suite, `edges` emits a
//! single graph, and `check` and `bench` drive the executable under test
//! over a generated suite.

mod commands;

pub use commands::{
    BenchCommand, CheckCommand, Cli, Command, CommandOutcome, CorrectnessArgs, EdgesCommand,
    GenerateCommand, PerformanceArgs, ShapeArgs, render_outcome, run_cli,
};
