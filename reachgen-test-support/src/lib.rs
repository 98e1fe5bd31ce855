//! Shared test utilities used across reachgen crates.
//!
//! - [`tracing`] records spans and events so tests can assert the
//!   instrumentation of generation and CLI entry points.
//! - [`ci`] resolves environment overrides for property-test runs.

pub mod ci;
pub mod tracing;
