//! Errors surfaced by the test harness and its commands.

use std::{io, path::PathBuf, process::ExitStatus};

use reachgen_core::{GraphError, invariants::EdgeSetViolation};
use thiserror::Error;

/// Errors surfaced while generating, checking or timing test cases.
#[derive(Debug, Error)]
pub enum CliError {
    /// A filesystem operation failed.
    #[error("failed to {action} `{path}`: {source}")]
    Io {
        /// Operation being attempted, such as `create` or `read`.
        action: &'static str,
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The algorithm executable could not be started.
    #[error("failed to start `{program}` for `{algorithm}` on `{input}`: {source}")]
    Spawn {
        /// Executable that was invoked.
        program: PathBuf,
        /// Algorithm name passed as the first argument.
        algorithm: String,
        /// Input file passed as the second argument.
        input: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The algorithm executable exited unsuccessfully.
    #[error("`{program}` running `{algorithm}` on `{input}` exited with {status}")]
    Subprocess {
        /// Executable that was invoked.
        program: PathBuf,
        /// Algorithm name passed as the first argument.
        algorithm: String,
        /// Input file passed as the second argument.
        input: PathBuf,
        /// Exit status reported by the operating system.
        status: ExitStatus,
    },
    /// An algorithm name is not in the known list.
    #[error("unknown algorithm `{name}`; expected one of: {known}")]
    UnknownAlgorithm {
        /// Name supplied by the user.
        name: String,
        /// Comma-separated list of accepted names.
        known: String,
    },
    /// A test-case directory does not exist.
    #[error("test cases directory `{path}` does not exist; generate it first")]
    MissingDirectory {
        /// Directory that was expected.
        path: PathBuf,
    },
    /// The result cache could not be parsed or serialised.
    #[error("result cache `{path}` is unusable: {source}")]
    Cache {
        /// Cache file location.
        path: PathBuf,
        /// Underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },
    /// A generated graph failed validation before being written.
    #[error("generated case `{case}` is not a valid graph: {source}")]
    InvalidCase {
        /// Case identifier being written.
        case: String,
        /// First violation found.
        #[source]
        source: EdgeSetViolation,
    },
    /// Graph construction failed.
    #[error(transparent)]
    Core(#[from] GraphError),
}

impl CliError {
    /// Builds a mapper attaching `action` and `path` to an I/O failure.
    pub(crate) fn io(
        action: &'static str,
        path: impl Into<PathBuf>,
    ) -> impl FnOnce(io::Error) -> Self {
        move |source| Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
