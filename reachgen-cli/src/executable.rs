//! Invocation of the reachability executable under test.
//!
//! The executable is called as `<program> <algorithm> <input>`. Answers
//! are read from stdout; timing runs discard both output streams.

use std::{
    path::{Path, PathBuf},
    process::{Command, Stdio},
    time::{Duration, Instant},
};

use tracing::{debug, instrument};

use crate::error::CliError;

/// Default location of the executable, relative to the project root.
pub const DEFAULT_EXECUTABLE: &str = "build/main";

/// The program answering reachability queries, optionally pinned to a CPU.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Executable {
    program: PathBuf,
    cpu: Option<usize>,
}

impl Executable {
    /// Wraps `program` without CPU pinning.
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            cpu: None,
        }
    }

    /// Pins every invocation to `cpu` through `taskset -c`.
    #[must_use]
    pub const fn pinned_to(mut self, cpu: usize) -> Self {
        self.cpu = Some(cpu);
        self
    }

    /// Path of the wrapped program.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Runs `algorithm` on `input` and returns its trimmed stdout.
    ///
    /// # Errors
    /// Returns [`CliError::Spawn`] when the program cannot be started and
    /// [`CliError::Subprocess`] when it exits unsuccessfully.
    #[instrument(
        name = "executable.run",
        err,
        skip(self),
        fields(program = %self.program.display(), input = %input.display()),
    )]
    pub fn run(&self, algorithm: &str, input: &Path) -> Result<String, CliError> {
        let output = self
            .command(algorithm, input)
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| self.spawn_error(algorithm, input, source))?;
        if !output.status.success() {
            return Err(self.status_error(algorithm, input, output.status));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_owned())
    }

    /// Runs `algorithm` on `input` once with output discarded and returns
    /// the wall-clock time it took.
    ///
    /// # Errors
    /// Same as [`Executable::run`].
    pub fn time(&self, algorithm: &str, input: &Path) -> Result<Duration, CliError> {
        let mut command = self.command(algorithm, input);
        command.stdout(Stdio::null()).stderr(Stdio::null());
        let start = Instant::now();
        let status = command
            .status()
            .map_err(|source| self.spawn_error(algorithm, input, source))?;
        let elapsed = start.elapsed();
        if !status.success() {
            return Err(self.status_error(algorithm, input, status));
        }
        debug!(algorithm, seconds = elapsed.as_secs_f64(), "timed run finished");
        Ok(elapsed)
    }

    fn command(&self, algorithm: &str, input: &Path) -> Command {
        let mut command = match self.cpu {
            Some(cpu) => {
                let mut taskset = Command::new("taskset");
                taskset.arg("-c").arg(cpu.to_string()).arg(&self.program);
                taskset
            }
            None => Command::new(&self.program),
        };
        command.arg(algorithm).arg(input);
        command
    }

    fn spawn_error(&self, algorithm: &str, input: &Path, source: std::io::Error) -> CliError {
        CliError::Spawn {
            program: self.program.clone(),
            algorithm: algorithm.to_owned(),
            input: input.to_path_buf(),
            source,
        }
    }

    fn status_error(
        &self,
        algorithm: &str,
        input: &Path,
        status: std::process::ExitStatus,
    ) -> CliError {
        CliError::Subprocess {
            program: self.program.clone(),
            algorithm: algorithm.to_owned(),
            input: input.to_path_buf(),
            status,
        }
    }
}
