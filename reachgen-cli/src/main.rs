//! CLI entry point for reachgen.
//!
//! Parses command-line arguments with clap, runs the command, renders its
//! outcome to stdout, and maps failures to a non-zero exit code. Logging is
//! initialised first so every later step can emit structured diagnostics.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use reachgen_cli::{
    cli::{Cli, render_outcome, run_cli},
    error::CliError,
    logging::{self, Installation, LoggingError},
};
use tracing::{error, field, warn};

/// Runs the parsed command and renders its outcome, reporting whether the
/// command met its goal.
fn try_main() -> Result<bool> {
    let cli = Cli::parse();
    let outcome = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_outcome(&outcome, &mut writer).context("failed to render output")?;
    writer.flush().context("failed to flush output")?;
    Ok(outcome.succeeded())
}

fn main() -> ExitCode {
    match logging::init_logging() {
        Ok(Installation::Installed) => {}
        Ok(Installation::Preexisting(reason)) => {
            warn!(%reason, "structured logging already configured elsewhere");
        }
        Err(err) => {
            report_logging_init_error(&err);
            return ExitCode::FAILURE;
        }
    }

    match try_main() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            let code = err
                .downcast_ref::<CliError>()
                .and_then(|cli_error| match cli_error {
                    CliError::Core(core) => Some(core.code()),
                    _ => None,
                });
            let code_field = code.map(|code| field::display(code.as_str()));
            error!(error = %err, code = code_field, "command execution failed");
            ExitCode::FAILURE
        }
    }
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
