//! On-disk layout of test cases.
//!
//! A suite directory holds inputs under `in/<id>.in` and expected answers
//! under `out/<id>.out`. Inputs list one edge per line as `u v`.

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use reachgen_core::Edge;
use tracing::{debug, instrument};

use crate::{error::CliError, executable::Executable};

/// Directory holding case inputs.
#[must_use]
pub fn inputs_dir(base: &Path) -> PathBuf {
    base.join("in")
}

/// Directory holding expected outputs.
#[must_use]
pub fn outputs_dir(base: &Path) -> PathBuf {
    base.join("out")
}

/// Input file of case `case_id`.
#[must_use]
pub fn input_path(base: &Path, case_id: &str) -> PathBuf {
    inputs_dir(base).join(format!("{case_id}.in"))
}

/// Expected-output file of case `case_id`.
#[must_use]
pub fn output_path(base: &Path, case_id: &str) -> PathBuf {
    outputs_dir(base).join(format!("{case_id}.out"))
}

/// Serialises `edges` as `u v` lines, each newline-terminated.
///
/// # Errors
/// Propagates write failures from `writer`.
///
/// # Examples
/// ```
/// use reachgen_cli::cases::write_edges;
/// use reachgen_core::Edge;
///
/// let mut buffer = Vec::new();
/// write_edges(&mut buffer, &[Edge::new(0, 1), Edge::new(2, 0)])?;
/// assert_eq!(buffer, b"0 1\n2 0\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn write_edges(mut writer: impl Write, edges: &[Edge]) -> io::Result<()> {
    for edge in edges {
        writeln!(writer, "{} {}", edge.source(), edge.target())?;
    }
    writer.flush()
}

/// Writes `edges` to `base/in/<case_id>.in`, creating the directory.
///
/// # Errors
/// Returns [`CliError::Io`] when the directory or file cannot be written.
#[instrument(name = "cases.write_in", err, skip(base, edges), fields(edges = edges.len()))]
pub fn write_case_in(base: &Path, case_id: &str, edges: &[Edge]) -> Result<PathBuf, CliError> {
    let dir = inputs_dir(base);
    fs::create_dir_all(&dir).map_err(CliError::io("create", &dir))?;
    let path = input_path(base, case_id);
    let file = File::create(&path).map_err(CliError::io("create", &path))?;
    write_edges(BufWriter::new(file), edges).map_err(CliError::io("write", &path))?;
    debug!(path = %path.display(), "case input written");
    Ok(path)
}

/// Runs `algorithm` on the stored input of `case_id` and records its
/// trimmed answer in `base/out/<case_id>.out`.
///
/// # Errors
/// Returns [`CliError`] when the executable fails or the output cannot
/// be written.
#[instrument(name = "cases.write_out", err, skip(base, executable))]
pub fn write_case_out(
    base: &Path,
    case_id: &str,
    executable: &Executable,
    algorithm: &str,
) -> Result<PathBuf, CliError> {
    let answer = executable.run(algorithm, &input_path(base, case_id))?;
    let dir = outputs_dir(base);
    fs::create_dir_all(&dir).map_err(CliError::io("create", &dir))?;
    let path = output_path(base, case_id);
    fs::write(&path, format!("{answer}\n")).map_err(CliError::io("write", &path))?;
    Ok(path)
}

/// Identifiers of the cases stored under `base/in`, ordered numerically
/// where the identifiers are numbers and lexically otherwise.
///
/// # Errors
/// Returns [`CliError::MissingDirectory`] when `base/in` does not exist
/// and [`CliError::Io`] when it cannot be listed.
pub fn list_case_ids(base: &Path) -> Result<Vec<String>, CliError> {
    let dir = inputs_dir(base);
    if !dir.is_dir() {
        return Err(CliError::MissingDirectory { path: dir });
    }
    let entries = fs::read_dir(&dir).map_err(CliError::io("list", &dir))?;
    let mut ids = Vec::new();
    for entry in entries {
        let path = entry.map_err(CliError::io("list", &dir))?.path();
        if path.extension().is_some_and(|ext| ext == "in")
            && let Some(stem) = path.file_stem().and_then(|stem| stem.to_str())
        {
            ids.push(stem.to_owned());
        }
    }
    ids.sort_by(|left, right| {
        match (left.parse::<u64>(), right.parse::<u64>()) {
            (Ok(l), Ok(r)) => l.cmp(&r),
            (Ok(_), Err(_)) => std::cmp::Ordering::Less,
            (Err(_), Ok(_)) => std::cmp::Ordering::Greater,
            (Err(_), Err(_)) => left.cmp(right),
        }
    });
    Ok(ids)
}
