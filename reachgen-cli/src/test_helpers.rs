//! Small helpers shared across CLI tests.
//!
//! Tests stand in for the reachability executable with a shell script
//! so runners can be exercised without a real build.

use std::{fs, path::PathBuf};

use tempfile::TempDir;

use crate::executable::Executable;

pub(crate) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

/// Writes an executable `sh` script running `body` and wraps it.
///
/// The script receives the algorithm as `$1` and the input path as `$2`.
#[cfg(unix)]
pub(crate) fn fake_executable(dir: &TempDir, body: &str) -> Executable {
    use std::os::unix::fs::PermissionsExt;

    let path = script_path(dir);
    if let Err(err) = fs::write(&path, format!("#!/bin/sh\n{body}\n")) {
        panic!("failed to write script: {err}");
    }
    if let Err(err) = fs::set_permissions(&path, fs::Permissions::from_mode(0o755)) {
        panic!("failed to mark script executable: {err}");
    }
    Executable::new(path)
}

/// Script answering with the number of edges in its input.
#[cfg(unix)]
pub(crate) fn edge_counting_executable(dir: &TempDir) -> Executable {
    fake_executable(dir, "wc -l < \"$2\" | tr -d ' '")
}

fn script_path(dir: &TempDir) -> PathBuf {
    let mut index = 0_usize;
    loop {
        let candidate = dir.path().join(format!("algo-{index}.sh"));
        if !candidate.exists() {
            return candidate;
        }
        index += 1;
    }
}
