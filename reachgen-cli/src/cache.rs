//! Persistent cache of benchmark timings.
//!
//! Timing the full performance suite takes hours, so mean run times are
//! kept per case and reused until the case input changes on disk.

use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::{BufReader, BufWriter, ErrorKind, Write},
    path::{Path, PathBuf},
    time::UNIX_EPOCH,
};

use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// File name of the cache inside a suite directory.
pub const CACHE_FILE_NAME: &str = ".perf_cache.json";

/// Cached timings of one case.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct CacheEntry {
    /// Modification time of the input the timings belong to, in seconds
    /// since the Unix epoch.
    pub time_modified: f64,
    /// Mean run time in seconds per algorithm.
    pub algorithms: BTreeMap<String, f64>,
}

/// Timings of every case, keyed by case name.
///
/// # Examples
/// ```
/// use reachgen_cli::cache::ResultCache;
///
/// let mut cache = ResultCache::default();
/// cache.entry_for("paths_collection_1", 10.0).algorithms.insert("two_way_search".into(), 0.5);
/// assert_eq!(cache.entry_for("paths_collection_1", 10.0).algorithms.len(), 1);
/// assert!(cache.entry_for("paths_collection_1", 11.0).algorithms.is_empty());
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultCache {
    entries: BTreeMap<String, CacheEntry>,
}

impl ResultCache {
    /// Location of the cache for the suite rooted at `base`.
    #[must_use]
    pub fn path_in(base: &Path) -> PathBuf {
        base.join(CACHE_FILE_NAME)
    }

    /// Reads the cache at `path`; a missing file yields an empty cache.
    ///
    /// # Errors
    /// Returns [`CliError::Io`] when the file cannot be opened and
    /// [`CliError::Cache`] when it is not valid cache JSON.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(CliError::io("open", path)(err)),
        };
        serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::Cache {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Writes the cache to `path` as indented JSON.
    ///
    /// # Errors
    /// Returns [`CliError`] when the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), CliError> {
        let file = File::create(path).map_err(CliError::io("create", path))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self).map_err(|source| CliError::Cache {
            path: path.to_path_buf(),
            source,
        })?;
        writer.flush().map_err(CliError::io("write", path))
    }

    /// Entry for `name`, cleared first when it was recorded against a
    /// different input modification time.
    pub fn entry_for(&mut self, name: &str, time_modified: f64) -> &mut CacheEntry {
        let entry = self.entries.entry(name.to_owned()).or_default();
        if entry.time_modified.to_bits() != time_modified.to_bits() {
            *entry = CacheEntry {
                time_modified,
                algorithms: BTreeMap::new(),
            };
        }
        entry
    }

    /// Cached entry for `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CacheEntry> {
        self.entries.get(name)
    }
}

/// Modification time of `path` in seconds since the Unix epoch.
///
/// # Errors
/// Returns [`CliError::Io`] when the metadata cannot be read.
pub fn modified_seconds(path: &Path) -> Result<f64, CliError> {
    let modified = fs::metadata(path)
        .and_then(|metadata| metadata.modified())
        .map_err(CliError::io("inspect", path))?;
    let since_epoch = modified
        .duration_since(UNIX_EPOCH)
        .map_err(|err| CliError::io("inspect", path)(std::io::Error::other(err)))?;
    Ok(since_epoch.as_secs_f64())
}
