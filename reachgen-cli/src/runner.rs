//! Correctness and performance runners over generated suites.

use std::{
    collections::BTreeSet,
    fs,
    io::{self, Write},
    num::NonZeroU32,
    path::Path,
    time::Duration,
};

use tracing::{Span, field, info, instrument, warn};

use crate::{
    cache::{ResultCache, modified_seconds},
    cases::{input_path, list_case_ids, output_path, outputs_dir},
    error::CliError,
    executable::Executable,
    suites::PerformanceCase,
};

/// How one algorithm run disagreed with the expected answer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FailureReason {
    /// The run succeeded with a different answer.
    WrongAnswer,
    /// The run could not be completed.
    RunFailed(String),
}

/// A failed algorithm run during a correctness check.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CheckFailure {
    /// Algorithm that failed.
    pub algorithm: String,
    /// Case it failed on.
    pub case_id: String,
    /// What went wrong.
    pub reason: FailureReason,
}

/// Outcome of checking every stored case against its expected answer.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CheckReport {
    /// Number of cases examined.
    pub cases: usize,
    /// Algorithm runs performed across all cases.
    pub runs: usize,
    /// Runs whose answer did not match.
    pub failures: Vec<CheckFailure>,
}

impl CheckReport {
    /// Whether every run matched its expected answer.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Runs each algorithm on every case under `base` and compares its
/// trimmed answer with the stored expected output.
///
/// Failing runs are recorded rather than aborting the check.
///
/// # Errors
/// Returns [`CliError`] when the suite directories are missing or an
/// expected output cannot be read.
#[instrument(name = "runner.check", err, skip(executable, algorithms), fields(cases = field::Empty))]
pub fn check_cases(
    base: &Path,
    executable: &Executable,
    algorithms: &[&str],
) -> Result<CheckReport, CliError> {
    let case_ids = list_case_ids(base)?;
    let out_dir = outputs_dir(base);
    if !out_dir.is_dir() {
        return Err(CliError::MissingDirectory { path: out_dir });
    }
    Span::current().record("cases", case_ids.len());

    let mut report = CheckReport {
        cases: case_ids.len(),
        ..CheckReport::default()
    };
    for (index, case_id) in case_ids.iter().enumerate() {
        let expected_path = output_path(base, case_id);
        let expected = fs::read_to_string(&expected_path)
            .map_err(CliError::io("read", &expected_path))?;
        let expected = expected.trim();
        let input = input_path(base, case_id);
        for &algorithm in algorithms {
            report.runs += 1;
            let reason = match executable.run(algorithm, &input) {
                Ok(answer) if answer == expected => continue,
                Ok(_) => FailureReason::WrongAnswer,
                Err(err) => FailureReason::RunFailed(err.to_string()),
            };
            warn!(algorithm, case = %case_id, ?reason, "check failed");
            report.failures.push(CheckFailure {
                algorithm: algorithm.to_owned(),
                case_id: case_id.clone(),
                reason,
            });
        }
        info!(done = index + 1, total = case_ids.len(), "case checked");
    }
    Ok(report)
}

/// Renders `report` as the failure list followed by a summary.
///
/// # Errors
/// Returns [`io::Error`] if writing fails.
pub fn render_check_report(report: &CheckReport, mut writer: impl Write) -> io::Result<()> {
    for failure in &report.failures {
        write!(writer, "[FAIL] {} on {}.in", failure.algorithm, failure.case_id)?;
        match &failure.reason {
            FailureReason::WrongAnswer => writeln!(writer)?,
            FailureReason::RunFailed(reason) => writeln!(writer, ": {reason}")?,
        }
    }
    writeln!(writer, "=== SUMMARY ===")?;
    if report.passed() {
        writeln!(writer, "All {} cases passed!", report.cases)
    } else {
        writeln!(
            writer,
            "Some errors occurred: {} of {} runs failed.",
            report.failures.len(),
            report.runs
        )
    }
}

/// Timed runs averaged per algorithm unless configured otherwise.
pub const DEFAULT_RUNS: NonZeroU32 = match NonZeroU32::new(5) {
    Some(runs) => runs,
    None => NonZeroU32::MIN,
};

/// Benchmark settings.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BenchConfig {
    /// Timed runs averaged per algorithm and case.
    pub runs: NonZeroU32,
    /// Whether cached timings may be reused.
    pub use_cache: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            runs: DEFAULT_RUNS,
            use_cache: true,
        }
    }
}

/// Mean time of one algorithm on one case.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchRow {
    /// Algorithm timed.
    pub algorithm: String,
    /// Mean wall-clock time.
    pub mean: Duration,
    /// Whether the mean came from the cache.
    pub cached: bool,
}

/// Timings of one performance case.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchCaseReport {
    /// Case name.
    pub name: String,
    /// One row per timed algorithm, sorted by name.
    pub rows: Vec<BenchRow>,
}

/// Times the selected algorithms on each case stored under `base`.
///
/// Each case is timed with the intersection of its own algorithm subset
/// and `selected`. Cached means are reused when `config.use_cache` is set
/// and the input has not been modified since they were recorded. The
/// cache is written back after every case.
///
/// Cases without a generator whose input is absent are skipped with a
/// warning; a missing generated input is an error.
///
/// # Errors
/// Returns [`CliError`] when the suite is missing, an input cannot be
/// inspected, a timed run fails or the cache cannot be persisted.
#[instrument(
    name = "runner.bench",
    err,
    skip(executable, cases, selected, config),
    fields(runs = config.runs.get(), use_cache = config.use_cache),
)]
pub fn bench_cases(
    base: &Path,
    executable: &Executable,
    cases: &[PerformanceCase],
    selected: &[&str],
    config: BenchConfig,
) -> Result<Vec<BenchCaseReport>, CliError> {
    let in_dir = crate::cases::inputs_dir(base);
    if !in_dir.is_dir() {
        return Err(CliError::MissingDirectory { path: in_dir });
    }
    let cache_path = ResultCache::path_in(base);
    let mut cache = ResultCache::load(&cache_path)?;
    let selected: BTreeSet<&str> = selected.iter().copied().collect();

    let mut reports = Vec::new();
    for case in cases {
        let input = input_path(base, &case.name);
        if !case.is_generated() && !input.exists() {
            warn!(case = %case.name, path = %input.display(), "input missing, skipping");
            continue;
        }
        let time_modified = modified_seconds(&input)?;
        let entry = cache.entry_for(&case.name, time_modified);

        let algorithms: BTreeSet<&str> = case
            .algorithms
            .iter()
            .copied()
            .filter(|algorithm| selected.contains(algorithm))
            .collect();
        let mut rows = Vec::with_capacity(algorithms.len());
        for algorithm in algorithms {
            let cached = config.use_cache && entry.algorithms.contains_key(algorithm);
            if !cached {
                let mean = time_mean(executable, algorithm, &input, config.runs)?;
                entry
                    .algorithms
                    .insert(algorithm.to_owned(), mean.as_secs_f64());
            }
            let seconds = entry.algorithms.get(algorithm).copied().unwrap_or_default();
            rows.push(BenchRow {
                algorithm: algorithm.to_owned(),
                mean: Duration::try_from_secs_f64(seconds).unwrap_or_default(),
                cached,
            });
        }
        cache.save(&cache_path)?;
        info!(case = %case.name, algorithms = rows.len(), "case timed");
        reports.push(BenchCaseReport {
            name: case.name.clone(),
            rows,
        });
    }
    Ok(reports)
}

fn time_mean(
    executable: &Executable,
    algorithm: &str,
    input: &Path,
    runs: NonZeroU32,
) -> Result<Duration, CliError> {
    let mut total = Duration::ZERO;
    for _ in 0..runs.get() {
        total += executable.time(algorithm, input)?;
    }
    Ok(total / runs.get())
}

/// Renders timing tables, one per case.
///
/// # Errors
/// Returns [`io::Error`] if writing fails.
pub fn render_bench_reports(reports: &[BenchCaseReport], mut writer: impl Write) -> io::Result<()> {
    let total = reports.len();
    for (index, report) in reports.iter().enumerate() {
        let header = format!("Test {}/{total}: {}", index + 1, report.name);
        writeln!(writer, "{header}")?;
        writeln!(writer, "{}", "=".repeat(header.chars().count()))?;
        writeln!(writer, "{:<30}  {:>10} {:>8}", "Algorithm", "Time (s)", "Cached")?;
        writeln!(writer, "{}", "-".repeat(51))?;
        for row in &report.rows {
            writeln!(
                writer,
                "{:<30} {:>10.4}s {:>8}",
                row.algorithm,
                row.mean.as_secs_f64(),
                if row.cached { "YES" } else { "NO" },
            )?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use reachgen_core::Edge;

    use crate::{algorithms::AlgorithmSubset, cases::write_case_in, test_helpers::temp_dir};

    #[test]
    fn check_requires_expected_outputs() {
        let dir = temp_dir();
        write_case_in(dir.path(), "0", &[]).expect("write succeeds");
        let exe = Executable::new("unused");
        let err = check_cases(dir.path(), &exe, &["naive_dfs"]).expect_err("no outputs");
        assert!(matches!(err, CliError::MissingDirectory { .. }), "{err:?}");
    }

    #[test]
    fn check_report_lists_failures() {
        let report = CheckReport {
            cases: 2,
            runs: 4,
            failures: vec![
                CheckFailure {
                    algorithm: "sample_search".to_owned(),
                    case_id: "1".to_owned(),
                    reason: FailureReason::WrongAnswer,
                },
                CheckFailure {
                    algorithm: "naive_dfs".to_owned(),
                    case_id: "0".to_owned(),
                    reason: FailureReason::RunFailed("exited with 2".to_owned()),
                },
            ],
        };
        let mut buffer = Vec::new();
        render_check_report(&report, &mut buffer).expect("render");
        assert_eq!(
            String::from_utf8(buffer).expect("utf8"),
            "[FAIL] sample_search on 1.in\n\
             [FAIL] naive_dfs on 0.in: exited with 2\n\
             === SUMMARY ===\n\
             Some errors occurred: 2 of 4 runs failed.\n"
        );
    }

    #[test]
    fn bench_table_matches_the_fixed_layout() {
        let reports = [BenchCaseReport {
            name: "twitter".to_owned(),
            rows: vec![BenchRow {
                algorithm: "two_way_search".to_owned(),
                mean: Duration::from_millis(1250),
                cached: true,
            }],
        }];
        let mut buffer = Vec::new();
        render_bench_reports(&reports, &mut buffer).expect("render");
        let rendered = String::from_utf8(buffer).expect("utf8");
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines[0], "Test 1/1: twitter");
        assert_eq!(lines[1], "=".repeat(17));
        assert_eq!(lines[3].len(), 51);
        assert_eq!(
            lines[4],
            format!("{:<30} {:>10}s {:>8}", "two_way_search", "1.2500", "YES")
        );
    }

    #[test]
    fn bench_skips_absent_inputs_without_generators() {
        let dir = temp_dir();
        write_case_in(dir.path(), "placeholder", &[Edge::new(0, 1)]).expect("write succeeds");
        let case = PerformanceCase::external("twitter", AlgorithmSubset::Fastest.algorithms());
        let reports = bench_cases(
            dir.path(),
            &Executable::new("unused"),
            &[case],
            &["two_way_search"],
            BenchConfig::default(),
        )
        .expect("bench");
        assert!(reports.is_empty());
    }

    #[cfg(unix)]
    mod with_script {
        use super::*;

        use crate::test_helpers::{edge_counting_executable, fake_executable};

        #[test]
        fn check_counts_wrong_answers_and_failed_runs() {
            let dir = temp_dir();
            let exe = edge_counting_executable(&dir);
            for (id, edges) in [("0", vec![Edge::new(0, 1)]), ("1", vec![])] {
                write_case_in(dir.path(), id, &edges).expect("write succeeds");
                crate::cases::write_case_out(dir.path(), id, &exe, "naive_dfs")
                    .expect("ground truth");
            }
            fs::write(output_path(dir.path(), "1"), "7\n").expect("writable");

            let report = check_cases(dir.path(), &exe, &["naive_dfs", "sample_search"])
                .expect("check");
            assert_eq!((report.cases, report.runs), (2, 4));
            assert_eq!(report.failures.len(), 2);
            assert!(
                report
                    .failures
                    .iter()
                    .all(|failure| failure.case_id == "1"
                        && failure.reason == FailureReason::WrongAnswer)
            );

            let broken = fake_executable(&dir, "exit 1");
            let report = check_cases(dir.path(), &broken, &["naive_dfs"]).expect("check");
            assert!(
                report
                    .failures
                    .iter()
                    .all(|failure| matches!(failure.reason, FailureReason::RunFailed(_)))
            );
            assert_eq!(report.failures.len(), 2);
        }

        #[test]
        fn bench_reuses_cached_timings_until_inputs_change() {
            let dir = temp_dir();
            let exe = fake_executable(&dir, "exit 0");
            write_case_in(dir.path(), "tiny", &[Edge::new(0, 1)]).expect("write succeeds");
            let case = PerformanceCase::external("tiny", vec!["naive_dfs", "sample_search"]);
            let config = BenchConfig {
                runs: NonZeroU32::MIN,
                use_cache: true,
            };

            let first =
                bench_cases(dir.path(), &exe, &[case.clone()], &["naive_dfs"], config)
                    .expect("bench");
            assert_eq!(first.len(), 1);
            assert_eq!(first[0].rows.len(), 1);
            assert!(!first[0].rows[0].cached);

            let second =
                bench_cases(dir.path(), &exe, &[case.clone()], &["naive_dfs"], config)
                    .expect("bench");
            assert!(second[0].rows[0].cached);
            assert_eq!(second[0].rows[0].mean, first[0].rows[0].mean);

            let uncached = BenchConfig {
                use_cache: false,
                ..config
            };
            let third = bench_cases(dir.path(), &exe, &[case], &["naive_dfs"], uncached)
                .expect("bench");
            assert!(!third[0].rows[0].cached);
        }
    }
}
