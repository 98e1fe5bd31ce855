//! Reachability algorithm names understood by the executable under test.
//!
//! The performance catalogue times each case with a subset of these
//! names; [`AlgorithmSubset`] spells the subsets out once so catalogue
//! entries stay readable.

use crate::error::CliError;

/// Every algorithm the executable accepts, in its canonical order.
pub const ALGORITHMS: [&str; 12] = [
    "naive_dfs",
    "naive_one_way_search",
    "one_way_search",
    "two_way_search",
    "limited_search",
    "compatible_search",
    "soft_threshold_search_basic_list",
    "soft_threshold_search_treap",
    "soft_threshold_search",
    "topological_search",
    "sample_search",
    "sparsified_sample_search",
];

/// Algorithm whose answers are taken as the expected outputs.
pub const GROUND_TRUTH: &str = "naive_dfs";

const FASTEST: [&str; 5] = [
    "two_way_search",
    "compatible_search",
    "soft_threshold_search",
    "sparsified_sample_search",
    "sample_search",
];

/// Named algorithm subsets used by the performance catalogue.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AlgorithmSubset {
    /// Everything except the soft-threshold data-structure variants.
    Default,
    /// [`AlgorithmSubset::Default`] without the naive DFS.
    NonTrivial,
    /// The five fastest searches.
    Fastest,
    /// [`AlgorithmSubset::Fastest`] without either sampling search.
    FastestWithoutSample,
    /// [`AlgorithmSubset::Default`] without the topological search.
    OptimalMemory,
    /// [`AlgorithmSubset::OptimalMemory`] without the naive DFS.
    SemifastOptimalMemory,
    /// [`AlgorithmSubset::NonTrivial`] without the naive one-way search.
    DenseDagEnhanced,
    /// [`AlgorithmSubset::DenseDagEnhanced`] without the one-way search.
    DenseDag,
    /// [`AlgorithmSubset::SemifastOptimalMemory`] without the two-way search.
    SparseDag,
    /// [`AlgorithmSubset::SparseDag`] without the limited search.
    SparseDagNarrowed,
    /// [`AlgorithmSubset::Fastest`] without the sample search.
    MixedDegrees,
    /// [`AlgorithmSubset::SemifastOptimalMemory`] without the naive one-way
    /// search.
    PathsCollectionEnhanced,
    /// [`AlgorithmSubset::PathsCollectionEnhanced`] without the limited
    /// search.
    PathsCollection,
    /// [`AlgorithmSubset::Fastest`] plus the limited search.
    CliquesCollection,
}

impl AlgorithmSubset {
    /// Algorithm names in the subset.
    ///
    /// # Examples
    /// ```
    /// use reachgen_cli::algorithms::AlgorithmSubset;
    ///
    /// let names = AlgorithmSubset::FastestWithoutSample.algorithms();
    /// assert_eq!(names, ["two_way_search", "compatible_search", "soft_threshold_search"]);
    /// ```
    #[must_use]
    pub fn algorithms(self) -> Vec<&'static str> {
        match self {
            Self::Default => ALGORITHMS
                .into_iter()
                .filter(|name| {
                    !matches!(
                        *name,
                        "soft_threshold_search_basic_list" | "soft_threshold_search_treap"
                    )
                })
                .collect(),
            Self::NonTrivial => Self::Default.without(&["naive_dfs"]),
            Self::Fastest => FASTEST.to_vec(),
            Self::FastestWithoutSample => {
                Self::Fastest.without(&["sample_search", "sparsified_sample_search"])
            }
            Self::OptimalMemory => Self::Default.without(&["topological_search"]),
            Self::SemifastOptimalMemory => Self::OptimalMemory.without(&["naive_dfs"]),
            Self::DenseDagEnhanced => Self::NonTrivial.without(&["naive_one_way_search"]),
            Self::DenseDag => Self::DenseDagEnhanced.without(&["one_way_search"]),
            Self::SparseDag => Self::SemifastOptimalMemory.without(&["two_way_search"]),
            Self::SparseDagNarrowed => Self::SparseDag.without(&["limited_search"]),
            Self::MixedDegrees => Self::Fastest.without(&["sample_search"]),
            Self::PathsCollectionEnhanced => {
                Self::SemifastOptimalMemory.without(&["naive_one_way_search"])
            }
            Self::PathsCollection => Self::PathsCollectionEnhanced.without(&["limited_search"]),
            Self::CliquesCollection => Self::Fastest.with(&["limited_search"]),
        }
    }

    /// The subset with `extra` appended.
    #[must_use]
    pub fn with(self, extra: &[&'static str]) -> Vec<&'static str> {
        let mut names = self.algorithms();
        names.extend_from_slice(extra);
        names
    }

    fn without(self, excluded: &[&str]) -> Vec<&'static str> {
        self.algorithms()
            .into_iter()
            .filter(|name| !excluded.contains(name))
            .collect()
    }
}

/// Validates requested algorithm names, defaulting to [`ALGORITHMS`].
///
/// # Errors
/// Returns [`CliError::UnknownAlgorithm`] for the first name not in
/// [`ALGORITHMS`].
///
/// # Examples
/// ```
/// use reachgen_cli::algorithms::{ALGORITHMS, resolve};
///
/// assert_eq!(resolve(&[])?.len(), ALGORITHMS.len());
/// assert_eq!(resolve(&["sample_search".to_owned()])?, ["sample_search"]);
/// assert!(resolve(&["bfs".to_owned()]).is_err());
/// # Ok::<(), reachgen_cli::error::CliError>(())
/// ```
pub fn resolve(requested: &[String]) -> Result<Vec<&'static str>, CliError> {
    if requested.is_empty() {
        return Ok(ALGORITHMS.to_vec());
    }
    requested
        .iter()
        .map(|name| {
            ALGORITHMS
                .into_iter()
                .find(|known| *known == name.as_str())
                .ok_or_else(|| CliError::UnknownAlgorithm {
                    name: name.clone(),
                    known: ALGORITHMS.join(", "),
                })
        })
        .collect()
}
