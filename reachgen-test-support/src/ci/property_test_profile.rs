//! Proptest run profile resolved from the environment.
//!
//! Property suites across the workspace read the same two variables, so a
//! CI job can raise case counts or enable forking in one place.

use std::{env, num::ParseIntError};

/// Environment variable overriding the number of proptest cases.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable enabling forked proptest execution.
pub const REACHGEN_PBT_FORK_ENV_KEY: &str = "REACHGEN_PBT_FORK";

/// Case count and fork mode for one property suite.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Resolves the profile, falling back to the given defaults for unset
    /// or malformed variables. Malformed values are logged and ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use reachgen_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: resolve(PROGTEST_CASES_ENV_KEY, default_cases, parse_cases),
            fork: resolve(REACHGEN_PBT_FORK_ENV_KEY, default_fork, parse_flag),
        }
    }

    /// Cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether cases run in forked subprocesses.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }
}

/// Why an override was ignored.
#[derive(Debug, Eq, PartialEq)]
enum OverrideError {
    NotANumber(ParseIntError),
    ZeroCases,
    NotAFlag,
}

impl std::fmt::Display for OverrideError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotANumber(error) => write!(f, "not a case count: {error}"),
            Self::ZeroCases => f.write_str("case count must be positive"),
            Self::NotAFlag => f.write_str("expected true/false, 1/0, yes/no or on/off"),
        }
    }
}

fn resolve<T>(
    key: &'static str,
    default: T,
    parse: fn(&str) -> Result<T, OverrideError>,
) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            %reason,
            "ignoring malformed property-test override",
        );
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, OverrideError> {
    match raw.trim().parse::<u32>().map_err(OverrideError::NotANumber)? {
        0 => Err(OverrideError::ZeroCases),
        cases => Ok(cases),
    }
}

fn parse_flag(raw: &str) -> Result<bool, OverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::NotAFlag),
    }
}
