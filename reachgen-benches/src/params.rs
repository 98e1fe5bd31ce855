//! Benchmark parameter types.

use std::fmt;

use reachgen_core::GraphClass;

/// Parameters for one edge-generation benchmark run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GenerationBenchParams {
    /// Construction being measured.
    pub class: GraphClass,
    /// Vertex count the workload was sized for.
    pub node_count: usize,
    /// Whether the generated edges are relabeled.
    pub relabel: bool,
}

impl fmt::Display for GenerationBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/n={}", self.class, self.node_count)?;
        if self.relabel {
            f.write_str(",relabel")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(false, "layered/n=1000")]
    #[case(true, "layered/n=1000,relabel")]
    fn ids_name_the_workload(#[case] relabel: bool, #[case] expected: &str) {
        let params = GenerationBenchParams {
            class: GraphClass::Layered,
            node_count: 1_000,
            relabel,
        };
        assert_eq!(params.to_string(), expected);
    }
}
