//! Sampling primitives shared by the random constructions.

use std::collections::HashSet;

use rand::Rng;

use crate::{
    edge::Edge,
    error::{GraphError, Result},
    graph::GraphClass,
};

/// Draws an ordered pair of distinct vertices uniformly from `0..node_count`.
///
/// Both endpoints are drawn independently and the pair is redrawn until
/// they differ, so every ordered pair is equally likely. The expected
/// number of rounds is `n / (n - 1)`, at most two.
///
/// # Errors
/// Returns [`GraphError::TooFewNodes`] when `node_count < 2`.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use reachgen_core::random_distinct_pair;
///
/// let mut rng = SmallRng::seed_from_u64(3);
/// let edge = random_distinct_pair(&mut rng, 2)?;
/// assert_ne!(edge.source(), edge.target());
/// assert!(random_distinct_pair(&mut rng, 1).is_err());
/// # Ok::<(), reachgen_core::GraphError>(())
/// ```
pub fn random_distinct_pair<R>(rng: &mut R, node_count: usize) -> Result<Edge>
where
    R: Rng + ?Sized,
{
    if node_count < 2 {
        return Err(GraphError::TooFewNodes { node_count });
    }
    loop {
        let source = rng.gen_range(0..node_count);
        let target = rng.gen_range(0..node_count);
        if source != target {
            return Ok(Edge::new(source, target));
        }
    }
}

/// Number of ordered pairs of distinct vertices: `n·(n−1)`, saturating.
#[must_use]
pub const fn max_directed_edges(node_count: usize) -> usize {
    node_count.saturating_mul(node_count.saturating_sub(1))
}

/// Number of unordered pairs of distinct vertices: `n·(n−1)/2`, saturating.
#[must_use]
pub const fn max_forward_edges(node_count: usize) -> usize {
    // One of n and n-1 is even, so halving it first avoids the overflow.
    if node_count % 2 == 0 {
        (node_count / 2).saturating_mul(node_count.saturating_sub(1))
    } else {
        node_count.saturating_mul(node_count.saturating_sub(1) / 2)
    }
}

/// Rejects `requested` edges when it exceeds `max` for `class`.
pub(crate) fn ensure_capacity(
    class: GraphClass,
    node_count: usize,
    requested: usize,
    max: usize,
) -> Result<()> {
    if requested > max {
        return Err(GraphError::TooManyEdges {
            class,
            node_count,
            requested,
            max,
        });
    }
    Ok(())
}

/// Grows `edges` with draws from `draw` until it holds `target` edges.
///
/// `draw` returns `Ok(None)` to reject a sample. Callers check feasibility
/// beforehand: an unreachable `target` never terminates.
pub(crate) fn fill_distinct<R, F>(
    rng: &mut R,
    edges: &mut HashSet<Edge>,
    target: usize,
    mut draw: F,
) -> Result<()>
where
    R: Rng + ?Sized,
    F: FnMut(&mut R) -> Result<Option<Edge>>,
{
    while edges.len() < target {
        if let Some(edge) = draw(rng)? {
            edges.insert(edge);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{SeedableRng, rngs::SmallRng};
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(1)]
    fn distinct_pair_needs_two_vertices(#[case] node_count: usize) {
        let mut rng = SmallRng::seed_from_u64(0);
        let err = random_distinct_pair(&mut rng, node_count).expect_err("too few vertices");
        assert_eq!(err, GraphError::TooFewNodes { node_count });
    }

    #[test]
    fn distinct_pair_covers_every_ordered_pair() {
        let mut rng = SmallRng::seed_from_u64(17);
        let mut seen = HashSet::new();
        for _ in 0..2_000 {
            let edge = random_distinct_pair(&mut rng, 4).expect("four vertices suffice");
            assert!(!edge.is_loop());
            assert!(edge.max_endpoint() < 4);
            seen.insert(edge);
        }
        assert_eq!(seen.len(), max_directed_edges(4));
    }

    #[rstest]
    #[case(0, 0, 0)]
    #[case(1, 0, 0)]
    #[case(2, 2, 1)]
    #[case(5, 20, 10)]
    #[case(10, 90, 45)]
    fn edge_maxima(#[case] node_count: usize, #[case] directed: usize, #[case] forward: usize) {
        assert_eq!(max_directed_edges(node_count), directed);
        assert_eq!(max_forward_edges(node_count), forward);
    }

    #[test]
    fn forward_maximum_saturates() {
        assert_eq!(max_forward_edges(usize::MAX), usize::MAX);
    }

    #[test]
    fn ensure_capacity_reports_the_maximum() {
        let err = ensure_capacity(GraphClass::Uniform, 3, 7, 6).expect_err("7 > 6");
        assert_eq!(
            err,
            GraphError::TooManyEdges {
                class: GraphClass::Uniform,
                node_count: 3,
                requested: 7,
                max: 6,
            }
        );
        assert!(ensure_capacity(GraphClass::Uniform, 3, 6, 6).is_ok());
    }

    #[test]
    fn fill_distinct_skips_rejected_draws() {
        let mut rng = SmallRng::seed_from_u64(2);
        let mut edges = HashSet::new();
        fill_distinct(&mut rng, &mut edges, 3, |rng| {
            let edge = random_distinct_pair(rng, 6)?;
            Ok((edge.source() < edge.target()).then_some(edge))
        })
        .expect("six vertices suffice");
        assert_eq!(edges.len(), 3);
        assert!(edges.iter().all(|edge| edge.source() < edge.target()));
    }
}
