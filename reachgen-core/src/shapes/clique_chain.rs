//! Forward cliques linked into a cycle through random representatives.

use rand::{Rng, seq::SliceRandom};

use crate::{
    edge::Edge,
    error::{GraphError, Result},
    graph::{Construction, GraphClass},
    sampling::max_forward_edges,
};

/// Partitions the vertices into `⌊n / clique_size⌋` contiguous groups and
/// makes each group a forward clique.
///
/// One random representative per group is chained forwards in group order
/// and a second, independently drawn representative is chained backwards.
/// Each clique is acyclic on its own, but the two chains close a cycle
/// through all groups. Trailing vertices that do not fill a group are
/// dropped, so `node_count()` is `groups · clique_size`.
///
/// # Examples
/// ```
/// use reachgen_core::{Construction, shapes::CliqueChain};
///
/// let chain = CliqueChain::new(9, 3)?;
/// assert_eq!(chain.groups(), 3);
/// assert_eq!(chain.edge_count(), 3 * 3 + 2 * 2);
/// # Ok::<(), reachgen_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CliqueChain {
    clique_size: usize,
    groups: usize,
}

impl CliqueChain {
    /// Creates a clique chain description over up to `node_count` vertices.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidCliqueSize`] unless
    /// `1 ≤ clique_size ≤ node_count`.
    pub fn new(node_count: usize, clique_size: usize) -> Result<Self> {
        if clique_size == 0 || clique_size > node_count {
            return Err(GraphError::InvalidCliqueSize {
                clique_size,
                node_count,
            });
        }
        let groups = node_count / clique_size;
        // Reject shapes whose edge count cannot be represented.
        max_forward_edges(clique_size)
            .checked_mul(groups)
            .and_then(|intra| intra.checked_add(2 * (groups - 1)))
            .ok_or(GraphError::Overflow {
                quantity: "clique chain edge count",
            })?;
        Ok(Self {
            clique_size,
            groups,
        })
    }

    /// Vertices per clique.
    #[must_use]
    pub const fn clique_size(&self) -> usize {
        self.clique_size
    }

    /// Number of cliques.
    #[must_use]
    pub const fn groups(&self) -> usize {
        self.groups
    }

    fn intra_clique_edges(&self) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(self.groups * max_forward_edges(self.clique_size));
        for start in (0..self.node_count()).step_by(self.clique_size) {
            let end = start + self.clique_size;
            for source in start..end {
                edges.extend((source + 1..end).map(|target| Edge::new(source, target)));
            }
        }
        edges
    }

    fn one_vertex_per_clique<R>(&self, rng: &mut R) -> Vec<usize>
    where
        R: Rng + ?Sized,
    {
        (0..self.groups)
            .map(|group| {
                let start = group * self.clique_size;
                rng.gen_range(start..start + self.clique_size)
            })
            .collect()
    }
}

fn link_consecutive<'a>(
    vertices: impl Iterator<Item = &'a usize> + Clone,
) -> impl Iterator<Item = Edge> {
    vertices
        .clone()
        .zip(vertices.skip(1))
        .map(|(&source, &target)| Edge::new(source, target))
}

impl Construction for CliqueChain {
    const CLASS: GraphClass = GraphClass::CliqueChain;

    fn node_count(&self) -> usize {
        self.groups * self.clique_size
    }

    fn edge_count(&self) -> usize {
        self.groups * max_forward_edges(self.clique_size) + 2 * (self.groups - 1)
    }

    fn build_edges<R>(&self, rng: &mut R) -> Result<Vec<Edge>>
    where
        R: Rng + ?Sized,
    {
        let mut edges = self.intra_clique_edges();
        edges.shuffle(rng);

        let forward = self.one_vertex_per_clique(rng);
        let backward = self.one_vertex_per_clique(rng);
        let mut links: Vec<Edge> = link_consecutive(forward.iter())
            .chain(link_consecutive(backward.iter().rev()))
            .collect();
        links.shuffle(rng);
        edges.append(&mut links);

        if edges.len() != self.edge_count() {
            return Err(GraphError::EdgeCountMismatch {
                class: Self::CLASS,
                expected: self.edge_count(),
                produced: edges.len(),
            });
        }
        Ok(edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{SeedableRng, rngs::SmallRng};
    use rstest::rstest;

    use crate::test_utils::assert_graph;

    #[test]
    fn nine_vertices_in_triangles() {
        let chain = CliqueChain::new(9, 3).expect("valid shape");
        assert_eq!(chain.node_count(), 9);
        assert_eq!(chain.edge_count(), 13);

        let edges = chain
            .build_edges(&mut SmallRng::seed_from_u64(12))
            .expect("build");
        assert_graph(&edges, 9, 13);

        let same_group = |edge: &&Edge| edge.source() / 3 == edge.target() / 3;
        let intra: Vec<_> = edges.iter().filter(same_group).collect();
        assert_eq!(intra.len(), 9);
        assert!(intra.iter().all(|edge| edge.source() < edge.target()));

        let links: Vec<_> = edges.iter().filter(|edge| !same_group(edge)).collect();
        let forward = links.iter().filter(|edge| edge.source() < edge.target()).count();
        assert_eq!((links.len(), forward), (4, 2));
        for link in links {
            assert_eq!((link.source() / 3).abs_diff(link.target() / 3), 1);
        }
    }

    #[rstest]
    #[case(10, 3, 9)]
    #[case(7, 7, 7)]
    #[case(5, 1, 5)]
    fn trailing_vertices_are_dropped(
        #[case] requested: usize,
        #[case] clique_size: usize,
        #[case] node_count: usize,
    ) {
        let chain = CliqueChain::new(requested, clique_size).expect("valid shape");
        assert_eq!(chain.node_count(), node_count);
        let edges = chain
            .build_edges(&mut SmallRng::seed_from_u64(1))
            .expect("build");
        assert_graph(&edges, node_count, chain.edge_count());
    }

    #[rstest]
    #[case(4, 0)]
    #[case(4, 5)]
    fn rejects_invalid_clique_sizes(#[case] node_count: usize, #[case] clique_size: usize) {
        assert_eq!(
            CliqueChain::new(node_count, clique_size),
            Err(GraphError::InvalidCliqueSize {
                clique_size,
                node_count,
            })
        );
    }
}
