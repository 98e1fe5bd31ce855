//! Grid-shaped layered graphs with tunable contra-flow.

use std::collections::HashSet;

use rand::{Rng, seq::SliceRandom};

use crate::{
    edge::{Edge, shuffle_canonical},
    error::{GraphError, Result},
    graph::{Construction, GraphClass},
    sampling::{ensure_capacity, fill_distinct, random_distinct_pair},
};

/// Direction of a sampled cross-row edge.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Flow {
    Downward,
    Upward,
}

/// Vertices on a `rows × columns` grid; vertex `v` sits in row
/// `v / columns`.
///
/// Every row is a left-to-right path. On top of that, `downward_edges`
/// distinct edges run from a lower-numbered row to a higher one and
/// `upward_edges` run the other way. Same-row draws are rejected.
///
/// # Examples
/// ```
/// use reachgen_core::{Construction, shapes::LayeredGraph};
///
/// let grid = LayeredGraph::new(3, 4, 5, 2)?;
/// assert_eq!(grid.node_count(), 12);
/// assert_eq!(grid.edge_count(), 3 * 3 + 5 + 2);
/// # Ok::<(), reachgen_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LayeredGraph {
    rows: usize,
    columns: usize,
    downward_edges: usize,
    upward_edges: usize,
}

impl LayeredGraph {
    /// Creates a layered graph description.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGrid`] for a zero dimension and
    /// [`GraphError::TooManyEdges`] when either direction asks for more
    /// than [`LayeredGraph::max_edges_per_direction`] edges.
    pub fn new(
        rows: usize,
        columns: usize,
        downward_edges: usize,
        upward_edges: usize,
    ) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(GraphError::EmptyGrid { rows, columns });
        }
        let node_count = rows.checked_mul(columns).ok_or(GraphError::Overflow {
            quantity: "layered vertex count",
        })?;
        let max = Self::max_edges_per_direction(rows, columns);
        ensure_capacity(Self::CLASS, node_count, downward_edges, max)?;
        ensure_capacity(Self::CLASS, node_count, upward_edges, max)?;
        Ok(Self {
            rows,
            columns,
            downward_edges,
            upward_edges,
        })
    }

    /// Number of vertex pairs lying in different rows: `n·(n − columns)/2`.
    #[must_use]
    pub const fn max_edges_per_direction(rows: usize, columns: usize) -> usize {
        let node_count = rows.saturating_mul(columns);
        // Each vertex sees n - columns vertices outside its own row.
        node_count.saturating_mul(node_count.saturating_sub(columns)) / 2
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Number of sampled edges pointing to a later row.
    #[must_use]
    pub const fn downward_edges(&self) -> usize {
        self.downward_edges
    }

    /// Number of sampled edges pointing to an earlier row.
    #[must_use]
    pub const fn upward_edges(&self) -> usize {
        self.upward_edges
    }

    /// Row holding `vertex`.
    #[must_use]
    pub const fn row_of(&self, vertex: usize) -> usize {
        vertex / self.columns
    }

    fn horizontal_edges(&self) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(self.rows * (self.columns - 1));
        for row in 0..self.rows {
            let first = row * self.columns;
            let last = first + self.columns - 1;
            edges.extend((first..last).map(|vertex| Edge::new(vertex, vertex + 1)));
        }
        edges
    }

    fn cross_row_edges<R>(&self, rng: &mut R, count: usize, flow: Flow) -> Result<Vec<Edge>>
    where
        R: Rng + ?Sized,
    {
        let node_count = self.node_count();
        let mut edges = HashSet::with_capacity(count);
        fill_distinct(rng, &mut edges, count, |rng| {
            let pair = random_distinct_pair(rng, node_count)?;
            if self.row_of(pair.source()) == self.row_of(pair.target()) {
                return Ok(None);
            }
            // Across rows, index order and row order agree.
            Ok(Some(match flow {
                Flow::Downward => pair.forward(),
                Flow::Upward => pair.backward(),
            }))
        })?;
        Ok(shuffle_canonical(edges, rng))
    }
}

impl Construction for LayeredGraph {
    const CLASS: GraphClass = GraphClass::Layered;

    fn node_count(&self) -> usize {
        self.rows * self.columns
    }

    fn edge_count(&self) -> usize {
        self.rows * (self.columns - 1) + self.downward_edges + self.upward_edges
    }

    fn build_edges<R>(&self, rng: &mut R) -> Result<Vec<Edge>>
    where
        R: Rng + ?Sized,
    {
        let mut edges = self.horizontal_edges();
        edges.shuffle(rng);
        edges.extend(self.cross_row_edges(rng, self.downward_edges, Flow::Downward)?);
        edges.extend(self.cross_row_edges(rng, self.upward_edges, Flow::Upward)?);
        Ok(edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{SeedableRng, rngs::SmallRng};
    use rstest::rstest;

    use crate::test_utils::assert_graph;

    #[rstest]
    #[case(3, 4, 6, 2)]
    #[case(5, 5, 40, 0)]
    #[case(2, 3, 9, 9)]
    #[case(1, 6, 0, 0)]
    fn edges_respect_row_directions(
        #[case] rows: usize,
        #[case] columns: usize,
        #[case] downward: usize,
        #[case] upward: usize,
    ) {
        let grid = LayeredGraph::new(rows, columns, downward, upward).expect("feasible");
        let edges = grid
            .build_edges(&mut SmallRng::seed_from_u64(30))
            .expect("build");
        assert_graph(&edges, rows * columns, grid.edge_count());

        let horizontal = rows * (columns - 1);
        let (flat, rest) = edges.split_at(horizontal);
        let (down, up) = rest.split_at(downward);
        for edge in flat {
            assert_eq!(edge.target(), edge.source() + 1);
            assert_eq!(grid.row_of(edge.source()), grid.row_of(edge.target()));
        }
        for edge in down {
            assert!(grid.row_of(edge.source()) < grid.row_of(edge.target()));
        }
        for edge in up {
            assert!(grid.row_of(edge.source()) > grid.row_of(edge.target()));
        }
        assert_eq!(up.len(), upward);
    }

    #[rstest]
    #[case(2, 3, 9)]
    #[case(4, 1, 6)]
    #[case(1, 9, 0)]
    #[case(0, 3, 0)]
    #[case(3, 0, 0)]
    fn cross_row_maximum(#[case] rows: usize, #[case] columns: usize, #[case] max: usize) {
        assert_eq!(LayeredGraph::max_edges_per_direction(rows, columns), max);
    }

    #[test]
    fn rejects_empty_grids_and_overfull_directions() {
        assert_eq!(
            LayeredGraph::new(0, 3, 0, 0),
            Err(GraphError::EmptyGrid {
                rows: 0,
                columns: 3,
            })
        );
        assert!(matches!(
            LayeredGraph::new(1, 5, 1, 0),
            Err(GraphError::TooManyEdges { max: 0, .. })
        ));
    }
}
