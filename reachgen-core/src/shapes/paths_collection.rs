//! Disjoint paths linked backwards, a hard case for incremental searches.

use rand::Rng;

use crate::{
    edge::Edge,
    error::{GraphError, Result},
    graph::{Construction, GraphClass},
    sampling::max_forward_edges,
};

/// `paths` disjoint paths of `path_length` vertices each. For every pair of
/// paths `p < q`, one edge runs from the last vertex of `q` to the first
/// vertex of `p`.
///
/// The construction is deterministic: path edges come first in path
/// order, followed by the inter-path edges.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PathsCollection {
    paths: usize,
    path_length: usize,
}

impl PathsCollection {
    /// Creates a path collection description.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyPathCollection`] when either parameter is
    /// zero and [`GraphError::Overflow`] when the sizes do not fit `usize`.
    pub fn new(paths: usize, path_length: usize) -> Result<Self> {
        if paths == 0 || path_length == 0 {
            return Err(GraphError::EmptyPathCollection { paths, path_length });
        }
        paths
            .checked_mul(path_length)
            .and_then(|node_count| (node_count - paths).checked_add(max_forward_edges(paths)))
            .ok_or(GraphError::Overflow {
                quantity: "path collection size",
            })?;
        Ok(Self { paths, path_length })
    }

    /// Number of paths.
    #[must_use]
    pub const fn paths(&self) -> usize {
        self.paths
    }

    /// Vertices per path.
    #[must_use]
    pub const fn path_length(&self) -> usize {
        self.path_length
    }

    const fn first_on_path(&self, path: usize) -> usize {
        path * self.path_length
    }

    const fn last_on_path(&self, path: usize) -> usize {
        (path + 1) * self.path_length - 1
    }
}

impl Construction for PathsCollection {
    const CLASS: GraphClass = GraphClass::PathsCollection;

    fn node_count(&self) -> usize {
        self.paths * self.path_length
    }

    fn edge_count(&self) -> usize {
        self.node_count() - self.paths + max_forward_edges(self.paths)
    }

    fn build_edges<R>(&self, _rng: &mut R) -> Result<Vec<Edge>>
    where
        R: Rng + ?Sized,
    {
        let mut edges = Vec::with_capacity(self.edge_count());
        for path in 0..self.paths {
            let (first, last) = (self.first_on_path(path), self.last_on_path(path));
            edges.extend((first..last).map(|vertex| Edge::new(vertex, vertex + 1)));
        }
        for earlier in 0..self.paths {
            for later in earlier + 1..self.paths {
                edges.push(Edge::new(
                    self.last_on_path(later),
                    self.first_on_path(earlier),
                ));
            }
        }
        Ok(edges)
    }
}
