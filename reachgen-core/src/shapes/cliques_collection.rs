//! A main clique plus a chain of anchor cliques pointing back at it.

use rand::Rng;

use crate::{
    edge::Edge,
    error::{GraphError, Result},
    graph::{Construction, GraphClass},
};

/// Main clique on `[0, main)` followed by anchor cliques of `anchor`
/// vertices each.
///
/// Sizes follow from the targets: `main = ⌊√m / 2⌋` and
/// `anchor = ⌈√(min(n^(2/3), √m)) + 1⌉`. Anchor cliques are appended while
/// their first vertex is below the target `n` and fewer than `⌊m/2⌋` edges
/// exist. Consecutive anchors are joined by `anchor` edges leaving the
/// last vertex of the earlier one, and the first vertex of every anchor
/// after the first points at vertex 0.
///
/// The targets only steer the construction. The real vertex count is the
/// largest endpoint plus one and the real edge count is whatever was
/// built, so the edges are produced eagerly in [`CliquesCollection::new`].
///
/// # Examples
/// ```
/// use reachgen_core::{Construction, shapes::CliquesCollection};
///
/// let collection = CliquesCollection::new(20, 64)?;
/// assert_eq!(collection.main_clique_size(), 4);
/// assert_eq!(collection.anchors(), 4);
/// assert_eq!((collection.node_count(), collection.edge_count()), (20, 45));
/// # Ok::<(), reachgen_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CliquesCollection {
    main_clique_size: usize,
    anchor_clique_size: usize,
    anchors: usize,
    node_count: usize,
    edges: Vec<Edge>,
}

impl CliquesCollection {
    /// Builds a clique collection steered by the target sizes.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyCliqueCollection`] when the targets are
    /// too small to produce a single edge.
    pub fn new(target_nodes: usize, target_edges: usize) -> Result<Self> {
        let main_clique_size = target_edges.isqrt() / 2;
        let anchor_clique_size = anchor_clique_size(target_nodes, target_edges);
        let first_in_anchor = |anchor: usize| main_clique_size + anchor * anchor_clique_size;

        let mut edges = Vec::new();
        push_clique(&mut edges, 0, main_clique_size);
        let mut anchors = 0;
        while first_in_anchor(anchors) < target_nodes && edges.len() < target_edges / 2 {
            let start = first_in_anchor(anchors);
            push_clique(&mut edges, start, start + anchor_clique_size);
            anchors += 1;
        }

        for anchor in 0..anchors.saturating_sub(1) {
            let last = first_in_anchor(anchor + 1) - 1;
            let links = (1..=anchor_clique_size).rev();
            edges.extend(links.map(|offset| Edge::new(last, last + offset)));
        }
        edges.extend((1..anchors).map(|anchor| Edge::new(first_in_anchor(anchor), 0)));

        let Some(max_endpoint) = edges.iter().map(|edge| edge.max_endpoint()).max() else {
            return Err(GraphError::EmptyCliqueCollection {
                node_count: target_nodes,
                edge_count: target_edges,
            });
        };
        Ok(Self {
            main_clique_size,
            anchor_clique_size,
            anchors,
            node_count: max_endpoint + 1,
            edges,
        })
    }

    /// Vertices in the main clique.
    #[must_use]
    pub const fn main_clique_size(&self) -> usize {
        self.main_clique_size
    }

    /// Vertices in each anchor clique.
    #[must_use]
    pub const fn anchor_clique_size(&self) -> usize {
        self.anchor_clique_size
    }

    /// Number of anchor cliques built.
    #[must_use]
    pub const fn anchors(&self) -> usize {
        self.anchors
    }

    /// Edges in construction order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

fn anchor_clique_size(target_nodes: usize, target_edges: usize) -> usize {
    let delta = (target_nodes as f64)
        .powf(2.0 / 3.0)
        .min((target_edges as f64).sqrt());
    (delta.sqrt() + 1.0).ceil() as usize
}

/// Appends every forward pair of `[start, end)`, highest source first.
fn push_clique(edges: &mut Vec<Edge>, start: usize, end: usize) {
    for source in (start..end).rev() {
        edges.extend((source + 1..end).map(|target| Edge::new(source, target)));
    }
}

impl Construction for CliquesCollection {
    const CLASS: GraphClass = GraphClass::CliquesCollection;

    fn node_count(&self) -> usize {
        self.node_count
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn build_edges<R>(&self, _rng: &mut R) -> Result<Vec<Edge>>
    where
        R: Rng + ?Sized,
    {
        Ok(self.edges.clone())
    }
}
