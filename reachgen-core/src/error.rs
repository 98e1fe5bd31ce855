//! Error types for the reachgen core library.
//!
//! Defines the error enum exposed by the public API, its stable codes, and a
//! convenient result alias.

use std::fmt;

use rand::distributions::WeightedError;
use thiserror::Error;

use crate::{edge::Edge, graph::GraphClass};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced when configuring or building a graph.
///
/// Infeasible parameters are rejected when a construction is created, so
/// the sampling loops that follow always terminate. Nothing in the crate
/// retries: choosing different parameters is the caller's job.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// Distinct-pair sampling needs at least two vertices.
    #[error("pair sampling needs at least two vertices (got {node_count})")]
    TooFewNodes {
        /// Vertex count supplied to the sampler.
        node_count: usize,
    },
    /// The requested edge count exceeds what the class can hold.
    #[error(
        "a {class} graph on {node_count} vertices holds at most {max} edges, but {requested} were requested"
    )]
    TooManyEdges {
        /// Construction that rejected the request.
        class: GraphClass,
        /// Vertex count the maximum was computed for.
        node_count: usize,
        /// Edge count asked for by the caller.
        requested: usize,
        /// Largest feasible edge count.
        max: usize,
    },
    /// Clique size must be positive and fit inside the vertex count.
    #[error("clique size must be between 1 and {node_count} (got {clique_size})")]
    InvalidCliqueSize {
        /// Requested clique size.
        clique_size: usize,
        /// Vertex count being partitioned.
        node_count: usize,
    },
    /// Layered graphs need at least one row and one column.
    #[error("a layered graph needs at least one row and one column (got {rows}x{columns})")]
    EmptyGrid {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        columns: usize,
    },
    /// More heavy vertices were requested than the graph has.
    #[error("{heavy_nodes} heavy vertices requested but the graph has only {node_count}")]
    TooManyHeavyNodes {
        /// Requested heavy vertex count.
        heavy_nodes: usize,
        /// Vertex count of the graph.
        node_count: usize,
    },
    /// Heavy vertices must carry a positive weight.
    #[error("heavy vertices need a positive weight (got 0 for {heavy_nodes} vertices)")]
    ZeroHeavyWeight {
        /// Requested heavy vertex count.
        heavy_nodes: usize,
    },
    /// The weighted endpoint distribution could not be built.
    #[error("invalid endpoint weights: {error}")]
    InvalidWeights {
        /// Failure reported by the weighted sampler.
        #[source]
        error: WeightedError,
    },
    /// Oversampled endpoint draws did not yield enough unique edges.
    #[error("oversampling produced {produced} unique edges but {requested} were requested")]
    InsufficientOversampling {
        /// Edge count asked for by the caller.
        requested: usize,
        /// Unique non-loop edges actually found.
        produced: usize,
    },
    /// Path collections need at least one path with at least one vertex.
    #[error("a path collection needs at least one non-empty path (got {paths} of length {path_length})")]
    EmptyPathCollection {
        /// Requested number of paths.
        paths: usize,
        /// Requested vertices per path.
        path_length: usize,
    },
    /// The clique collection parameters produced no edges at all.
    #[error("a clique collection targeting {node_count} vertices and {edge_count} edges builds no edges")]
    EmptyCliqueCollection {
        /// Target vertex count supplied by the caller.
        node_count: usize,
        /// Target edge count supplied by the caller.
        edge_count: usize,
    },
    /// A construction emitted a different number of edges than its formula.
    #[error("{class} construction produced {produced} edges but its formula requires {expected}")]
    EdgeCountMismatch {
        /// Construction whose postcondition failed.
        class: GraphClass,
        /// Edge count derived from the shape parameters.
        expected: usize,
        /// Edge count actually produced.
        produced: usize,
    },
    /// An edge referenced a vertex outside the graph.
    #[error("edge `{edge}` references a vertex outside 0..{node_count}")]
    EdgeOutOfRange {
        /// Offending edge.
        edge: Edge,
        /// Vertex count of the graph.
        node_count: usize,
    },
    /// Sampling bounds were inverted or not finite.
    #[error("invalid bounds for {name}: [{min}, {max}]")]
    InvalidBounds {
        /// Parameter the bounds apply to.
        name: &'static str,
        /// Rendered lower bound.
        min: String,
        /// Rendered upper bound.
        max: String,
    },
    /// A size computation overflowed `usize`.
    #[error("arithmetic overflow while computing {quantity}")]
    Overflow {
        /// Quantity being computed.
        quantity: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// Distinct-pair sampling needs at least two vertices.
        TooFewNodes => TooFewNodes { .. } => "GRAPH_TOO_FEW_NODES",
        /// The requested edge count exceeds what the class can hold.
        TooManyEdges => TooManyEdges { .. } => "GRAPH_TOO_MANY_EDGES",
        /// Clique size must be positive and fit inside the vertex count.
        InvalidCliqueSize => InvalidCliqueSize { .. } => "GRAPH_INVALID_CLIQUE_SIZE",
        /// Layered graphs need at least one row and one column.
        EmptyGrid => EmptyGrid { .. } => "GRAPH_EMPTY_GRID",
        /// More heavy vertices were requested than the graph has.
        TooManyHeavyNodes => TooManyHeavyNodes { .. } => "GRAPH_TOO_MANY_HEAVY_NODES",
        /// Heavy vertices must carry a positive weight.
        ZeroHeavyWeight => ZeroHeavyWeight { .. } => "GRAPH_ZERO_HEAVY_WEIGHT",
        /// The weighted endpoint distribution could not be built.
        InvalidWeights => InvalidWeights { .. } => "GRAPH_INVALID_WEIGHTS",
        /// Oversampled endpoint draws did not yield enough unique edges.
        InsufficientOversampling => InsufficientOversampling { .. } => "GRAPH_INSUFFICIENT_OVERSAMPLING",
        /// Path collections need at least one non-empty path.
        EmptyPathCollection => EmptyPathCollection { .. } => "GRAPH_EMPTY_PATH_COLLECTION",
        /// The clique collection parameters produced no edges.
        EmptyCliqueCollection => EmptyCliqueCollection { .. } => "GRAPH_EMPTY_CLIQUE_COLLECTION",
        /// A construction missed its exact edge count.
        EdgeCountMismatch => EdgeCountMismatch { .. } => "GRAPH_EDGE_COUNT_MISMATCH",
        /// An edge referenced a vertex outside the graph.
        EdgeOutOfRange => EdgeOutOfRange { .. } => "GRAPH_EDGE_OUT_OF_RANGE",
        /// Sampling bounds were inverted or not finite.
        InvalidBounds => InvalidBounds { .. } => "GRAPH_INVALID_BOUNDS",
        /// A size computation overflowed.
        Overflow => Overflow { .. } => "GRAPH_OVERFLOW",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
