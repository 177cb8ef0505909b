//! Error types.
//!
//! Three layers mirror where a request can go wrong:
//!
//! - [`ValidationError`]: the graph snapshot itself is malformed.
//! - [`ModelError`]: building the matrix representation hit a dangling
//!   reference that validation should already have rejected.
//! - [`SearchError`]: everything the [`engine`](crate::engine) surface can
//!   report back to a caller.
//!
//! An unreachable target is not an error anywhere in this crate; solvers
//! report it as an empty path with no distance.

use thiserror::Error;

/// First well-formedness violation found in a graph snapshot.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Fewer than two nodes.
    #[error("graph must contain at least 2 nodes, found {found}")]
    TooFewNodes { found: usize },

    /// Two nodes share an identifier.
    #[error("node ids must be unique, '{id}' appears more than once")]
    DuplicateNodeId { id: String },

    /// An edge endpoint does not name any node.
    #[error("node '{id}' referenced by an edge does not exist")]
    DanglingEdge { id: String },

    /// An edge weight is zero, negative, or not a number.
    #[error("edge {from} - {to} must have a positive weight, got {weight}")]
    NonPositiveWeight {
        from: String,
        to: String,
        weight: f64,
    },

    /// Some node cannot be reached from the first one.
    #[error("graph must be connected, {reached} of {total} nodes reachable")]
    Disconnected { reached: usize, total: usize },
}

/// Failure while deriving the matrix representation of a graph.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("edge references unknown node '{0}'")]
    UnknownNodeReference(String),

    #[error("edge {from} - {to} has non-positive weight {weight}")]
    NonPositiveWeight {
        from: String,
        to: String,
        weight: f64,
    },
}

/// Errors returned by the [`engine`](crate::engine) functions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// Start or end id is not a node of the graph.
    #[error("node '{0}' does not exist")]
    UnknownIdentifier(String),

    #[error("invalid graph: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Model(#[from] ModelError),

    /// Solver or generator parameters failed their `validate()` check.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// The snapshot exceeds the configured node or edge cap.
    #[error("graph has {actual} {what}, maximum is {limit}")]
    LimitExceeded {
        what: &'static str,
        actual: usize,
        limit: usize,
    },
}
