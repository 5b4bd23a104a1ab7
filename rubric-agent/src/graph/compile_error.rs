//! Graph compilation error.
//!
//! Returned by `StateGraph::compile` when the node/edge table violates a
//! build-time invariant.

use thiserror::Error;

/// Error when compiling a state graph.
///
/// Validation ensures node ids are unique, every edge endpoint and path-map target
/// is a registered node or END, there is exactly one entry edge from START and
/// every node has exactly one outgoing edge. Cycles are allowed; the executor's
/// step budget bounds them at run time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompilationError {
    /// `add_node` was called twice with the same id.
    #[error("duplicate node id: {0}")]
    DuplicateNode(String),

    /// A node was registered under `START` or `END`.
    #[error("node id is reserved: {0}")]
    ReservedNodeId(String),

    /// A node id in an edge or path map was not registered via `add_node` (and is not START/END).
    #[error("node not found: {0}")]
    NodeNotFound(String),

    /// No static edge has from_id == START, or more than one such edge.
    #[error("graph must have exactly one edge from START")]
    MissingStart,

    /// A node has more than one outgoing edge.
    #[error("node has more than one outgoing edge: {0}")]
    DuplicateEdge(String),

    /// A registered node has no outgoing edge.
    #[error("node has no outgoing edge: {0}")]
    MissingEdge(String),

    /// Structurally invalid edge (out of END, into START, empty path map, ...).
    #[error("invalid edge: {0}")]
    InvalidEdge(String),
}
