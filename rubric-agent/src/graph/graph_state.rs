//! State contract for graphs: a record plus its partial-update type.

use std::fmt::Debug;

/// State threaded through a graph.
///
/// Nodes never return a whole new state; they return an [`Update`](GraphState::Update)
/// that the executor folds in with [`merge`](GraphState::merge). Implementations
/// must overwrite exactly the keys present in the update and leave every other
/// field untouched (last writer wins per key). No validation happens here.
pub trait GraphState: Clone + Send + Sync + Debug + 'static {
    /// Partial update produced by a node.
    type Update: Clone + Send + Sync + Debug + 'static;

    /// Folds `update` into `self`.
    fn merge(&mut self, update: Self::Update);
}
