//! Streaming types for graph runs.
//!
//! Defines stream modes and events emitted by `CompiledStateGraph::stream`
//! after each node completes, plus a terminal error event when the run aborts.

use std::fmt::Debug;

use crate::error::AgentError;

/// Stream mode selector: which kinds of events to emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StreamMode {
    /// Emit the full state after each node completes.
    Values,
    /// Emit the node id together with the state after that node.
    Updates,
}

/// Event emitted while running a graph.
#[derive(Clone, Debug)]
pub enum StreamEvent<S>
where
    S: Clone + Send + Sync + Debug + 'static,
{
    /// Full state snapshot after a node finishes.
    Values(S),
    /// Node id and the state after that node.
    Updates { node_id: String, state: S },
    /// The run aborted; no further events follow.
    Error(AgentError),
}
