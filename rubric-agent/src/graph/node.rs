//! Graph node trait: one processing step in a StateGraph.

use async_trait::async_trait;

use crate::error::AgentError;

use super::GraphState;

/// One step in a graph: reads the state, returns a partial update.
///
/// The node gets the state by shared reference, so the only way it can change the
/// run is through the returned update, which the executor merges. Per-node
/// configuration (e.g. a generation backend) is injected at construction; the
/// same instance is reused for every run.
///
/// **Interaction**: Registered via `StateGraph::add_node`; called by
/// `CompiledStateGraph::invoke`, optionally wrapped by a `NodeMiddleware`.
#[async_trait]
pub trait Node<S>: Send + Sync
where
    S: GraphState,
{
    /// Node id (e.g. `"rubric_generator"`). Must be unique within a graph.
    fn id(&self) -> &str;

    /// Runs the step. Errors abort the whole run.
    async fn run(&self, state: &S) -> Result<S::Update, AgentError>;
}
