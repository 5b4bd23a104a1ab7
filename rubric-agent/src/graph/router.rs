//! Router trait: the decision step behind a conditional edge.

use async_trait::async_trait;

use crate::error::AgentError;

use super::GraphState;

/// Chooses the next hop of a conditional edge.
///
/// Returns a label that must be a key of the path map the router was registered
/// with (`StateGraph::add_conditional_edge`). The executor rejects any other label
/// with [`AgentError::Routing`]; it never falls back to a default path.
#[async_trait]
pub trait Router<S>: Send + Sync
where
    S: GraphState,
{
    /// Router id, used in logs and in `AgentError::Routing`.
    fn id(&self) -> &str;

    /// Inspects the state and returns a label.
    async fn route(&self, state: &S) -> Result<String, AgentError>;
}
