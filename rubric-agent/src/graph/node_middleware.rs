//! Node middleware: wraps every node call made by the executor.
//!
//! Set with `StateGraph::with_middleware` before compiling. The compiled graph
//! calls `around_run` for each node; the middleware must call `inner` exactly
//! once (or return an error) so the run keeps its step semantics.

use std::future::Future;
use std::pin::Pin;

use async_trait::async_trait;

use crate::error::AgentError;

use super::GraphState;

/// Boxed future returned by the wrapped node call.
pub type NodeRunFuture<S> =
    Pin<Box<dyn Future<Output = Result<<S as GraphState>::Update, AgentError>> + Send>>;

/// The wrapped node call, handed to `around_run`.
pub type NodeRunInner<S> = Box<dyn FnOnce(S) -> NodeRunFuture<S> + Send>;

/// Around-advice for node execution (logging, timing, recording).
///
/// **Interaction**: Held by `CompiledStateGraph`; see [`LoggingNodeMiddleware`](super::LoggingNodeMiddleware).
#[async_trait]
pub trait NodeMiddleware<S>: Send + Sync
where
    S: GraphState,
{
    /// Runs around one node call. `state` is a snapshot of the state the node sees.
    async fn around_run(
        &self,
        node_id: &str,
        state: S,
        inner: NodeRunInner<S>,
    ) -> Result<S::Update, AgentError>;
}
