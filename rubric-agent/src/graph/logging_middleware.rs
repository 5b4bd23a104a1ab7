//! Middleware that logs node enter/exit around each node call.

use std::time::Instant;

use async_trait::async_trait;

use crate::error::AgentError;

use super::{GraphState, NodeMiddleware, NodeRunInner};

/// Logs node enter/exit (with elapsed time) through `tracing`.
///
/// Attached by `RubricRunner` when verbose output is requested.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingNodeMiddleware;

#[async_trait]
impl<S> NodeMiddleware<S> for LoggingNodeMiddleware
where
    S: GraphState,
{
    async fn around_run(
        &self,
        node_id: &str,
        state: S,
        inner: NodeRunInner<S>,
    ) -> Result<S::Update, AgentError> {
        tracing::info!(node_id, "[node] enter");
        let started = Instant::now();
        let result = inner(state).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => tracing::info!(node_id, elapsed_ms, "[node] exit"),
            Err(e) => tracing::warn!(node_id, elapsed_ms, error = %e, "[node] exit with error"),
        }
        result
    }
}
