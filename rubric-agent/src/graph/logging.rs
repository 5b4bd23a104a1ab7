//! Logging helpers for graph execution.
//!
//! Structured `tracing` events for run start/end, node execution, routing and
//! checkpoint writes. Callers decide where they go by installing a subscriber.

use crate::error::AgentError;

/// Log graph execution start.
pub fn log_graph_start(entry: &str, thread_id: Option<&str>, step_budget: usize) {
    tracing::info!(entry, thread_id, step_budget, "Starting graph execution");
}

/// Log node execution start.
pub fn log_node_start(node_id: &str, step: usize) {
    tracing::debug!(node_id, step, "Starting node execution");
}

/// Log the transition chosen after a node (static successor or routed target).
pub fn log_node_complete(node_id: &str, next: &str) {
    tracing::debug!(node_id, next, "Node execution complete");
}

/// Log a router decision.
pub fn log_route(router_id: &str, label: &str) {
    tracing::debug!(router_id, label, "Router selected label");
}

/// Log a checkpoint write.
pub fn log_checkpoint_saved(thread_id: &str, checkpoint_id: &str, node_id: &str) {
    tracing::debug!(thread_id, checkpoint_id, node_id, "Checkpoint saved");
}

/// Log graph execution completion.
pub fn log_graph_complete(steps: usize) {
    tracing::info!(steps, "Graph execution complete");
}

/// Log graph execution error.
pub fn log_graph_error(error: &AgentError) {
    tracing::error!(kind = %error.kind(), %error, "Graph execution error");
}
