//! Checkpoint and metadata types.

use std::time::SystemTime;

/// Metadata for a single checkpoint: which step and node produced it, and when.
#[derive(Debug, Clone)]
pub struct CheckpointMetadata {
    /// Number of steps (node + router calls) taken when the checkpoint was written.
    pub step: u64,
    /// Id of the node whose update this snapshot includes last.
    pub node_id: String,
    pub created_at: Option<SystemTime>,
}

/// One checkpoint: state snapshot plus id/ts.
///
/// Stored by a Checkpointer keyed by thread id, replacing the previous one.
///
/// **Interaction**: Produced by graph execution; consumed by `Checkpointer::save`,
/// returned by `Checkpointer::load`.
#[derive(Debug, Clone)]
pub struct Checkpoint<S> {
    pub id: String,
    pub ts: String,
    pub state: S,
    pub metadata: CheckpointMetadata,
}

impl<S> Checkpoint<S> {
    /// Creates a checkpoint from the current state. Uses current time for id/ts.
    pub fn from_state(state: S, step: u64, node_id: impl Into<String>) -> Self {
        let now = SystemTime::now();
        let ts = format!(
            "{}",
            now.duration_since(SystemTime::UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0)
        );
        let id = format!("{}-{}", ts, step);
        Self {
            id,
            ts,
            state,
            metadata: CheckpointMetadata {
                step,
                node_id: node_id.into(),
                created_at: Some(now),
            },
        }
    }
}
