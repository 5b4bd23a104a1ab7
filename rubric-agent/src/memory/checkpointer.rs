//! Checkpointer trait and error.

use async_trait::async_trait;
use thiserror::Error;

use super::Checkpoint;

/// Error from a checkpointer backend.
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Thread id was empty.
    #[error("thread_id is required")]
    ThreadIdRequired,
    /// Backend storage failure.
    #[error("storage error: {0}")]
    Storage(String),
}

/// Last-value store of state snapshots keyed by thread id.
///
/// `save` overwrites whatever the thread had; `load` returns the latest snapshot
/// or `None`. Implementations must allow concurrent calls for different thread
/// ids; concurrent saves for the same thread id are last-writer-wins.
///
/// **Interaction**: Held by `CompiledStateGraph` (`compile_with_checkpointer`).
#[async_trait]
pub trait Checkpointer<S>: Send + Sync
where
    S: Clone + Send + Sync + 'static,
{
    /// Stores `checkpoint` as the latest one for `thread_id`. Returns its id.
    async fn save(&self, thread_id: &str, checkpoint: &Checkpoint<S>) -> Result<String, CheckpointError>;

    /// Returns the latest checkpoint for `thread_id`, if any.
    async fn load(&self, thread_id: &str) -> Result<Option<Checkpoint<S>>, CheckpointError>;
}
