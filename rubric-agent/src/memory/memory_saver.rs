//! In-memory checkpointer backed by a concurrent map.

use async_trait::async_trait;
use dashmap::DashMap;

use super::{Checkpoint, CheckpointError, Checkpointer};

/// In-memory checkpointer: one latest checkpoint per thread id.
///
/// Entries live as long as the saver; nothing is written to disk. Access is
/// sharded per key, so runs on different threads never contend on a global lock.
///
/// **Interaction**: Used as `Arc<dyn Checkpointer<S>>` with
/// `StateGraph::compile_with_checkpointer`.
pub struct MemorySaver<S> {
    inner: DashMap<String, Checkpoint<S>>,
}

impl<S> MemorySaver<S> {
    /// Creates an empty saver.
    pub fn new() -> Self {
        Self {
            inner: DashMap::new(),
        }
    }

    /// Number of threads with a stored checkpoint.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// True when no thread has a checkpoint.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<S> Default for MemorySaver<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<S> Checkpointer<S> for MemorySaver<S>
where
    S: Clone + Send + Sync + 'static,
{
    async fn save(&self, thread_id: &str, checkpoint: &Checkpoint<S>) -> Result<String, CheckpointError> {
        if thread_id.is_empty() {
            return Err(CheckpointError::ThreadIdRequired);
        }
        self.inner.insert(thread_id.to_string(), checkpoint.clone());
        Ok(checkpoint.id.clone())
    }

    async fn load(&self, thread_id: &str) -> Result<Option<Checkpoint<S>>, CheckpointError> {
        if thread_id.is_empty() {
            return Err(CheckpointError::ThreadIdRequired);
        }
        Ok(self.inner.get(thread_id).map(|entry| entry.value().clone()))
    }
}
