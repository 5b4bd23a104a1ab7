//! Run context for streaming-aware execution.
//!
//! Holds the optional stream sender plus the selected stream modes.

use std::collections::HashSet;

use tokio::sync::mpsc;

use crate::stream::{StreamEvent, StreamMode};

use super::GraphState;

#[derive(Clone)]
pub struct RunContext<S>
where
    S: GraphState,
{
    /// Optional sender for streaming events.
    pub stream_tx: Option<mpsc::Sender<StreamEvent<S>>>,
    /// Enabled stream modes.
    pub stream_mode: HashSet<StreamMode>,
}

impl<S> RunContext<S>
where
    S: GraphState,
{
    /// Sends the per-node events enabled in `stream_mode`. A dropped receiver is ignored.
    pub(crate) async fn emit_node_done(&self, node_id: &str, state: &S) {
        let Some(tx) = &self.stream_tx else {
            return;
        };
        if self.stream_mode.contains(&StreamMode::Values) {
            let _ = tx.send(StreamEvent::Values(state.clone())).await;
        }
        if self.stream_mode.contains(&StreamMode::Updates) {
            let _ = tx
                .send(StreamEvent::Updates {
                    node_id: node_id.to_string(),
                    state: state.clone(),
                })
                .await;
        }
    }
}
