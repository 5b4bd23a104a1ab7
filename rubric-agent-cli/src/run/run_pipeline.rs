//! Shared run logic: build the grading runner and invoke (or stream) it.
//!
//! Used by [`run_with_config`](super::run_with_config) and by tests that inject MockLlm.

use std::collections::HashSet;
use std::sync::Arc;

use rubric_agent::{
    AgentError, Checkpointer, MemorySaver, PipelineLlms, RubricRunner, RubricState, RunnerOptions,
    StreamEvent, StreamMode,
};
use tokio_stream::StreamExt;

use crate::config::RunConfig;

use super::Error;

/// Runs the pipeline once with the given clients.
///
/// Checkpoints go to an in-memory saver that lives only for this call. With
/// `config.stream`, a line per completed node is printed to stderr.
pub(crate) async fn run_pipeline(
    config: &RunConfig,
    llms: PipelineLlms,
    teacher_input: &str,
) -> Result<RubricState, Error> {
    let checkpointer: Arc<dyn Checkpointer<RubricState>> = Arc::new(MemorySaver::new());
    let runner = RubricRunner::new(
        llms,
        Some(checkpointer),
        RunnerOptions {
            step_budget: config.service.step_budget,
            verbose: config.verbose,
        },
    )?;
    let thread_id = config.thread_id.as_deref();
    tracing::debug!(
        thread_id,
        step_budget = config.service.step_budget,
        stream = config.stream,
        "running pipeline"
    );

    if !config.stream {
        return Ok(runner.run(teacher_input, thread_id).await?);
    }

    let mut events = runner.stream(teacher_input, thread_id, HashSet::from([StreamMode::Updates]));
    let mut last: Option<RubricState> = None;
    while let Some(event) = events.next().await {
        match event {
            StreamEvent::Updates { node_id, state } => {
                eprintln!("[{}] done", node_id);
                last = Some(state);
            }
            StreamEvent::Values(state) => last = Some(state),
            StreamEvent::Error(e) => return Err(e.into()),
        }
    }
    last.ok_or_else(|| Error::from(AgentError::Generation("run produced no output".into())))
}
