//! Runner: compiles the grading graph once and runs it per request.

use std::collections::HashSet;
use std::sync::Arc;

use tokio_stream::wrappers::ReceiverStream;

use crate::error::AgentError;
use crate::graph::{CompilationError, CompiledStateGraph, LoggingNodeMiddleware, StateGraph};
use crate::memory::{Checkpointer, RunnableConfig, DEFAULT_STEP_BUDGET};
use crate::stream::{StreamEvent, StreamMode};

use super::state::RubricState;
use super::{build_graph, PipelineLlms};

/// Options for [`RubricRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerOptions {
    /// Step budget applied to every run.
    pub step_budget: usize,
    /// Wrap every node with [`LoggingNodeMiddleware`].
    pub verbose: bool,
}

impl Default for RunnerOptions {
    fn default() -> Self {
        Self {
            step_budget: DEFAULT_STEP_BUDGET,
            verbose: false,
        }
    }
}

/// Compiled grading pipeline plus its checkpointer. Cheap to clone, safe to share
/// across concurrent requests.
///
/// **Interaction**: Built at process start by the CLI and the server; each call to
/// [`RubricRunner::run`] starts a fresh state, even for a known thread id.
#[derive(Clone)]
pub struct RubricRunner {
    graph: CompiledStateGraph<RubricState>,
    options: RunnerOptions,
}

impl RubricRunner {
    /// Builds and compiles the standard grading graph.
    pub fn new(
        llms: PipelineLlms,
        checkpointer: Option<Arc<dyn Checkpointer<RubricState>>>,
        options: RunnerOptions,
    ) -> Result<Self, CompilationError> {
        Self::from_graph(build_graph(&llms), checkpointer, options)
    }

    /// Compiles a caller-built graph (e.g. with a custom router or middleware).
    ///
    /// When `options.verbose` is set and the graph has no middleware yet, node
    /// logging is attached.
    pub fn from_graph(
        graph: StateGraph<RubricState>,
        checkpointer: Option<Arc<dyn Checkpointer<RubricState>>>,
        options: RunnerOptions,
    ) -> Result<Self, CompilationError> {
        let graph = if options.verbose && !graph.has_middleware() {
            graph.with_middleware(Arc::new(LoggingNodeMiddleware))
        } else {
            graph
        };
        let graph = match checkpointer {
            Some(cp) => graph.compile_with_checkpointer(cp)?,
            None => graph.compile()?,
        };
        Ok(Self { graph, options })
    }

    pub fn options(&self) -> &RunnerOptions {
        &self.options
    }

    /// Checkpointer the graph writes to, if any.
    pub fn checkpointer(&self) -> Option<&Arc<dyn Checkpointer<RubricState>>> {
        self.graph.checkpointer()
    }

    fn config(&self, thread_id: Option<&str>) -> RunnableConfig {
        RunnableConfig {
            thread_id: thread_id.map(str::to_string),
            step_budget: self.options.step_budget,
        }
    }

    /// Runs the pipeline on `teacher_input` and returns the final state.
    ///
    /// With a `thread_id` and a checkpointer, the state after every node is saved
    /// under that id. Previous checkpoints for the id are not read.
    pub async fn run(
        &self,
        teacher_input: &str,
        thread_id: Option<&str>,
    ) -> Result<RubricState, AgentError> {
        tracing::info!(thread_id, "starting rubric run");
        self.graph
            .invoke(RubricState::new(teacher_input), Some(self.config(thread_id)))
            .await
    }

    /// Same as [`run`](Self::run) but streams per-node events.
    pub fn stream(
        &self,
        teacher_input: &str,
        thread_id: Option<&str>,
        modes: impl Into<HashSet<StreamMode>>,
    ) -> ReceiverStream<StreamEvent<RubricState>> {
        self.graph.stream(
            RubricState::new(teacher_input),
            Some(self.config(thread_id)),
            modes,
        )
    }
}
