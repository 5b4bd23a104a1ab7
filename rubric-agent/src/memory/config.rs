//! Invoke config: thread_id and step budget.
//!
//! Used by `CompiledStateGraph::invoke` / `stream` and by the checkpointer key.

/// Step budget used when none is configured.
pub const DEFAULT_STEP_BUDGET: usize = 10;

/// Config for a single invoke.
///
/// **Interaction**: Passed to `CompiledStateGraph::invoke(state, config)`; the
/// thread id becomes the `Checkpointer::save` key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnableConfig {
    /// Opaque caller-supplied id partitioning checkpoint storage. Not used to resume.
    pub thread_id: Option<String>,
    /// Maximum number of node and router calls before the run fails with
    /// `AgentError::StepBudgetExceeded`.
    pub step_budget: usize,
}

impl Default for RunnableConfig {
    fn default() -> Self {
        Self {
            thread_id: None,
            step_budget: DEFAULT_STEP_BUDGET,
        }
    }
}

impl RunnableConfig {
    /// Config for `thread_id` with the default step budget.
    pub fn for_thread(thread_id: impl Into<String>) -> Self {
        Self {
            thread_id: Some(thread_id.into()),
            ..Default::default()
        }
    }

    /// Overrides the step budget.
    pub fn with_step_budget(mut self, step_budget: usize) -> Self {
        self.step_budget = step_budget;
        self
    }
}
