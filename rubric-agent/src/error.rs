//! Run error types.
//!
//! Returned by `Node::run`, `Router::route` and `CompiledStateGraph::invoke`. Every
//! variant aborts the in-flight run; the caller never receives a partial state.

use std::fmt;

use thiserror::Error;

/// Error raised while executing a graph run.
///
/// The four kinds map one-to-one onto the failure modes of a run: a node entered
/// without its required input, a failed generation call, a router label outside
/// its path map, and an exhausted step budget.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AgentError {
    /// A node received a state missing a field it requires (e.g. evaluation without a rubric).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An external generation or classification call failed or returned unusable output.
    #[error("generation failed: {0}")]
    Generation(String),

    /// A router returned a label that is not a key of its path map.
    #[error("router '{router}' returned unknown label '{label}'")]
    Routing { router: String, label: String },

    /// The run did not reach END within the configured number of steps.
    #[error("step budget of {budget} exhausted before reaching END")]
    StepBudgetExceeded { budget: usize },
}

/// Coarse error kind, exposed to callers that map failures to transport responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    Generation,
    Routing,
    StepBudgetExceeded,
}

impl ErrorKind {
    /// Stable snake_case name, e.g. `"step_budget_exceeded"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Generation => "generation",
            ErrorKind::Routing => "routing",
            ErrorKind::StepBudgetExceeded => "step_budget_exceeded",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AgentError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AgentError::Validation(_) => ErrorKind::Validation,
            AgentError::Generation(_) => ErrorKind::Generation,
            AgentError::Routing { .. } => ErrorKind::Routing,
            AgentError::StepBudgetExceeded { .. } => ErrorKind::StepBudgetExceeded,
        }
    }
}
