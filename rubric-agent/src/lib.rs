//! # rubric-agent
//!
//! A small graph engine plus the assistive-grading pipeline built on it. A
//! teacher's free-form request is parsed, a rubric is generated, and when a
//! student submission is present (and the classifier agrees) the submission is
//! evaluated, feedback is written and a final report is produced.
//!
//! ## Design Principles
//!
//! - **One state type per graph**: nodes read a shared [`GraphState`] and return a
//!   partial update; the executor merges it (present keys overwrite, absent keys carry).
//! - **Explicit registry**: a [`StateGraph`] is validated and compiled once into an
//!   immutable [`CompiledStateGraph`], shared across concurrent runs.
//! - **Bounded runs**: node and router calls count against a step budget; exhausting
//!   it fails the run with [`AgentError::StepBudgetExceeded`].
//! - **Write-only checkpoints**: with a [`Checkpointer`] and a thread id the state is
//!   saved after every node. Runs never resume from it.
//!
//! ## Main Modules
//!
//! - [`graph`]: `StateGraph`, `CompiledStateGraph`, `Node`, `Router`, middleware.
//! - [`memory`]: `Checkpointer`, `MemorySaver`, `Checkpoint`, `RunnableConfig`.
//! - [`llm`]: `LlmClient` trait, `MockLlm`, and `ChatOpenAI` (feature `openai`).
//! - [`pipeline`]: grading state, nodes, `EvaluationRouter`, `RubricRunner`.
//! - [`config`]: `RubricConfig::from_env`.
//! - [`stream`]: per-node streaming events.
//!
//! ## Features
//!
//! - `openai`: OpenAI-compatible chat completions via `async-openai`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use rubric_agent::{
//!     Checkpointer, MemorySaver, MockLlm, PipelineLlms, RubricRunner, RubricState, RunnerOptions,
//! };
//!
//! # #[tokio::main]
//! # async fn main() {
//! let llms = PipelineLlms::shared(Arc::new(MockLlm::new("...")));
//! let checkpointer: Arc<dyn Checkpointer<RubricState>> = Arc::new(MemorySaver::new());
//! let runner = RubricRunner::new(llms, Some(checkpointer), RunnerOptions::default())
//!     .expect("grading graph compiles");
//! let state = runner.run("6학년 환경 논제 글쓰기 루브릭", Some("thread-1")).await;
//! # let _ = state;
//! # }
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod llm;
pub mod memory;
pub mod message;
pub mod pipeline;
pub mod stream;

pub use config::{ConfigError, RubricConfig};
pub use error::{AgentError, ErrorKind};
pub use graph::{
    CompilationError, CompiledStateGraph, Edge, GraphState, LoggingNodeMiddleware, Node,
    NodeMiddleware, NodeRunFuture, NodeRunInner, PathMap, Router, RunContext, StateGraph, END,
    START,
};
#[cfg(feature = "openai")]
pub use llm::ChatOpenAI;
pub use llm::{LlmClient, LlmResponse, MockLlm, OutputSchema};
pub use memory::{
    Checkpoint, CheckpointError, CheckpointMetadata, Checkpointer, MemorySaver, RunnableConfig,
    DEFAULT_STEP_BUDGET,
};
pub use message::Message;
pub use pipeline::{
    build_graph, build_graph_with_router, EvaluationRouter, ParsedInput, PipelineLlms,
    RubricRunner, RubricState, RubricUpdate, RunnerOptions, TeacherInput,
};
pub use stream::{StreamEvent, StreamMode};
