//! State graph: nodes, static and conditional edges, compile and invoke.
//!
//! Build a [`StateGraph`] with `add_node` / `add_edge` / `add_conditional_edge`
//! (using [`START`] and [`END`] for entry/exit), compile it once into an immutable
//! [`CompiledStateGraph`], then `invoke` it any number of times, concurrently if
//! needed. The executor merges each node's partial update into the state,
//! resolves routers against their path maps, writes a checkpoint per node and
//! enforces a step budget.

mod compile_error;
mod compiled;
mod edge;
mod graph_state;
pub(crate) mod logging;
mod logging_middleware;
mod node;
mod node_middleware;
mod router;
mod run_context;
mod state_graph;

pub use compile_error::CompilationError;
pub use compiled::CompiledStateGraph;
pub use edge::{Edge, PathMap};
pub use graph_state::GraphState;
pub use logging_middleware::LoggingNodeMiddleware;
pub use node::Node;
pub use node_middleware::{NodeMiddleware, NodeRunFuture, NodeRunInner};
pub use router::Router;
pub use run_context::RunContext;
pub use state_graph::{StateGraph, END, START};
