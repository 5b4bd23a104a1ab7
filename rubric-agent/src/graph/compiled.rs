//! Compiled state graph: immutable, supports invoke and stream.
//!
//! Built by `StateGraph::compile` or `compile_with_checkpointer`. Holds nodes, the
//! per-node edge table, the entry node, and optional checkpointer/middleware. The
//! run loop is iterative: one node (and at most one router) per iteration, with an
//! explicit step counter checked before every node and router call.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use crate::error::AgentError;
use crate::memory::{Checkpoint, Checkpointer, RunnableConfig};
use crate::stream::{StreamEvent, StreamMode};

use super::edge::Edge;
use super::logging;
use super::node_middleware::{NodeMiddleware, NodeRunFuture, NodeRunInner};
use super::state_graph::END;
use super::{GraphState, Node, RunContext};

/// Compiled graph: immutable structure, safe to share across concurrent runs.
///
/// Created by `StateGraph::compile()` or `compile_with_checkpointer()`. Cloning is
/// cheap (nodes, routers and checkpointer are behind `Arc`).
#[derive(Clone)]
pub struct CompiledStateGraph<S: GraphState> {
    pub(super) nodes: HashMap<String, Arc<dyn Node<S>>>,
    pub(super) edges: HashMap<String, Edge<S>>,
    pub(super) entry: String,
    pub(super) checkpointer: Option<Arc<dyn Checkpointer<S>>>,
    pub(super) middleware: Option<Arc<dyn NodeMiddleware<S>>>,
}

impl<S> CompiledStateGraph<S>
where
    S: GraphState,
{
    /// Id of the node the run starts at (the target of the START edge).
    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// Returns the checkpointer if the graph was compiled with one.
    pub fn checkpointer(&self) -> Option<&Arc<dyn Checkpointer<S>>> {
        self.checkpointer.as_ref()
    }

    /// Runs one node, through the middleware when one is attached.
    async fn run_node(&self, node_id: &str, state: &S) -> Result<S::Update, AgentError> {
        let node = self
            .nodes
            .get(node_id)
            .expect("compiled graph has all nodes")
            .clone();
        match &self.middleware {
            Some(middleware) => {
                let inner: NodeRunInner<S> = Box::new(move |s: S| {
                    Box::pin(async move { node.run(&s).await }) as NodeRunFuture<S>
                });
                middleware.around_run(node_id, state.clone(), inner).await
            }
            None => node.run(state).await,
        }
    }

    /// Writes the post-node checkpoint. Failures are logged, never propagated.
    async fn save_checkpoint(&self, config: &RunnableConfig, state: &S, step: usize, node_id: &str) {
        let (Some(cp), Some(thread_id)) = (&self.checkpointer, config.thread_id.as_deref()) else {
            return;
        };
        let checkpoint = Checkpoint::from_state(state.clone(), step as u64, node_id);
        match cp.save(thread_id, &checkpoint).await {
            Ok(id) => logging::log_checkpoint_saved(thread_id, &id, node_id),
            Err(e) => tracing::warn!(thread_id, node_id, error = %e, "checkpoint save failed"),
        }
    }

    /// Shared run loop used by invoke() and stream(): steps through nodes until END.
    async fn run_loop_inner(
        &self,
        state: &mut S,
        config: &RunnableConfig,
        run_ctx: Option<&RunContext<S>>,
    ) -> Result<usize, AgentError> {
        let budget = config.step_budget;
        let mut current = self.entry.clone();
        let mut steps = 0usize;

        loop {
            if current == END {
                return Ok(steps);
            }
            if steps >= budget {
                return Err(AgentError::StepBudgetExceeded { budget });
            }

            logging::log_node_start(&current, steps);
            let update = self.run_node(&current, state).await?;
            state.merge(update);
            steps += 1;

            self.save_checkpoint(config, state, steps, &current).await;
            if let Some(ctx) = run_ctx {
                ctx.emit_node_done(&current, state).await;
            }

            let edge = self
                .edges
                .get(&current)
                .expect("compiled graph has an edge for every node");
            let next = match edge {
                Edge::Static(to) => to.clone(),
                Edge::Conditional { router, path_map } => {
                    if steps >= budget {
                        return Err(AgentError::StepBudgetExceeded { budget });
                    }
                    let label = router.route(state).await?;
                    steps += 1;
                    logging::log_route(router.id(), &label);
                    path_map
                        .get(&label)
                        .cloned()
                        .ok_or_else(|| AgentError::Routing {
                            router: router.id().to_string(),
                            label,
                        })?
                }
            };
            logging::log_node_complete(&current, &next);
            current = next;
        }
    }

    /// Runs the graph from the entry node until END and returns the final state.
    ///
    /// `config` carries the thread id (checkpoint key) and the step budget; `None`
    /// uses `RunnableConfig::default()` (no checkpointing, default budget). Node
    /// updates are merged with `GraphState::merge`; after every node a checkpoint is
    /// written when both a checkpointer and a thread id are present. Any error aborts
    /// the run and no partial state is returned; the last saved checkpoint stays.
    pub async fn invoke(&self, state: S, config: Option<RunnableConfig>) -> Result<S, AgentError> {
        let config = config.unwrap_or_default();
        let mut state = state;
        logging::log_graph_start(&self.entry, config.thread_id.as_deref(), config.step_budget);
        match self.run_loop_inner(&mut state, &config, None).await {
            Ok(steps) => {
                logging::log_graph_complete(steps);
                Ok(state)
            }
            Err(e) => {
                logging::log_graph_error(&e);
                Err(e)
            }
        }
    }

    /// Streams graph execution, emitting events via a channel-backed stream.
    ///
    /// The run happens on a spawned task. After each node the enabled modes are
    /// emitted; if the run fails, a final `StreamEvent::Error` is sent.
    pub fn stream(
        &self,
        state: S,
        config: Option<RunnableConfig>,
        stream_mode: impl Into<HashSet<StreamMode>>,
    ) -> ReceiverStream<StreamEvent<S>> {
        let (tx, rx) = mpsc::channel(128);
        let graph = self.clone();
        let config = config.unwrap_or_default();
        let run_ctx = RunContext {
            stream_tx: Some(tx.clone()),
            stream_mode: stream_mode.into(),
        };

        tokio::spawn(async move {
            let mut state = state;
            logging::log_graph_start(&graph.entry, config.thread_id.as_deref(), config.step_budget);
            match graph.run_loop_inner(&mut state, &config, Some(&run_ctx)).await {
                Ok(steps) => logging::log_graph_complete(steps),
                Err(e) => {
                    logging::log_graph_error(&e);
                    let _ = tx.send(StreamEvent::Error(e)).await;
                }
            }
        });

        ReceiverStream::new(rx)
    }
}
