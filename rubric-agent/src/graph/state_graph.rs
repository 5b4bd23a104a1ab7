//! State graph builder: nodes + static and conditional edges.
//!
//! Add nodes with `add_node`, wire them with `add_edge(from, to)` and
//! `add_conditional_edge(from, router, path_map)` using `START` and `END` for
//! graph entry/exit, then `compile` or `compile_with_checkpointer` to get a
//! `CompiledStateGraph`.

use std::collections::HashMap;
use std::sync::Arc;

use crate::graph::compile_error::CompilationError;
use crate::graph::compiled::CompiledStateGraph;
use crate::graph::edge::{Edge, PathMap};
use crate::graph::node::Node;
use crate::graph::node_middleware::NodeMiddleware;
use crate::graph::router::Router;
use crate::graph::GraphState;
use crate::memory::Checkpointer;

/// Sentinel for graph entry: use as `from_id` in `add_edge(START, first_node_id)`.
pub const START: &str = "__start__";

/// Sentinel for graph exit: use as `to_id` in `add_edge(last_node_id, END)` or as a path-map target.
pub const END: &str = "__end__";

struct ConditionalSpec<S: GraphState> {
    from: String,
    router: Arc<dyn Router<S>>,
    path_map: PathMap,
}

/// State graph under construction.
///
/// Generic over state type `S`. Registration never fails; every structural check
/// is deferred to `compile`, which returns the first violated invariant.
///
/// **Interaction**: Accepts `Arc<dyn Node<S>>` and `Arc<dyn Router<S>>`; produces
/// `CompiledStateGraph<S>`.
pub struct StateGraph<S: GraphState> {
    nodes: HashMap<String, Arc<dyn Node<S>>>,
    /// Ids passed to `add_node` more than once; reported by `compile`.
    duplicate_nodes: Vec<String>,
    /// Static edges (from_id, to_id), in registration order.
    edges: Vec<(String, String)>,
    conditional_edges: Vec<ConditionalSpec<S>>,
    middleware: Option<Arc<dyn NodeMiddleware<S>>>,
}

impl<S> Default for StateGraph<S>
where
    S: GraphState,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> StateGraph<S>
where
    S: GraphState,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            duplicate_nodes: Vec::new(),
            edges: Vec::new(),
            conditional_edges: Vec::new(),
            middleware: None,
        }
    }

    /// Adds a node. Ids must be unique; a repeated id makes `compile` fail with
    /// `CompilationError::DuplicateNode`.
    pub fn add_node(&mut self, id: impl Into<String>, node: Arc<dyn Node<S>>) -> &mut Self {
        let id = id.into();
        if self.nodes.contains_key(&id) {
            self.duplicate_nodes.push(id);
        } else {
            self.nodes.insert(id, node);
        }
        self
    }

    /// Adds a static edge from `from_id` to `to_id`.
    ///
    /// Use `START` for the single entry edge and `END` to finish the run.
    pub fn add_edge(&mut self, from_id: impl Into<String>, to_id: impl Into<String>) -> &mut Self {
        self.edges.push((from_id.into(), to_id.into()));
        self
    }

    /// Adds a conditional edge: after `from_id` runs, `router` picks a label and the
    /// run continues at `path_map[label]` (a node id or `END`).
    pub fn add_conditional_edge(
        &mut self,
        from_id: impl Into<String>,
        router: Arc<dyn Router<S>>,
        path_map: PathMap,
    ) -> &mut Self {
        self.conditional_edges.push(ConditionalSpec {
            from: from_id.into(),
            router,
            path_map,
        });
        self
    }

    /// Attaches node middleware; the compiled graph wraps every node call with it.
    pub fn with_middleware(mut self, middleware: Arc<dyn NodeMiddleware<S>>) -> Self {
        self.middleware = Some(middleware);
        self
    }

    pub fn has_middleware(&self) -> bool {
        self.middleware.is_some()
    }

    /// Builds the executable graph without a checkpointer.
    pub fn compile(self) -> Result<CompiledStateGraph<S>, CompilationError> {
        self.compile_internal(None)
    }

    /// Builds the executable graph with a checkpointer.
    ///
    /// When `invoke(state, config)` is called with `config.thread_id`, a checkpoint
    /// is written after every node.
    pub fn compile_with_checkpointer(
        self,
        checkpointer: Arc<dyn Checkpointer<S>>,
    ) -> Result<CompiledStateGraph<S>, CompilationError> {
        self.compile_internal(Some(checkpointer))
    }

    fn is_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    fn compile_internal(
        self,
        checkpointer: Option<Arc<dyn Checkpointer<S>>>,
    ) -> Result<CompiledStateGraph<S>, CompilationError> {
        if let Some(id) = self.duplicate_nodes.first() {
            return Err(CompilationError::DuplicateNode(id.clone()));
        }
        for reserved in [START, END] {
            if self.is_node(reserved) {
                return Err(CompilationError::ReservedNodeId(reserved.to_string()));
            }
        }

        for (from, to) in &self.edges {
            if from == END {
                return Err(CompilationError::InvalidEdge(format!(
                    "edge may not leave END (to {to})"
                )));
            }
            if to == START {
                return Err(CompilationError::InvalidEdge(format!(
                    "edge may not enter START (from {from})"
                )));
            }
            if from != START && !self.is_node(from) {
                return Err(CompilationError::NodeNotFound(from.clone()));
            }
            if to != END && !self.is_node(to) {
                return Err(CompilationError::NodeNotFound(to.clone()));
            }
        }

        for spec in &self.conditional_edges {
            if spec.from == START || spec.from == END {
                return Err(CompilationError::InvalidEdge(format!(
                    "conditional edge may not leave {}",
                    spec.from
                )));
            }
            if !self.is_node(&spec.from) {
                return Err(CompilationError::NodeNotFound(spec.from.clone()));
            }
            if spec.path_map.is_empty() {
                return Err(CompilationError::InvalidEdge(format!(
                    "conditional edge from {} has an empty path map",
                    spec.from
                )));
            }
            let mut labels: Vec<_> = spec.path_map.keys().collect();
            labels.sort();
            for label in labels {
                let target = &spec.path_map[label];
                if target == START {
                    return Err(CompilationError::InvalidEdge(format!(
                        "path map label {label} may not target START"
                    )));
                }
                if target != END && !self.is_node(target) {
                    return Err(CompilationError::NodeNotFound(target.clone()));
                }
            }
        }

        let entries: Vec<&String> = self
            .edges
            .iter()
            .filter(|(f, _)| f == START)
            .map(|(_, t)| t)
            .collect();
        let entry = match entries.as_slice() {
            [only] => (*only).clone(),
            _ => return Err(CompilationError::MissingStart),
        };
        if entry == END {
            return Err(CompilationError::InvalidEdge(
                "START must lead to a node, not END".into(),
            ));
        }

        let mut edges: HashMap<String, Edge<S>> = HashMap::new();
        for (from, to) in self.edges.iter().filter(|(f, _)| f != START) {
            if edges.insert(from.clone(), Edge::Static(to.clone())).is_some() {
                return Err(CompilationError::DuplicateEdge(from.clone()));
            }
        }
        for spec in self.conditional_edges {
            let edge = Edge::Conditional {
                router: spec.router,
                path_map: spec.path_map,
            };
            if edges.insert(spec.from.clone(), edge).is_some() {
                return Err(CompilationError::DuplicateEdge(spec.from));
            }
        }

        let mut node_ids: Vec<&String> = self.nodes.keys().collect();
        node_ids.sort();
        if let Some(id) = node_ids.into_iter().find(|id| !edges.contains_key(*id)) {
            return Err(CompilationError::MissingEdge(id.clone()));
        }

        Ok(CompiledStateGraph {
            nodes: self.nodes,
            edges,
            entry,
            checkpointer,
            middleware: self.middleware,
        })
    }
}
