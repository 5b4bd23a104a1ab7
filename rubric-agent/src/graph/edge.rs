//! Edge table entries: a fixed successor or a router-driven dispatch.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::{GraphState, Router};

/// Label → target node id (or `END`) for a conditional edge.
pub type PathMap = HashMap<String, String>;

/// Outgoing edge of a node. Each node has exactly one after compilation.
pub enum Edge<S: GraphState> {
    /// Always continue with this node id (or `END`).
    Static(String),
    /// Ask the router for a label and look it up in `path_map`.
    Conditional {
        router: Arc<dyn Router<S>>,
        path_map: PathMap,
    },
}

impl<S: GraphState> Clone for Edge<S> {
    fn clone(&self) -> Self {
        match self {
            Edge::Static(to) => Edge::Static(to.clone()),
            Edge::Conditional { router, path_map } => Edge::Conditional {
                router: Arc::clone(router),
                path_map: path_map.clone(),
            },
        }
    }
}

impl<S: GraphState> fmt::Debug for Edge<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Static(to) => f.debug_tuple("Static").field(to).finish(),
            Edge::Conditional { router, path_map } => f
                .debug_struct("Conditional")
                .field("router", &router.id())
                .field("path_map", path_map)
                .finish(),
        }
    }
}
