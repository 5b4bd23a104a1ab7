//! Shared state, nodes and routers for state_graph tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use rubric_agent::{AgentError, GraphState, Node, Router};

/// Running total plus the ids of visited nodes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tally {
    pub total: i32,
    pub visited: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct TallyUpdate {
    pub add: i32,
    pub visited: String,
}

impl GraphState for Tally {
    type Update = TallyUpdate;

    fn merge(&mut self, update: TallyUpdate) {
        self.total += update.add;
        self.visited.push(update.visited);
    }
}

/// Adds `delta` to the total; fails when `fail` is set.
pub struct AddNode {
    pub id: String,
    pub delta: i32,
    pub fail: bool,
}

impl AddNode {
    pub fn new(id: &str, delta: i32) -> Arc<Self> {
        Arc::new(Self {
            id: id.to_string(),
            delta,
            fail: false,
        })
    }

    pub fn failing(id: &str) -> Arc<Self> {
        Arc::new(Self {
            id: id.to_string(),
            delta: 0,
            fail: true,
        })
    }
}

#[async_trait]
impl Node<Tally> for AddNode {
    fn id(&self) -> &str {
        &self.id
    }

    async fn run(&self, _state: &Tally) -> Result<TallyUpdate, AgentError> {
        if self.fail {
            return Err(AgentError::Generation(format!("{} failed", self.id)));
        }
        Ok(TallyUpdate {
            add: self.delta,
            visited: self.id.clone(),
        })
    }
}

/// Router that always returns a fixed label and counts its calls.
pub struct LabelRouter {
    pub label: String,
    pub calls: AtomicUsize,
}

impl LabelRouter {
    pub fn new(label: &str) -> Arc<Self> {
        Arc::new(Self {
            label: label.to_string(),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Router<Tally> for LabelRouter {
    fn id(&self) -> &str {
        "label_router"
    }

    async fn route(&self, _state: &Tally) -> Result<String, AgentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.label.clone())
    }
}

/// Routes to "high" when the total is at least `threshold`, else "low".
pub struct ThresholdRouter {
    pub threshold: i32,
}

#[async_trait]
impl Router<Tally> for ThresholdRouter {
    fn id(&self) -> &str {
        "threshold_router"
    }

    async fn route(&self, state: &Tally) -> Result<String, AgentError> {
        Ok(if state.total >= self.threshold {
            "high".to_string()
        } else {
            "low".to_string()
        })
    }
}
