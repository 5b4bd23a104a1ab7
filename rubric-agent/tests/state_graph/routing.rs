//! Conditional edges: label resolution and unknown labels.

use std::collections::HashMap;

use rubric_agent::{AgentError, StateGraph, END, START};

use crate::common::{AddNode, LabelRouter, Tally, ThresholdRouter};

fn branch_graph(router: std::sync::Arc<dyn rubric_agent::Router<Tally>>) -> StateGraph<Tally> {
    let mut graph = StateGraph::<Tally>::new();
    graph
        .add_node("start", AddNode::new("start", 5))
        .add_node("high", AddNode::new("high", 100))
        .add_node("low", AddNode::new("low", -100))
        .add_edge(START, "start")
        .add_conditional_edge(
            "start",
            router,
            HashMap::from([
                ("high".to_string(), "high".to_string()),
                ("low".to_string(), "low".to_string()),
                ("done".to_string(), END.to_string()),
            ]),
        )
        .add_edge("high", END)
        .add_edge("low", END);
    graph
}

#[tokio::test]
async fn router_label_selects_target() {
    let compiled = branch_graph(std::sync::Arc::new(ThresholdRouter { threshold: 3 }))
        .compile()
        .unwrap();
    let out = compiled.invoke(Tally::default(), None).await.unwrap();
    assert_eq!(out.visited, vec!["start", "high"]);
    assert_eq!(out.total, 105);
}

#[tokio::test]
async fn router_label_can_target_end() {
    let router = LabelRouter::new("done");
    let compiled = branch_graph(router.clone()).compile().unwrap();
    let out = compiled.invoke(Tally::default(), None).await.unwrap();
    assert_eq!(out.visited, vec!["start"]);
    assert_eq!(router.calls(), 1);
}

#[tokio::test]
async fn unknown_label_is_routing_error() {
    let compiled = branch_graph(LabelRouter::new("maybe")).compile().unwrap();
    let err = compiled.invoke(Tally::default(), None).await.unwrap_err();
    assert_eq!(
        err,
        AgentError::Routing {
            router: "label_router".into(),
            label: "maybe".into(),
        }
    );
}
