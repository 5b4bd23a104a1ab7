//! Step budget: node and router calls both count; cycles terminate.

use std::collections::HashMap;

use rubric_agent::{AgentError, RunnableConfig, StateGraph, DEFAULT_STEP_BUDGET, END, START};

use crate::common::{AddNode, LabelRouter, Tally};

#[tokio::test]
async fn static_cycle_fails_with_default_budget() {
    let mut graph = StateGraph::<Tally>::new();
    graph
        .add_node("a", AddNode::new("a", 1))
        .add_node("b", AddNode::new("b", 1))
        .add_edge(START, "a")
        .add_edge("a", "b")
        .add_edge("b", "a");
    let compiled = graph.compile().unwrap();
    let err = compiled.invoke(Tally::default(), None).await.unwrap_err();
    assert_eq!(
        err,
        AgentError::StepBudgetExceeded {
            budget: DEFAULT_STEP_BUDGET
        }
    );
}

#[tokio::test]
async fn router_cycle_counts_router_calls() {
    let router = LabelRouter::new("again");
    let mut graph = StateGraph::<Tally>::new();
    graph
        .add_node("a", AddNode::new("a", 1))
        .add_edge(START, "a")
        .add_conditional_edge(
            "a",
            router.clone(),
            HashMap::from([
                ("again".to_string(), "a".to_string()),
                ("stop".to_string(), END.to_string()),
            ]),
        );
    let compiled = graph.compile().unwrap();
    let err = compiled
        .invoke(Tally::default(), Some(RunnableConfig::default().with_step_budget(4)))
        .await
        .unwrap_err();
    assert_eq!(err, AgentError::StepBudgetExceeded { budget: 4 });
    // node, router, node, router: four steps, the fifth (node) is refused
    assert_eq!(router.calls(), 2);
}

#[tokio::test]
async fn budget_equal_to_steps_succeeds() {
    let mut graph = StateGraph::<Tally>::new();
    graph
        .add_node("a", AddNode::new("a", 1))
        .add_node("b", AddNode::new("b", 1))
        .add_node("c", AddNode::new("c", 1))
        .add_edge(START, "a")
        .add_edge("a", "b")
        .add_edge("b", "c")
        .add_edge("c", END);
    let compiled = graph.compile().unwrap();

    let out = compiled
        .invoke(Tally::default(), Some(RunnableConfig::default().with_step_budget(3)))
        .await
        .unwrap();
    assert_eq!(out.total, 3);

    let err = compiled
        .invoke(Tally::default(), Some(RunnableConfig::default().with_step_budget(2)))
        .await
        .unwrap_err();
    assert_eq!(err, AgentError::StepBudgetExceeded { budget: 2 });
}
