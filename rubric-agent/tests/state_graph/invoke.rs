//! invoke: merge order, error propagation and checkpoint behaviour.

use std::sync::Arc;

use rubric_agent::{
    AgentError, Checkpointer, MemorySaver, RunnableConfig, StateGraph, END, START,
};

use crate::common::{AddNode, Tally};

fn chain(nodes: &[Arc<AddNode>]) -> StateGraph<Tally> {
    let mut graph = StateGraph::<Tally>::new();
    for n in nodes {
        graph.add_node(n.id.clone(), n.clone());
    }
    graph.add_edge(START, nodes[0].id.clone());
    for pair in nodes.windows(2) {
        graph.add_edge(pair[0].id.clone(), pair[1].id.clone());
    }
    graph.add_edge(nodes[nodes.len() - 1].id.clone(), END);
    graph
}

#[tokio::test]
async fn invoke_visits_nodes_in_edge_order() {
    let graph = chain(&[AddNode::new("a", 1), AddNode::new("b", 10), AddNode::new("c", 100)]);
    let compiled = graph.compile().unwrap();
    let out = compiled.invoke(Tally::default(), None).await.unwrap();
    assert_eq!(out.total, 111);
    assert_eq!(out.visited, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn compiled_graph_can_be_invoked_concurrently() {
    let compiled = chain(&[AddNode::new("a", 1), AddNode::new("b", 2)])
        .compile()
        .unwrap();
    let (x, y) = tokio::join!(
        compiled.invoke(Tally::default(), None),
        compiled.invoke(Tally { total: 100, visited: vec![] }, None)
    );
    assert_eq!(x.unwrap().total, 3);
    assert_eq!(y.unwrap().total, 103);
}

#[tokio::test]
async fn failing_node_aborts_and_keeps_previous_checkpoint() {
    let cp = Arc::new(MemorySaver::<Tally>::new());
    let compiled = chain(&[AddNode::new("a", 5), AddNode::failing("b"), AddNode::new("c", 1)])
        .compile_with_checkpointer(cp.clone())
        .unwrap();

    let err = compiled
        .invoke(Tally::default(), Some(RunnableConfig::for_thread("t-fail")))
        .await
        .unwrap_err();
    assert_eq!(err, AgentError::Generation("b failed".into()));

    let saved = cp.load("t-fail").await.unwrap().expect("checkpoint after a");
    assert_eq!(saved.metadata.node_id, "a");
    assert_eq!(saved.state.total, 5);
}

#[tokio::test]
async fn checkpoints_are_partitioned_by_thread_id() {
    let cp = Arc::new(MemorySaver::<Tally>::new());
    let compiled = chain(&[AddNode::new("a", 1)])
        .compile_with_checkpointer(cp.clone())
        .unwrap();
    compiled
        .invoke(Tally::default(), Some(RunnableConfig::for_thread("one")))
        .await
        .unwrap();
    compiled
        .invoke(Tally { total: 40, visited: vec![] }, Some(RunnableConfig::for_thread("two")))
        .await
        .unwrap();
    assert_eq!(cp.load("one").await.unwrap().unwrap().state.total, 1);
    assert_eq!(cp.load("two").await.unwrap().unwrap().state.total, 41);
    assert_eq!(cp.len(), 2);
}
