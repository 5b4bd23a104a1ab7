//! StateGraph compile failure cases: unknown nodes, missing entry, duplicate edges, etc.

use std::collections::HashMap;

use rubric_agent::{CompilationError, StateGraph, END, START};

use crate::common::{AddNode, LabelRouter, Tally};

fn path_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn compile_fails_when_edge_refers_to_unknown_node() {
    let mut graph = StateGraph::<Tally>::new();
    graph
        .add_node("a", AddNode::new("a", 1))
        .add_edge(START, "a")
        .add_edge("a", "missing");

    match graph.compile() {
        Err(CompilationError::NodeNotFound(id)) => assert_eq!(id, "missing"),
        other => panic!("expected NodeNotFound, got {:?}", other.err()),
    }
}

#[test]
fn compile_fails_without_start_edge() {
    let mut graph = StateGraph::<Tally>::new();
    graph.add_node("a", AddNode::new("a", 1)).add_edge("a", END);
    assert_eq!(graph.compile().err(), Some(CompilationError::MissingStart));
}

#[test]
fn compile_fails_with_two_start_edges() {
    let mut graph = StateGraph::<Tally>::new();
    graph
        .add_node("a", AddNode::new("a", 1))
        .add_node("b", AddNode::new("b", 1))
        .add_edge(START, "a")
        .add_edge(START, "b")
        .add_edge("a", END)
        .add_edge("b", END);
    assert_eq!(graph.compile().err(), Some(CompilationError::MissingStart));
}

#[test]
fn compile_fails_on_duplicate_node_id() {
    let mut graph = StateGraph::<Tally>::new();
    graph
        .add_node("a", AddNode::new("a", 1))
        .add_node("a", AddNode::new("a", 2))
        .add_edge(START, "a")
        .add_edge("a", END);
    assert_eq!(
        graph.compile().err(),
        Some(CompilationError::DuplicateNode("a".into()))
    );
}

#[test]
fn compile_fails_on_reserved_node_id() {
    let mut graph = StateGraph::<Tally>::new();
    graph.add_node(END, AddNode::new("end", 1)).add_edge(START, END);
    assert_eq!(
        graph.compile().err(),
        Some(CompilationError::ReservedNodeId(END.into()))
    );
}

#[test]
fn compile_fails_on_two_outgoing_edges() {
    let mut graph = StateGraph::<Tally>::new();
    graph
        .add_node("a", AddNode::new("a", 1))
        .add_node("b", AddNode::new("b", 1))
        .add_edge(START, "a")
        .add_edge("a", "b")
        .add_conditional_edge("a", LabelRouter::new("x"), path_map(&[("x", END)]))
        .add_edge("b", END);
    assert_eq!(
        graph.compile().err(),
        Some(CompilationError::DuplicateEdge("a".into()))
    );
}

#[test]
fn compile_fails_when_node_has_no_outgoing_edge() {
    let mut graph = StateGraph::<Tally>::new();
    graph
        .add_node("a", AddNode::new("a", 1))
        .add_node("b", AddNode::new("b", 1))
        .add_edge(START, "a")
        .add_edge("a", END);
    assert_eq!(
        graph.compile().err(),
        Some(CompilationError::MissingEdge("b".into()))
    );
}

#[test]
fn compile_fails_when_path_map_targets_unknown_node() {
    let mut graph = StateGraph::<Tally>::new();
    graph
        .add_node("a", AddNode::new("a", 1))
        .add_edge(START, "a")
        .add_conditional_edge(
            "a",
            LabelRouter::new("go"),
            path_map(&[("go", "nowhere"), ("stop", END)]),
        );
    assert_eq!(
        graph.compile().err(),
        Some(CompilationError::NodeNotFound("nowhere".into()))
    );
}

#[test]
fn compile_fails_on_empty_path_map() {
    let mut graph = StateGraph::<Tally>::new();
    graph
        .add_node("a", AddNode::new("a", 1))
        .add_edge(START, "a")
        .add_conditional_edge("a", LabelRouter::new("go"), HashMap::new());
    assert!(matches!(
        graph.compile(),
        Err(CompilationError::InvalidEdge(_))
    ));
}

#[test]
fn compile_fails_on_edge_out_of_end() {
    let mut graph = StateGraph::<Tally>::new();
    graph
        .add_node("a", AddNode::new("a", 1))
        .add_edge(START, "a")
        .add_edge("a", END)
        .add_edge(END, "a");
    assert!(matches!(
        graph.compile(),
        Err(CompilationError::InvalidEdge(_))
    ));
}
