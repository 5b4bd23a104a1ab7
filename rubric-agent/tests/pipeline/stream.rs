//! Streaming a pipeline run.

use std::collections::HashSet;

use rubric_agent::{AgentError, RubricRunner, RunnerOptions, StreamEvent, StreamMode};
use tokio_stream::StreamExt;

use crate::common::{Stubs, SUBMISSION, TEACHER_INPUT};

#[tokio::test]
async fn stream_updates_name_each_node() {
    let stubs = Stubs::new(Some(SUBMISSION), "yes");
    let runner = RubricRunner::new(stubs.llms(), None, RunnerOptions::default()).unwrap();

    let events: Vec<_> = runner
        .stream(TEACHER_INPUT, None, HashSet::from([StreamMode::Updates]))
        .collect()
        .await;

    let nodes: Vec<String> = events
        .iter()
        .filter_map(|e| match e {
            StreamEvent::Updates { node_id, .. } => Some(node_id.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(
        nodes,
        vec![
            "input_parser",
            "rubric_generator",
            "evaluation_generator",
            "feedback_generator",
            "report_generator",
        ]
    );
    match events.last() {
        Some(StreamEvent::Updates { state, .. }) => assert_eq!(state.report, "REPORT_W"),
        other => panic!("expected final update, got {:?}", other),
    }
}

#[tokio::test]
async fn stream_ends_with_error_event_on_failure() {
    let stubs = Stubs::new(Some(SUBMISSION), "yes");
    let runner = RubricRunner::new(
        stubs.llms(),
        None,
        RunnerOptions {
            step_budget: 2,
            verbose: false,
        },
    )
    .unwrap();

    let events: Vec<_> = runner
        .stream(TEACHER_INPUT, None, HashSet::from([StreamMode::Values]))
        .collect()
        .await;

    assert_eq!(events.len(), 3);
    assert!(matches!(events[0], StreamEvent::Values(_)));
    assert!(matches!(
        events[2],
        StreamEvent::Error(AgentError::StepBudgetExceeded { budget: 2 })
    ));
}
