//! Node order, step budget accounting, checkpoints and failure propagation.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rubric_agent::{
    build_graph, AgentError, Checkpointer, MemorySaver, MockLlm, NodeMiddleware, NodeRunInner,
    PipelineLlms, RubricRunner, RubricState, RubricUpdate, RunnerOptions,
};

use crate::common::{Stubs, SUBMISSION, TEACHER_INPUT};

#[derive(Default)]
struct OrderRecorder {
    order: Mutex<Vec<String>>,
}

#[async_trait]
impl NodeMiddleware<RubricState> for OrderRecorder {
    async fn around_run(
        &self,
        node_id: &str,
        state: RubricState,
        inner: NodeRunInner<RubricState>,
    ) -> Result<RubricUpdate, AgentError> {
        self.order.lock().unwrap().push(node_id.to_string());
        inner(state).await
    }
}

fn options(step_budget: usize) -> RunnerOptions {
    RunnerOptions {
        step_budget,
        verbose: false,
    }
}

#[tokio::test]
async fn full_path_runs_nodes_in_pipeline_order() {
    let stubs = Stubs::new(Some(SUBMISSION), "yes");
    let recorder = Arc::new(OrderRecorder::default());
    let graph = build_graph(&stubs.llms()).with_middleware(recorder.clone());
    let runner = RubricRunner::from_graph(graph, None, RunnerOptions::default()).unwrap();

    runner.run(TEACHER_INPUT, None).await.unwrap();

    assert_eq!(
        *recorder.order.lock().unwrap(),
        vec![
            "input_parser",
            "rubric_generator",
            "evaluation_generator",
            "feedback_generator",
            "report_generator",
        ]
    );
}

/// Full path = 5 nodes + 1 router call.
#[tokio::test]
async fn full_path_needs_six_steps() {
    let stubs = Stubs::new(Some(SUBMISSION), "yes");
    let ok = RubricRunner::new(stubs.llms(), None, options(6)).unwrap();
    assert!(ok.run(TEACHER_INPUT, None).await.is_ok());

    let short = RubricRunner::new(stubs.llms(), None, options(5)).unwrap();
    let err = short.run(TEACHER_INPUT, None).await.unwrap_err();
    assert_eq!(err, AgentError::StepBudgetExceeded { budget: 5 });
}

/// Skip path = 2 nodes + 1 router call.
#[tokio::test]
async fn skip_path_needs_three_steps() {
    let stubs = Stubs::new(None, "yes");
    let ok = RubricRunner::new(stubs.llms(), None, options(3)).unwrap();
    assert!(ok.run("루브릭만", None).await.is_ok());

    let short = RubricRunner::new(stubs.llms(), None, options(2)).unwrap();
    let err = short.run("루브릭만", None).await.unwrap_err();
    assert_eq!(err.kind().as_str(), "step_budget_exceeded");
}

#[tokio::test]
async fn last_checkpoint_equals_final_state() {
    let stubs = Stubs::new(Some(SUBMISSION), "yes");
    let cp = Arc::new(MemorySaver::<RubricState>::new());
    let runner = RubricRunner::new(stubs.llms(), Some(cp.clone()), RunnerOptions::default()).unwrap();

    let state = runner.run(TEACHER_INPUT, Some("t-final")).await.unwrap();

    let saved = cp.load("t-final").await.unwrap().unwrap();
    assert_eq!(saved.state, state);
    assert_eq!(saved.metadata.node_id, "report_generator");
    assert_eq!(saved.metadata.step, 6);
}

#[tokio::test]
async fn same_thread_id_starts_fresh() {
    let stubs = Stubs::new(Some(SUBMISSION), "yes");
    let cp = Arc::new(MemorySaver::<RubricState>::new());
    let runner = RubricRunner::new(stubs.llms(), Some(cp.clone()), RunnerOptions::default()).unwrap();

    runner.run(TEACHER_INPUT, Some("t-same")).await.unwrap();
    let second = runner.run(TEACHER_INPUT, Some("t-same")).await.unwrap();

    assert_eq!(second.rubric, "RUBRIC_X");
    assert_eq!(stubs.parser.call_count(), 2);
    assert_eq!(stubs.rubric.call_count(), 2);
    assert_eq!(cp.len(), 1);
}

#[tokio::test]
async fn generation_failure_aborts_and_keeps_previous_checkpoint() {
    let stubs = Stubs::new(Some(SUBMISSION), "yes");
    let mut llms = stubs.llms();
    llms.feedback = Arc::new(MockLlm::failing("upstream 503"));
    let cp = Arc::new(MemorySaver::<RubricState>::new());
    let runner = RubricRunner::new(llms, Some(cp.clone()), RunnerOptions::default()).unwrap();

    let err = runner.run(TEACHER_INPUT, Some("t-fail")).await.unwrap_err();
    assert_eq!(err, AgentError::Generation("upstream 503".into()));

    let saved = cp.load("t-fail").await.unwrap().unwrap();
    assert_eq!(saved.metadata.node_id, "evaluation_generator");
    assert_eq!(saved.state.evaluation, "EVAL_Y");
    assert!(saved.state.feedback.is_empty());
    assert_eq!(stubs.report.call_count(), 0);
}

#[tokio::test]
async fn blank_teacher_input_is_validation_error() {
    let llm = Arc::new(MockLlm::new("unused"));
    let runner = RubricRunner::new(
        PipelineLlms::shared(llm.clone()),
        None,
        RunnerOptions::default(),
    )
    .unwrap();
    let err = runner.run("  ", None).await.unwrap_err();
    assert!(matches!(err, AgentError::Validation(_)));
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn verbose_runner_produces_same_result() {
    let stubs = Stubs::new(None, "yes");
    let runner = RubricRunner::new(
        stubs.llms(),
        None,
        RunnerOptions {
            verbose: true,
            ..RunnerOptions::default()
        },
    )
    .unwrap();
    let state = runner.run("루브릭만", None).await.unwrap();
    assert_eq!(state.rubric, "RUBRIC_X");
}
