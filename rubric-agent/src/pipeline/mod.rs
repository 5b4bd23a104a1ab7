//! # Grading pipeline
//!
//! The rubric / evaluation / feedback / report workflow built on the generic
//! graph engine:
//!
//! ```text
//! START → input_parser → rubric_generator ─(evaluation_router)─┬─ "skip" ──────────────→ END
//!                                                              └─ "evaluate" → evaluation_generator
//!                                                                   → feedback_generator → report_generator → END
//! ```
//!
//! [`RubricRunner`] compiles this graph once and runs it per request.

pub mod json;
mod llms;
pub mod nodes;
pub mod prompts;
mod router;
mod runner;
pub mod schema;
mod state;

use std::collections::HashMap;
use std::sync::Arc;

use crate::graph::{Router, StateGraph, END, START};

pub use llms::PipelineLlms;
pub use nodes::{EvaluationNode, FeedbackNode, InputParserNode, ReportNode, RubricNode};
pub use router::EvaluationRouter;
pub use runner::{RubricRunner, RunnerOptions};
pub use state::{ParsedInput, RubricState, RubricUpdate, TeacherInput};

pub const INPUT_PARSER: &str = "input_parser";
pub const RUBRIC_GENERATOR: &str = "rubric_generator";
pub const EVALUATION_GENERATOR: &str = "evaluation_generator";
pub const FEEDBACK_GENERATOR: &str = "feedback_generator";
pub const REPORT_GENERATOR: &str = "report_generator";
pub const EVALUATION_ROUTER: &str = "evaluation_router";

/// Router label: grade the submission.
pub const EVALUATE: &str = "evaluate";
/// Router label: stop after the rubric.
pub const SKIP: &str = "skip";

/// Builds the uncompiled grading graph with the default [`EvaluationRouter`].
pub fn build_graph(llms: &PipelineLlms) -> StateGraph<RubricState> {
    let router = Arc::new(EvaluationRouter::new(llms.classifier.clone()));
    build_graph_with_router(llms, router)
}

/// Builds the grading graph with a caller-supplied router behind `rubric_generator`.
///
/// The router must answer [`EVALUATE`] or [`SKIP`].
pub fn build_graph_with_router(
    llms: &PipelineLlms,
    router: Arc<dyn Router<RubricState>>,
) -> StateGraph<RubricState> {
    let path_map = HashMap::from([
        (EVALUATE.to_string(), EVALUATION_GENERATOR.to_string()),
        (SKIP.to_string(), END.to_string()),
    ]);

    let mut graph = StateGraph::<RubricState>::new();
    graph
        .add_node(INPUT_PARSER, Arc::new(InputParserNode::new(llms.parser.clone())))
        .add_node(RUBRIC_GENERATOR, Arc::new(RubricNode::new(llms.rubric.clone())))
        .add_node(
            EVALUATION_GENERATOR,
            Arc::new(EvaluationNode::new(llms.evaluation.clone())),
        )
        .add_node(
            FEEDBACK_GENERATOR,
            Arc::new(FeedbackNode::new(llms.feedback.clone())),
        )
        .add_node(REPORT_GENERATOR, Arc::new(ReportNode::new(llms.report.clone())))
        .add_edge(START, INPUT_PARSER)
        .add_edge(INPUT_PARSER, RUBRIC_GENERATOR)
        .add_conditional_edge(RUBRIC_GENERATOR, router, path_map)
        .add_edge(EVALUATION_GENERATOR, FEEDBACK_GENERATOR)
        .add_edge(FEEDBACK_GENERATOR, REPORT_GENERATOR)
        .add_edge(REPORT_GENERATOR, END);
    graph
}
