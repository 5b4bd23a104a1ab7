//! Evaluation node: grades the submission against the rubric.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::graph::Node;
use crate::llm::LlmClient;
use crate::pipeline::prompts::{evaluation_user_message, EVALUATION_SYSTEM_PROMPT};
use crate::pipeline::state::{RubricState, RubricUpdate};
use crate::pipeline::EVALUATION_GENERATOR;

pub struct EvaluationNode {
    llm: Arc<dyn LlmClient>,
}

impl EvaluationNode {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Node<RubricState> for EvaluationNode {
    fn id(&self) -> &str {
        EVALUATION_GENERATOR
    }

    async fn run(&self, state: &RubricState) -> Result<RubricUpdate, AgentError> {
        let input = state
            .parsed_input()
            .ok_or_else(|| super::missing(EVALUATION_GENERATOR, "parsed teacher_input"))?;
        if state.rubric.trim().is_empty() {
            return Err(super::missing(EVALUATION_GENERATOR, "rubric"));
        }
        let submission = input
            .submission()
            .ok_or_else(|| super::missing(EVALUATION_GENERATOR, "student_submission"))?;

        tracing::info!(name = input.name_or_blank(), "evaluating submission");
        let evaluation = super::generate_markdown(
            self.llm.as_ref(),
            EVALUATION_GENERATOR,
            EVALUATION_SYSTEM_PROMPT,
            evaluation_user_message(&state.rubric, input, submission),
        )
        .await?;
        Ok(RubricUpdate {
            evaluation: Some(evaluation),
            ..Default::default()
        })
    }
}
