//! Rubric node: topic, objective and grade level in, markdown rubric out.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::graph::Node;
use crate::llm::LlmClient;
use crate::pipeline::prompts::{rubric_user_message, RUBRIC_SYSTEM_PROMPT};
use crate::pipeline::state::{RubricState, RubricUpdate};
use crate::pipeline::RUBRIC_GENERATOR;

pub struct RubricNode {
    llm: Arc<dyn LlmClient>,
}

impl RubricNode {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Node<RubricState> for RubricNode {
    fn id(&self) -> &str {
        RUBRIC_GENERATOR
    }

    async fn run(&self, state: &RubricState) -> Result<RubricUpdate, AgentError> {
        let input = state
            .parsed_input()
            .ok_or_else(|| super::missing(RUBRIC_GENERATOR, "parsed teacher_input"))?;
        tracing::info!(
            topic = %input.topic,
            objective = %input.objective,
            grade_level = input.grade_level,
            "generating rubric"
        );
        let rubric = super::generate_markdown(
            self.llm.as_ref(),
            RUBRIC_GENERATOR,
            RUBRIC_SYSTEM_PROMPT,
            rubric_user_message(input),
        )
        .await?;
        Ok(RubricUpdate {
            rubric: Some(rubric),
            ..Default::default()
        })
    }
}
