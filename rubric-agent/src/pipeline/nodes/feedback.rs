//! Feedback node: rubric and evaluation in, feedback out.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::graph::Node;
use crate::llm::LlmClient;
use crate::pipeline::prompts::{feedback_user_message, FEEDBACK_SYSTEM_PROMPT};
use crate::pipeline::state::{RubricState, RubricUpdate};
use crate::pipeline::FEEDBACK_GENERATOR;

pub struct FeedbackNode {
    llm: Arc<dyn LlmClient>,
}

impl FeedbackNode {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Node<RubricState> for FeedbackNode {
    fn id(&self) -> &str {
        FEEDBACK_GENERATOR
    }

    async fn run(&self, state: &RubricState) -> Result<RubricUpdate, AgentError> {
        if state.rubric.trim().is_empty() {
            return Err(super::missing(FEEDBACK_GENERATOR, "rubric"));
        }
        if state.evaluation.trim().is_empty() {
            return Err(super::missing(FEEDBACK_GENERATOR, "evaluation"));
        }
        tracing::info!("generating feedback");
        let feedback = super::generate_markdown(
            self.llm.as_ref(),
            FEEDBACK_GENERATOR,
            FEEDBACK_SYSTEM_PROMPT,
            feedback_user_message(&state.rubric, &state.evaluation),
        )
        .await?;
        Ok(RubricUpdate {
            feedback: Some(feedback),
            ..Default::default()
        })
    }
}
