//! Report node: final summary table plus teacher and student notes.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::graph::Node;
use crate::llm::LlmClient;
use crate::pipeline::prompts::{report_user_message, REPORT_SYSTEM_PROMPT};
use crate::pipeline::state::{RubricState, RubricUpdate};
use crate::pipeline::REPORT_GENERATOR;

pub struct ReportNode {
    llm: Arc<dyn LlmClient>,
}

impl ReportNode {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Node<RubricState> for ReportNode {
    fn id(&self) -> &str {
        REPORT_GENERATOR
    }

    async fn run(&self, state: &RubricState) -> Result<RubricUpdate, AgentError> {
        let input = state
            .parsed_input()
            .ok_or_else(|| super::missing(REPORT_GENERATOR, "parsed teacher_input"))?;
        for (field, value) in [
            ("rubric", &state.rubric),
            ("evaluation", &state.evaluation),
            ("feedback", &state.feedback),
        ] {
            if value.trim().is_empty() {
                return Err(super::missing(REPORT_GENERATOR, field));
            }
        }
        tracing::info!(name = input.name_or_blank(), "generating report");
        let report = super::generate_markdown(
            self.llm.as_ref(),
            REPORT_GENERATOR,
            REPORT_SYSTEM_PROMPT,
            report_user_message(input, &state.rubric, &state.evaluation, &state.feedback),
        )
        .await?;
        Ok(RubricUpdate {
            report: Some(report),
            ..Default::default()
        })
    }
}
