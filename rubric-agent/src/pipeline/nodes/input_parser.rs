//! Input parser node: turns the teacher's free text into `ParsedInput`.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::graph::Node;
use crate::llm::LlmClient;
use crate::message::Message;
use crate::pipeline::json::parse_llm_json;
use crate::pipeline::prompts::INPUT_PARSER_SYSTEM_PROMPT;
use crate::pipeline::schema::parsed_input_schema;
use crate::pipeline::state::{ParsedInput, RubricState, RubricUpdate, TeacherInput};
use crate::pipeline::INPUT_PARSER;

/// Parses `teacher_input` (raw) into structured fields via a schema-constrained LLM reply.
///
/// **Interaction**: First node after START; its output feeds every later step.
pub struct InputParserNode {
    llm: Arc<dyn LlmClient>,
}

impl InputParserNode {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Node<RubricState> for InputParserNode {
    fn id(&self) -> &str {
        INPUT_PARSER
    }

    async fn run(&self, state: &RubricState) -> Result<RubricUpdate, AgentError> {
        let raw = match &state.teacher_input {
            TeacherInput::Raw(s) if !s.trim().is_empty() => s,
            TeacherInput::Raw(_) => return Err(super::missing(INPUT_PARSER, "teacher_input")),
            TeacherInput::Parsed(_) => {
                return Err(AgentError::Validation(format!(
                    "{}: teacher_input is already parsed",
                    INPUT_PARSER
                )))
            }
        };

        let response = self
            .llm
            .invoke_structured(
                &[
                    Message::system(INPUT_PARSER_SYSTEM_PROMPT),
                    Message::user(raw.clone()),
                ],
                &parsed_input_schema(),
            )
            .await?;
        let parsed: ParsedInput = parse_llm_json(INPUT_PARSER, &response.content)?;
        tracing::info!(
            grade_level = parsed.grade_level,
            topic = %parsed.topic,
            has_submission = parsed.submission().is_some(),
            "parsed teacher input"
        );

        Ok(RubricUpdate {
            teacher_input: Some(TeacherInput::Parsed(parsed)),
            ..Default::default()
        })
    }
}
