//! Generation nodes of the grading pipeline, one per step.
//!
//! Every node holds its own `Arc<dyn LlmClient>`, validates the fields it reads,
//! calls the client once and returns a single-field `RubricUpdate`.

mod evaluation;
mod feedback;
mod input_parser;
mod report;
mod rubric;

pub use evaluation::EvaluationNode;
pub use feedback::FeedbackNode;
pub use input_parser::InputParserNode;
pub use report::ReportNode;
pub use rubric::RubricNode;

use crate::error::AgentError;
use crate::llm::LlmClient;
use crate::message::Message;

/// Calls `llm` with a system + user message and returns non-blank markdown.
async fn generate_markdown(
    llm: &dyn LlmClient,
    step: &str,
    system: &str,
    user: String,
) -> Result<String, AgentError> {
    let response = llm
        .invoke(&[Message::system(system), Message::user(user)])
        .await?;
    let content = response.content.trim();
    if content.is_empty() {
        return Err(AgentError::Generation(format!("{} returned empty output", step)));
    }
    Ok(content.to_string())
}

/// Validation error naming the step and the missing input.
fn missing(step: &str, what: &str) -> AgentError {
    AgentError::Validation(format!("{}: {} is required", step, what))
}
