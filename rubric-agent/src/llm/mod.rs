//! LLM client abstraction used by every generation step.
//!
//! Each pipeline node and the evaluation router depend on a callable that takes a
//! short conversation and returns assistant text; this module defines that seam,
//! a mock for tests and an OpenAI-compatible client (feature `openai`).

mod mock;

#[cfg(feature = "openai")]
mod openai;

pub use mock::MockLlm;

#[cfg(feature = "openai")]
pub use openai::ChatOpenAI;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::AgentError;
use crate::message::Message;

/// Response from an LLM completion: assistant message text.
///
/// **Interaction**: Returned by `LlmClient::invoke()`; generation nodes write
/// `content` into their state field, the parser and router decode it as JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmResponse {
    /// Assistant message content (plain text or markdown).
    pub content: String,
}

/// JSON schema a structured reply must follow.
///
/// Sent to the backend as a single function the model is required to call; the
/// call's arguments are the structured reply.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputSchema {
    /// Function name, e.g. `"parsed_input"`.
    pub name: String,
    pub description: Option<String>,
    /// JSON Schema object describing the arguments.
    pub parameters: Value,
}

/// LLM client: given messages, returns assistant text.
///
/// Implementations: `MockLlm` (fixed response), `ChatOpenAI` (real API, feature `openai`).
/// Every failure, including transport timeouts, must surface as
/// `AgentError::Generation`.
///
/// **Interaction**: Held as `Arc<dyn LlmClient>` in `PipelineLlms`; called by the
/// pipeline nodes and `EvaluationRouter`.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Invoke one turn: read messages, return assistant content.
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, AgentError>;

    /// Invoke one turn asking for a reply shaped by `schema`; `content` holds the JSON.
    ///
    /// The default sends the plain conversation and relies on the prompt; backends
    /// that can constrain output override it.
    async fn invoke_structured(
        &self,
        messages: &[Message],
        schema: &OutputSchema,
    ) -> Result<LlmResponse, AgentError> {
        let _ = schema;
        self.invoke(messages).await
    }
}
