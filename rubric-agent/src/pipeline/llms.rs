//! Per-step generation clients.

use std::sync::Arc;

use crate::llm::LlmClient;

/// One LLM client per pipeline step. Steps may share the same client.
#[derive(Clone)]
pub struct PipelineLlms {
    pub parser: Arc<dyn LlmClient>,
    pub rubric: Arc<dyn LlmClient>,
    pub classifier: Arc<dyn LlmClient>,
    pub evaluation: Arc<dyn LlmClient>,
    pub feedback: Arc<dyn LlmClient>,
    pub report: Arc<dyn LlmClient>,
}

impl PipelineLlms {
    /// Uses `llm` for every step.
    pub fn shared(llm: Arc<dyn LlmClient>) -> Self {
        Self {
            parser: llm.clone(),
            rubric: llm.clone(),
            classifier: llm.clone(),
            evaluation: llm.clone(),
            feedback: llm.clone(),
            report: llm,
        }
    }
}
