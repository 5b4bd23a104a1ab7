//! Mock LLM with a fixed reply, for tests and offline runs.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::llm::{LlmClient, LlmResponse, OutputSchema};
use crate::message::Message;

/// Mock LLM: returns the same content on every call, or always fails.
///
/// Counts calls and keeps the last conversation it was given so tests can assert
/// which steps ran and what they sent.
///
/// **Interaction**: Implements `LlmClient`; plugged into `PipelineLlms`.
#[derive(Debug)]
pub struct MockLlm {
    reply: Result<String, String>,
    calls: AtomicUsize,
    last_messages: Mutex<Vec<Message>>,
    last_schema: Mutex<Option<String>>,
}

impl MockLlm {
    /// Mock that answers every call with `content`.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            reply: Ok(content.into()),
            calls: AtomicUsize::new(0),
            last_messages: Mutex::new(Vec::new()),
            last_schema: Mutex::new(None),
        }
    }

    /// Mock whose every call fails with `AgentError::Generation(message)`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            calls: AtomicUsize::new(0),
            last_messages: Mutex::new(Vec::new()),
            last_schema: Mutex::new(None),
        }
    }

    /// Number of `invoke` calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Messages passed to the most recent `invoke`; empty if never called.
    pub fn last_messages(&self) -> Vec<Message> {
        self.last_messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }

    /// Name of the schema passed to the most recent `invoke_structured`, if any.
    pub fn last_schema(&self) -> Option<String> {
        self.last_schema.lock().ok().and_then(|s| s.clone())
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, AgentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_messages.lock() {
            *last = messages.to_vec();
        }
        match &self.reply {
            Ok(content) => Ok(LlmResponse {
                content: content.clone(),
            }),
            Err(message) => Err(AgentError::Generation(message.clone())),
        }
    }

    async fn invoke_structured(
        &self,
        messages: &[Message],
        schema: &OutputSchema,
    ) -> Result<LlmResponse, AgentError> {
        if let Ok(mut last) = self.last_schema.lock() {
            *last = Some(schema.name.clone());
        }
        self.invoke(messages).await
    }
}
