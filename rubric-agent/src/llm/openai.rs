//! OpenAI Chat Completions client implementing `LlmClient` (ChatOpenAI).
//!
//! Uses any OpenAI-compatible Chat Completions endpoint. Requires an API key,
//! from `OPENAI_API_KEY` or explicit config. Structured replies are requested as
//! a single required tool call whose arguments follow the given schema.
//!
//! **Interaction**: Implements `LlmClient`; used by the pipeline like `MockLlm`.
//! Depends on `async_openai` (feature `openai`).

use async_trait::async_trait;

use crate::config::RubricConfig;
use crate::error::AgentError;
use crate::llm::{LlmClient, LlmResponse, OutputSchema};
use crate::message::Message;

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionMessageToolCalls, ChatCompletionRequestMessage,
        ChatCompletionRequestSystemMessage, ChatCompletionRequestUserMessage, ChatCompletionTool,
        ChatCompletionToolChoiceOption, ChatCompletionTools, CreateChatCompletionRequest,
        CreateChatCompletionRequestArgs, FunctionObject, ToolChoiceOptions,
    },
    Client,
};

/// OpenAI Chat Completions client implementing `LlmClient`.
///
/// Uses `OPENAI_API_KEY` from the environment by default; or provide config via
/// `ChatOpenAI::with_config` / `ChatOpenAI::from_config`.
pub struct ChatOpenAI {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: Option<f32>,
}

impl ChatOpenAI {
    /// Build client with default config (API key from `OPENAI_API_KEY` env).
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            model: model.into(),
            temperature: None,
        }
    }

    /// Build client with custom config (e.g. custom API key or base URL).
    pub fn with_config(config: OpenAIConfig, model: impl Into<String>) -> Self {
        Self {
            client: Client::with_config(config),
            model: model.into(),
            temperature: None,
        }
    }

    /// Build client from env-derived config: key, base URL, model and temperature.
    pub fn from_config(config: &RubricConfig) -> Self {
        let mut openai = OpenAIConfig::new().with_api_base(config.openai_api_base.clone());
        if let Some(ref key) = config.openai_api_key {
            openai = openai.with_api_key(key.clone());
        }
        Self::with_config(openai, config.openai_model.clone())
            .with_temperature(config.openai_temperature)
    }

    /// Set temperature (0-2). Lower values are more deterministic.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Convert our `Message` list to OpenAI request messages.
    fn messages_to_request(messages: &[Message]) -> Vec<ChatCompletionRequestMessage> {
        messages
            .iter()
            .map(|m| match m {
                Message::System(s) => ChatCompletionRequestMessage::System(
                    ChatCompletionRequestSystemMessage::from(s.as_str()),
                ),
                Message::User(s) => ChatCompletionRequestMessage::User(
                    ChatCompletionRequestUserMessage::from(s.as_str()),
                ),
                Message::Assistant(s) => {
                    ChatCompletionRequestMessage::Assistant((s.as_str()).into())
                }
            })
            .collect()
    }

    /// Request args shared by plain and structured calls.
    fn request_args(&self, messages: &[Message]) -> CreateChatCompletionRequestArgs {
        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(self.model.clone());
        args.messages(Self::messages_to_request(messages));
        if let Some(t) = self.temperature {
            args.temperature(t);
        }
        args
    }

    /// The schema as the one function the model must call.
    fn schema_tool(schema: &OutputSchema) -> ChatCompletionTools {
        ChatCompletionTools::Function(ChatCompletionTool {
            function: FunctionObject {
                name: schema.name.clone(),
                description: schema.description.clone(),
                parameters: Some(schema.parameters.clone()),
                ..Default::default()
            },
        })
    }

    fn build(
        args: &mut CreateChatCompletionRequestArgs,
    ) -> Result<CreateChatCompletionRequest, AgentError> {
        args.build()
            .map_err(|e| AgentError::Generation(format!("OpenAI request build failed: {}", e)))
    }
}

#[async_trait]
impl LlmClient for ChatOpenAI {
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, AgentError> {
        let request = Self::build(&mut self.request_args(messages))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| AgentError::Generation(format!("OpenAI API error: {}", e)))?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AgentError::Generation("OpenAI returned no choices".to_string()))?;

        Ok(LlmResponse {
            content: choice.message.content.unwrap_or_default(),
        })
    }

    async fn invoke_structured(
        &self,
        messages: &[Message],
        schema: &OutputSchema,
    ) -> Result<LlmResponse, AgentError> {
        let mut args = self.request_args(messages);
        args.tools(vec![Self::schema_tool(schema)]);
        args.tool_choice(ChatCompletionToolChoiceOption::Mode(ToolChoiceOptions::Required));
        let request = Self::build(&mut args)?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| AgentError::Generation(format!("OpenAI API error: {}", e)))?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AgentError::Generation("OpenAI returned no choices".to_string()))?;

        let msg = choice.message;
        let arguments = msg.tool_calls.unwrap_or_default().into_iter().find_map(|tc| match tc {
            ChatCompletionMessageToolCalls::Function(f) if f.function.name == schema.name => {
                Some(f.function.arguments)
            }
            _ => None,
        });
        // Some compatible endpoints ignore tool_choice and answer in text.
        let content = match arguments {
            Some(arguments) => arguments,
            None => msg.content.unwrap_or_default(),
        };
        Ok(LlmResponse { content })
    }
}
