//! LLM service - capability layer
//!
//! Owns the single outbound call to the chat-completion provider. Nothing
//! else in the crate talks to the network.
//!
//! ## Stack
//! - `async-openai` for the API call
//! - compatible with any OpenAI-style endpoint via `LLM_API_BASE_URL`

use std::future::Future;

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::GenerationError;

/// The provider seam.
///
/// [`QuestionService`](crate::services::QuestionService) needs exactly one
/// capability: send a system + user message pair, get text back. Injecting
/// it as a value lets tests substitute a double that fails (or answers)
/// deterministically.
pub trait ChatBackend: Send + Sync {
    /// One synchronous round trip to the provider. No retries.
    fn complete(
        &self,
        system_message: &str,
        user_message: &str,
    ) -> impl Future<Output = Result<String, GenerationError>> + Send;
}

/// Chat-completion client backed by the real provider.
pub struct LlmService {
    client: Client<OpenAIConfig>,
    model_name: String,
    max_tokens: u32,
    temperature: f32,
}

impl LlmService {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.llm_api_key)
            .with_api_base(&config.llm_api_base_url);

        Self {
            client: Client::with_config(openai_config),
            model_name: config.llm_model_name.clone(),
            max_tokens: config.llm_max_tokens,
            temperature: config.llm_temperature,
        }
    }
}

impl ChatBackend for LlmService {
    async fn complete(
        &self,
        system_message: &str,
        user_message: &str,
    ) -> Result<String, GenerationError> {
        debug!("calling LLM API, model: {}", self.model_name);
        debug!("user message length: {} chars", user_message.len());

        let system_msg = ChatCompletionRequestSystemMessageArgs::default()
            .content(system_message)
            .build()?;

        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(user_message)
            .build()?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(vec![
                ChatCompletionRequestMessage::System(system_msg),
                ChatCompletionRequestMessage::User(user_msg),
            ])
            .temperature(self.temperature)
            .max_tokens(self.max_tokens)
            .build()?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            warn!("LLM API call failed: {}", e);
            e
        })?;

        debug!("LLM API call succeeded");

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or(GenerationError::EmptyResponse)?;

        Ok(content.trim().to_string())
    }
}
