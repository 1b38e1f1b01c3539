use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

const TEMPERATURE: f32 = 0.7;
const MAX_COMPLETION_TOKENS: u32 = 1500;

/// A chat-style text completion backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Returns the trimmed text of the first choice.
    async fn complete(&self, system_message: &str, user_message: &str) -> AppResult<String>;

    /// Model identifier reported back to callers.
    fn model(&self) -> String;
}

pub struct OpenAiCompletionClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiCompletionClient {
    pub fn new(api_key: &SecretString, api_base: &str, model: &str) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(api_key.expose_secret())
            .with_api_base(api_base);

        Self {
            client: Client::with_config(openai_config),
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompletionClient {
    async fn complete(&self, system_message: &str, user_message: &str) -> AppResult<String> {
        log::debug!(
            "Requesting completion from {} ({} prompt chars)",
            self.model,
            user_message.chars().count()
        );

        let messages = vec![
            ChatCompletionRequestMessage::System(
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(system_message)
                    .build()?,
            ),
            ChatCompletionRequestMessage::User(
                ChatCompletionRequestUserMessageArgs::default()
                    .content(user_message)
                    .build()?,
            ),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .temperature(TEMPERATURE)
            .max_completion_tokens(MAX_COMPLETION_TOKENS)
            .build()?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            log::error!("Completion request to {} failed: {}", self.model, e);
            AppError::from(e)
        })?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| {
                AppError::CompletionError("completion response contained no text".to_string())
            })?;

        Ok(content.trim().to_string())
    }

    fn model(&self) -> String {
        self.model.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_reports_configured_model() {
        let key = SecretString::from("sk-test".to_string());
        let client = OpenAiCompletionClient::new(&key, "http://localhost:9999/v1", "gpt-4o-mini");
        assert_eq!(client.model(), "gpt-4o-mini");
    }

    #[test]
    fn test_client_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OpenAiCompletionClient>();
    }
}
