//! Groq chat completions client implementing `CompletionGateway`.
//!
//! Groq speaks the OpenAI Chat Completions wire format, so the client is an
//! `async_openai` client pointed at the Groq base URL. Requires `GROQ_API_KEY`
//! (or explicit config). Non-streaming, fixed sampling parameters from
//! [`crate::llm`], no stop sequence.
//!
//! **Interaction**: Implements `CompletionGateway`; used by `serve` handlers and
//! the CLI REPL session. Depends on `async_openai`.

use async_trait::async_trait;
use tracing::{debug, trace};

use crate::error::GatewayError;
use crate::llm::{CompletionGateway, DEFAULT_MODEL, MAX_COMPLETION_TOKENS, TEMPERATURE, TOP_P};
use crate::message::Message;

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
        ChatCompletionRequestUserMessage, CreateChatCompletionRequestArgs,
    },
    Client,
};

/// Default Groq API base (OpenAI-compatible path prefix included).
const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Groq chat completions client.
///
/// Build from the environment with [`GroqChat::from_env`] (`GROQ_API_KEY`,
/// optional `GROQ_BASE_URL` / `GROQ_MODEL`), or with explicit config via
/// [`GroqChat::with_config`] (tests point this at an unreachable base).
pub struct GroqChat {
    client: Client<OpenAIConfig>,
    model: String,
}

impl GroqChat {
    /// Builds a client from `GROQ_API_KEY`, `GROQ_BASE_URL`, and `GROQ_MODEL`.
    ///
    /// A missing key is not an error here: the first call fails at the service
    /// and surfaces as a normal gateway failure (the health endpoint reports
    /// key presence separately).
    pub fn from_env() -> Self {
        let api_key = std::env::var("GROQ_API_KEY").unwrap_or_default();
        let api_base =
            std::env::var("GROQ_BASE_URL").unwrap_or_else(|_| GROQ_API_BASE.to_string());
        let model = std::env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(api_base);
        Self::with_config(config, model)
    }

    /// Builds a client with custom config (e.g. custom API key or base URL).
    pub fn with_config(config: OpenAIConfig, model: impl Into<String>) -> Self {
        Self {
            client: Client::with_config(config),
            model: model.into(),
        }
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
}

#[async_trait]
impl CompletionGateway for GroqChat {
    async fn complete(&self, messages: &[Message]) -> Result<String, GatewayError> {
        let request_messages = Self::messages_to_request(messages);
        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.clone())
            .messages(request_messages)
            .temperature(TEMPERATURE)
            .top_p(TOP_P)
            .max_completion_tokens(MAX_COMPLETION_TOKENS)
            .build()
            .map_err(|e| GatewayError::CompletionFailed(format!("request build failed: {}", e)))?;

        debug!(
            model = %self.model,
            message_count = messages.len(),
            "chat completion create"
        );
        if let Ok(js) = serde_json::to_string_pretty(&request) {
            trace!(request = %js, "completion request body");
        }

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| GatewayError::CompletionFailed(format!("API error: {}", e)))?;

        if let Ok(js) = serde_json::to_string_pretty(&response) {
            trace!(response = %js, "completion response body");
        }

        let choice = response.choices.into_iter().next().ok_or_else(|| {
            GatewayError::CompletionFailed("completion returned no choices".to_string())
        })?;
        choice.message.content.ok_or_else(|| {
            GatewayError::CompletionFailed("completion had no message content".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: with_config builds a client without touching the network.
    #[test]
    fn with_config_creates_client() {
        let config = OpenAIConfig::new().with_api_key("test-key");
        let _ = GroqChat::with_config(config, DEFAULT_MODEL);
    }

    /// **Scenario**: complete() against an unreachable API base returns Err
    /// (no real API key needed).
    #[tokio::test]
    async fn complete_with_unreachable_base_returns_error() {
        let config = OpenAIConfig::new()
            .with_api_key("test-key")
            .with_api_base("https://127.0.0.1:1");
        let client = GroqChat::with_config(config, DEFAULT_MODEL);
        let messages = [Message::system("sys"), Message::user("Hello")];

        let result = client.complete(&messages).await;

        assert!(
            result.is_err(),
            "complete against unreachable base should return Err"
        );
    }

    /// **Scenario**: complete() against the real Groq API returns Ok when
    /// GROQ_API_KEY is set.
    #[tokio::test]
    #[ignore = "Requires GROQ_API_KEY; run with: cargo test -p learnpath complete_with_real_api -- --ignored"]
    async fn complete_with_real_api_returns_ok() {
        let _ = dotenv::dotenv();
        std::env::var("GROQ_API_KEY").expect("GROQ_API_KEY must be set for this test");

        let client = GroqChat::from_env();
        let messages = [Message::user("Say exactly: ok")];

        let reply = client
            .complete(&messages)
            .await
            .expect("complete with real API should succeed");
        assert!(!reply.is_empty(), "reply should have content");
    }
}
