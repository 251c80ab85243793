//! Completion gateway: one outbound call to the text-generation service.
//!
//! The trait seam keeps handlers and the chat session testable without a
//! network: `GroqChat` talks to the real OpenAI-compatible endpoint,
//! `MockGateway` records calls and returns scripted replies.
//!
//! Sampling parameters are fixed configuration constants — never derived from
//! the request. One call per invocation: no retry, no backoff, no caching, no
//! independent timeout beyond what the transport enforces.

mod groq;
mod mock;

pub use groq::GroqChat;
pub use mock::{MockGateway, RecordedCall};

use async_trait::async_trait;

use crate::error::GatewayError;
use crate::message::Message;

/// Model identifier sent with every completion request.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Sampling temperature (fixed).
pub const TEMPERATURE: f32 = 1.0;

/// Nucleus-sampling top-p (fixed).
pub const TOP_P: f32 = 1.0;

/// Output token ceiling (fixed).
pub const MAX_COMPLETION_TOKENS: u32 = 1024;

/// Gateway to the external completion capability.
///
/// Callers pass the full message list for one turn (system prompt first, then
/// the user message); implementations return the first generated message's text
/// verbatim or a single uniform failure.
///
/// **Interaction**: Implemented by [`GroqChat`] and [`MockGateway`]; called by
/// the `serve` handlers and by [`ChatSession`](crate::session::ChatSession).
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Invoke one completion: read messages, return assistant text.
    async fn complete(&self, messages: &[Message]) -> Result<String, GatewayError>;
}
