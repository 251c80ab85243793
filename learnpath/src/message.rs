//! Chat message types for completion calls.
//!
//! Every assistant turn is one system prompt plus one user message; the gateway
//! receives them as a `&[Message]` slice so the wire conversion stays in one place.

/// A single message in a completion request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Message {
    /// System prompt framing the assistant persona; first in the slice.
    System(String),
    /// User input for this turn.
    User(String),
    /// Assistant reply text (returned, never sent — requests are single-turn).
    Assistant(String),
}

impl Message {
    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::System(content.into())
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::User(content.into())
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::Assistant(content.into())
    }

    /// Returns the message content regardless of role.
    pub fn content(&self) -> &str {
        match self {
            Self::System(s) | Self::User(s) | Self::Assistant(s) => s,
        }
    }
}
