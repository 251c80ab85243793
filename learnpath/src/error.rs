//! Gateway error type.
//!
//! Used by `CompletionGateway::complete` and everything that forwards its result.

use thiserror::Error;

/// Failure from one completion call.
///
/// Transport failures, service error responses, and malformed/missing response
/// bodies all collapse into the single `CompletionFailed` variant: the call is
/// one-shot, so callers only need to know that no text came back.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The completion call produced no usable text (with the upstream reason).
    #[error("completion failed: {0}")]
    CompletionFailed(String),
}
