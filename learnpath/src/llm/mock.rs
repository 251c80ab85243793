//! Mock gateway for tests.
//!
//! Returns scripted replies (or a uniform failure) and records every call so
//! tests can assert exactly-one-call and no-call properties.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::GatewayError;
use crate::llm::CompletionGateway;
use crate::message::Message;

/// One recorded gateway call, split into the system/user halves tests care about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub system: String,
    pub user: String,
}

/// Mock gateway: scripted replies, shared call log.
///
/// Clones share the script and the call log, so a test can keep one handle for
/// assertions while the session or server owns another.
#[derive(Clone)]
pub struct MockGateway {
    script: Arc<Mutex<VecDeque<String>>>,
    fallback: Option<String>,
    fail: bool,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockGateway {
    /// Replies with the same fixed text on every call.
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            script: Arc::new(Mutex::new(VecDeque::new())),
            fallback: Some(reply.into()),
            fail: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Replies in order; once the script runs out, the last reply repeats.
    pub fn with_replies(replies: Vec<String>) -> Self {
        let fallback = replies.last().cloned();
        Self {
            script: Arc::new(Mutex::new(VecDeque::from(replies))),
            fallback,
            fail: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Fails every call with a uniform gateway error.
    pub fn failing() -> Self {
        Self {
            script: Arc::new(Mutex::new(VecDeque::new())),
            fallback: None,
            fail: true,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Calls recorded so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("call log poisoned").clone()
    }

    /// Number of calls recorded so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("call log poisoned").len()
    }
}

#[async_trait]
impl CompletionGateway for MockGateway {
    async fn complete(&self, messages: &[Message]) -> Result<String, GatewayError> {
        let system = messages
            .iter()
            .find_map(|m| match m {
                Message::System(s) => Some(s.clone()),
                _ => None,
            })
            .unwrap_or_default();
        let user = messages
            .iter()
            .find_map(|m| match m {
                Message::User(s) => Some(s.clone()),
                _ => None,
            })
            .unwrap_or_default();
        self.calls
            .lock()
            .expect("call log poisoned")
            .push(RecordedCall { system, user });

        if self.fail {
            return Err(GatewayError::CompletionFailed(
                "mock gateway failure".to_string(),
            ));
        }
        let scripted = self.script.lock().expect("script poisoned").pop_front();
        scripted
            .or_else(|| self.fallback.clone())
            .ok_or_else(|| GatewayError::CompletionFailed("mock script empty".to_string()))
    }
}
