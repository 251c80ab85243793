//! # LearnPath
//!
//! Core library for the LearnPath learning assistant: prompt resolution, the
//! completion gateway, the markdown-subset formatter, and the per-client chat
//! session state machine. The HTTP surface lives in the `serve` crate and the
//! binary in `cli`; this crate has no network listener of its own.
//!
//! ## Main modules
//!
//! - [`prompts`]: [`Mode`], [`FeatureKind`], [`FeatureRequest`], [`Difficulty`],
//!   [`ScheduleRequest`] and the resolution functions [`system_prompt`],
//!   [`feature_prompt`], [`schedule_prompt`]. Unrecognized mode strings fall
//!   back to the general-query persona; features and difficulty reject unknown
//!   values instead.
//! - [`llm`]: [`CompletionGateway`] trait with [`GroqChat`] (real
//!   OpenAI-compatible client) and [`MockGateway`] (scripted replies, call
//!   log); fixed sampling constants.
//! - [`format`]: [`format_message`] — bold/italic/links/headers/lists/breaks,
//!   rule order fixed.
//! - [`session`]: [`ChatSession`] — mode, feature credits, learning plan,
//!   schedule panel, transcript; [`PlanCapture`] selects the plan-capture
//!   reading.
//! - [`message`] / [`error`]: [`Message`] (System / User / Assistant) and
//!   [`GatewayError`].
//!
//! Key types are re-exported at crate root:
//! `use learnpath::{ChatSession, CompletionGateway, GroqChat, Mode};`

pub mod error;
pub mod format;
pub mod llm;
pub mod message;
pub mod prompts;
pub mod session;

pub use error::GatewayError;
pub use format::format_message;
pub use llm::{
    CompletionGateway, GroqChat, MockGateway, RecordedCall, DEFAULT_MODEL, MAX_COMPLETION_TOKENS,
    TEMPERATURE, TOP_P,
};
pub use message::Message;
pub use prompts::{
    feature_prompt, schedule_prompt, system_prompt, Difficulty, FeatureKind, FeatureRequest, Mode,
    ScheduleRequest, SCHEDULE_USER_MESSAGE,
};
pub use session::{
    ChatEntry, ChatSession, FeatureCredits, Modal, Phase, PlanCapture, SessionNotice, TurnOutcome,
};
