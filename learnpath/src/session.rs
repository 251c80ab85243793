//! Chat session state machine: mode, feature credits, learning plan, transcript.
//!
//! One session per client, no shared state across sessions. All methods take
//! `&mut self`, which gives the no-re-entrancy the product needs without a
//! mutex: a second action cannot start while one is mid-flight on the same
//! session.
//!
//! **Interaction**: Drives [`CompletionGateway`](crate::llm::CompletionGateway)
//! with prompts from [`crate::prompts`] and renders replies through
//! [`format_message`](crate::format::format_message). The CLI REPL owns one
//! session per process; the HTTP handlers stay stateless and do not use this.

use tracing::warn;

use crate::format::format_message;
use crate::llm::CompletionGateway;
use crate::message::Message;
use crate::prompts::{self, FeatureKind, FeatureRequest, Mode, ScheduleRequest};

/// Fixed user-facing notice and apology texts.
///
/// Refusal notices block before any network call; apology notices report a
/// failed call. The Display strings are the product copy shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionNotice {
    #[error("You've used all your credits for this feature. Please upgrade your plan for more.")]
    CreditsExhausted,
    #[error("No learning plan yet. Start a course to generate one first.")]
    NoLearningPlan,
    #[error("Please select at least one preferred day for learning.")]
    NoDaySelected,
    #[error("Sorry, I encountered an error. Please try again later.")]
    ChatFailed,
    #[error("Sorry, I couldn't create an explainer at this time. Please try again later.")]
    ExplainerFailed,
    #[error("Sorry, I couldn't connect with a mentor at this time. Please try again later.")]
    MentorFailed,
    #[error("Sorry, I couldn't create a test at this time. Please try again later.")]
    EvaluationFailed,
    #[error("Sorry, I couldn't create a schedule at this time. Please try again later.")]
    ScheduleFailed,
}

/// The apology shown when a feature's gateway call fails.
fn feature_apology(kind: FeatureKind) -> SessionNotice {
    match kind {
        FeatureKind::Explainer => SessionNotice::ExplainerFailed,
        FeatureKind::Mentor => SessionNotice::MentorFailed,
        FeatureKind::Evaluation => SessionNotice::EvaluationFailed,
    }
}

/// Result of one session action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Empty/whitespace input; nothing sent, nothing changed.
    Ignored,
    /// Gateway replied; the formatted response is in the transcript.
    Replied,
    /// Gateway call failed. For chat and features the apology is also appended
    /// to the transcript; for schedule the notice is blocking and the prior
    /// panel content is untouched.
    Failed(SessionNotice),
    /// Guard refused the action; no call was made.
    Refused(SessionNotice),
}

/// One display entry in the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEntry {
    /// User input, shown as typed.
    User(String),
    /// Assistant output: raw completion text plus rendered HTML.
    Assistant { raw: String, html: String },
    /// Transient "typing" placeholder; removed once the call settles.
    Typing,
}

/// Send phase: idle, or one chat turn awaiting its completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    AwaitingResponse,
}

/// Feature-modal visibility, independent of the send phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    Closed,
    Feature(FeatureKind),
    Schedule,
}

/// Which plan-capture rule applies after a chat reply.
///
/// `Literal` keeps the shipped behavior: the course-mode gate applies to the
/// "Module" marker only, so a reply containing "Week" stores a plan in any
/// mode. `CourseOnly` gates both markers on course mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlanCapture {
    #[default]
    Literal,
    CourseOnly,
}

/// Remaining uses per feature. Starts at each ceiling, only ever decremented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureCredits {
    explainer: u8,
    mentor: u8,
    evaluation: u8,
}

impl FeatureCredits {
    fn full() -> Self {
        Self {
            explainer: FeatureKind::Explainer.credit_ceiling(),
            mentor: FeatureKind::Mentor.credit_ceiling(),
            evaluation: FeatureKind::Evaluation.credit_ceiling(),
        }
    }

    /// Remaining uses for one feature.
    pub fn remaining(&self, kind: FeatureKind) -> u8 {
        match kind {
            FeatureKind::Explainer => self.explainer,
            FeatureKind::Mentor => self.mentor,
            FeatureKind::Evaluation => self.evaluation,
        }
    }

    /// Takes one credit. Returns false (and changes nothing) at zero.
    fn debit(&mut self, kind: FeatureKind) -> bool {
        let slot = match kind {
            FeatureKind::Explainer => &mut self.explainer,
            FeatureKind::Mentor => &mut self.mentor,
            FeatureKind::Evaluation => &mut self.evaluation,
        };
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }
}

/// Per-client chat session.
pub struct ChatSession<G> {
    gateway: G,
    mode: Mode,
    credits: FeatureCredits,
    learning_plan: Option<String>,
    schedule_panel: Option<String>,
    transcript: Vec<ChatEntry>,
    modal: Modal,
    phase: Phase,
    plan_capture: PlanCapture,
}

impl<G: CompletionGateway> ChatSession<G> {
    /// New session in course mode with full credits and no plan.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            mode: Mode::Course,
            credits: FeatureCredits::full(),
            learning_plan: None,
            schedule_panel: None,
            transcript: Vec::new(),
            modal: Modal::Closed,
            phase: Phase::Idle,
            plan_capture: PlanCapture::default(),
        }
    }

    /// Selects the plan-capture reading (builder).
    pub fn with_plan_capture(mut self, rule: PlanCapture) -> Self {
        self.plan_capture = rule;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn modal(&self) -> Modal {
        self.modal
    }

    pub fn credits(&self) -> &FeatureCredits {
        &self.credits
    }

    pub fn learning_plan(&self) -> Option<&str> {
        self.learning_plan.as_deref()
    }

    /// Schedule panel content, when a schedule has been generated.
    pub fn schedule_panel(&self) -> Option<&str> {
        self.schedule_panel.as_deref()
    }

    /// Scheduling is available exactly while a learning plan is stored.
    pub fn can_schedule(&self) -> bool {
        self.learning_plan.is_some()
    }

    pub fn transcript(&self) -> &[ChatEntry] {
        &self.transcript
    }

    /// Raw text of the most recent assistant entry, for plain-text frontends.
    pub fn last_reply(&self) -> Option<&str> {
        self.transcript.iter().rev().find_map(|e| match e {
            ChatEntry::Assistant { raw, .. } => Some(raw.as_str()),
            _ => None,
        })
    }

    /// Switches mode. Any non-course selection clears the schedule panel and
    /// the stored plan (scheduling disabled); re-selecting course clears
    /// nothing and restores nothing.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode != Mode::Course {
            self.schedule_panel = None;
            self.learning_plan = None;
        }
        self.mode = mode;
    }

    /// One chat turn: resolve the mode's system prompt, call the gateway,
    /// append the formatted reply (or the apology), capture the plan when the
    /// reply qualifies. Empty/whitespace input is a no-op.
    pub async fn send_message(&mut self, input: &str) -> TurnOutcome {
        let message = input.trim();
        if message.is_empty() {
            return TurnOutcome::Ignored;
        }

        self.transcript.push(ChatEntry::User(message.to_string()));
        self.transcript.push(ChatEntry::Typing);
        self.phase = Phase::AwaitingResponse;

        let system = prompts::system_prompt(self.mode);
        let result = self
            .gateway
            .complete(&[Message::system(system), Message::user(message)])
            .await;

        self.remove_typing();
        self.phase = Phase::Idle;

        match result {
            Ok(response) => {
                self.push_assistant(&response);
                if self.captures_plan(&response) {
                    self.learning_plan = Some(response);
                }
                TurnOutcome::Replied
            }
            Err(e) => {
                warn!(mode = %self.mode.as_str(), "chat completion failed: {}", e);
                self.push_assistant(&SessionNotice::ChatFailed.to_string());
                TurnOutcome::Failed(SessionNotice::ChatFailed)
            }
        }
    }

    /// Opens a feature modal. Refused (modal stays closed) at zero credits.
    pub fn open_feature(&mut self, kind: FeatureKind) -> Result<(), SessionNotice> {
        if self.credits.remaining(kind) == 0 {
            return Err(SessionNotice::CreditsExhausted);
        }
        self.modal = Modal::Feature(kind);
        Ok(())
    }

    /// Opens the schedule modal. Refused while no learning plan is stored.
    pub fn open_schedule(&mut self) -> Result<(), SessionNotice> {
        if self.learning_plan.is_none() {
            return Err(SessionNotice::NoLearningPlan);
        }
        self.modal = Modal::Schedule;
        Ok(())
    }

    /// Closes any open modal (user dismissal).
    pub fn close_modal(&mut self) {
        self.modal = Modal::Closed;
    }

    /// Submits a feature form. Refused with no call at zero credits; otherwise
    /// the credit is taken up front (kept even when the call fails), the
    /// kickoff line and then the reply or apology land in the transcript, and
    /// the modal closes once the call settles.
    pub async fn invoke_feature(&mut self, request: FeatureRequest) -> TurnOutcome {
        let kind = request.kind();
        if !self.credits.debit(kind) {
            return TurnOutcome::Refused(SessionNotice::CreditsExhausted);
        }

        self.push_assistant(&request.kickoff_line());
        let (system, user) = prompts::feature_prompt(&request);
        let result = self
            .gateway
            .complete(&[Message::system(system), Message::user(user)])
            .await;
        self.modal = Modal::Closed;

        match result {
            Ok(response) => {
                self.push_assistant(&response);
                TurnOutcome::Replied
            }
            Err(e) => {
                warn!(feature = ?kind, "feature completion failed: {}", e);
                let apology = feature_apology(kind);
                self.push_assistant(&apology.to_string());
                TurnOutcome::Failed(apology)
            }
        }
    }

    /// Generates a schedule from the stored plan. Refused with no call when no
    /// plan is stored or no day is selected. Success replaces the panel and
    /// appends a confirmation; failure leaves the prior panel untouched.
    pub async fn invoke_schedule(
        &mut self,
        hours_per_week: u32,
        start_date: &str,
        preferred_days: &[String],
    ) -> TurnOutcome {
        let Some(plan) = self.learning_plan.clone() else {
            return TurnOutcome::Refused(SessionNotice::NoLearningPlan);
        };
        if preferred_days.is_empty() {
            return TurnOutcome::Refused(SessionNotice::NoDaySelected);
        }

        let request = ScheduleRequest {
            learning_plan: plan,
            hours_per_week,
            start_date: start_date.to_string(),
            preferred_days: preferred_days.to_vec(),
        };
        let (system, user) = prompts::schedule_prompt(&request);
        let result = self
            .gateway
            .complete(&[Message::system(system), Message::user(user)])
            .await;

        match result {
            Ok(schedule) => {
                self.schedule_panel = Some(schedule);
                self.push_assistant(
                    "I've created a personalized learning schedule for you. \
                     You can view it in the Schedule panel below the chat.",
                );
                self.modal = Modal::Closed;
                TurnOutcome::Replied
            }
            Err(e) => {
                warn!("schedule completion failed: {}", e);
                TurnOutcome::Failed(SessionNotice::ScheduleFailed)
            }
        }
    }

    fn captures_plan(&self, response: &str) -> bool {
        match self.plan_capture {
            PlanCapture::Literal => {
                (self.mode == Mode::Course && response.contains("Module"))
                    || response.contains("Week")
            }
            PlanCapture::CourseOnly => {
                self.mode == Mode::Course
                    && (response.contains("Module") || response.contains("Week"))
            }
        }
    }

    fn push_assistant(&mut self, raw: &str) {
        self.transcript.push(ChatEntry::Assistant {
            raw: raw.to_string(),
            html: format_message(raw),
        });
    }

    fn remove_typing(&mut self) {
        self.transcript.retain(|e| !matches!(e, ChatEntry::Typing));
    }
}
