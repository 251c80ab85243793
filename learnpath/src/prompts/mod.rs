//! Prompt resolution: mode/feature/schedule selectors and their instruction text.
//!
//! Purely textual construction, no I/O. The mode selector has a documented
//! fallback (unrecognized strings resolve to the general-query persona); feature
//! kind and difficulty have none — they are routed by fixed UI affordances and
//! reject unknown values instead.
//!
//! **Interaction**: `serve` handlers and `ChatSession` call [`system_prompt`],
//! [`feature_prompt`], and [`schedule_prompt`] to build the `(system, user)`
//! pair passed to [`CompletionGateway`](crate::llm::CompletionGateway).

mod templates;

pub use templates::SCHEDULE_USER_MESSAGE;

use templates::{
    BUSINESS_SYSTEM_PROMPT, COURSE_SYSTEM_PROMPT, EVALUATION_SYSTEM_TEMPLATE,
    EXAMINATION_SYSTEM_PROMPT, EXPLAINER_SYSTEM_PROMPT, JD_SYSTEM_PROMPT, MENTOR_SYSTEM_PROMPT,
    QUERY_SYSTEM_PROMPT, SCHEDULE_SYSTEM_TEMPLATE,
};

/// Top-level assistant persona selector for a chat turn.
///
/// Parsed from the wire with [`Mode::parse`]; anything outside the five known
/// strings falls back to [`Mode::Query`]. That fallback is the only lenient
/// parse in this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Personalized course plan from a topic or learning goal.
    Course,
    /// Study plan for a named exam or certification.
    Examination,
    /// Skill development plan from a job description.
    Jd,
    /// Business-education framework.
    Business,
    /// General learning query; the fallback persona.
    #[default]
    Query,
}

impl Mode {
    /// Resolves a wire string to a mode. Unrecognized values fall back to
    /// `Query` silently (documented behavior, not an error).
    pub fn parse(s: &str) -> Self {
        match s {
            "course" => Self::Course,
            "examination" => Self::Examination,
            "jd" => Self::Jd,
            "business" => Self::Business,
            _ => Self::Query,
        }
    }

    /// The wire string for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Course => "course",
            Self::Examination => "examination",
            Self::Jd => "jd",
            Self::Business => "business",
            Self::Query => "query",
        }
    }
}

/// Test difficulty for the evaluation feature. No fallback: unknown values are
/// rejected at the parse boundary (serde and `FromStr` alike).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// The wire string, also interpolated verbatim into the evaluation prompts.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(format!(
                "unknown difficulty: {} (use beginner, intermediate, or advanced)",
                s
            )),
        }
    }
}

/// One of the three credit-limited auxiliary capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    Explainer,
    Mentor,
    Evaluation,
}

impl FeatureKind {
    /// Per-session usage ceiling; credits start here and are never replenished.
    pub fn credit_ceiling(&self) -> u8 {
        match self {
            Self::Explainer => 5,
            Self::Mentor => 3,
            Self::Evaluation => 5,
        }
    }

    /// Display title for the feature modal.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Explainer => "Concept Explainer",
            Self::Mentor => "1:1 Mentorship Session",
            Self::Evaluation => "Test Simulator",
        }
    }
}

/// A submitted feature form: kind plus its user-supplied fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureRequest {
    Explainer { concept: String },
    Mentor { question: String },
    Evaluation { topic: String, difficulty: Difficulty },
}

impl FeatureRequest {
    /// The feature this request belongs to (drives the credit counter).
    pub fn kind(&self) -> FeatureKind {
        match self {
            Self::Explainer { .. } => FeatureKind::Explainer,
            Self::Mentor { .. } => FeatureKind::Mentor,
            Self::Evaluation { .. } => FeatureKind::Evaluation,
        }
    }

    /// Transcript line shown when the request is accepted, before the call settles.
    pub fn kickoff_line(&self) -> String {
        match self {
            Self::Explainer { concept } => {
                format!("I'm creating an engaging explainer for: {}", concept)
            }
            Self::Mentor { question } => format!(
                "I'm connecting you with an AI mentor for your question about: {}",
                question
            ),
            Self::Evaluation { topic, difficulty } => format!(
                "I'm creating a {} level test for: {}",
                difficulty.as_str(),
                topic
            ),
        }
    }
}

/// Inputs for one schedule generation: the stored plan plus calendar preferences.
///
/// `hours_per_week` is bounded 1–40 by the submitting form; the resolver
/// interpolates whatever it is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRequest {
    pub learning_plan: String,
    pub hours_per_week: u32,
    /// ISO date (YYYY-MM-DD) the schedule starts from.
    pub start_date: String,
    /// Weekday names; must be non-empty (guarded by the caller).
    pub preferred_days: Vec<String>,
}

/// Returns the fixed instruction block for a chat turn in `mode`.
pub fn system_prompt(mode: Mode) -> &'static str {
    match mode {
        Mode::Course => COURSE_SYSTEM_PROMPT,
        Mode::Examination => EXAMINATION_SYSTEM_PROMPT,
        Mode::Jd => JD_SYSTEM_PROMPT,
        Mode::Business => BUSINESS_SYSTEM_PROMPT,
        Mode::Query => QUERY_SYSTEM_PROMPT,
    }
}

/// Composes the `(system prompt, user message)` pair for a feature request.
///
/// Evaluation interpolates the difficulty into both halves; the other two
/// features pair a fixed system prompt with a composed (explainer) or verbatim
/// (mentor) user message.
pub fn feature_prompt(request: &FeatureRequest) -> (String, String) {
    match request {
        FeatureRequest::Explainer { concept } => (
            EXPLAINER_SYSTEM_PROMPT.to_string(),
            format!("Create an engaging explainer for: {}", concept),
        ),
        FeatureRequest::Mentor { question } => {
            (MENTOR_SYSTEM_PROMPT.to_string(), question.clone())
        }
        FeatureRequest::Evaluation { topic, difficulty } => (
            EVALUATION_SYSTEM_TEMPLATE.replace("{difficulty}", difficulty.as_str()),
            format!("Create a {} level test for: {}", difficulty.as_str(), topic),
        ),
    }
}

/// Composes the `(system prompt, user message)` pair for schedule generation.
///
/// All request fields land in the system prompt; the user message is the fixed
/// [`SCHEDULE_USER_MESSAGE`].
pub fn schedule_prompt(request: &ScheduleRequest) -> (String, &'static str) {
    let system = SCHEDULE_SYSTEM_TEMPLATE
        .replace("{learning_plan}", &request.learning_plan)
        .replace("{hours_per_week}", &request.hours_per_week.to_string())
        .replace("{start_date}", &request.start_date)
        .replace("{preferred_days}", &request.preferred_days.join(", "));
    (system, SCHEDULE_USER_MESSAGE)
}
