//! Intake dialogue state: one variant per step, carrying only that step's data.

use serde::{Deserialize, Serialize};

/// Where a learner is in the scripted intake conversation.
///
/// Serialized with a `step` tag so the stored JSON keeps the
/// `{"step": "personality_questions", "question_index": 3, "responses": [...]}`
/// shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum DialogueState {
    /// Fresh profile; the next message decides which question comes first.
    Initial,
    AskAge,
    AskPassion,
    PersonalityQuestions {
        #[serde(default)]
        question_index: usize,
        /// One `"User: <answer>"` entry per answered question, in order.
        #[serde(default)]
        responses: Vec<String>,
    },
    /// All questions answered, waiting for the learner's location.
    AskLocation {
        #[serde(default)]
        responses: Vec<String>,
    },
    /// Location captured; trait and interest inference still has to succeed.
    ProcessingResponses {
        #[serde(default)]
        responses: Vec<String>,
    },
}

impl DialogueState {
    /// The serialized `step` name.
    pub fn step(&self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::AskAge => "ask_age",
            Self::AskPassion => "ask_passion",
            Self::PersonalityQuestions { .. } => "personality_questions",
            Self::AskLocation { .. } => "ask_location",
            Self::ProcessingResponses { .. } => "processing_responses",
        }
    }

    /// Personality answers collected so far.
    pub fn responses(&self) -> &[String] {
        match self {
            Self::PersonalityQuestions { responses, .. }
            | Self::AskLocation { responses }
            | Self::ProcessingResponses { responses } => responses,
            Self::Initial | Self::AskAge | Self::AskPassion => &[],
        }
    }
}

impl Default for DialogueState {
    fn default() -> Self {
        Self::Initial
    }
}

impl std::fmt::Display for DialogueState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.step())
    }
}
