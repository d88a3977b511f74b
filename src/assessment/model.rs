//! Learner profile and recommendation data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::state::DialogueState;

/// Placeholder some prompts and older profiles use for "no answer".
pub const NOT_SPECIFIED: &str = "Not specified";

/// Everything we know about one learner.
///
/// Persisted as one entry of the profiles JSON file, keyed by user id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnerProfile {
    /// 0 means "not asked yet".
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub educational_background: Option<String>,
    #[serde(default)]
    pub professional_experience: Option<String>,
    /// Empty means "not asked yet".
    #[serde(default, deserialize_with = "null_as_empty")]
    pub passion: String,
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub interests: Option<String>,
    #[serde(default)]
    pub values: Option<String>,
    #[serde(default)]
    pub career_goals: Option<String>,
    #[serde(default)]
    pub personality_traits: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub location_asked: bool,
    /// Non-null exactly while the intake dialogue is in progress.
    #[serde(default, alias = "chatbot_state")]
    pub dialogue_state: Option<DialogueState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_completed_at: Option<DateTime<Utc>>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Default for LearnerProfile {
    fn default() -> Self {
        Self {
            age: 0,
            educational_background: None,
            professional_experience: None,
            passion: String::new(),
            skills: None,
            interests: None,
            values: None,
            career_goals: None,
            personality_traits: None,
            location: None,
            location_asked: false,
            dialogue_state: None,
            assessment_completed_at: None,
        }
    }
}

impl LearnerProfile {
    /// A brand-new profile at the start of the intake dialogue.
    pub fn new_intake() -> Self {
        Self {
            dialogue_state: Some(DialogueState::Initial),
            ..Default::default()
        }
    }

    pub fn has_age(&self) -> bool {
        self.age > 0
    }

    pub fn has_passion(&self) -> bool {
        !self.passion.is_empty()
    }

    pub fn has_location(&self) -> bool {
        self.location.as_deref().is_some_and(|l| !l.is_empty())
    }

    /// Whether the intake dialogue has finished.
    pub fn is_assessment_complete(&self) -> bool {
        self.dialogue_state.is_none()
    }
}

/// Focus areas picked by the LLM for a learner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusRecommendation {
    pub recommended_focus_areas: Vec<String>,
    pub reasoning: String,
}

/// Careers and soft skills for a chosen focus area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerRecommendation {
    pub recommended_careers: Vec<String>,
    pub soft_skills: Vec<String>,
    pub reasoning: String,
}

/// Free-text career suggestions from the LLM for a chosen focus area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerInsight {
    pub focus_area: String,
    pub explanation: String,
}
