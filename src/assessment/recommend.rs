//! Read-only recommendation operations over stored learner profiles.

use std::sync::Arc;

use crate::error::RecommendError;
use crate::llm::LlmGateway;
use crate::store::ProfileStore;

use super::catalog::{EVERGREEN_SOFT_SKILLS, FOCUS_AREAS, careers_for};
use super::model::{CareerInsight, CareerRecommendation, FocusRecommendation};
use super::parser::parse_recommendations;
use super::prompts::{career_recommendation_prompt, focus_recommendation_prompt};

/// Token budget for focus area and career explanation calls.
pub const RECOMMEND_MAX_TOKENS: u32 = 350;

/// Focus and career recommendations. Never touches dialogue state.
pub struct Recommender {
    store: Arc<dyn ProfileStore>,
    gateway: LlmGateway,
    model: Option<String>,
}

impl Recommender {
    pub fn new(store: Arc<dyn ProfileStore>, gateway: LlmGateway) -> Self {
        Self {
            store,
            gateway,
            model: None,
        }
    }

    /// Use a specific model for recommendation calls instead of the
    /// gateway default.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Ask the model for 3-5 focus areas from the catalog.
    pub async fn recommend_focus(
        &self,
        user_id: &str,
    ) -> Result<FocusRecommendation, RecommendError> {
        let profile = self.store.get(user_id).await?;
        let prompt = focus_recommendation_prompt(&profile, FOCUS_AREAS);

        let text = self
            .gateway
            .generate(&prompt, self.model.as_deref(), RECOMMEND_MAX_TOKENS)
            .await
            .inspect_err(|e| {
                tracing::warn!(user_id = user_id, kind = ?e.kind(), error = %e, "Focus recommendation failed");
            })?;

        let parsed = parse_recommendations(&text);
        let lines: Vec<String> = parsed
            .iter()
            .filter_map(|item| {
                item.reasoning
                    .as_ref()
                    .map(|reason| format!("{}: {reason}", item.name))
            })
            .collect();
        let areas: Vec<String> = parsed.into_iter().map(|item| item.name).collect();

        tracing::info!(
            user_id = user_id,
            areas = areas.len(),
            with_reasoning = lines.len(),
            "Recommended focus areas"
        );

        Ok(FocusRecommendation {
            recommended_focus_areas: areas,
            reasoning: lines.join("\n"),
        })
    }

    /// Careers and soft skills for a focus area, straight from the catalog.
    pub async fn recommend_careers(
        &self,
        user_id: &str,
        focus_area: &str,
    ) -> Result<CareerRecommendation, RecommendError> {
        self.store.get(user_id).await?;
        let careers = known_careers(focus_area)?;

        Ok(CareerRecommendation {
            recommended_careers: careers.iter().map(|c| c.to_string()).collect(),
            soft_skills: EVERGREEN_SOFT_SKILLS.iter().map(|s| s.to_string()).collect(),
            reasoning: format!(
                "Based on your chosen focus area of {focus_area}, here are some potential \
                 career paths and soft skills to consider."
            ),
        })
    }

    /// Free-text career suggestions for a focus area, tailored by the model.
    pub async fn explain_careers(
        &self,
        user_id: &str,
        focus_area: &str,
    ) -> Result<CareerInsight, RecommendError> {
        let profile = self.store.get(user_id).await?;
        known_careers(focus_area)?;

        let prompt =
            career_recommendation_prompt(&profile, focus_area, profile.location.as_deref());
        let explanation = self
            .gateway
            .generate(&prompt, self.model.as_deref(), RECOMMEND_MAX_TOKENS)
            .await?;

        Ok(CareerInsight {
            focus_area: focus_area.to_string(),
            explanation,
        })
    }
}

fn known_careers(focus_area: &str) -> Result<&'static [&'static str], RecommendError> {
    careers_for(focus_area).ok_or_else(|| {
        RecommendError::InvalidArgument(format!("Invalid focus area: {focus_area}"))
    })
}
