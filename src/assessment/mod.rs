//! Career assessment: the scripted intake dialogue and the recommendations
//! built on the resulting learner profile.
//!
//! A new learner is walked through age, passion, ten personality questions
//! and location. The answers are summarized by the LLM into personality
//! traits and interests, after which the profile feeds the focus-area and
//! career recommendations.

pub mod catalog;
pub mod engine;
pub mod model;
pub mod parser;
pub mod prompts;
pub mod recommend;
pub mod routes;
pub mod state;

pub use engine::{DialogueEngine, InteractResponse};
pub use model::{CareerInsight, CareerRecommendation, FocusRecommendation, LearnerProfile};
pub use recommend::Recommender;
pub use routes::{AppState, app_routes};
pub use state::DialogueState;
