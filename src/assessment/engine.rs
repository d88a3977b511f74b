//! Dialogue engine: drives the scripted intake conversation.
//!
//! `advance` is the pure transition function over `DialogueState`. The
//! `DialogueEngine` wraps it with per-user serialization, profile storage,
//! persistence checkpoints, and the LLM inference the final step needs.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::error::{LlmError, StoreError};
use crate::llm::LlmGateway;
use crate::store::ProfileStore;

use super::catalog::{PERSONALITY_QUESTIONS, messages};
use super::model::LearnerProfile;
use super::prompts::{interests_prompt, personality_inference_prompt};
use super::state::DialogueState;

/// Token budget for each trait and interest summary.
pub const INFERENCE_MAX_TOKENS: u32 = 100;

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Infer traits and interests from the transcript, then finish the intake.
    Infer {
        responses: Vec<String>,
        /// Reply to send if inference succeeds.
        acknowledgement: String,
    },
}

/// Outcome of feeding one message to the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State to store. Only `Effect::Infer` may go on to clear it.
    pub next: DialogueState,
    pub reply: String,
    pub effect: Effect,
}

impl Transition {
    fn reply(next: DialogueState, reply: impl Into<String>) -> Self {
        Self {
            next,
            reply: reply.into(),
            effect: Effect::None,
        }
    }
}

/// Parse an age answer. Zero is the "unset" marker, so it is rejected too.
fn parse_age(message: &str) -> Option<u32> {
    message.trim().parse::<u32>().ok().filter(|age| *age > 0)
}

/// Apply one incoming message to `state`, mutating the profile fields the
/// step collects.
pub fn advance(state: DialogueState, profile: &mut LearnerProfile, message: &str) -> Transition {
    let questions = PERSONALITY_QUESTIONS;

    match state {
        DialogueState::Initial => {
            if !profile.has_age() {
                Transition::reply(DialogueState::AskAge, messages::AGE_PROMPT)
            } else if !profile.has_passion() {
                Transition::reply(DialogueState::AskPassion, messages::PASSION_PROMPT)
            } else {
                Transition::reply(
                    DialogueState::PersonalityQuestions {
                        question_index: 0,
                        responses: Vec::new(),
                    },
                    questions[0],
                )
            }
        }

        DialogueState::AskAge => match parse_age(message) {
            Some(age) => {
                profile.age = age;
                Transition::reply(DialogueState::AskPassion, messages::PASSION_AFTER_AGE)
            }
            None => Transition::reply(DialogueState::AskAge, messages::INVALID_AGE),
        },

        DialogueState::AskPassion => {
            let passion = message.trim();
            if passion.is_empty() {
                return Transition::reply(DialogueState::AskPassion, messages::EMPTY_PASSION);
            }
            profile.passion = passion.to_string();
            Transition::reply(
                DialogueState::PersonalityQuestions {
                    question_index: 0,
                    responses: Vec::new(),
                },
                questions[0],
            )
        }

        DialogueState::PersonalityQuestions {
            question_index,
            mut responses,
        } if question_index < questions.len() => {
            responses.push(format!("User: {message}"));
            let answered = question_index + 1;
            if answered < questions.len() {
                Transition::reply(
                    DialogueState::PersonalityQuestions {
                        question_index: answered,
                        responses,
                    },
                    questions[answered],
                )
            } else {
                profile.location_asked = true;
                Transition::reply(
                    DialogueState::AskLocation { responses },
                    messages::LOCATION_PROMPT,
                )
            }
        }

        // Profiles saved by older builds park here once every question is
        // answered; the location flags say which step they really are on.
        DialogueState::PersonalityQuestions { responses, .. } => {
            if !profile.location_asked {
                profile.location_asked = true;
                Transition::reply(
                    DialogueState::AskLocation { responses },
                    messages::LOCATION_PROMPT,
                )
            } else if !profile.has_location() {
                advance(DialogueState::AskLocation { responses }, profile, message)
            } else {
                advance(DialogueState::ProcessingResponses { responses }, profile, message)
            }
        }

        DialogueState::AskLocation { responses } => {
            let location = message.trim().to_string();
            let acknowledgement = messages::location_ack(&location);
            profile.location = Some(location);
            profile.location_asked = true;
            Transition {
                next: DialogueState::ProcessingResponses {
                    responses: responses.clone(),
                },
                reply: acknowledgement.clone(),
                effect: Effect::Infer {
                    responses,
                    acknowledgement,
                },
            }
        }

        DialogueState::ProcessingResponses { responses } => Transition {
            next: DialogueState::ProcessingResponses {
                responses: responses.clone(),
            },
            reply: messages::PROCESSING_ACK.to_string(),
            effect: Effect::Infer {
                responses,
                acknowledgement: messages::PROCESSING_ACK.to_string(),
            },
        },
    }
}

/// Reply to one `interact` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractResponse {
    pub user_id: String,
    pub response: String,
    pub is_assessment_complete: bool,
}

/// Runs the intake dialogue for every user.
pub struct DialogueEngine {
    store: Arc<dyn ProfileStore>,
    gateway: LlmGateway,
    /// Model for trait and interest inference. `None` uses the gateway default.
    inference_model: Option<String>,
    /// One gate per user id so messages for the same user never interleave.
    user_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl DialogueEngine {
    pub fn new(store: Arc<dyn ProfileStore>, gateway: LlmGateway) -> Self {
        Self {
            store,
            gateway,
            inference_model: None,
            user_locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_inference_model(mut self, model: impl Into<String>) -> Self {
        self.inference_model = Some(model.into());
        self
    }

    async fn user_lock(&self, user_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.user_locks.lock().await;
        Arc::clone(locks.entry(user_id.to_string()).or_default())
    }

    /// Drop the user's gate once no other turn holds or waits on it.
    async fn release_user_lock(&self, user_id: &str, gate: Arc<Mutex<()>>) {
        let mut locks = self.user_locks.lock().await;
        // One reference in the map, one in `gate`.
        if Arc::strong_count(&gate) == 2 {
            locks.remove(user_id);
        }
    }

    /// Feed one learner message through the state machine.
    pub async fn interact(
        &self,
        user_id: &str,
        message: &str,
    ) -> Result<InteractResponse, StoreError> {
        let gate = self.user_lock(user_id).await;
        let result = {
            let _turn = gate.lock().await;
            self.run_turn(user_id, message).await
        };
        self.release_user_lock(user_id, gate).await;
        result
    }

    async fn run_turn(
        &self,
        user_id: &str,
        message: &str,
    ) -> Result<InteractResponse, StoreError> {
        let mut profile = self.store.get_or_create(user_id).await?;

        let Some(state) = profile.dialogue_state.take() else {
            tracing::debug!(user_id = user_id, "Message after assessment completed");
            return Ok(InteractResponse {
                user_id: user_id.to_string(),
                response: messages::ALREADY_COMPLETE.to_string(),
                is_assessment_complete: true,
            });
        };

        let from = state.step();
        let transition = advance(state, &mut profile, message);
        tracing::info!(
            user_id = user_id,
            from = from,
            to = transition.next.step(),
            "Dialogue step"
        );

        let (reply, complete) = match transition.effect {
            Effect::None => {
                profile.dialogue_state = Some(transition.next);
                (transition.reply, false)
            }
            Effect::Infer {
                responses,
                acknowledgement,
            } => match self.infer_profile(&responses).await {
                Ok((traits, interests)) => {
                    profile.personality_traits = Some(traits);
                    profile.interests = Some(interests);
                    profile.dialogue_state = None;
                    profile.assessment_completed_at = Some(chrono::Utc::now());
                    tracing::info!(user_id = user_id, "Assessment complete");
                    (acknowledgement, true)
                }
                Err(e) => {
                    tracing::warn!(
                        user_id = user_id,
                        kind = ?e.kind(),
                        error = %e,
                        "Trait inference failed, keeping dialogue open for retry"
                    );
                    profile.dialogue_state = Some(transition.next);
                    (messages::INFERENCE_RETRY.to_string(), false)
                }
            },
        };

        let checkpoint = matches!(
            profile.dialogue_state,
            None | Some(DialogueState::ProcessingResponses { .. })
        );
        self.store.put(user_id, profile).await?;

        if checkpoint {
            if let Err(e) = self.store.persist().await {
                tracing::warn!(user_id = user_id, error = %e, "Failed to persist user profiles");
            }
        }

        Ok(InteractResponse {
            user_id: user_id.to_string(),
            response: reply,
            is_assessment_complete: complete,
        })
    }

    /// Personality and interest summaries from the collected answers.
    async fn infer_profile(&self, responses: &[String]) -> Result<(String, String), LlmError> {
        let transcript = responses.join("\n");
        let model = self.inference_model.as_deref();

        let traits = self
            .gateway
            .generate(
                &personality_inference_prompt(&transcript),
                model,
                INFERENCE_MAX_TOKENS,
            )
            .await?;
        let interests = self
            .gateway
            .generate(&interests_prompt(&transcript), model, INFERENCE_MAX_TOKENS)
            .await?;

        Ok((traits, interests))
    }
}
