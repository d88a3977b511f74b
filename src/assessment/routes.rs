//! HTTP endpoints for the intake chatbot and recommendations.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tower_http::cors::CorsLayer;

use super::catalog::FOCUS_AREAS;
use super::engine::DialogueEngine;
use super::recommend::Recommender;
use crate::error::{FailureKind, RecommendError, StoreError};
use crate::store::ProfileStore;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProfileStore>,
    pub engine: Arc<DialogueEngine>,
    pub recommender: Arc<Recommender>,
}

#[derive(Debug, Deserialize)]
pub struct InteractRequest {
    pub user_id: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct FocusRequest {
    pub user_id: String,
}

#[derive(Debug, Deserialize)]
pub struct CareerRequest {
    pub user_id: String,
    pub chosen_focus_area: String,
}

fn error_body(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(serde_json::json!({"error": message.into()}))).into_response()
}

impl IntoResponse for RecommendError {
    fn into_response(self) -> Response {
        let status = match &self {
            RecommendError::NotFound { .. } => StatusCode::NOT_FOUND,
            RecommendError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            RecommendError::Gateway(e) if e.kind() == FailureKind::RateLimited => {
                StatusCode::TOO_MANY_REQUESTS
            }
            RecommendError::Gateway(_) => StatusCode::BAD_GATEWAY,
            RecommendError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = match &self {
            RecommendError::NotFound { .. } => "User profile not found".to_string(),
            RecommendError::Gateway(e) => e.degraded_text(),
            other => other.to_string(),
        };
        error_body(status, message)
    }
}

/// Build the router with every endpoint and permissive CORS for the web UI.
pub fn app_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/focus-areas", get(focus_areas))
        .route("/users/{user_id}", get(get_user))
        .route("/chatbot/interact", post(interact))
        .route("/recommend/focus", post(recommend_focus))
        .route("/recommend/careers", post(recommend_careers))
        .route("/recommend/careers/explain", post(explain_careers))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ── Health & catalog ────────────────────────────────────────────────────

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "careercraft"
    }))
}

async fn focus_areas() -> impl IntoResponse {
    Json(serde_json::json!({ "focus_areas": FOCUS_AREAS }))
}

// ── Profiles ────────────────────────────────────────────────────────────

async fn get_user(State(state): State<AppState>, Path(user_id): Path<String>) -> Response {
    match state.store.get(&user_id).await {
        Ok(profile) => Json(profile).into_response(),
        Err(StoreError::NotFound { .. }) => {
            error_body(StatusCode::NOT_FOUND, "User profile not found")
        }
        Err(e) => {
            tracing::error!(user_id = %user_id, error = %e, "Failed to read user profile");
            error_body(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

// ── Chatbot ─────────────────────────────────────────────────────────────

async fn interact(State(state): State<AppState>, Json(req): Json<InteractRequest>) -> Response {
    match state.engine.interact(&req.user_id, &req.message).await {
        Ok(reply) => Json(reply).into_response(),
        Err(e) => {
            tracing::error!(user_id = %req.user_id, error = %e, "Chatbot interaction failed");
            error_body(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

// ── Recommendations ─────────────────────────────────────────────────────

async fn recommend_focus(
    State(state): State<AppState>,
    Json(req): Json<FocusRequest>,
) -> Result<impl IntoResponse, RecommendError> {
    let recommendation = state.recommender.recommend_focus(&req.user_id).await?;
    Ok(Json(recommendation))
}

async fn recommend_careers(
    State(state): State<AppState>,
    Json(req): Json<CareerRequest>,
) -> Result<impl IntoResponse, RecommendError> {
    let recommendation = state
        .recommender
        .recommend_careers(&req.user_id, &req.chosen_focus_area)
        .await?;
    Ok(Json(recommendation))
}

async fn explain_careers(
    State(state): State<AppState>,
    Json(req): Json<CareerRequest>,
) -> Result<impl IntoResponse, RecommendError> {
    let insight = state
        .recommender
        .explain_careers(&req.user_id, &req.chosen_focus_area)
        .await?;
    Ok(Json(insight))
}
