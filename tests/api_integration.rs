//! Integration tests for the CareerCraft HTTP API.
//!
//! Each test spins up an Axum server on a random port backed by a stub LLM
//! provider and a JSON profile file in a temp dir, then drives the real REST
//! contract with reqwest.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::time::timeout;

use careercraft::assessment::catalog::{FOCUS_AREAS, PERSONALITY_QUESTIONS, messages};
use careercraft::assessment::{AppState, DialogueEngine, Recommender, app_routes};
use careercraft::error::LlmError;
use careercraft::llm::{CompletionRequest, CompletionResponse, FinishReason, LlmGateway, LlmProvider};
use careercraft::store::{JsonFileStore, ProfileStore};

/// Maximum time any test is allowed to run before we consider it hung.
const TEST_TIMEOUT: Duration = Duration::from_secs(10);

const FOCUS_REPLY: &str = "Focus Area 1: Robotics & Automation\n\
Reasoning: Enjoys building things.\n\
Focus Area 2: Renewable Energy\n\
Reasoning: Cares about the planet.\n\
Focus Area 3: Architecture";

/// Stub LLM provider for integration tests (no real API calls).
struct StubLlm {
    rate_limited: AtomicBool,
}

#[async_trait]
impl LlmProvider for StubLlm {
    fn model_name(&self) -> &str {
        "stub"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        if self.rate_limited.load(Ordering::SeqCst) {
            return Err(LlmError::RateLimited {
                provider: "stub".into(),
                retry_after: Some(Duration::from_secs(1)),
            });
        }
        let prompt = &request.messages[0].content;
        let content = if prompt.contains("Available Focus Areas") {
            FOCUS_REPLY
        } else if prompt.contains("personality traits") {
            "Curious and methodical."
        } else if prompt.contains("primary interests") {
            "Hardware tinkering and climate."
        } else {
            "Career 1: Robotics Engineer\nReasoning: Builds on tinkering."
        };
        Ok(CompletionResponse {
            content: content.to_string(),
            input_tokens: 0,
            output_tokens: 0,
            finish_reason: FinishReason::Stop,
            response_id: None,
        })
    }
}

struct TestServer {
    base: String,
    llm: Arc<StubLlm>,
    store: Arc<JsonFileStore>,
    _dir: TempDir,
}

/// Start an Axum server on a random port.
async fn start_server() -> TestServer {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(JsonFileStore::load(dir.path().join("user_profiles.json")).await);
    let llm = Arc::new(StubLlm {
        rate_limited: AtomicBool::new(false),
    });
    let gateway = LlmGateway::new(llm.clone(), Duration::from_secs(2));

    let dyn_store: Arc<dyn ProfileStore> = store.clone();
    let app = app_routes(AppState {
        store: Arc::clone(&dyn_store),
        engine: Arc::new(DialogueEngine::new(Arc::clone(&dyn_store), gateway.clone())),
        recommender: Arc::new(Recommender::new(dyn_store, gateway)),
    });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give the server a moment to start accepting connections.
    tokio::time::sleep(Duration::from_millis(50)).await;

    TestServer {
        base: format!("http://127.0.0.1:{port}"),
        llm,
        store,
        _dir: dir,
    }
}

async fn say(client: &reqwest::Client, base: &str, user_id: &str, message: &str) -> Value {
    let resp = client
        .post(format!("{base}/chatbot/interact"))
        .json(&json!({"user_id": user_id, "message": message}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    resp.json().await.unwrap()
}

/// Walk a user through the whole intake, returning the final reply.
async fn complete_intake(client: &reqwest::Client, base: &str, user_id: &str) -> Value {
    say(client, base, user_id, "hello").await;
    say(client, base, user_id, "17").await;
    say(client, base, user_id, "building robots").await;
    for i in 0..PERSONALITY_QUESTIONS.len() {
        say(client, base, user_id, &format!("answer {i}")).await;
    }
    say(client, base, user_id, "Kigali").await
}

fn saved_json(path: &Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[tokio::test]
async fn test_health() {
    timeout(TEST_TIMEOUT, async {
        let server = start_server().await;
        let body: Value = reqwest::get(format!("{}/health", server.base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "careercraft");
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn test_focus_areas_catalog() {
    timeout(TEST_TIMEOUT, async {
        let server = start_server().await;
        let body: Value = reqwest::get(format!("{}/focus-areas", server.base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["focus_areas"].as_array().unwrap().len(), FOCUS_AREAS.len());
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn test_first_message_asks_age() {
    timeout(TEST_TIMEOUT, async {
        let server = start_server().await;
        let client = reqwest::Client::new();

        let reply = say(&client, &server.base, "u1", "hi there").await;
        assert_eq!(reply["user_id"], "u1");
        assert_eq!(reply["response"], messages::AGE_PROMPT);
        assert_eq!(reply["is_assessment_complete"], false);

        let reply = say(&client, &server.base, "u1", "not a number").await;
        assert_eq!(reply["response"], messages::INVALID_AGE);

        let reply = say(&client, &server.base, "u1", "22").await;
        assert_eq!(reply["response"], messages::PASSION_AFTER_AGE);
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn test_full_intake_completes_and_persists() {
    timeout(TEST_TIMEOUT, async {
        let server = start_server().await;
        let client = reqwest::Client::new();

        let done = complete_intake(&client, &server.base, "learner").await;
        assert_eq!(done["is_assessment_complete"], true);
        assert_eq!(done["response"], messages::location_ack("Kigali"));

        let profile: Value = client
            .get(format!("{}/users/learner", server.base))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(profile["age"], 17);
        assert_eq!(profile["passion"], "building robots");
        assert_eq!(profile["location"], "Kigali");
        assert_eq!(profile["personality_traits"], "Curious and methodical.");
        assert_eq!(profile["interests"], "Hardware tinkering and climate.");
        assert!(profile["dialogue_state"].is_null());

        let saved = saved_json(server.store.path());
        assert_eq!(saved["learner"]["location"], "Kigali");
        assert!(saved["learner"]["dialogue_state"].is_null());

        let after = say(&client, &server.base, "learner", "anything else?").await;
        assert_eq!(after["response"], messages::ALREADY_COMPLETE);
        assert_eq!(after["is_assessment_complete"], true);
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn test_unknown_user_is_404() {
    timeout(TEST_TIMEOUT, async {
        let server = start_server().await;
        let client = reqwest::Client::new();

        let resp = client
            .get(format!("{}/users/nobody", server.base))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 404);

        let resp = client
            .post(format!("{}/recommend/focus", server.base))
            .json(&json!({"user_id": "nobody"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 404);

        let resp = client
            .post(format!("{}/recommend/careers", server.base))
            .json(&json!({"user_id": "nobody", "chosen_focus_area": "Architecture"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 404);
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn test_recommend_focus() {
    timeout(TEST_TIMEOUT, async {
        let server = start_server().await;
        let client = reqwest::Client::new();
        complete_intake(&client, &server.base, "learner").await;

        let resp = client
            .post(format!("{}/recommend/focus", server.base))
            .json(&json!({"user_id": "learner"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(
            body["recommended_focus_areas"],
            json!(["Robotics & Automation", "Renewable Energy", "Architecture"])
        );
        assert_eq!(
            body["reasoning"],
            "Robotics & Automation: Enjoys building things.\nRenewable Energy: Cares about the planet."
        );
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn test_recommend_focus_rate_limited_is_429() {
    timeout(TEST_TIMEOUT, async {
        let server = start_server().await;
        let client = reqwest::Client::new();
        say(&client, &server.base, "learner", "hello").await;

        server.llm.rate_limited.store(true, Ordering::SeqCst);
        let resp = client
            .post(format!("{}/recommend/focus", server.base))
            .json(&json!({"user_id": "learner"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 429);
        let body: Value = resp.json().await.unwrap();
        assert!(body["error"].is_string());
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn test_recommend_careers() {
    timeout(TEST_TIMEOUT, async {
        let server = start_server().await;
        let client = reqwest::Client::new();
        say(&client, &server.base, "learner", "hello").await;

        let resp = client
            .post(format!("{}/recommend/careers", server.base))
            .json(&json!({"user_id": "learner", "chosen_focus_area": "Architecture"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.unwrap();
        assert!(!body["recommended_careers"].as_array().unwrap().is_empty());
        assert_eq!(body["soft_skills"].as_array().unwrap().len(), 10);
        assert_eq!(
            body["reasoning"],
            "Based on your chosen focus area of Architecture, here are some potential career \
             paths and soft skills to consider."
        );

        let resp = client
            .post(format!("{}/recommend/careers", server.base))
            .json(&json!({"user_id": "learner", "chosen_focus_area": "Underwater Basket Weaving"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400);
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn test_explain_careers() {
    timeout(TEST_TIMEOUT, async {
        let server = start_server().await;
        let client = reqwest::Client::new();
        complete_intake(&client, &server.base, "learner").await;

        let resp = client
            .post(format!("{}/recommend/careers/explain", server.base))
            .json(&json!({"user_id": "learner", "chosen_focus_area": "Robotics & Automation"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["focus_area"], "Robotics & Automation");
        assert!(body["explanation"].as_str().unwrap().contains("Robotics Engineer"));
    })
    .await
    .expect("test timed out");
}
