use std::sync::Arc;

use anyhow::Context;

use careercraft::assessment::{AppState, DialogueEngine, Recommender, app_routes};
use careercraft::config::AppConfig;
use careercraft::llm::create_gateway;
use careercraft::store::{JsonFileStore, ProfileStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; real environment variables still apply.
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AppConfig::from_env().context("Invalid configuration")?;

    let gateway = create_gateway(&config.llm);

    let store = Arc::new(JsonFileStore::load(&config.profiles_path).await);
    tracing::info!(
        path = %store.path().display(),
        profiles = store.count().await,
        "Profile store ready"
    );
    let store: Arc<dyn ProfileStore> = store;

    let engine = DialogueEngine::new(Arc::clone(&store), gateway.clone())
        .with_inference_model(&config.llm.model);
    let recommender =
        Recommender::new(Arc::clone(&store), gateway).with_model(&config.recommend_model);

    let app = app_routes(AppState {
        store,
        engine: Arc::new(engine),
        recommender: Arc::new(recommender),
    });

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!(
        addr = %addr,
        model = %config.llm.model,
        recommend_model = %config.recommend_model,
        "CareerCraft v{} listening",
        env!("CARGO_PKG_VERSION")
    );

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
