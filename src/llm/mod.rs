//! LLM integration for CareerCraft.
//!
//! Supports:
//! - **OpenAI**: Chat Completions over `reqwest`
//!
//! Every call from the dialogue engine and the recommendation operations goes
//! through `LlmGateway`, which applies the configured timeout and returns a
//! typed `LlmError` on failure.

pub mod gateway;
pub mod openai;
pub mod provider;

pub use gateway::LlmGateway;
pub use openai::OpenAiProvider;
pub use provider::*;

use std::sync::Arc;
use std::time::Duration;

/// Configuration for the OpenAI provider and its gateway.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: secrecy::SecretString,
    pub model: String,
    /// Overrides the public API root.
    pub base_url: Option<String>,
    /// Upper bound on a single gateway call.
    pub timeout: Duration,
}

/// Create the OpenAI provider from configuration.
pub fn create_provider(config: &LlmConfig) -> Arc<dyn LlmProvider> {
    let mut provider = OpenAiProvider::new(config.api_key.clone(), &config.model);
    if let Some(ref base_url) = config.base_url {
        provider = provider.with_base_url(base_url);
    }
    tracing::info!("Using OpenAI (model: {})", config.model);
    Arc::new(provider)
}

/// Create the provider and wrap it in a gateway with the configured timeout.
pub fn create_gateway(config: &LlmConfig) -> LlmGateway {
    LlmGateway::new(create_provider(config), config.timeout)
}
