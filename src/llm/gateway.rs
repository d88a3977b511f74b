//! LLM gateway: the single chokepoint every prompt goes through.
//!
//! Applies a bounded timeout to each provider call and hands back either the
//! model's text or a typed `LlmError`. It never retries on its own.

use std::sync::Arc;
use std::time::Duration;

use crate::error::LlmError;

use super::provider::{ChatMessage, CompletionRequest, FinishReason, LlmProvider};

/// Wraps an `LlmProvider` with timeout and failure classification.
#[derive(Clone)]
pub struct LlmGateway {
    provider: Arc<dyn LlmProvider>,
    timeout: Duration,
}

impl LlmGateway {
    pub fn new(provider: Arc<dyn LlmProvider>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    /// The provider's default model.
    pub fn default_model(&self) -> &str {
        self.provider.model_name()
    }

    /// Send a single-turn prompt and return the model's text.
    ///
    /// `model` overrides the provider default when given.
    pub async fn generate(
        &self,
        prompt: &str,
        model: Option<&str>,
        max_tokens: u32,
    ) -> Result<String, LlmError> {
        let mut request =
            CompletionRequest::new(vec![ChatMessage::user(prompt)]).with_max_tokens(max_tokens);
        if let Some(model) = model {
            request = request.with_model(model);
        }
        let model_name = model.unwrap_or_else(|| self.provider.model_name()).to_string();

        let response = match tokio::time::timeout(self.timeout, self.provider.complete(request)).await
        {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(model = %model_name, timeout = ?self.timeout, "LLM call timed out");
                return Err(LlmError::Timeout {
                    provider: model_name,
                    timeout: self.timeout,
                });
            }
        };

        match response {
            Ok(response) => {
                if response.finish_reason == FinishReason::Length {
                    tracing::debug!(model = %model_name, "LLM response truncated at max_tokens");
                }
                tracing::debug!(
                    model = %model_name,
                    input_tokens = response.input_tokens,
                    output_tokens = response.output_tokens,
                    "LLM call complete"
                );
                Ok(response.content.trim().to_string())
            }
            Err(e) => {
                tracing::warn!(model = %model_name, kind = ?e.kind(), error = %e, "LLM call failed");
                Err(e)
            }
        }
    }
}
