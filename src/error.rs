//! Error types for CareerCraft.

use std::time::Duration;

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Profile store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("User profile not found: {user_id}")]
    NotFound { user_id: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Coarse failure classes callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The transport could not reach the provider.
    Connection,
    /// The provider asked us to back off.
    RateLimited,
    /// Any other unsuccessful outcome, including timeouts.
    Service,
}

/// LLM provider errors.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Provider {provider} could not be reached: {reason}")]
    ConnectionFailed { provider: String, reason: String },

    #[error("Provider {provider} rate limited, retry after {retry_after:?}")]
    RateLimited {
        provider: String,
        retry_after: Option<Duration>,
    },

    #[error("Provider {provider} returned status {status}: {reason}")]
    ServiceError {
        provider: String,
        status: u16,
        reason: String,
    },

    #[error("Provider {provider} timed out after {timeout:?}")]
    Timeout { provider: String, timeout: Duration },

    #[error("Invalid response from {provider}: {reason}")]
    InvalidResponse { provider: String, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LlmError {
    /// Classify this error into one of the gateway failure kinds.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::ConnectionFailed { .. } => FailureKind::Connection,
            Self::RateLimited { .. } => FailureKind::RateLimited,
            Self::ServiceError { .. }
            | Self::Timeout { .. }
            | Self::InvalidResponse { .. }
            | Self::Json(_) => FailureKind::Service,
        }
    }

    /// Human-readable text that can stand in for model output.
    pub fn degraded_text(&self) -> String {
        match self.kind() {
            FailureKind::Connection => format!("The server could not be reached: {self}"),
            FailureKind::RateLimited => format!("A 429 status code was received: {self}"),
            FailureKind::Service => {
                format!("Another non-200-range status code was received: {self}")
            }
        }
    }
}

/// Errors from the read-only recommendation operations.
#[derive(Debug, thiserror::Error)]
pub enum RecommendError {
    #[error("User profile not found: {user_id}")]
    NotFound { user_id: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Gateway failure: {0}")]
    Gateway(#[from] LlmError),

    #[error("Store failure: {0}")]
    Store(StoreError),
}

impl From<StoreError> for RecommendError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { user_id } => Self::NotFound { user_id },
            other => Self::Store(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_kinds() {
        let conn = LlmError::ConnectionFailed {
            provider: "openai".into(),
            reason: "refused".into(),
        };
        assert_eq!(conn.kind(), FailureKind::Connection);

        let limited = LlmError::RateLimited {
            provider: "openai".into(),
            retry_after: Some(Duration::from_secs(2)),
        };
        assert_eq!(limited.kind(), FailureKind::RateLimited);

        let timeout = LlmError::Timeout {
            provider: "openai".into(),
            timeout: Duration::from_secs(30),
        };
        assert_eq!(timeout.kind(), FailureKind::Service);
    }

    #[test]
    fn degraded_text_embeds_detail() {
        let err = LlmError::ServiceError {
            provider: "openai".into(),
            status: 500,
            reason: "boom".into(),
        };
        let text = err.degraded_text();
        assert!(text.starts_with("Another non-200-range status code was received"));
        assert!(text.contains("boom"));

        let conn = LlmError::ConnectionFailed {
            provider: "openai".into(),
            reason: "dns".into(),
        };
        assert!(conn.degraded_text().starts_with("The server could not be reached"));
    }

    #[test]
    fn store_not_found_maps_to_recommend_not_found() {
        let err: RecommendError = StoreError::NotFound {
            user_id: "alice".into(),
        }
        .into();
        assert!(matches!(err, RecommendError::NotFound { user_id } if user_id == "alice"));
    }
}
