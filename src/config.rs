//! Configuration types.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;
use crate::llm::LlmConfig;

/// Default chat model for personality and interest inference.
pub const DEFAULT_MODEL: &str = "gpt-4o";
/// Default model for focus-area and career recommendations.
pub const DEFAULT_RECOMMEND_MODEL: &str = "gpt-4o-mini";
/// Default backing file for learner profiles.
pub const DEFAULT_PROFILES_PATH: &str = "user_profiles.json";

/// Application configuration, read from the process environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// LLM provider settings (credential, default model, timeout).
    pub llm: LlmConfig,
    /// Model used by the recommendation endpoints.
    pub recommend_model: String,
    /// HTTP listen port.
    pub port: u16,
    /// JSON file backing the profile store.
    pub profiles_path: PathBuf,
}

impl AppConfig {
    /// Build the configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENAI_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("OPENAI_API_KEY".to_string()))?;

        let model = lookup("CAREERCRAFT_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let recommend_model = lookup("CAREERCRAFT_RECOMMEND_MODEL")
            .unwrap_or_else(|| DEFAULT_RECOMMEND_MODEL.to_string());

        let port: u16 = parse_or(&lookup, "CAREERCRAFT_PORT", 8000)?;
        let timeout_secs: u64 = parse_or(&lookup, "CAREERCRAFT_LLM_TIMEOUT_SECS", 30)?;

        let profiles_path = lookup("CAREERCRAFT_PROFILES_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PROFILES_PATH));

        Ok(Self {
            llm: LlmConfig {
                api_key: secrecy::SecretString::from(api_key),
                model,
                base_url: lookup("OPENAI_BASE_URL"),
                timeout: Duration::from_secs(timeout_secs),
            },
            recommend_model,
            port,
            profiles_path,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        }),
        None => Ok(default),
    }
}
