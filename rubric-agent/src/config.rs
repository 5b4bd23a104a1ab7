//! Service configuration read from environment variables (and `.env`).
//!
//! Binaries call `dotenv` first, then [`RubricConfig::from_env`]. Every variable is
//! optional; missing values fall back to the defaults below. Invalid numbers are
//! a [`ConfigError`].
//!
//! | Var | Default |
//! |---|---|
//! | `MY_PROJECT` | `rubric-agent` |
//! | `API_KEY` | unset (warn only) |
//! | `OPENAI_API_KEY` | unset |
//! | `OPENAI_API_BASE` | `https://api.openai.com/v1` |
//! | `OPENAI_MODEL` | `gpt-4.1-mini` |
//! | `OPENAI_TEMPERATURE` | `0` |
//! | `STEP_BUDGET` | `10` |
//! | `CORS_ORIGINS` | `http://localhost:3000,http://frontend` |
//! | `LISTEN` | `0.0.0.0:8000` |
//! | `LOG_FILE` | unset |

use thiserror::Error;

use crate::memory::DEFAULT_STEP_BUDGET;

pub const DEFAULT_PROJECT: &str = "rubric-agent";
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";
pub const DEFAULT_LISTEN: &str = "0.0.0.0:8000";
pub const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://frontend"];

/// Error loading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Configuration shared by the CLI and the server.
#[derive(Debug, Clone, PartialEq)]
pub struct RubricConfig {
    /// Project name reported by the health endpoint.
    pub project: String,
    /// Service API key. Only checked for presence.
    pub api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub openai_api_base: String,
    pub openai_model: String,
    /// Sampling temperature, 0 by default for reproducible rubrics.
    pub openai_temperature: f32,
    /// Executor step budget (node + router calls).
    pub step_budget: usize,
    /// Origins allowed by the server's CORS layer.
    pub cors_origins: Vec<String>,
    /// Server bind address.
    pub listen: String,
    /// Optional plain-text log file.
    pub log_file: Option<String>,
}

impl Default for RubricConfig {
    fn default() -> Self {
        Self {
            project: DEFAULT_PROJECT.to_string(),
            api_key: None,
            openai_api_key: None,
            openai_api_base: DEFAULT_API_BASE.to_string(),
            openai_model: DEFAULT_MODEL.to_string(),
            openai_temperature: 0.0,
            step_budget: DEFAULT_STEP_BUDGET,
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
            listen: DEFAULT_LISTEN.to_string(),
            log_file: None,
        }
    }
}

impl RubricConfig {
    /// Fill config from process env vars. Call `dotenv::dotenv().ok()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Fill config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let openai_temperature = match get("OPENAI_TEMPERATURE") {
            Some(v) => v.parse::<f32>().map_err(|e| ConfigError::Invalid {
                key: "OPENAI_TEMPERATURE",
                value: v.clone(),
                reason: e.to_string(),
            })?,
            None => defaults.openai_temperature,
        };
        let step_budget = match get("STEP_BUDGET") {
            Some(v) => parse_step_budget(&v)?,
            None => defaults.step_budget,
        };
        let cors_origins = match get("CORS_ORIGINS") {
            Some(v) => v
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            None => defaults.cors_origins,
        };

        Ok(Self {
            project: get("MY_PROJECT").unwrap_or(defaults.project),
            api_key: get("API_KEY"),
            openai_api_key: get("OPENAI_API_KEY"),
            openai_api_base: get("OPENAI_API_BASE").unwrap_or(defaults.openai_api_base),
            openai_model: get("OPENAI_MODEL").unwrap_or(defaults.openai_model),
            openai_temperature,
            step_budget,
            cors_origins,
            listen: get("LISTEN").unwrap_or(defaults.listen),
            log_file: get("LOG_FILE"),
        })
    }

    /// Logs a warning when `API_KEY` is unset. Never fails.
    pub fn warn_if_api_key_missing(&self) -> bool {
        if self.api_key.is_none() {
            tracing::warn!("API_KEY is not set; continuing without it");
            return false;
        }
        true
    }
}

/// Parses a step budget; must be a positive integer.
pub fn parse_step_budget(value: &str) -> Result<usize, ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        key: "STEP_BUDGET",
        value: value.to_string(),
        reason,
    };
    let n = value.trim().parse::<usize>().map_err(|e| invalid(e.to_string()))?;
    if n == 0 {
        return Err(invalid("must be at least 1".to_string()));
    }
    Ok(n)
}
