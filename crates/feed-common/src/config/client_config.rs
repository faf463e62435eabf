//! Client configuration
//!
//! Loads configuration from environment variables (with `.env` support).

use serde::Deserialize;
use std::env;

/// Main client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    pub app: AppSettings,
    pub api: ApiConfig,
    pub auth: AuthConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Remote API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL including the `/api` prefix, no trailing slash required
    #[serde(default = "default_api_base")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// The server origin: the base URL with its trailing `/api` segment
    /// stripped. Relative media paths resolve against this.
    #[must_use]
    pub fn origin(&self) -> String {
        let trimmed = self.base_url.trim_end_matches('/');
        trimmed
            .strip_suffix("/api")
            .unwrap_or(trimmed)
            .to_string()
    }
}

/// Authentication configuration
///
/// Session handling is out of scope for this client core; the token is an
/// opaque string attached as a bearer header by the gateway.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AuthConfig {
    #[serde(default)]
    pub token: Option<String>,
}

// Default value functions
fn default_app_name() -> String {
    "feed-client".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_api_base() -> String {
    "http://127.0.0.1:8000/api".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            api: ApiConfig {
                base_url: env::var("FEED_API_BASE").unwrap_or_else(|_| default_api_base()),
                timeout_secs: match env::var("FEED_HTTP_TIMEOUT_SECS") {
                    Ok(s) => s
                        .parse()
                        .map_err(|_| ConfigError::InvalidVar("FEED_HTTP_TIMEOUT_SECS"))?,
                    Err(_) => default_timeout_secs(),
                },
            },
            auth: AuthConfig {
                token: env::var("FEED_AUTH_TOKEN").ok().filter(|t| !t.is_empty()),
            },
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            app: AppSettings {
                name: default_app_name(),
                env: Environment::default(),
            },
            api: ApiConfig {
                base_url: default_api_base(),
                timeout_secs: default_timeout_secs(),
            },
            auth: AuthConfig::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    MissingVar(&'static str),

    #[error("invalid value for environment variable: {0}")]
    InvalidVar(&'static str),
}
