//! # feed-common
//!
//! Shared utilities: client configuration, media URL resolution, and
//! telemetry setup.

pub mod config;
pub mod media;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{ApiConfig, AppSettings, AuthConfig, ClientConfig, ConfigError, Environment};
pub use media::MediaUrls;
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig, TracingError};
