//! Configuration structs

mod client_config;

pub use client_config::{
    ApiConfig, AppSettings, AuthConfig, ClientConfig, ConfigError, Environment,
};
