pub mod app_config;
pub mod business;
pub mod config;
pub mod filter;
pub mod query;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use business::{BusinessRecord, BusinessStatus};
pub use config::{load_app_config, load_app_config_from_env};
pub use filter::{accept, is_excluded};
pub use query::{normalize_keywords, SearchQuery, DEFAULT_LANGUAGE, MAX_PAGES, PAGE_SIZE};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
