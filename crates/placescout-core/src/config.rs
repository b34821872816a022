use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub(crate) const DEFAULT_PLACES_BASE_URL: &str = "https://places.googleapis.com/v1";

pub(crate) const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub(crate) const DEFAULT_ACCEPT_LANGUAGE: &str = "fr-FR,fr;q=0.9,en;q=0.8";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    // A blank credential is as useless as a missing one.
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    // Pacing toward the provider and third-party sites cannot be switched off.
    let parse_delay_ms = |var: &str, default: &str| -> Result<u64, ConfigError> {
        match parse_u64(var, default)? {
            0 => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "delay must be at least 1 ms".to_string(),
            }),
            ms => Ok(ms),
        }
    };

    let places_api_key = require("GOOGLE_PLACES_API_KEY")?;

    let env = parse_environment(&or_default("PLACESCOUT_ENV", "development"))?;
    let log_level = or_default("PLACESCOUT_LOG_LEVEL", "info");
    let places_base_url = parse_base_url(&or_default(
        "PLACESCOUT_PLACES_BASE_URL",
        DEFAULT_PLACES_BASE_URL,
    ))?;

    let api_timeout_secs = parse_u64("PLACESCOUT_API_TIMEOUT_SECS", "15")?;
    let website_timeout_secs = parse_u64("PLACESCOUT_WEBSITE_TIMEOUT_SECS", "8")?;
    let page_delay_ms = parse_delay_ms("PLACESCOUT_PAGE_DELAY_MS", "300")?;
    let detail_delay_ms = parse_delay_ms("PLACESCOUT_DETAIL_DELAY_MS", "200")?;
    let email_delay_ms = parse_delay_ms("PLACESCOUT_EMAIL_DELAY_MS", "200")?;

    let user_agent = or_default("PLACESCOUT_USER_AGENT", DEFAULT_USER_AGENT);
    let accept_language = or_default("PLACESCOUT_ACCEPT_LANGUAGE", DEFAULT_ACCEPT_LANGUAGE);

    Ok(AppConfig {
        env,
        log_level,
        places_api_key,
        places_base_url,
        api_timeout_secs,
        website_timeout_secs,
        page_delay_ms,
        detail_delay_ms,
        email_delay_ms,
        user_agent,
        accept_language,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] for anything other than
/// `development`, `test`, or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s.trim() {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "PLACESCOUT_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

/// Only checks the scheme; the places client does the full URL parse.
fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(ConfigError::InvalidEnvVar {
            var: "PLACESCOUT_PLACES_BASE_URL".to_string(),
            reason: format!("\"{raw}\" is not an http(s) URL"),
        })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
