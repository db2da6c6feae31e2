use thiserror::Error;

use crate::app_config::AppConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

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
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_opt_f64 = |var: &str| -> Result<Option<f64>, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw
                .parse::<f64>()
                .map(Some)
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                }),
            Err(_) => Ok(None),
        }
    };

    let maps_api_key = require("COLLECTMAP_MAPS_API_KEY")?;

    let collector_base_url = or_default(
        "COLLECTMAP_COLLECTOR_BASE_URL",
        "https://beta.pakam.ng/collector",
    )
    .trim_end_matches('/')
    .to_string();

    let region = or_default("COLLECTMAP_REGION", "Lagos");
    let log_level = or_default("COLLECTMAP_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("COLLECTMAP_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("COLLECTMAP_USER_AGENT", "collectmap/0.1 (heatmap-dashboard)");
    let min_weight = parse_opt_f64("COLLECTMAP_MIN_WEIGHT")?;
    let max_weight = parse_opt_f64("COLLECTMAP_MAX_WEIGHT")?;

    Ok(AppConfig {
        collector_base_url,
        maps_api_key,
        region,
        log_level,
        request_timeout_secs,
        user_agent,
        min_weight,
        max_weight,
    })
}
