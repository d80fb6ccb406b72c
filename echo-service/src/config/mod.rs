use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone)]
pub struct EchoConfig {
    pub common: core_config::Config,
    /// Serve the OpenAPI document at `/openapi.json`.
    pub openapi_enabled: bool,
}

impl Default for EchoConfig {
    fn default() -> Self {
        Self {
            common: core_config::Config::default(),
            openapi_enabled: true,
        }
    }
}

impl EchoConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        Ok(EchoConfig {
            common,
            openapi_enabled: parse_flag("OPENAPI_ENABLED", env::var("OPENAPI_ENABLED").ok(), true)?,
        })
    }
}

fn parse_flag(key: &str, value: Option<String>, default: bool) -> Result<bool, AppError> {
    match value {
        None => Ok(default),
        Some(raw) => raw.trim().to_ascii_lowercase().parse().map_err(|_| {
            AppError::ConfigError(anyhow::anyhow!(
                "{} must be 'true' or 'false', got '{}'",
                key,
                raw
            ))
        }),
    }
}
