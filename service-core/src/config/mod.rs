use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub cors: CorsConfig,
}

/// Cross-origin policy applied to every response.
///
/// A `"*"` entry in any of the lists means "allow everything". When combined
/// with `allow_credentials` the wildcard is served by mirroring the request,
/// since browsers reject a literal `*` on credentialed requests.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    #[serde(default = "wildcard")]
    pub allowed_origins: Vec<String>,
    #[serde(default = "wildcard")]
    pub allowed_methods: Vec<String>,
    #[serde(default = "wildcard")]
    pub allowed_headers: Vec<String>,
    #[serde(default = "default_true")]
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: wildcard(),
            allowed_methods: wildcard(),
            allowed_headers: wildcard(),
            allow_credentials: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            cors: CorsConfig::default(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn wildcard() -> Vec<String> {
    vec!["*".to_string()]
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .with_list_parse_key("cors.allowed_methods")
                    .with_list_parse_key("cors.allowed_headers")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Address string suitable for `TcpListener::bind`.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
