use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};

use crate::config::CorsConfig;
use crate::error::AppError;

const WILDCARD: &str = "*";

fn is_wildcard(values: &[String]) -> bool {
    values.iter().any(|v| v == WILDCARD)
}

fn invalid(kind: &str, value: &str, err: impl std::fmt::Display) -> AppError {
    AppError::ConfigError(anyhow::anyhow!("Invalid CORS {} '{}': {}", kind, value, err))
}

/// Build the CORS layer described by `config`.
///
/// Wildcards are mirrored from the request when credentials are allowed;
/// tower-http refuses `Any` together with `allow_credentials(true)`.
pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer, AppError> {
    let mirror = config.allow_credentials;

    let origin = if is_wildcard(&config.allowed_origins) {
        if mirror {
            AllowOrigin::mirror_request()
        } else {
            Any.into()
        }
    } else {
        let origins = config
            .allowed_origins
            .iter()
            .map(|o| o.parse::<HeaderValue>().map_err(|e| invalid("origin", o, e)))
            .collect::<Result<Vec<_>, _>>()?;
        AllowOrigin::list(origins)
    };

    let methods = if is_wildcard(&config.allowed_methods) {
        if mirror {
            AllowMethods::mirror_request()
        } else {
            Any.into()
        }
    } else {
        let methods = config
            .allowed_methods
            .iter()
            .map(|m| {
                Method::from_bytes(m.to_ascii_uppercase().as_bytes())
                    .map_err(|e| invalid("method", m, e))
            })
            .collect::<Result<Vec<_>, _>>()?;
        AllowMethods::list(methods)
    };

    let headers = if is_wildcard(&config.allowed_headers) {
        if mirror {
            AllowHeaders::mirror_request()
        } else {
            Any.into()
        }
    } else {
        let headers = config
            .allowed_headers
            .iter()
            .map(|h| h.parse::<HeaderName>().map_err(|e| invalid("header", h, e)))
            .collect::<Result<Vec<_>, _>>()?;
        AllowHeaders::list(headers)
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(methods)
        .allow_headers(headers)
        .allow_credentials(config.allow_credentials))
}
