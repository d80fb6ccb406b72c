//! Router construction and server lifecycle.

use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::config::CorsConfig;
use service_core::error::AppError;
use service_core::middleware::{
    catch_panic_layer, cors_layer, request_id_middleware, REQUEST_ID_HEADER,
};
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::EchoConfig;
use crate::handlers::{
    echo_message, health_check, method_not_allowed, not_found, openapi_json,
};

pub const SERVICE_NAME: &str = "echo-service";

/// Build the full router: routes, fallbacks and the middleware stack.
pub fn build_router(config: &EchoConfig) -> Result<Router, AppError> {
    let mut router = Router::new()
        .route("/test", get(health_check))
        .route("/echo", post(echo_message));

    if config.openapi_enabled {
        router = router.route("/openapi.json", get(openapi_json));
    }

    let router = router
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed);

    with_middleware(router, &config.common.cors)
}

/// Wrap `router` in the shared middleware stack.
///
/// CORS is the outermost layer so that every response, including 404s,
/// 405s, validation failures and caught panics, carries the CORS headers.
/// Routes and fallbacks must be registered before calling this.
pub fn with_middleware(router: Router, cors: &CorsConfig) -> Result<Router, AppError> {
    Ok(router
        .layer(catch_panic_layer())
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .layer(cors_layer(cors)?))
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the router and bind the listener. Port 0 picks a free port.
    pub async fn build(config: EchoConfig) -> Result<Self, AppError> {
        let router = build_router(&config)?;

        let address = config.common.address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            "{} listening on {}:{}",
            SERVICE_NAME,
            config.common.host,
            port
        );

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until the process is killed.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router).await
    }

    /// Serve until `signal` resolves, then drain in-flight requests.
    pub async fn run_with_graceful_shutdown<F>(self, signal: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(signal)
            .await
    }
}
