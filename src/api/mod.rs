//! REST API layer: route handlers, DTOs, and router composition.

pub mod dto;
pub mod handlers;

use std::time::Duration;

use axum::Router;
use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::config::ServiceConfig;
use crate::error::ServiceError;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .merge(handlers::routes())
        .merge(handlers::system::routes())
}

/// Assembles the service: routes, middleware stack, and state.
///
/// Layer order, outermost first: CORS, request tracing, request timeout.
/// CORS sits outside so preflight requests are answered before anything
/// else runs.
///
/// # Errors
///
/// Returns [`ServiceError::Config`] when a configured CORS origin is not
/// a valid header value.
pub fn build_app(state: AppState, config: &ServiceConfig) -> Result<Router, ServiceError> {
    let cors = cors_layer(&config.cors_allowed_origins)?;

    let app = Router::new()
        .merge(build_router())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    Ok(app)
}

/// Builds the CORS layer for the configured origin allow-list.
///
/// Credentialed requests are allowed, so the layer mirrors request
/// methods and headers instead of using wildcards (wildcards cannot be
/// combined with credentials).
///
/// # Errors
///
/// Returns [`ServiceError::Config`] when an origin cannot be parsed as a
/// header value.
fn cors_layer(origins: &[String]) -> Result<CorsLayer, ServiceError> {
    let mut allowed = Vec::with_capacity(origins.len());
    for origin in origins {
        let value = origin
            .parse::<HeaderValue>()
            .map_err(|_| ServiceError::Config(format!("invalid CORS origin: {origin}")))?;
        allowed.push(value);
    }

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
