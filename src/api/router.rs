use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    response::IntoResponse,
    routing::{delete, get},
};
use tower_http::trace::TraceLayer;

use super::data;
use super::docs;
use super::health;
use super::middleware::{auth_middleware, logging_middleware, metrics_middleware, rate_limit_middleware};
use super::state::AppState;
use super::test_support;
use super::types::ApiError;
use crate::infrastructure::observability::{PrometheusMetrics, create_metrics_router};

/// Optional surfaces mounted next to the public and data routes
#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    /// Mount `DELETE /test/rate-limit/{api_key}`
    pub test_support: bool,
    /// Scrape handle and path for the prometheus endpoint
    pub metrics: Option<(PrometheusMetrics, String)>,
}

/// Create the router with the data routes and no optional surfaces
pub fn create_router_with_state(state: AppState) -> Router {
    create_router_with_options(state, RouterOptions::default())
}

/// Create the full router
///
/// Data routes pass the auth gate and then the rate-limit gate; public
/// routes and unknown paths do not.
pub fn create_router_with_options(state: AppState, options: RouterOptions) -> Router {
    let protected = data::create_data_router()
        .route_layer(from_fn_with_state(state.clone(), rate_limit_middleware))
        .route_layer(from_fn_with_state(state.clone(), auth_middleware));

    let mut router = Router::new()
        .route("/", get(docs::root))
        .route("/ping", get(docs::ping))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .merge(protected);

    if options.test_support {
        router = router.route(
            "/test/rate-limit/{api_key}",
            delete(test_support::reset_rate_limit),
        );
    }

    let mut router = router.fallback(not_found).with_state(state);

    if let Some((metrics, path)) = options.metrics {
        router = router.merge(create_metrics_router(metrics, &path));
    }

    router
        .layer(from_fn(metrics_middleware))
        .layer(from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> impl IntoResponse {
    ApiError::not_found("Route not found.")
}
