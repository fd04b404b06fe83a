//! Authentication and rate-limit gates for the data routes

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, HeaderValue, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::api::state::AppState;
use crate::api::types::{ApiError, RATE_LIMIT_LIMIT_HEADER};
use crate::domain::DomainError;
use crate::domain::api_key::AuthenticatedKey;
use crate::infrastructure::gate::{RateDecision, RateStatus};
use crate::infrastructure::observability::record_gate_rejection;

/// Header carrying the caller's API key
pub const API_KEY_HEADER: &str = "x-api-key";
pub const RATE_LIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";
pub const RATE_LIMIT_RESET_HEADER: &str = "x-ratelimit-reset";

/// Raw `X-API-Key` value; non-UTF-8 values count as absent
pub fn extract_api_key_from_headers(headers: &HeaderMap) -> Option<&str> {
    headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok())
}

/// Rejects requests without an enabled key and attaches [`AuthenticatedKey`]
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let api_key = extract_api_key_from_headers(request.headers());

    match state.auth_gate.authenticate(api_key).await {
        Ok(authenticated) => {
            request.extensions_mut().insert(authenticated);
            next.run(request).await
        }
        Err(e) => {
            record_gate_rejection(rejection_reason(&e));
            ApiError::from(e).into_response()
        }
    }
}

/// Counts the request against the attached key's plan
///
/// Runs after [`auth_middleware`]; a request without an attached key is
/// passed through uncounted.
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let attached = request.extensions().get::<AuthenticatedKey>().cloned();
    let api_key = attached.as_ref().map(|a| a.key.as_str());
    let plan = attached.as_ref().map(|a| a.record.plan());

    match state.rate_limiter.check(api_key, plan).await {
        Ok(RateDecision::Admitted(status)) => {
            let mut response = next.run(request).await;
            insert_rate_headers(response.headers_mut(), status);
            response
        }
        Ok(RateDecision::Bypassed) => next.run(request).await,
        Err(e) => {
            record_gate_rejection(rejection_reason(&e));

            let mut err = ApiError::from(e);
            if err.retry_after.is_some() {
                let limit = state
                    .rate_limiter
                    .plans()
                    .limit_for(plan.unwrap_or_default());
                err = err.with_limit(limit);
            }
            err.into_response()
        }
    }
}

fn insert_rate_headers(headers: &mut HeaderMap, status: RateStatus) {
    headers.insert(RATE_LIMIT_LIMIT_HEADER, HeaderValue::from(status.limit));
    headers.insert(RATE_LIMIT_REMAINING_HEADER, HeaderValue::from(status.remaining));
    headers.insert(RATE_LIMIT_RESET_HEADER, HeaderValue::from(status.reset_in_secs));
}

fn rejection_reason(err: &DomainError) -> &'static str {
    match err {
        DomainError::Unauthorized { .. } => "missing_key",
        DomainError::Forbidden { .. } => "forbidden",
        DomainError::TooManyRequests { .. } => "rate_limited",
        DomainError::Configuration { .. } => "configuration",
        _ => "internal",
    }
}
