//! JSON error responses

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Header carrying the plan limit on rate-limited responses
pub const RATE_LIMIT_LIMIT_HEADER: &str = "x-ratelimit-limit";

/// Body of every rejection: `{ "error": <reason phrase>, "message": <text> }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
    /// Seconds for the `Retry-After` header
    pub retry_after: Option<u64>,
    /// Plan limit for the `X-RateLimit-Limit` header
    pub limit: Option<u32>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                error: status
                    .canonical_reason()
                    .unwrap_or("Unknown Error")
                    .to_string(),
                message: message.into(),
            },
            retry_after: None,
            limit: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn rate_limited(retry_after_secs: u64, message: impl Into<String>) -> Self {
        let mut err = Self::new(StatusCode::TOO_MANY_REQUESTS, message);
        err.retry_after = Some(retry_after_secs);
        err
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response = (self.status, Json(self.body)).into_response();
        let headers = response.headers_mut();

        if let Some(secs) = self.retry_after {
            headers.insert(header::RETRY_AFTER, HeaderValue::from(secs));
        }
        if let Some(limit) = self.limit {
            headers.insert(RATE_LIMIT_LIMIT_HEADER, HeaderValue::from(limit));
        }

        response
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let message = err.public_message();

        match err {
            DomainError::Unauthorized { .. } => Self::unauthorized(message),
            DomainError::Forbidden { .. } => Self::forbidden(message),
            DomainError::InvalidParameter { .. } | DomainError::UnsupportedLocale { .. } => {
                Self::bad_request(message)
            }
            DomainError::TooManyRequests { retry_after_secs } => {
                Self::rate_limited(retry_after_secs, message)
            }
            DomainError::Configuration { .. }
            | DomainError::Internal { .. }
            | DomainError::Store { .. } => Self::internal(message),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.body.error, self.body.message)
    }
}

impl std::error::Error for ApiError {}
