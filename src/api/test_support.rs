//! Rate-limit reset route for integration suites
//!
//! Mounted only when `test_support.enabled` is set; it bypasses the gates.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use tracing::{error, info};

use super::state::AppState;
use super::types::ApiError;
use crate::domain::rate_limit::rate_limit_key;

#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub success: bool,
    pub message: String,
}

/// DELETE /test/rate-limit/{api_key}
pub async fn reset_rate_limit(
    State(state): State<AppState>,
    Path(api_key): Path<String>,
) -> Result<Json<ResetResponse>, ApiError> {
    if api_key.trim().is_empty() {
        return Err(ApiError::bad_request("API key parameter is required."));
    }

    let Some(store) = state.store.as_ref() else {
        error!("Rate limit reset failed: key store is not configured");
        return Err(ApiError::internal("Server configuration error."));
    };

    let key = rate_limit_key(&api_key);

    match store.delete(&key).await {
        Ok(existed) => {
            info!(existed, "Rate limit window deleted");
            Ok(Json(ResetResponse {
                success: true,
                message: format!("Rate limit key {} deleted.", key),
            }))
        }
        Err(e) => {
            error!(error = %e, "Rate limit reset failed");
            Err(ApiError::internal(format!("Failed to delete key {}.", key)))
        }
    }
}
