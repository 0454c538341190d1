//! HTTP Handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use site_core::EmailConfig;

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub email_configured: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        email_configured: state.email.is_some(),
    })
}

/// EmailJS identifiers for the contact form
pub async fn email_config(
    State(state): State<AppState>,
) -> Result<Json<EmailConfig>, (StatusCode, Json<ErrorResponse>)> {
    let config = state.email.as_ref().ok_or_else(|| {
        tracing::debug!("email config requested but not configured");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: "Email delivery not configured".into(),
                code: "EMAIL_NOT_CONFIGURED".into(),
            }),
        )
    })?;

    Ok(Json(EmailConfig::clone(config)))
}
