//! `POST /api/verify-password` - beta access gate.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use super::state::AppState;
use super::types::{VerifyPasswordResponse, INTERNAL_SERVER_ERROR, SERVER_CONFIGURATION_ERROR};
use crate::error::PasswordGateError;
use crate::gate::BetaGate;

/// Verify a beta access password.
///
/// The body is taken raw, and a body that cannot be buffered is kept as an
/// error, so every malformed request ends in the same generic 500 whatever
/// the content type or size.
pub async fn verify_password(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<VerifyPasswordResponse>, PasswordGateError> {
    let body = body.map_err(|e| PasswordGateError::UnreadableBody(e.body_text()))?;
    let gate = BetaGate::new(state.config.beta_access_password.as_deref());
    let matched = gate.verify_json(&body)?;

    tracing::info!(matched, "beta password checked");
    Ok(Json(VerifyPasswordResponse::matched(matched)))
}

impl IntoResponse for PasswordGateError {
    fn into_response(self) -> Response {
        let message = match &self {
            PasswordGateError::NotConfigured => {
                tracing::error!("beta access password is not configured");
                SERVER_CONFIGURATION_ERROR
            }
            PasswordGateError::InvalidRequest(e) => {
                tracing::error!(error = %e, "password verification failed");
                INTERNAL_SERVER_ERROR
            }
            PasswordGateError::UnreadableBody(reason) => {
                tracing::error!(error = %reason, "password request body rejected");
                INTERNAL_SERVER_ERROR
            }
        };
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(VerifyPasswordResponse::failure(message)),
        )
            .into_response()
    }
}
