//! Beta gate service: checks a password against the backend.

use gloo_net::http::Request;

use crate::types::{AppError, AppResult, VerifyPasswordRequest, VerifyPasswordResponse};

/// Ask the backend whether `password` unlocks the beta.
///
/// `Ok(false)` means the backend answered and the password is wrong.
pub async fn verify_beta_password(password: &str, backend_url: &str) -> AppResult<bool> {
    let url = format!("{}/api/verify-password", backend_url);
    let request = Request::post(&url)
        .json(&VerifyPasswordRequest { password })
        .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| AppError::Network(format!("Failed to read response: {}", e)))?;

    interpret_verify_response(status, &body)
}

/// Turn the status and body of a verify-password response into a result.
pub fn interpret_verify_response(status: u16, body: &str) -> AppResult<bool> {
    let parsed: VerifyPasswordResponse = serde_json::from_str(body)
        .map_err(|e| AppError::Validation(format!("Failed to parse response ({}): {}", status, e)))?;

    if (200..300).contains(&status) {
        return Ok(parsed.success);
    }

    Err(AppError::Server(
        parsed
            .error
            .unwrap_or_else(|| format!("Unexpected status {}", status)),
    ))
}
