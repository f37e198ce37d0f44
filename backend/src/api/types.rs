//! REST API types for frontend integration.
//!
//! Field names and messages are the ones the BuyerMap web client already
//! reads, so they are kept byte for byte.

use serde::{Deserialize, Serialize};

/// Message returned when the beta secret is unset.
pub const SERVER_CONFIGURATION_ERROR: &str = "Server configuration error";

/// Message returned for any unexpected password-check failure.
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// Message returned when the webhook call never got a response.
pub const TEST_FAILED: &str = "Test failed";

/// Message returned after a successful webhook relay.
pub const TEST_SENT: &str = "Test notification sent to Slack!";

/// Response of `POST /api/verify-password`.
///
/// `error` is only present on failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyPasswordResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VerifyPasswordResponse {
    /// Result of a completed comparison
    pub fn matched(success: bool) -> Self {
        Self { success, error: None }
    }

    /// Failed verification with a message
    pub fn failure(error: &str) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
        }
    }
}

/// Successful response of `GET /api/test-slack`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookTestResponse {
    pub success: bool,
    pub message: String,
}

impl WebhookTestResponse {
    pub fn sent() -> Self {
        Self {
            success: true,
            message: TEST_SENT.to_string(),
        }
    }
}

/// Bare `{ "error": ... }` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
