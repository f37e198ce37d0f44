//! Error types for the BuyerMap backend.
//!
//! One enum per concern:
//!
//! - [`ConfigError`] - Invalid environment configuration
//! - [`PasswordGateError`] - Beta password verification errors
//! - [`WebhookError`] - Slack webhook relay errors
//! - [`ServerError`] - Top-level server errors
//!
//! The HTTP layer turns the gate and webhook errors into the fixed JSON
//! bodies the frontend expects (see [`crate::api`]).

use thiserror::Error;

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed.
    #[error("Invalid value for {name}: {message}")]
    InvalidValue { name: &'static str, message: String },
}

// =============================================================================
// Beta Gate Errors
// =============================================================================

/// Errors during beta password verification.
///
/// A wrong password is not an error: it is a successful verification
/// with a `false` outcome.
#[derive(Debug, Error)]
pub enum PasswordGateError {
    /// No beta access secret is configured on the server.
    #[error("BETA_ACCESS_PASSWORD not configured")]
    NotConfigured,

    /// Request body is not a `{ "password": string }` object.
    #[error("Invalid request body: {0}")]
    InvalidRequest(#[from] serde_json::Error),

    /// Request body could not be buffered (over the size limit, aborted).
    #[error("Failed to read request body: {0}")]
    UnreadableBody(String),
}

// =============================================================================
// Webhook Errors
// =============================================================================

/// Errors from the Slack webhook relay.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// No webhook URL is configured.
    #[error("SLACK_WEBHOOK_URL not configured")]
    NotConfigured,

    /// Slack answered with a non-success status.
    #[error("Slack API error: {0}")]
    Upstream(u16),

    /// The request never got a response.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

// =============================================================================
// Server Errors
// =============================================================================

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration error at startup.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Failed to bind or serve.
    #[error("Server IO error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for beta gate operations.
pub type GateResult<T> = Result<T, PasswordGateError>;

/// Result type for webhook operations.
pub type WebhookResult<T> = Result<T, WebhookError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
