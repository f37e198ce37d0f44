//! # BuyerMap - Beta access gate and Slack relay
//!
//! The BuyerMap backend serves the two endpoints the web application
//! needs before public launch: a shared-secret beta gate and a Slack
//! webhook test that confirms the notification channel is wired up.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────────────────────┐
//! │  .env / env │────▶│  AppConfig  │────▶│  Router (axum)              │
//! │  variables  │     │  (read-only)│     │  ├── POST /api/verify-password ──▶ BetaGate
//! └─────────────┘     └─────────────┘     │  ├── GET  /api/test-slack ───────▶ SlackNotifier ──▶ Slack
//!                                         │  └── GET  /health                │
//!                                         └─────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use buyermap::{AppConfig, server::start_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = AppConfig::from_env().unwrap();
//!     start_server(config).await.unwrap();
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types per concern
//! - [`config`] - Environment-backed configuration
//! - [`gate`] - Beta access password check
//! - [`slack`] - Slack incoming-webhook client
//! - [`api`] - HTTP API server

// Core modules
pub mod error;
pub mod config;

// Gate logic
pub mod gate;
pub mod slack;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    ConfigError,
    PasswordGateError,
    WebhookError,
    ServerError,
};

// =============================================================================
// Re-exports - Configuration
// =============================================================================

pub use config::{AppConfig, ConfigStatus, SupabaseSettings, DEFAULT_PORT};

// =============================================================================
// Re-exports - Gates
// =============================================================================

pub use gate::{BetaGate, VerifyPasswordRequest};
pub use slack::{SlackNotifier, SlackMessage, TEST_NOTIFICATION_TEXT};

// =============================================================================
// Re-exports - API
// =============================================================================

pub use api::types::{
    VerifyPasswordResponse,
    WebhookTestResponse,
    ErrorBody,
};

// Server
pub mod server {
    pub use crate::api::server::{build_router, start_server};
}
