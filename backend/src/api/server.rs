//! HTTP Server for the BuyerMap API.
//!
//! # API Endpoints
//!
//! | Method | Path                    | Description                     |
//! |--------|-------------------------|---------------------------------|
//! | GET    | `/health`               | Health check                    |
//! | POST   | `/api/verify-password`  | Check a beta access password    |
//! | GET    | `/api/test-slack`       | Send a Slack test notification |

use axum::{
    extract::State,
    http::{header, Method},
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::password::verify_password;
use super::state::AppState;
use super::webhook::test_slack;
use crate::config::AppConfig;
use crate::error::ServerResult;

/// Build the router with all API routes and middleware.
///
/// Used by [`start_server`] and by integration tests.
pub fn build_router(config: AppConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route("/api/verify-password", post(verify_password))
        .route("/api/test-slack", get(test_slack))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(config))
}

/// Start the HTTP server
pub async fn start_server(config: AppConfig) -> ServerResult<()> {
    let port = config.port;
    let status = config.status();
    let app = build_router(config);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("BuyerMap server running on http://localhost:{port}");
    tracing::info!("   POST /api/verify-password - Beta access gate");
    tracing::info!("   GET  /api/test-slack      - Slack webhook test");
    tracing::info!("   GET  /health              - Health check");
    if !status.beta_gate {
        tracing::warn!("BETA_ACCESS_PASSWORD is not set; password checks will fail");
    }
    if !status.slack_webhook {
        tracing::warn!("SLACK_WEBHOOK_URL is not set; webhook tests will fail");
    }

    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "buyermap",
        "version": env!("CARGO_PKG_VERSION"),
        "configured": state.config.status(),
        "endpoints": {
            "verifyPassword": "POST /api/verify-password",
            "testSlack": "GET /api/test-slack"
        }
    }))
}
