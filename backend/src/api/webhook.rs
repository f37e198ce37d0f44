//! `GET /api/test-slack` - Slack webhook test.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use super::state::AppState;
use super::types::{ErrorBody, WebhookTestResponse, TEST_FAILED};
use crate::error::WebhookError;
use crate::slack::SlackNotifier;

/// Send the fixed test notification to the configured Slack webhook.
pub async fn test_slack(
    State(state): State<AppState>,
) -> Result<Json<WebhookTestResponse>, WebhookError> {
    let notifier = SlackNotifier::from_config(state.http.clone(), &state.config)?;
    notifier.send_test().await?;

    tracing::info!("slack test notification sent");
    Ok(Json(WebhookTestResponse::sent()))
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        let message = match &self {
            WebhookError::NotConfigured | WebhookError::Upstream(_) => self.to_string(),
            WebhookError::Transport(e) => {
                tracing::error!(error = %e, "slack test failed");
                TEST_FAILED.to_string()
            }
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody::new(message))).into_response()
    }
}
