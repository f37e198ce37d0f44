//! Slack incoming-webhook client.
//!
//! Sends one message per call. No retry: a failed send is reported to
//! the caller, which decides what to show.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use buyermap::{AppConfig, SlackNotifier};
//!
//! let config = AppConfig::from_env()?;
//! let notifier = SlackNotifier::from_config(reqwest::Client::new(), &config)?;
//! notifier.send_test().await?;
//! ```

use serde::Serialize;

use crate::config::AppConfig;
use crate::error::{WebhookError, WebhookResult};

/// Fixed message posted by the webhook test.
pub const TEST_NOTIFICATION_TEXT: &str =
    "🧪 Test notification from BuyerMap! Your Slack integration is working.";

/// Slack incoming-webhook payload.
#[derive(Debug, Clone, Serialize)]
pub struct SlackMessage<'a> {
    pub text: &'a str,
}

/// Posts messages to one Slack webhook URL.
#[derive(Clone)]
pub struct SlackNotifier {
    client: reqwest::Client,
    webhook_url: String,
}

impl SlackNotifier {
    /// Create a notifier with an explicit webhook URL
    pub fn new(client: reqwest::Client, webhook_url: impl Into<String>) -> Self {
        Self {
            client,
            webhook_url: webhook_url.into(),
        }
    }

    /// Create a notifier from `SLACK_WEBHOOK_URL` in the configuration
    pub fn from_config(client: reqwest::Client, config: &AppConfig) -> WebhookResult<Self> {
        let url = config
            .slack_webhook_url
            .as_deref()
            .ok_or(WebhookError::NotConfigured)?;
        Ok(Self::new(client, url))
    }

    /// Post a text message.
    ///
    /// Any 2xx answer counts as delivered; other statuses come back as
    /// [`WebhookError::Upstream`].
    pub async fn send(&self, text: &str) -> WebhookResult<()> {
        let response = self
            .client
            .post(&self.webhook_url)
            .json(&SlackMessage { text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "slack webhook rejected message");
            return Err(WebhookError::Upstream(status.as_u16()));
        }

        tracing::debug!("slack webhook accepted message");
        Ok(())
    }

    /// Post the fixed test notification
    pub async fn send_test(&self) -> WebhookResult<()> {
        self.send(TEST_NOTIFICATION_TEXT).await
    }
}
