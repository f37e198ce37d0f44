//! Application configuration.
//!
//! All settings come from the process environment (a `.env` file is
//! loaded first when present). The resulting [`AppConfig`] is built once
//! at startup and handed to the router; handlers never read the
//! environment themselves.
//!
//! | Variable                         | Used by                    |
//! |----------------------------------|----------------------------|
//! | `BETA_ACCESS_PASSWORD`           | `POST /api/verify-password` |
//! | `SLACK_WEBHOOK_URL`              | `GET /api/test-slack`      |
//! | `NEXT_PUBLIC_SUPABASE_URL`       | frontend persistence/auth  |
//! | `NEXT_PUBLIC_SUPABASE_ANON_KEY`  | frontend persistence/auth  |
//! | `PORT`                           | HTTP listener              |

use serde::Serialize;
use std::env;
use std::fmt;

use crate::error::{ConfigError, ConfigResult};

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 3000;

pub const BETA_ACCESS_PASSWORD_VAR: &str = "BETA_ACCESS_PASSWORD";
pub const SLACK_WEBHOOK_URL_VAR: &str = "SLACK_WEBHOOK_URL";
pub const SUPABASE_URL_VAR: &str = "NEXT_PUBLIC_SUPABASE_URL";
pub const SUPABASE_ANON_KEY_VAR: &str = "NEXT_PUBLIC_SUPABASE_ANON_KEY";
pub const PORT_VAR: &str = "PORT";

/// Supabase project settings.
///
/// The backend does not talk to Supabase; it only reports whether the
/// frontend has what it needs.
#[derive(Clone, Default, PartialEq)]
pub struct SupabaseSettings {
    pub url: Option<String>,
    pub anon_key: Option<String>,
}

impl SupabaseSettings {
    pub fn is_configured(&self) -> bool {
        self.url.is_some() && self.anon_key.is_some()
    }
}

/// Read-only server configuration.
#[derive(Clone, PartialEq)]
pub struct AppConfig {
    /// Shared secret for the beta gate
    pub beta_access_password: Option<String>,
    /// Slack incoming-webhook URL
    pub slack_webhook_url: Option<String>,
    /// Persistence/auth backend
    pub supabase: SupabaseSettings,
    /// Listening port
    pub port: u16,
}

/// Which integrations are configured, without their values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigStatus {
    pub beta_gate: bool,
    pub slack_webhook: bool,
    pub supabase: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            beta_access_password: None,
            slack_webhook_url: None,
            supabase: SupabaseSettings::default(),
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        // Try loading .env file
        let _ = dotenvy::dotenv();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let port = match read(PORT_VAR) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                name: PORT_VAR,
                message: format!("'{}': {}", raw, e),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            beta_access_password: read(BETA_ACCESS_PASSWORD_VAR),
            slack_webhook_url: read(SLACK_WEBHOOK_URL_VAR),
            supabase: SupabaseSettings {
                url: read(SUPABASE_URL_VAR),
                anon_key: read(SUPABASE_ANON_KEY_VAR),
            },
            port,
        })
    }

    /// Set the beta access secret
    pub fn with_beta_password(mut self, password: impl Into<String>) -> Self {
        self.beta_access_password = Some(password.into());
        self
    }

    /// Set the Slack webhook URL
    pub fn with_slack_webhook_url(mut self, url: impl Into<String>) -> Self {
        self.slack_webhook_url = Some(url.into());
        self
    }

    /// Set the listening port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn status(&self) -> ConfigStatus {
        ConfigStatus {
            beta_gate: self.beta_access_password.is_some(),
            slack_webhook: self.slack_webhook_url.is_some(),
            supabase: self.supabase.is_configured(),
        }
    }
}

// Secrets stay out of logs.
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("beta_access_password", &redact(&self.beta_access_password))
            .field("slack_webhook_url", &redact(&self.slack_webhook_url))
            .field("supabase", &self.supabase)
            .field("port", &self.port)
            .finish()
    }
}

impl fmt::Debug for SupabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupabaseSettings")
            .field("url", &self.url)
            .field("anon_key", &redact(&self.anon_key))
            .finish()
    }
}

fn redact(value: &Option<String>) -> &'static str {
    match value {
        Some(_) => "<set>",
        None => "<unset>",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(
            config.status(),
            ConfigStatus { beta_gate: false, slack_webhook: false, supabase: false }
        );
    }

    #[test]
    fn test_reads_all_variables() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("BETA_ACCESS_PASSWORD", "abc123"),
            ("SLACK_WEBHOOK_URL", "https://hooks.slack.com/services/T/B/X"),
            ("NEXT_PUBLIC_SUPABASE_URL", "https://project.supabase.co"),
            ("NEXT_PUBLIC_SUPABASE_ANON_KEY", "anon"),
            ("PORT", "8080"),
        ]))
        .unwrap();

        assert_eq!(config.beta_access_password.as_deref(), Some("abc123"));
        assert_eq!(config.port, 8080);
        assert!(config.status().beta_gate);
        assert!(config.status().slack_webhook);
        assert!(config.status().supabase);
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("BETA_ACCESS_PASSWORD", ""),
            ("SLACK_WEBHOOK_URL", "   "),
        ]))
        .unwrap();

        assert!(config.beta_access_password.is_none());
        assert!(config.slack_webhook_url.is_none());
    }

    #[test]
    fn test_supabase_needs_both_values() {
        let config = AppConfig::from_lookup(lookup_from(&[(
            "NEXT_PUBLIC_SUPABASE_URL",
            "https://project.supabase.co",
        )]))
        .unwrap();
        assert!(!config.status().supabase);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = AppConfig::default()
            .with_beta_password("abc123")
            .with_slack_webhook_url("https://hooks.slack.com/services/secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("abc123"));
        assert!(!debug.contains("hooks.slack.com"));
        assert!(debug.contains("<set>"));
    }
}
