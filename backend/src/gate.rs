//! Beta access gate.
//!
//! Compares a submitted password with the configured shared secret.
//! The comparison is an exact byte match: no hashing, no rate limiting,
//! no expiry. Those belong to whatever replaces the gate at launch.

use serde::Deserialize;

use crate::error::{GateResult, PasswordGateError};

/// Body of `POST /api/verify-password`.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyPasswordRequest {
    pub password: String,
}

impl VerifyPasswordRequest {
    /// Parse a raw JSON body.
    ///
    /// Anything other than an object with a string `password` field is
    /// rejected; unknown extra fields are ignored.
    pub fn from_json(body: &[u8]) -> GateResult<Self> {
        Ok(serde_json::from_slice(body)?)
    }
}

/// Shared-secret gate borrowed from the server configuration.
#[derive(Debug, Clone, Copy)]
pub struct BetaGate<'a> {
    secret: Option<&'a str>,
}

impl<'a> BetaGate<'a> {
    pub fn new(secret: Option<&'a str>) -> Self {
        Self { secret }
    }

    /// Check a submitted password.
    ///
    /// Returns `Ok(false)` for a wrong password and
    /// [`PasswordGateError::NotConfigured`] when there is no secret to
    /// compare against.
    pub fn verify(&self, submitted: &str) -> GateResult<bool> {
        let secret = self.secret.ok_or(PasswordGateError::NotConfigured)?;
        Ok(submitted.as_bytes() == secret.as_bytes())
    }

    /// Parse a JSON request body, then verify it.
    pub fn verify_json(&self, body: &[u8]) -> GateResult<bool> {
        let request = VerifyPasswordRequest::from_json(body)?;
        self.verify(&request.password)
    }
}
