//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Report Types** - Alignment report display data
//! - **API Types** - Backend request/response structures
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::styling::OutcomeCategory;

// =============================================================================
// Report Types
// =============================================================================

/// One assumption from the sales materials and how it held up.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssumptionResult {
    /// Buyer-profile category ("Pain Points", ...)
    pub category: String,
    /// Assumption as stated in the sales materials
    pub assumption: String,
    /// Outcome label ("Aligned", "Misaligned", ...)
    pub outcome: String,
    /// Interview quote or summary backing the outcome
    pub evidence: String,
}

impl AssumptionResult {
    /// Recognized outcome, if the label is one.
    pub fn outcome_category(&self) -> Option<OutcomeCategory> {
        OutcomeCategory::parse(&self.outcome)
    }
}

/// Comparison of the sales materials with the interviews.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentReport {
    /// Alignment score, 0-100
    pub score: u8,
    /// Per-assumption results
    pub assumptions: Vec<AssumptionResult>,
}

// =============================================================================
// API Types
// =============================================================================

/// Body of `POST /api/verify-password`.
#[derive(Clone, Debug, Serialize)]
pub struct VerifyPasswordRequest<'a> {
    pub password: &'a str,
}

/// Response from the backend password endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct VerifyPasswordResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Network/HTTP error.
    Network(String),
    /// Backend answered with an error message.
    Server(String),
    /// Response could not be understood.
    Validation(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Server(msg) => write!(f, "Server error: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_deserialization() {
        let json = r#"{
            "score": 62,
            "assumptions": [
                {
                    "category": "Pain Points",
                    "assumption": "Manual reporting wastes hours every week",
                    "outcome": "ALIGNED",
                    "evidence": "4 of 5 interviewees mentioned weekly spreadsheet work"
                }
            ]
        }"#;

        let report: AlignmentReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.score, 62);
        assert_eq!(
            report.assumptions[0].outcome_category(),
            Some(OutcomeCategory::Aligned)
        );
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Server("Server configuration error".into());
        assert_eq!(err.to_string(), "Server error: Server configuration error");
    }
}
