//! Application configuration.
//!
//! Centralized configuration for the BuyerMap frontend.
//! In development, these are hardcoded. In production, they could be
//! injected at build time.

/// Backend API base URL.
///
/// The BuyerMap backend serving the beta gate.
pub const BACKEND_URL: &str = "http://localhost:3000";

/// Application name.
///
/// Used for the page title and the header logo.
pub const APP_NAME: &str = "BuyerMap";

/// Number of steps in the validation flow.
///
/// Upload sales materials, upload interviews, analysis, report.
pub const DEFAULT_TOTAL_STEPS: u32 = 4;

/// How long the analysis step is shown before the report (in milliseconds).
pub const ANALYSIS_DELAY_MS: u32 = 1_500;
