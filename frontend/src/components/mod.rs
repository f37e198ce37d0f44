//! UI Components for the BuyerMap application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with beta access status
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Flow Components
//! - [`BetaGate`] - Beta password form
//! - [`StepIndicator`] - Progress through the validation flow
//! - [`UploadPlaceholder`] - Upload call-to-action
//! - [`AlignmentResults`] - Alignment report with outcome tabs

mod header;
mod hero;
mod footer;
mod beta_gate;
mod steps;
mod upload;
mod results;

pub use header::*;
pub use hero::*;
pub use footer::*;
pub use beta_gate::*;
pub use steps::*;
pub use upload::*;
pub use results::*;
