//! Backend and data services.
//!
//! # Services
//!
//! - [`beta`] - Beta password check against the BuyerMap backend
//! - [`report`] - Alignment report data and outcome totals

pub mod beta;
pub mod report;

pub use beta::*;
pub use report::*;
