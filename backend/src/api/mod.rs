//! HTTP API module.
//!
//! This module provides the HTTP server and API types for the BuyerMap backend.

pub mod server;
pub mod state;
pub mod types;
pub mod password;
pub mod webhook;

pub use server::{build_router, start_server};
pub use state::AppState;
pub use types::*;
