//! HTTP client module
//!
//! Thin wrapper around `reqwest` used by every test in the suite.

mod client;

pub use client::{ApiClient, ApiRequest, ApiResponse, HttpError};
