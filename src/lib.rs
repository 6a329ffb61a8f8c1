//! restcheck: an API test suite for the JSONPlaceholder REST API
//!
//! The crate is a library of building blocks the integration tests compose:
//!
//! - [`http`]: thin `reqwest` wrapper with base URL, JSON headers, timeout,
//!   and per-call latency capture
//! - [`endpoints`]: path templates for every resource under test
//! - [`validate`]: assertion helpers and JSON Schema checks
//! - [`data`]: shared payloads, schemas, ids, and latency thresholds
//! - [`config`]: base URL and timeout, overridable via `RESTCHECK_*`
//!   environment variables
//!
//! The suite itself lives in `tests/` and runs under `cargo test`. Hermetic
//! tests stand up a local mock of JSONPlaceholder; tests marked `#[ignore]`
//! run against the live service.
//!
//! ```no_run
//! use restcheck::{endpoints, validate::assert_status, ApiClient, ApiConfig};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let client = ApiClient::from_config(&ApiConfig::from_env())?;
//! let response = client.get(endpoints::USERS).await?;
//! assert_status(&response, 200);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data;
pub mod endpoints;
pub mod http;
pub mod utils;
pub mod validate;

pub use config::ApiConfig;
pub use http::{ApiClient, ApiRequest, ApiResponse, HttpError};
