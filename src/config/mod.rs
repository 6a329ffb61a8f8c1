//! Suite configuration
//!
//! Holds the base URL and request timeout shared by every test, with
//! environment variable overrides.

mod env;

pub use env::{EnvBuilder, EnvConfig, EnvGuard};

/// Default target: the public JSONPlaceholder instance
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Suite configuration
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Base URL for all requests
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Load configuration, letting environment variables override defaults
    pub fn from_env() -> Self {
        let env = EnvConfig::load();
        Self {
            base_url: env.base_url_or(DEFAULT_BASE_URL),
            timeout_secs: env.timeout_or(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Override the base URL
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Override the timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}
