//! Remote configuration handling
//!
//! All remote calls go to one fixed base host authenticated with a static
//! API key. The key is required for every networked mode and its absence is
//! a fatal error before any call is attempted.

use std::time::Duration;

use crate::cli::args::{Args, SecretString};
use crate::errors::{Result, SpecportError};

/// Base host of the Postman REST API
pub const DEFAULT_BASE_URL: &str = "https://api.getpostman.com";

/// Environment variable holding the API key
pub const API_KEY_ENV_VAR: &str = "POSTMAN_API_KEY";

/// Default mock script file injected at the collection root
pub const DEFAULT_MOCK_SCRIPT: &str = "jwt_mock.js";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: f64 = 30.0;

/// Resolved remote configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub api_key: SecretString,
    pub timeout: Duration,
}

impl Config {
    /// Resolve the remote configuration from parsed CLI arguments.
    pub fn from_args(args: &Args) -> Result<Self> {
        let api_key = args.api_key.clone().ok_or_else(|| {
            SpecportError::Config(format!(
                "{API_KEY_ENV_VAR} is not set. Set it with: export {API_KEY_ENV_VAR}='your-api-key'"
            ))
        })?;

        let base_url = args.base_url.trim_end_matches('/').to_string();
        // Fail fast on an unusable base URL rather than at the first call
        url::Url::parse(&base_url)?;

        Ok(Self {
            base_url,
            api_key,
            timeout: Duration::from_secs_f64(args.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        })
    }
}
