//! Configuration constants and resolution

mod config;

pub use config::{Config, API_KEY_ENV_VAR, DEFAULT_BASE_URL, DEFAULT_MOCK_SCRIPT, DEFAULT_TIMEOUT_SECS};
