//! Common test utilities for specport integration tests
//!
//! Provides a CLI invocation helper that runs the compiled binary with a
//! scrubbed environment, plus fixture helpers for spec and mock-script
//! files.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// A small OpenAPI fixture with one server per deployment stage
pub const SAMPLE_SPEC: &str = "\
openapi: 3.0.0
info:
  title: Refund API
  version: '2.0'
  description: Payment refund operations
servers:
  - url: https://api.refunds.example.com
    description: Production server
  - url: https://qa.refunds.example.com
    description: QA Env
  - url: https://dev.refunds.example.com
    description: Dev box
paths: {}
";

/// A mock pre-request script fixture
pub const SAMPLE_MOCK_SCRIPT: &str = "\
const clientId = pm.environment.get('client_id');
pm.environment.set('jwt_token', 'mock.' + clientId);
";

/// Result of running the specport CLI
#[derive(Debug)]
pub struct CliResponse {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CliResponse {
    /// True when either stream contains the needle
    pub fn contains(&self, needle: &str) -> bool {
        self.stdout.contains(needle) || self.stderr.contains(needle)
    }
}

impl From<Output> for CliResponse {
    fn from(output: Output) -> Self {
        CliResponse {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code().unwrap_or(-1),
        }
    }
}

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_specport"))
}

/// Run specport with the given args and environment overrides.
///
/// POSTMAN_* variables are always cleared first so host configuration
/// cannot leak into tests.
pub fn run_specport(args: &[&str], envs: &[(&str, &str)]) -> CliResponse {
    let mut cmd = Command::new(bin_path());
    cmd.args(args);

    for var in [
        "POSTMAN_API_KEY",
        "POSTMAN_WORKSPACE_ID",
        "POSTMAN_WORKSPACE_NAME",
        "POSTMAN_API_BASE_URL",
    ] {
        cmd.env_remove(var);
    }
    for (key, value) in envs {
        cmd.env(key, value);
    }

    let output = cmd.output().expect("failed to run specport binary");
    CliResponse::from(output)
}

/// Write the sample spec into `dir` and return its path
pub fn write_sample_spec(dir: &Path) -> PathBuf {
    let path = dir.join("refund-api.yaml");
    std::fs::write(&path, SAMPLE_SPEC).expect("failed to write spec fixture");
    path
}

/// Write the sample mock script into `dir` and return its path
pub fn write_mock_script(dir: &Path) -> PathBuf {
    let path = dir.join("jwt_mock.js");
    std::fs::write(&path, SAMPLE_MOCK_SCRIPT).expect("failed to write mock script fixture");
    path
}
