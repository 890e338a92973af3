//! CLI argument definitions using clap
//!
//! This module defines all command-line arguments for specport.

use clap::{ArgAction, Parser, ValueEnum};
use std::fmt;
use std::path::PathBuf;

use crate::config::{DEFAULT_BASE_URL, DEFAULT_MOCK_SCRIPT};

/// A string that redacts its value in Debug output to prevent credential leakage
#[derive(Clone, Default)]
pub struct SecretString(pub String);

impl SecretString {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "SecretString(\"\")")
        } else {
            write!(f, "SecretString(\"[REDACTED]\")")
        }
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "")
        } else {
            write!(f, "[REDACTED]")
        }
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        SecretString(s)
    }
}

impl std::str::FromStr for SecretString {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SecretString(s.to_string()))
    }
}

impl AsRef<str> for SecretString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Shells supported by --generate-completions
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Parser, Debug)]
#[command(
    name = "specport",
    version,
    about = "Ship a local OpenAPI description into a Postman workspace",
    long_about = "Registers a versioned API from a local OpenAPI description, generates a \
                  request collection from it, provisions a stage-scoped environment, and \
                  injects a mock-authentication pre-request script into the collection."
)]
pub struct Args {
    /// Path to the OpenAPI description (YAML or JSON)
    #[arg(value_name = "SPEC")]
    pub spec: Option<PathBuf>,

    // =========================================================================
    // TARGET WORKSPACE
    // =========================================================================
    /// Exact workspace ID; used verbatim, skipping the workspace lookup
    #[arg(long = "workspace-id", env = "POSTMAN_WORKSPACE_ID", value_name = "ID")]
    pub workspace_id: Option<String>,

    /// Workspace name filter, matched case-insensitively by containment.
    /// An empty value auto-selects the first visible workspace.
    #[arg(
        long = "workspace-name",
        env = "POSTMAN_WORKSPACE_NAME",
        value_name = "NAME",
        default_value = "My Workspace"
    )]
    pub workspace_name: String,

    // =========================================================================
    // CREDENTIALS & REMOTE
    // =========================================================================
    /// Postman API key (prefer setting POSTMAN_API_KEY in the environment)
    #[arg(
        long = "api-key",
        env = "POSTMAN_API_KEY",
        hide_env_values = true,
        value_name = "KEY"
    )]
    pub api_key: Option<SecretString>,

    /// Base URL of the Postman REST API
    #[arg(
        long = "base-url",
        env = "POSTMAN_API_BASE_URL",
        value_name = "URL",
        default_value = DEFAULT_BASE_URL
    )]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long = "timeout", value_name = "SECONDS")]
    pub timeout: Option<f64>,

    // =========================================================================
    // PIPELINE INPUTS
    // =========================================================================
    /// Mock pre-request script injected at the collection root.
    /// A missing file skips injection without failing the run.
    #[arg(long = "mock-script", value_name = "FILE", default_value = DEFAULT_MOCK_SCRIPT)]
    pub mock_script: PathBuf,

    /// Parse the spec and print the provisioning plan without any network calls
    #[arg(long = "offline", action = ArgAction::SetTrue)]
    pub offline: bool,

    // =========================================================================
    // DIAGNOSTICS
    // =========================================================================
    /// Probe the undocumented /specs endpoint with several payload shapes
    /// and report what the server accepts
    #[arg(long = "diagnose-specs", action = ArgAction::SetTrue)]
    pub diagnose_specs: bool,

    /// List environments in the target workspace with their variables
    #[arg(long = "list-environments", action = ArgAction::SetTrue)]
    pub list_environments: bool,

    /// Delete an environment by ID
    #[arg(long = "delete-environment", value_name = "ENV_ID")]
    pub delete_environment: Option<String>,

    // =========================================================================
    // OUTPUT & MISC
    // =========================================================================
    /// Enable debug logging (filter with SPECPORT_LOG, RUST_LOG syntax)
    #[arg(long = "debug", action = ArgAction::SetTrue)]
    pub debug: bool,

    /// Generate shell completions
    #[arg(long = "generate-completions", value_name = "SHELL", value_enum)]
    pub generate_completions: Option<Shell>,
}
