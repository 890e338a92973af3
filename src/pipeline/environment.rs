//! Environment provisioning
//!
//! Assembles the stage-switcher variable set (base URL, one URL per
//! resolved stage, auth placeholders) and registers it as a named
//! environment. Registration failure is SOFT: the response detail is
//! logged and the pipeline continues without an environment ID.

use indexmap::IndexMap;
use serde_json::json;

use crate::client::PostmanClient;
use crate::errors::Result;
use crate::models::{EnvironmentEnvelope, EnvironmentValue};

/// Placeholder base URL when the spec has no development server
const FALLBACK_BASE_URL: &str = "https://example.com";

fn value(key: &str, value: impl Into<String>) -> EnvironmentValue {
    EnvironmentValue {
        key: key.to_string(),
        value: value.into(),
        enabled: true,
    }
}

/// Build the flat values list: `baseUrl`, one `url_<stage>` per mapped
/// stage, and the four fixed auth entries the mock script reads.
pub fn build_environment_values(env_urls: &IndexMap<&'static str, String>) -> Vec<EnvironmentValue> {
    let mut values = Vec::with_capacity(env_urls.len() + 5);

    // baseUrl defaults to the development URL so a fresh import points at
    // the safest stage.
    let base = env_urls
        .get("development")
        .cloned()
        .unwrap_or_else(|| FALLBACK_BASE_URL.to_string());
    values.push(value("baseUrl", base));

    for (stage, url) in env_urls {
        values.push(value(&format!("url_{stage}"), url.clone()));
    }

    // Auth placeholders; jwt_token stays empty and is populated at request
    // time by the injected mock script.
    values.push(value("client_id", "demo_client_id_123"));
    values.push(value("client_secret", "demo_secret"));
    values.push(value("token_url", "https://auth.example.com/token"));
    values.push(value("jwt_token", ""));

    values
}

/// Register the values as `"<title> - Environment"`. Returns the new
/// environment ID, or `None` when the remote rejected the registration.
pub async fn create_environment(
    client: &PostmanClient,
    workspace_id: &str,
    title: &str,
    values: &[EnvironmentValue],
) -> Result<Option<String>> {
    let payload = json!({
        "environment": {
            "name": format!("{title} - Environment"),
            "values": values,
        }
    });

    let response = client
        .post(&format!("/environments?workspace={workspace_id}"), &payload)
        .await?;
    if !response.is_success() {
        eprintln!(
            "  warning: environment creation failed with status {}",
            response.status
        );
        eprintln!("  response: {}", response.text);
        eprintln!("  payload had {} variables", values.len());
        return Ok(None);
    }

    let envelope: EnvironmentEnvelope = response.json("environment creation")?;
    eprintln!(
        "  environment created: '{}' ({})",
        envelope.environment.name, envelope.environment.id
    );
    eprintln!("  variables: {} configured", values.len());
    Ok(Some(envelope.environment.id))
}
