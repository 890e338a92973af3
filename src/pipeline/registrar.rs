//! API registration
//!
//! Create-or-reuse by exact name: at most one API resource per spec title
//! per workspace. A failed listing is treated as "no existing API" so a
//! transient read problem never blocks creation; a failed creation is
//! fatal. Version creation is attempted unconditionally and falls back to
//! the first existing version on conflict.

use serde_json::json;

use crate::client::PostmanClient;
use crate::errors::Result;
use crate::models::{ApiEnvelope, ApiList, VersionEnvelope, VersionList};
use crate::openapi::SpecDocument;

/// Ensure an API resource named after the spec title exists, returning its ID.
pub async fn ensure_api(
    client: &PostmanClient,
    workspace_id: &str,
    spec: &SpecDocument,
) -> Result<String> {
    let mut existing = None;
    match client.get(&format!("/apis?workspace={workspace_id}")).await {
        Ok(response) if response.is_success() => {
            if let Ok(list) = response.json::<ApiList>("API listing") {
                existing = list
                    .apis
                    .into_iter()
                    .find(|api| api.name == spec.title)
                    .map(|api| api.id);
            }
        }
        Ok(response) => {
            eprintln!(
                "  warning: could not check existing APIs (status {})",
                response.status
            );
        }
        Err(e) => eprintln!("  warning: could not check existing APIs: {e}"),
    }

    if let Some(id) = existing {
        eprintln!("  API '{}' already exists ({id}); reusing it", spec.title);
        return Ok(id);
    }

    eprintln!("  creating API '{}'", spec.title);
    let payload = json!({
        "api": {
            "name": spec.title,
            "summary": format!("Automated ingestion of {}", spec.title),
            "description": spec.description.clone().unwrap_or_default(),
        }
    });

    let response = client
        .post(&format!("/apis?workspace={workspace_id}"), &payload)
        .await?;
    if !response.is_success() {
        return Err(response.into_error("API creation"));
    }

    let envelope: ApiEnvelope = response.json("API creation")?;
    eprintln!("  API created: {}", envelope.api.id);
    Ok(envelope.api.id)
}

/// Ensure a version named after the spec version exists under the API,
/// returning its ID.
pub async fn ensure_version(
    client: &PostmanClient,
    api_id: &str,
    spec_version: &str,
) -> Result<String> {
    eprintln!("  creating version '{spec_version}'");
    let payload = json!({ "version": { "name": spec_version } });

    let response = client
        .post(&format!("/apis/{api_id}/versions"), &payload)
        .await?;
    if response.is_success() {
        let envelope: VersionEnvelope = response.json("version creation")?;
        eprintln!("  version created: {}", envelope.version.id);
        return Ok(envelope.version.id);
    }

    // The version may already exist; fall back to the first one listed.
    let listing = client.get(&format!("/apis/{api_id}/versions")).await?;
    if listing.is_success() {
        let list: VersionList = listing.json("version listing")?;
        if let Some(version) = list.versions.into_iter().next() {
            eprintln!("  using existing version: {}", version.id);
            return Ok(version.id);
        }
    }

    Err(response.into_error("version creation"))
}
