//! Collection generation
//!
//! Submits the raw spec text to the import endpoint, which synthesizes a
//! request collection server-side. When the import reports no collections
//! the stage falls back to creating an empty shell so the downstream
//! stages still have a collection to target.

use serde_json::json;

use crate::client::PostmanClient;
use crate::errors::Result;
use crate::models::{CollectionEnvelope, ImportResult};
use crate::openapi::SpecDocument;

/// Schema declaration stamped on manually created collections
const COLLECTION_SCHEMA_URL: &str =
    "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

pub async fn import_collection(
    client: &PostmanClient,
    workspace_id: &str,
    spec: &SpecDocument,
) -> Result<String> {
    eprintln!("  importing OpenAPI schema via the import endpoint");
    let payload = json!({ "type": "string", "input": spec.raw });

    let response = client
        .post(&format!("/import/openapi?workspace={workspace_id}"), &payload)
        .await?;
    if !response.is_success() {
        return Err(response.into_error("OpenAPI import"));
    }

    let result: ImportResult = response.json("OpenAPI import")?;
    if let Some(id) = result.collections.first().and_then(|c| c.ident()) {
        eprintln!("  collection created: {id}");
        return Ok(id.to_string());
    }

    eprintln!("  import produced no collection; creating one manually");
    let payload = json!({
        "collection": {
            "info": {
                "name": format!("{} - Collection", spec.title),
                "description": spec.description.clone().unwrap_or_default(),
                "schema": COLLECTION_SCHEMA_URL,
            }
        }
    });

    let response = client
        .post(&format!("/collections?workspace={workspace_id}"), &payload)
        .await?;
    if !response.is_success() {
        return Err(response.into_error("fallback collection creation"));
    }

    let envelope: CollectionEnvelope = response.json("fallback collection creation")?;
    eprintln!("  fallback collection created: {}", envelope.collection.id);
    Ok(envelope.collection.id)
}
