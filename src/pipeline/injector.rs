//! Mock-auth script injection
//!
//! The only read-modify-write in the pipeline: fetch the generated
//! collection, append a prerequest event at the collection root, and PUT
//! the full document back. No concurrency check is performed; a concurrent
//! edit between fetch and write is silently overwritten. Every failure in
//! this stage is soft.

use std::fs;
use std::path::Path;

use serde_json::{json, Value};

use crate::client::PostmanClient;
use crate::errors::{Result, SpecportError};

/// Inject the script at `script_path` into the collection root. A missing
/// file skips the stage; remote failures are logged and swallowed.
pub async fn inject_mock_script(client: &PostmanClient, collection_id: &str, script_path: &Path) {
    if !script_path.exists() {
        eprintln!(
            "  mock script '{}' not found; skipping injection",
            script_path.display()
        );
        return;
    }

    match try_inject(client, collection_id, script_path).await {
        Ok(()) => eprintln!("  mock script injected"),
        Err(e) => eprintln!("  warning: failed to inject mock script: {e}"),
    }
}

async fn try_inject(client: &PostmanClient, collection_id: &str, script_path: &Path) -> Result<()> {
    let source = fs::read_to_string(script_path)?;

    let response = client.get(&format!("/collections/{collection_id}")).await?;
    if !response.is_success() {
        return Err(response.into_error("collection fetch"));
    }

    let mut document = response.body;
    append_prerequest_event(&mut document, &source)?;

    let response = client
        .put(&format!("/collections/{collection_id}"), &document)
        .await?;
    if !response.is_success() {
        return Err(response.into_error("collection update"));
    }

    Ok(())
}

/// Append a prerequest event carrying `source` as a line-oriented script
/// body to the collection root, creating the `event` array if absent.
/// Pre-existing events are kept.
pub fn append_prerequest_event(document: &mut Value, source: &str) -> Result<()> {
    let collection = document
        .get_mut("collection")
        .and_then(Value::as_object_mut)
        .ok_or_else(|| {
            SpecportError::Parse("collection document missing 'collection' object".to_string())
        })?;

    let events = collection
        .entry("event")
        .or_insert_with(|| Value::Array(Vec::new()));
    let events = events
        .as_array_mut()
        .ok_or_else(|| SpecportError::Parse("collection 'event' is not an array".to_string()))?;

    events.push(json!({
        "listen": "prerequest",
        "script": {
            "type": "text/javascript",
            "exec": source.lines().collect::<Vec<_>>(),
        }
    }));

    Ok(())
}
