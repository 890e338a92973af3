//! Manual probes of the remote contract
//!
//! The `/specs` endpoint is undocumented and has drifted from its published
//! examples; `--diagnose-specs` replays a series of payload-shape guesses
//! against it and reports which ones the server accepts. The environment
//! helpers inspect and undo the side effects of repeated pipeline runs
//! (every run creates a fresh environment).
//!
//! Probe outcomes never fail the process: the point is the report itself.

use serde_json::{json, Value};
use tracing::{info, warn};

use crate::client::PostmanClient;
use crate::errors::Result;
use crate::models::{EnvironmentDetailEnvelope, EnvironmentList};
use crate::openapi::SpecDocument;
use crate::status::ExitStatus;

enum ProbeBody {
    Json(Value),
    Raw(String, &'static str),
}

struct ProbeVariant {
    label: &'static str,
    path: String,
    body: ProbeBody,
}

fn probe_variants(workspace_id: &str, spec: &SpecDocument) -> Vec<ProbeVariant> {
    let mut variants = vec![
        ProbeVariant {
            label: "minimal payload, workspaceId query parameter",
            path: format!("/specs?workspaceId={workspace_id}"),
            body: ProbeBody::Json(json!({
                "spec": { "name": spec.title, "content": spec.raw, "contentType": "yaml" }
            })),
        },
        ProbeVariant {
            label: "minimal payload, workspace query parameter",
            path: format!("/specs?workspace={workspace_id}"),
            body: ProbeBody::Json(json!({
                "spec": { "name": spec.title, "content": spec.raw, "contentType": "yaml" }
            })),
        },
        ProbeVariant {
            label: "with 'type' field",
            path: format!("/specs?workspace={workspace_id}"),
            body: ProbeBody::Json(json!({
                "spec": {
                    "name": spec.title,
                    "content": spec.raw,
                    "contentType": "yaml",
                    "type": "openapi"
                }
            })),
        },
        ProbeVariant {
            label: "'schema' and 'language' field names",
            path: format!("/specs?workspace={workspace_id}"),
            body: ProbeBody::Json(json!({
                "spec": { "name": spec.title, "schema": spec.raw, "language": "yaml" }
            })),
        },
        ProbeVariant {
            label: "raw YAML body, application/yaml content type",
            path: format!("/specs?workspace={workspace_id}"),
            body: ProbeBody::Raw(spec.raw.clone(), "application/yaml"),
        },
    ];

    // JSON-encoded content only works when the raw document re-parses
    if let Ok(parsed) = serde_yaml::from_str::<Value>(&spec.raw) {
        if let Ok(content) = serde_json::to_string(&parsed) {
            variants.push(ProbeVariant {
                label: "JSON-encoded content",
                path: format!("/specs?workspace={workspace_id}"),
                body: ProbeBody::Json(json!({
                    "spec": { "name": spec.title, "content": content, "contentType": "json" }
                })),
            });
        }
    }

    variants
}

/// Probe POST /specs with every payload variant and report a summary.
pub async fn run_specs_probe(
    client: &PostmanClient,
    workspace_id: &str,
    spec: &SpecDocument,
) -> Result<ExitStatus> {
    let variants = probe_variants(workspace_id, spec);
    eprintln!(
        "Probing POST /specs with {} payload variants ({} bytes of spec)",
        variants.len(),
        spec.raw.len()
    );

    let mut accepted = Vec::new();
    for (index, variant) in variants.iter().enumerate() {
        eprintln!("\n[{}/{}] {}", index + 1, variants.len(), variant.label);

        let response = match &variant.body {
            ProbeBody::Json(payload) => client.post(&variant.path, payload).await?,
            ProbeBody::Raw(body, content_type) => {
                client.post_raw(&variant.path, body.clone(), *content_type).await?
            }
        };

        let preview: String = response.text.chars().take(200).collect();
        if response.is_success() {
            eprintln!("  status {}: accepted", response.status);
            info!(variant = variant.label, status = response.status.as_u16(), "variant accepted");
            accepted.push(variant.label);
        } else {
            eprintln!("  status {}: rejected", response.status);
            eprintln!("  response: {preview}");
            warn!(variant = variant.label, status = response.status.as_u16(), "variant rejected");
        }
    }

    // Context checks: workspace capabilities and what the stable surface
    // already shows for this workspace.
    eprintln!("\nWorkspace details:");
    let response = client.get(&format!("/workspaces/{workspace_id}")).await?;
    if response.is_success() {
        let workspace = &response.body["workspace"];
        eprintln!(
            "  name: {}, type: {}, visibility: {}",
            workspace["name"].as_str().unwrap_or("?"),
            workspace["type"].as_str().unwrap_or("?"),
            workspace["visibility"].as_str().unwrap_or("?")
        );
    } else {
        eprintln!("  could not fetch workspace details (status {})", response.status);
    }

    let response = client.get(&format!("/apis?workspace={workspace_id}")).await?;
    if response.is_success() {
        let count = response.body["apis"].as_array().map_or(0, |a| a.len());
        eprintln!("  APIs already in workspace: {count}");
    }

    eprintln!("\nProbe summary: {}/{} variants accepted", accepted.len(), variants.len());
    if accepted.is_empty() {
        eprintln!("  /specs rejected every variant; the stable /apis + /import/openapi");
        eprintln!("  surface used by the pipeline remains the working path.");
    } else {
        for label in &accepted {
            eprintln!("  accepted: {label}");
        }
    }

    Ok(ExitStatus::Success)
}

/// List environments in the workspace together with their variables.
pub async fn list_environments(client: &PostmanClient, workspace_id: &str) -> Result<ExitStatus> {
    let response = client
        .get(&format!("/environments?workspace={workspace_id}"))
        .await?;
    if !response.is_success() {
        return Err(response.into_error("environment listing"));
    }

    let list: EnvironmentList = response.json("environment listing")?;
    eprintln!("Found {} environments:", list.environments.len());

    for environment in &list.environments {
        eprintln!("  - {} ({})", environment.name, environment.id);

        let detail = client
            .get(&format!("/environments/{}", environment.id))
            .await?;
        if !detail.is_success() {
            eprintln!("    could not fetch detail (status {})", detail.status);
            continue;
        }

        if let Ok(envelope) = detail.json::<EnvironmentDetailEnvelope>("environment detail") {
            eprintln!("    variables: {}", envelope.environment.values.len());
            for value in &envelope.environment.values {
                let preview: String = value.value.chars().take(50).collect();
                if preview.is_empty() {
                    eprintln!("      - {}: (empty)", value.key);
                } else {
                    eprintln!("      - {}: {}", value.key, preview);
                }
            }
        }
    }

    Ok(ExitStatus::Success)
}

/// Delete one environment by ID. A rejection is reported, not fatal.
pub async fn delete_environment(client: &PostmanClient, environment_id: &str) -> Result<ExitStatus> {
    eprintln!("Deleting environment {environment_id}...");

    let response = client
        .delete(&format!("/environments/{environment_id}"))
        .await?;
    if response.is_success() {
        eprintln!("  environment deleted");
    } else {
        eprintln!(
            "  warning: delete answered status {} - {}",
            response.status, response.text
        );
    }

    Ok(ExitStatus::Success)
}
