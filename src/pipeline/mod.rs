//! The provisioning pipeline
//!
//! Five strictly sequential stages; each consumes an identifier produced by
//! the previous one. A fatal failure aborts the run with a diagnostic; soft
//! failures (environment registration, script injection) are logged with
//! the response detail and the remaining stages proceed.
//!
//! Re-running the pipeline reuses the API resource (idempotent by name)
//! but creates a fresh collection and environment each time.

mod environment;
mod importer;
mod injector;
mod registrar;
mod workspace;

pub use environment::{build_environment_values, create_environment};
pub use importer::import_collection;
pub use injector::{append_prerequest_event, inject_mock_script};
pub use registrar::{ensure_api, ensure_version};
pub use workspace::resolve_workspace;

use std::path::Path;

use crate::client::PostmanClient;
use crate::errors::Result;
use crate::openapi::SpecDocument;
use crate::status::ExitStatus;

/// Run the provisioning stages against an already-resolved workspace.
pub async fn run_pipeline(
    client: &PostmanClient,
    workspace_id: &str,
    spec: &SpecDocument,
    mock_script: &Path,
) -> Result<ExitStatus> {
    eprintln!("\nRegistering API in the API builder...");
    let api_id = ensure_api(client, workspace_id, spec).await?;
    ensure_version(client, &api_id, &spec.version).await?;

    eprintln!("\nGenerating collection from the spec...");
    let collection_id = import_collection(client, workspace_id, spec).await?;

    eprintln!("\nProvisioning environment...");
    let env_urls = spec.environment_urls();
    let values = build_environment_values(&env_urls);
    create_environment(client, workspace_id, &spec.title, &values).await?;

    eprintln!("\nInjecting mock auth script...");
    inject_mock_script(client, &collection_id, mock_script).await;

    eprintln!("\nProvisioning complete.");
    eprintln!("Workspace: https://go.postman.co/workspace/{workspace_id}");

    Ok(ExitStatus::Success)
}
