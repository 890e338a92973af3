//! Workspace resolution
//!
//! Priority: explicit ID (used verbatim, no existence check), then name
//! filter matched case-insensitively by containment, then the first
//! workspace in the listing. Once a name filter is given and misses, the
//! run fails rather than falling back to auto-selection.

use crate::client::PostmanClient;
use crate::errors::{Result, SpecportError};
use crate::models::WorkspaceList;

pub async fn resolve_workspace(
    client: &PostmanClient,
    explicit_id: Option<&str>,
    name_filter: &str,
) -> Result<String> {
    if let Some(id) = explicit_id {
        eprintln!("Using configured workspace ID: {id}");
        return Ok(id.to_string());
    }

    let response = client.get("/workspaces").await?;
    if !response.is_success() {
        return Err(response.into_error("workspace listing"));
    }
    let list: WorkspaceList = response.json("workspace listing")?;

    if list.workspaces.is_empty() {
        return Err(SpecportError::Workspace(
            "no workspaces found; create one in Postman first".to_string(),
        ));
    }

    if name_filter.is_empty() {
        let workspace = &list.workspaces[0];
        eprintln!("Auto-selected workspace '{}' ({})", workspace.name, workspace.id);
        return Ok(workspace.id.clone());
    }

    let needle = name_filter.to_lowercase();
    match list
        .workspaces
        .iter()
        .find(|ws| ws.name.to_lowercase().contains(&needle))
    {
        Some(workspace) => {
            eprintln!("Found target workspace '{}' ({})", workspace.name, workspace.id);
            Ok(workspace.id.clone())
        }
        None => {
            eprintln!("Workspace '{name_filter}' not found. Available workspaces:");
            for workspace in &list.workspaces {
                eprintln!("  - {} ({})", workspace.name, workspace.id);
            }
            Err(SpecportError::Workspace(format!(
                "workspace '{name_filter}' not found"
            )))
        }
    }
}
