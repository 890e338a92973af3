//! Response and payload shapes of the Postman REST API
//!
//! Only the fields the pipeline reads are modelled; everything else in a
//! response is ignored. The collection document itself is deliberately NOT
//! typed: script injection round-trips it as raw JSON so unknown fields
//! survive the read-modify-write.

use serde::{Deserialize, Serialize};

/// A workspace visible to the credential
#[derive(Debug, Clone, Deserialize)]
pub struct Workspace {
    pub id: String,
    pub name: String,
}

/// `GET /workspaces`
#[derive(Debug, Deserialize)]
pub struct WorkspaceList {
    #[serde(default)]
    pub workspaces: Vec<Workspace>,
}

/// An API resource in the API builder
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteApi {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// `GET /apis?workspace=<id>`
#[derive(Debug, Deserialize)]
pub struct ApiList {
    #[serde(default)]
    pub apis: Vec<RemoteApi>,
}

/// `POST /apis?workspace=<id>`
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope {
    pub api: RemoteApi,
}

/// A version under an API resource
#[derive(Debug, Clone, Deserialize)]
pub struct ApiVersion {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// `GET /apis/{api_id}/versions`
#[derive(Debug, Deserialize)]
pub struct VersionList {
    #[serde(default)]
    pub versions: Vec<ApiVersion>,
}

/// `POST /apis/{api_id}/versions`
#[derive(Debug, Deserialize)]
pub struct VersionEnvelope {
    pub version: ApiVersion,
}

/// One collection reference in an import result. Depending on the endpoint
/// generation the server reports `id` or `uid`.
#[derive(Debug, Deserialize)]
pub struct CollectionRef {
    pub id: Option<String>,
    pub uid: Option<String>,
}

impl CollectionRef {
    /// Working identifier: `id` if present, else `uid`.
    pub fn ident(&self) -> Option<&str> {
        self.id.as_deref().or(self.uid.as_deref())
    }
}

/// `POST /import/openapi?workspace=<id>`
#[derive(Debug, Deserialize)]
pub struct ImportResult {
    #[serde(default)]
    pub collections: Vec<CollectionRef>,
}

/// The collection stub returned by `POST /collections`
#[derive(Debug, Deserialize)]
pub struct CollectionCreated {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct CollectionEnvelope {
    pub collection: CollectionCreated,
}

/// One key/value entry in an environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentValue {
    pub key: String,
    pub value: String,
    pub enabled: bool,
}

/// The environment stub returned by `POST /environments`
#[derive(Debug, Deserialize)]
pub struct EnvironmentCreated {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct EnvironmentEnvelope {
    pub environment: EnvironmentCreated,
}

/// One entry of `GET /environments?workspace=<id>`
#[derive(Debug, Deserialize)]
pub struct EnvironmentSummary {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct EnvironmentList {
    #[serde(default)]
    pub environments: Vec<EnvironmentSummary>,
}

/// `GET /environments/{id}`
#[derive(Debug, Deserialize)]
pub struct EnvironmentDetail {
    #[serde(default)]
    pub values: Vec<EnvironmentValue>,
}

#[derive(Debug, Deserialize)]
pub struct EnvironmentDetailEnvelope {
    pub environment: EnvironmentDetail,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_ref_prefers_id() {
        let both = CollectionRef {
            id: Some("id-1".into()),
            uid: Some("uid-1".into()),
        };
        assert_eq!(both.ident(), Some("id-1"));

        let uid_only = CollectionRef {
            id: None,
            uid: Some("uid-1".into()),
        };
        assert_eq!(uid_only.ident(), Some("uid-1"));

        let neither = CollectionRef { id: None, uid: None };
        assert_eq!(neither.ident(), None);
    }

    #[test]
    fn test_workspace_list_tolerates_missing_field() {
        let list: WorkspaceList = serde_json::from_str("{}").unwrap();
        assert!(list.workspaces.is_empty());
    }
}
