//! OpenAPI description parser
//!
//! The pipeline consumes only the top-level identity fields (title,
//! version, description) and the server table; the rest of the document is
//! passed through verbatim to the import endpoint, so no schema validation
//! happens here.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde_json::Value;

use crate::errors::{Result, SpecportError};

/// Maximum spec file size (16 MB)
const MAX_SPEC_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Title used when the document has no `info.title`
const DEFAULT_TITLE: &str = "Imported API";

/// Version used when the document has no `info.version`
const DEFAULT_VERSION: &str = "1.0.0";

/// Deployment-stage keywords matched against server descriptions, in
/// priority order. The first keyword contained in a description decides
/// the stage; `dev` maps to the `development` key.
pub const STAGE_KEYWORDS: [(&str, &str); 4] = [
    ("production", "production"),
    ("uat", "uat"),
    ("qa", "qa"),
    ("dev", "development"),
];

/// The fields of an OpenAPI description the pipeline consumes
#[derive(Debug, Clone)]
pub struct SpecDocument {
    /// API title
    pub title: String,
    /// API version
    pub version: String,
    /// API description
    pub description: Option<String>,
    /// Server entries in file order
    pub servers: Vec<Server>,
    /// Raw file content, submitted verbatim to the import endpoint
    pub raw: String,
}

/// Server information
#[derive(Debug, Clone)]
pub struct Server {
    pub url: String,
    pub description: Option<String>,
}

impl SpecDocument {
    /// Map deployment stages to server URLs by keyword-matching each
    /// server's description.
    ///
    /// The first matching keyword wins per server; a later server matching
    /// the same stage overwrites the earlier entry. Servers whose
    /// description matches no keyword are dropped.
    pub fn environment_urls(&self) -> IndexMap<&'static str, String> {
        let mut urls = IndexMap::new();

        for server in &self.servers {
            let desc = server.description.as_deref().unwrap_or("").to_lowercase();
            for (keyword, stage) in STAGE_KEYWORDS {
                if desc.contains(keyword) {
                    urls.insert(stage, server.url.clone());
                    break;
                }
            }
        }

        urls
    }
}

/// Load and parse an OpenAPI description from a file
pub fn parse_spec(path: &Path) -> Result<SpecDocument> {
    if !path.exists() {
        return Err(SpecportError::Spec(format!(
            "spec file '{}' not found",
            path.display()
        )));
    }

    let metadata = fs::metadata(path)?;
    if metadata.len() > MAX_SPEC_FILE_SIZE {
        return Err(SpecportError::Spec(format!(
            "spec file too large: {} bytes (max {} bytes)",
            metadata.len(),
            MAX_SPEC_FILE_SIZE
        )));
    }

    let raw = fs::read_to_string(path)?;

    // Detect format by extension, falling back to trying both
    let value: Value = if path.extension().is_some_and(|e| e == "yaml" || e == "yml") {
        serde_yaml::from_str(&raw)
            .map_err(|e| SpecportError::Spec(format!("failed to parse YAML: {e}")))?
    } else if path.extension().is_some_and(|e| e == "json") {
        serde_json::from_str(&raw)
            .map_err(|e| SpecportError::Spec(format!("failed to parse JSON: {e}")))?
    } else {
        serde_json::from_str(&raw)
            .or_else(|_| serde_yaml::from_str(&raw))
            .map_err(|e| SpecportError::Spec(format!("failed to parse spec: {e}")))?
    };

    if !value.is_object() {
        return Err(SpecportError::Spec(
            "spec document is not a mapping".to_string(),
        ));
    }

    let info = value.get("info");

    let title = info
        .and_then(|i| i.get("title"))
        .and_then(|v| v.as_str())
        .unwrap_or(DEFAULT_TITLE)
        .to_string();

    let version = info
        .and_then(|i| i.get("version"))
        .and_then(|v| v.as_str())
        .unwrap_or(DEFAULT_VERSION)
        .to_string();

    let description = info
        .and_then(|i| i.get("description"))
        .and_then(|v| v.as_str())
        .map(|s| s.to_string());

    let servers = parse_servers(value.get("servers"));

    Ok(SpecDocument {
        title,
        version,
        description,
        servers,
        raw,
    })
}

/// Parse the `servers` array; an absent or malformed array yields no servers
fn parse_servers(servers: Option<&Value>) -> Vec<Server> {
    let Some(servers) = servers.and_then(|s| s.as_array()) else {
        return Vec::new();
    };

    servers
        .iter()
        .filter_map(|s| {
            let url = s.get("url")?.as_str()?.to_string();
            let description = s
                .get("description")
                .and_then(|d| d.as_str())
                .map(|s| s.to_string());
            Some(Server { url, description })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn doc_with_servers(servers: &[(&str, &str)]) -> SpecDocument {
        SpecDocument {
            title: "Test API".to_string(),
            version: "1.0.0".to_string(),
            description: None,
            servers: servers
                .iter()
                .map(|(url, desc)| Server {
                    url: url.to_string(),
                    description: Some(desc.to_string()),
                })
                .collect(),
            raw: String::new(),
        }
    }

    #[test]
    fn test_environment_urls_maps_stage_keywords() {
        let doc = doc_with_servers(&[
            ("https://api.example.com", "Production server"),
            ("https://qa.example.com", "QA Env"),
            ("https://dev.example.com", "Dev box"),
        ]);

        let urls = doc.environment_urls();
        assert_eq!(urls.len(), 3);
        assert_eq!(urls["production"], "https://api.example.com");
        assert_eq!(urls["qa"], "https://qa.example.com");
        assert_eq!(urls["development"], "https://dev.example.com");
    }

    #[test]
    fn test_environment_urls_last_server_wins() {
        let doc = doc_with_servers(&[
            ("https://prod1.example.com", "Production (primary)"),
            ("https://prod2.example.com", "Production (failover)"),
        ]);

        let urls = doc.environment_urls();
        assert_eq!(urls.len(), 1);
        assert_eq!(urls["production"], "https://prod2.example.com");
    }

    #[test]
    fn test_environment_urls_keyword_priority() {
        // "production" wins over the "uat" substring in the same description
        let doc = doc_with_servers(&[("https://x.example.com", "uat mirror of production")]);
        let urls = doc.environment_urls();
        assert_eq!(urls.len(), 1);
        assert!(urls.contains_key("production"));
    }

    #[test]
    fn test_environment_urls_drops_unmatched_servers() {
        let doc = doc_with_servers(&[
            ("https://dev.example.com", "Dev box"),
            ("https://mystery.example.com", "Sandbox of mystery"),
        ]);

        let urls = doc.environment_urls();
        assert_eq!(urls.len(), 1);
        assert!(urls.contains_key("development"));
    }

    #[test]
    fn test_parse_spec_defaults_title_and_version() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(file, "openapi: 3.0.0\npaths: {{}}\n").unwrap();

        let doc = parse_spec(file.path()).unwrap();
        assert_eq!(doc.title, "Imported API");
        assert_eq!(doc.version, "1.0.0");
        assert!(doc.servers.is_empty());
    }

    #[test]
    fn test_parse_spec_reads_info_and_servers() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(
            file,
            "openapi: 3.0.0\n\
             info:\n  title: Refund API\n  version: '2.0'\n  description: Refund ops\n\
             servers:\n  - url: https://dev.x\n    description: Dev\n"
        )
        .unwrap();

        let doc = parse_spec(file.path()).unwrap();
        assert_eq!(doc.title, "Refund API");
        assert_eq!(doc.version, "2.0");
        assert_eq!(doc.description.as_deref(), Some("Refund ops"));
        assert_eq!(doc.servers.len(), 1);
        assert_eq!(doc.servers[0].url, "https://dev.x");
        assert!(doc.raw.contains("Refund API"));
    }

    #[test]
    fn test_parse_spec_missing_file() {
        let err = parse_spec(Path::new("definitely/not/here.yaml")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_parse_spec_malformed_yaml() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(file, "info: [unclosed\n").unwrap();

        assert!(parse_spec(file.path()).is_err());
    }

    #[test]
    fn test_parse_spec_scalar_document_is_rejected() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(file, "just a string\n").unwrap();

        let err = parse_spec(file.path()).unwrap_err();
        assert!(err.to_string().contains("not a mapping"));
    }
}
