//! HTTP plumbing for the Postman REST API
//!
//! A thin JSON wrapper over reqwest: every call carries the X-Api-Key
//! header and returns the status together with the body text, leaving the
//! 2xx/fallback/soft-failure decision to the calling stage. Transport
//! errors surface as `SpecportError::Request`.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::Config;
use crate::errors::{Result, SpecportError};

pub const USER_AGENT_STRING: &str = concat!("specport/", env!("CARGO_PKG_VERSION"));

const API_KEY_HEADER: &str = "x-api-key";

/// Client bound to one base host and one API key
pub struct PostmanClient {
    client: Client,
    base_url: String,
}

/// A remote answer: status code plus the body, both raw and parsed.
///
/// The body text is kept verbatim so failure paths can log the full
/// response detail; `body` is `Value::Null` when the text is not JSON.
#[derive(Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub text: String,
    pub body: Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Deserialize the body into a typed payload.
    pub fn json<T: DeserializeOwned>(&self, context: &str) -> Result<T> {
        serde_json::from_str(&self.text).map_err(|e| {
            SpecportError::Parse(format!("{context}: unexpected response shape: {e}"))
        })
    }

    /// Convert a non-2xx answer into the fatal API error for `context`.
    pub fn into_error(self, context: &str) -> SpecportError {
        SpecportError::Api {
            context: context.to_string(),
            status: self.status.as_u16(),
            body: self.text,
        }
    }
}

impl PostmanClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut key_value = HeaderValue::from_str(config.api_key.as_str())
            .map_err(|_| SpecportError::Config("API key contains non-header characters".into()))?;
        key_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(API_KEY_HEADER), key_value);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .user_agent(USER_AGENT_STRING)
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub async fn get(&self, path: &str) -> Result<ApiResponse> {
        self.request(Method::GET, path, None).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> Result<ApiResponse> {
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn put(&self, path: &str, body: &Value) -> Result<ApiResponse> {
        self.request(Method::PUT, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<ApiResponse> {
        self.request(Method::DELETE, path, None).await
    }

    /// POST a raw body with an explicit content type (used by the /specs
    /// probe, which guesses at non-JSON encodings).
    pub async fn post_raw(
        &self,
        path: &str,
        body: String,
        content_type: &'static str,
    ) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(method = "POST", %url, content_type, "postman api call");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await?;

        Self::capture(response).await
    }

    async fn request(&self, method: Method, path: &str, body: Option<&Value>) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, "postman api call");

        let mut request = self.client.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        Self::capture(request.send().await?).await
    }

    async fn capture(response: reqwest::Response) -> Result<ApiResponse> {
        let status = response.status();
        let text = response.text().await?;
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        tracing::debug!(status = status.as_u16(), bytes = text.len(), "postman api response");

        Ok(ApiResponse { status, text, body })
    }
}
