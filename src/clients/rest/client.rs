//! REST client implementation for the IT Glue API.
//!
//! This module provides the [`RestClient`] type, the HTTP-backed
//! [`Transport`] used by the resource layer.

use serde_json::{Map, Value};

use crate::clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, Transport,
};
use crate::config::ItGlueConfig;
use crate::rest::query::format_params;

/// REST API client for the IT Glue JSON:API.
///
/// Wraps outgoing payloads as `{"data": ...}`, sends them with the JSON:API
/// content type and returns the decoded response document.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use itglue_api::{ItGlueConfig, ApiKey, ApiUrl, RestClient};
/// use itglue_api::clients::Transport;
///
/// let config = ItGlueConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .api_url(ApiUrl::new("https://api.itglue.com").unwrap())
///     .build()
///     .unwrap();
///
/// let client = RestClient::new(&config)?;
///
/// let document = client.read("/organizations", None).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be created.
    pub fn new(config: &ItGlueConfig) -> Result<Self, HttpError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
        })
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
        query: Option<String>,
    ) -> Result<Value, HttpError> {
        let mut builder = HttpRequest::builder(method, path);

        if let Some(body_value) = body {
            builder = builder.body(body_value).body_type(DataType::JsonApi);
        }

        if let Some(query) = query {
            builder = builder.query(query);
        }

        let request = builder.build()?;
        let response = self.http_client.request(request).await?;
        Ok(response.into_body())
    }
}

/// Wraps a payload as `{"data": payload}`, attaching relationships to the
/// object when given.
fn wrap_payload(mut payload: Value, relationships: Option<Map<String, Value>>) -> Value {
    if let (Some(relationships), Some(object)) = (relationships, payload.as_object_mut()) {
        if !relationships.is_empty() {
            object.insert("relationships".to_string(), Value::Object(relationships));
        }
    }
    serde_json::json!({ "data": payload })
}

impl Transport for RestClient {
    async fn read(
        &self,
        path: &str,
        params: Option<&Map<String, Value>>,
    ) -> Result<Value, HttpError> {
        let query = params.map(|params| format_params(params, None));
        self.make_request(HttpMethod::Get, path, None, query).await
    }

    async fn create(
        &self,
        path: &str,
        payload: Value,
        relationships: Option<Map<String, Value>>,
    ) -> Result<Value, HttpError> {
        let body = wrap_payload(payload, relationships);
        self.make_request(HttpMethod::Post, path, Some(body), None)
            .await
    }

    async fn update(&self, path: &str, payload: Value) -> Result<Value, HttpError> {
        let body = wrap_payload(payload, None);
        self.make_request(HttpMethod::Patch, path, Some(body), None)
            .await
    }

    async fn destroy(&self, path: &str, payload: Option<Value>) -> Result<Value, HttpError> {
        let body = payload.map(|payload| wrap_payload(payload, None));
        self.make_request(HttpMethod::Delete, path, body, None).await
    }

    async fn follow(&self, url: &str) -> Result<Value, HttpError> {
        self.make_request(HttpMethod::Get, url, None, None).await
    }
}
