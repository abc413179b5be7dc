//! HTTP client for IT Glue API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the IT Glue API.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{DataType, HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::ItGlueConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the IT Glue API.
///
/// The client handles:
/// - URL construction from the configured API URL
/// - Default headers including User-Agent, content negotiation and the API key
/// - Status checking, turning non-2xx responses into [`HttpResponseError`]
///
/// No request is ever retried.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use itglue_api::{ItGlueConfig, ApiKey, ApiUrl};
/// use itglue_api::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let config = ItGlueConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .api_url(ApiUrl::new("https://api.itglue.com").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/organizations")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://api.itglue.com`).
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use itglue_api::{ItGlueConfig, ApiKey, ApiUrl};
    /// use itglue_api::clients::HttpClient;
    ///
    /// let config = ItGlueConfig::builder()
    ///     .api_key(ApiKey::new("key").unwrap())
    ///     .api_url(ApiUrl::new("https://api.itglue.com").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = HttpClient::new(&config).unwrap();
    /// assert_eq!(client.base_uri(), "https://api.itglue.com");
    /// ```
    pub fn new(config: &ItGlueConfig) -> Result<Self, HttpError> {
        let base_uri = config.api_url().as_ref().to_string();

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}IT Glue API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert(
            "Accept".to_string(),
            DataType::JsonApi.as_content_type().to_string(),
        );
        default_headers.insert(
            "Content-Type".to_string(),
            DataType::JsonApi.as_content_type().to_string(),
        );
        default_headers.insert(
            "x-api-key".to_string(),
            config.api_key().as_ref().to_string(),
        );

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_uri,
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Resolves the full URL for a request.
    ///
    /// Relative paths are appended to the base URI, absolute URLs are kept
    /// as given. The query string, if any, is appended last.
    #[must_use]
    pub fn url_for(&self, request: &HttpRequest) -> String {
        let mut url = if request.is_absolute() {
            request.path.clone()
        } else if request.path.starts_with('/') {
            format!("{}{}", self.base_uri, request.path)
        } else {
            format!("{}/{}", self.base_uri, request.path)
        };

        if let Some(query) = &request.query {
            url.push(if url.contains('?') { '&' } else { '?' });
            url.push_str(query);
        }

        url
    }

    /// Sends an HTTP request to the IT Glue API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    /// - A 2xx response body is not valid JSON (`Decode`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request);

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Patch => self.client.patch(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!("Sending {} request to {}", request.http_method, url);

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        if !(200..=299).contains(&code) {
            tracing::warn!(
                "{} request to {} failed with response code {}",
                request.http_method,
                url,
                code
            );
            return Err(HttpError::Response(HttpResponseError {
                code,
                body: body_text,
            }));
        }

        let body = if body_text.trim().is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text)?
        };

        Ok(HttpResponse::new(code, res_headers, body))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
