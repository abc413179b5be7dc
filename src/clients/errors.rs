//! HTTP-specific error types for the IT Glue API client.
//!
//! These are the transport-tier failures. The resource layer wraps them in
//! [`ResourceError`](crate::rest::ResourceError) either transparently or, for
//! lookups by id, as [`ResourceError::NotFound`](crate::rest::ResourceError::NotFound).
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use itglue_api::clients::{HttpError, Transport};
//!
//! match client.read("/organizations", None).await {
//!     Ok(document) => println!("Data: {}", document["data"]),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.body),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {}", e),
//!     Err(HttpError::Network(e)) => println!("Network error: {}", e),
//!     Err(HttpError::Decode(e)) => println!("Unreadable body: {}", e),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// Carries the status code and the raw response body.
///
/// # Example
///
/// ```rust
/// use itglue_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     body: r#"{"errors":[{"status":"404","title":"Record not found"}]}"#.to_string(),
/// };
///
/// assert!(error.to_string().contains("404"));
/// assert!(error.to_string().contains("Record not found"));
/// ```
#[derive(Debug, Error)]
#[error("Request failed with response code {code} and body {body}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub body: String,
}

/// Error returned when an HTTP request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST or PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The request path is empty or otherwise unusable.
    #[error("Invalid request path: '{path}'")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A successful response carried a body that is not valid JSON.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl HttpError {
    /// Returns the HTTP status code if this error came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}

// Verify HttpError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
};
