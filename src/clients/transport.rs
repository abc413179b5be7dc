//! The transport contract the resource layer is written against.
//!
//! [`Resource`](crate::rest::Resource) operations never talk to reqwest
//! directly. They go through a [`Transport`], which [`RestClient`](crate::clients::RestClient)
//! implements over HTTP. Tests substitute a recording double.

use serde_json::{Map, Value};

use crate::clients::errors::HttpError;

/// Executes JSON:API calls on behalf of the resource layer.
///
/// Every method returns the full decoded response document
/// (`{"data": ..., "meta": ..., "links": ...}`). Payloads are bare wire
/// objects or arrays; wrapping them as `{"data": ...}` is the transport's job.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Issues a read against `path`, with optional query parameters.
    ///
    /// Parameters are flattened with [`format_params`](crate::rest::query::format_params).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport or non-2xx failures.
    async fn read(&self, path: &str, params: Option<&Map<String, Value>>)
        -> Result<Value, HttpError>;

    /// Submits a new object (or array of objects) to `path`.
    ///
    /// `relationships` maps relationship names to arrays of wire objects and
    /// is attached to the payload object as its `relationships` member.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport or non-2xx failures.
    async fn create(
        &self,
        path: &str,
        payload: Value,
        relationships: Option<Map<String, Value>>,
    ) -> Result<Value, HttpError>;

    /// Submits changes for an existing object (or array of objects).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport or non-2xx failures.
    async fn update(&self, path: &str, payload: Value) -> Result<Value, HttpError>;

    /// Deletes the object at `path`, or the objects listed in `payload`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport or non-2xx failures.
    async fn destroy(&self, path: &str, payload: Option<Value>) -> Result<Value, HttpError>;

    /// Fetches an absolute URL handed out by the server, e.g. `links.next`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport or non-2xx failures.
    async fn follow(&self, url: &str) -> Result<Value, HttpError>;
}
