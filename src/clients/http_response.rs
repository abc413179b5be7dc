//! HTTP response type for the IT Glue API client.

use std::collections::HashMap;

/// An HTTP response from the IT Glue API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased names (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body. Empty bodies are represented as `{}`.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Consumes the response and returns its body.
    #[must_use]
    pub fn into_body(self) -> serde_json::Value {
        self.body
    }
}
