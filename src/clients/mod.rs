//! HTTP client types for IT Glue API communication.
//!
//! This module provides the transport tier: authenticated requests to the
//! IT Glue API, response status checking, and the [`Transport`] contract the
//! resource layer consumes.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PATCH, DELETE)
//! - [`DataType`]: Content types for request bodies
//! - [`Transport`]: The read/create/update/destroy/follow contract
//! - [`rest::RestClient`]: The JSON:API [`Transport`] over HTTP
//!
//! # Example
//!
//! ```rust,ignore
//! use itglue_api::{ItGlueConfig, ApiKey, ApiUrl};
//! use itglue_api::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let config = ItGlueConfig::builder()
//!     .api_key(ApiKey::new("key").unwrap())
//!     .api_url(ApiUrl::new("https://api.itglue.com").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/organizations")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Failures
//!
//! Non-2xx responses become [`HttpError::Response`] carrying the status code
//! and raw body. Nothing is retried.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;
mod transport;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use transport::Transport;

pub use rest::RestClient;
