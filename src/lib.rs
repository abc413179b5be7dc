//! # IT Glue API Rust Client
//!
//! A Rust client for the IT Glue JSON:API, mapping typed resources onto
//! REST calls.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ItGlueConfig`] and [`ItGlueConfigBuilder`]
//! - Validated newtypes for the API key and base URL
//! - An async HTTP transport ([`RestClient`]) speaking `application/vnd.api+json`
//! - A generic [`rest::Resource`] with create, update, delete, find, filter,
//!   first-or-create and bulk operations for every [`rest::ResourceKind`]
//! - Nested requests under a parent (`/organizations/7/relationships/configurations`)
//! - Transparent pagination of collection reads
//!
//! ## Quick Start
//!
//! ```rust
//! use itglue_api::{ItGlueConfig, ApiKey, ApiUrl};
//!
//! let config = ItGlueConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .api_url(ApiUrl::new("https://api.itglue.com").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! Or from `ITGLUE_API_KEY` and `ITGLUE_API_URL`:
//!
//! ```rust,ignore
//! use itglue_api::ItGlueConfigBuilder;
//!
//! let config = ItGlueConfigBuilder::from_env()?.build()?;
//! ```
//!
//! ## Working With Resources
//!
//! ```rust,ignore
//! use itglue_api::{ItGlueConfig, RestClient};
//! use itglue_api::rest::{Attributes, Resource};
//! use itglue_api::rest::resources::{Configuration, Organization};
//! use serde_json::json;
//!
//! let client = RestClient::new(&config)?;
//!
//! // Fetch an organization and everything configured under it
//! let organization = Resource::<Organization>::find(&client, "7", None).await?;
//! let configurations =
//!     Resource::<Configuration>::get(&client, Some(organization.as_parent())).await?;
//!
//! // Filter, then create when nothing matches
//! let filters: Attributes = [("name", json!("ITG-MBP15-13"))].into_iter().collect();
//! let configuration = Resource::<Configuration>::first_or_create(
//!     &client,
//!     Some(organization.as_parent()),
//!     filters,
//! )
//! .await?;
//! ```
//!
//! ## Error Handling
//!
//! Failures are split in two tiers:
//! - [`HttpError`] for the transport (non-2xx responses, network, bad bodies)
//! - [`rest::ResourceError`] for resource preconditions and response decoding
//!
//! Nothing is retried.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **Open attributes**: Resources accept any attribute name the API sends

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiKey, ApiUrl, ItGlueConfig, ItGlueConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, RestClient, Transport,
};
