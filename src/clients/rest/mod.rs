//! REST transport for the IT Glue JSON:API.
//!
//! [`RestClient`] is the [`Transport`](crate::clients::Transport) the
//! resource layer talks to in production. It sits on top of
//! [`HttpClient`](crate::clients::HttpClient) and adds the JSON:API
//! conventions:
//!
//! - Request bodies are wrapped as `{"data": ...}`
//! - Relationship bundles are attached to the submitted object
//! - Read parameters are flattened into `filter[name]=value` query strings
//! - Pagination links (absolute URLs) are fetched verbatim
//!
//! # Example
//!
//! ```rust,ignore
//! use itglue_api::{ItGlueConfig, ApiKey, ApiUrl, RestClient};
//! use itglue_api::clients::Transport;
//! use serde_json::json;
//!
//! let config = ItGlueConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .api_url(ApiUrl::new("https://api.itglue.com").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = RestClient::new(&config)?;
//!
//! let params = json!({"filter": {"name": "Acme"}});
//! let document = client.read("/organizations", params.as_object()).await?;
//! println!("Organizations: {}", document["data"]);
//! ```

mod client;

pub use client::RestClient;
