//! Resource infrastructure for the IT Glue API.
//!
//! This module turns typed resources into JSON:API requests and back:
//!
//! - **[`Resource<K>`]**: an id plus ordered [`Attributes`], with all CRUD,
//!   lookup and bulk operations
//! - **[`ResourceKind`]**: the capability naming a resource type; the kinds
//!   IT Glue offers live in [`resources`]
//! - **Path building**: top-level and parent-nested URL paths
//! - **[`payload`]**: encoding and decoding of wire objects
//! - **[`query`]**: flattening of filter parameters into query strings
//! - **[`ResourceError`]**: semantic error types for resource operations
//!
//! # Example
//!
//! ```rust,ignore
//! use itglue_api::RestClient;
//! use itglue_api::rest::{Attributes, Resource, ResourceError};
//! use itglue_api::rest::resources::Configuration;
//! use serde_json::json;
//!
//! let client = RestClient::new(&config)?;
//!
//! let filters: Attributes = [("serial_number", json!("C02XXXX"))].into_iter().collect();
//! match Resource::<Configuration>::find_by(&client, None, &filters).await? {
//!     Some(configuration) => println!("Found {:?}", configuration.id()),
//!     None => println!("No match"),
//! }
//!
//! let mut configuration = Resource::<Configuration>::with_id("42");
//! configuration.set_attr("name", "renamed");
//! configuration.update(&client, None).await?;
//! ```

mod attributes;
mod errors;
mod kind;
mod path;
pub mod payload;
pub mod query;
mod resource;

pub mod resources;

// Public exports
pub use attributes::Attributes;
pub use errors::ResourceError;
pub use kind::ResourceKind;
pub use path::{build_path, normalize_segment, ResourceOperation};
pub use resource::{ParentRef, Relationships, Resource};
