//! Organization and location resource kinds.
//!
//! Organizations are the top-level tenants in IT Glue; most other resources,
//! locations included, can be listed under one through
//! `/organizations/{id}/relationships/...`.
//!
//! # Example
//!
//! ```rust,ignore
//! use itglue_api::rest::Resource;
//! use itglue_api::rest::resources::{Location, Organization};
//!
//! let organization = Resource::<Organization>::find(&client, "7", None).await?;
//! let locations = Resource::<Location>::get(&client, Some(organization.as_parent())).await?;
//! ```

use crate::rest::ResourceKind;

/// An IT Glue organization (`organizations`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Organization;

impl ResourceKind for Organization {
    fn type_name(&self) -> &'static str {
        "organizations"
    }
}

/// A physical location belonging to an organization (`locations`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location;

impl ResourceKind for Location {
    fn type_name(&self) -> &'static str {
        "locations"
    }
}
