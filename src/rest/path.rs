//! Path building for IT Glue resources.
//!
//! Resources live either at the top level (`/configurations/42`) or nested
//! under a parent through a `relationships` segment
//! (`/organizations/7/relationships/configurations`).
//!
//! # Example
//!
//! ```rust
//! use itglue_api::rest::build_path;
//!
//! assert_eq!(build_path("configurations", None, None, None), "/configurations");
//! assert_eq!(build_path("configurations", None, None, Some("42")), "/configurations/42");
//! assert_eq!(
//!     build_path("configurations", Some("organizations"), Some("7"), None),
//!     "/organizations/7/relationships/configurations"
//! );
//! ```

use crate::clients::HttpMethod;

/// Operations that can be performed on a resource.
///
/// Used to label log lines and [`ResourceError::MissingId`](crate::rest::ResourceError::MissingId).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// List a collection (GET /resources).
    Get,
    /// List a filtered collection (GET /resources?filter[...]).
    Filter,
    /// Find a single resource by id (GET /resources/{id}).
    Find,
    /// Create a new resource (POST /resources).
    Create,
    /// Update an existing resource (PATCH /resources/{id}).
    Update,
    /// Delete a resource (DELETE /resources/{id}).
    Delete,
    /// Create many resources in one request (POST /resources).
    BulkCreate,
    /// Update many resources in one request (PATCH /resources).
    BulkUpdate,
    /// Delete many resources in one request (DELETE /resources).
    BulkDelete,
}

impl ResourceOperation {
    /// Returns the HTTP method for this operation.
    #[must_use]
    pub const fn http_method(&self) -> HttpMethod {
        match self {
            Self::Get | Self::Filter | Self::Find => HttpMethod::Get,
            Self::Create | Self::BulkCreate => HttpMethod::Post,
            Self::Update | Self::BulkUpdate => HttpMethod::Patch,
            Self::Delete | Self::BulkDelete => HttpMethod::Delete,
        }
    }

    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Filter => "filter",
            Self::Find => "find",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::BulkCreate => "bulk_create",
            Self::BulkUpdate => "bulk_update",
            Self::BulkDelete => "bulk_delete",
        }
    }
}

/// Replaces every hyphen in a path token with an underscore.
///
/// Nothing else is escaped or validated.
#[must_use]
pub fn normalize_segment(token: &str) -> String {
    token.replace('-', "_")
}

/// Builds the URL path for a resource.
///
/// The parent prefix is only added when both `parent_type` and `parent_id`
/// are present. Empty strings count as absent. The resource type and parent
/// tokens are hyphen-normalized; the resource id is appended as given.
#[must_use]
pub fn build_path(
    resource_type: &str,
    parent_type: Option<&str>,
    parent_id: Option<&str>,
    id: Option<&str>,
) -> String {
    fn present(value: Option<&str>) -> Option<&str> {
        value.filter(|v| !v.is_empty())
    }

    let mut path = String::new();

    if let (Some(parent_type), Some(parent_id)) = (present(parent_type), present(parent_id)) {
        path.push('/');
        path.push_str(&normalize_segment(parent_type));
        path.push('/');
        path.push_str(&normalize_segment(parent_id));
        path.push_str("/relationships");
    }

    path.push('/');
    path.push_str(&normalize_segment(resource_type));

    if let Some(id) = present(id) {
        path.push('/');
        path.push_str(id);
    }

    path
}
