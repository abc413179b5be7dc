//! Resource-specific error types for IT Glue resource operations.
//!
//! Every precondition a resource operation checks, and every way a response
//! envelope can fail to decode, has its own variant. Transport failures pass
//! through as [`ResourceError::Http`], except for lookups by id, which are
//! reported as [`ResourceError::NotFound`] with the transport error as source.
//!
//! # Example
//!
//! ```rust,ignore
//! use itglue_api::rest::{Resource, ResourceError};
//! use itglue_api::rest::resources::Organization;
//!
//! match Resource::<Organization>::find(&client, "123", None).await {
//!     Ok(organization) => println!("Found: {:?}", organization.get_attr("name")),
//!     Err(ResourceError::NotFound { resource, id, .. }) => {
//!         println!("{} with id {} not found", resource, id);
//!     }
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

use thiserror::Error;

use crate::clients::HttpError;

/// Error type for resource operations.
///
/// # Example
///
/// ```rust
/// use itglue_api::rest::ResourceError;
///
/// let error = ResourceError::MissingId {
///     resource: "configurations",
///     operation: "update",
/// };
/// assert!(error.to_string().contains("configurations"));
/// assert!(error.to_string().contains("update"));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The operation needs a persisted resource but the instance has no id.
    #[error("Cannot {operation} {resource} without an id")]
    MissingId {
        /// The resource type name.
        resource: &'static str,
        /// The operation that was attempted (e.g., "update", "delete").
        operation: &'static str,
    },

    /// `create` was called on an instance that already has an id.
    #[error("{resource} with id {id} already exists")]
    AlreadyExists {
        /// The resource type name.
        resource: &'static str,
        /// The id already carried by the instance.
        id: String,
    },

    /// A filter or lookup was requested without any usable attribute.
    #[error("No filter attributes provided for {resource}")]
    NoFilters {
        /// The resource type name.
        resource: &'static str,
    },

    /// A response object lacks one of the `type`, `id`, `attributes` keys.
    #[error("Malformed {resource} response object, found keys {found:?}")]
    MalformedEnvelope {
        /// The resource type name that was expected.
        resource: &'static str,
        /// The keys the object actually carried.
        found: Vec<String>,
    },

    /// A response object carries a different resource type.
    #[error("Expected response type {expected}, received {received}")]
    TypeMismatch {
        /// The expected resource type name.
        expected: &'static str,
        /// The (hyphen-normalized) type found in the response.
        received: String,
    },

    /// A parent reference lacks a type or an id.
    #[error("Parent reference is missing its {missing}")]
    InvalidParent {
        /// Which part is missing ("type" or "id").
        missing: &'static str,
    },

    /// Looking up a resource by id failed at the transport tier.
    #[error("{resource} with id {id} not found: {source}")]
    NotFound {
        /// The resource type name.
        resource: &'static str,
        /// The id that was requested.
        id: String,
        /// The underlying transport failure.
        #[source]
        source: HttpError,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    /// Returns the HTTP status code if the error came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { source, .. } | Self::Http(source) => source.status(),
            _ => None,
        }
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
