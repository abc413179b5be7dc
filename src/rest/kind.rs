//! The capability every resource type provides.

use std::fmt::Debug;

use serde_json::{Map, Value};

/// A kind of IT Glue resource.
///
/// A kind is a small value naming the JSON:API type of a resource. Most kinds
/// are unit structs that only implement [`type_name`](Self::type_name); a kind
/// may also adjust the wire object it is sent as.
///
/// # Example
///
/// ```rust
/// use itglue_api::rest::{Resource, ResourceKind};
///
/// #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// struct Contact;
///
/// impl ResourceKind for Contact {
///     fn type_name(&self) -> &'static str {
///         "contacts"
///     }
/// }
///
/// let contact = Resource::<Contact>::new();
/// assert_eq!(contact.type_name(), "contacts");
/// ```
pub trait ResourceKind: Debug + Default + Clone + PartialEq + Send + Sync {
    /// The JSON:API resource type, e.g. `"configurations"`.
    fn type_name(&self) -> &'static str;

    /// Adjusts an encoded wire object before it is sent.
    ///
    /// Applied to single and bulk payloads alike. The default leaves the
    /// object untouched.
    fn prepare_payload(&self, _object: &mut Map<String, Value>) {}
}
