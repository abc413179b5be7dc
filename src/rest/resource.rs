//! The generic resource type and its operations.
//!
//! A [`Resource<K>`] is an id plus an ordered attribute mapping, typed by a
//! [`ResourceKind`]. Every operation builds a path, encodes the outgoing
//! payload, calls a [`Transport`] and decodes the response back into
//! resources.
//!
//! # Lifecycle
//!
//! - A resource built with [`Resource::new`] or [`Resource::from_attributes`]
//!   has no id and is unsaved
//! - [`create`](Resource::create) and [`update`](Resource::update) replace the
//!   id and attributes with what the server echoes back
//! - [`delete`](Resource::delete) leaves the local value untouched
//!
//! Preconditions (id present or absent, usable filters, complete parent
//! references) are checked before any request is issued.
//!
//! # Example
//!
//! ```rust,ignore
//! use itglue_api::rest::{Attributes, Resource};
//! use itglue_api::rest::resources::{Configuration, Organization};
//! use serde_json::json;
//!
//! let organization = Resource::<Organization>::find(&client, "7", None).await?;
//!
//! // Everything under the organization, all pages
//! let configurations =
//!     Resource::<Configuration>::get(&client, Some(organization.as_parent())).await?;
//!
//! // Look one up by attributes, creating it when missing
//! let attributes: Attributes = [("name", json!("ITG-MBP15-13"))].into_iter().collect();
//! let mut configuration = Resource::<Configuration>::first_or_create(
//!     &client,
//!     Some(organization.as_parent()),
//!     attributes,
//! )
//! .await?;
//!
//! configuration.set_attr("serial_number", "C02XXXX");
//! configuration.save(&client, None).await?;
//! ```

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::clients::Transport;
use crate::rest::path::{build_path, ResourceOperation};
use crate::rest::payload;
use crate::rest::query::is_truthy;
use crate::rest::{Attributes, ResourceError, ResourceKind};

/// A reference to the resource a request is nested under.
///
/// Both the type and the id must be present for the reference to be usable.
///
/// # Example
///
/// ```rust
/// use itglue_api::rest::ParentRef;
///
/// let parent = ParentRef::new("organizations", "7");
/// assert_eq!(parent.type_name, "organizations");
/// assert_eq!(parent.id, Some("7"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentRef<'a> {
    /// The parent's resource type.
    pub type_name: &'a str,
    /// The parent's id, if it has one.
    pub id: Option<&'a str>,
}

impl<'a> ParentRef<'a> {
    /// Creates a parent reference from a known type and id.
    #[must_use]
    pub const fn new(type_name: &'a str, id: &'a str) -> Self {
        Self {
            type_name,
            id: Some(id),
        }
    }
}

/// Resources submitted alongside a create request, grouped by relationship name.
///
/// # Example
///
/// ```rust
/// use itglue_api::rest::{Relationships, Resource};
/// use itglue_api::rest::resources::ConfigurationInterface;
/// use serde_json::json;
///
/// let mut interface = Resource::<ConfigurationInterface>::new();
/// interface.set_attr("ip_address", "10.0.0.5");
///
/// let relationships = Relationships::new().with("configuration_interfaces", &[interface]);
///
/// assert_eq!(
///     relationships.as_map()["configuration_interfaces"],
///     json!([{"type": "configuration_interfaces", "attributes": {"ip_address": "10.0.0.5"}}])
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Relationships(Map<String, Value>);

impl Relationships {
    /// Creates an empty relationship bundle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `resources` under `name`, replacing anything already there.
    #[must_use]
    pub fn with<K: ResourceKind>(
        mut self,
        name: impl Into<String>,
        resources: &[Resource<K>],
    ) -> Self {
        self.insert(name, resources);
        self
    }

    /// Adds `resources` under `name`, replacing anything already there.
    pub fn insert<K: ResourceKind>(&mut self, name: impl Into<String>, resources: &[Resource<K>]) {
        let items = resources
            .iter()
            .map(|resource| Value::Object(resource.payload()))
            .collect();
        self.0.insert(name.into(), Value::Array(items));
    }

    /// Returns `true` if no relationship has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the encoded relationships.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// A resource of kind `K`.
///
/// Two resources are equal when their kind, id and attributes are equal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resource<K: ResourceKind> {
    kind: K,
    id: Option<String>,
    attributes: Attributes,
}

impl<K: ResourceKind> Resource<K> {
    /// Creates an unsaved resource with no attributes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an unsaved resource with the given attributes.
    #[must_use]
    pub fn from_attributes(attributes: Attributes) -> Self {
        Self {
            attributes,
            ..Self::default()
        }
    }

    /// Creates a reference to an existing resource by id, without fetching it.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Returns the kind of this resource.
    #[must_use]
    pub const fn kind(&self) -> &K {
        &self.kind
    }

    /// Returns the JSON:API type of this resource.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }

    /// Returns the id, if the resource has been persisted.
    ///
    /// An empty id counts as no id.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// Returns the attributes.
    #[must_use]
    pub const fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Returns the attributes for in-place modification.
    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Returns the value of an attribute, if set.
    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Sets an attribute and returns the stored value.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &Value {
        self.attributes.set(name, value)
    }

    /// Sets several attributes at once.
    pub fn set_attributes<N, V>(
        &mut self,
        attributes: impl IntoIterator<Item = (N, V)>,
    ) -> &mut Self
    where
        N: Into<String>,
        V: Into<Value>,
    {
        self.attributes.extend(attributes);
        self
    }

    /// Returns the `created_at` timestamp sent by the server.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp("created_at")
    }

    /// Returns the `updated_at` timestamp sent by the server.
    #[must_use]
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp("updated_at")
    }

    fn timestamp(&self, name: &str) -> Option<DateTime<Utc>> {
        self.get_attr(name)
            .and_then(Value::as_str)
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|parsed| parsed.with_timezone(&Utc))
    }

    /// Renders the wire object for this resource.
    #[must_use]
    pub fn payload(&self) -> Map<String, Value> {
        let mut object = payload::encode(self.type_name(), self.id(), &self.attributes, None);
        self.kind.prepare_payload(&mut object);
        object
    }

    /// Returns a reference to this resource for scoping nested requests.
    #[must_use]
    pub fn as_parent(&self) -> ParentRef<'_> {
        ParentRef {
            type_name: self.type_name(),
            id: self.id(),
        }
    }

    /// Creates the resource when it has no id, updates it otherwise.
    ///
    /// # Errors
    ///
    /// See [`create`](Self::create) and [`update`](Self::update).
    pub async fn save<C: Transport>(
        &mut self,
        client: &C,
        parent: Option<ParentRef<'_>>,
    ) -> Result<&mut Self, ResourceError> {
        if self.id().is_some() {
            self.update(client, parent).await
        } else {
            self.create(client, parent, None).await
        }
    }

    /// Creates the resource and reloads it from the response.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::AlreadyExists`] if the resource has an id,
    /// [`ResourceError::InvalidParent`] for an incomplete parent, and decode
    /// or transport errors otherwise.
    pub async fn create<C: Transport>(
        &mut self,
        client: &C,
        parent: Option<ParentRef<'_>>,
        relationships: Option<&Relationships>,
    ) -> Result<&mut Self, ResourceError> {
        if let Some(id) = self.id() {
            return Err(ResourceError::AlreadyExists {
                resource: self.type_name(),
                id: id.to_string(),
            });
        }

        let path = Self::resource_path(parent, None)?;
        Self::log(ResourceOperation::Create, &path);

        let relationships = relationships
            .filter(|r| !r.is_empty())
            .map(|r| r.as_map().clone());
        let document = client
            .create(&path, Value::Object(self.payload()), relationships)
            .await?;

        self.reload(&document)
    }

    /// Updates the resource and reloads it from the response.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the resource has no id,
    /// [`ResourceError::InvalidParent`] for an incomplete parent, and decode
    /// or transport errors otherwise.
    pub async fn update<C: Transport>(
        &mut self,
        client: &C,
        parent: Option<ParentRef<'_>>,
    ) -> Result<&mut Self, ResourceError> {
        let id = self.require_id(ResourceOperation::Update)?;

        let path = Self::resource_path(parent, Some(id))?;
        Self::log(ResourceOperation::Update, &path);

        let document = client.update(&path, Value::Object(self.payload())).await?;

        self.reload(&document)
    }

    /// Deletes the resource. The local value is left as it is.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the resource has no id,
    /// [`ResourceError::InvalidParent`] for an incomplete parent, and
    /// transport errors otherwise.
    pub async fn delete<C: Transport>(
        &self,
        client: &C,
        parent: Option<ParentRef<'_>>,
    ) -> Result<(), ResourceError> {
        let id = self.require_id(ResourceOperation::Delete)?;

        let path = Self::resource_path(parent, Some(id))?;
        Self::log(ResourceOperation::Delete, &path);

        client.destroy(&path, None).await?;
        Ok(())
    }

    /// Lists every resource of this kind, following pagination.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParent`] for an incomplete parent, and
    /// decode or transport errors otherwise.
    pub async fn get<C: Transport>(
        client: &C,
        parent: Option<ParentRef<'_>>,
    ) -> Result<Vec<Self>, ResourceError> {
        let path = Self::resource_path(parent, None)?;
        Self::log(ResourceOperation::Get, &path);

        let document = client.read(&path, None).await?;
        Self::load_collection(client, &document).await
    }

    /// Lists the resources matching `filters`, following pagination.
    ///
    /// Filters are sent as `filter[name]=value`; falsy values are left out.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NoFilters`] if `filters` is empty or every
    /// value is falsy, [`ResourceError::InvalidParent`] for an incomplete
    /// parent, and decode or transport errors otherwise.
    pub async fn filter<C: Transport>(
        client: &C,
        parent: Option<ParentRef<'_>>,
        filters: &Attributes,
    ) -> Result<Vec<Self>, ResourceError> {
        if !filters.iter().any(|(_, value)| is_truthy(value)) {
            return Err(ResourceError::NoFilters {
                resource: K::default().type_name(),
            });
        }

        let path = Self::resource_path(parent, None)?;
        Self::log(ResourceOperation::Filter, &path);

        let mut params = Map::new();
        params.insert("filter".to_string(), Value::Object(filters.as_map().clone()));

        let document = client.read(&path, Some(&params)).await?;
        Self::load_collection(client, &document).await
    }

    /// Fetches one resource by id.
    ///
    /// # Errors
    ///
    /// Any transport failure, a 404 included, is reported as
    /// [`ResourceError::NotFound`]. Returns [`ResourceError::InvalidParent`]
    /// for an incomplete parent and decode errors for unexpected responses.
    pub async fn find<C: Transport>(
        client: &C,
        id: &str,
        parent: Option<ParentRef<'_>>,
    ) -> Result<Self, ResourceError> {
        if id.is_empty() {
            return Err(ResourceError::MissingId {
                resource: K::default().type_name(),
                operation: ResourceOperation::Find.as_str(),
            });
        }

        let path = Self::resource_path(parent, Some(id))?;
        Self::log(ResourceOperation::Find, &path);

        let document = client
            .read(&path, None)
            .await
            .map_err(|source| ResourceError::NotFound {
                resource: K::default().type_name(),
                id: id.to_string(),
                source,
            })?;

        Self::load(&document["data"])
    }

    /// Returns the first resource matching `attributes`, if any.
    ///
    /// # Errors
    ///
    /// Same as [`filter`](Self::filter).
    pub async fn find_by<C: Transport>(
        client: &C,
        parent: Option<ParentRef<'_>>,
        attributes: &Attributes,
    ) -> Result<Option<Self>, ResourceError> {
        let matches = Self::filter(client, parent, attributes).await?;
        Ok(matches.into_iter().next())
    }

    /// Returns the first resource matching `attributes`, creating one with
    /// those attributes (under the same parent) when none matches.
    ///
    /// # Errors
    ///
    /// Same as [`find_by`](Self::find_by) and [`create`](Self::create).
    pub async fn first_or_create<C: Transport>(
        client: &C,
        parent: Option<ParentRef<'_>>,
        attributes: Attributes,
    ) -> Result<Self, ResourceError> {
        if let Some(existing) = Self::find_by(client, parent, &attributes).await? {
            return Ok(existing);
        }

        let mut resource = Self::from_attributes(attributes);
        resource.create(client, parent, None).await?;
        Ok(resource)
    }

    /// Returns the first resource matching `attributes`, or an unsaved one
    /// with those attributes when none matches.
    ///
    /// # Errors
    ///
    /// Same as [`find_by`](Self::find_by).
    pub async fn first_or_initialize<C: Transport>(
        client: &C,
        parent: Option<ParentRef<'_>>,
        attributes: Attributes,
    ) -> Result<Self, ResourceError> {
        match Self::find_by(client, parent, &attributes).await? {
            Some(existing) => Ok(existing),
            None => Ok(Self::from_attributes(attributes)),
        }
    }

    /// Creates several resources in one request.
    ///
    /// Returns the created resources in response order. An empty slice
    /// returns an empty list without a request.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::AlreadyExists`] if any resource has an id.
    pub async fn bulk_create<C: Transport>(
        client: &C,
        resources: &[Self],
        parent: Option<ParentRef<'_>>,
    ) -> Result<Vec<Self>, ResourceError> {
        let mut objects = Vec::with_capacity(resources.len());
        for resource in resources {
            if let Some(id) = resource.id() {
                return Err(ResourceError::AlreadyExists {
                    resource: resource.type_name(),
                    id: id.to_string(),
                });
            }
            objects.push(Value::Object(resource.payload()));
        }
        if objects.is_empty() {
            return Ok(Vec::new());
        }

        let path = Self::resource_path(parent, None)?;
        Self::log(ResourceOperation::BulkCreate, &path);

        let document = client.create(&path, Value::Array(objects), None).await?;
        Self::load_items(&document)
    }

    /// Updates several resources in one request.
    ///
    /// Each resource is sent with its id inside `attributes`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if any resource has no id.
    pub async fn bulk_update<C: Transport>(
        client: &C,
        resources: &[Self],
        parent: Option<ParentRef<'_>>,
    ) -> Result<Vec<Self>, ResourceError> {
        let mut objects = Vec::with_capacity(resources.len());
        for resource in resources {
            let id = resource.require_id(ResourceOperation::BulkUpdate)?;
            let mut object =
                payload::encode_bulk_update(resource.type_name(), id, &resource.attributes);
            resource.kind.prepare_payload(&mut object);
            objects.push(Value::Object(object));
        }
        if objects.is_empty() {
            return Ok(Vec::new());
        }

        let path = Self::resource_path(parent, None)?;
        Self::log(ResourceOperation::BulkUpdate, &path);

        let document = client.update(&path, Value::Array(objects)).await?;
        Self::load_items(&document)
    }

    /// Deletes several resources in one request.
    ///
    /// Returns whatever resources the server echoes back.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if any resource has no id.
    pub async fn bulk_delete<C: Transport>(
        client: &C,
        resources: &[Self],
        parent: Option<ParentRef<'_>>,
    ) -> Result<Vec<Self>, ResourceError> {
        let mut objects = Vec::with_capacity(resources.len());
        for resource in resources {
            let id = resource.require_id(ResourceOperation::BulkDelete)?;
            objects.push(Value::Object(payload::encode_bulk_delete(
                resource.type_name(),
                id,
            )));
        }
        if objects.is_empty() {
            return Ok(Vec::new());
        }

        let path = Self::resource_path(parent, None)?;
        Self::log(ResourceOperation::BulkDelete, &path);

        let document = client.destroy(&path, Some(Value::Array(objects))).await?;
        Self::load_items(&document)
    }

    fn require_id(&self, operation: ResourceOperation) -> Result<&str, ResourceError> {
        self.id().ok_or(ResourceError::MissingId {
            resource: self.type_name(),
            operation: operation.as_str(),
        })
    }

    fn resource_path(
        parent: Option<ParentRef<'_>>,
        id: Option<&str>,
    ) -> Result<String, ResourceError> {
        let resource_type = K::default().type_name();

        let Some(parent) = parent else {
            return Ok(build_path(resource_type, None, None, id));
        };
        if parent.type_name.is_empty() {
            return Err(ResourceError::InvalidParent { missing: "type" });
        }
        let parent_id = parent
            .id
            .filter(|parent_id| !parent_id.is_empty())
            .ok_or(ResourceError::InvalidParent { missing: "id" })?;

        Ok(build_path(
            resource_type,
            Some(parent.type_name),
            Some(parent_id),
            id,
        ))
    }

    fn log(operation: ResourceOperation, path: &str) {
        tracing::debug!(
            "{} {} ({} {})",
            operation.as_str(),
            K::default().type_name(),
            operation.http_method(),
            path
        );
    }

    fn reload(&mut self, document: &Value) -> Result<&mut Self, ResourceError> {
        let (id, attributes) = payload::decode_object(self.type_name(), &document["data"])?;
        self.id = id;
        self.attributes = attributes;
        Ok(self)
    }

    fn load(object: &Value) -> Result<Self, ResourceError> {
        let (id, attributes) = payload::decode_object(K::default().type_name(), object)?;
        Ok(Self {
            kind: K::default(),
            id,
            attributes,
        })
    }

    fn load_items(document: &Value) -> Result<Vec<Self>, ResourceError> {
        payload::data_items(document).iter().map(Self::load).collect()
    }

    async fn load_collection<C: Transport>(
        client: &C,
        document: &Value,
    ) -> Result<Vec<Self>, ResourceError> {
        let mut items = payload::data_items(document);

        if document["data"].is_array() {
            let mut next = payload::next_page(document).map(str::to_string);
            while let Some(url) = next {
                tracing::debug!("Following next page of {}: {}", K::default().type_name(), url);
                let page = client.follow(&url).await?;
                items.extend(payload::data_items(&page));
                next = payload::next_page(&page).map(str::to_string);
            }
        }

        items.iter().map(Self::load).collect()
    }
}
