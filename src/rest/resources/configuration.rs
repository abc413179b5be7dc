//! Configuration resource kinds.
//!
//! Configurations are the managed devices of an organization. Their type,
//! status and network interfaces are resources of their own.
//!
//! # Example
//!
//! ```rust,ignore
//! use itglue_api::rest::{Attributes, Relationships, Resource};
//! use itglue_api::rest::resources::{Configuration, ConfigurationInterface};
//! use serde_json::json;
//!
//! let interface = Resource::<ConfigurationInterface>::from_attributes(
//!     [("ip_address", json!("10.0.0.5")), ("primary", json!(true))].into_iter().collect(),
//! );
//!
//! let mut configuration = Resource::<Configuration>::from_attributes(
//!     [("name", json!("ITG-MBP15-13")), ("organization_id", json!(7))].into_iter().collect(),
//! );
//!
//! let relationships = Relationships::new().with("configuration_interfaces", &[interface]);
//! configuration.create(&client, None, Some(&relationships)).await?;
//! ```

use crate::rest::ResourceKind;

/// A managed device (`configurations`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Configuration;

impl ResourceKind for Configuration {
    fn type_name(&self) -> &'static str {
        "configurations"
    }
}

/// The category of a configuration, e.g. "Server" (`configuration_types`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConfigurationType;

impl ResourceKind for ConfigurationType {
    fn type_name(&self) -> &'static str {
        "configuration_types"
    }
}

/// The lifecycle status of a configuration (`configuration_statuses`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConfigurationStatus;

impl ResourceKind for ConfigurationStatus {
    fn type_name(&self) -> &'static str {
        "configuration_statuses"
    }
}

/// A network interface of a configuration (`configuration_interfaces`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConfigurationInterface;

impl ResourceKind for ConfigurationInterface {
    fn type_name(&self) -> &'static str {
        "configuration_interfaces"
    }
}
