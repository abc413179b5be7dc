//! The resource kinds IT Glue exposes.
//!
//! Each kind is a unit struct implementing [`ResourceKind`](crate::rest::ResourceKind);
//! pair it with [`Resource`](crate::rest::Resource) to get the operations.
//!
//! | Kind | Type name |
//! |---|---|
//! | [`Organization`] | `organizations` |
//! | [`Location`] | `locations` |
//! | [`Configuration`] | `configurations` |
//! | [`ConfigurationType`] | `configuration_types` |
//! | [`ConfigurationStatus`] | `configuration_statuses` |
//! | [`ConfigurationInterface`] | `configuration_interfaces` |
//! | [`FlexibleAsset`] | `flexible_assets` |
//! | [`FlexibleAssetType`] | `flexible_asset_types` |
//! | [`FlexibleAssetField`] | `flexible_asset_fields` |
//!
//! # Example
//!
//! ```rust,ignore
//! use itglue_api::rest::Resource;
//! use itglue_api::rest::resources::{FlexibleAssetField, FlexibleAssetType};
//!
//! let asset_type = Resource::<FlexibleAssetType>::find(&client, "12", None).await?;
//! let fields =
//!     Resource::<FlexibleAssetField>::get(&client, Some(asset_type.as_parent())).await?;
//! ```

mod configuration;
mod flexible_asset;
mod organization;

pub use configuration::{
    Configuration, ConfigurationInterface, ConfigurationStatus, ConfigurationType,
};
pub use flexible_asset::{FlexibleAsset, FlexibleAssetField, FlexibleAssetType};
pub use organization::{Location, Organization};
