//! Flexible asset resource kinds.
//!
//! Flexible assets are records with user-defined fields ("traits") described
//! by a [`FlexibleAssetType`] and its [`FlexibleAssetField`]s. Traits are kept
//! under the `traits` attribute.
//!
//! # Tag Fields
//!
//! A trait holding `{"values": [...]}` is a tag field, a reference to other
//! records. The API accepts tag fields as plain id lists, so [`FlexibleAsset`]
//! rewrites them on the way out:
//!
//! ```rust
//! use itglue_api::rest::Resource;
//! use itglue_api::rest::resources::FlexibleAsset;
//! use serde_json::json;
//!
//! let mut asset = Resource::<FlexibleAsset>::new();
//! asset.set_attr("flexible_asset_type_id", 12);
//! asset.set_attr("traits", json!({
//!     "name": "Backup policy",
//!     "servers": {"values": [{"id": 1, "name": "a"}, {"id": null}, {"id": 3}]}
//! }));
//!
//! let payload = asset.payload();
//! assert_eq!(payload["attributes"]["flexible_asset_type_id"], json!("12"));
//! assert_eq!(payload["attributes"]["traits"]["servers"], json!(["1", "3"]));
//! assert_eq!(payload["attributes"]["traits"]["name"], json!("Backup policy"));
//! ```

use serde_json::{Map, Value};

use crate::rest::payload::prepare_tag_traits;
use crate::rest::ResourceKind;

/// A flexible asset (`flexible_assets`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlexibleAsset;

impl ResourceKind for FlexibleAsset {
    fn type_name(&self) -> &'static str {
        "flexible_assets"
    }

    fn prepare_payload(&self, object: &mut Map<String, Value>) {
        let Some(Value::Object(attributes)) = object.get_mut("attributes") else {
            return;
        };
        if let Some(Value::Object(traits)) = attributes.get_mut("traits") {
            *traits = prepare_tag_traits(traits);
        }
    }
}

/// The schema of a family of flexible assets (`flexible_asset_types`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlexibleAssetType;

impl ResourceKind for FlexibleAssetType {
    fn type_name(&self) -> &'static str {
        "flexible_asset_types"
    }
}

/// One field of a flexible asset type (`flexible_asset_fields`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlexibleAssetField;

impl ResourceKind for FlexibleAssetField {
    fn type_name(&self) -> &'static str {
        "flexible_asset_fields"
    }
}
