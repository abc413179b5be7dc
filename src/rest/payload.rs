//! Conversion between resource attributes and JSON:API wire objects.
//!
//! Outbound, a resource becomes `{"type", "id"?, "attributes", "relationships"?}`
//! with every `*_id` attribute stringified. Inbound, an object is checked for
//! its `type`, `id` and `attributes` keys and its attribute keys are rewritten
//! from `kebab-case` to `snake_case`.
//!
//! # Example
//!
//! ```rust
//! use itglue_api::rest::payload::encode;
//! use itglue_api::rest::Attributes;
//! use serde_json::{json, Value};
//!
//! let attributes: Attributes = [("location_id", json!(42)), ("name", json!("x"))]
//!     .into_iter()
//!     .collect();
//!
//! let object = encode("configurations", Some("7"), &attributes, None);
//! assert_eq!(
//!     Value::Object(object),
//!     json!({
//!         "type": "configurations",
//!         "attributes": {"location_id": "42", "name": "x"},
//!         "id": "7"
//!     })
//! );
//! ```

use serde_json::{Map, Value};

use crate::rest::path::normalize_segment;
use crate::rest::query::is_truthy;
use crate::rest::{Attributes, ResourceError};

/// Renders an id-like value as a string. Strings are kept without quotes.
#[must_use]
pub fn id_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Returns a copy of `object` with every non-null `*_id` value stringified.
///
/// With `recurse`, nested objects are rewritten as well.
#[must_use]
pub fn normalize_ids(object: &Map<String, Value>, recurse: bool) -> Map<String, Value> {
    object
        .iter()
        .map(|(key, value)| {
            let value = match value {
                Value::Null => Value::Null,
                v if key.ends_with("_id") => Value::String(id_to_string(v)),
                Value::Object(nested) if recurse => Value::Object(normalize_ids(nested, true)),
                v => v.clone(),
            };
            (key.clone(), value)
        })
        .collect()
}

/// Rewrites tag-like traits into lists of id strings.
///
/// A trait whose value is an object holding a `values` array is a tag field:
/// it becomes the ids of its values, skipping entries without an id. Every
/// other trait is copied unchanged.
#[must_use]
pub fn prepare_tag_traits(traits: &Map<String, Value>) -> Map<String, Value> {
    traits
        .iter()
        .map(|(key, value)| {
            let value = match value.get("values").and_then(Value::as_array) {
                Some(tags) if value.is_object() => Value::Array(
                    tags.iter()
                        .filter_map(|tag| tag.get("id"))
                        .filter(|id| !id.is_null())
                        .map(|id| Value::String(id_to_string(id)))
                        .collect(),
                ),
                _ => value.clone(),
            };
            (key.clone(), value)
        })
        .collect()
}

/// Encodes a resource as a wire object.
///
/// `relationships`, when given, maps relationship names to arrays of already
/// encoded wire objects.
#[must_use]
pub fn encode(
    resource_type: &str,
    id: Option<&str>,
    attributes: &Attributes,
    relationships: Option<&Map<String, Value>>,
) -> Map<String, Value> {
    let mut object = Map::new();
    object.insert("type".to_string(), Value::from(resource_type));
    object.insert(
        "attributes".to_string(),
        Value::Object(normalize_ids(attributes.as_map(), false)),
    );
    if let Some(id) = id {
        object.insert("id".to_string(), Value::from(id));
    }
    if let Some(relationships) = relationships {
        object.insert(
            "relationships".to_string(),
            Value::Object(relationships.clone()),
        );
    }
    object
}

/// Encodes a resource for a bulk update: the id moves into `attributes.id`.
#[must_use]
pub fn encode_bulk_update(
    resource_type: &str,
    id: &str,
    attributes: &Attributes,
) -> Map<String, Value> {
    let mut object = encode(resource_type, None, attributes, None);
    if let Some(Value::Object(attributes)) = object.get_mut("attributes") {
        attributes.insert("id".to_string(), Value::from(id));
    }
    object
}

/// Encodes a resource for a bulk delete: `{"type", "attributes": {"id"}}`.
#[must_use]
pub fn encode_bulk_delete(resource_type: &str, id: &str) -> Map<String, Value> {
    let mut attributes = Map::new();
    attributes.insert("id".to_string(), Value::from(id));

    let mut object = Map::new();
    object.insert("type".to_string(), Value::from(resource_type));
    object.insert("attributes".to_string(), Value::Object(attributes));
    object
}

/// Decodes one wire object into its id and attributes.
///
/// # Errors
///
/// Returns [`ResourceError::MalformedEnvelope`] if `object` is not an object
/// carrying `type`, `id` and `attributes`, and [`ResourceError::TypeMismatch`]
/// if its hyphen-normalized type differs from `expected_type`.
pub fn decode_object(
    expected_type: &'static str,
    object: &Value,
) -> Result<(Option<String>, Attributes), ResourceError> {
    let malformed = || ResourceError::MalformedEnvelope {
        resource: expected_type,
        found: object
            .as_object()
            .map(|o| o.keys().cloned().collect())
            .unwrap_or_default(),
    };

    let fields = object.as_object().ok_or_else(malformed)?;
    let (Some(data_type), Some(id), Some(attributes)) = (
        fields.get("type"),
        fields.get("id"),
        fields.get("attributes"),
    ) else {
        return Err(malformed());
    };

    let received = normalize_segment(&id_to_string(data_type));
    if received != expected_type {
        return Err(ResourceError::TypeMismatch {
            expected: expected_type,
            received,
        });
    }

    let attributes = match attributes {
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| (normalize_segment(key), value.clone()))
            .collect(),
        Value::Null => Attributes::new(),
        _ => return Err(malformed()),
    };

    let id = match id {
        Value::Null => None,
        other => Some(id_to_string(other)),
    };

    Ok((id, attributes))
}

/// Returns the wire objects held in a response document's `data` member.
///
/// A single object is returned as a one-element list; a missing or null
/// `data` yields an empty list.
#[must_use]
pub fn data_items(document: &Value) -> Vec<Value> {
    match document.get("data") {
        Some(Value::Array(items)) => items.clone(),
        Some(Value::Null) | None => Vec::new(),
        Some(item) => vec![item.clone()],
    }
}

/// Returns the next page URL when `meta.next-page` is truthy and
/// `links.next` is present.
#[must_use]
pub fn next_page(document: &Value) -> Option<&str> {
    let more = document
        .get("meta")
        .and_then(|meta| meta.get("next-page"))
        .is_some_and(is_truthy);
    if !more {
        return None;
    }
    document
        .get("links")
        .and_then(|links| links.get("next"))
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(value: Value) -> Attributes {
        value.as_object().cloned().map(Attributes::from).unwrap()
    }

    #[test]
    fn test_normalize_ids_stringifies_id_keys_only() {
        let object = json!({"location_id": 42, "name": "x", "count": 3, "psa_id": null});
        let normalized = normalize_ids(object.as_object().unwrap(), false);

        assert_eq!(
            Value::Object(normalized),
            json!({"location_id": "42", "name": "x", "count": 3, "psa_id": null})
        );
    }

    #[test]
    fn test_normalize_ids_recursion_is_opt_in() {
        let object = json!({"nested": {"organization_id": 7}});

        let flat = normalize_ids(object.as_object().unwrap(), false);
        assert_eq!(flat["nested"], json!({"organization_id": 7}));

        let deep = normalize_ids(object.as_object().unwrap(), true);
        assert_eq!(deep["nested"], json!({"organization_id": "7"}));
    }

    #[test]
    fn test_prepare_tag_traits() {
        let traits = json!({
            "tag_field": {"values": [{"id": 1}, {"id": null}, {"id": 3}, {"name": "no id"}]},
            "text_field": "plain",
            "number_field": 5,
            "shaped_field": {"label": "kept"}
        });

        let prepared = prepare_tag_traits(traits.as_object().unwrap());

        assert_eq!(
            Value::Object(prepared),
            json!({
                "tag_field": ["1", "3"],
                "text_field": "plain",
                "number_field": 5,
                "shaped_field": {"label": "kept"}
            })
        );
    }

    #[test]
    fn test_encode_without_id() {
        let object = encode("organizations", None, &attrs(json!({"name": "Acme"})), None);
        assert_eq!(
            Value::Object(object),
            json!({"type": "organizations", "attributes": {"name": "Acme"}})
        );
    }

    #[test]
    fn test_encode_with_relationships() {
        let mut relationships = Map::new();
        relationships.insert(
            "configuration_interfaces".to_string(),
            json!([{"type": "configuration_interfaces", "attributes": {"name": "eth0"}}]),
        );

        let object = encode(
            "configurations",
            None,
            &attrs(json!({"name": "srv"})),
            Some(&relationships),
        );

        assert_eq!(
            object["relationships"],
            json!({"configuration_interfaces": [
                {"type": "configuration_interfaces", "attributes": {"name": "eth0"}}
            ]})
        );
    }

    #[test]
    fn test_bulk_update_moves_id_into_attributes() {
        let object = encode_bulk_update("configurations", "7", &attrs(json!({"name": "a"})));
        assert_eq!(
            Value::Object(object),
            json!({"type": "configurations", "attributes": {"name": "a", "id": "7"}})
        );
    }

    #[test]
    fn test_bulk_delete_form() {
        let object = encode_bulk_delete("configurations", "7");
        assert_eq!(
            Value::Object(object),
            json!({"type": "configurations", "attributes": {"id": "7"}})
        );
    }

    #[test]
    fn test_decode_object_normalizes_type_and_top_level_keys() {
        let object = json!({
            "type": "configuration-types",
            "id": 12,
            "attributes": {"created-at": "2024-01-01T00:00:00Z", "nested": {"keep-me": 1}}
        });

        let (id, attributes) = decode_object("configuration_types", &object).unwrap();

        assert_eq!(id.as_deref(), Some("12"));
        assert_eq!(attributes.get("created_at"), Some(&json!("2024-01-01T00:00:00Z")));
        assert_eq!(attributes.get("nested"), Some(&json!({"keep-me": 1})));
    }

    #[test]
    fn test_decode_object_missing_key() {
        let object = json!({"type": "organizations", "attributes": {}});
        let result = decode_object("organizations", &object);

        assert!(matches!(
            result,
            Err(ResourceError::MalformedEnvelope { resource: "organizations", found })
                if found == vec!["type".to_string(), "attributes".to_string()]
        ));
    }

    #[test]
    fn test_decode_object_type_mismatch() {
        let object = json!({"type": "locations", "id": "1", "attributes": {}});
        let result = decode_object("organizations", &object);

        assert!(matches!(
            result,
            Err(ResourceError::TypeMismatch { expected: "organizations", received })
                if received == "locations"
        ));
    }

    #[test]
    fn test_decode_object_null_id_and_non_object() {
        let object = json!({"type": "organizations", "id": null, "attributes": {"name": "x"}});
        let (id, _) = decode_object("organizations", &object).unwrap();
        assert!(id.is_none());

        assert!(matches!(
            decode_object("organizations", &json!(null)),
            Err(ResourceError::MalformedEnvelope { found, .. }) if found.is_empty()
        ));
    }

    #[test]
    fn test_data_items_shapes() {
        assert_eq!(data_items(&json!({"data": [{"a": 1}, {"b": 2}]})).len(), 2);
        assert_eq!(data_items(&json!({"data": {"a": 1}})), vec![json!({"a": 1})]);
        assert!(data_items(&json!({"data": null})).is_empty());
        assert!(data_items(&json!({})).is_empty());
    }

    #[test]
    fn test_next_page_requires_both_signals() {
        let document = json!({
            "meta": {"next-page": 2},
            "links": {"next": "https://api.itglue.com/organizations?page[number]=2"}
        });
        assert_eq!(
            next_page(&document),
            Some("https://api.itglue.com/organizations?page[number]=2")
        );

        let no_meta = json!({"links": {"next": "https://api.itglue.com/x"}});
        assert_eq!(next_page(&no_meta), None);

        let last_page = json!({
            "meta": {"next-page": null},
            "links": {"next": "https://api.itglue.com/x"}
        });
        assert_eq!(next_page(&last_page), None);

        let no_link = json!({"meta": {"next-page": true}, "links": {}});
        assert_eq!(next_page(&no_link), None);
    }
}
