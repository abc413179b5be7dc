//! Query string formatting for collection reads.
//!
//! Filters are sent as bracketed keys: `{"filter": {"name": "Acme"}}` becomes
//! `filter[name]=Acme`. Key names and values are percent-encoded; the
//! brackets, `=`, `&` and list commas are the only literal separators.

use serde_json::{Map, Value};

/// Returns `false` for null, `false`, zero, and empty strings, arrays or objects.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Renders a scalar for a query string, percent-encoded. Strings are written
/// without quotes.
fn encode_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => urlencoding::encode(s).into_owned(),
        other => urlencoding::encode(&other.to_string()).into_owned(),
    }
}

/// Flattens a parameter mapping into a `key=value&...` query string.
///
/// - Nested mappings become `outer[inner]=value`
/// - Arrays are comma-joined into a single value
/// - Falsy values are omitted entirely, never emitted as `key=`
/// - Reserved characters inside names and values are percent-encoded
///
/// # Example
///
/// ```rust
/// use itglue_api::rest::query::format_params;
/// use serde_json::json;
///
/// let params = json!({
///     "filter": {"name": "Smith & Sons", "id": [1, 2], "psa_id": null},
///     "page": {"size": 50}
/// });
///
/// assert_eq!(
///     format_params(params.as_object().unwrap(), None),
///     "filter[name]=Smith%20%26%20Sons&filter[id]=1,2&page[size]=50"
/// );
/// ```
#[must_use]
pub fn format_params(params: &Map<String, Value>, namespace: Option<&str>) -> String {
    let mut pairs: Vec<String> = Vec::new();

    for (key, value) in params {
        if !is_truthy(value) {
            continue;
        }

        let key = urlencoding::encode(key);
        let name = namespace.map_or_else(|| key.to_string(), |ns| format!("{ns}[{key}]"));

        match value {
            Value::Object(nested) => {
                let formatted = format_params(nested, Some(&name));
                if !formatted.is_empty() {
                    pairs.push(formatted);
                }
            }
            Value::Array(items) => {
                let joined = items
                    .iter()
                    .map(encode_scalar)
                    .collect::<Vec<_>>()
                    .join(",");
                pairs.push(format!("{name}={joined}"));
            }
            scalar => pairs.push(format!("{name}={}", encode_scalar(scalar))),
        }
    }

    pairs.join("&")
}
