//! Normalization of raw backend ad records into [`flyer_core::Ad`].
//!
//! The backend's scrapers are not consistent about field names, so the
//! canonical fields are assembled from known alternates, first non-empty
//! wins. Failures are per-record: one malformed entry never drops the rest
//! of a store's batch.

use flyer_core::{Ad, Price};
use serde_json::{Map, Value};

use crate::error::AdClientError;

/// Alternate names an ad's image filename may arrive under, in priority
/// order.
const IMAGE_FIELDS: [&str; 4] = ["image", "image_filename", "image_file", "img"];

/// Normalizes one raw ad record fetched under `store_name`.
///
/// `product` and `price` are always populated (empty values when the source
/// omitted every known alternate). The image filename and inline base64
/// payload are captured as candidates for resolution; `image_uri` is left
/// unset for the resolver.
///
/// # Errors
///
/// Returns [`AdClientError::MalformedRecord`] if the record is not a JSON
/// object.
pub fn normalize_record(raw: &Value, store_name: &str) -> Result<Ad, AdClientError> {
    let record = raw
        .as_object()
        .ok_or_else(|| AdClientError::MalformedRecord {
            store: store_name.to_owned(),
            reason: format!("expected a JSON object, got {}", json_type_name(raw)),
        })?;

    let product = first_non_empty_str(record, &["name", "product"]).unwrap_or_default();
    let price = record
        .get("price")
        .and_then(price_value)
        .or_else(|| record.get("cost").and_then(price_value))
        .unwrap_or_default();
    let image_filename = first_non_empty_str(record, &IMAGE_FIELDS);
    let image_base64 = first_non_empty_str(record, &["image_base64"]);
    let date = record
        .get("date")
        .and_then(Value::as_str)
        .map(str::to_owned);

    Ok(Ad {
        product,
        price,
        store: store_name.to_owned(),
        date,
        image_filename,
        image_base64,
        image_uri: None,
    })
}

fn first_non_empty_str(record: &Map<String, Value>, fields: &[&str]) -> Option<String> {
    fields
        .iter()
        .filter_map(|field| record.get(*field).and_then(Value::as_str))
        .find(|s| !s.is_empty())
        .map(str::to_owned)
}

fn price_value(value: &Value) -> Option<Price> {
    match value {
        Value::String(s) => Some(Price::Text(s.clone())),
        Value::Number(n) => n.as_f64().map(Price::Number),
        _ => None,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
