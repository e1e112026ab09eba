//! Payload parsing and raw-record normalization for the sheet endpoint.

use crate::catalog::models::Product;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Errors raised while turning the endpoint payload into products.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("payload root is {found}, expected a JSON array")]
    NotAnArray { found: &'static str },
}

/// Parses the endpoint payload into the canonical product list.
///
/// Entries that are not JSON objects are skipped with a warning so one
/// malformed row cannot take down the whole catalog.
pub fn parse_catalog(body: &str) -> Result<Vec<Product>, ParseError> {
    let root: Value = serde_json::from_str(body)?;
    let Value::Array(entries) = root else {
        return Err(ParseError::NotAnArray { found: json_type(&root) });
    };

    let mut products = Vec::with_capacity(entries.len());
    for entry in &entries {
        match entry.as_object() {
            Some(record) => {
                let product = normalize_record(record);
                trace!("Normalized product: {} - {}", product.serial_no, product.name);
                products.push(product);
            }
            None => {
                warn!("Skipping non-object catalog entry ({})", json_type(entry));
            }
        }
    }

    debug!("Parsed {} products from payload", products.len());
    Ok(products)
}

/// Maps one raw record into the canonical product shape.
///
/// String fields prefer the canonically-cased key and fall back to the
/// all-lowercase variant; values are trimmed and default to "". Price and
/// Points pass through untouched so a non-numeric cell stays visible as-is
/// instead of silently becoming zero.
pub fn normalize_record(record: &Map<String, Value>) -> Product {
    Product {
        serial_no: string_field(record, "Serial No", "serial no"),
        name: string_field(record, "Product Name", "product name"),
        image_url: string_field(record, "Image URL", "image url"),
        price: raw_field(record, "Price"),
        points: raw_field(record, "Points"),
        extra: extra_field(record),
    }
}

fn string_field(record: &Map<String, Value>, canonical: &str, lowercase: &str) -> String {
    match record.get(canonical).or_else(|| record.get(lowercase)) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.trim().to_string(),
        // Sheets sometimes type serial numbers as numbers
        Some(other) => other.to_string(),
    }
}

fn raw_field(record: &Map<String, Value>, key: &str) -> Option<Value> {
    record.get(key).filter(|v| !v.is_null()).cloned()
}

fn extra_field(record: &Map<String, Value>) -> Option<String> {
    match record.get("Extra") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        // Keep non-string cells searchable instead of erroring later
        Some(other) => Some(other.to_string()),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
