//! Data models for catalog products.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A canonical catalog product, produced once by normalization and
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Serial number as it appears in the sheet ("" if absent)
    pub serial_no: String,
    /// Product name ("" if absent)
    pub name: String,
    /// Product image URL ("" if absent)
    pub image_url: String,
    /// Price cell, kept as the raw sheet value (usually a number)
    #[serde(default)]
    pub price: Option<Value>,
    /// Points cell, kept as the raw sheet value (usually a number)
    #[serde(default)]
    pub points: Option<Value>,
    /// Comma-joined tag string; may be present but empty
    #[serde(default)]
    pub extra: Option<String>,
}

impl Product {
    /// Returns the price as f64 when the sheet holds an actual number.
    pub fn price_number(&self) -> Option<f64> {
        self.price.as_ref().and_then(Value::as_f64)
    }

    /// Returns the points as f64 when the sheet holds an actual number.
    pub fn points_number(&self) -> Option<f64> {
        self.points.as_ref().and_then(Value::as_f64)
    }

    /// Price rendered for display and export; absent values render empty.
    pub fn price_display(&self) -> String {
        display_value(self.price.as_ref())
    }

    /// Points rendered for display and export; absent values render empty.
    pub fn points_display(&self) -> String {
        display_value(self.points.as_ref())
    }

    /// The tag string, or "" when absent.
    pub fn extra_str(&self) -> &str {
        self.extra.as_deref().unwrap_or("")
    }

    /// True when the product carries a non-empty tag string.
    pub fn has_extra(&self) -> bool {
        self.extra.as_deref().is_some_and(|e| !e.is_empty())
    }

    /// Individual trimmed tags, empty tokens dropped.
    pub fn tags(&self) -> Vec<&str> {
        self.extra_str().split(',').map(str::trim).filter(|t| !t.is_empty()).collect()
    }
}

/// Renders a raw sheet value for display: numbers in plain notation,
/// strings unquoted, absent/null as "" (never the word "undefined").
pub(crate) fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
