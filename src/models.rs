//! Frontend Models
//!
//! Data structures matching the cargo API's JSON payloads. Record fields are
//! kept as raw JSON scalars: whatever the backend sends is displayed as is.

use serde::Deserialize;
use serde_json::Value;

/// Response wrapper returned by every list endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub message: Option<String>,
    pub data: Option<Vec<T>>,
}

/// Cargo item (matches backend `items` collection)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default)]
    pub item_id: Value,
    #[serde(default)]
    pub name: Value,
    /// `None` for both a missing key and an explicit `null`
    pub preferred_zone: Option<Value>,
    #[serde(default)]
    pub priority: Value,
    #[serde(default = "default_status")]
    pub status: Value,
}

fn default_status() -> Value {
    Value::String("available".to_string())
}

/// Action log entry (matches backend `logs` collection)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    #[serde(default)]
    pub timestamp: Value,
    #[serde(default)]
    pub action_type: Value,
    #[serde(default)]
    pub item_id: Value,
    #[serde(default)]
    pub details: Value,
}
