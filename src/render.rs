//! Row Rendering
//!
//! Turns API records into the display cells of one table row.

use serde_json::Value;

use crate::models::{Item, LogEntry};

/// Shown in the zone column when an item has no preferred zone
pub const ZONE_PLACEHOLDER: &str = "N/A";

/// One rendered table row, cells in column order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Row {
    pub cells: Vec<String>,
}

impl Row {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }
}

/// A record that can be displayed as a table row
pub trait TableRecord {
    /// Cell texts in column order
    fn cells(&self) -> Vec<String>;

    fn to_row(&self) -> Row {
        Row::new(self.cells())
    }
}

impl TableRecord for Item {
    /// identifier, name, preferred zone, priority, status
    fn cells(&self) -> Vec<String> {
        vec![
            scalar_text(&self.item_id),
            scalar_text(&self.name),
            zone_text(self.preferred_zone.as_ref()),
            scalar_text(&self.priority),
            scalar_text(&self.status),
        ]
    }
}

impl TableRecord for LogEntry {
    /// timestamp, action type, item id, details as compact JSON
    fn cells(&self) -> Vec<String> {
        vec![
            scalar_text(&self.timestamp),
            scalar_text(&self.action_type),
            scalar_text(&self.item_id),
            self.details.to_string(),
        ]
    }
}

/// Missing, null and empty zones show the placeholder
fn zone_text(zone: Option<&Value>) -> String {
    match zone {
        None | Some(Value::Null) => ZONE_PLACEHOLDER.to_string(),
        Some(Value::String(s)) if s.is_empty() => ZONE_PLACEHOLDER.to_string(),
        Some(other) => scalar_text(other),
    }
}

/// Display text of a JSON scalar: strings unquoted, null empty
fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
