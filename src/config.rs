//! Table Configuration
//!
//! Endpoints and host-document contract for each rendered table.

/// Base URL of the local cargo API
pub const API_BASE: &str = "http://127.0.0.1:8000/api";

/// Where a table loads from, where it renders to, and how it reports failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Tag used in progress log lines, e.g. `[CargoTable]`
    pub label: &'static str,
    /// Full URL of the list endpoint
    pub endpoint: String,
    /// Id of the host element whose content is replaced
    pub container_id: String,
    /// Literal prefix of the diagnostic line written on failure
    pub error_prefix: &'static str,
    /// Whether a missing container is a reportable failure
    pub required: bool,
}

impl TableConfig {
    /// The cargo items table (`#cargoTable`)
    pub fn cargo() -> Self {
        Self {
            label: "CargoTable",
            endpoint: format!("{}/items", API_BASE),
            container_id: "cargoTable".to_string(),
            error_prefix: "Error fetching cargo:",
            required: true,
        }
    }

    /// The action log table (`#logTable`), rendered only when the page has one
    pub fn logs() -> Self {
        Self {
            label: "LogTable",
            endpoint: format!("{}/logs", API_BASE),
            container_id: "logTable".to_string(),
            error_prefix: "Error fetching logs:",
            required: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cargo_defaults() {
        let config = TableConfig::cargo();
        assert_eq!(config.endpoint, "http://127.0.0.1:8000/api/items");
        assert_eq!(config.container_id, "cargoTable");
        assert_eq!(config.error_prefix, "Error fetching cargo:");
        assert!(config.required);
    }

    #[test]
    fn test_logs_table_is_optional() {
        let config = TableConfig::logs();
        assert_eq!(config.endpoint, "http://127.0.0.1:8000/api/logs");
        assert!(!config.required);
    }
}
