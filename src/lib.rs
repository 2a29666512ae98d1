//! Cargo Table Frontend
//!
//! Loads cargo records from the local API once the page is ready and renders
//! them as rows of the host document's `#cargoTable`.

pub mod models;
pub mod config;
pub mod error;
pub mod diagnostics;
pub mod render;
pub mod table;
pub mod http;
pub mod loader;
pub mod app;

pub use app::start;
pub use config::TableConfig;
pub use error::LoadError;
pub use loader::{load_and_render, LoadOutcome};
pub use models::{Item, LogEntry};
