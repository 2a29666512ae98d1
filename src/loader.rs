//! Load and Render
//!
//! Clears a table, fetches its records once and appends one row per record
//! in response order. Failures end up in the diagnostic sink, never with the
//! caller.

use serde::de::DeserializeOwned;

use crate::config::TableConfig;
use crate::diagnostics::DiagnosticSink;
use crate::error::LoadError;
use crate::http::RecordSource;
use crate::models::ApiEnvelope;
use crate::render::{Row, TableRecord};
use crate::table::RowContainer;

/// How a single load ended
#[derive(Debug)]
pub enum LoadOutcome {
    /// Rows appended to the container
    Rendered(usize),
    /// Failure written to the diagnostic sink; container left empty
    Reported(LoadError),
}

impl LoadOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, LoadOutcome::Rendered(_))
    }
}

/// Extract the `data` list of a response body.
///
/// An envelope without `data` is its own failure, not an empty table.
pub fn parse_envelope<R: DeserializeOwned>(body: &str) -> Result<Vec<R>, LoadError> {
    let envelope: ApiEnvelope<R> = serde_json::from_str(body)?;
    envelope
        .data
        .ok_or(LoadError::MissingData { message: envelope.message })
}

/// Parse a body straight into display rows
pub fn parse_rows<R: DeserializeOwned + TableRecord>(body: &str) -> Result<Vec<Row>, LoadError> {
    let records = parse_envelope::<R>(body)?;
    Ok(records.iter().map(TableRecord::to_row).collect())
}

/// Run one load of `config`'s table.
///
/// The container is cleared before the request goes out, so any failure
/// leaves it empty. All records are parsed before any row reaches the container.
pub async fn load_and_render<R, S, C, D>(
    config: &TableConfig,
    source: &S,
    container: &mut C,
    sink: &D,
) -> LoadOutcome
where
    R: DeserializeOwned + TableRecord,
    S: RecordSource + ?Sized,
    C: RowContainer + ?Sized,
    D: DiagnosticSink + ?Sized,
{
    container.clear();

    let rows = match source.fetch_body().await {
        Ok(body) => parse_rows::<R>(&body),
        Err(e) => Err(e),
    };

    match rows {
        Ok(rows) => {
            let count = rows.len();
            container.replace_rows(rows);
            let noun = if count == 1 { "row" } else { "rows" };
            sink.info(&format!("[{}] Loaded {} {}", config.label, count, noun));
            LoadOutcome::Rendered(count)
        }
        Err(e) => {
            sink.error(config.error_prefix, &e.to_string());
            LoadOutcome::Reported(e)
        }
    }
}
