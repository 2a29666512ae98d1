//! Cargo Table App
//!
//! Page-ready hook, table mounting, and the single load per table.

use leptos::mount::mount_to;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, HtmlElement};

use crate::config::TableConfig;
use crate::diagnostics::{ConsoleSink, DiagnosticSink};
use crate::error::LoadError;
use crate::http::FetchSource;
use crate::loader::load_and_render;
use crate::models::{Item, LogEntry};
use crate::render::{Row, TableRecord};
use crate::table::{SignalTable, TableRows};

/// Entry point, called once by the host. Loads every table as soon as the
/// document has been parsed.
pub fn start() {
    on_document_ready(|| {
        mount_table::<Item>(TableConfig::cargo());
        mount_table::<LogEntry>(TableConfig::logs());
    });
}

/// Run `f` once after `DOMContentLoaded`, or right away if that already fired
fn on_document_ready(f: impl FnOnce() + 'static) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        web_sys::console::error_1(&"[CargoTable] No document to attach to".into());
        return;
    };

    if document.ready_state() != "loading" {
        f();
        return;
    }

    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let callback = Closure::once_into_js(f);
    if let Err(e) = document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        callback.unchecked_ref(),
        &options,
    ) {
        web_sys::console::error_2(&"[CargoTable] Could not wait for DOMContentLoaded:".into(), &e);
    }
}

/// Take over `config.container_id` and start its load
fn mount_table<R>(config: TableConfig)
where
    R: DeserializeOwned + TableRecord + 'static,
{
    let sink = ConsoleSink;

    let element = match find_container(&config.container_id) {
        Ok(element) => element,
        Err(e) if config.required => {
            sink.error(config.error_prefix, &e.to_string());
            return;
        }
        Err(_) => {
            sink.info(&format!("[{}] No #{} on this page, skipping", config.label, config.container_id));
            return;
        }
    };

    // Drop whatever static markup the host shipped before the rows take over
    element.set_inner_html("");
    let rows = RwSignal::new(Vec::<Row>::new());
    mount_to(element, move || view! { <TableRows rows=rows /> }).forget();

    let source = FetchSource::new(config.endpoint.clone());
    let mut table = SignalTable::new(rows);
    spawn_local(async move {
        load_and_render::<R, _, _, _>(&config, &source, &mut table, &sink).await;
    });
}

fn find_container(id: &str) -> Result<HtmlElement, LoadError> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| LoadError::ContainerMissing(id.to_string()))
}
