//! HTTP Source
//!
//! One `fetch` per load, body returned as text.

use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::error::LoadError;

/// Where a table's response body comes from
#[async_trait(?Send)]
pub trait RecordSource {
    async fn fetch_body(&self) -> Result<String, LoadError>;
}

/// `GET` with no headers, query or body, via `window.fetch`
#[derive(Debug, Clone)]
pub struct FetchSource {
    url: String,
}

impl FetchSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait(?Send)]
impl RecordSource for FetchSource {
    async fn fetch_body(&self) -> Result<String, LoadError> {
        let window = web_sys::window().ok_or_else(|| LoadError::Transport("no window".to_string()))?;

        let response = JsFuture::from(window.fetch_with_str(&self.url))
            .await
            .map_err(|e| transport_error(&e))?;
        let response: Response = response.dyn_into().map_err(|e| transport_error(&e))?;

        // Status is not checked: an error body fails later as a missing `data` list
        let text = response.text().map_err(|e| transport_error(&e))?;
        let body = JsFuture::from(text).await.map_err(|e| transport_error(&e))?;

        body.as_string()
            .ok_or_else(|| LoadError::Transport("response body is not text".to_string()))
    }
}

/// `TypeError: Failed to fetch` style detail from a rejected promise
fn transport_error(value: &JsValue) -> LoadError {
    let detail = if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        format!("{}: {}", String::from(error.name()), String::from(error.message()))
    } else if let Some(text) = value.as_string() {
        text
    } else {
        format!("{:?}", value)
    };
    LoadError::Transport(detail)
}
