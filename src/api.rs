//! Inventory API Client
//!
//! HTTP bindings to the inventory service: one async wrapper per endpoint,
//! a shared fetch path, and the failure taxonomy the views match on.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

use crate::models::{Item, ItemDraft, ItemPage, SearchHit};
use crate::query::ListQuery;

/// Endpoint root used when no override is baked in at build time
pub const DEFAULT_API_BASE: &str = "http://localhost:5001/api";

/// Escaped inside query-string values
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'=')
    .add(b'?');

/// Escaped inside path segments (item codes may contain anything)
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'%')
    .add(b'/')
    .add(b'?');

/// What went wrong with an API call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No response at all (fetch rejected, server unreachable)
    #[error("could not reach the server: {0}")]
    Network(String),
    /// 404 from a single-item lookup
    #[error("item not found")]
    NotFound,
    /// Server rejected the request; its message is kept verbatim when present
    #[error("{0}")]
    Validation(String),
    /// Any other non-2xx status
    #[error("server error (status {0})")]
    Server(u16),
    /// 2xx whose body did not decode as expected
    #[error("unexpected response from the server: {0}")]
    Decode(String),
}

/// Map a non-2xx status plus optional server message onto the taxonomy
fn classify(status: u16, message: Option<String>) -> ApiError {
    match status {
        404 => ApiError::NotFound,
        400 | 409 | 422 => ApiError::Validation(
            message.unwrap_or_else(|| "the server rejected the request".to_string()),
        ),
        other => ApiError::Server(other),
    }
}

/// Error payload shape used by the service
#[derive(serde::Deserialize)]
struct ErrorBody {
    error: String,
}

fn js_detail(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Handle to the inventory service
///
/// Owns the endpoint root explicitly; no ambient configuration. `App` builds
/// one and hands it around through context.
#[derive(Clone)]
pub struct Api {
    base_url: String,
}

impl Api {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Source URL for an uploaded item image
    pub fn upload_url(&self, filename: &str) -> String {
        format!(
            "{}/uploads/{}",
            self.base_url,
            utf8_percent_encode(filename, PATH_SEGMENT)
        )
    }

    fn items_url(&self, query: &ListQuery, tz_offset_minutes: i32) -> String {
        let params = query
            .query_pairs(tz_offset_minutes)
            .iter()
            .map(|(key, value)| format!("{}={}", key, utf8_percent_encode(value, QUERY_VALUE)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}/items?{}", self.base_url, params)
    }

    fn item_url(&self, code: &str) -> String {
        format!(
            "{}/items/{}",
            self.base_url,
            utf8_percent_encode(code, PATH_SEGMENT)
        )
    }

    fn search_url(&self, query: &str) -> String {
        format!(
            "{}/search?q={}",
            self.base_url,
            utf8_percent_encode(query, QUERY_VALUE)
        )
    }

    /// One page of items for the current (page, name, date) triple
    pub async fn list_items(
        &self,
        query: &ListQuery,
        tz_offset_minutes: i32,
    ) -> Result<ItemPage, ApiError> {
        request_json(&self.items_url(query, tz_offset_minutes), "GET", None).await
    }

    /// Distinct item names for the filter dropdown
    pub async fn list_item_names(&self) -> Result<Vec<String>, ApiError> {
        request_json(&format!("{}/item-names", self.base_url), "GET", None).await
    }

    /// Live-search suggestions (server caps them at 5)
    pub async fn search_items(&self, query: &str) -> Result<Vec<SearchHit>, ApiError> {
        request_json(&self.search_url(query), "GET", None).await
    }

    pub async fn get_item(&self, code: &str) -> Result<Item, ApiError> {
        request_json(&self.item_url(code), "GET", None).await
    }

    /// Create an item; fields and optional image go out as one combined call
    pub async fn create_item(
        &self,
        draft: &ItemDraft,
        image: Option<&File>,
    ) -> Result<Item, ApiError> {
        let form = multipart(draft, image)?;
        request_json(&format!("{}/items", self.base_url), "POST", Some(form)).await
    }

    /// Update an item addressed by code; same combined multipart shape
    pub async fn update_item(
        &self,
        code: &str,
        draft: &ItemDraft,
        image: Option<&File>,
    ) -> Result<Item, ApiError> {
        let form = multipart(draft, image)?;
        request_json(&self.item_url(code), "PUT", Some(form)).await
    }

    pub async fn delete_item(&self, code: &str) -> Result<(), ApiError> {
        // Success body is a confirmation message; nothing to decode
        send(&self.item_url(code), "DELETE", None).await.map(|_| ())
    }
}

/// JSON `data` part plus optional `image_file` part in one body
fn multipart(draft: &ItemDraft, image: Option<&File>) -> Result<FormData, ApiError> {
    let data = serde_json::to_string(draft).map_err(|e| ApiError::Decode(e.to_string()))?;
    let form = FormData::new().map_err(|e| ApiError::Network(js_detail(e)))?;
    form.append_with_str("data", &data)
        .map_err(|e| ApiError::Network(js_detail(e)))?;
    if let Some(file) = image {
        form.append_with_blob_and_filename("image_file", file, &file.name())
            .map_err(|e| ApiError::Network(js_detail(e)))?;
    }
    Ok(form)
}

/// Issue one request; classify a non-2xx response into an `ApiError`
async fn send(url: &str, method: &str, body: Option<FormData>) -> Result<Response, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(form) = &body {
        opts.set_body(form.as_ref());
    }

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| ApiError::Network(js_detail(e)))?;
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Network(js_detail(e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| ApiError::Network(js_detail(e)))?;

    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    Err(classify(status, error_message(&response).await))
}

/// Best-effort read of the server's `{"error": ...}` payload
async fn error_message(response: &Response) -> Option<String> {
    let promise = response.json().ok()?;
    let value = JsFuture::from(promise).await.ok()?;
    let body: ErrorBody = serde_wasm_bindgen::from_value(value).ok()?;
    Some(body.error)
}

async fn request_json<T: serde::de::DeserializeOwned>(
    url: &str,
    method: &str,
    body: Option<FormData>,
) -> Result<T, ApiError> {
    let response = send(url, method, body).await?;
    let promise = response.json().map_err(|e| ApiError::Decode(js_detail(e)))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| ApiError::Decode(js_detail(e)))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_distinguishes_not_found() {
        assert_eq!(classify(404, None), ApiError::NotFound);
        assert_eq!(classify(500, None), ApiError::Server(500));
        assert_eq!(classify(502, Some("boom".into())), ApiError::Server(502));
    }

    #[test]
    fn classify_keeps_rejection_message_verbatim() {
        let err = classify(409, Some("Item code 'SKU-1' already exists.".into()));
        assert_eq!(
            err,
            ApiError::Validation("Item code 'SKU-1' already exists.".into())
        );
        assert_eq!(err.to_string(), "Item code 'SKU-1' already exists.");

        // Missing payload falls back to a generic line
        let err = classify(400, None);
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn base_url_loses_trailing_slash() {
        let api = Api::new("http://localhost:5001/api/");
        assert_eq!(
            api.item_url("SKU-1"),
            "http://localhost:5001/api/items/SKU-1"
        );
    }

    #[test]
    fn urls_escape_filter_values_and_codes() {
        let api = Api::new("http://localhost:5001/api");
        let query = ListQuery {
            page: 2,
            name: "M6 bolts & nuts".into(),
            date: Some("2026-08-19".into()),
        };
        assert_eq!(
            api.items_url(&query, -330),
            "http://localhost:5001/api/items?page=2&name=M6%20bolts%20%26%20nuts&date=2026-08-19&tzOffset=-330"
        );
        assert_eq!(
            api.item_url("A/B 1"),
            "http://localhost:5001/api/items/A%2FB%201"
        );
        assert_eq!(
            api.search_url("hex?"),
            "http://localhost:5001/api/search?q=hex%3F"
        );
        assert_eq!(
            api.upload_url("SKU-1_front view.png"),
            "http://localhost:5001/api/uploads/SKU-1_front%20view.png"
        );
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn multipart_packs_draft_under_data_key() {
        let draft = ItemDraft {
            item_code: "SKU-9".to_string(),
            item_name: "Hex bolts".to_string(),
            rack_no: "R-2".to_string(),
            quantity: 40,
            description: "M6, zinc".to_string(),
        };

        let form = multipart(&draft, None).expect("form should build");
        let data = form
            .get("data")
            .as_string()
            .expect("data part should be a string");
        assert!(data.contains("\"item_code\":\"SKU-9\""));
        assert!(data.contains("\"quantity\":40"));

        // No staged file: the image part is absent entirely
        assert!(form.get("image_file").is_undefined());
    }
}
