use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

// -- Wire types matching the server's JSON --

/// One upload batch as reported by the history endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HistoryRow {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub upload_date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub batch_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pandas_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub bahi_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub upload_type: String,
    #[serde(default)]
    pub image_count: u64,
    #[serde(default)]
    pub approved_count: u64,
    #[serde(default)]
    pub rejected_count: u64,
}

/// Server-computed pagination metadata for one page.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PaginationInfo {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
    pub total_records: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

/// Response body of the history endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HistoryPage {
    pub history: Vec<HistoryRow>,
    pub pagination: PaginationInfo,
}

/// Response body of the filter-options endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FilterOptions {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub panda_names: Vec<String>,
}

impl FilterOptions {
    /// Dropdown values for the location filter: non-empty, first occurrence
    /// kept, server order preserved.
    pub fn location_choices(&self) -> Vec<String> {
        choices(&self.locations)
    }

    pub fn panda_name_choices(&self) -> Vec<String> {
        choices(&self.panda_names)
    }
}

fn choices(values: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for v in values {
        if !v.is_empty() && !out.contains(v) {
            out.push(v.clone());
        }
    }
    out
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Browser error: {0}")]
    Browser(String),

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Server reported failure")]
    Rejected,
}

impl From<FetchError> for String {
    fn from(err: FetchError) -> Self {
        err.to_string()
    }
}

fn js_error(value: wasm_bindgen::JsValue) -> FetchError {
    FetchError::Browser(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}

/// Build the query URL for one page of history.
pub fn history_url(base: &str, page: u32, per_page: u32) -> String {
    let sep = if base.contains('?') { '&' } else { '?' };
    format!("{}{}page={}&per_page={}", base, sep, page, per_page)
}

/// Decode a history response body.
pub fn parse_history_page(body: &str) -> Result<HistoryPage, FetchError> {
    Ok(serde_json::from_str(body)?)
}

/// Decode a filter-options response body. `success: false` is an error.
pub fn parse_filter_options(body: &str) -> Result<FilterOptions, FetchError> {
    let options: FilterOptions = serde_json::from_str(body)?;
    if !options.success {
        return Err(FetchError::Rejected);
    }
    Ok(options)
}

async fn get_text(url: &str) -> Result<String, FetchError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(js_error)?;

    let window =
        web_sys::window().ok_or_else(|| FetchError::Browser("no window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: resp.status(),
        });
    }

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    text.as_string()
        .ok_or_else(|| FetchError::Browser("response body is not text".to_string()))
}

pub async fn fetch_upload_history(
    base: &str,
    page: u32,
    per_page: u32,
) -> Result<HistoryPage, FetchError> {
    let url = history_url(base, page, per_page);
    tracing::debug!("Fetching {}", url);
    let body = get_text(&url).await?;
    parse_history_page(&body)
}

pub async fn fetch_filter_options(url: &str) -> Result<FilterOptions, FetchError> {
    let body = get_text(url).await?;
    parse_filter_options(&body)
}
