use serde::{Deserialize, Serialize};

/// Id of the optional `<script type="application/json">` block holding
/// configuration overrides in the host page.
pub const CONFIG_ELEMENT_ID: &str = "upload-history-config";

/// Runtime settings for the history view. Every field has a default, so the
/// host page only needs to supply what it overrides.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub history_url: String,
    pub filter_options_url: String,
    pub per_page: u32,
    pub debounce_ms: u32,
    pub blur_close_ms: u32,
    pub suggestion_limit: usize,
    pub page_window: u32,
    pub log_filter: String,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            history_url: "/get_upload_history".to_string(),
            filter_options_url: "/get_upload_history_filter_options".to_string(),
            per_page: 10,
            debounce_ms: 300,
            blur_close_ms: 150,
            suggestion_limit: 10,
            page_window: 2,
            log_filter: "info".to_string(),
        }
    }
}

impl HistoryConfig {
    /// Parse overrides from JSON. A zero page size is rejected.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: HistoryConfig =
            serde_json::from_str(json).map_err(|e| format!("Invalid config JSON: {}", e))?;
        if config.per_page == 0 {
            return Err("per_page must be at least 1".to_string());
        }
        Ok(config)
    }

    /// Read overrides from the host page, falling back to defaults.
    ///
    /// Runs before logging is installed, so problems are returned alongside
    /// the config for the caller to report.
    pub fn from_document() -> (Self, Option<String>) {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(json) if !json.trim().is_empty() => match Self::from_json(&json) {
                Ok(config) => (config, None),
                Err(e) => (Self::default(), Some(e)),
            },
            _ => (Self::default(), None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_server_contract() {
        let config = HistoryConfig::default();
        assert_eq!(config.per_page, 10);
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.blur_close_ms, 150);
        assert_eq!(config.history_url, "/get_upload_history");
    }

    #[test]
    fn test_partial_override() {
        let config = HistoryConfig::from_json(r#"{"per_page": 25, "log_filter": "debug"}"#)
            .expect("Should parse");
        assert_eq!(config.per_page, 25);
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.suggestion_limit, 10, "Unset fields keep defaults");
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(HistoryConfig::from_json("{not json").is_err());
        assert!(HistoryConfig::from_json(r#"{"per_page": 0}"#).is_err());
    }
}
