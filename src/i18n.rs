//! Translation lookup for the few strings the history view shows.

use std::sync::Arc;

use wasm_bindgen::{JsCast, JsValue};

pub const NO_RESULTS_WITH_FILTERS: &str = "no_results_with_filters";
pub const NO_RECORDS_FOUND: &str = "no_records_found";
pub const DOWNLOAD_QC_REPORT: &str = "download_qc_report";
pub const SHOWING_RECORDS: &str = "showing_records";
pub const OF: &str = "of";
pub const PREVIOUS: &str = "previous";
pub const NEXT: &str = "next";

/// Built-in English text for a key.
pub fn english(key: &str) -> &'static str {
    match key {
        NO_RESULTS_WITH_FILTERS => "No results found with current filters",
        NO_RECORDS_FOUND => "No records found",
        DOWNLOAD_QC_REPORT => "Download QC Report",
        SHOWING_RECORDS => "Showing records",
        OF => "of",
        PREVIOUS => "Previous",
        NEXT => "Next",
        _ => "",
    }
}

/// Something that can translate a key. `None` means "use the fallback".
pub trait TranslationProvider: Send + Sync {
    fn lookup(&self, key: &str) -> Option<String>;
}

/// Always falls back to English.
pub struct EnglishOnly;

impl TranslationProvider for EnglishOnly {
    fn lookup(&self, _key: &str) -> Option<String> {
        None
    }
}

/// Asks `window.languageManager.getTranslation(key)` on every lookup.
pub struct LanguageManager;

impl TranslationProvider for LanguageManager {
    fn lookup(&self, key: &str) -> Option<String> {
        let window: JsValue = web_sys::window()?.into();
        let manager = js_sys::Reflect::get(&window, &JsValue::from_str("languageManager")).ok()?;
        if manager.is_undefined() || manager.is_null() {
            return None;
        }
        let func = js_sys::Reflect::get(&manager, &JsValue::from_str("getTranslation"))
            .ok()?
            .dyn_into::<js_sys::Function>()
            .ok()?;
        func.call1(&manager, &JsValue::from_str(key)).ok()?.as_string()
    }
}

/// Cloneable handle around a provider, with English fallback.
#[derive(Clone)]
pub struct Translator {
    provider: Arc<dyn TranslationProvider>,
}

impl Translator {
    pub fn new(provider: impl TranslationProvider + 'static) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    pub fn t(&self, key: &str) -> String {
        self.provider
            .lookup(key)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| english(key).to_string())
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(EnglishOnly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct Fixed(HashMap<&'static str, &'static str>);

    impl TranslationProvider for Fixed {
        fn lookup(&self, key: &str) -> Option<String> {
            self.0.get(key).map(|s| s.to_string())
        }
    }

    #[test]
    fn test_english_fallback() {
        let t = Translator::default();
        assert_eq!(t.t(NO_RECORDS_FOUND), "No records found");
        assert_eq!(t.t(PREVIOUS), "Previous");
    }

    #[test]
    fn test_provider_wins_when_present() {
        let t = Translator::new(Fixed(HashMap::from([(NEXT, "Suivant"), (OF, "")])));
        assert_eq!(t.t(NEXT), "Suivant");
        assert_eq!(t.t(OF), "of", "Empty translation falls back");
        assert_eq!(t.t(SHOWING_RECORDS), "Showing records");
    }
}
