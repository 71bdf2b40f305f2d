#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use upload_history::download::download_batch_report;
use upload_history::i18n::{self, LanguageManager, Translator};
use upload_history::timers;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_missing_language_manager_falls_back() {
    let t = Translator::new(LanguageManager);
    assert_eq!(t.t(i18n::NEXT), "Next");
    assert_eq!(t.t(i18n::DOWNLOAD_QC_REPORT), "Download QC Report");
}

#[wasm_bindgen_test]
fn test_missing_download_hook_is_not_fatal() {
    download_batch_report("BATCH_1".to_string());
}

#[wasm_bindgen_test]
async fn test_cancelled_timer_never_fires() {
    use std::cell::Cell;
    use std::rc::Rc;

    let fired = Rc::new(Cell::new(false));
    let flag = fired.clone();
    let id = timers::schedule(10, move || flag.set(true)).expect("Should schedule");
    timers::cancel(id);

    let wait = js_sys::Promise::new(&mut |resolve, _| {
        let _ = web_sys::window()
            .expect("Should have a window")
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 50);
    });
    let _ = wasm_bindgen_futures::JsFuture::from(wait).await;
    assert!(!fired.get(), "Cancelled callback must not run");
}
