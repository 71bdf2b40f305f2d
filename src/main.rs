use leptos::prelude::*;
use wasm_bindgen::JsCast;

use upload_history::app::App;
use upload_history::config::HistoryConfig;
use upload_history::logging;

/// Host element to mount into; falls back to `<body>` when absent.
const ROOT_ELEMENT_ID: &str = "upload-history-root";

fn main() {
    let (config, config_problem) = HistoryConfig::from_document();
    logging::init(&config.log_filter);
    if let Some(problem) = config_problem {
        tracing::warn!("Using default configuration: {}", problem);
    }

    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(ROOT_ELEMENT_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    match root {
        Some(root) => leptos::mount::mount_to(root, move || view! { <App config=config.clone() /> }).forget(),
        None => leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> }),
    }
}
