//! Upload history page.
//!
//! Owns the view state, loads data from the server and turns each user
//! action into a [`HistoryState`] transition.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, FilterOptions};
use crate::autocomplete::{KeyOutcome, NavKey};
use crate::components::batch_search::BatchSearch;
use crate::components::filter_bar::FilterBar;
use crate::components::filter_tags::FilterTags;
use crate::components::history_table::HistoryTable;
use crate::components::pagination_controls::PaginationControls;
use crate::config::HistoryConfig;
use crate::filters::FilterKey;
use crate::history::HistoryState;
use crate::i18n::Translator;
use crate::timers;

const LOAD_ERROR: &str = "Failed to load upload history data";

#[component]
pub fn UploadHistoryPage(
    /// Resolves the translated UI strings.
    translator: Translator,
    /// Invoked with a batch id when its report button is clicked.
    on_download: Callback<String>,
) -> impl IntoView {
    let config = StoredValue::new(use_context::<HistoryConfig>().unwrap_or_default());
    let (per_page, suggestion_limit, page_window) =
        config.with_value(|c| (c.per_page, c.suggestion_limit, c.page_window));

    let state = RwSignal::new(HistoryState::new(per_page, suggestion_limit));
    let (options, set_options) = signal(FilterOptions::default());
    // Pending search debounce. At most one timer is ever scheduled.
    let search_timeout = StoredValue::new(None::<i32>);
    let cancel_search_timeout = move || {
        if let Some(id) = search_timeout.get_value() {
            timers::cancel(id);
        }
        search_timeout.set_value(None);
    };

    let load_page = move |page: u32| {
        let (url, per_page) = config.with_value(|c| (c.history_url.clone(), c.per_page));
        spawn_local(async move {
            match api::fetch_upload_history(&url, page, per_page).await {
                Ok(data) => {
                    tracing::info!(
                        "Loaded page {} ({} rows of {} total)",
                        page,
                        data.history.len(),
                        data.pagination.total_records
                    );
                    state.update(|s| s.page_loaded(page, data));
                }
                Err(e) => {
                    tracing::error!("Error loading page {}: {}", page, e);
                    state.update(|s| s.page_failed(LOAD_ERROR));
                }
            }
        });
    };

    let load_filter_options = move || {
        let url = config.with_value(|c| c.filter_options_url.clone());
        spawn_local(async move {
            match api::fetch_filter_options(&url).await {
                Ok(opts) => set_options.set(opts),
                Err(e) => tracing::error!("Error loading filter options: {}", e),
            }
        });
    };

    load_page(1);
    load_filter_options();

    let on_search_input = Callback::new(move |raw: String| {
        state.update(|s| s.set_search_text(&raw));
        cancel_search_timeout();
        let delay = config.with_value(|c| c.debounce_ms);
        let id = timers::schedule(delay, move || {
            search_timeout.set_value(None);
            state.update(|s| s.debounce_fired());
        });
        search_timeout.set_value(id);
    });

    let on_search_key = Callback::new(move |key: NavKey| {
        state.update(|s| match s.autocomplete.handle_key(key) {
            Some(KeyOutcome::Select(batch_id)) => s.select_suggestion(&batch_id),
            Some(KeyOutcome::Submit) => s.perform_search(),
            _ => {}
        });
    });

    let on_search_focus = Callback::new(move |_: ()| {
        state.update(|s| s.search_focused());
    });

    // Delay so a click on a suggestion lands before the list disappears.
    let on_search_blur = Callback::new(move |_: ()| {
        let delay = config.with_value(|c| c.blur_close_ms);
        timers::schedule(delay, move || state.update(|s| s.autocomplete.hide()));
    });

    let on_select = Callback::new(move |batch_id: String| {
        state.update(|s| s.select_suggestion(&batch_id));
    });

    let on_location = Callback::new(move |value: String| {
        state.update(|s| s.set_location(&value));
    });

    let on_panda = Callback::new(move |value: String| {
        state.update(|s| s.set_panda_name(&value));
    });

    let on_clear = Callback::new(move |_: ()| {
        cancel_search_timeout();
        state.update(|s| s.clear_all());
        load_page(1);
    });

    let on_remove = Callback::new(move |key: FilterKey| {
        state.update(|s| s.remove_filter(key));
    });

    let on_page = Callback::new(move |page: u32| {
        tracing::debug!("Switching to page {}", page);
        load_page(page);
    });

    view! {
        <div class="upload-history">
            <style>{include_str!("upload_history.css")}</style>
            <div class="history-filters">
                <BatchSearch
                    state=state
                    on_input=on_search_input
                    on_key=on_search_key
                    on_focus=on_search_focus
                    on_blur=on_search_blur
                    on_select=on_select
                />
                <FilterBar
                    state=state
                    options=options
                    on_location=on_location
                    on_panda=on_panda
                    on_clear=on_clear
                />
            </div>
            <FilterTags state=state on_remove=on_remove />
            <HistoryTable state=state translator=translator.clone() on_download=on_download />
            <PaginationControls
                state=state
                translator=translator
                window=page_window
                on_page=on_page
            />
        </div>
    }
}
