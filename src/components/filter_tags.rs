//! Status line and removable tags for the filters in effect.

use leptos::prelude::*;

use crate::filters::FilterKey;
use crate::history::HistoryState;

#[component]
pub fn FilterTags(
    state: RwSignal<HistoryState>,
    /// Called when a tag's remove button is clicked.
    on_remove: Callback<FilterKey>,
) -> impl IntoView {
    let tags = move || {
        let active: Vec<(FilterKey, String)> = state.with(|s| {
            s.applied
                .active()
                .into_iter()
                .map(|(k, v)| (k, v.to_string()))
                .collect()
        });
        active
            .into_iter()
            .map(|(key, value)| {
                view! {
                    <div class="filter-tag">
                        {format!("{}: {}", key.label(), value)}
                        <button
                            class="filter-tag-remove"
                            title="Remove filter"
                            on:click=move |_| on_remove.run(key)
                        >
                            "\u{00D7}"
                        </button>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="filter-summary">
            <style>{include_str!("filter_tags.css")}</style>
            <div id="filter-status" class="filter-status">
                {move || state.with(|s| s.status_text())}
            </div>
            <div id="active-filters" class="active-filters">{tags}</div>
        </div>
    }
}
