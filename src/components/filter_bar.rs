use leptos::prelude::*;

use crate::api::FilterOptions;
use crate::history::HistoryState;

/// Location and panda-name dropdowns plus the clear-all button.
#[component]
pub fn FilterBar(
    state: RwSignal<HistoryState>,
    options: ReadSignal<FilterOptions>,
    on_location: Callback<String>,
    on_panda: Callback<String>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let location_options = move || option_views(options.with(|o| o.location_choices()));
    let panda_options = move || option_views(options.with(|o| o.panda_name_choices()));

    view! {
        <div class="filter-bar">
            <style>{include_str!("filter_bar.css")}</style>
            <select
                id="location-filter"
                class="input"
                prop:value=move || state.with(|s| s.filters.location.clone())
                on:change=move |ev| on_location.run(event_target_value(&ev))
            >
                <option value="">"All Locations"</option>
                {location_options}
            </select>
            <select
                id="panda-filter"
                class="input"
                prop:value=move || state.with(|s| s.filters.panda_name.clone())
                on:change=move |ev| on_panda.run(event_target_value(&ev))
            >
                <option value="">"All Panda Names"</option>
                {panda_options}
            </select>
            <button
                id="clear-filters"
                class="btn btn-secondary"
                on:click=move |_| on_clear.run(())
            >
                "Clear Filters"
            </button>
        </div>
    }
}

fn option_views(values: Vec<String>) -> impl IntoView {
    values
        .into_iter()
        .map(|v| {
            let label = v.clone();
            view! { <option value=v>{label}</option> }
        })
        .collect_view()
}
