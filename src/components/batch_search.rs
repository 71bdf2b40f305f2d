//! Batch-id search box with an autocomplete dropdown.

use leptos::either::Either;
use leptos::prelude::*;

use crate::autocomplete::{self, NavKey};
use crate::history::HistoryState;
use crate::timers;

#[component]
pub fn BatchSearch(
    state: RwSignal<HistoryState>,
    /// Raw input text on every keystroke.
    on_input: Callback<String>,
    /// A navigation key pressed while the dropdown is open.
    on_key: Callback<NavKey>,
    on_focus: Callback<()>,
    on_blur: Callback<()>,
    /// A suggestion was clicked.
    on_select: Callback<String>,
) -> impl IntoView {
    let container_ref = NodeRef::<leptos::html::Div>::new();

    // Close the dropdown when clicking anywhere outside the search container.
    Effect::new(move |_| {
        use wasm_bindgen::prelude::*;
        use wasm_bindgen::JsCast;

        let Some(container) = container_ref.get() else {
            return;
        };

        let closure = Closure::<dyn Fn(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
            let inside = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                .map(|node| container.contains(Some(&node)))
                .unwrap_or(false);
            if !inside && state.with_untracked(|s| s.autocomplete.visible) {
                state.update(|s| s.autocomplete.hide());
            }
        });

        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            let _ = document
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        }

        closure.forget();
    });

    // Keep the highlighted suggestion in view.
    Effect::new(move |_| {
        if state.with(|s| s.autocomplete.highlighted).is_none() {
            return;
        }
        timers::next_frame(|| {
            let item = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| {
                    d.query_selector("#autocomplete-dropdown .autocomplete-item.highlighted")
                        .ok()
                        .flatten()
                });
            if let Some(item) = item {
                let opts = web_sys::ScrollIntoViewOptions::new();
                opts.set_block(web_sys::ScrollLogicalPosition::Nearest);
                item.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        });
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let Some(key) = NavKey::from_key(&ev.key()) else {
            return;
        };
        if state.with_untracked(|s| s.autocomplete.visible) {
            ev.prevent_default();
            on_key.run(key);
        }
    };

    let dropdown = move || {
        let (query, items, highlighted) = state.with(|s| {
            (
                s.autocomplete.query.clone(),
                s.autocomplete.items.clone(),
                s.autocomplete.highlighted,
            )
        });

        if items.is_empty() {
            return view! {
                <div class="autocomplete-no-results">"No matching batch IDs found"</div>
            }
            .into_any();
        }

        items
            .into_iter()
            .enumerate()
            .map(|(index, batch_id)| {
                let segments = autocomplete::highlight(&batch_id, &query)
                    .into_iter()
                    .map(|seg| {
                        if seg.matched {
                            Either::Left(view! { <strong>{seg.text}</strong> })
                        } else {
                            Either::Right(seg.text)
                        }
                    })
                    .collect_view();
                let selected = batch_id.clone();
                let is_highlighted = highlighted == Some(index);
                let index_attr = index.to_string();
                view! {
                    <div
                        class="autocomplete-item"
                        class:highlighted=is_highlighted
                        data-batch-id=batch_id
                        data-index=index_attr
                        on:click=move |_| on_select.run(selected.clone())
                    >
                        {segments}
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="search-container" node_ref=container_ref>
            <style>{include_str!("batch_search.css")}</style>
            <input
                id="batch-search"
                type="text"
                class="input"
                placeholder="Search by Batch ID..."
                autocomplete="off"
                prop:value=move || state.with(|s| s.search_text.clone())
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:keydown=on_keydown
                on:focus=move |_| on_focus.run(())
                on:blur=move |_| on_blur.run(())
            />
            <div
                id="autocomplete-dropdown"
                class="autocomplete-dropdown"
                style:display=move || {
                    if state.with(|s| s.autocomplete.visible) { "block" } else { "none" }
                }
            >
                {dropdown}
            </div>
        </div>
    }
}
