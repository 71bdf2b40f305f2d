use leptos::prelude::*;

use crate::history::HistoryState;
use crate::i18n::{self, Translator};
use crate::pagination::{self, PageItem};

/// Record range text and page links for the loaded page.
#[component]
pub fn PaginationControls(
    state: RwSignal<HistoryState>,
    translator: Translator,
    /// Pages of context shown on each side of the current page.
    window: u32,
    /// Called with the page number to load.
    on_page: Callback<u32>,
) -> impl IntoView {
    let visible = move || state.with(|s| s.pagination_visible());

    let info = {
        let translator = translator.clone();
        move || {
            state.with(|s| {
                pagination::info_text(
                    &translator.t(i18n::SHOWING_RECORDS),
                    &translator.t(i18n::OF),
                    s.current_page,
                    s.per_page,
                    s.pagination.total_records,
                )
            })
        }
    };

    let items = move || {
        let (current, items) = state.with(|s| {
            (
                s.current_page,
                pagination::page_items(s.current_page, &s.pagination, window),
            )
        });
        items
            .into_iter()
            .map(|item| page_link(item, current, &translator, on_page))
            .collect_view()
    };

    view! {
        <nav
            id="pagination-container"
            class="pagination-container"
            style:display=move || { if visible() { "block" } else { "none" } }
        >
            <style>{include_str!("pagination_controls.css")}</style>
            <div id="pagination-info-text" class="pagination-info">{info}</div>
            <ul id="pagination-controls" class="pagination">{items}</ul>
        </nav>
    }
}

fn page_link(
    item: PageItem,
    current: u32,
    translator: &Translator,
    on_page: Callback<u32>,
) -> impl IntoView {
    let target = item.click_target(current);
    let (label, class) = match &item {
        PageItem::Previous { enabled, .. } => (
            translator.t(i18n::PREVIOUS),
            if *enabled { "page-item" } else { "page-item disabled" },
        ),
        PageItem::Next { enabled, .. } => (
            translator.t(i18n::NEXT),
            if *enabled { "page-item" } else { "page-item disabled" },
        ),
        PageItem::Page { number, active } => (
            number.to_string(),
            if *active { "page-item active" } else { "page-item" },
        ),
        PageItem::Ellipsis => {
            return view! {
                <li class="page-item disabled">
                    <span class="page-link">"..."</span>
                </li>
            }
            .into_any();
        }
    };

    view! {
        <li class=class>
            <a
                class="page-link"
                href="#"
                on:click=move |ev| {
                    ev.prevent_default();
                    if let Some(page) = target {
                        on_page.run(page);
                    }
                }
            >
                {label}
            </a>
        </li>
    }
    .into_any()
}
