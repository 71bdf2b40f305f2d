use leptos::prelude::*;

use crate::api::HistoryRow;
use crate::history::{HistoryState, TableBody};
use crate::i18n::{self, Translator};

const HEADERS: [&str; 10] = [
    "Upload Date",
    "Batch ID",
    "Location",
    "Panda Name",
    "Bahi Name",
    "Upload Type",
    "Images",
    "Approved",
    "Rejected",
    "Report",
];

/// The history table. Renders the filtered rows of the current page, or a
/// single message row while loading, on error, or when nothing matches.
#[component]
pub fn HistoryTable(
    state: RwSignal<HistoryState>,
    translator: Translator,
    /// Invoked with the batch id when a row's report button is clicked.
    on_download: Callback<String>,
) -> impl IntoView {
    let body = move || match state.with(|s| s.table_body()) {
        TableBody::Loading => message_row("Loading...".to_string(), "text-center text-muted"),
        TableBody::Error(msg) => message_row(msg, "text-center text-danger"),
        TableBody::Empty { filtered } => {
            let key = if filtered {
                i18n::NO_RESULTS_WITH_FILTERS
            } else {
                i18n::NO_RECORDS_FOUND
            };
            message_row(translator.t(key), "text-center")
        }
        TableBody::Rows => {
            let label = translator.t(i18n::DOWNLOAD_QC_REPORT);
            state
                .with(|s| s.filtered.clone())
                .into_iter()
                .map(|row| history_row(row, label.clone(), on_download))
                .collect_view()
                .into_any()
        }
    };

    view! {
        <div class="history-table-wrap">
            <style>{include_str!("history_table.css")}</style>
            <table class="history-table">
                <thead>
                    <tr>
                        {HEADERS.iter().map(|h| view! { <th>{*h}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody id="history-table-body">{body}</tbody>
            </table>
        </div>
    }
}

fn message_row(text: String, class: &'static str) -> AnyView {
    view! {
        <tr>
            <td colspan="10" class=class>{text}</td>
        </tr>
    }
    .into_any()
}

fn history_row(row: HistoryRow, label: String, on_download: Callback<String>) -> impl IntoView {
    let batch_id = row.batch_id.clone();
    view! {
        <tr>
            <td>{row.upload_date}</td>
            <td class="batch-id">{row.batch_id}</td>
            <td>{row.location}</td>
            <td>{row.pandas_name}</td>
            <td>{row.bahi_name}</td>
            <td>{row.upload_type}</td>
            <td class="num">{row.image_count}</td>
            <td class="num approved">{row.approved_count}</td>
            <td class="num rejected">{row.rejected_count}</td>
            <td>
                <button
                    class="btn btn-small btn-secondary"
                    on:click=move |_| on_download.run(batch_id.clone())
                >
                    {label}
                </button>
            </td>
        </tr>
    }
}
