use leptos::prelude::*;

use crate::config::HistoryConfig;
use crate::download;
use crate::i18n::{LanguageManager, Translator};
use crate::pages::upload_history::UploadHistoryPage;

/// Root view. Wires the host page's globals into the history page.
#[component]
pub fn App(config: HistoryConfig) -> impl IntoView {
    provide_context(config);

    let translator = Translator::new(LanguageManager);
    let on_download = Callback::new(download::download_batch_report);

    view! {
        <main class="content">
            <UploadHistoryPage translator=translator on_download=on_download />
        </main>
    }
}
