//! State of the upload-history view.
//!
//! Every user action is a method on [`HistoryState`]; the page component calls
//! it inside a signal update and the view re-renders from the result.

use crate::api::{HistoryPage, HistoryRow, PaginationInfo};
use crate::autocomplete::{self, AutocompleteState};
use crate::filters::{self, ActiveFilters, FilterKey};

/// What the table body shows when there are no rows to list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    Loading,
    Error(String),
    Empty { filtered: bool },
    Rows,
}

#[derive(Debug, Clone, Default)]
pub struct HistoryState {
    /// Rows of the currently loaded page.
    pub all: Vec<HistoryRow>,
    /// `all` narrowed by `applied`.
    pub filtered: Vec<HistoryRow>,
    /// Filter values as typed/selected, updated on every event.
    pub filters: ActiveFilters,
    /// Filter values at the last recomputation; drives status and tags.
    pub applied: ActiveFilters,
    pub current_page: u32,
    pub per_page: u32,
    pub pagination: PaginationInfo,
    /// Raw text of the batch search box.
    pub search_text: String,
    pub autocomplete: AutocompleteState,
    pub suggestion_limit: usize,
    loaded: bool,
    error: Option<String>,
    pagination_failed: bool,
}

impl HistoryState {
    pub fn new(per_page: u32, suggestion_limit: usize) -> Self {
        Self {
            current_page: 1,
            per_page,
            suggestion_limit,
            ..Default::default()
        }
    }

    // -- Loading --

    /// Replace the page data with a fresh server response.
    pub fn page_loaded(&mut self, page: u32, data: HistoryPage) {
        self.all = data.history;
        self.current_page = page;
        self.pagination = data.pagination;
        self.loaded = true;
        self.error = None;
        self.pagination_failed = false;
        self.perform_search();
    }

    /// Record a failed page load. Rows already held are kept for later
    /// re-filtering but the table shows only the error. The load has
    /// settled either way, so a later re-filter never falls back to the
    /// loading row.
    pub fn page_failed(&mut self, message: impl Into<String>) {
        self.loaded = true;
        self.error = Some(message.into());
        self.pagination_failed = true;
    }

    // -- Filtering --

    /// Recompute `filtered` from `all` and the current filters.
    pub fn perform_search(&mut self) {
        self.filtered = self.filters.apply(&self.all);
        self.applied = self.filters.clone();
        self.error = None;
    }

    /// Store the search box text. The batch-id filter takes the trimmed
    /// value; recomputation is left to the debounce.
    pub fn set_search_text(&mut self, raw: &str) {
        self.search_text = raw.to_string();
        self.filters.batch_id = raw.trim().to_string();
    }

    pub fn set_location(&mut self, value: &str) {
        self.filters.location = value.to_string();
        self.perform_search();
    }

    pub fn set_panda_name(&mut self, value: &str) {
        self.filters.panda_name = value.to_string();
        self.perform_search();
    }

    /// Clear one filter and its form control, then re-filter.
    pub fn remove_filter(&mut self, key: FilterKey) {
        self.filters.clear(key);
        if key == FilterKey::BatchId {
            self.search_text.clear();
        }
        self.perform_search();
    }

    /// Empty every control and filter. The caller reloads page 1.
    pub fn clear_all(&mut self) {
        self.search_text.clear();
        self.filters = ActiveFilters::default();
        self.autocomplete.hide();
    }

    // -- Autocomplete --

    /// Debounce fired: re-filter and show or hide suggestions.
    pub fn debounce_fired(&mut self) {
        self.perform_search();
        let query = self.filters.batch_id.clone();
        if query.is_empty() {
            self.autocomplete.hide();
        } else {
            self.show_suggestions(&query);
        }
    }

    pub fn show_suggestions(&mut self, query: &str) {
        let items = autocomplete::candidates(&self.all, query, self.suggestion_limit);
        self.autocomplete.show(query, items);
    }

    /// Focus on the search box reopens suggestions for existing text.
    pub fn search_focused(&mut self) {
        let query = self.search_text.trim().to_string();
        if !query.is_empty() {
            self.show_suggestions(&query);
        }
    }

    pub fn select_suggestion(&mut self, batch_id: &str) {
        self.search_text = batch_id.to_string();
        self.filters.batch_id = batch_id.to_string();
        self.perform_search();
        self.autocomplete.hide();
    }

    // -- Derived view data --

    pub fn table_body(&self) -> TableBody {
        if let Some(err) = &self.error {
            return TableBody::Error(err.clone());
        }
        if !self.loaded {
            return TableBody::Loading;
        }
        if self.filtered.is_empty() {
            return TableBody::Empty {
                filtered: self.applied.has_active(),
            };
        }
        TableBody::Rows
    }

    pub fn status_text(&self) -> String {
        filters::status_text(
            self.filtered.len(),
            self.pagination.total_records,
            &self.applied,
        )
    }

    pub fn pagination_visible(&self) -> bool {
        !self.pagination_failed && crate::pagination::is_visible(&self.pagination)
    }
}
