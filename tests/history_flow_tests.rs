use upload_history::api::{parse_history_page, HistoryPage, HistoryRow, PaginationInfo};
use upload_history::autocomplete::{KeyOutcome, NavKey};
use upload_history::filters::FilterKey;
use upload_history::history::{HistoryState, TableBody};
use upload_history::pagination::{self, PageItem};

fn row(batch_id: &str, location: &str, panda: &str) -> HistoryRow {
    HistoryRow {
        upload_date: "Mon, 03 Jun 2024 10:15:00 GMT".to_string(),
        batch_id: batch_id.to_string(),
        location: location.to_string(),
        pandas_name: panda.to_string(),
        bahi_name: "B-1".to_string(),
        upload_type: "bulk".to_string(),
        image_count: 20,
        approved_count: 15,
        rejected_count: 5,
    }
}

fn page(rows: Vec<HistoryRow>, page: u32, total_records: u64) -> HistoryPage {
    let total_pages = ((total_records + 9) / 10) as u32;
    HistoryPage {
        history: rows,
        pagination: PaginationInfo {
            page: Some(page),
            per_page: Some(10),
            total_records,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        },
    }
}

fn first_page() -> HistoryPage {
    page(
        vec![
            row("PUNE_2024_001", "Pune", "Ravi"),
            row("PUNE_2024_002", "Pune", "Asha"),
            row("DEL_2024_001", "Delhi", "Ravi"),
            row("pune_2024_003", "pune", "Ravi"),
        ],
        1,
        25,
    )
}

fn loaded() -> HistoryState {
    let mut state = HistoryState::new(10, 10);
    state.page_loaded(1, first_page());
    state
}

#[test]
fn test_combined_filters_and_status() {
    let mut state = loaded();
    state.set_search_text("pune");
    state.debounce_fired();
    assert_eq!(state.filtered.len(), 3, "Batch id match ignores case");

    state.set_location("Pune");
    let ids: Vec<&str> = state.filtered.iter().map(|r| r.batch_id.as_str()).collect();
    assert_eq!(ids, vec!["PUNE_2024_001", "PUNE_2024_002"]);

    state.set_panda_name("Asha");
    assert_eq!(state.filtered.len(), 1);
    assert_eq!(
        state.status_text(),
        "Showing 1 of 25 records (3 filters applied)",
        "Totals stay the server's unfiltered count"
    );
}

#[test]
fn test_remove_tag_clears_control() {
    let mut state = loaded();
    state.set_search_text("DEL");
    state.debounce_fired();
    state.set_location("Delhi");
    assert_eq!(state.applied.active_count(), 2);

    state.remove_filter(FilterKey::BatchId);
    assert_eq!(state.search_text, "");
    assert_eq!(state.applied.active(), vec![(FilterKey::Location, "Delhi")]);
    assert_eq!(state.filtered.len(), 1);

    state.remove_filter(FilterKey::Location);
    assert_eq!(state.filters.location, "");
    assert_eq!(state.filtered, state.all);
}

#[test]
fn test_clear_all_then_reload_restores_page() {
    let mut state = loaded();
    state.set_search_text("2024_00");
    state.debounce_fired();
    state.set_panda_name("Ravi");
    assert!(state.autocomplete.visible);

    state.clear_all();
    assert_eq!(state.search_text, "");
    assert!(!state.filters.has_active());
    assert!(!state.autocomplete.visible);

    state.page_loaded(1, first_page());
    assert_eq!(state.filtered, state.all);
    assert_eq!(state.status_text(), "Showing 4 of 25 records");
}

#[test]
fn test_switching_pages_discards_previous_rows() {
    let mut state = loaded();
    state.page_loaded(2, page(vec![row("NEXT_1", "Goa", "Asha")], 2, 25));
    assert_eq!(state.all.len(), 1);
    assert_eq!(state.current_page, 2);
    assert_eq!(
        pagination::info_text("Showing records", "of", state.current_page, state.per_page, 25),
        "Showing records 11-20 of 25"
    );
}

#[test]
fn test_keyboard_selection_sets_exact_filter() {
    let mut state = loaded();
    state.set_search_text("2024_00");
    state.debounce_fired();
    assert_eq!(
        state.autocomplete.items,
        vec!["PUNE_2024_001", "PUNE_2024_002", "DEL_2024_001", "pune_2024_003"]
    );

    state.autocomplete.handle_key(NavKey::Up);
    let outcome = state.autocomplete.handle_key(NavKey::Enter);
    assert_eq!(outcome, Some(KeyOutcome::Select("pune_2024_003".to_string())));

    state.select_suggestion("pune_2024_003");
    assert_eq!(state.search_text, "pune_2024_003");
    assert_eq!(state.filters.batch_id, "pune_2024_003");
    assert!(!state.autocomplete.visible);
    assert_eq!(state.filtered.len(), 1);
}

#[test]
fn test_focus_reopens_suggestions() {
    let mut state = loaded();
    state.search_focused();
    assert!(!state.autocomplete.visible, "Empty box shows nothing on focus");

    state.set_search_text("del");
    state.search_focused();
    assert!(state.autocomplete.visible);
    assert_eq!(state.autocomplete.items, vec!["DEL_2024_001"]);
    assert_eq!(state.autocomplete.highlighted, None);
}

#[test]
fn test_no_suggestions_for_unknown_query() {
    let mut state = loaded();
    state.set_search_text("zzz");
    state.debounce_fired();
    assert!(state.autocomplete.visible);
    assert!(state.autocomplete.items.is_empty());
    assert_eq!(state.table_body(), TableBody::Empty { filtered: true });
}

#[test]
fn test_load_failure_replaces_table() {
    let mut state = loaded();
    state.page_failed("Failed to load upload history data");
    assert_eq!(
        state.table_body(),
        TableBody::Error("Failed to load upload history data".to_string())
    );
    assert!(!state.pagination_visible());

    state.page_loaded(1, first_page());
    assert!(state.pagination_visible());
    assert_eq!(state.table_body(), TableBody::Rows);
}

#[test]
fn test_refilter_after_failed_first_load_settles() {
    let mut state = HistoryState::new(10, 10);
    state.page_failed("Failed to load upload history data");

    state.set_location("Pune");
    assert_eq!(state.table_body(), TableBody::Empty { filtered: true });
    assert!(!state.pagination_visible());

    state.remove_filter(FilterKey::Location);
    assert_eq!(
        state.table_body(),
        TableBody::Empty { filtered: false },
        "No filters left, so the plain no-records row shows"
    );
}

#[test]
fn test_first_page_controls_from_server_json() {
    let body = r#"{"history": [], "pagination": {"page": 1, "per_page": 10,
        "total_records": 45, "total_pages": 5, "has_next": true, "has_prev": false}}"#;
    let data = parse_history_page(body).expect("Should parse");

    let items = pagination::page_items(1, &data.pagination, 2);
    assert_eq!(
        items,
        vec![
            PageItem::Previous { target: 0, enabled: false },
            PageItem::Page { number: 1, active: true },
            PageItem::Page { number: 2, active: false },
            PageItem::Page { number: 3, active: false },
            PageItem::Ellipsis,
            PageItem::Page { number: 5, active: false },
            PageItem::Next { target: 2, enabled: true },
        ]
    );
}
