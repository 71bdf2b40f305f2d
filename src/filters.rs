//! Page-local filtering of history rows.
//!
//! Filters only narrow the rows already fetched for the current page; they
//! never trigger a fetch and never change the server totals.

use crate::api::HistoryRow;

/// Identifies one of the three filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    BatchId,
    Location,
    PandaName,
}

impl FilterKey {
    pub const ALL: [FilterKey; 3] = [
        FilterKey::BatchId,
        FilterKey::Location,
        FilterKey::PandaName,
    ];

    /// Label shown on the active-filter tag.
    pub fn label(self) -> &'static str {
        match self {
            FilterKey::BatchId => "Batch ID",
            FilterKey::Location => "Location",
            FilterKey::PandaName => "Panda Name",
        }
    }
}

/// The current filter values. An empty string means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveFilters {
    pub batch_id: String,
    pub location: String,
    pub panda_name: String,
}

impl ActiveFilters {
    pub fn get(&self, key: FilterKey) -> &str {
        match key {
            FilterKey::BatchId => &self.batch_id,
            FilterKey::Location => &self.location,
            FilterKey::PandaName => &self.panda_name,
        }
    }

    pub fn set(&mut self, key: FilterKey, value: impl Into<String>) {
        let value = value.into();
        match key {
            FilterKey::BatchId => self.batch_id = value,
            FilterKey::Location => self.location = value,
            FilterKey::PandaName => self.panda_name = value,
        }
    }

    pub fn clear(&mut self, key: FilterKey) {
        self.set(key, String::new());
    }

    /// Non-empty filters in display order.
    pub fn active(&self) -> Vec<(FilterKey, &str)> {
        FilterKey::ALL
            .iter()
            .map(|&k| (k, self.get(k)))
            .filter(|(_, v)| !v.is_empty())
            .collect()
    }

    pub fn active_count(&self) -> usize {
        self.active().len()
    }

    pub fn has_active(&self) -> bool {
        self.active_count() > 0
    }

    /// True when the row satisfies all three constraints.
    pub fn matches(&self, row: &HistoryRow) -> bool {
        let batch_match = self.batch_id.is_empty()
            || row
                .batch_id
                .to_lowercase()
                .contains(&self.batch_id.to_lowercase());
        let location_match = self.location.is_empty() || row.location == self.location;
        let panda_match = self.panda_name.is_empty() || row.pandas_name == self.panda_name;

        batch_match && location_match && panda_match
    }

    /// Apply the filters to `rows`, preserving order.
    pub fn apply(&self, rows: &[HistoryRow]) -> Vec<HistoryRow> {
        rows.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

/// The status line, e.g. "Showing 3 of 42 records (2 filters applied)".
pub fn status_text(shown: usize, total_records: u64, filters: &ActiveFilters) -> String {
    let mut text = format!("Showing {} of {} records", shown, total_records);
    let count = filters.active_count();
    if count > 0 {
        text.push_str(&format!(
            " ({} filter{} applied)",
            count,
            if count == 1 { "" } else { "s" }
        ));
    }
    text
}
