//! Batch-id suggestions for the search box.

use regex::RegexBuilder;

use crate::api::HistoryRow;

/// Distinct batch ids from `rows` containing `query` (case-insensitive),
/// in first-seen order, at most `limit` of them.
pub fn candidates(rows: &[HistoryRow], query: &str, limit: usize) -> Vec<String> {
    let needle = query.to_lowercase();
    let mut out: Vec<String> = Vec::new();
    for row in rows {
        if out.len() >= limit {
            break;
        }
        if row.batch_id.to_lowercase().contains(&needle) && !out.contains(&row.batch_id) {
            out.push(row.batch_id.clone());
        }
    }
    out
}

/// A run of suggestion text, emphasized when it matched the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub matched: bool,
}

/// Split `text` into runs, marking every case-insensitive match of `query`.
///
/// The query is used as a pattern without escaping, so metacharacters keep
/// their regex meaning. A query that does not compile yields one plain run.
pub fn highlight(text: &str, query: &str) -> Vec<Segment> {
    let plain = || {
        vec![Segment {
            text: text.to_string(),
            matched: false,
        }]
    };
    if query.is_empty() {
        return plain();
    }

    let re = match RegexBuilder::new(&format!("({})", query))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re,
        Err(e) => {
            tracing::debug!("Not highlighting '{}': {}", query, e);
            return plain();
        }
    };

    let mut segments = Vec::new();
    let mut last = 0;
    for m in re.find_iter(text) {
        if m.start() == m.end() {
            continue;
        }
        if m.start() > last {
            segments.push(Segment {
                text: text[last..m.start()].to_string(),
                matched: false,
            });
        }
        segments.push(Segment {
            text: m.as_str().to_string(),
            matched: true,
        });
        last = m.end();
    }
    if last < text.len() {
        segments.push(Segment {
            text: text[last..].to_string(),
            matched: false,
        });
    }
    if segments.is_empty() {
        return plain();
    }
    segments
}

/// Keys the suggestion list reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Enter,
    Escape,
}

impl NavKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "Up" => Some(NavKey::Up),
            "ArrowDown" | "Down" => Some(NavKey::Down),
            "Enter" => Some(NavKey::Enter),
            "Escape" | "Esc" => Some(NavKey::Escape),
            _ => None,
        }
    }
}

/// What the page must do after a handled key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Highlight moved; nothing else to do.
    Moved,
    /// Pick this batch id as the filter.
    Select(String),
    /// List closed; re-run filtering with the typed text.
    Submit,
    /// List closed; input untouched.
    Dismissed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutocompleteState {
    pub visible: bool,
    pub query: String,
    pub items: Vec<String>,
    pub highlighted: Option<usize>,
}

impl AutocompleteState {
    pub fn show(&mut self, query: &str, items: Vec<String>) {
        self.query = query.to_string();
        self.items = items;
        self.visible = true;
        self.highlighted = None;
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.highlighted = None;
    }

    pub fn highlighted_item(&self) -> Option<&str> {
        self.highlighted
            .and_then(|i| self.items.get(i))
            .map(String::as_str)
    }

    /// Move the highlight one step, wrapping at both ends.
    pub fn move_down(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        });
    }

    pub fn move_up(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            Some(i) if i > 0 && i <= len - 1 => i - 1,
            _ => len - 1,
        });
    }

    /// Apply a key press. Returns `None` when the list is hidden, in which
    /// case the key keeps its default browser behavior.
    pub fn handle_key(&mut self, key: NavKey) -> Option<KeyOutcome> {
        if !self.visible {
            return None;
        }
        let outcome = match key {
            NavKey::Down => {
                self.move_down();
                KeyOutcome::Moved
            }
            NavKey::Up => {
                self.move_up();
                KeyOutcome::Moved
            }
            NavKey::Enter => match self.highlighted_item() {
                Some(id) => KeyOutcome::Select(id.to_string()),
                None => {
                    self.hide();
                    KeyOutcome::Submit
                }
            },
            NavKey::Escape => {
                self.hide();
                KeyOutcome::Dismissed
            }
        };
        Some(outcome)
    }
}
