use crate::api::PaginationInfo;

/// One entry in the pagination control list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageItem {
    Previous { target: u32, enabled: bool },
    Page { number: u32, active: bool },
    Ellipsis,
    Next { target: u32, enabled: bool },
}

impl PageItem {
    /// The page to load when this item is clicked, if the click does anything.
    pub fn click_target(&self, current: u32) -> Option<u32> {
        let target = match *self {
            PageItem::Previous { target, enabled } | PageItem::Next { target, enabled } => {
                if !enabled {
                    return None;
                }
                target
            }
            PageItem::Page { number, active } => {
                if active {
                    return None;
                }
                number
            }
            PageItem::Ellipsis => return None,
        };
        (target >= 1 && target != current).then_some(target)
    }
}

/// Whether the pagination block should be shown at all.
pub fn is_visible(info: &PaginationInfo) -> bool {
    info.total_records > 0 && info.total_pages > 1
}

/// First and last record number shown on `page`, clamped to the total.
pub fn record_range(page: u32, per_page: u32, total_records: u64) -> (u64, u64) {
    let page = u64::from(page.max(1));
    let per_page = u64::from(per_page);
    let start = (page - 1) * per_page + 1;
    let end = (page * per_page).min(total_records);
    (start, end)
}

/// "Showing records 11-20 of 25", with the two words supplied translated.
pub fn info_text(
    showing: &str,
    of: &str,
    page: u32,
    per_page: u32,
    total_records: u64,
) -> String {
    let (start, end) = record_range(page, per_page, total_records);
    format!("{} {}-{} {} {}", showing, start, end, of, total_records)
}

/// Build the control list: Previous, a window of `radius` pages either side
/// of `current`, boundary links with elision, Next.
pub fn page_items(current: u32, info: &PaginationInfo, radius: u32) -> Vec<PageItem> {
    let total = info.total_pages;
    let mut items = vec![PageItem::Previous {
        target: current.saturating_sub(1),
        enabled: info.has_prev,
    }];

    let start = current.saturating_sub(radius).max(1);
    let end = current.saturating_add(radius).min(total);

    if start > 1 {
        items.push(PageItem::Page {
            number: 1,
            active: false,
        });
        if start > 2 {
            items.push(PageItem::Ellipsis);
        }
    }

    for number in start..=end {
        items.push(PageItem::Page {
            number,
            active: number == current,
        });
    }

    if end < total {
        if end + 1 < total {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page {
            number: total,
            active: false,
        });
    }

    items.push(PageItem::Next {
        target: current.saturating_add(1),
        enabled: info.has_next,
    });
    items
}
