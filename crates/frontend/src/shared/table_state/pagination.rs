use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Tables with at most this many pages show every page number
const MAX_PAGES_WITHOUT_ELLIPSIS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSpec {
    pub current_page: usize,
    pub items_per_page: usize,
    pub total_items: usize,
}

impl PageSpec {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
            total_items: 0,
        }
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.items_per_page).max(1)
    }

    /// No-op outside `1..=total_pages`.
    pub fn go_to(&mut self, page: usize) -> bool {
        if page < 1 || page > self.total_pages() || page == self.current_page {
            return false;
        }
        self.current_page = page;
        true
    }

    /// Ignores 0; otherwise resets to the first page.
    pub fn set_items_per_page(&mut self, items_per_page: usize) -> bool {
        if items_per_page == 0 {
            return false;
        }
        self.items_per_page = items_per_page;
        self.current_page = 1;
        true
    }

    /// Updates the item count and pulls the current page back into range.
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.current_page = self.current_page.clamp(1, self.total_pages());
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Positions of the current page's rows in the filtered collection
    pub fn range(&self) -> Range<usize> {
        let start = (self.current_page - 1) * self.items_per_page;
        let end = (start + self.items_per_page).min(self.total_items);
        start.min(end)..end
    }

    pub fn window(&self) -> Vec<PageItem> {
        page_window(self.current_page, self.total_pages())
    }
}

/// One slot of the page-number strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Page numbers to render: first and last page, three pages around the
/// current one, and a single ellipsis per hidden gap. Near an edge the
/// three-page window slides toward the other end. A gap of one page shows
/// that page instead of an ellipsis.
pub fn page_window(current: usize, total: usize) -> Vec<PageItem> {
    if total <= MAX_PAGES_WITHOUT_ELLIPSIS {
        return (1..=total).map(PageItem::Page).collect();
    }

    let current = current.clamp(1, total);
    let last_inner = total - 1;
    let end = (current.saturating_sub(1).max(2) + 2).min(last_inner);
    let start = end.saturating_sub(2).max(2);

    let mut items = vec![PageItem::Page(1)];
    match start {
        2 => {}
        3 => items.push(PageItem::Page(2)),
        _ => items.push(PageItem::Ellipsis),
    }
    items.extend((start..=end).map(PageItem::Page));
    match last_inner - end {
        0 => {}
        1 => items.push(PageItem::Page(last_inner)),
        _ => items.push(PageItem::Ellipsis),
    }
    items.push(PageItem::Page(total));
    items
}
