#[cfg(test)]
#[path = "paging_test.rs"]
mod paging_test;

use crate::net::types::PageMeta;

/// Pure pagination math over server-reported metadata.
///
/// The server owns the page/limit/total numbers; this only derives display
/// values and prev/next availability from them.
impl PageMeta {
    /// The inclusive item range shown on the current page, or `None` when
    /// the result set is empty.
    pub fn shown_range(&self) -> Option<(u64, u64)> {
        if self.total == 0 {
            return None;
        }
        let start = (self.page.saturating_sub(1)) * self.limit + 1;
        let end = (self.page * self.limit).min(self.total);
        Some((start, end))
    }

    /// "Showing X to Y of Z" label, or "No results".
    pub fn shown_label(&self) -> String {
        match self.shown_range() {
            Some((start, end)) => format!("Showing {start} to {end} of {}", self.total),
            None => "No results".to_owned(),
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.pages
    }
}
