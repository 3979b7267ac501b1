#[cfg(test)]
#[path = "complaints_test.rs"]
mod complaints_test;

use crate::net::types::{Complaint, PageMeta};

pub const DEFAULT_LIMIT: u64 = 10;

/// Query state for the complaints list.
///
/// Setters other than [`ComplaintFilter::set_page`] reset to the first page,
/// since a changed filter makes the old page number meaningless.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComplaintFilter {
    pub phone: String,
    pub from: String,
    pub to: String,
    pub page: u64,
    pub limit: u64,
}

impl Default for ComplaintFilter {
    fn default() -> Self {
        Self {
            phone: String::new(),
            from: String::new(),
            to: String::new(),
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ComplaintFilter {
    pub fn set_phone(&mut self, phone: String) {
        self.phone = phone;
        self.page = 1;
    }

    /// `from`/`to` are ISO dates as entered in the date inputs.
    pub fn set_from(&mut self, from: String) {
        self.from = from;
        self.page = 1;
    }

    pub fn set_to(&mut self, to: String) {
        self.to = to;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: u64) {
        self.page = page.max(1);
    }

    /// Outgoing query parameters; blank filter fields are omitted entirely
    /// rather than sent as empty strings.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if !self.phone.trim().is_empty() {
            pairs.push(("phone", self.phone.trim().to_owned()));
        }
        if !self.from.trim().is_empty() {
            pairs.push(("from", self.from.trim().to_owned()));
        }
        if !self.to.trim().is_empty() {
            pairs.push(("to", self.to.trim().to_owned()));
        }
        pairs
    }
}

/// Last successful fetch for the current filter; replaced wholesale on every
/// refetch, never patched locally.
#[derive(Clone, Debug, Default)]
pub struct ComplaintsState {
    pub items: Vec<Complaint>,
    pub meta: Option<PageMeta>,
    pub loading: bool,
}
