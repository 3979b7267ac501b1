#[cfg(test)]
#[path = "referrals_test.rs"]
mod referrals_test;

use super::SortDir;
use crate::net::types::{PageMeta, ReferralUser};

pub const DEFAULT_LIMIT: u64 = 10;

/// Sort keys accepted by the referrals list endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReferralSortKey {
    #[default]
    ReferredAt,
    Name,
}

impl ReferralSortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ReferredAt => "referredAt",
            Self::Name => "name",
        }
    }
}

/// Query state for the referral-user list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferralFilter {
    pub search: String,
    /// `Some(true)` = active subscription only, `Some(false)` = none.
    pub subscribed: Option<bool>,
    pub sort_key: ReferralSortKey,
    pub sort_dir: SortDir,
    pub page: u64,
    pub limit: u64,
}

impl Default for ReferralFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            subscribed: None,
            sort_key: ReferralSortKey::default(),
            sort_dir: SortDir::Desc,
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ReferralFilter {
    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.page = 1;
    }

    pub fn set_subscribed(&mut self, subscribed: Option<bool>) {
        self.subscribed = subscribed;
        self.page = 1;
    }

    pub fn sort_by(&mut self, key: ReferralSortKey) {
        if self.sort_key == key {
            self.sort_dir = self.sort_dir.toggled();
        } else {
            self.sort_key = key;
            self.sort_dir = SortDir::Asc;
        }
        self.page = 1;
    }

    pub fn set_page(&mut self, page: u64) {
        self.page = page.max(1);
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
            ("sortBy", self.sort_key.as_str().to_owned()),
            ("order", self.sort_dir.as_str().to_owned()),
        ];
        if !self.search.trim().is_empty() {
            pairs.push(("search", self.search.trim().to_owned()));
        }
        if let Some(subscribed) = self.subscribed {
            pairs.push(("subscribed", subscribed.to_string()));
        }
        pairs
    }
}

/// Last successful fetch for the current filter. The detail page checks this
/// cache before falling back to the single-user endpoint.
#[derive(Clone, Debug, Default)]
pub struct ReferralsState {
    pub items: Vec<ReferralUser>,
    pub meta: Option<PageMeta>,
    pub loading: bool,
}

impl ReferralsState {
    pub fn find_cached(&self, id: &str) -> Option<&ReferralUser> {
        self.items.iter().find(|user| user.id == id)
    }
}
