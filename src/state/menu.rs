#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use super::SortDir;
use crate::net::types::{MenuItem, PageMeta};

pub const DEFAULT_LIMIT: u64 = 12;

/// Sort keys accepted by the menu list endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuSortKey {
    #[default]
    Created,
    Title,
    Price,
    Calories,
}

impl MenuSortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "createdAt",
            Self::Title => "title",
            Self::Price => "price",
            Self::Calories => "calories",
        }
    }
}

/// Query state for the menu list. Multi-value fields (dietary options, tags)
/// go out comma-joined; everything except page navigation resets the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuFilter {
    pub search: String,
    pub category: String,
    pub cuisine: String,
    pub dietary: Vec<String>,
    pub tags: Vec<String>,
    pub available: Option<bool>,
    pub sort_key: MenuSortKey,
    pub sort_dir: SortDir,
    pub page: u64,
    pub limit: u64,
}

impl Default for MenuFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: String::new(),
            cuisine: String::new(),
            dietary: Vec::new(),
            tags: Vec::new(),
            available: None,
            sort_key: MenuSortKey::default(),
            sort_dir: SortDir::default(),
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl MenuFilter {
    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.page = 1;
    }

    pub fn set_category(&mut self, category: String) {
        self.category = category;
        self.page = 1;
    }

    pub fn set_cuisine(&mut self, cuisine: String) {
        self.cuisine = cuisine;
        self.page = 1;
    }

    /// Add or remove a dietary option (checkbox semantics).
    pub fn toggle_dietary(&mut self, option: &str) {
        if let Some(pos) = self.dietary.iter().position(|d| d == option) {
            self.dietary.remove(pos);
        } else {
            self.dietary.push(option.to_owned());
        }
        self.page = 1;
    }

    /// Replace the tag filter wholesale (free-text entry).
    pub fn set_tags(&mut self, tags: Vec<String>) {
        self.tags = tags;
        self.page = 1;
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
        } else {
            self.tags.push(tag.to_owned());
        }
        self.page = 1;
    }

    pub fn set_available(&mut self, available: Option<bool>) {
        self.available = available;
        self.page = 1;
    }

    /// Clicking the active sort key flips direction; a new key starts
    /// ascending.
    pub fn sort_by(&mut self, key: MenuSortKey) {
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
        if !self.category.trim().is_empty() {
            pairs.push(("category", self.category.trim().to_owned()));
        }
        if !self.cuisine.trim().is_empty() {
            pairs.push(("cuisine", self.cuisine.trim().to_owned()));
        }
        if !self.dietary.is_empty() {
            pairs.push(("dietary", self.dietary.join(",")));
        }
        if !self.tags.is_empty() {
            pairs.push(("tags", self.tags.join(",")));
        }
        if let Some(available) = self.available {
            pairs.push(("available", available.to_string()));
        }
        pairs
    }
}

/// Last successful fetch for the current filter.
#[derive(Clone, Debug, Default)]
pub struct MenuState {
    pub items: Vec<MenuItem>,
    pub meta: Option<PageMeta>,
    pub loading: bool,
}
