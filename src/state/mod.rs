//! Application state: plain structs and pure page logic.
//!
//! Pages hold these in `RwSignal`s; everything here is deliberately free of
//! browser types so filter/pagination/validation rules test natively.

pub mod auth;
pub mod broadcast;
pub mod complaints;
pub mod fetch;
pub mod menu;
pub mod paging;
pub mod referrals;
pub mod ui;

/// Sort direction shared by every sortable list filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    /// Wire value for the `order` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}
