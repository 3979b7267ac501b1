#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Standard response envelope: a `data` payload plus an optional
/// human-readable message (mostly populated on errors and writes).
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default)]
    pub message: Option<String>,
}

/// Envelope for list endpoints, which additionally carry pagination.
#[derive(Clone, Debug, Deserialize)]
pub struct ListEnvelope<T> {
    pub data: Vec<T>,
    pub pagination: PageMeta,
}

/// Server-reported pagination metadata. Field names vary slightly per
/// endpoint, hence the aliases; the shape is consistent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PageMeta {
    #[serde(alias = "currentPage")]
    pub page: u64,
    #[serde(alias = "pageSize", alias = "perPage")]
    pub limit: u64,
    #[serde(alias = "totalItems", alias = "totalCount")]
    pub total: u64,
    #[serde(alias = "totalPages")]
    pub pages: u64,
}

/// A customer complaint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub title: String,
    pub reason: String,
    pub created_at: String,
}

/// A dish on the platform menu.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub price: f64,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub cuisine: String,
    pub prep_time_minutes: u32,
    pub calories: u32,
    #[serde(default)]
    pub dietary_options: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub available: bool,
}

/// Writable fields of a menu item, sent on create and update.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemDraft {
    pub title: String,
    pub images: Vec<String>,
    pub price: f64,
    pub short_description: String,
    pub description: String,
    pub category: String,
    pub cuisine: String,
    pub prep_time_minutes: u32,
    pub calories: u32,
    pub dietary_options: Vec<String>,
    pub tags: Vec<String>,
    pub available: bool,
}

impl MenuItemDraft {
    /// Pre-fill the form from an existing item for editing.
    pub fn from_item(item: &MenuItem) -> Self {
        Self {
            title: item.title.clone(),
            images: item.images.clone(),
            price: item.price,
            short_description: item.short_description.clone(),
            description: item.description.clone(),
            category: item.category.clone(),
            cuisine: item.cuisine.clone(),
            prep_time_minutes: item.prep_time_minutes,
            calories: item.calories,
            dietary_options: item.dietary_options.clone(),
            tags: item.tags.clone(),
            available: item.available,
        }
    }
}

/// A user who signed up with a referral code.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub referral_code: String,
    pub referred_at: String,
    #[serde(default)]
    pub referred_by: Option<ReferrerSummary>,
    #[serde(default)]
    pub subscription: Option<SubscriptionSummary>,
}

/// The user credited for a referral.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferrerSummary {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Active-subscription summary attached to a referral user, when present.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionSummary {
    pub plan: String,
    pub status: String,
    #[serde(default)]
    pub started_at: Option<String>,
}

/// Dashboard roles; drives post-login routing. Serialize is needed because
/// the role sits inside the persisted session record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Kitchen,
    Support,
}

/// The signed-in user record returned by the auth endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Successful sign-in payload: bearer token plus the user record.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub user: User,
}
