//! Dashboard pages, one per route.

pub mod broadcast;
pub mod complaints;
pub mod login;
pub mod menu;
pub mod referral_detail;
pub mod referrals;
