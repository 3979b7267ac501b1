//! # tiffin-admin
//!
//! Leptos + WASM administrative dashboard for the tiffin delivery platform.
//! Provides complaint triage, menu management, referral tracking, broadcast
//! push notifications, and an email/password authentication gate.
//!
//! This crate contains pages, components, application state, and the REST
//! client for the platform backend. Browser-only dependencies sit behind the
//! `csr` feature so the state layer compiles and tests natively.

pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

mod app;
pub use app::App;

/// WASM entry point — mounts the dashboard into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(App);
}
