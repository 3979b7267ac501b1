//! Reusable UI components shared across pages.

pub mod confirm_dialog;
pub mod layout;
pub mod menu_form;
pub mod pagination;
pub mod toast_stack;
