//! Browser utilities: session persistence and dark mode.

pub mod dark_mode;
pub mod session;
