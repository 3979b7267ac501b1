//! Session persistence in `localStorage`.
//!
//! The login page stores the access token and user record on successful
//! sign-in; the API client reads the token for the `Authorization` header.
//! There is no refresh or expiry handling — a rejected token simply sends
//! the user back through the login gate.

use serde::{Deserialize, Serialize};

use crate::net::types::User;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "tiffin_admin_session";

/// The persisted session record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user: User,
}

/// Load the stored session, if any. Returns `None` outside the browser or
/// when the stored value fails to parse.
pub fn load() -> Option<Session> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        let raw = storage.get_item(STORAGE_KEY).ok()??;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Persist the session after a successful sign-in.
pub fn save(session: &Session) {
    #[cfg(feature = "csr")]
    {
        if let Ok(raw) = serde_json::to_string(session) {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                let _ = storage.set_item(STORAGE_KEY, &raw);
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = session;
    }
}

/// Drop the session on logout.
pub fn clear() {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
