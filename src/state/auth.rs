#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Role, User};

/// Authentication state tracking the current user and loading status.
///
/// `loading` is true while the persisted session is being restored on app
/// start, so pages can hold off the login redirect until it settles.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    pub fn signed_in(&self) -> bool {
        self.user.is_some()
    }
}

/// Landing route for a freshly authenticated user, keyed on their role.
///
/// Also used to bounce already-authenticated visitors off the login page.
pub fn post_login_route(role: Role) -> &'static str {
    match role {
        Role::Admin | Role::Support => "/",
        Role::Kitchen => "/menu",
    }
}
