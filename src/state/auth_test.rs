use super::*;

fn user(role: Role) -> User {
    User {
        id: "u-1".to_owned(),
        name: "Asha".to_owned(),
        email: "asha@example.com".to_owned(),
        role,
    }
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn default_state_is_signed_out_and_not_loading() {
    let state = AuthState::default();
    assert!(!state.signed_in());
    assert!(!state.loading);
}

#[test]
fn signed_in_when_user_present() {
    let state = AuthState {
        user: Some(user(Role::Admin)),
        loading: false,
    };
    assert!(state.signed_in());
}

// =============================================================
// post_login_route
// =============================================================

#[test]
fn admin_lands_on_complaints() {
    assert_eq!(post_login_route(Role::Admin), "/");
}

#[test]
fn support_lands_on_complaints() {
    assert_eq!(post_login_route(Role::Support), "/");
}

#[test]
fn kitchen_lands_on_menu() {
    assert_eq!(post_login_route(Role::Kitchen), "/menu");
}
