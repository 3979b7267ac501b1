//! Login page: email/password sign-in with role-based redirect.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::state::auth::{AuthState, post_login_route};
use crate::state::ui::Toasts;
use crate::util::session::{self, Session};

/// Login page.
///
/// Already-authenticated visitors are bounced straight to their role's
/// landing page; a successful sign-in persists the session and does the
/// same via the auth signal.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<Toasts>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if !state.loading {
            if let Some(user) = state.user {
                navigate(post_login_route(user.role), NavigateOptions::default());
            }
        }
    });

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.is_empty() || pending.get_untracked() {
            return;
        }
        pending.set(true);

        leptos::task::spawn_local(async move {
            match api::sign_in(&email_value, &password_value).await {
                Ok(login) => {
                    session::save(&Session {
                        access_token: login.access_token,
                        user: login.user.clone(),
                    });
                    // The redirect effect above picks this up.
                    auth.set(AuthState {
                        user: Some(login.user),
                        loading: false,
                    });
                }
                Err(err) => {
                    pending.set(false);
                    toasts.update(|t| {
                        t.error(err.user_message());
                    });
                }
            }
        });
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            submit.run(());
        }
    };

    view! {
        <div class="login-page">
            <h1>"Tiffin Admin"</h1>
            <p>"Sign in to manage the platform"</p>
            <label class="login-page__label">
                "Email"
                <input
                    class="login-page__input"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
            </label>
            <label class="login-page__label">
                "Password"
                <input
                    class="login-page__input"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
            </label>
            <button
                class="btn btn--primary login-page__submit"
                disabled=move || pending.get()
                on:click=move |_| submit.run(())
            >
                {move || if pending.get() { "Signing in..." } else { "Sign in" }}
            </button>
        </div>
    }
}
