//! Dashboard shell: sidebar navigation and topbar.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::{dark_mode, session};

/// Sidebar + topbar chrome wrapped around every authenticated page.
#[component]
pub fn AdminShell(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let on_toggle_dark = move |_| {
        ui.update(|state| state.dark_mode = dark_mode::toggle(state.dark_mode));
    };

    let on_toggle_sidebar = move |_| {
        ui.update(|state| state.sidebar_open = !state.sidebar_open);
    };

    let on_logout = move |_| {
        session::clear();
        auth.set(AuthState::default());
        navigate("/login", NavigateOptions::default());
    };

    let sidebar_class = move || {
        if ui.get().sidebar_open {
            "shell__sidebar shell__sidebar--open"
        } else {
            "shell__sidebar"
        }
    };

    let user_name = move || {
        auth.get()
            .user
            .map(|user| user.name)
            .unwrap_or_default()
    };

    view! {
        <div class="shell">
            <aside class=sidebar_class>
                <div class="shell__brand">"Tiffin Admin"</div>
                <nav class="shell__nav">
                    <A href="/">"Complaints"</A>
                    <A href="/menu">"Menu"</A>
                    <A href="/referrals">"Referrals"</A>
                    <A href="/broadcast">"Broadcast"</A>
                </nav>
            </aside>
            <div class="shell__main">
                <header class="shell__topbar">
                    <button class="btn shell__menu-toggle" on:click=on_toggle_sidebar>
                        "☰"
                    </button>
                    <span class="shell__spacer"></span>
                    <span class="shell__user">{user_name}</span>
                    <button class="btn shell__dark-toggle" on:click=on_toggle_dark>
                        {move || if ui.get().dark_mode { "Light" } else { "Dark" }}
                    </button>
                    <button class="btn shell__logout" on:click=on_logout>
                        "Log out"
                    </button>
                </header>
                <main class="shell__content">{children()}</main>
            </div>
        </div>
    }
}
