//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_stack::ToastStack;
use crate::pages::{
    broadcast::BroadcastPage, complaints::ComplaintsPage, login::LoginPage, menu::MenuPage,
    referral_detail::ReferralDetailPage, referrals::ReferralsPage,
};
use crate::state::referrals::ReferralsState;
use crate::state::{auth::AuthState, ui::Toasts, ui::UiState};
use crate::util::{dark_mode, session};

/// Root application component.
///
/// Restores the persisted session, provides the shared contexts (auth,
/// toasts, UI chrome), and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Session restore is synchronous (localStorage), so auth never stays
    // in the loading state past this point.
    let auth = RwSignal::new(AuthState {
        user: session::load().map(|s| s.user),
        loading: false,
    });

    let ui = RwSignal::new(UiState {
        dark_mode: dark_mode::read_preference(),
        sidebar_open: false,
    });
    dark_mode::apply(ui.get_untracked().dark_mode);

    let toasts = RwSignal::new(Toasts::default());

    // The referral list cache outlives its page so the detail view can
    // check it before hitting the single-user endpoint.
    let referrals = RwSignal::new(ReferralsState::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(toasts);
    provide_context(referrals);

    view! {
        <Title text="Tiffin Admin"/>

        <ToastStack/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=ComplaintsPage/>
                <Route path=StaticSegment("menu") view=MenuPage/>
                <Route path=StaticSegment("referrals") view=ReferralsPage/>
                <Route
                    path=(StaticSegment("referrals"), ParamSegment("id"))
                    view=ReferralDetailPage
                />
                <Route path=StaticSegment("broadcast") view=BroadcastPage/>
            </Routes>
        </Router>
    }
}
