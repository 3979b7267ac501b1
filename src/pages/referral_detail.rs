//! Referral user detail page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::layout::AdminShell;
use crate::net::api;
use crate::net::types::ReferralUser;
use crate::state::auth::AuthState;
use crate::state::referrals::ReferralsState;
use crate::state::ui::Toasts;

/// Detail view for one referral user.
///
/// Serves from the cached list when the user is already there (normal
/// navigation from the referrals table); falls back to the single-user
/// endpoint for deep links or when the list has moved on.
#[component]
pub fn ReferralDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<Toasts>>();
    let referrals = expect_context::<RwSignal<ReferralsState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    {
        let navigate = navigate.clone();
        Effect::new(move || {
            let state = auth.get();
            if !state.loading && state.user.is_none() {
                navigate("/login", NavigateOptions::default());
            }
        });
    }

    let user = RwSignal::new(None::<ReferralUser>);
    let loading = RwSignal::new(false);

    Effect::new(move || {
        let Some(id) = params.get().get("id") else {
            return;
        };

        if let Some(cached) = referrals.with_untracked(|state| state.find_cached(&id).cloned()) {
            user.set(Some(cached));
            return;
        }

        loading.set(true);
        leptos::task::spawn_local(async move {
            let result = api::fetch_referral_user(&id).await;
            loading.set(false);
            match result {
                Ok(fetched) => user.set(Some(fetched)),
                Err(err) => {
                    log::error!("referral detail fetch failed: {err}");
                    toasts.update(|t| {
                        t.error(err.user_message());
                    });
                }
            }
        });
    });

    let back = {
        let navigate = navigate.clone();
        move |_| navigate("/referrals", NavigateOptions::default())
    };

    view! {
        <AdminShell>
            <div class="referral-detail-page">
                <header class="page-header">
                    <button class="btn" on:click=back>
                        "← Back to referrals"
                    </button>
                </header>

                {move || {
                    if loading.get() {
                        return view! { <p class="page-loading">"Loading referral..."</p> }
                            .into_any();
                    }
                    match user.get() {
                        Some(user) => {
                            let referrer = user
                                .referred_by
                                .as_ref()
                                .map(|r| format!("{} <{}>", r.name, r.email))
                                .unwrap_or_else(|| "—".to_owned());
                            let subscription = user
                                .subscription
                                .as_ref()
                                .map(|s| {
                                    let since = s
                                        .started_at
                                        .as_deref()
                                        .map(|d| format!(" since {d}"))
                                        .unwrap_or_default();
                                    format!("{} ({}){since}", s.plan, s.status)
                                })
                                .unwrap_or_else(|| "No active subscription".to_owned());
                            view! {
                                <div class="detail-card">
                                    <h1>{user.name.clone()}</h1>
                                    <dl class="detail-card__grid">
                                        <dt>"Email"</dt>
                                        <dd>{user.email.clone()}</dd>
                                        <dt>"Referral code used"</dt>
                                        <dd>{user.referral_code.clone()}</dd>
                                        <dt>"Referred"</dt>
                                        <dd>{user.referred_at.clone()}</dd>
                                        <dt>"Referred by"</dt>
                                        <dd>{referrer}</dd>
                                        <dt>"Subscription"</dt>
                                        <dd>{subscription}</dd>
                                    </dl>
                                </div>
                            }
                                .into_any()
                        }
                        None => view! { <p class="page-empty">"Referral user not found."</p> }
                            .into_any(),
                    }
                }}
            </div>
        </AdminShell>
    }
}
