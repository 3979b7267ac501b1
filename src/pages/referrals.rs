//! Referrals page: searchable, sortable referral-user list.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::layout::AdminShell;
use crate::components::pagination::PaginationBar;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::fetch::FetchSeq;
use crate::state::referrals::{ReferralFilter, ReferralSortKey, ReferralsState};
use crate::state::ui::Toasts;

/// Referral tracking page.
///
/// The list state lives in an app-level context (not page-local) so the
/// detail page can reuse it as a cache.
#[component]
pub fn ReferralsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<Toasts>>();
    let state = expect_context::<RwSignal<ReferralsState>>();
    let navigate = use_navigate();

    {
        let navigate = navigate.clone();
        Effect::new(move || {
            let auth_state = auth.get();
            if !auth_state.loading && auth_state.user.is_none() {
                navigate("/login", NavigateOptions::default());
            }
        });
    }

    let filter = RwSignal::new(ReferralFilter::default());
    let seq = RwSignal::new(FetchSeq::default());

    Effect::new(move || {
        let current = filter.get();
        let ticket = seq.try_update(FetchSeq::begin).unwrap_or_default();
        state.update(|s| s.loading = true);

        leptos::task::spawn_local(async move {
            let result = api::list_referrals(&current).await;
            if !seq.with_untracked(|s| s.is_current(ticket)) {
                return;
            }
            state.update(|s| s.loading = false);
            match result {
                Ok(list) => state.update(|s| {
                    s.items = list.data;
                    s.meta = Some(list.pagination);
                }),
                Err(err) => {
                    log::error!("referrals fetch failed: {err}");
                    toasts.update(|t| {
                        t.error(err.user_message());
                    });
                }
            }
        });
    });

    let sort_header = move |label: &'static str, key: ReferralSortKey| {
        let indicator = move || {
            let current = filter.get();
            if current.sort_key == key {
                current.sort_dir.as_str()
            } else {
                ""
            }
        };
        view! {
            <th class="data-table__sortable" on:click=move |_| filter.update(|f| f.sort_by(key))>
                {label}
                <span class="data-table__sort-dir">{indicator}</span>
            </th>
        }
    };

    let meta = Signal::derive(move || state.get().meta);
    let on_page = Callback::new(move |page: u64| filter.update(|f| f.set_page(page)));

    view! {
        <AdminShell>
            <div class="referrals-page">
                <header class="page-header">
                    <h1>"Referrals"</h1>
                </header>

                <div class="filter-bar">
                    <input
                        class="filter-bar__input"
                        type="search"
                        placeholder="Search name or email"
                        prop:value=move || filter.get().search
                        on:input=move |ev| filter.update(|f| f.set_search(event_target_value(&ev)))
                    />
                    <select
                        class="filter-bar__select"
                        on:change=move |ev| {
                            let subscribed = match event_target_value(&ev).as_str() {
                                "subscribed" => Some(true),
                                "unsubscribed" => Some(false),
                                _ => None,
                            };
                            filter.update(|f| f.set_subscribed(subscribed));
                        }
                    >
                        <option value="all">"All users"</option>
                        <option value="subscribed">"With subscription"</option>
                        <option value="unsubscribed">"Without subscription"</option>
                    </select>
                </div>

                {move || {
                    let current = state.get();
                    if current.loading && current.items.is_empty() {
                        return view! { <p class="page-loading">"Loading referrals..."</p> }
                            .into_any();
                    }
                    if current.items.is_empty() {
                        return view! { <p class="page-empty">"No referral users found."</p> }
                            .into_any();
                    }
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    {sort_header("Name", ReferralSortKey::Name)}
                                    <th>"Email"</th>
                                    <th>"Code used"</th>
                                    <th>"Referred by"</th>
                                    <th>"Subscription"</th>
                                    {sort_header("Referred", ReferralSortKey::ReferredAt)}
                                </tr>
                            </thead>
                            <tbody>
                                {current
                                    .items
                                    .iter()
                                    .map(|user| {
                                        let id = user.id.clone();
                                        let name = user.name.clone();
                                        let email = user.email.clone();
                                        let code = user.referral_code.clone();
                                        let referrer = user
                                            .referred_by
                                            .as_ref()
                                            .map(|r| r.name.clone())
                                            .unwrap_or_else(|| "—".to_owned());
                                        let subscription = user
                                            .subscription
                                            .as_ref()
                                            .map(|s| format!("{} ({})", s.plan, s.status))
                                            .unwrap_or_else(|| "none".to_owned());
                                        let referred_at = user.referred_at.clone();
                                        let open = {
                                            let navigate = navigate.clone();
                                            move |_| {
                                                navigate(
                                                    &format!("/referrals/{id}"),
                                                    NavigateOptions::default(),
                                                );
                                            }
                                        };
                                        view! {
                                            <tr class="data-table__row--link" on:click=open>
                                                <td>{name}</td>
                                                <td>{email}</td>
                                                <td>{code}</td>
                                                <td>{referrer}</td>
                                                <td>{subscription}</td>
                                                <td>{referred_at}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }}

                <PaginationBar meta=meta on_page=on_page/>
            </div>
        </AdminShell>
    }
}
