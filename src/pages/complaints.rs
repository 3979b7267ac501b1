//! Complaints page: paginated list with phone/date filters and delete.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::layout::AdminShell;
use crate::components::pagination::PaginationBar;
use crate::net::api;
use crate::net::types::Complaint;
use crate::state::auth::AuthState;
use crate::state::complaints::{ComplaintFilter, ComplaintsState};
use crate::state::fetch::FetchSeq;
use crate::state::ui::{Toasts, finish_mutation};

/// Complaints page.
///
/// The filter signal drives fetching: any change (including the refetch
/// counter bumped after a successful delete) issues a new request, and the
/// sequence guard drops responses that were superseded in flight.
#[component]
pub fn ComplaintsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<Toasts>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let filter = RwSignal::new(ComplaintFilter::default());
    let state = RwSignal::new(ComplaintsState::default());
    let seq = RwSignal::new(FetchSeq::default());
    let reload = RwSignal::new(0u64);

    Effect::new(move || {
        let current = filter.get();
        reload.track();
        let ticket = seq.try_update(FetchSeq::begin).unwrap_or_default();
        state.update(|s| s.loading = true);

        leptos::task::spawn_local(async move {
            let result = api::list_complaints(&current).await;
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
                    log::error!("complaints fetch failed: {err}");
                    toasts.update(|t| {
                        t.error(err.user_message());
                    });
                }
            }
        });
    });

    let pending_delete = RwSignal::new(None::<Complaint>);

    let on_confirm_delete = Callback::new(move |()| {
        let Some(complaint) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);

        leptos::task::spawn_local(async move {
            let outcome = api::delete_complaint(&complaint.id)
                .await
                .map_err(|err| err.user_message());
            let refetch = toasts
                .try_update(|t| finish_mutation(outcome, "Complaint deleted", t))
                .unwrap_or(false);
            if refetch {
                reload.update(|n| *n += 1);
            }
        });
    });

    let meta = Signal::derive(move || state.get().meta);
    let on_page = Callback::new(move |page: u64| filter.update(|f| f.set_page(page)));

    view! {
        <AdminShell>
            <div class="complaints-page">
                <header class="page-header">
                    <h1>"Complaints"</h1>
                </header>

                <div class="filter-bar">
                    <input
                        class="filter-bar__input"
                        type="search"
                        placeholder="Filter by phone number"
                        prop:value=move || filter.get().phone
                        on:input=move |ev| filter.update(|f| f.set_phone(event_target_value(&ev)))
                    />
                    <label class="filter-bar__label">
                        "From"
                        <input
                            class="filter-bar__input"
                            type="date"
                            prop:value=move || filter.get().from
                            on:input=move |ev| {
                                filter.update(|f| f.set_from(event_target_value(&ev)));
                            }
                        />
                    </label>
                    <label class="filter-bar__label">
                        "To"
                        <input
                            class="filter-bar__input"
                            type="date"
                            prop:value=move || filter.get().to
                            on:input=move |ev| filter.update(|f| f.set_to(event_target_value(&ev)))
                        />
                    </label>
                </div>

                {move || {
                    let current = state.get();
                    if current.loading && current.items.is_empty() {
                        return view! { <p class="page-loading">"Loading complaints..."</p> }
                            .into_any();
                    }
                    if current.items.is_empty() {
                        return view! { <p class="page-empty">"No complaints found."</p> }
                            .into_any();
                    }
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Phone"</th>
                                    <th>"Title"</th>
                                    <th>"Reason"</th>
                                    <th>"Received"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {current
                                    .items
                                    .iter()
                                    .map(|complaint| {
                                        let name = complaint.name.clone();
                                        let phone = complaint.phone.clone();
                                        let title = complaint.title.clone();
                                        let reason = complaint.reason.clone();
                                        let created_at = complaint.created_at.clone();
                                        let row = complaint.clone();
                                        view! {
                                            <tr>
                                                <td>{name}</td>
                                                <td>{phone}</td>
                                                <td>{title}</td>
                                                <td class="data-table__wrap">{reason}</td>
                                                <td>{created_at}</td>
                                                <td>
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click=move |_| pending_delete.set(Some(row.clone()))
                                                    >
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </tbody>
                        </table>

                        <div class="card-list">
                            {current
                                .items
                                .iter()
                                .map(|complaint| {
                                    let title = complaint.title.clone();
                                    let who = format!("{} · {}", complaint.name, complaint.phone);
                                    let reason = complaint.reason.clone();
                                    let created_at = complaint.created_at.clone();
                                    let card = complaint.clone();
                                    view! {
                                        <div class="card">
                                            <div class="card__title">{title}</div>
                                            <div class="card__line">{who}</div>
                                            <div class="card__body">{reason}</div>
                                            <div class="card__footer">
                                                <span>{created_at}</span>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| pending_delete.set(Some(card.clone()))
                                                >
                                                    "Delete"
                                                </button>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }}

                <PaginationBar meta=meta on_page=on_page/>

                <Show when=move || pending_delete.get().is_some()>
                    <ConfirmDialog
                        title="Delete complaint"
                        message="This removes the complaint permanently. Continue?"
                        confirm_label="Delete"
                        on_confirm=on_confirm_delete
                        on_cancel=Callback::new(move |()| pending_delete.set(None))
                    />
                </Show>
            </div>
        </AdminShell>
    }
}
