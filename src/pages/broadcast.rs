//! Broadcast page: compose and send a push notification to all users.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::layout::AdminShell;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::broadcast::{BODY_MAX, BroadcastForm, TITLE_MAX};
use crate::state::ui::Toasts;

/// Broadcast composer.
///
/// Validation runs client-side before any network call; success clears the
/// form, failure leaves it intact so the draft is not lost.
#[component]
pub fn BroadcastPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<Toasts>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let form = RwSignal::new(BroadcastForm::default());
    let sending = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if sending.get_untracked() {
            return;
        }
        let current = form.get_untracked();
        if let Err(invalid) = current.validate() {
            toasts.update(|t| {
                t.error(invalid.message());
            });
            return;
        }
        sending.set(true);

        leptos::task::spawn_local(async move {
            let result = api::send_broadcast(current.title.trim(), current.body.trim()).await;
            sending.set(false);
            match result {
                Ok(()) => {
                    form.set(BroadcastForm::default());
                    toasts.update(|t| {
                        t.success("Broadcast sent to all users");
                    });
                }
                Err(err) => {
                    toasts.update(|t| {
                        t.error(err.user_message());
                    });
                }
            }
        });
    });

    view! {
        <AdminShell>
            <div class="broadcast-page">
                <header class="page-header">
                    <h1>"Broadcast notification"</h1>
                </header>
                <p class="broadcast-page__hint">
                    "Sent as a push notification to every user on the platform."
                </p>

                <label class="broadcast-page__label">
                    "Title"
                    <input
                        class="broadcast-page__input"
                        type="text"
                        maxlength=TITLE_MAX.to_string()
                        prop:value=move || form.get().title
                        on:input=move |ev| form.update(|f| f.set_title(event_target_value(&ev)))
                    />
                    <span class="broadcast-page__counter">
                        {move || format!("{} characters left", form.get().title_remaining())}
                    </span>
                </label>

                <label class="broadcast-page__label">
                    "Message"
                    <textarea
                        class="broadcast-page__input broadcast-page__body"
                        maxlength=BODY_MAX.to_string()
                        prop:value=move || form.get().body
                        on:input=move |ev| form.update(|f| f.set_body(event_target_value(&ev)))
                    ></textarea>
                    <span class="broadcast-page__counter">
                        {move || format!("{} characters left", form.get().body_remaining())}
                    </span>
                </label>

                <button
                    class="btn btn--primary broadcast-page__send"
                    disabled=move || sending.get()
                    on:click=move |_| submit.run(())
                >
                    {move || if sending.get() { "Sending..." } else { "Send broadcast" }}
                </button>
            </div>
        </AdminShell>
    }
}
