//! Transient toast notifications.

use leptos::prelude::*;

use crate::state::ui::{ToastKind, Toasts};

#[cfg(feature = "csr")]
const AUTO_DISMISS_MS: u32 = 4000;

/// Toast stack pinned to a corner of the viewport.
///
/// Renders every queued toast with a manual dismiss button and, in the
/// browser, schedules a timed auto-dismiss for each new toast exactly once.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<Toasts>>();

    // Highest toast id already given a timer; toasts arrive with strictly
    // increasing ids.
    let scheduled = RwSignal::new(0u64);

    Effect::new(move || {
        let items = toasts.get().items;

        #[cfg(feature = "csr")]
        {
            for toast in &items {
                if toast.id <= scheduled.get_untracked() {
                    continue;
                }
                scheduled.set(toast.id);
                let id = toast.id;
                leptos::task::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(AUTO_DISMISS_MS).await;
                    toasts.update(|t| t.dismiss(id));
                });
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&items, scheduled);
        }
    });

    view! {
        <div class="toast-stack">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let class = match toast.kind {
                            ToastKind::Success => "toast toast--success",
                            ToastKind::Error => "toast toast--error",
                        };
                        let id = toast.id;
                        view! {
                            <div class=class>
                                <span class="toast__message">{toast.message}</span>
                                <button
                                    class="toast__close"
                                    on:click=move |_| toasts.update(|t| t.dismiss(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
