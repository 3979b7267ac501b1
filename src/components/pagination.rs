//! Pagination bar: range label plus prev/next controls.

use leptos::prelude::*;

use crate::net::types::PageMeta;

/// Renders "Showing X to Y of Z" with prev/next buttons.
///
/// Purely presentational — emits the requested page through `on_page` and
/// never fetches. Prev is disabled on the first page, next on the last.
#[component]
pub fn PaginationBar(
    #[prop(into)] meta: Signal<Option<PageMeta>>,
    #[prop(into)] on_page: Callback<u64>,
) -> impl IntoView {
    view! {
        {move || {
            meta.get()
                .map(|meta| {
                    view! {
                        <div class="pagination">
                            <span class="pagination__label">{meta.shown_label()}</span>
                            <div class="pagination__controls">
                                <button
                                    class="btn pagination__prev"
                                    disabled=!meta.has_prev()
                                    on:click=move |_| on_page.run(meta.page - 1)
                                >
                                    "Previous"
                                </button>
                                <span class="pagination__page">
                                    {format!("Page {} of {}", meta.page, meta.pages.max(1))}
                                </span>
                                <button
                                    class="btn pagination__next"
                                    disabled=!meta.has_next()
                                    on:click=move |_| on_page.run(meta.page + 1)
                                >
                                    "Next"
                                </button>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
