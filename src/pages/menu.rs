//! Menu page: item grid with CRUD, availability toggle, and rich filters.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::layout::AdminShell;
use crate::components::menu_form::{DIETARY_OPTIONS, MenuItemForm};
use crate::components::pagination::PaginationBar;
use crate::net::api;
use crate::net::types::{MenuItem, MenuItemDraft};
use crate::state::auth::AuthState;
use crate::state::fetch::FetchSeq;
use crate::state::menu::{MenuFilter, MenuSortKey, MenuState};
use crate::state::ui::{Toasts, finish_mutation};

/// Which item the editor dialog is working on.
#[derive(Clone, Debug)]
enum Editor {
    Create,
    Edit(String),
}

/// Menu management page.
#[component]
pub fn MenuPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<Toasts>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let filter = RwSignal::new(MenuFilter::default());
    let state = RwSignal::new(MenuState::default());
    let seq = RwSignal::new(FetchSeq::default());
    let reload = RwSignal::new(0u64);

    Effect::new(move || {
        let current = filter.get();
        reload.track();
        let ticket = seq.try_update(FetchSeq::begin).unwrap_or_default();
        state.update(|s| s.loading = true);

        leptos::task::spawn_local(async move {
            let result = api::list_menu(&current).await;
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
                    log::error!("menu fetch failed: {err}");
                    toasts.update(|t| {
                        t.error(err.user_message());
                    });
                }
            }
        });
    });

    let refetch = move || reload.update(|n| *n += 1);

    let editor = RwSignal::new(None::<Editor>);
    let draft = RwSignal::new(MenuItemDraft::default());
    let pending_delete = RwSignal::new(None::<MenuItem>);

    let open_create = move |_| {
        draft.set(MenuItemDraft {
            available: true,
            ..MenuItemDraft::default()
        });
        editor.set(Some(Editor::Create));
    };

    let on_submit = Callback::new(move |()| {
        let Some(mode) = editor.get_untracked() else {
            return;
        };
        let payload = draft.get_untracked();

        leptos::task::spawn_local(async move {
            let (outcome, success_message) = match &mode {
                Editor::Create => (
                    api::create_menu_item(&payload).await,
                    "Menu item created",
                ),
                Editor::Edit(id) => (
                    api::update_menu_item(id, &payload).await,
                    "Menu item updated",
                ),
            };
            let outcome = outcome.map_err(|err| err.user_message());
            let ok = toasts
                .try_update(|t| finish_mutation(outcome, success_message, t))
                .unwrap_or(false);
            if ok {
                // Keep the dialog (and its contents) open on failure.
                editor.set(None);
                refetch();
            }
        });
    });

    let on_toggle_availability = move |item: &MenuItem| {
        let id = item.id.clone();
        let next = !item.available;

        leptos::task::spawn_local(async move {
            let outcome = api::set_menu_availability(&id, next)
                .await
                .map_err(|err| err.user_message());
            let message = if next {
                "Item marked available"
            } else {
                "Item marked unavailable"
            };
            let ok = toasts
                .try_update(|t| finish_mutation(outcome, message, t))
                .unwrap_or(false);
            if ok {
                refetch();
            }
        });
    };

    let on_confirm_delete = Callback::new(move |()| {
        let Some(item) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);

        leptos::task::spawn_local(async move {
            let outcome = api::delete_menu_item(&item.id)
                .await
                .map_err(|err| err.user_message());
            let ok = toasts
                .try_update(|t| finish_mutation(outcome, "Menu item deleted", t))
                .unwrap_or(false);
            if ok {
                refetch();
            }
        });
    });

    let meta = Signal::derive(move || state.get().meta);
    let on_page = Callback::new(move |page: u64| filter.update(|f| f.set_page(page)));

    view! {
        <AdminShell>
            <div class="menu-page">
                <header class="page-header">
                    <h1>"Menu"</h1>
                    <button class="btn btn--primary" on:click=open_create>
                        "+ New Item"
                    </button>
                </header>

                <div class="filter-bar">
                    <input
                        class="filter-bar__input"
                        type="search"
                        placeholder="Search dishes"
                        prop:value=move || filter.get().search
                        on:input=move |ev| filter.update(|f| f.set_search(event_target_value(&ev)))
                    />
                    <input
                        class="filter-bar__input"
                        type="text"
                        placeholder="Category"
                        prop:value=move || filter.get().category
                        on:input=move |ev| {
                            filter.update(|f| f.set_category(event_target_value(&ev)));
                        }
                    />
                    <input
                        class="filter-bar__input"
                        type="text"
                        placeholder="Cuisine"
                        prop:value=move || filter.get().cuisine
                        on:input=move |ev| filter.update(|f| f.set_cuisine(event_target_value(&ev)))
                    />
                    <input
                        class="filter-bar__input"
                        type="text"
                        placeholder="Tags (comma separated)"
                        prop:value=move || filter.get().tags.join(", ")
                        on:input=move |ev| {
                            let tags = event_target_value(&ev)
                                .split(',')
                                .map(str::trim)
                                .filter(|t| !t.is_empty())
                                .map(ToOwned::to_owned)
                                .collect();
                            filter.update(|f| f.set_tags(tags));
                        }
                    />
                    <select
                        class="filter-bar__select"
                        on:change=move |ev| {
                            let available = match event_target_value(&ev).as_str() {
                                "available" => Some(true),
                                "unavailable" => Some(false),
                                _ => None,
                            };
                            filter.update(|f| f.set_available(available));
                        }
                    >
                        <option value="all">"All items"</option>
                        <option value="available">"Available"</option>
                        <option value="unavailable">"Unavailable"</option>
                    </select>
                    <select
                        class="filter-bar__select"
                        on:change=move |ev| {
                            let key = match event_target_value(&ev).as_str() {
                                "title" => MenuSortKey::Title,
                                "price" => MenuSortKey::Price,
                                "calories" => MenuSortKey::Calories,
                                _ => MenuSortKey::Created,
                            };
                            filter.update(|f| f.sort_by(key));
                        }
                    >
                        <option value="created">"Newest"</option>
                        <option value="title">"Title"</option>
                        <option value="price">"Price"</option>
                        <option value="calories">"Calories"</option>
                    </select>
                </div>

                <div class="filter-bar filter-bar--checks">
                    {DIETARY_OPTIONS
                        .into_iter()
                        .map(|option| {
                            view! {
                                <label class="filter-bar__check">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            filter.get().dietary.iter().any(|d| d == option)
                                        }
                                        on:change=move |_| {
                                            filter.update(|f| f.toggle_dietary(option));
                                        }
                                    />
                                    {option}
                                </label>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                {move || {
                    let current = state.get();
                    if current.loading && current.items.is_empty() {
                        return view! { <p class="page-loading">"Loading menu..."</p> }.into_any();
                    }
                    if current.items.is_empty() {
                        return view! { <p class="page-empty">"No menu items found."</p> }
                            .into_any();
                    }
                    view! {
                        <div class="menu-grid">
                            {current
                                .items
                                .iter()
                                .map(|item| {
                                    let title = item.title.clone();
                                    let line = format!("{} · {}", item.category, item.cuisine);
                                    let facts = format!(
                                        "₹{:.2} · {} kcal · {} min",
                                        item.price, item.calories, item.prep_time_minutes,
                                    );
                                    let summary = item.short_description.clone();
                                    let tags = item.tags.join(", ");
                                    let available = item.available;
                                    let badge = if available {
                                        "badge badge--on"
                                    } else {
                                        "badge badge--off"
                                    };
                                    let for_toggle = item.clone();
                                    let for_edit = item.clone();
                                    let for_delete = item.clone();
                                    view! {
                                        <div class="menu-card">
                                            <div class="menu-card__header">
                                                <span class="menu-card__title">{title}</span>
                                                <span class=badge>
                                                    {if available { "Available" } else { "Unavailable" }}
                                                </span>
                                            </div>
                                            <div class="menu-card__line">{line}</div>
                                            <div class="menu-card__facts">{facts}</div>
                                            <div class="menu-card__summary">{summary}</div>
                                            <div class="menu-card__tags">{tags}</div>
                                            <div class="menu-card__actions">
                                                <button
                                                    class="btn"
                                                    on:click=move |_| on_toggle_availability(&for_toggle)
                                                >
                                                    {if available { "Disable" } else { "Enable" }}
                                                </button>
                                                <button
                                                    class="btn"
                                                    on:click=move |_| {
                                                        draft.set(MenuItemDraft::from_item(&for_edit));
                                                        editor.set(Some(Editor::Edit(for_edit.id.clone())));
                                                    }
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| {
                                                        pending_delete.set(Some(for_delete.clone()));
                                                    }
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

                {move || {
                    editor.get().map(|mode| {
                        let heading = match mode {
                            Editor::Create => "New menu item",
                            Editor::Edit(_) => "Edit menu item",
                        };
                        view! {
                            <MenuItemForm
                                draft=draft
                                heading=heading
                                submit_label="Save"
                                on_submit=on_submit
                                on_cancel=Callback::new(move |()| editor.set(None))
                            />
                        }
                    })
                }}

                <Show when=move || pending_delete.get().is_some()>
                    <ConfirmDialog
                        title="Delete menu item"
                        message="This removes the item from the menu permanently. Continue?"
                        confirm_label="Delete"
                        on_confirm=on_confirm_delete
                        on_cancel=Callback::new(move |()| pending_delete.set(None))
                    />
                </Show>
            </div>
        </AdminShell>
    }
}
