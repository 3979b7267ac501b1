//! Create/edit form for menu items, shown in a modal dialog.

use leptos::prelude::*;

use crate::net::types::MenuItemDraft;

/// Dietary options offered as checkboxes.
pub const DIETARY_OPTIONS: [&str; 5] = [
    "vegetarian",
    "vegan",
    "jain",
    "gluten-free",
    "dairy-free",
];

/// Modal form over a [`MenuItemDraft`] owned by the page, so the same form
/// serves both create and edit.
#[component]
pub fn MenuItemForm(
    draft: RwSignal<MenuItemDraft>,
    #[prop(into)] heading: String,
    #[prop(into)] submit_label: String,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let can_submit = move || !draft.get().title.trim().is_empty();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>{heading}</h2>

                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || draft.get().title
                        on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                    />
                </label>

                <div class="dialog__row">
                    <label class="dialog__label">
                        "Price"
                        <input
                            class="dialog__input"
                            type="number"
                            step="0.01"
                            prop:value=move || draft.get().price.to_string()
                            on:input=move |ev| {
                                draft.update(|d| {
                                    d.price = event_target_value(&ev).parse().unwrap_or(0.0);
                                });
                            }
                        />
                    </label>
                    <label class="dialog__label">
                        "Prep time (min)"
                        <input
                            class="dialog__input"
                            type="number"
                            prop:value=move || draft.get().prep_time_minutes.to_string()
                            on:input=move |ev| {
                                draft.update(|d| {
                                    d.prep_time_minutes =
                                        event_target_value(&ev).parse().unwrap_or(0);
                                });
                            }
                        />
                    </label>
                    <label class="dialog__label">
                        "Calories"
                        <input
                            class="dialog__input"
                            type="number"
                            prop:value=move || draft.get().calories.to_string()
                            on:input=move |ev| {
                                draft.update(|d| {
                                    d.calories = event_target_value(&ev).parse().unwrap_or(0);
                                });
                            }
                        />
                    </label>
                </div>

                <div class="dialog__row">
                    <label class="dialog__label">
                        "Category"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || draft.get().category
                            on:input=move |ev| {
                                draft.update(|d| d.category = event_target_value(&ev));
                            }
                        />
                    </label>
                    <label class="dialog__label">
                        "Cuisine"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || draft.get().cuisine
                            on:input=move |ev| {
                                draft.update(|d| d.cuisine = event_target_value(&ev));
                            }
                        />
                    </label>
                </div>

                <label class="dialog__label">
                    "Short description"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || draft.get().short_description
                        on:input=move |ev| {
                            draft.update(|d| d.short_description = event_target_value(&ev));
                        }
                    />
                </label>

                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input"
                        prop:value=move || draft.get().description
                        on:input=move |ev| {
                            draft.update(|d| d.description = event_target_value(&ev));
                        }
                    ></textarea>
                </label>

                <label class="dialog__label">
                    "Image URLs (one per line)"
                    <textarea
                        class="dialog__input"
                        prop:value=move || draft.get().images.join("\n")
                        on:input=move |ev| {
                            draft.update(|d| d.images = split_lines(&event_target_value(&ev)));
                        }
                    ></textarea>
                </label>

                <fieldset class="dialog__fieldset">
                    <legend>"Dietary options"</legend>
                    {DIETARY_OPTIONS
                        .into_iter()
                        .map(|option| {
                            view! {
                                <label class="dialog__check">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            draft.get().dietary_options.iter().any(|d| d == option)
                                        }
                                        on:change=move |_| {
                                            draft.update(|d| toggle_entry(&mut d.dietary_options, option));
                                        }
                                    />
                                    {option}
                                </label>
                            }
                        })
                        .collect::<Vec<_>>()}
                </fieldset>

                <label class="dialog__label">
                    "Tags (comma separated)"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || draft.get().tags.join(", ")
                        on:input=move |ev| {
                            draft.update(|d| d.tags = split_commas(&event_target_value(&ev)));
                        }
                    />
                </label>

                <label class="dialog__check">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.get().available
                        on:change=move |_| draft.update(|d| d.available = !d.available)
                    />
                    "Available for ordering"
                </label>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || !can_submit()
                        on:click=move |_| on_submit.run(())
                    >
                        {submit_label}
                    </button>
                </div>
            </div>
        </div>
    }
}

fn split_lines(value: &str) -> Vec<String> {
    value
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn split_commas(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn toggle_entry(entries: &mut Vec<String>, entry: &str) {
    if let Some(pos) = entries.iter().position(|e| e == entry) {
        entries.remove(pos);
    } else {
        entries.push(entry.to_owned());
    }
}
