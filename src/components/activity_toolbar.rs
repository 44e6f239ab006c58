//! Activity Toolbar Component
//!
//! Search box, category filter and sort selector above the list.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};
use crate::view_model::{SortKey, SORT_OPTIONS};

#[component]
pub fn ActivityToolbar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div id="activity-toolbar" class="activity-toolbar">
            <input
                type="text"
                id="search-input"
                placeholder="Search activities..."
                prop:value=move || store.controls().read().search.clone()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    store.controls().update(|c| c.search = value);
                }
            />

            <select
                id="filter-select"
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    store.controls().update(|c| c.set_category_value(value));
                }
            >
                <For
                    each=move || store.categories().get()
                    key=|option| option.value.clone()
                    children=move |option| {
                        let value = option.value.clone();
                        let is_selected = move || {
                            store.controls().read().category.as_deref().unwrap_or("") == value
                        };
                        view! {
                            <option value=option.value prop:selected=is_selected>
                                {option.label}
                            </option>
                        }
                    }
                />
            </select>

            <select
                id="sort-select"
                on:change=move |ev| {
                    let sort = SortKey::from_value(&event_target_value(&ev));
                    store.controls().update(|c| c.sort = sort);
                }
            >
                {SORT_OPTIONS.iter().map(|(value, label)| {
                    let is_selected = move || store.controls().read().sort.as_value() == *value;
                    view! {
                        <option value=*value prop:selected=is_selected>{*label}</option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
