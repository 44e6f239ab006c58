//! Status Banner Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Shared message area; hidden when there is no current message
#[component]
pub fn StatusBanner() -> impl IntoView {
    let store = use_app_store();
    let message = move || store.status().read().visible().cloned();

    view! {
        <div
            id="message"
            class=move || message().map(|m| m.kind.class()).unwrap_or("hidden")
        >
            {move || message().map(|m| m.text).unwrap_or_default()}
        </div>
    }
}
