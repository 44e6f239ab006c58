//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::ActivityStore;
use crate::status::{StatusMessage, StatusState};
use crate::view_model::{self, ControlState, SelectOption};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Activities from the last successful fetch
    pub activities: ActivityStore,
    /// Category filter options, recomputed per fetch (not per render)
    pub categories: Vec<SelectOption>,
    /// Search / sort / category controls
    pub controls: ControlState,
    /// At least one fetch has succeeded
    pub loaded: bool,
    /// The most recent fetch failed
    pub load_failed: bool,
    /// Shared status message area
    pub status: StatusState,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            categories: view_model::category_options(&ActivityStore::default()),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace all activities after a successful fetch
pub fn store_replace_activities(store: &AppStore, activities: ActivityStore) {
    let categories = view_model::category_options(&activities);
    store.controls().update(|c| c.retain_category(&categories));
    store.categories().set(categories);
    store.activities().set(activities);
    store.loaded().set(true);
    store.load_failed().set(false);
}

/// Record a failed fetch; activities keep their previous contents
pub fn store_mark_load_failed(store: &AppStore) {
    store.load_failed().set(true);
}

/// Show a status message, returning its hide ticket
pub fn store_show_status(store: &AppStore, message: StatusMessage) -> u64 {
    store.status().write().show(message)
}

/// Hide the status message if `ticket` is still current
pub fn store_expire_status(store: &AppStore, ticket: u64) {
    let hidden = store.status().try_update(|status| status.expire(ticket)).unwrap_or(false);
    if !hidden {
        log::debug!("[Status] Ticket {} superseded, message kept", ticket);
    }
}
