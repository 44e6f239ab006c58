//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::ApiClient;
use crate::config::AppConfig;
use crate::status::StatusMessage;
use crate::store::{store_expire_status, store_show_status, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to refetch activities; read by the fetch effect in `App`
    set_reload_trigger: WriteSignal<u32>,
    pub store: AppStore,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(
        set_reload_trigger: WriteSignal<u32>,
        store: AppStore,
        config: AppConfig,
    ) -> Self {
        Self {
            set_reload_trigger,
            store,
            config: StoredValue::new(config),
        }
    }

    /// Trigger a full refetch of activities
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Client for the configured API origin
    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.config.with_value(|c| c.api_base.clone()))
    }

    /// Show a status message and hide it after the configured delay,
    /// unless a newer message replaced it first
    pub fn show_status(&self, message: StatusMessage) {
        let store = self.store;
        let delay_ms = self.config.with_value(|c| c.status_hide_ms);
        let ticket = store_show_status(&store, message);
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            store_expire_status(&store, ticket);
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
