//! Activity Board App
//!
//! Root component: owns the store, refetches on every reload trigger and
//! derives the board view from (activities × controls).

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{ActivityList, ActivityToolbar, SignupForm, StatusBanner};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::{store_mark_load_failed, store_replace_activities, AppState, AppStateStoreFields};
use crate::view_model;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let store = Store::new(AppState::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new(set_reload_trigger, store, config);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Fetch on mount and after every successful action
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let client = ctx.client();
        log::info!("[APP] Loading activities, trigger={}", trigger);
        spawn_local(async move {
            match commands::list_activities(&client).await {
                Ok(loaded) => {
                    log::info!("[APP] Loaded {} activities", loaded.len());
                    store_replace_activities(&store, loaded);
                }
                Err(e) => {
                    log::error!("[APP] Error fetching activities: {}", e);
                    store_mark_load_failed(&store);
                }
            }
        });
    });

    let board = Memo::new(move |_| {
        let activities = store.activities().read();
        let controls = store.controls().read();
        view_model::render(&activities, &controls)
    });
    let options = Memo::new(move |_| board.with(|b| b.options.clone()));

    view! {
        <header>
            <h1>"Activity Board"</h1>
            <h2>"Extracurricular Activities"</h2>
        </header>

        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityToolbar />
                <ActivityList board=board />
            </section>

            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm options=options />
                <StatusBanner />
            </section>
        </main>
    }
}
