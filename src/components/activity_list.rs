//! Activity List Component

use leptos::prelude::*;

use crate::actions::LOAD_FAILED;
use crate::components::ActivityCardView;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::view_model::BoardView;

/// Cards for the current board view, or the load state when there is none
#[component]
pub fn ActivityList(board: Memo<BoardView>) -> impl IntoView {
    let store = use_app_store();

    view! {
        <div id="activities-list">
            {move || {
                if store.load_failed().get() {
                    view! { <p>{LOAD_FAILED}</p> }.into_any()
                } else if !store.loaded().get() {
                    view! { <p>"Loading activities..."</p> }.into_any()
                } else {
                    board.get().cards
                        .into_iter()
                        .map(|card| view! { <ActivityCardView card=card /> })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}
