//! Activity Card Component
//!
//! One activity with availability and its participants. Each participant has
//! a remove button that unregisters them.

use leptos::prelude::*;

use crate::actions::{self, Action};
use crate::context::use_app_context;
use crate::view_model::{ActivityCard, ParticipantRow, NO_PARTICIPANTS};

#[component]
pub fn ActivityCardView(card: ActivityCard) -> impl IntoView {
    let participants = if card.participants.is_empty() {
        view! { <p><em>{NO_PARTICIPANTS}</em></p> }.into_any()
    } else {
        view! {
            <div class="participants-section">
                <h5>"Participants:"</h5>
                <ul class="participants-list">
                    {card.participants
                        .into_iter()
                        .map(|row| view! { <ParticipantItem row=row /> })
                        .collect_view()}
                </ul>
            </div>
        }.into_any()
    };

    view! {
        <div class="activity-card">
            <h4>{card.name}</h4>
            <p>{card.description}</p>
            <p><strong>"Schedule:"</strong> " " {card.schedule}</p>
            <p><strong>"Availability:"</strong> " " {format!("{} spots left", card.spots_left)}</p>
            <div class="participants-container">
                {participants}
            </div>
        </div>
    }
}

#[component]
fn ParticipantItem(row: ParticipantRow) -> impl IntoView {
    let ctx = use_app_context();
    let email = row.email.clone();

    let on_remove = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let action = Action::Unregister {
            activity: row.activity.clone(),
            email: row.email.clone(),
        };
        actions::dispatch(ctx, action, || {});
    };

    view! {
        <li>
            <span class="participant-email">{email}</span>
            <button class="delete-btn" title="Unregister" on:click=on_remove>"❌"</button>
        </li>
    }
}
