//! Sign-up Form Component
//!
//! Email plus activity selection. The selection offers the same activities
//! the list currently shows.

use leptos::prelude::*;

use crate::actions;
use crate::context::use_app_context;
use crate::view_model::SelectOption;

#[component]
pub fn SignupForm(options: Memo<Vec<SelectOption>>) -> impl IntoView {
    let ctx = use_app_context();

    let (email, set_email) = signal(String::new());
    let (activity, set_activity) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let checked = options.with(|opts| actions::validate_signup(opts, &activity.get(), &email.get()));
        match checked {
            Ok(action) => actions::dispatch(ctx, action, move || {
                set_email.set(String::new());
                set_activity.set(String::new());
            }),
            Err(message) => ctx.show_status(message),
        }
    };

    view! {
        <form id="signup-form" on:submit=on_submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    required
                    placeholder="your-email@school.edu"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    required
                    on:change=move |ev| set_activity.set(event_target_value(&ev))
                >
                    <For
                        each=move || options.get()
                        key=|option| option.value.clone()
                        children=move |option| {
                            let value = option.value.clone();
                            view! {
                                <option
                                    value=option.value
                                    prop:selected=move || activity.get() == value
                                >
                                    {option.label}
                                </option>
                            }
                        }
                    />
                </select>
            </div>
            <button type="submit">"Sign Up"</button>
        </form>
    }
}
