//! UI Components
//!
//! Leptos components that commit the board view model to the page.

mod activity_toolbar;
mod activity_list;
mod activity_card;
mod signup_form;
mod status_banner;

pub use activity_toolbar::ActivityToolbar;
pub use activity_list::ActivityList;
pub use activity_card::ActivityCardView;
pub use signup_form::SignupForm;
pub use status_banner::StatusBanner;
