//! Action Dispatcher
//!
//! Turns sign-up / unregister requests into API calls, a status message and
//! a refetch on success.

use leptos::task::spawn_local;

use crate::commands;
use crate::context::AppContext;
use crate::error::ApiError;
use crate::models::ActionAck;
use crate::status::StatusMessage;
use crate::view_model::SelectOption;

/// Shown when the server rejects an action without a detail
pub const GENERIC_ERROR: &str = "An error occurred";
/// Shown in the list area when a fetch fails
pub const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SignUp { activity: String, email: String },
    Unregister { activity: String, email: String },
}

impl Action {
    fn network_failure_text(&self) -> &'static str {
        match self {
            Action::SignUp { .. } => "Failed to sign up. Please try again.",
            Action::Unregister { .. } => "Failed to unregister. Please try again.",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Action::SignUp { .. } => "signup",
            Action::Unregister { .. } => "unregister",
        }
    }
}

/// Check the sign-up form before sending anything.
///
/// The selected activity only counts if it is still among the offered options.
pub fn validate_signup(options: &[SelectOption], activity: &str, email: &str) -> Result<Action, StatusMessage> {
    let email = email.trim();
    let offered = !activity.is_empty() && options.iter().any(|o| o.value == activity);
    if !offered {
        return Err(StatusMessage::error("Please select an activity"));
    }
    if email.is_empty() {
        return Err(StatusMessage::error("Please enter your email"));
    }
    Ok(Action::SignUp {
        activity: activity.to_string(),
        email: email.to_string(),
    })
}

/// Status message for a finished action
pub fn outcome_status(action: &Action, result: &Result<ActionAck, ApiError>) -> StatusMessage {
    match result {
        Ok(ack) => StatusMessage::success(ack.message.clone()),
        Err(ApiError::Rejected { detail, .. }) => {
            StatusMessage::error(detail.clone().unwrap_or_else(|| GENERIC_ERROR.to_string()))
        }
        Err(ApiError::Network(_) | ApiError::Decode(_)) => StatusMessage::error(action.network_failure_text()),
    }
}

/// Only a successful action clears the form and refetches; failures leave
/// the store as it was
pub fn refreshes(result: &Result<ActionAck, ApiError>) -> bool {
    result.is_ok()
}

/// Send `action`, show its outcome, and on success run `on_success` and refetch
pub fn dispatch(ctx: AppContext, action: Action, on_success: impl FnOnce() + 'static) {
    let client = ctx.client();
    spawn_local(async move {
        let result = match &action {
            Action::SignUp { activity, email } => commands::signup(&client, activity, email).await,
            Action::Unregister { activity, email } => commands::unregister(&client, activity, email).await,
        };

        match &result {
            Ok(_) => log::info!("[Actions] {} ok: {:?}", action.label(), action),
            Err(e @ ApiError::Rejected { .. }) => log::warn!("[Actions] {} rejected: {}", action.label(), e),
            Err(e) => log::error!("[Actions] Error during {}: {}", action.label(), e),
        }

        ctx.show_status(outcome_status(&action, &result));
        if refreshes(&result) {
            on_success();
            ctx.reload();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup() -> Action {
        Action::SignUp { activity: "Chess Club".into(), email: "a@school.edu".into() }
    }

    fn unregister() -> Action {
        Action::Unregister { activity: "Chess Club".into(), email: "a@school.edu".into() }
    }

    fn options(names: &[&str]) -> Vec<SelectOption> {
        std::iter::once("")
            .chain(names.iter().copied())
            .map(|n| SelectOption { value: n.to_string(), label: n.to_string() })
            .collect()
    }

    #[test]
    fn test_success_uses_server_message() {
        let ack = ActionAck { message: "Signed up a@school.edu for Chess Club".into() };
        let status = outcome_status(&signup(), &Ok(ack));
        assert_eq!(status, StatusMessage::success("Signed up a@school.edu for Chess Club"));
    }

    #[test]
    fn test_rejection_shows_detail_verbatim() {
        let err = ApiError::Rejected { status: 400, detail: Some("Activity is full".into()) };
        assert_eq!(outcome_status(&signup(), &Err(err)), StatusMessage::error("Activity is full"));
    }

    #[test]
    fn test_rejection_without_detail_uses_fallback() {
        let err = ApiError::Rejected { status: 404, detail: None };
        assert_eq!(outcome_status(&unregister(), &Err(err)), StatusMessage::error(GENERIC_ERROR));
    }

    #[test]
    fn test_network_and_decode_failures_use_fixed_text() {
        let network = Err(ApiError::Network("offline".into()));
        let decode = Err(ApiError::Decode("expected value".into()));
        assert_eq!(outcome_status(&signup(), &network).text, "Failed to sign up. Please try again.");
        assert_eq!(outcome_status(&unregister(), &decode).text, "Failed to unregister. Please try again.");
    }

    #[test]
    fn test_only_success_refreshes() {
        let ack = ActionAck { message: "Unregistered a@school.edu".into() };
        assert!(refreshes(&Ok(ack)));
        assert!(!refreshes(&Err(ApiError::Rejected { status: 400, detail: Some("Activity is full".into()) })));
        assert!(!refreshes(&Err(ApiError::Rejected { status: 500, detail: None })));
        assert!(!refreshes(&Err(ApiError::Network("offline".into()))));
        assert!(!refreshes(&Err(ApiError::Decode("expected value".into()))));
    }

    #[test]
    fn test_validate_signup_ok() {
        let action = validate_signup(&options(&["Chess Club"]), "Chess Club", "  a@school.edu ").unwrap();
        assert_eq!(action, signup());
    }

    #[test]
    fn test_validate_signup_requires_selection() {
        let err = validate_signup(&options(&["Chess Club"]), "", "a@school.edu").unwrap_err();
        assert_eq!(err, StatusMessage::error("Please select an activity"));
    }

    #[test]
    fn test_validate_signup_rejects_filtered_out_selection() {
        assert!(validate_signup(&options(&["Drama"]), "Chess Club", "a@school.edu").is_err());
    }

    #[test]
    fn test_validate_signup_requires_email() {
        let err = validate_signup(&options(&["Chess Club"]), "Chess Club", "   ").unwrap_err();
        assert_eq!(err, StatusMessage::error("Please enter your email"));
    }
}
