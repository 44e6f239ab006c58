//! Activities API Client
//!
//! Frontend bindings to the backend REST endpoints, organized by domain.

mod activities;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;

use crate::error::ApiError;
use crate::models::ActionAck;

pub use activities::*;

/// Characters `encodeURIComponent` leaves alone: A-Z a-z 0-9 - _ . ! ~ * ' ( )
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a path segment or query value
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// HTTP client bound to the API origin
#[derive(Clone, Debug)]
pub struct ApiClient {
    base: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        let base: String = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// `{base}/activities`
    pub fn activities_url(&self) -> String {
        format!("{}/activities", self.base)
    }

    /// `{base}/activities/{name}/{action}?email={email}` with both values encoded
    pub fn activity_action_url(&self, name: &str, action: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/{}?email={}",
            self.base,
            encode_component(name),
            action,
            encode_component(email)
        )
    }

    /// Send a sign-up / unregister style request and interpret its reply
    async fn send_action(&self, request: reqwest::RequestBuilder) -> Result<ActionAck, ApiError> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        interpret_action_response(status, &body)
    }
}

/// Error payload of a rejected action
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Map a status code and raw body to an action result.
///
/// A body that is not JSON is a decode error even on non-2xx responses.
pub(crate) fn interpret_action_response(status: u16, body: &str) -> Result<ActionAck, ApiError> {
    if (200..300).contains(&status) {
        return Ok(serde_json::from_str::<ActionAck>(body)?);
    }

    let error: ErrorBody = serde_json::from_str(body)?;
    let detail = match error.detail {
        Some(serde_json::Value::String(text)) => Some(text),
        Some(serde_json::Value::Null) | None => None,
        Some(other) => Some(other.to_string()),
    };
    Err(ApiError::Rejected { status, detail })
}
