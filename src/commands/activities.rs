//! Activity Commands
//!
//! Fetch the board and sign participants up or out.

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{ActionAck, ActivityStore};

/// `GET /activities`
pub async fn list_activities(client: &ApiClient) -> Result<ActivityStore, ApiError> {
    let response = client.http.get(client.activities_url()).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Rejected { status: status.as_u16(), detail: None });
    }
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// `POST /activities/{name}/signup?email={email}`
pub async fn signup(client: &ApiClient, activity: &str, email: &str) -> Result<ActionAck, ApiError> {
    let url = client.activity_action_url(activity, "signup", email);
    client.send_action(client.http.post(url)).await
}

/// `DELETE /activities/{name}/unregister?email={email}`
pub async fn unregister(client: &ApiClient, activity: &str, email: &str) -> Result<ActionAck, ApiError> {
    let url = client.activity_action_url(activity, "unregister", email);
    client.send_action(client.http.delete(url)).await
}
