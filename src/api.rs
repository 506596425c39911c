//! HTTP client for the activity backend.
//!
//! The backend owns all persistence; this side only issues the four
//! mutating calls and turns failures into a user-facing message. Non-2xx
//! bodies are expected to carry `{error: string}`, with a per-action
//! generic message as the fallback, and transport failures collapse to the
//! same generic message after being logged.

use crate::models::{ActivityUpdate, ErrorBody, NewActivity};

pub const SAVE_FAILED: &str = "Failed to save the activity";
pub const UPDATE_FAILED: &str = "Failed to update the activity";
pub const DELETE_FAILED: &str = "Failed to delete the activity";
pub const CLEAR_FAILED: &str = "Failed to clear the database";

/// Error carrying the message to show the user. The transport detail, when
/// there is one, has already been logged.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// POST `/add_activity`.
    pub async fn add_activity(&self, activity: &NewActivity) -> Result<(), ApiError> {
        let url = format!("{}/add_activity", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(activity)
            .send()
            .await
            .map_err(|err| transport_error("add_activity", err, SAVE_FAILED))?;
        check_response(response, SAVE_FAILED).await
    }

    /// PUT `/edit_activity/{id}`.
    pub async fn edit_activity(&self, id: u64, update: &ActivityUpdate) -> Result<(), ApiError> {
        let url = format!("{}/edit_activity/{id}", self.base_url);
        let response = self
            .http
            .put(&url)
            .json(update)
            .send()
            .await
            .map_err(|err| transport_error("edit_activity", err, UPDATE_FAILED))?;
        check_response(response, UPDATE_FAILED).await
    }

    /// DELETE `/delete_activity/{id}`.
    pub async fn delete_activity(&self, id: u64) -> Result<(), ApiError> {
        let url = format!("{}/delete_activity/{id}", self.base_url);
        let response = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(|err| transport_error("delete_activity", err, DELETE_FAILED))?;
        check_response(response, DELETE_FAILED).await
    }

    /// POST `/clear_database`.
    pub async fn clear_database(&self) -> Result<(), ApiError> {
        let url = format!("{}/clear_database", self.base_url);
        let response = self
            .http
            .post(&url)
            .send()
            .await
            .map_err(|err| transport_error("clear_database", err, CLEAR_FAILED))?;
        check_response(response, CLEAR_FAILED).await
    }
}

fn transport_error(call: &str, err: reqwest::Error, fallback: &str) -> ApiError {
    tracing::error!(call, error = %err, "request failed");
    ApiError::new(fallback)
}

async fn check_response(response: reqwest::Response, fallback: &str) -> Result<(), ApiError> {
    if response.status().is_success() {
        return Ok(());
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|parsed| parsed.error)
        .filter(|msg| !msg.is_empty())
        .unwrap_or_else(|| fallback.to_string());

    tracing::warn!(%status, message, "backend rejected request");
    Err(ApiError::new(message))
}
