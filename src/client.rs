use reqwest::Response;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use thiserror::Error;

use crate::models::feedback::{FeedbackFilter, FeedbackRecord, StatsSummary};

/// Errors surfaced by the API client. An `Api` error carries the server's
/// `{error}` payload so callers can show the server-provided message; there is
/// no retry or caching layer in front of it.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: u16, message: String },
}

/// Thin wrapper over the three feedback endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// `base_url` is the API root, e.g. `http://localhost:5000/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub async fn post_feedback(
        &self,
        name: &str,
        email: Option<&str>,
        message: &str,
        rating: i64,
    ) -> Result<FeedbackRecord, ClientError> {
        let body = json!({
            "name": name,
            "email": email,
            "message": message,
            "rating": rating,
        });

        let response = self
            .http
            .post(format!("{}/feedback", self.base_url))
            .json(&body)
            .send()
            .await?;

        parse_response(response).await
    }

    pub async fn fetch_feedbacks(
        &self,
        filter: &FeedbackFilter,
    ) -> Result<Vec<FeedbackRecord>, ClientError> {
        let response = self
            .http
            .get(format!("{}/feedback", self.base_url))
            .query(filter)
            .send()
            .await?;

        parse_response(response).await
    }

    pub async fn fetch_stats(&self) -> Result<StatsSummary, ClientError> {
        let response = self
            .http
            .get(format!("{}/feedback/stats", self.base_url))
            .send()
            .await?;

        parse_response(response).await
    }
}

async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let message = response
        .json::<Value>()
        .await
        .ok()
        .and_then(|body| {
            body.get("error")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| "Server error".to_string());

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped_from_base_url() {
        let client = ApiClient::new("http://localhost:5000/api///");
        assert_eq!(client.base_url, "http://localhost:5000/api");
    }
}
