//! Thin client for the chat backend. No retries; callers decide what a
//! failure means for the UI.

use crate::model::{LeaderboardEntry, Message, MessageId, Profile};
use crate::validation::ProfileSubmission;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("server responded with status {0}")]
    Status(u16),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn fetch_messages(&self, room_id: &str) -> Result<Vec<Message>, ApiError> {
        let resp = Request::get(&self.url(&format!("rooms/{}/messages", segment(room_id)))).send().await?;
        json(resp).await
    }

    pub async fn archive_message(&self, id: MessageId) -> Result<(), ApiError> {
        let resp = Request::post(&self.url(&format!("messages/{id}/archive"))).send().await?;
        check(&resp)
    }

    pub async fn submit_profile(&self, id: MessageId, form: &ProfileSubmission) -> Result<(), ApiError> {
        let resp = Request::post(&self.url(&format!("messages/{id}/profile")))
            .json(form)?
            .send()
            .await?;
        check(&resp)
    }

    pub async fn fetch_profile(&self, user_id: &str) -> Result<Profile, ApiError> {
        let resp = Request::get(&self.url(&format!("users/{}", segment(user_id)))).send().await?;
        json(resp).await
    }

    pub async fn fetch_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ApiError> {
        let resp = Request::get(&self.url("leaderboard")).send().await?;
        json(resp).await
    }
}

/// Percent-encodes an id for use as a single path segment.
fn segment(id: &str) -> String {
    String::from(js_sys::encode_uri_component(id))
}

fn check(resp: &Response) -> Result<(), ApiError> {
    if resp.ok() {
        Ok(())
    } else {
        Err(ApiError::Status(resp.status()))
    }
}

async fn json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    check(&resp)?;
    Ok(resp.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let api = ApiClient::new("https://fit.example/api/");
        assert_eq!(api.url("/leaderboard"), "https://fit.example/api/leaderboard");
        assert_eq!(api.url("messages/3/archive"), "https://fit.example/api/messages/3/archive");
    }

    #[test]
    fn test_status_error_message() {
        assert_eq!(ApiError::Status(503).to_string(), "server responded with status 503");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn test_segment_escapes_path_characters() {
        assert_eq!(segment("run/club?a#b"), "run%2Fclub%3Fa%23b");
        assert_eq!(segment("room-42"), "room-42");
    }
}
