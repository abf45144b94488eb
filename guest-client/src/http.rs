//! HTTP client for the upstream event API

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use shared::models::{CheckinRequest, CheckinResponse, Event, GuestLookup};
use std::time::Duration;

/// Upstream response kept verbatim for pass-through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

/// Client for `GET /event/{id}`, `GET /event/{id}/guest` and
/// `POST /event/{id}/guest/checkin`
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    base_url: Url,
}

impl UpstreamClient {
    /// Create a new client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let base_url = Url::parse(config.base_url.trim())
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(config.base_url.clone()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL with `segments` appended, each percent-encoded
    fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn event_url(&self, event_id: &str) -> ClientResult<Url> {
        self.endpoint(&["event", event_id])
    }

    fn guest_url(&self, event_id: &str, name: &str) -> ClientResult<Url> {
        let mut url = self.endpoint(&["event", event_id, "guest"])?;
        url.query_pairs_mut().append_pair("name", name);
        Ok(url)
    }

    fn checkin_url(&self, event_id: &str) -> ClientResult<Url> {
        self.endpoint(&["event", event_id, "guest", "checkin"])
    }

    async fn send_get(&self, url: Url) -> ClientResult<Response> {
        tracing::info!(method = "GET", path = url.path(), "Upstream request");
        let response = self.client.get(url).send().await?;
        tracing::debug!(status = %response.status(), "Upstream response");
        Ok(response)
    }

    async fn send_post(&self, url: Url, body: &CheckinRequest) -> ClientResult<Response> {
        tracing::info!(method = "POST", path = url.path(), "Upstream request");
        let response = self.client.post(url).json(body).send().await?;
        tracing::debug!(status = %response.status(), "Upstream response");
        Ok(response)
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                _ => Err(ClientError::Status {
                    status: status.as_u16(),
                    body: text,
                }),
            };
        }

        serde_json::from_str(&text).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    async fn into_raw(response: Response) -> ClientResult<RawResponse> {
        let status = response.status();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text().await?;
        Ok(RawResponse {
            status,
            content_type,
            body,
        })
    }

    // ========== Typed API ==========

    /// Event metadata and layout
    pub async fn get_event(&self, event_id: &str) -> ClientResult<Event> {
        let response = self.send_get(self.event_url(event_id)?).await?;
        Self::handle_response(response).await
    }

    /// Exact, case-insensitive guest lookup (matching happens upstream)
    pub async fn lookup_guest(&self, event_id: &str, name: &str) -> ClientResult<GuestLookup> {
        let response = self.send_get(self.guest_url(event_id, name)?).await?;
        Self::handle_response(response).await
    }

    /// Record a guest's arrival
    pub async fn check_in(&self, event_id: &str, name: &str) -> ClientResult<CheckinResponse> {
        let body = CheckinRequest {
            name: name.to_string(),
        };
        let response = self.send_post(self.checkin_url(event_id)?, &body).await?;
        Self::handle_response(response).await
    }

    // ========== Pass-through API ==========

    pub async fn get_event_raw(&self, event_id: &str) -> ClientResult<RawResponse> {
        let response = self.send_get(self.event_url(event_id)?).await?;
        Self::into_raw(response).await
    }

    pub async fn lookup_guest_raw(&self, event_id: &str, name: &str) -> ClientResult<RawResponse> {
        let response = self.send_get(self.guest_url(event_id, name)?).await?;
        Self::into_raw(response).await
    }

    pub async fn check_in_raw(&self, event_id: &str, body: &CheckinRequest) -> ClientResult<RawResponse> {
        let response = self.send_post(self.checkin_url(event_id)?, body).await?;
        Self::into_raw(response).await
    }
}
