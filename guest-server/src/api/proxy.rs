//! Upstream pass-through API
//!
//! Forwards the three upstream calls 1:1: status and body come back
//! unchanged. Only a missing guest name, a missing configuration or a network
//! failure produce a local `{"error": ...}` body.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use guest_client::{ClientResult, RawResponse};
use serde::Deserialize;
use shared::error::ErrorCode;
use shared::models::CheckinRequest;
use shared::util::normalize_name;
use thiserror::Error;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/guest/event/{event_id}", get(get_event))
        .route("/api/guest/event/{event_id}/guest", get(lookup_guest))
        .route("/api/guest/event/{event_id}/guest/checkin", post(check_in))
}

/// Local failure of a proxy route
#[derive(Debug, Error)]
enum ProxyError {
    #[error("{}", ErrorCode::GuestNameRequired.message())]
    MissingName,
    #[error("Invalid request body")]
    InvalidBody,
    #[error("Failed to fetch event")]
    FetchEvent,
    #[error("Failed to fetch guest")]
    FetchGuest,
    #[error("Failed to check in")]
    CheckIn,
}

impl ProxyError {
    fn status(&self) -> StatusCode {
        match self {
            Self::MissingName => ErrorCode::GuestNameRequired.http_status(),
            Self::InvalidBody => StatusCode::BAD_REQUEST,
            Self::FetchEvent | Self::FetchGuest | Self::CheckIn => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct NameQuery {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NameBody {
    name: Option<String>,
}

/// Relay an upstream response, or the generic failure
fn relay(result: ClientResult<RawResponse>, failure: ProxyError) -> Response {
    match result {
        Ok(raw) => {
            let content_type = raw
                .content_type
                .unwrap_or_else(|| "application/json".to_string());
            (raw.status, [(header::CONTENT_TYPE, content_type)], raw.body).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Upstream pass-through failed");
            failure.into_response()
        }
    }
}

async fn get_event(State(state): State<AppState>, Path(event_id): Path<String>) -> Response {
    let Ok(upstream) = state.upstream() else {
        return ProxyError::FetchEvent.into_response();
    };
    relay(upstream.get_event_raw(&event_id).await, ProxyError::FetchEvent)
}

async fn lookup_guest(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Query(query): Query<NameQuery>,
) -> Response {
    let Some(name) = normalize_name(query.name.as_deref().unwrap_or_default()) else {
        return ProxyError::MissingName.into_response();
    };
    let Ok(upstream) = state.upstream() else {
        return ProxyError::FetchGuest.into_response();
    };
    relay(upstream.lookup_guest_raw(&event_id, &name).await, ProxyError::FetchGuest)
}

async fn check_in(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    body: Result<Json<NameBody>, JsonRejection>,
) -> Response {
    let Ok(Json(body)) = body else {
        return ProxyError::InvalidBody.into_response();
    };
    let Some(name) = normalize_name(body.name.as_deref().unwrap_or_default()) else {
        return ProxyError::MissingName.into_response();
    };
    let Ok(upstream) = state.upstream() else {
        return ProxyError::CheckIn.into_response();
    };
    relay(
        upstream.check_in_raw(&event_id, &CheckinRequest { name }).await,
        ProxyError::CheckIn,
    )
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::json;
    use shared::error::ErrorCode;

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_event_passthrough() {
        let (app, _upstream) = app_with_upstream().await;
        let response = get(&app, "/api/guest/event/party").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, party_event());
    }

    #[tokio::test]
    async fn test_upstream_status_passes_through() {
        let (app, _upstream) = app_with_upstream().await;
        let response = get(&app, "/api/guest/event/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({"error": "Event not found"}));

        let response = get(&app, "/api/guest/event/broken").await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_guest_lookup() {
        let (app, _upstream) = app_with_upstream().await;
        let response = get(&app, "/api/guest/event/party/guest?name=ALEX").await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["found"], true);
        assert_eq!(json["guest"]["table"], 2);

        let json = body_json(get(&app, "/api/guest/event/party/guest?name=Alx").await).await;
        assert_eq!(json["found"], false);
    }

    #[tokio::test]
    async fn test_missing_name_is_rejected_locally() {
        let app = unconfigured_app();
        for uri in [
            "/api/guest/event/party/guest",
            "/api/guest/event/party/guest?name=",
            "/api/guest/event/party/guest?name=%20%20",
        ] {
            let response = get(&app, uri).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(response.status(), ErrorCode::GuestNameRequired.http_status());
            assert_eq!(
                body_json(response).await,
                json!({"error": ErrorCode::GuestNameRequired.message()})
            );
        }
    }

    #[tokio::test]
    async fn test_check_in() {
        let (app, _upstream) = app_with_upstream().await;
        let response = send(&app, post_json("/api/guest/event/party/guest/checkin", r#"{"name":"Alex"}"#)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["arrivedAt"], "2026-06-01T18:30:00Z");

        let response = send(&app, post_json("/api/guest/event/party/guest/checkin", r#"{}"#)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = send(&app, post_json("/api/guest/event/party/guest/checkin", "not json")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unconfigured_is_generic_500() {
        let app = unconfigured_app();
        let response = get(&app, "/api/guest/event/party").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({"error": "Failed to fetch event"}));
    }

    #[tokio::test]
    async fn test_network_failure_is_generic_500() {
        let app = unreachable_app().await;
        let response = get(&app, "/api/guest/event/party/guest?name=Alex").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({"error": "Failed to fetch guest"}));
    }
}
