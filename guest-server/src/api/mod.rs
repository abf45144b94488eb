//! API routes for guest-server

pub mod guest_page;
pub mod health;
pub mod layout;
pub mod proxy;

use axum::Router;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::state::AppState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// UUID v4 request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<AppState> {
    Router::new()
        // Health API
        .merge(health::router())
        // Upstream pass-through API
        .merge(proxy::router())
        // Computed layout API
        .merge(layout::router())
        // Server-rendered guest page
        .merge(guest_page::router())
}

/// Build a fully configured application with all middleware and state
pub fn build_app(state: AppState) -> Router {
    build_router()
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Request ID - Generate unique ID for each request
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Stub upstream and request helpers shared by route tests

    use axum::body::{Body, to_bytes};
    use axum::extract::{Path, Query};
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{Value, json};
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    use super::build_app;
    use crate::config::Config;
    use crate::state::AppState;

    /// Running stub of the upstream event API
    pub struct Upstream {
        pub base: String,
        /// Number of `GET /event/{id}` calls served
        pub event_hits: Arc<AtomicUsize>,
    }

    impl Upstream {
        pub fn event_hits(&self) -> usize {
            self.event_hits.load(Ordering::SeqCst)
        }
    }

    pub fn party_event() -> Value {
        json!({
            "id": "party",
            "name": "Summer <Party>",
            "imageUrl": "https://img.example/hero.jpg",
            "hostMessage": "Welcome, friends!",
            "menu": ["Soup", {"name": "Steak", "description": "with fries"}],
            "layout": {
                "type": "custom",
                "tables": [
                    {"id": 1, "shape": "round", "render": {"leftPercent": 30, "topPercent": 50, "widthPercent": 10, "heightPercent": 10}},
                    {"id": 2, "shape": "round", "render": {"leftPercent": 50, "topPercent": 50, "widthPercent": 10, "heightPercent": 10}},
                    {"id": 3, "shape": "round", "render": {"leftPercent": 70, "topPercent": 50, "widthPercent": 10, "heightPercent": 10}}
                ],
                "metadata": {"aspectRatio": 1.5}
            }
        })
    }

    fn guest_for(name: &str) -> Value {
        match name.to_lowercase().as_str() {
            "alex" => json!({"found": true, "guest": {"name": "Alex", "table": 2}}),
            "sam" => json!({"found": true, "guest": {"name": "Sam", "table": null}}),
            "robin" => json!({"found": true, "guest": {"name": "Robin", "table": 42}}),
            _ => json!({"found": false, "suggestions": [{"name": "Alex"}]}),
        }
    }

    pub async fn spawn_upstream() -> Upstream {
        let event_hits = Arc::new(AtomicUsize::new(0));
        let hits = event_hits.clone();

        let app = Router::new()
            .route(
                "/event/{id}",
                axum::routing::get(move |Path(id): Path<String>| {
                    let hits = hits.clone();
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        match id.as_str() {
                            "party" => (StatusCode::OK, Json(party_event())),
                            "broken" => (StatusCode::BAD_GATEWAY, Json(json!({"error": "down"}))),
                            _ => (StatusCode::NOT_FOUND, Json(json!({"error": "Event not found"}))),
                        }
                    }
                }),
            )
            .route(
                "/event/{id}/guest",
                axum::routing::get(|Query(q): Query<HashMap<String, String>>| async move {
                    Json(guest_for(q.get("name").map(String::as_str).unwrap_or("")))
                }),
            )
            .route(
                "/event/{id}/guest/checkin",
                post(|Json(body): Json<Value>| async move {
                    match body["name"].as_str() {
                        Some(_) => (StatusCode::OK, Json(json!({"arrivedAt": "2026-06-01T18:30:00Z"}))),
                        None => (StatusCode::BAD_REQUEST, Json(json!({"error": "name required"}))),
                    }
                }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Upstream {
            base: format!("http://{addr}"),
            event_hits,
        }
    }

    /// App wired to a fresh stub upstream
    pub async fn app_with_upstream() -> (Router, Upstream) {
        let upstream = spawn_upstream().await;
        let state = AppState::new(&Config::with_upstream(upstream.base.clone()));
        (build_app(state), upstream)
    }

    /// App without an upstream base URL
    pub fn unconfigured_app() -> Router {
        build_app(AppState::new(&Config::from_source(|_| None)))
    }

    /// App pointed at a port nobody listens on
    pub async fn unreachable_app() -> Router {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        build_app(AppState::new(&Config::with_upstream(format!("http://{addr}"))))
    }

    pub async fn send(app: &Router, request: Request<Body>) -> Response {
        app.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(app: &Router, uri: &str) -> Response {
        send(app, Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    pub async fn body_json(response: Response) -> Value {
        serde_json::from_str(&body_string(response).await).unwrap()
    }
}
