//! Guest page routes
//!
//! `GET /guest/{event_id}?name=` looks a guest up and renders the page,
//! `POST /guest/{event_id}` with a `name` form field also records the arrival.

use axum::{
    Form, Router,
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use guest_client::GuestSession;
use seat_layout::compute_layout;
use serde::Deserialize;
use shared::error::{AppError, ErrorCategory, ErrorCode};
use shared::util::normalize_name;

use crate::page::{GuestPage, render_error_page, render_guest_page};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/guest/{event_id}", get(show_page).post(check_in))
}

#[derive(Debug, Default, Deserialize)]
pub struct NameParams {
    name: Option<String>,
}

async fn show_page(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Query(params): Query<NameParams>,
) -> Response {
    render(&state, &event_id, params.name.as_deref(), false).await
}

async fn check_in(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Form(params): Form<NameParams>,
) -> Response {
    render(&state, &event_id, params.name.as_deref(), true).await
}

fn error_page(err: AppError) -> Response {
    if err.code.category() == ErrorCategory::System {
        tracing::error!(code = %err.code, message = %err.message, "Guest page failed");
    }
    let title = match err.code {
        ErrorCode::EventNotFound => "Event not found",
        _ => "Something went wrong",
    };
    let html = render_error_page(title, &err.message, err.is_retryable());
    (err.http_status(), Html(html)).into_response()
}

/// Each request builds its own `GuestSession`, so concurrent requests never
/// share lookup state and every response reflects only its own submission.
async fn render(state: &AppState, event_id: &str, name: Option<&str>, check_in: bool) -> Response {
    let event = match state.load_event(event_id).await {
        Ok(event) => event,
        Err(err) => return error_page(err),
    };

    let mut session = GuestSession::new();
    let mut notice = None;

    if let Some(name) = name.and_then(normalize_name) {
        let upstream = match state.upstream() {
            Ok(upstream) => upstream,
            Err(err) => return error_page(err),
        };

        let ticket = session.begin(&name);
        let result = upstream.lookup_guest(event_id, &name).await;
        session.complete(ticket, &name, result);

        if check_in
            && let Some(guest) = session.guest()
            && !guest.has_arrived()
        {
            let guest_name = guest.name.clone();
            match upstream.check_in(event_id, &guest_name).await {
                Ok(response) => {
                    tracing::info!(event_id, guest = %guest_name, "Guest checked in");
                    session.record_arrival(response.arrived_at);
                }
                Err(e) => {
                    tracing::error!(event_id, error = %e, "Check-in failed");
                    notice = Some(ErrorCode::CheckinFailed.message());
                }
            }
        }
    }

    let layout = session
        .guest()
        .map(|guest| compute_layout(&event.layout, guest.table));

    Html(render_guest_page(&GuestPage {
        event: &event,
        lookup: session.state(),
        layout: layout.as_ref(),
        notice,
    }))
    .into_response()
}
