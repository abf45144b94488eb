//! Computed layout API
//!
//! Positioned boxes for client-side painters.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use seat_layout::{RenderedLayout, compute_layout};
use serde::Deserialize;
use shared::error::{ApiResponse, AppResult};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/guest/event/{event_id}/layout", get(get_layout))
}

#[derive(Debug, Deserialize)]
pub struct LayoutQuery {
    /// Table to highlight
    table: Option<i64>,
}

async fn get_layout(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Query(query): Query<LayoutQuery>,
) -> AppResult<Json<ApiResponse<RenderedLayout>>> {
    let event = state.load_event(&event_id).await?;
    let rendered = compute_layout(&event.layout, query.table);
    Ok(Json(ApiResponse::success(rendered)))
}
