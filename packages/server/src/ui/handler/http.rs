//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{infrastructure::dto::http::RoomDetailDto, ui::state::AppState};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Read-only snapshot of the room: playback state, clients and election
pub async fn room_state(State(state): State<Arc<AppState>>) -> Json<RoomDetailDto> {
    let room = state.get_room_state_usecase.execute().await;

    // Domain Model から DTO への変換
    Json(RoomDetailDto::from(&room))
}
