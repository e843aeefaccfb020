//! HTTP API response DTOs.

use serde::Serialize;

use super::websocket::{PlaybackStateDto, VoteStatusDto};

/// Connected client with its connection time
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDetailDto {
    pub id: u64,
    pub nickname: String,
    /// RFC 3339
    pub connected_at: String,
}

/// Read-only snapshot of the room
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDetailDto {
    pub id: String,
    /// RFC 3339
    pub created_at: String,
    pub state: PlaybackStateDto,
    pub users: Vec<ClientDetailDto>,
    pub election: VoteStatusDto,
}
