//! WebSocket message DTOs.
//!
//! Every frame is a JSON object tagged by `type` (snake_case) with camelCase
//! fields.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Frames sent by clients.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ClientMessage {
    SetNickname {
        #[serde(default)]
        nickname: Option<String>,
    },
    Play,
    Pause,
    Seek {
        time: f64,
    },
    Ratechange {
        rate: f64,
    },
    VideoChange {
        video_url: String,
        #[serde(default)]
        video_title: Option<String>,
    },
    SyncRequest,
    Chat(RelayBody),
    Action(RelayBody),
    System(RelayBody),
    Danmaku(RelayBody),
    VoteAdmin {
        candidate_id: u64,
    },
    RequestVoteStatus,
}

impl ClientMessage {
    /// Wire name of the message type, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SetNickname { .. } => "set_nickname",
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Seek { .. } => "seek",
            Self::Ratechange { .. } => "ratechange",
            Self::VideoChange { .. } => "video_change",
            Self::SyncRequest => "sync_request",
            Self::Chat(_) => "chat",
            Self::Action(_) => "action",
            Self::System(_) => "system",
            Self::Danmaku(_) => "danmaku",
            Self::VoteAdmin { .. } => "vote_admin",
            Self::RequestVoteStatus => "request_vote_status",
        }
    }
}

/// Fields of a relayed frame other than `type`, kept exactly as received.
pub type RelayBody = Map<String, Value>;

/// Playback state as seen by clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackStateDto {
    pub current_time: f64,
    pub paused: bool,
    pub playback_rate: f64,
    pub video_url: Option<String>,
    pub video_title: Option<String>,
    pub last_update_by: Option<u64>,
    /// Unix milliseconds.
    pub last_update_time: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: u64,
    pub nickname: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteStatusDto {
    /// Vote count keyed by candidate id (JSON object keys are strings).
    pub votes: BTreeMap<String, usize>,
    pub total_voters: usize,
    pub votes_needed: usize,
    pub admin_id: Option<u64>,
}

/// Frames sent by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ServerMessage {
    Sync {
        state: PlaybackStateDto,
    },
    VideoChange {
        state: PlaybackStateDto,
    },
    UsersUpdate {
        users: Vec<UserDto>,
    },
    UserJoined {
        user: UserDto,
    },
    UserLeft {
        user_id: u64,
    },
    NicknameChanged {
        user_id: u64,
        old_nickname: String,
        new_nickname: String,
    },
    Chat(RelayBody),
    Action(RelayBody),
    System(RelayBody),
    Danmaku(RelayBody),
    VoteStatusUpdate(VoteStatusDto),
    AdminChanged {
        admin_id: Option<u64>,
        old_admin_id: Option<u64>,
    },
}
