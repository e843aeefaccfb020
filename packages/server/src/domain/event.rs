//! Outbound room events.
//!
//! Use cases describe what happened as a `RoomEvent`; the `MessagePusher`
//! implementation decides how it is encoded on the wire.

use serde_json::{Map, Value};

use super::{
    election::ElectionStatus,
    playback::PlaybackState,
    registry::Client,
    room::NicknameChange,
    value_object::ClientId,
};

/// Kind of client-authored frame that is relayed rather than interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayKind {
    Chat,
    Action,
    System,
    Danmaku,
}

impl RelayKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Action => "action",
            Self::System => "system",
            Self::Danmaku => "danmaku",
        }
    }
}

/// Client-authored frame relayed to the other clients unchanged.
///
/// `body` is every field of the received frame except `type`, untouched:
/// unknown fields, absent fields and field types all survive the relay.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayMessage {
    pub kind: RelayKind,
    pub body: Map<String, Value>,
}

impl RelayMessage {
    pub fn new(kind: RelayKind, body: Map<String, Value>) -> Self {
        Self { kind, body }
    }
}

/// Something every (or some) connected client should learn about.
#[derive(Debug, Clone, PartialEq)]
pub enum RoomEvent {
    Sync(PlaybackState),
    VideoChanged(PlaybackState),
    UsersUpdate(Vec<Client>),
    UserJoined(Client),
    UserLeft(ClientId),
    NicknameChanged(NicknameChange),
    Relay(RelayMessage),
    VoteStatus(ElectionStatus),
    AdminChanged {
        admin_id: Option<ClientId>,
        previous_admin_id: Option<ClientId>,
    },
}
