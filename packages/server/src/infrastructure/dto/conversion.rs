//! Conversion logic between DTOs and domain entities.

use watchparty_shared::time::timestamp_to_rfc3339;

use crate::domain::{
    Client, ElectionStatus, PlaybackState, RelayKind, RelayMessage, Room, RoomEvent,
};
use crate::infrastructure::dto::{
    http::{ClientDetailDto, RoomDetailDto},
    websocket::{PlaybackStateDto, ServerMessage, UserDto, VoteStatusDto},
};

// ========================================
// Domain Entity → DTO
// ========================================

impl From<&PlaybackState> for PlaybackStateDto {
    fn from(model: &PlaybackState) -> Self {
        Self {
            current_time: model.current_time().value(),
            paused: model.paused(),
            playback_rate: model.playback_rate().value(),
            video_url: model.video().map(|v| v.url().to_string()),
            video_title: model
                .video()
                .and_then(|v| v.title())
                .map(str::to_string),
            last_update_by: model.last_update_by().map(|id| id.value()),
            last_update_time: model.last_update_time().value(),
        }
    }
}

impl From<&Client> for UserDto {
    fn from(model: &Client) -> Self {
        Self {
            id: model.id.value(),
            nickname: model.nickname.as_str().to_string(),
        }
    }
}

impl From<&Client> for ClientDetailDto {
    fn from(model: &Client) -> Self {
        Self {
            id: model.id.value(),
            nickname: model.nickname.as_str().to_string(),
            connected_at: timestamp_to_rfc3339(model.connected_at.value()),
        }
    }
}

impl From<&ElectionStatus> for VoteStatusDto {
    fn from(model: &ElectionStatus) -> Self {
        Self {
            votes: model
                .vote_counts
                .iter()
                .map(|(candidate, count)| (candidate.value().to_string(), *count))
                .collect(),
            total_voters: model.total_voters,
            votes_needed: model.votes_needed,
            admin_id: model.admin_id.map(|id| id.value()),
        }
    }
}

impl From<&RelayMessage> for ServerMessage {
    fn from(model: &RelayMessage) -> Self {
        let body = model.body.clone();
        match model.kind {
            RelayKind::Chat => Self::Chat(body),
            RelayKind::Action => Self::Action(body),
            RelayKind::System => Self::System(body),
            RelayKind::Danmaku => Self::Danmaku(body),
        }
    }
}

impl From<&RoomEvent> for ServerMessage {
    fn from(event: &RoomEvent) -> Self {
        match event {
            RoomEvent::Sync(state) => Self::Sync {
                state: state.into(),
            },
            RoomEvent::VideoChanged(state) => Self::VideoChange {
                state: state.into(),
            },
            RoomEvent::UsersUpdate(clients) => Self::UsersUpdate {
                users: clients.iter().map(UserDto::from).collect(),
            },
            RoomEvent::UserJoined(client) => Self::UserJoined {
                user: client.into(),
            },
            RoomEvent::UserLeft(client_id) => Self::UserLeft {
                user_id: client_id.value(),
            },
            RoomEvent::NicknameChanged(change) => Self::NicknameChanged {
                user_id: change.client_id.value(),
                old_nickname: change.old.as_str().to_string(),
                new_nickname: change.new.as_str().to_string(),
            },
            RoomEvent::Relay(message) => message.into(),
            RoomEvent::VoteStatus(status) => Self::VoteStatusUpdate(status.into()),
            RoomEvent::AdminChanged {
                admin_id,
                previous_admin_id,
            } => Self::AdminChanged {
                admin_id: admin_id.map(|id| id.value()),
                old_admin_id: previous_admin_id.map(|id| id.value()),
            },
        }
    }
}

impl From<&Room> for RoomDetailDto {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id.as_str().to_string(),
            created_at: timestamp_to_rfc3339(room.created_at.value()),
            state: (&room.playback()).into(),
            users: room.clients().iter().map(ClientDetailDto::from).collect(),
            election: (&room.election_status()).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ClientId, Nickname, NicknameChange, PlaybackMutation, PlaybackPosition, RoomIdFactory,
        Timestamp, VideoSource,
    };

    fn create_room() -> Room {
        Room::new(RoomIdFactory::generate().unwrap(), Timestamp::new(0))
    }

    #[test]
    fn test_playback_state_to_dto() {
        // テスト項目: 再生状態がクライアント向け DTO に変換される
        // given (前提条件):
        let mut room = create_room();
        let client = room.register_client(Timestamp::new(0));
        let video = VideoSource::new(
            "https://example.com/v.mp4".to_string(),
            Some("Movie".to_string()),
        )
        .unwrap();
        room.try_update(client.id, PlaybackMutation::VideoChange(video), Timestamp::new(10));
        room.try_update(
            client.id,
            PlaybackMutation::Seek(PlaybackPosition::new(12.5).unwrap()),
            Timestamp::new(20),
        );

        // when (操作):
        let dto = PlaybackStateDto::from(&room.playback());

        // then (期待する結果):
        assert_eq!(dto.current_time, 12.5);
        assert!(dto.paused);
        assert_eq!(dto.playback_rate, 1.0);
        assert_eq!(dto.video_url.as_deref(), Some("https://example.com/v.mp4"));
        assert_eq!(dto.video_title.as_deref(), Some("Movie"));
        assert_eq!(dto.last_update_by, Some(1));
        assert_eq!(dto.last_update_time, 20);
    }

    #[test]
    fn test_room_event_to_server_message() {
        // テスト項目: ドメインイベントがサーバーメッセージ DTO に変換される
        // given (前提条件):
        let change = NicknameChange {
            client_id: ClientId::new(1),
            old: Nickname::default_for(ClientId::new(1)),
            new: Nickname::new("alice".to_string()).unwrap(),
        };
        let events = [
            (
                RoomEvent::UserLeft(ClientId::new(4)),
                ServerMessage::UserLeft { user_id: 4 },
            ),
            (
                RoomEvent::NicknameChanged(change),
                ServerMessage::NicknameChanged {
                    user_id: 1,
                    old_nickname: "User1".to_string(),
                    new_nickname: "alice".to_string(),
                },
            ),
            (
                RoomEvent::AdminChanged {
                    admin_id: Some(ClientId::new(2)),
                    previous_admin_id: None,
                },
                ServerMessage::AdminChanged {
                    admin_id: Some(2),
                    old_admin_id: None,
                },
            ),
        ];

        // when (操作) / then (期待する結果):
        for (event, expected) in events {
            assert_eq!(ServerMessage::from(&event), expected);
        }
    }

    #[test]
    fn test_relay_message_keeps_body() {
        // テスト項目: 中継メッセージの本文は DTO に変換しても変わらない
        // given (前提条件):
        let body = serde_json::json!({
            "content": "8888",
            "color": "#ff0000",
            "size": "large",
            "sender": "bob",
            "lane": "top",
        });
        let relay = RelayMessage::new(RelayKind::Danmaku, body.as_object().unwrap().clone());

        // when (操作):
        let message = ServerMessage::from(&relay);

        // then (期待する結果):
        let mut expected = body;
        expected["type"] = "danmaku".into();
        assert_eq!(serde_json::to_value(&message).unwrap(), expected);
    }

    #[test]
    fn test_room_to_detail_dto() {
        // テスト項目: Room が HTTP 用の詳細 DTO に変換される
        // given (前提条件):
        let mut room = create_room();
        room.register_client(Timestamp::new(1672531200000));
        room.register_client(Timestamp::new(1672531200000));
        room.cast_vote(ClientId::new(1), ClientId::new(2));

        // when (操作):
        let dto = RoomDetailDto::from(&room);

        // then (期待する結果):
        assert_eq!(dto.id, room.id.as_str());
        assert_eq!(dto.users.len(), 2);
        assert_eq!(dto.users[1].nickname, "User2");
        assert!(dto.users[0].connected_at.starts_with("2023-01-01T00:00:00"));
        assert_eq!(dto.election.votes.get("2"), Some(&1));
        assert_eq!(dto.election.votes_needed, 2);
    }
}
