//! UseCase: 再生状態の再送要求（sync_request）

use std::sync::Arc;

use crate::domain::{ClientId, MessagePusher, PlaybackState, RoomEvent, RoomRepository};

use super::{broadcast::send_to, error::ClientNotConnected};

/// 再生状態を要求元にだけ送り直すユースケース
pub struct RequestSyncUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl RequestSyncUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 現在の再生状態を `sync` として要求元に送信
    pub async fn execute(&self, requester: ClientId) -> Result<PlaybackState, ClientNotConnected> {
        let room = self.repository.acquire().await;
        if !room.is_connected(&requester) {
            return Err(ClientNotConnected(requester));
        }

        let state = room.playback();
        send_to(
            self.message_pusher.as_ref(),
            &requester,
            &RoomEvent::Sync(state.clone()),
        )
        .await;
        tracing::debug!("Sent sync to client {}", requester);
        Ok(state)
    }
}
