//! UseCase: 投票状況の要求（request_vote_status）

use std::sync::Arc;

use crate::domain::{ClientId, ElectionStatus, MessagePusher, RoomEvent, RoomRepository};

use super::{broadcast::send_to, error::ClientNotConnected};

/// 投票状況を要求元にだけ送るユースケース
pub struct RequestVoteStatusUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl RequestVoteStatusUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    pub async fn execute(&self, requester: ClientId) -> Result<ElectionStatus, ClientNotConnected> {
        let room = self.repository.acquire().await;
        if !room.is_connected(&requester) {
            return Err(ClientNotConnected(requester));
        }

        let status = room.election_status();
        send_to(
            self.message_pusher.as_ref(),
            &requester,
            &RoomEvent::VoteStatus(status.clone()),
        )
        .await;
        Ok(status)
    }
}
