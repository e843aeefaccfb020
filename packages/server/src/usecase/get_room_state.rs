//! UseCase: Room の状態取得（HTTP API 用）

use std::sync::Arc;

use crate::domain::{Room, RoomRepository};

/// Room のスナップショットを取得するユースケース
pub struct GetRoomStateUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl GetRoomStateUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Room {
        self.repository.snapshot().await
    }
}
