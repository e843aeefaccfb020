//! InMemory Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//! プロセス内の `Mutex<Room>` をそのまま保持します。
//!
//! 永続化は行いません。プロセスの再起動で Room の状態は失われます。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, MutexGuard};

use crate::domain::{Room, RoomRepository};

/// インメモリ Room Repository 実装
///
/// Room ドメインモデルを保持し、ドメイン層の RoomRepository trait を実装します（依存性の逆転）。
pub struct InMemoryRoomRepository {
    /// Room ドメインモデル
    room: Arc<Mutex<Room>>,
}

impl InMemoryRoomRepository {
    /// 新しい InMemoryRoomRepository を作成
    pub fn new(room: Arc<Mutex<Room>>) -> Self {
        Self { room }
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn acquire<'a>(&'a self) -> MutexGuard<'a, Room> {
        self.room.lock().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClientId, PlaybackMutation, RoomIdFactory, Timestamp};
    use std::time::Duration;

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - InMemoryRoomRepository の排他制御
    // - ロック中の変更がスナップショットに反映されること
    //
    // 【なぜこのテストが必要か】
    // - Room の状態変更は全て直列化されなければならない
    // - 時間経過タスクとクライアント要求が競合しないことを保証する
    // ========================================

    fn create_test_repository() -> InMemoryRoomRepository {
        let room = Arc::new(Mutex::new(Room::new(
            RoomIdFactory::generate().expect("Failed to generate RoomId"),
            Timestamp::new(0),
        )));
        InMemoryRoomRepository::new(room)
    }

    #[tokio::test]
    async fn test_changes_are_visible_in_snapshot() {
        // テスト項目: ロック中に行った変更がスナップショットに反映される
        // given (前提条件):
        let repo = create_test_repository();

        // when (操作):
        {
            let mut room = repo.acquire().await;
            let client = room.register_client(Timestamp::new(1));
            room.try_update(client.id, PlaybackMutation::Play, Timestamp::new(2));
        }
        let snapshot = repo.snapshot().await;

        // then (期待する結果):
        assert_eq!(snapshot.client_count(), 1);
        assert!(!snapshot.playback().paused());
        assert_eq!(snapshot.playback().last_update_by(), Some(ClientId::new(1)));
    }

    #[tokio::test]
    async fn test_acquire_is_exclusive() {
        // テスト項目: ロック保持中は他のタスクがロックを取得できない
        // given (前提条件):
        let repo = Arc::new(create_test_repository());
        let guard = repo.acquire().await;

        // when (操作):
        let contender = {
            let repo = repo.clone();
            tokio::spawn(async move {
                repo.acquire().await.register_client(Timestamp::new(0)).id
            })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;

        // then (期待する結果): ガードを解放するまで待たされる
        assert!(!contender.is_finished());
        drop(guard);
        assert_eq!(contender.await.unwrap(), ClientId::new(1));
    }
}
