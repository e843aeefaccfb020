//! UseCase: クライアント接続処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ConnectClientUseCase::execute() メソッド
//! - ID の割り当て、新規クライアントへの初期状態送信、既存クライアントへの参加通知
//!
//! ### なぜこのテストが必要か
//! - 新規クライアントは接続直後に現在の再生状態と参加者一覧を受け取る必要がある
//! - 既存クライアントには user_joined だけが届き、本人には届かないことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：最初のクライアントの接続
//! - 正常系：2 人目のクライアントの接続（既存クライアントへの通知）

use std::sync::Arc;

use watchparty_shared::time::Clock;

use crate::domain::{Client, MessagePusher, PusherChannel, RoomEvent, RoomRepository, Timestamp};

use super::broadcast::{broadcast_except, send_to};

/// クライアント接続のユースケース
pub struct ConnectClientUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
    clock: Arc<dyn Clock>,
}

impl ConnectClientUseCase {
    /// 新しい ConnectClientUseCase を作成
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
            clock,
        }
    }

    /// クライアント接続を実行
    ///
    /// 1. Registry に登録して ID を割り当てる
    /// 2. MessagePusher に送信チャンネルを登録する
    /// 3. 新規クライアントに `sync` と `users_update` を送信する
    /// 4. 他のクライアントに `user_joined` をブロードキャストする
    ///
    /// # Arguments
    ///
    /// * `sender` - クライアントへのメッセージ送信用チャンネル
    ///
    /// # Returns
    ///
    /// 登録されたクライアント（失敗することはない）
    pub async fn execute(&self, sender: PusherChannel) -> Client {
        let mut room = self.repository.acquire().await;
        let connected_at = Timestamp::new(self.clock.now_millis());
        let client = room.register_client(connected_at);

        self.message_pusher.register_client(client.id, sender).await;

        let pusher = self.message_pusher.as_ref();
        send_to(pusher, &client.id, &RoomEvent::Sync(room.playback())).await;
        send_to(pusher, &client.id, &RoomEvent::UsersUpdate(room.clients())).await;
        broadcast_except(
            pusher,
            &room,
            &client.id,
            &RoomEvent::UserJoined(client.clone()),
        )
        .await;

        tracing::info!(
            "Client {} connected as '{}' ({} online)",
            client.id,
            client.nickname,
            room.client_count()
        );
        client
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::ClientId,
        usecase::test_support::{NOW, TestRoom, drain},
    };
    use tokio::sync::mpsc;

    fn create_usecase(test_room: &TestRoom) -> ConnectClientUseCase {
        ConnectClientUseCase::new(
            test_room.repository.clone(),
            test_room.message_pusher.clone(),
            test_room.clock.clone(),
        )
    }

    #[tokio::test]
    async fn test_first_client_receives_sync_then_users_update() {
        // テスト項目: 最初のクライアントは id=1 で登録され、sync → users_update の順に受け取る
        // given (前提条件):
        let test_room = TestRoom::new();
        let usecase = create_usecase(&test_room);
        let (tx, mut rx) = mpsc::unbounded_channel();

        // when (操作):
        let client = usecase.execute(tx).await;

        // then (期待する結果):
        assert_eq!(client.id, ClientId::new(1));
        assert_eq!(client.nickname.as_str(), "User1");
        assert_eq!(client.connected_at, Timestamp::new(NOW));

        let frames = drain(&mut rx);
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0]["type"], "sync");
        assert_eq!(frames[0]["state"]["paused"], true);
        assert_eq!(frames[0]["state"]["currentTime"], 0.0);
        assert_eq!(frames[1]["type"], "users_update");
        assert_eq!(
            frames[1]["users"],
            serde_json::json!([{"id": 1, "nickname": "User1"}])
        );
    }

    #[tokio::test]
    async fn test_existing_clients_are_notified_of_new_client() {
        // テスト項目: 2 人目が接続すると既存のクライアントに user_joined が届く
        // given (前提条件):
        let test_room = TestRoom::new();
        let usecase = create_usecase(&test_room);
        let (_alice, mut alice_rx) = test_room.connect().await;

        // when (操作):
        let (tx, mut bob_rx) = mpsc::unbounded_channel();
        let bob = usecase.execute(tx).await;

        // then (期待する結果):
        assert_eq!(bob.id, ClientId::new(2));

        let alice_frames = drain(&mut alice_rx);
        assert_eq!(alice_frames.len(), 1);
        assert_eq!(alice_frames[0]["type"], "user_joined");
        assert_eq!(
            alice_frames[0]["user"],
            serde_json::json!({"id": 2, "nickname": "User2"})
        );

        let bob_frames = drain(&mut bob_rx);
        assert_eq!(bob_frames.len(), 2);
        assert_eq!(bob_frames[0]["type"], "sync");
        assert_eq!(bob_frames[1]["users"].as_array().unwrap().len(), 2);

        assert_eq!(test_room.snapshot().await.client_count(), 2);
    }
}
