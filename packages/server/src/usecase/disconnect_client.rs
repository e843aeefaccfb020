//! UseCase: クライアント切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectClientUseCase::execute() メソッド
//! - Registry からの削除、残りのクライアントへの user_left / users_update の通知
//!
//! ### なぜこのテストが必要か
//! - 正常な切断・エラーによる切断のどちらからも同じ処理が呼ばれる
//! - 2 回呼ばれても user_left が 2 回ブロードキャストされないこと（冪等性）を保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：クライアントの切断と通知
//! - エッジケース：同じクライアントの二重切断
//! - エッジケース：最後のクライアントの切断（通知対象なし）

use std::sync::Arc;

use crate::domain::{Client, ClientId, MessagePusher, RoomEvent, RoomRepository};

use super::{broadcast::broadcast_all, error::ClientNotConnected};

/// クライアント切断のユースケース
pub struct DisconnectClientUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl DisconnectClientUseCase {
    /// 新しい DisconnectClientUseCase を作成
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// クライアント切断を実行
    ///
    /// # Arguments
    ///
    /// * `client_id` - 切断するクライアントの ID
    ///
    /// # Returns
    ///
    /// * `Ok(Client)` - 削除されたクライアント
    /// * `Err(ClientNotConnected)` - 既に切断済み（何もブロードキャストしない）
    pub async fn execute(&self, client_id: &ClientId) -> Result<Client, ClientNotConnected> {
        let mut room = self.repository.acquire().await;
        let client = room
            .unregister_client(client_id)
            .ok_or(ClientNotConnected(*client_id))?;

        self.message_pusher.unregister_client(client_id).await;

        // 削除済みなので「全員」は切断したクライアント以外の全員
        let pusher = self.message_pusher.as_ref();
        broadcast_all(pusher, &room, &RoomEvent::UserLeft(client.id)).await;
        broadcast_all(pusher, &room, &RoomEvent::UsersUpdate(room.clients())).await;

        tracing::info!(
            "Client {} ('{}') disconnected ({} online)",
            client.id,
            client.nickname,
            room.client_count()
        );
        Ok(client)
    }
}
