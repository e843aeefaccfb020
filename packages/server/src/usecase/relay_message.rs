//! UseCase: チャット・アクション・システム・弾幕メッセージの中継
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RelayMessageUseCase::execute() メソッド
//! - 送信者以外への中継と、フレームの内容（未知のフィールドを含む）がそのまま届くこと
//!
//! ### なぜこのテストが必要か
//! - 中継メッセージはサーバー側で解釈せず、内容を変えずに転送する必要がある
//! - 送信者本人にエコーバックしてはならない
//!
//! ### どのような状況を想定しているか
//! - 正常系：チャットメッセージの中継
//! - 正常系：弾幕メッセージの中継（track なし・未知のフィールド付き）
//! - エッジケース：1 人だけの部屋（宛先なし）

use std::sync::Arc;

use crate::domain::{ClientId, MessagePusher, RelayKind, RelayMessage, RoomEvent, RoomRepository};

use super::{broadcast::broadcast_except, error::ClientNotConnected};

/// メッセージ中継のユースケース
pub struct RelayMessageUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl RelayMessageUseCase {
    /// 新しい RelayMessageUseCase を作成
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// メッセージを送信者以外の全員に中継
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - 配信できたクライアント数
    /// * `Err(ClientNotConnected)` - 送信者が接続していない
    pub async fn execute(
        &self,
        sender: ClientId,
        message: RelayMessage,
    ) -> Result<usize, ClientNotConnected> {
        let room = self.repository.acquire().await;
        if !room.is_connected(&sender) {
            return Err(ClientNotConnected(sender));
        }

        let kind = message.kind;
        let delivered = broadcast_except(
            self.message_pusher.as_ref(),
            &room,
            &sender,
            &RoomEvent::Relay(message),
        )
        .await;

        if kind == RelayKind::Danmaku {
            tracing::info!(
                "Relayed danmaku from client {} to {} clients",
                sender,
                delivered
            );
        } else {
            tracing::debug!(
                "Relayed {} from client {} to {} clients",
                kind.as_str(),
                sender,
                delivered
            );
        }
        Ok(delivered)
    }
}
