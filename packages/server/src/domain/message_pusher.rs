//! MessagePusher trait 定義
//!
//! クライアントへのメッセージ送信の抽象化です。
//! UseCase 層はこの trait に依存し、WebSocket などの具体的な転送手段には依存しません。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{ClientId, MessagePushError, RoomEvent};

/// クライアントごとの送信チャンネル（エンコード済みのフレームを運ぶ）
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// メッセージ送信の抽象化
///
/// 1 回の呼び出しにつきイベントのエンコードは 1 回だけ行われます。
/// 閉じた接続への送信はエラーにせずスキップします（切断処理は接続自身が行う）。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// クライアントの送信チャンネルを登録
    async fn register_client(&self, client_id: ClientId, sender: PusherChannel);

    /// クライアントの送信チャンネルを登録解除
    async fn unregister_client(&self, client_id: &ClientId);

    /// 特定のクライアントにイベントを送信
    async fn push_to(&self, client_id: &ClientId, event: &RoomEvent)
    -> Result<(), MessagePushError>;

    /// 複数のクライアントにイベントをブロードキャスト
    ///
    /// 送信できた数を返します。
    async fn broadcast(
        &self,
        targets: Vec<ClientId>,
        event: &RoomEvent,
    ) -> Result<usize, MessagePushError>;
}
