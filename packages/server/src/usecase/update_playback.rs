//! UseCase: 再生状態の更新処理（play / pause / seek / ratechange / video_change）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - UpdatePlaybackUseCase::execute() メソッド
//! - 優先度（weight）による更新の受理・拒否と、受理時のブロードキャスト
//!
//! ### なぜこのテストが必要か
//! - 競合する更新のどちらが勝つかは同期の正しさそのもの
//! - 拒否された更新は状態を変えず、何もブロードキャストしてはならない
//!
//! ### どのような状況を想定しているか
//! - 正常系：受理された更新が送信者以外に sync として届く
//! - 正常系：video_change は送信者を含む全員に届く
//! - 異常系：優先度の低いクライアントの更新が拒否される
//! - 異常系：未接続のクライアントからの更新

use std::sync::Arc;

use watchparty_shared::time::Clock;

use crate::domain::{
    ClientId, MessagePusher, PlaybackMutation, PlaybackState, RoomEvent, RoomRepository,
    Timestamp,
};

use super::{
    broadcast::{broadcast_all, broadcast_except},
    error::{ClientNotConnected, UpdatePlaybackError},
};

/// 再生状態更新のユースケース
pub struct UpdatePlaybackUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
    clock: Arc<dyn Clock>,
}

impl UpdatePlaybackUseCase {
    /// 新しい UpdatePlaybackUseCase を作成
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

    /// 再生状態の更新を実行
    ///
    /// 受理された場合:
    /// - `video_change` は `video_change` として全員にブロードキャスト
    /// - それ以外は `sync` として送信者以外にブロードキャスト
    ///
    /// # Returns
    ///
    /// * `Ok(PlaybackState)` - 更新後の再生状態
    /// * `Err(UpdatePlaybackError)` - 拒否された（状態は変わらず、何も送信されない）
    pub async fn execute(
        &self,
        requester: ClientId,
        mutation: PlaybackMutation,
    ) -> Result<PlaybackState, UpdatePlaybackError> {
        let mut room = self.repository.acquire().await;
        if !room.is_connected(&requester) {
            return Err(ClientNotConnected(requester).into());
        }

        let kind = mutation.kind();
        let is_video_change = matches!(mutation, PlaybackMutation::VideoChange(_));
        let now = Timestamp::new(self.clock.now_millis());
        if !room.try_update(requester, mutation, now) {
            return Err(UpdatePlaybackError::PermissionDenied {
                requester,
                last_update_by: room.playback().last_update_by(),
            });
        }

        let state = room.playback();
        let pusher = self.message_pusher.as_ref();
        if is_video_change {
            broadcast_all(pusher, &room, &RoomEvent::VideoChanged(state.clone())).await;
        } else {
            broadcast_except(pusher, &room, &requester, &RoomEvent::Sync(state.clone())).await;
        }

        tracing::info!(
            "Client {} {} accepted (t={:.1}, paused={}, rate={})",
            requester,
            kind,
            state.current_time().value(),
            state.paused(),
            state.playback_rate().value()
        );
        Ok(state)
    }
}
