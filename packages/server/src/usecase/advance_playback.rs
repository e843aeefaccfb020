//! UseCase: 再生位置の時間経過（ticker から呼ばれる）

use std::sync::Arc;

use crate::domain::{PlaybackPosition, RoomRepository};

/// 再生中の位置を経過時間分だけ進めるユースケース
///
/// 権限チェックを経由せず、`last_update_by` も変更しません。
/// 何もブロードキャストしません（クライアントは自身のプレイヤーで再生を進める）。
pub struct AdvancePlaybackUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl AdvancePlaybackUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// 再生中であれば位置を進め、進めた後の位置を返す
    ///
    /// 一時停止中は `None` を返し、状態は変わりません。
    pub async fn execute(&self, seconds: f64) -> Option<PlaybackPosition> {
        let mut room = self.repository.acquire().await;
        if !room.advance_playback(seconds) {
            return None;
        }
        let position = room.playback().current_time();
        tracing::trace!("Playback advanced to {:.1}s", position.value());
        Some(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::PlaybackMutation,
        usecase::{
            UpdatePlaybackUseCase,
            test_support::{TestRoom, drain},
        },
    };

    #[tokio::test]
    async fn test_advance_while_paused_is_noop() {
        // テスト項目: 一時停止中は位置が進まない
        // given (前提条件):
        let test_room = TestRoom::new();
        let usecase = AdvancePlaybackUseCase::new(test_room.repository.clone());

        // when (操作):
        let position = usecase.execute(1.0).await;

        // then (期待する結果):
        assert_eq!(position, None);
        assert_eq!(
            test_room.snapshot().await.playback().current_time(),
            PlaybackPosition::ZERO
        );
    }

    #[tokio::test]
    async fn test_advance_while_playing_is_silent() {
        // テスト項目: 再生中は位置が進み、所有者は変わらず、何も送信されない
        // given (前提条件):
        let test_room = TestRoom::new();
        let (alice, mut alice_rx) = test_room.connect().await;
        let (_bob, mut bob_rx) = test_room.connect().await;
        UpdatePlaybackUseCase::new(
            test_room.repository.clone(),
            test_room.message_pusher.clone(),
            test_room.clock.clone(),
        )
        .execute(alice.id, PlaybackMutation::Play)
        .await
        .unwrap();
        drain(&mut alice_rx);
        drain(&mut bob_rx);
        let usecase = AdvancePlaybackUseCase::new(test_room.repository.clone());

        // when (操作):
        usecase.execute(1.0).await;
        let position = usecase.execute(1.0).await;

        // then (期待する結果):
        assert_eq!(position.map(|p| p.value()), Some(2.0));
        let state = test_room.snapshot().await.playback();
        assert_eq!(state.last_update_by(), Some(alice.id));
        assert!(drain(&mut alice_rx).is_empty());
        assert!(drain(&mut bob_rx).is_empty());
    }
}
