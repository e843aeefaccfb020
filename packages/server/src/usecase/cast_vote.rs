//! UseCase: 管理者投票処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - CastVoteUseCase::execute() メソッド
//! - 投票状況のブロードキャストと、過半数到達時の管理者昇格
//!
//! ### なぜこのテストが必要か
//! - 管理者は優先度 0 になり、以降の再生操作の勝者が変わる
//! - 昇格時は admin_changed → vote_status_update の順で全員に届く必要がある
//!
//! ### どのような状況を想定しているか
//! - 正常系：過半数に届かない投票
//! - 正常系：過半数に届き管理者が決まる投票
//! - 正常系：投票先の変更（以前の票は取り消される）
//! - 異常系：未接続のクライアントからの投票

use std::sync::Arc;

use crate::domain::{ClientId, MessagePusher, RoomEvent, RoomRepository, VoteOutcome};

use super::{broadcast::broadcast_all, error::ClientNotConnected};

/// 管理者投票のユースケース
pub struct CastVoteUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl CastVoteUseCase {
    /// 新しい CastVoteUseCase を作成
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 投票を実行
    ///
    /// 1 人 1 票。別の候補者に投票すると以前の票は取り消されます。
    /// 接続中クライアント数の過半数に達した候補者が管理者になり、全ての票がクリアされます。
    ///
    /// # Returns
    ///
    /// * `Ok(VoteOutcome)` - 投票結果
    /// * `Err(ClientNotConnected)` - 投票者が接続していない
    pub async fn execute(
        &self,
        voter: ClientId,
        candidate: ClientId,
    ) -> Result<VoteOutcome, ClientNotConnected> {
        let mut room = self.repository.acquire().await;
        if !room.is_connected(&voter) {
            return Err(ClientNotConnected(voter));
        }

        let outcome = room.cast_vote(voter, candidate);
        let pusher = self.message_pusher.as_ref();
        if let VoteOutcome::Elected {
            admin_id,
            previous_admin_id,
        } = outcome
        {
            tracing::info!(
                "Client {} elected admin (previous: {:?})",
                admin_id,
                previous_admin_id
            );
            broadcast_all(
                pusher,
                &room,
                &RoomEvent::AdminChanged {
                    admin_id: Some(admin_id),
                    previous_admin_id,
                },
            )
            .await;
        } else {
            tracing::debug!("Client {} voted for client {}", voter, candidate);
        }
        broadcast_all(pusher, &room, &RoomEvent::VoteStatus(room.election_status())).await;

        Ok(outcome)
    }
}
