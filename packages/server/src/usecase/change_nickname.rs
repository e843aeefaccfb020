//! UseCase: ニックネーム変更処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ChangeNicknameUseCase::execute() メソッド
//! - 入力の正規化（前後の空白除去、空文字のデフォルト値へのフォールバック）
//! - 通知の宛先と順序
//!
//! ### なぜこのテストが必要か
//! - 他のクライアントには nickname_changed → users_update の順で届く必要がある
//! - 本人には nickname_changed は届かず、users_update だけが届く
//!
//! ### どのような状況を想定しているか
//! - 正常系：通常のニックネーム変更
//! - 正常系：空白だけのニックネームは `User<id>` に戻る
//! - 異常系：未接続のクライアント

use std::sync::Arc;

use crate::domain::{ClientId, MessagePusher, Nickname, NicknameChange, RoomEvent, RoomRepository};

use super::{
    broadcast::{broadcast_all, broadcast_except},
    error::ClientNotConnected,
};

/// ニックネーム変更のユースケース
pub struct ChangeNicknameUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl ChangeNicknameUseCase {
    /// 新しい ChangeNicknameUseCase を作成
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// ニックネーム変更を実行
    ///
    /// 空（または未指定）のニックネームは `User<id>` として扱います。
    ///
    /// # Returns
    ///
    /// * `Ok(NicknameChange)` - 変更前後のニックネーム
    /// * `Err(ClientNotConnected)` - クライアントが接続していない
    pub async fn execute(
        &self,
        client_id: ClientId,
        requested: Option<String>,
    ) -> Result<NicknameChange, ClientNotConnected> {
        let requested = requested.and_then(|raw| Nickname::new(raw).ok());

        let mut room = self.repository.acquire().await;
        let change = room
            .rename_client(&client_id, requested)
            .ok_or(ClientNotConnected(client_id))?;

        let pusher = self.message_pusher.as_ref();
        broadcast_except(
            pusher,
            &room,
            &client_id,
            &RoomEvent::NicknameChanged(change.clone()),
        )
        .await;
        broadcast_all(pusher, &room, &RoomEvent::UsersUpdate(room.clients())).await;

        tracing::info!(
            "Client {} renamed '{}' -> '{}'",
            client_id,
            change.old,
            change.new
        );
        Ok(change)
    }
}
