//! Shared application state.

use std::sync::Arc;

use watchparty_shared::time::Clock;

use crate::{
    domain::{MessagePusher, RoomRepository},
    usecase::{
        AdvancePlaybackUseCase, CastVoteUseCase, ChangeNicknameUseCase, ConnectClientUseCase,
        DisconnectClientUseCase, GetRoomStateUseCase, RelayMessageUseCase, RequestSyncUseCase,
        RequestVoteStatusUseCase, UpdatePlaybackUseCase,
    },
};

/// Shared application state
///
/// Every use case shares the same Repository and MessagePusher, so they all
/// serialize on the same room lock.
pub struct AppState {
    /// ConnectClientUseCase（クライアント接続のユースケース）
    pub connect_client_usecase: Arc<ConnectClientUseCase>,
    /// DisconnectClientUseCase（クライアント切断のユースケース）
    pub disconnect_client_usecase: Arc<DisconnectClientUseCase>,
    /// ChangeNicknameUseCase（ニックネーム変更のユースケース）
    pub change_nickname_usecase: Arc<ChangeNicknameUseCase>,
    /// UpdatePlaybackUseCase（再生状態更新のユースケース）
    pub update_playback_usecase: Arc<UpdatePlaybackUseCase>,
    /// RequestSyncUseCase（再生状態再送のユースケース）
    pub request_sync_usecase: Arc<RequestSyncUseCase>,
    /// RelayMessageUseCase（メッセージ中継のユースケース）
    pub relay_message_usecase: Arc<RelayMessageUseCase>,
    /// CastVoteUseCase（管理者投票のユースケース）
    pub cast_vote_usecase: Arc<CastVoteUseCase>,
    /// RequestVoteStatusUseCase（投票状況取得のユースケース）
    pub request_vote_status_usecase: Arc<RequestVoteStatusUseCase>,
    /// AdvancePlaybackUseCase（再生位置の時間経過のユースケース）
    pub advance_playback_usecase: Arc<AdvancePlaybackUseCase>,
    /// GetRoomStateUseCase（ルーム状態取得のユースケース）
    pub get_room_state_usecase: Arc<GetRoomStateUseCase>,
}

impl AppState {
    /// Wire every use case to the given Repository, MessagePusher and Clock.
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            connect_client_usecase: Arc::new(ConnectClientUseCase::new(
                repository.clone(),
                message_pusher.clone(),
                clock.clone(),
            )),
            disconnect_client_usecase: Arc::new(DisconnectClientUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            )),
            change_nickname_usecase: Arc::new(ChangeNicknameUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            )),
            update_playback_usecase: Arc::new(UpdatePlaybackUseCase::new(
                repository.clone(),
                message_pusher.clone(),
                clock,
            )),
            request_sync_usecase: Arc::new(RequestSyncUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            )),
            relay_message_usecase: Arc::new(RelayMessageUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            )),
            cast_vote_usecase: Arc::new(CastVoteUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            )),
            request_vote_status_usecase: Arc::new(RequestVoteStatusUseCase::new(
                repository.clone(),
                message_pusher,
            )),
            advance_playback_usecase: Arc::new(AdvancePlaybackUseCase::new(repository.clone())),
            get_room_state_usecase: Arc::new(GetRoomStateUseCase::new(repository)),
        }
    }
}
