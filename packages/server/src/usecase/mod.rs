//! UseCase layer: one use case per room operation.
//!
//! Every use case holds the room lock for its whole duration, including the
//! delivery of the events it produces.

mod advance_playback;
mod broadcast;
mod cast_vote;
mod change_nickname;
mod connect_client;
mod disconnect_client;
mod error;
mod get_room_state;
mod relay_message;
mod request_sync;
mod request_vote_status;
mod update_playback;

#[cfg(test)]
pub(crate) mod test_support;

pub use advance_playback::AdvancePlaybackUseCase;
pub use cast_vote::CastVoteUseCase;
pub use change_nickname::ChangeNicknameUseCase;
pub use connect_client::ConnectClientUseCase;
pub use disconnect_client::DisconnectClientUseCase;
pub use error::{ClientNotConnected, UpdatePlaybackError};
pub use get_room_state::GetRoomStateUseCase;
pub use relay_message::RelayMessageUseCase;
pub use request_sync::RequestSyncUseCase;
pub use request_vote_status::RequestVoteStatusUseCase;
pub use update_playback::UpdatePlaybackUseCase;
