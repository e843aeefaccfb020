//! Dispatch of inbound text frames to the use cases.
//!
//! Malformed frames and out-of-range values are logged and dropped; the
//! connection stays open.

use crate::{
    domain::{
        ClientId, PlaybackMutation, PlaybackPosition, PlaybackRate, RelayKind, RelayMessage,
        VideoSource,
    },
    infrastructure::dto::websocket::{ClientMessage, RelayBody},
    ui::state::AppState,
};

/// Handle one text frame from `client_id`.
pub async fn route_message(state: &AppState, client_id: ClientId, text: &str) {
    let message = match serde_json::from_str::<ClientMessage>(text) {
        Ok(message) => message,
        Err(e) => {
            tracing::warn!("Dropping malformed frame from client {}: {}", client_id, e);
            return;
        }
    };
    tracing::debug!("Received {} from client {}", message.kind(), client_id);

    match message {
        ClientMessage::SetNickname { nickname } => {
            if let Err(e) = state
                .change_nickname_usecase
                .execute(client_id, nickname)
                .await
            {
                tracing::warn!("Failed to change nickname: {}", e);
            }
        }
        ClientMessage::Play => update_playback(state, client_id, PlaybackMutation::Play).await,
        ClientMessage::Pause => update_playback(state, client_id, PlaybackMutation::Pause).await,
        ClientMessage::Seek { time } => match PlaybackPosition::new(time) {
            Ok(position) => {
                update_playback(state, client_id, PlaybackMutation::Seek(position)).await
            }
            Err(e) => tracing::warn!("Dropping seek from client {}: {}", client_id, e),
        },
        ClientMessage::Ratechange { rate } => match PlaybackRate::new(rate) {
            Ok(rate) => update_playback(state, client_id, PlaybackMutation::RateChange(rate)).await,
            Err(e) => tracing::warn!("Dropping ratechange from client {}: {}", client_id, e),
        },
        ClientMessage::VideoChange {
            video_url,
            video_title,
        } => match VideoSource::new(video_url, video_title) {
            Ok(video) => {
                update_playback(state, client_id, PlaybackMutation::VideoChange(video)).await
            }
            Err(e) => tracing::warn!("Dropping video_change from client {}: {}", client_id, e),
        },
        ClientMessage::SyncRequest => {
            if let Err(e) = state.request_sync_usecase.execute(client_id).await {
                tracing::warn!("Failed to answer sync_request: {}", e);
            }
        }
        ClientMessage::Chat(body) => relay(state, client_id, RelayKind::Chat, body).await,
        ClientMessage::Action(body) => relay(state, client_id, RelayKind::Action, body).await,
        ClientMessage::System(body) => relay(state, client_id, RelayKind::System, body).await,
        ClientMessage::Danmaku(body) => relay(state, client_id, RelayKind::Danmaku, body).await,
        ClientMessage::VoteAdmin { candidate_id } => {
            if let Err(e) = state
                .cast_vote_usecase
                .execute(client_id, ClientId::new(candidate_id))
                .await
            {
                tracing::warn!("Failed to cast vote: {}", e);
            }
        }
        ClientMessage::RequestVoteStatus => {
            if let Err(e) = state.request_vote_status_usecase.execute(client_id).await {
                tracing::warn!("Failed to answer request_vote_status: {}", e);
            }
        }
    }
}

async fn update_playback(state: &AppState, client_id: ClientId, mutation: PlaybackMutation) {
    let kind = mutation.kind();
    if let Err(e) = state
        .update_playback_usecase
        .execute(client_id, mutation)
        .await
    {
        tracing::warn!("Rejected {}: {}", kind, e);
    }
}

async fn relay(state: &AppState, client_id: ClientId, kind: RelayKind, body: RelayBody) {
    let message = RelayMessage::new(kind, body);
    if let Err(e) = state.relay_message_usecase.execute(client_id, message).await {
        tracing::warn!("Failed to relay message: {}", e);
    }
}
