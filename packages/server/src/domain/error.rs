//! Domain errors.

use thiserror::Error;

/// Value Object の生成エラー
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueObjectError {
    #[error("playback position must be a finite, non-negative number of seconds (got {0})")]
    InvalidPlaybackPosition(f64),

    #[error("playback rate must be a finite, positive number (got {0})")]
    InvalidPlaybackRate(f64),

    #[error("video url must not be empty")]
    EmptyVideoUrl,

    #[error("nickname must not be empty")]
    EmptyNickname,

    #[error("room id must not be empty")]
    EmptyRoomId,
}

/// MessagePusher の送信エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    #[error("client '{0}' is not registered")]
    ClientNotFound(String),

    #[error("failed to encode message: {0}")]
    EncodeFailed(String),

    #[error("failed to push message: {0}")]
    PushFailed(String),
}
