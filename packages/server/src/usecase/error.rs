//! UseCase errors.

use thiserror::Error;

use crate::domain::ClientId;

/// The requesting client is not (or no longer) registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("client {0} is not connected")]
pub struct ClientNotConnected(pub ClientId);

/// 再生状態の更新エラー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UpdatePlaybackError {
    #[error(transparent)]
    NotConnected(#[from] ClientNotConnected),

    /// 優先度の高いクライアントが最後に更新したため拒否された
    #[error("client {requester} may not override the last update by {last_update_by:?}")]
    PermissionDenied {
        requester: ClientId,
        last_update_by: Option<ClientId>,
    },
}
