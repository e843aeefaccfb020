//! Repository trait 定義
//!
//! ドメイン層が必要とするデータアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;
use tokio::sync::MutexGuard;

use super::Room;

/// Room Repository trait
///
/// Room への排他的なアクセスを提供します。
/// 状態を変更する全ての処理（クライアントからの要求、定期的な時間経過）は
/// このガードを保持したまま実行されるため、変更とそのブロードキャストは直列化されます。
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Room の排他ロックを取得
    async fn acquire<'a>(&'a self) -> MutexGuard<'a, Room>;

    /// Room のスナップショットを取得
    async fn snapshot(&self) -> Room {
        self.acquire().await.clone()
    }
}
