//! Delivery helpers for the three exclusion policies: one client, all
//! clients, and all clients except the sender.
//!
//! Delivery failures are logged and swallowed; a dead peer is torn down by its
//! own connection task, never by the sender of a broadcast.

use crate::domain::{ClientId, MessagePusher, Room, RoomEvent};

pub(crate) async fn send_to(
    pusher: &dyn MessagePusher,
    client_id: &ClientId,
    event: &RoomEvent,
) {
    if let Err(e) = pusher.push_to(client_id, event).await {
        tracing::warn!("Failed to push message to client {}: {}", client_id, e);
    }
}

pub(crate) async fn broadcast_all(
    pusher: &dyn MessagePusher,
    room: &Room,
    event: &RoomEvent,
) -> usize {
    deliver(pusher, room.client_ids(), event).await
}

pub(crate) async fn broadcast_except(
    pusher: &dyn MessagePusher,
    room: &Room,
    sender: &ClientId,
    event: &RoomEvent,
) -> usize {
    deliver(pusher, room.client_ids_except(sender), event).await
}

async fn deliver(pusher: &dyn MessagePusher, targets: Vec<ClientId>, event: &RoomEvent) -> usize {
    if targets.is_empty() {
        return 0;
    }
    match pusher.broadcast(targets, event).await {
        Ok(delivered) => delivered,
        Err(e) => {
            tracing::warn!("Failed to broadcast message: {}", e);
            0
        }
    }
}
