//! Fixtures shared by the use case tests.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::{Mutex, mpsc};
use watchparty_shared::time::FixedClock;

use crate::{
    domain::{Client, Room, RoomIdFactory, RoomRepository, Timestamp},
    infrastructure::{message_pusher::WebSocketMessagePusher, repository::InMemoryRoomRepository},
};

use super::ConnectClientUseCase;

pub(crate) const NOW: i64 = 1_700_000_000_000;

pub(crate) struct TestRoom {
    pub repository: Arc<InMemoryRoomRepository>,
    pub message_pusher: Arc<WebSocketMessagePusher>,
    pub clock: Arc<FixedClock>,
}

impl TestRoom {
    pub fn new() -> Self {
        let room = Arc::new(Mutex::new(Room::new(
            RoomIdFactory::generate().unwrap(),
            Timestamp::new(NOW),
        )));
        Self {
            repository: Arc::new(InMemoryRoomRepository::new(room)),
            message_pusher: Arc::new(WebSocketMessagePusher::new(Arc::new(Mutex::new(
                HashMap::new(),
            )))),
            clock: Arc::new(FixedClock::new(NOW)),
        }
    }

    /// Connect a client and discard its welcome frames.
    pub async fn connect(&self) -> (Client, mpsc::UnboundedReceiver<String>) {
        let usecase = ConnectClientUseCase::new(
            self.repository.clone(),
            self.message_pusher.clone(),
            self.clock.clone(),
        );
        let (tx, mut rx) = mpsc::unbounded_channel();
        let client = usecase.execute(tx).await;
        drain(&mut rx);
        (client, rx)
    }

    pub async fn snapshot(&self) -> Room {
        self.repository.snapshot().await
    }
}

/// Take every frame currently queued for a client.
pub(crate) fn drain(rx: &mut mpsc::UnboundedReceiver<String>) -> Vec<serde_json::Value> {
    let mut frames = Vec::new();
    while let Ok(frame) = rx.try_recv() {
        frames.push(serde_json::from_str(&frame).expect("frame should be JSON"));
    }
    frames
}
