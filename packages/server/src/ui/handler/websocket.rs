//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, Stream, StreamExt},
};
use tokio::sync::{mpsc, oneshot};

use crate::{domain::ClientId, ui::state::AppState};

use super::message_router::route_message;

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that receives messages from the rx channel and pushes them to the WebSocket sender.
///
/// This function handles the outbound message flow: every event addressed to
/// this client (via rx channel) is written to its WebSocket connection in order.
///
/// # Arguments
///
/// * `rx` - Channel receiver for messages addressed to this client
/// * `sender` - WebSocket sink to send messages to this client
///
/// # Returns
///
/// A `JoinHandle` for the spawned task
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

/// Reads frames from one client and routes them until the client leaves or
/// `shutdown_rx` fires.
///
/// Shutdown is only observed between frames, so a frame that is already being
/// routed finishes its broadcast before the loop returns.
async fn receive_loop<S>(
    mut receiver: S,
    state: Arc<AppState>,
    client_id: ClientId,
    mut shutdown_rx: oneshot::Receiver<()>,
) where
    S: Stream<Item = Result<Message, axum::Error>> + Unpin,
{
    loop {
        let msg = tokio::select! {
            msg = receiver.next() => msg,
            _ = &mut shutdown_rx => {
                tracing::debug!("Stopped reading from client {}", client_id);
                break;
            }
        };

        let msg = match msg {
            Some(Ok(msg)) => msg,
            Some(Err(e)) => {
                tracing::debug!("WebSocket error from client {}: {}", client_id, e);
                break;
            }
            None => break,
        };

        match msg {
            Message::Text(text) => route_message(&state, client_id, text.as_str()).await,
            Message::Close(_) => {
                tracing::debug!("Client {} requested close", client_id);
                break;
            }
            // Binary frames are not part of the protocol; ping/pong is handled by axum
            _ => {}
        }
    }
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (sender, receiver) = socket.split();

    // Register before reading anything so the welcome frames come first
    let (tx, rx) = mpsc::unbounded_channel();
    let client = state.connect_client_usecase.execute(tx).await;
    let client_id = client.id;

    let mut send_task = pusher_loop(rx, sender);

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let mut recv_task = tokio::spawn(receive_loop(
        receiver,
        state.clone(),
        client_id,
        shutdown_rx,
    ));

    // The writer can be aborted outright. The reader is asked to stop so an
    // in-flight use case is never cut off mid-broadcast.
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => {
            let _ = shutdown_tx.send(());
            if let Err(e) = (&mut recv_task).await {
                tracing::warn!("Reader task for client {} failed: {}", client_id, e);
            }
        }
    };

    // Teardown runs exactly once per connection; a second attempt is a no-op
    match state.disconnect_client_usecase.execute(&client_id).await {
        Ok(client) => tracing::debug!("Client {} ('{}') torn down", client.id, client.nickname),
        Err(e) => tracing::debug!("Skipped teardown: {}", e),
    }
}
